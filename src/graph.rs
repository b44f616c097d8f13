// License: MIT
// Copyright © 2025 the microgrid-topology-viz authors

//! A graph representation of the electrical nodes that are part of a
//! microgrid, and the connections between them.

mod creation;
mod retrieval;
mod validation;

pub mod iterators;

#[cfg(test)]
mod test_utils;

use crate::{Edge, Node};
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

/// `Node`s stored in an `UnGraph` instance can be addressed with
/// `NodeIndex`es.
///
/// `NodeIndexMap` stores the corresponding `NodeIndex` for any `node_id`, so
/// that nodes in the `UnGraph` can be retrieved from their `node_id`s.
pub(crate) type NodeIndexMap = HashMap<u64, NodeIndex>;

/// `Edge`s are not stored in the `UnGraph` instance, so we need to store them
/// separately.
///
/// `EdgeMap` can be used to lookup the `Edge` for any pair of endpoint
/// `NodeIndex` values, keyed in the edge's recorded orientation.
pub(crate) type EdgeMap<E> = HashMap<(NodeIndex, NodeIndex), E>;

/// A graph representation of the electrical nodes of a microgrid and the
/// connections between them.
///
/// Electrical topologies can be meshed and have no distinguished root, so the
/// underlying graph is undirected.  Flow direction is an hour-by-hour display
/// property, resolved by [`normalize_hour`][crate::normalize_hour], not a
/// structural one.
pub struct TopologyGraph<N, E>
where
    N: Node,
    E: Edge,
{
    graph: UnGraph<N, ()>,
    node_indices: NodeIndexMap,
    edges: EdgeMap<E>,
}
