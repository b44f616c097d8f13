// License: MIT
// Copyright © 2025 the microgrid-topology-viz authors

//! Methods for retrieving nodes and connections from a [`TopologyGraph`].

use crate::iterators::{Connections, Neighbors, Nodes};
use crate::{Edge, Error, Node, TopologyGraph};

/// Node and connection retrieval.
impl<N, E> TopologyGraph<N, E>
where
    N: Node,
    E: Edge,
{
    /// Returns the node with the given `node_id`, if it exists.
    pub fn node(&self, node_id: u64) -> Result<&N, Error> {
        self.node_indices
            .get(&node_id)
            .map(|i| &self.graph[*i])
            .ok_or_else(|| Error::node_not_found(format!("Node with id {} not found.", node_id)))
    }

    /// Returns an iterator over the nodes in the graph.
    pub fn nodes(&self) -> Nodes<N> {
        Nodes {
            iter: self.graph.raw_nodes().iter(),
        }
    }

    /// Returns an iterator over the connections in the graph.
    pub fn connections(&self) -> Connections<N, E> {
        Connections {
            tg: self,
            iter: self.graph.raw_edges().iter(),
        }
    }

    /// Returns the connection between the two given nodes, if one exists.
    ///
    /// The lookup ignores the recorded orientation, so `connection(a, b)` and
    /// `connection(b, a)` return the same connection.
    pub fn connection(&self, node_a: u64, node_b: u64) -> Result<&E, Error> {
        let not_found = || {
            Error::edge_not_found(format!(
                "No connection between nodes {} and {}.",
                node_a, node_b
            ))
        };

        let idx_a = *self.node_indices.get(&node_a).ok_or_else(not_found)?;
        let idx_b = *self.node_indices.get(&node_b).ok_or_else(not_found)?;

        self.edges
            .get(&(idx_a, idx_b))
            .or_else(|| self.edges.get(&(idx_b, idx_a)))
            .ok_or_else(not_found)
    }

    /// Returns an iterator over the neighbors of the node with the given
    /// `node_id`.
    ///
    /// Returns an error if the given `node_id` does not exist.
    pub fn neighbors(&self, node_id: u64) -> Result<Neighbors<N>, Error> {
        self.node_indices
            .get(&node_id)
            .map(|&index| Neighbors {
                graph: &self.graph,
                iter: self.graph.neighbors(index),
            })
            .ok_or_else(|| Error::node_not_found(format!("Node with id {} not found.", node_id)))
    }
}
