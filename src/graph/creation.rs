// License: MIT
// Copyright © 2025 the microgrid-topology-viz authors

//! Methods for creating [`TopologyGraph`] instances from given nodes and
//! connections.

use petgraph::graph::UnGraph;
use tracing::warn;

use crate::{Edge, Error, Node};

use super::{EdgeMap, NodeIndexMap, TopologyGraph};

/// `TopologyGraph` instantiation.
impl<N, E> TopologyGraph<N, E>
where
    N: Node,
    E: Edge,
{
    /// Creates a new [`TopologyGraph`] from the given nodes and connections.
    ///
    /// Returns an error if the topology is invalid.
    pub fn try_new<NodeIterator: IntoIterator<Item = N>, EdgeIterator: IntoIterator<Item = E>>(
        nodes: NodeIterator,
        connections: EdgeIterator,
    ) -> Result<Self, Error> {
        let (graph, indices) = Self::create_graph(nodes)?;

        let mut tg = Self {
            graph,
            node_indices: indices,
            edges: EdgeMap::new(),
        };
        tg.add_connections(connections)?;

        tg.validate()?;

        Ok(tg)
    }

    fn create_graph(
        nodes: impl IntoIterator<Item = N>,
    ) -> Result<(UnGraph<N, ()>, NodeIndexMap), Error> {
        let mut graph = UnGraph::new_undirected();
        let mut indices = NodeIndexMap::new();

        for node in nodes {
            let nid = node.node_id();

            if indices.contains_key(&nid) {
                return Err(Error::invalid_topology(format!(
                    "Duplicate node ID found: {nid}"
                )));
            }

            let idx = graph.add_node(node);
            indices.insert(nid, idx);
        }

        Ok((graph, indices))
    }

    fn add_connections(&mut self, connections: impl IntoIterator<Item = E>) -> Result<(), Error> {
        for connection in connections {
            let sid = connection.source();
            let did = connection.destination();

            if sid == did {
                return Err(Error::invalid_connection(format!(
                    "Connection:({sid}, {did}) Can't connect a node to itself."
                )));
            }
            for nid in [sid, did] {
                if !self.node_indices.contains_key(&nid) {
                    return Err(Error::invalid_connection(format!(
                        "Connection:({sid}, {did}) Can't find a node with ID {nid}"
                    )));
                }
            }

            let source_idx = self.node_indices[&sid];
            let dest_idx = self.node_indices[&did];
            if self.edges.contains_key(&(source_idx, dest_idx))
                || self.edges.contains_key(&(dest_idx, source_idx))
            {
                // The same electrical connection listed twice; keep the
                // first copy and carry on.
                warn!("Connection:({sid}, {did}) Duplicate connection between nodes; skipping.");
                continue;
            }
            self.edges.insert((source_idx, dest_idx), connection);
            self.graph.update_edge(source_idx, dest_idx, ());
        }

        Ok(())
    }
}
