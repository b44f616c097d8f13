// License: MIT
// Copyright © 2025 the microgrid-topology-viz authors

//! Methods for validating a [`TopologyGraph`].

use tracing::warn;

use crate::{Edge, Error, Node};

use super::TopologyGraph;

impl<N, E> TopologyGraph<N, E>
where
    N: Node,
    E: Edge,
{
    /// Validates the graph after creation.
    ///
    /// Meshed and disconnected topologies are legal for display purposes, so
    /// this only checks internal consistency and warns about nodes that have
    /// no connections at all.
    pub(super) fn validate(&self) -> Result<(), Error> {
        if self.edges.len() != self.graph.edge_count() {
            return Err(Error::internal(format!(
                "Edge map has {} entries but the graph has {} edges.",
                self.edges.len(),
                self.graph.edge_count()
            )));
        }

        for index in self.graph.node_indices() {
            if self.graph.neighbors(index).next().is_none() {
                warn!(
                    "Node {} is not connected to any other node.",
                    self.graph[index].node_id()
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::test_utils::TopologyBuilder;
    use crate::NodeGroup;

    #[test]
    fn test_isolated_nodes_are_legal() {
        let mut builder = TopologyBuilder::new();
        let bus = builder.bus_load_chain(2);
        let generator = builder.generator();
        builder.connect(generator, bus);
        builder.add_node(NodeGroup::Controller);

        let graph = builder.build();
        assert!(graph.is_ok_and(|g| g.nodes().count() == 5));
    }

    #[test]
    fn test_meshed_topology_is_legal() {
        let mut builder = TopologyBuilder::new();
        let a = builder.bus();
        let b = builder.bus();
        let c = builder.bus();
        builder.connect(a, b);
        builder.connect(b, c);
        builder.connect(c, a);

        let graph = builder.build();
        assert!(graph.is_ok_and(|g| g.connections().count() == 3));
    }
}
