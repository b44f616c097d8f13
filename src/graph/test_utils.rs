// License: MIT
// Copyright © 2025 the microgrid-topology-viz authors

//! This module is only compiled when running unit tests and contains features
//! that are shared by all tests of the `graph` module.
//!
//! - the `TestNode` and `TestLink` types, which implement the `Node` and
//!   `Edge` traits respectively.
//! - the `TopologyBuilder`, which can declaratively build topologies for use
//!   in tests.

use crate::{Edge, Error, Node, NodeGroup, TopologyGraph};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestNode(u64, NodeGroup);

impl TestNode {
    pub(crate) fn new(id: u64, group: NodeGroup) -> Self {
        TestNode(id, group)
    }
}

impl Node for TestNode {
    fn node_id(&self) -> u64 {
        self.0
    }

    fn group(&self) -> NodeGroup {
        self.1
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestLink(u64, u64);

impl TestLink {
    pub(crate) fn new(source: u64, destination: u64) -> Self {
        TestLink(source, destination)
    }
}

impl Edge for TestLink {
    fn source(&self) -> u64 {
        self.0
    }

    fn destination(&self) -> u64 {
        self.1
    }
}

/// Represents a node added to the `TopologyBuilder`.
#[derive(Eq, Hash, PartialEq, Copy, Clone)]
pub(crate) struct NodeHandle(u64);

impl NodeHandle {
    /// Returns the node ID of the node.
    #[allow(dead_code)]
    pub(crate) fn node_id(&self) -> u64 {
        self.0
    }
}

/// A builder for creating topologies easily, for use in tests.
pub(crate) struct TopologyBuilder {
    nodes: Vec<TestNode>,
    connections: Vec<TestLink>,
    next_id: u64,
}

impl TopologyBuilder {
    /// Creates a new `TopologyBuilder`.
    pub(crate) fn new() -> Self {
        TopologyBuilder {
            nodes: Vec::new(),
            connections: Vec::new(),
            next_id: 1,
        }
    }

    /// Adds a node to the topology and returns its handle.
    pub(crate) fn add_node(&mut self, group: NodeGroup) -> NodeHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.push(TestNode::new(id, group));
        NodeHandle(id)
    }

    /// Adds a bus to the topology and returns its handle.
    pub(crate) fn bus(&mut self) -> NodeHandle {
        self.add_node(NodeGroup::Bus)
    }

    /// Adds a generator to the topology and returns its handle.
    pub(crate) fn generator(&mut self) -> NodeHandle {
        self.add_node(NodeGroup::Generator)
    }

    /// Adds a critical load to the topology and returns its handle.
    pub(crate) fn load(&mut self) -> NodeHandle {
        self.add_node(NodeGroup::CriticalLoad)
    }

    /// Connects two nodes in the topology.
    pub(crate) fn connect(&mut self, from: NodeHandle, to: NodeHandle) -> &mut Self {
        self.connections.push(TestLink::new(from.0, to.0));
        self
    }

    /// Adds a bus with the given number of attached loads, and returns a
    /// handle to the bus.
    pub(crate) fn bus_load_chain(&mut self, num_loads: usize) -> NodeHandle {
        let bus = self.bus();
        for _ in 0..num_loads {
            let load = self.load();
            self.connect(bus, load);
        }
        bus
    }

    /// Builds and returns the topology graph from the nodes and connections
    /// added to the builder.
    pub(crate) fn build(&self) -> Result<TopologyGraph<TestNode, TestLink>, Error> {
        TopologyGraph::try_new(self.nodes.clone(), self.connections.clone())
    }
}
