// License: MIT
// Copyright © 2025 the microgrid-topology-viz authors

//! Iterators over nodes and connections in a `TopologyGraph`.

use petgraph::graph::UnGraph;

use crate::{Edge, Node, TopologyGraph};

/// An iterator over the nodes in a `TopologyGraph`.
pub struct Nodes<'a, N>
where
    N: Node,
{
    pub(crate) iter: std::slice::Iter<'a, petgraph::graph::Node<N>>,
}

impl<'a, N> Iterator for Nodes<'a, N>
where
    N: Node,
{
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|n| &n.weight)
    }
}

/// An iterator over the connections in a `TopologyGraph`.
pub struct Connections<'a, N, E>
where
    N: Node,
    E: Edge,
{
    pub(crate) tg: &'a TopologyGraph<N, E>,
    pub(crate) iter: std::slice::Iter<'a, petgraph::graph::Edge<()>>,
}

impl<'a, N, E> Iterator for Connections<'a, N, E>
where
    N: Node,
    E: Edge,
{
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().and_then(|e| {
            self.tg
                .edges
                .get(&(e.source(), e.target()))
                .or_else(|| self.tg.edges.get(&(e.target(), e.source())))
        })
    }
}

/// An iterator over the neighbors of a node in a `TopologyGraph`.
pub struct Neighbors<'a, N>
where
    N: Node,
{
    pub(crate) graph: &'a UnGraph<N, ()>,
    pub(crate) iter: petgraph::graph::Neighbors<'a, ()>,
}

impl<'a, N> Iterator for Neighbors<'a, N>
where
    N: Node,
{
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|i| &self.graph[i])
    }
}
