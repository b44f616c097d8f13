// License: MIT
// Copyright © 2025 the microgrid-topology-viz authors

/*!
# Microgrid Topology Viz

This is a library for driving an interactive visualization of a microgrid's
electrical topology: nodes are controllers, generators, storage and loads,
and edges are the electrical connections between them.

The library owns the data side of the dashboard.  It decodes the topology
document served by the backend, validates it as a graph, and computes the
per-edge rendering state (line widths, flow directions, labels) that a host
shell feeds to its canvas or graph-drawing widget.  The shell owns the event
loop and the actual drawing; this crate is called synchronously from its
event handlers.

## The `Node` and `Edge` traits

The structural type is [`TopologyGraph`], instances of which can be created
by passing an iterator of nodes and the connections between them to the
[`try_new`][TopologyGraph::try_new] method.

Because the graph layer doesn't know about the concrete record types, it uses
the [`Node`] and [`Edge`] traits to interact with them.  The serde records in
this crate implement both, so a decoded document can be loaded directly.

## The hour slider

The one real computation in the dashboard is the hourly flow normalization:
each edge optionally carries one power-flow sample per hour, and moving the
hour slider remaps the selected hour's magnitudes onto a fixed visual width
range and flips edges whose flow runs against their recorded direction.  See
[`normalize_hour`] for the transform and [`VisualizationSession`] for the
slider and click-to-inspect entry points the host shell calls.
*/

mod category;
pub use category::{EdgeKind, NodeGroup};

mod graph;
pub use graph::{iterators, TopologyGraph};

mod graph_traits;
pub use graph_traits::{Edge, Node};

mod error;
pub use error::Error;

mod records;
pub use records::{decode_topology, EdgeRecord, NodeRecord, TopologyData};

mod flow;
pub use flow::{normalize_hour, FlowDirection, WidthRange};

mod view;
pub use view::{EdgeView, InfoPanel, NodeView, RedrawRequest, Selection, VisualizationSession};

mod style;
pub use style::{
    GroupStyle, IconGlyph, InteractionOptions, NodeShape, Palette, PhysicsOptions, RenderOptions,
    ViewBounds,
};

mod client;
pub use client::fetch_topology;
