// License: MIT
// Copyright © 2025 the microgrid-topology-viz authors

//! The view model a host shell renders from.
//!
//! [`VisualizationSession`] owns all mutable display state: the decoded
//! records as a validated [`TopologyGraph`], and the per-node/per-edge
//! render state the drawing widget consumes.  There is no ambient state;
//! everything is reached through the session.  The host shell owns the
//! event loop and calls
//! [`on_hour_changed`][VisualizationSession::on_hour_changed] and
//! [`on_selection_changed`][VisualizationSession::on_selection_changed]
//! synchronously from its event handlers.

use crate::category::GroupPredicates;
use crate::flow::{format_quantity, normalize_hour};
use crate::{
    EdgeKind, EdgeRecord, Error, FlowDirection, NodeGroup, NodeRecord, RenderOptions,
    TopologyData, TopologyGraph,
};

/// The render state of a node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeView {
    pub id: u64,
    pub label: String,
    pub group: NodeGroup,
    /// Generation power in W for generators, nominal voltage in V otherwise.
    pub value: f64,
}

/// The render state of an edge.
///
/// `from`, `to`, `direction`, `width`, `power_flow` and `label` are mutated
/// in place by [`normalize_hour`] on every hour change; the remaining fields
/// are static and feed the info panel.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeView {
    pub id: u64,
    pub from: u64,
    pub to: u64,
    /// The kind of connection, when the document declared one.
    pub kind: Option<EdgeKind>,
    /// Length of the connection in km.
    pub length: f64,
    pub direction: FlowDirection,
    /// One signed power-flow sample per hour index, in W.
    pub multi_outputs: Vec<f64>,
    pub width: f64,
    /// Magnitude of flow at the selected hour, in W.  Always non-negative.
    pub power_flow: f64,
    pub label: String,
    pub primary_voltage: Option<f64>,
    pub secondary_voltage: Option<f64>,
    pub power_rating: Option<f64>,
}

impl NodeView {
    fn from_record(record: &NodeRecord) -> Self {
        NodeView {
            id: record.id,
            label: record.label.clone(),
            group: record.group,
            value: record.value,
        }
    }
}

impl EdgeView {
    fn from_record(id: u64, record: &EdgeRecord) -> Self {
        EdgeView {
            id,
            from: record.from,
            to: record.to,
            kind: record.edgetype,
            length: record.length,
            direction: record.direction,
            multi_outputs: record.multi_outputs.clone(),
            width: record.width.unwrap_or(1.0),
            power_flow: record.power_flow.unwrap_or(0.0),
            label: record.label.clone().unwrap_or_default(),
            primary_voltage: record.primary_voltage,
            secondary_voltage: record.secondary_voltage,
            power_rating: record.power_rating,
        }
    }
}

/// What the user selected in the drawing widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Selection {
    /// A node was clicked.
    Node(u64),
    /// An edge was clicked, identified by its [`EdgeView::id`].
    Edge(u64),
    /// The click landed on empty canvas.
    Clear,
}

/// The formatted content for the info panel, one line per field.
#[derive(Clone, Debug, PartialEq)]
pub struct InfoPanel {
    pub lines: Vec<String>,
}

/// Returned from a completed hour change so the host shell can update the
/// hour display and decide whether to redraw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RedrawRequest {
    pub hour: usize,
    pub edges_updated: usize,
}

impl RedrawRequest {
    /// Returns true if any edge changed and a redraw is worthwhile.
    pub fn needs_redraw(&self) -> bool {
        self.edges_updated > 0
    }
}

/// The state behind one rendered topology view.
pub struct VisualizationSession {
    graph: TopologyGraph<NodeRecord, EdgeRecord>,
    nodes: Vec<NodeView>,
    edges: Vec<EdgeView>,
    options: RenderOptions,
    hour: Option<usize>,
}

impl VisualizationSession {
    /// Creates a session from a decoded topology document.
    ///
    /// Returns an error if the document doesn't form a valid topology.
    pub fn try_new(data: TopologyData, options: RenderOptions) -> Result<Self, Error> {
        let graph = TopologyGraph::try_new(data.nodes, data.edges)?;

        let nodes = graph.nodes().map(NodeView::from_record).collect();
        let edges = graph
            .connections()
            .enumerate()
            .map(|(i, record)| EdgeView::from_record(i as u64, record))
            .collect();

        Ok(VisualizationSession {
            graph,
            nodes,
            edges,
            options,
            hour: None,
        })
    }

    /// The validated topology behind this session.
    pub fn graph(&self) -> &TopologyGraph<NodeRecord, EdgeRecord> {
        &self.graph
    }

    /// The node render states, in document order.
    pub fn nodes(&self) -> &[NodeView] {
        &self.nodes
    }

    /// The edge render states, in document order.
    pub fn edges(&self) -> &[EdgeView] {
        &self.edges
    }

    /// The rendering configuration this session was created with.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// The hour currently applied to the edge render states, if any.
    pub fn hour(&self) -> Option<usize> {
        self.hour
    }

    /// Entry point for the hour slider.
    ///
    /// Reapplies the flow normalization for `hour` over all edges, in place.
    /// The host shell should show `hour` in its display element and redraw
    /// when the returned request says so.
    pub fn on_hour_changed(&mut self, hour: usize) -> RedrawRequest {
        let edges_updated = normalize_hour(&mut self.edges, hour, self.options.width_range);
        self.hour = Some(hour);
        RedrawRequest {
            hour,
            edges_updated,
        }
    }

    /// Entry point for click events.
    ///
    /// Produces the info-panel content for the selection, or `None` when the
    /// click landed on empty canvas and the panel should be hidden.  Returns
    /// an error if the selection references something this session doesn't
    /// know about.
    pub fn on_selection_changed(&self, selection: Selection) -> Result<Option<InfoPanel>, Error> {
        match selection {
            Selection::Clear => Ok(None),
            Selection::Node(id) => {
                let node = self.graph.node(id)?;
                Ok(Some(node_panel(node)))
            }
            Selection::Edge(id) => {
                let edge = self
                    .edges
                    .iter()
                    .find(|e| e.id == id)
                    .ok_or_else(|| Error::edge_not_found(format!("Edge with id {id} not found.")))?;
                Ok(Some(edge_panel(edge)))
            }
        }
    }
}

fn node_panel(node: &NodeRecord) -> InfoPanel {
    let mut lines = vec![format!("ID: {}", node.id)];

    if node.is_bus() {
        lines.push("Node Type: Bus".to_string());
    } else {
        lines.push(format!("Node Type: {}", node.group));
    }

    if node.is_generator() {
        lines.push(format!(
            "Generation Power: {}W",
            format_quantity(node.value)
        ));
    } else {
        lines.push(format!("Nominal Voltage: {}V", format_quantity(node.value)));
    }

    InfoPanel { lines }
}

fn edge_panel(edge: &EdgeView) -> InfoPanel {
    let mut lines = Vec::new();
    if let Some(kind) = edge.kind {
        lines.push(format!("Edge Type: {kind}"));
    }
    lines.push(format!("Length: {}km", format_quantity(edge.length)));

    if edge.kind == Some(EdgeKind::Transformer) {
        if let Some(primary) = edge.primary_voltage {
            lines.push(format!("Primary Voltage: {}V", format_quantity(primary)));
        }
        if let Some(secondary) = edge.secondary_voltage {
            lines.push(format!("Secondary Voltage: {}V", format_quantity(secondary)));
        }
        if let Some(rating) = edge.power_rating {
            lines.push(format!("Power Rating: {}kVA", format_quantity(rating)));
        }
    } else if edge.kind.is_some_and(|kind| kind.is_line()) {
        lines.push(format!("Power Flow: {}W", format_quantity(edge.power_flow)));
    }

    InfoPanel { lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode_topology;

    const DOCUMENT: &str = r#"{
        "nodes": [
            {"id": 1, "label": "Controller 1", "group": "controller", "value": 240},
            {"id": 2, "label": "Generator 1", "group": "generator", "value": 120.5},
            {"id": 3, "label": "n3", "group": "Node", "value": 240},
            {"id": 4, "label": "Load 1", "group": "criticalLoad", "value": 240}
        ],
        "edges": [
            {
                "from": 2, "to": 1, "edgetype": "Overhead lines", "length": 1.5,
                "multiOutputs": [5.0, -20.0]
            },
            {
                "from": 1, "to": 3, "edgetype": "Transformer", "length": 0.2,
                "primaryVoltage": 11000, "secondaryVoltage": 400, "powerRating": 63
            },
            {
                "from": 3, "to": 4, "edgetype": "Underground lines", "length": 0.8,
                "multiOutputs": [10.0, 10.0]
            }
        ]
    }"#;

    fn session() -> VisualizationSession {
        let data = decode_topology(DOCUMENT).unwrap();
        VisualizationSession::try_new(data, RenderOptions::dashboard()).unwrap()
    }

    #[test]
    fn test_invalid_topology_is_rejected() {
        let mut data = decode_topology(DOCUMENT).unwrap();
        data.nodes.push(data.nodes[0].clone());

        assert!(VisualizationSession::try_new(data, RenderOptions::dashboard())
            .is_err_and(|e| e == Error::invalid_topology("Duplicate node ID found: 1")));
    }

    #[test]
    fn test_hour_changed_updates_edges() {
        let mut session = session();
        assert_eq!(session.hour(), None);

        let request = session.on_hour_changed(0);
        assert_eq!(request, RedrawRequest { hour: 0, edges_updated: 2 });
        assert!(request.needs_redraw());
        assert_eq!(session.hour(), Some(0));

        // Magnitudes {5, 10}: the smaller maps to the bottom of the width
        // range, the larger to the top.  The transformer has no samples and
        // keeps its default width.
        let edges = session.edges();
        assert_eq!(edges[0].width, 0.5);
        assert_eq!(edges[0].label, "5");
        assert_eq!(edges[1].width, 1.0);
        assert_eq!(edges[2].width, 7.0);
        assert_eq!(edges[2].label, "10");
    }

    #[test]
    fn test_hour_changed_flips_direction() {
        let mut session = session();

        session.on_hour_changed(1);
        let line = &session.edges()[0];
        assert_eq!((line.from, line.to), (1, 2));
        assert_eq!(line.direction, FlowDirection::Negative);
        assert_eq!(line.power_flow, 20.0);

        session.on_hour_changed(0);
        let line = &session.edges()[0];
        assert_eq!((line.from, line.to), (2, 1));
        assert_eq!(line.direction, FlowDirection::Positive);
        assert_eq!(line.power_flow, 5.0);
    }

    #[test]
    fn test_node_selection() -> Result<(), Error> {
        let session = session();

        let panel = session.on_selection_changed(Selection::Node(2))?;
        assert_eq!(
            panel,
            Some(InfoPanel {
                lines: vec![
                    "ID: 2".to_string(),
                    "Node Type: Generator".to_string(),
                    "Generation Power: 120.5W".to_string(),
                ]
            })
        );

        let panel = session.on_selection_changed(Selection::Node(3))?;
        assert_eq!(
            panel,
            Some(InfoPanel {
                lines: vec![
                    "ID: 3".to_string(),
                    "Node Type: Bus".to_string(),
                    "Nominal Voltage: 240V".to_string(),
                ]
            })
        );

        assert!(session
            .on_selection_changed(Selection::Node(42))
            .is_err_and(|e| e == Error::node_not_found("Node with id 42 not found.")));

        Ok(())
    }

    #[test]
    fn test_edge_selection() -> Result<(), Error> {
        let mut session = session();

        let panel = session.on_selection_changed(Selection::Edge(1))?;
        assert_eq!(
            panel,
            Some(InfoPanel {
                lines: vec![
                    "Edge Type: Transformer".to_string(),
                    "Length: 0.2km".to_string(),
                    "Primary Voltage: 11000V".to_string(),
                    "Secondary Voltage: 400V".to_string(),
                    "Power Rating: 63kVA".to_string(),
                ]
            })
        );

        // Line power flow reflects the currently applied hour.
        session.on_hour_changed(1);
        let panel = session.on_selection_changed(Selection::Edge(0))?;
        assert_eq!(
            panel,
            Some(InfoPanel {
                lines: vec![
                    "Edge Type: Overhead lines".to_string(),
                    "Length: 1.5km".to_string(),
                    "Power Flow: 20W".to_string(),
                ]
            })
        );

        assert!(session
            .on_selection_changed(Selection::Edge(42))
            .is_err_and(|e| e == Error::edge_not_found("Edge with id 42 not found.")));

        Ok(())
    }

    #[test]
    fn test_legacy_edge_selection_without_kind() -> Result<(), Error> {
        let data = decode_topology(
            r#"{
                "nodes": [
                    {"id": 1, "label": "Controller 1", "group": "controller", "value": 10},
                    {"id": 2, "label": "Controller 2", "group": "controller", "value": 8}
                ],
                "edges": [
                    {"from": 1, "to": 2, "length": 100, "width": 6, "label": "100"}
                ]
            }"#,
        )
        .unwrap();
        let session = VisualizationSession::try_new(data, RenderOptions::dashboard())?;

        assert_eq!(session.edges().len(), 1);
        let panel = session.on_selection_changed(Selection::Edge(0))?;
        assert_eq!(
            panel,
            Some(InfoPanel {
                lines: vec!["Length: 100km".to_string()]
            })
        );

        Ok(())
    }

    #[test]
    fn test_clear_selection_hides_panel() -> Result<(), Error> {
        let session = session();
        assert_eq!(session.on_selection_changed(Selection::Clear)?, None);
        Ok(())
    }
}
