// License: MIT
// Copyright © 2025 the microgrid-topology-viz authors

//! This module defines the `NodeGroup` and `EdgeKind` enums, which classify
//! the nodes and edges of the topology for styling and for the info panel.

use crate::graph_traits::Node;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Represents the group a node belongs to.
///
/// The wire names match the `group` strings the backend emits, which the
/// rendering shell also uses to pick icons and colors.  A plain electrical
/// bus is sent as `"Node"` and displayed as `Bus`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum NodeGroup {
    #[serde(rename = "generator")]
    Generator,
    #[serde(rename = "windTurbine")]
    WindTurbine,
    #[serde(rename = "solarPanel")]
    SolarPanel,
    #[serde(rename = "batteryStorage")]
    BatteryStorage,
    #[serde(rename = "criticalLoad")]
    CriticalLoad,
    #[serde(rename = "controller")]
    Controller,
    #[serde(rename = "Node")]
    Bus,
}

impl Display for NodeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeGroup::Generator => write!(f, "Generator"),
            NodeGroup::WindTurbine => write!(f, "WindTurbine"),
            NodeGroup::SolarPanel => write!(f, "SolarPanel"),
            NodeGroup::BatteryStorage => write!(f, "BatteryStorage"),
            NodeGroup::CriticalLoad => write!(f, "CriticalLoad"),
            NodeGroup::Controller => write!(f, "Controller"),
            NodeGroup::Bus => write!(f, "Bus"),
        }
    }
}

/// Represents the kind of an electrical connection.
///
/// The wire names match the `edgetype` strings the backend emits.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum EdgeKind {
    #[serde(rename = "Overhead lines")]
    OverheadLine,
    #[serde(rename = "Underground lines")]
    UndergroundLine,
    #[serde(rename = "Transformer")]
    Transformer,
    #[serde(rename = "Regulator")]
    Regulator,
    #[serde(rename = "Switch")]
    Switch,
}

impl Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeKind::OverheadLine => write!(f, "Overhead lines"),
            EdgeKind::UndergroundLine => write!(f, "Underground lines"),
            EdgeKind::Transformer => write!(f, "Transformer"),
            EdgeKind::Regulator => write!(f, "Regulator"),
            EdgeKind::Switch => write!(f, "Switch"),
        }
    }
}

impl EdgeKind {
    /// Returns true for the edge kinds that carry a power-flow reading.
    pub fn is_line(&self) -> bool {
        matches!(self, EdgeKind::OverheadLine | EdgeKind::UndergroundLine)
    }
}

/// Predicates for checking the group of a `Node`.
pub(crate) trait GroupPredicates: Node {
    fn is_generator(&self) -> bool {
        self.group() == NodeGroup::Generator
    }

    fn is_bus(&self) -> bool {
        self.group() == NodeGroup::Bus
    }
}

/// Implement the `GroupPredicates` trait for all types that implement the
/// `Node` trait.
impl<T: Node> GroupPredicates for T {}
