// License: MIT
// Copyright © 2025 the microgrid-topology-viz authors

//! The serde data model for the topology document served by the backend.
//!
//! The backend responds to `GET /api/microgrid-data/` with a JSON object
//! holding a `nodes` and an `edges` collection.  Decoding is lenient at the
//! record level: a malformed node or edge is logged and skipped, so one bad
//! record doesn't take down the whole display.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::{Edge, EdgeKind, Error, FlowDirection, Node, NodeGroup};

/// A node of the topology document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: u64,
    pub label: String,
    pub group: NodeGroup,
    /// Generation power in W for generators, nominal voltage in V otherwise.
    pub value: f64,
}

/// An edge of the topology document.
///
/// Field names follow the wire format.  The type-specific fields are only
/// present for the matching `edgetype`: voltage ratings for transformers,
/// power flow for lines.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeRecord {
    pub from: u64,
    pub to: u64,
    /// The kind of connection.  Legacy documents omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edgetype: Option<EdgeKind>,
    /// Length of the connection in km.
    pub length: f64,
    /// The recorded flow direction.  Absent in older documents, where flow
    /// is assumed to run from `from` to `to`.
    #[serde(default)]
    pub direction: FlowDirection,
    /// One power-flow sample per hour index, in W.  Signed: a negative
    /// sample means flow against the recorded direction.
    #[serde(default)]
    pub multi_outputs: Vec<f64>,
    /// Initial rendered line width, if the backend precomputed one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Initial edge label, if the backend precomputed one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Transformer primary voltage in V.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_voltage: Option<f64>,
    /// Transformer secondary voltage in V.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_voltage: Option<f64>,
    /// Transformer power rating in kVA.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_rating: Option<f64>,
    /// Line power flow in W.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_flow: Option<f64>,
}

/// The decoded topology document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TopologyData {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

impl Node for NodeRecord {
    fn node_id(&self) -> u64 {
        self.id
    }

    fn group(&self) -> NodeGroup {
        self.group
    }
}

impl Edge for EdgeRecord {
    fn source(&self) -> u64 {
        self.from
    }

    fn destination(&self) -> u64 {
        self.to
    }
}

/// Decodes a topology document from its JSON text.
///
/// A document that isn't an object with `nodes` and `edges` arrays is an
/// error.  Individual records that fail to decode are logged and skipped.
pub fn decode_topology(text: &str) -> Result<TopologyData, Error> {
    let document: Value = serde_json::from_str(text)
        .map_err(|e| Error::malformed_document(format!("Not valid JSON: {e}")))?;

    let nodes = collection(&document, "nodes")?;
    let edges = collection(&document, "edges")?;

    Ok(TopologyData {
        nodes: decode_records(nodes, "node"),
        edges: decode_records(edges, "edge"),
    })
}

fn collection<'a>(document: &'a Value, key: &str) -> Result<&'a [Value], Error> {
    document
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| Error::malformed_document(format!("Document has no `{key}` array.")))
}

fn decode_records<T: serde::de::DeserializeOwned>(values: &[Value], what: &str) -> Vec<T> {
    let mut records = Vec::with_capacity(values.len());
    for value in values {
        match serde_json::from_value(value.clone()) {
            Ok(record) => records.push(record),
            Err(e) => warn!("Skipping malformed {what} record: {e}"),
        }
    }
    records
}
