// License: MIT
// Copyright © 2025 the microgrid-topology-viz authors

//! Fetching the topology document from the backend.
//!
//! The dashboard issues one GET per form submission and rebuilds the session
//! from the response.  A failed fetch is logged and surfaced as an error;
//! the caller keeps its previous session, so the display stays in its prior
//! state rather than going blank.

use tracing::error;

use crate::{decode_topology, Error, TopologyData};

/// Fetches and decodes the topology document from the given URL, typically
/// `<backend>/api/microgrid-data/`.
pub fn fetch_topology(url: &str) -> Result<TopologyData, Error> {
    let response = reqwest::blocking::get(url).map_err(|e| {
        error!("Topology fetch from {url} failed: {e}");
        Error::fetch(format!("GET {url} failed: {e}"))
    })?;

    let status = response.status();
    if !status.is_success() {
        error!("Topology fetch from {url} returned {status}.");
        return Err(Error::fetch(format!("GET {url} returned {status}")));
    }

    let body = response.text().map_err(|e| {
        error!("Reading topology response from {url} failed: {e}");
        Error::fetch(format!("GET {url} failed while reading the body: {e}"))
    })?;

    decode_topology(&body)
}
