// License: MIT
// Copyright © 2025 the microgrid-topology-viz authors

//! The hourly flow normalization that drives the hour slider.
//!
//! Each edge optionally carries one signed power-flow sample per hour.  When
//! the slider moves, the selected hour's magnitudes are remapped linearly
//! onto a fixed visual width range, and edges whose flow runs against their
//! recorded direction are flipped so the rendered arrow always points the
//! way the power actually flows.

use tracing::{debug, warn};

use crate::view::EdgeView;
use serde::{Deserialize, Serialize};

/// The rendered flow direction of an edge, relative to its endpoints.
///
/// `Positive` means the flow runs from `from` to `to` as the endpoints are
/// currently ordered; `Negative` means the endpoints have been swapped from
/// their recorded order.  Documents that omit the field assume `Positive`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowDirection {
    #[default]
    Positive,
    Negative,
}

/// The closed range of rendered line widths that flow magnitudes are mapped
/// onto.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidthRange {
    pub min: f64,
    pub max: f64,
}

impl Default for WidthRange {
    fn default() -> Self {
        WidthRange { min: 0.5, max: 7.0 }
    }
}

impl WidthRange {
    /// Creates a width range with the given bounds.
    pub fn new(min: f64, max: f64) -> Self {
        WidthRange { min, max }
    }
}

/// Updates the rendered state of every edge for the given hour, in place.
///
/// Edges without a sample at `hour` are left untouched.  For the rest, the
/// *absolute* magnitudes at `hour` are scanned for their range, and each
/// edge gets:
///
/// - `width`: its magnitude mapped linearly onto `range`, clamped.  When all
///   magnitudes are equal the mapping is degenerate and `range.min` is used.
/// - `power_flow`: the absolute magnitude.
/// - `label`: the magnitude rounded to 2 decimal digits.
/// - `direction`, `from`, `to`: flipped when the sample's sign disagrees
///   with the current direction.  The flip is sign-relative, so repeating
///   the call for the same hour never flips an edge twice.
///
/// Range discovery uses absolute magnitudes throughout: a width encodes how
/// much power a line carries, not which way it runs, and signed tracking
/// would collapse the range for hours where every flow happens to be
/// negative.
///
/// Returns the number of edges that were updated, so the caller knows
/// whether a redraw is worthwhile.
pub fn normalize_hour(edges: &mut [EdgeView], hour: usize, range: WidthRange) -> usize {
    let mut max_value: f64 = 0.0;
    let mut min_value: f64 = f64::MAX;
    for edge in edges.iter() {
        if let Some(output) = edge.multi_outputs.get(hour) {
            if output.is_finite() {
                let magnitude = output.abs();
                max_value = max_value.max(magnitude);
                min_value = min_value.min(magnitude);
            }
        }
    }

    let mut updated = 0;
    for edge in edges.iter_mut() {
        let Some(&output) = edge.multi_outputs.get(hour) else {
            continue;
        };
        if !output.is_finite() {
            warn!(
                "Edge {}: sample at hour {hour} is not a number; skipping.",
                edge.id
            );
            continue;
        }

        let abs_output = output.abs();
        let width = if max_value > min_value {
            (range.min + (abs_output - min_value) / (max_value - min_value) * (range.max - range.min))
                .clamp(range.min, range.max)
        } else {
            // All magnitudes equal, nothing to scale against.
            range.min
        };

        if output < 0.0 && edge.direction == FlowDirection::Positive {
            std::mem::swap(&mut edge.from, &mut edge.to);
            edge.direction = FlowDirection::Negative;
            debug!(
                "Reversed direction for edge {} at hour {hour} with output {output}.",
                edge.id
            );
        } else if output > 0.0 && edge.direction == FlowDirection::Negative {
            std::mem::swap(&mut edge.from, &mut edge.to);
            edge.direction = FlowDirection::Positive;
            debug!(
                "Reversed direction for edge {} at hour {hour} with output {output}.",
                edge.id
            );
        }

        edge.width = width;
        edge.power_flow = abs_output;
        edge.label = format_quantity(abs_output);
        updated += 1;
    }

    updated
}

/// Formats a value rounded to 2 decimal digits, with trailing zeros trimmed,
/// e.g. `10.0` becomes `"10"` and `1.8125` becomes `"1.81"`.
pub(crate) fn format_quantity(value: f64) -> String {
    let rounded = format!("{value:.2}");
    rounded
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
