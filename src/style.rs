// License: MIT
// Copyright © 2025 the microgrid-topology-viz authors

//! Rendering configuration for the host shell.
//!
//! Color palettes, icon sets, physics tuning and the view-boundary guards
//! are all theme concerns.  They live here as one structure with a preset
//! per theme, so the drawing code never forks on appearance.

use crate::flow::WidthRange;
use crate::NodeGroup;

/// An icon-font glyph used to draw a node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconGlyph {
    /// Font family name, e.g. `"Material Icons"`.
    pub face: &'static str,
    /// Code point within the font.
    pub code: char,
    pub size: u32,
}

/// How a node is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeShape {
    Triangle,
    Dot,
    Square,
    Icon(IconGlyph),
}

/// The drawing style for one node group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupStyle {
    pub shape: NodeShape,
    pub color: &'static str,
}

/// The base colors of a theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub edge: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
}

/// Force-layout tuning, passed through to the drawing widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsOptions {
    pub enabled: bool,
    pub gravitational_constant: f64,
    pub central_gravity: f64,
    pub spring_length: f64,
    pub spring_constant: f64,
    pub stabilization_iterations: u32,
}

/// The rectangle the view center is kept inside when boundary clamping is
/// enabled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl ViewBounds {
    /// Clamps a view position into the bounds.
    pub fn clamp(&self, x: f64, y: f64) -> (f64, f64) {
        (x.clamp(self.min_x, self.max_x), y.clamp(self.min_y, self.max_y))
    }

    /// Returns true if the position is inside the bounds.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.clamp(x, y) == (x, y)
    }
}

/// Interaction guards, applied by the host on drag and zoom events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionOptions {
    pub drag_nodes: bool,
    pub drag_view: bool,
    pub zoom_view: bool,
    /// When set, the host clamps the view position after drags.
    pub view_bounds: Option<ViewBounds>,
    /// When set, the host prevents zooming out past this scale.
    pub min_scale: Option<f64>,
}

impl InteractionOptions {
    /// Clamps a zoom scale against the configured minimum.
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        match self.min_scale {
            Some(min) if scale < min => min,
            _ => scale,
        }
    }
}

/// Everything configurable about how a topology is rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub width_range: WidthRange,
    pub palette: Palette,
    pub physics: PhysicsOptions,
    pub interaction: InteractionOptions,
    groups: [(NodeGroup, GroupStyle); 7],
}

impl RenderOptions {
    /// The drawing style for the given node group.
    pub fn group_style(&self, group: NodeGroup) -> GroupStyle {
        self.groups
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, style)| *style)
            .unwrap_or(GroupStyle {
                shape: NodeShape::Dot,
                color: self.palette.edge,
            })
    }

    /// The plain-shapes theme: solid colors, aggressive stabilization, and
    /// view-boundary clamping enabled.
    pub fn classic() -> Self {
        RenderOptions {
            width_range: WidthRange::default(),
            palette: Palette {
                edge: "gray",
                accent: "green",
                text: "#2B1B17",
            },
            physics: PhysicsOptions {
                enabled: true,
                gravitational_constant: -30000.0,
                central_gravity: 0.3,
                spring_length: 95.0,
                spring_constant: 0.04,
                stabilization_iterations: 2500,
            },
            interaction: InteractionOptions {
                drag_nodes: true,
                drag_view: true,
                zoom_view: true,
                view_bounds: Some(ViewBounds {
                    min_x: -400.0,
                    max_x: 100.0,
                    min_y: -400.0,
                    max_y: 100.0,
                }),
                min_scale: Some(0.5),
            },
            groups: [
                (
                    NodeGroup::Generator,
                    GroupStyle { shape: NodeShape::Triangle, color: "#2B7CE9" },
                ),
                (
                    NodeGroup::WindTurbine,
                    GroupStyle { shape: NodeShape::Dot, color: "#5A1E5C" },
                ),
                (
                    NodeGroup::SolarPanel,
                    GroupStyle { shape: NodeShape::Square, color: "#C5000B" },
                ),
                (
                    NodeGroup::BatteryStorage,
                    GroupStyle { shape: NodeShape::Square, color: "#FF9900" },
                ),
                (
                    NodeGroup::CriticalLoad,
                    GroupStyle { shape: NodeShape::Dot, color: "#109618" },
                ),
                (
                    NodeGroup::Controller,
                    GroupStyle { shape: NodeShape::Dot, color: "#666666" },
                ),
                (
                    NodeGroup::Bus,
                    GroupStyle { shape: NodeShape::Dot, color: "#666666" },
                ),
            ],
        }
    }

    /// The icon-font theme: Material glyphs, looser physics, no view
    /// clamping.
    pub fn dashboard() -> Self {
        const ICON: &str = "Material Icons";
        let glyph = |code, color| GroupStyle {
            shape: NodeShape::Icon(IconGlyph { face: ICON, code, size: 50 }),
            color,
        };

        RenderOptions {
            width_range: WidthRange::default(),
            palette: Palette {
                edge: "#858796",
                accent: "#1cc88a",
                text: "#2B1B17",
            },
            physics: PhysicsOptions {
                enabled: true,
                gravitational_constant: -35000.0,
                central_gravity: 1.0,
                spring_length: 1.0,
                spring_constant: 0.01,
                stabilization_iterations: 1000,
            },
            interaction: InteractionOptions {
                drag_nodes: true,
                drag_view: true,
                zoom_view: true,
                view_bounds: None,
                min_scale: None,
            },
            groups: [
                (NodeGroup::Generator, glyph('\u{e932}', "#1cc88a")),
                (NodeGroup::WindTurbine, glyph('\u{ec0c}', "#36b9cc")),
                (NodeGroup::SolarPanel, glyph('\u{ec0f}', "#f6c23e")),
                (NodeGroup::BatteryStorage, glyph('\u{e1a3}', "#1cc88a")),
                (NodeGroup::CriticalLoad, glyph('\u{ea40}', "#4e73df")),
                (NodeGroup::Controller, glyph('\u{ef4a}', "#858796")),
                (NodeGroup::Bus, glyph('\u{ef4a}', "#4e73df")),
            ],
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::dashboard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_bounds_clamp() {
        let bounds = ViewBounds {
            min_x: -400.0,
            max_x: 100.0,
            min_y: -400.0,
            max_y: 100.0,
        };

        assert_eq!(bounds.clamp(0.0, 0.0), (0.0, 0.0));
        assert_eq!(bounds.clamp(-500.0, 250.0), (-400.0, 100.0));
        assert!(bounds.contains(-400.0, 100.0));
        assert!(!bounds.contains(101.0, 0.0));
    }

    #[test]
    fn test_scale_clamp() {
        let classic = RenderOptions::classic();
        assert_eq!(classic.interaction.clamp_scale(0.25), 0.5);
        assert_eq!(classic.interaction.clamp_scale(1.5), 1.5);

        let dashboard = RenderOptions::dashboard();
        assert_eq!(dashboard.interaction.clamp_scale(0.25), 0.25);
    }

    #[test]
    fn test_group_styles() {
        let classic = RenderOptions::classic();
        assert_eq!(
            classic.group_style(NodeGroup::Generator),
            GroupStyle {
                shape: NodeShape::Triangle,
                color: "#2B7CE9"
            }
        );

        let dashboard = RenderOptions::dashboard();
        match dashboard.group_style(NodeGroup::SolarPanel).shape {
            NodeShape::Icon(glyph) => {
                assert_eq!(glyph.face, "Material Icons");
                assert_eq!(glyph.code, '\u{ec0f}');
            }
            shape => panic!("expected an icon glyph, got {shape:?}"),
        }
    }
}
