//! Gauge Chart Module
//! Doughnut-style risk gauge drawn with egui_plot.
//!
//! The ring starts at 12 o'clock and runs clockwise: the risk segment first,
//! then the safe segment. Plot coordinates have the ring centred on the origin
//! with an outer radius of 1.

use egui::{Color32, RichText, Stroke};
use egui_plot::{Plot, PlotPoint, PlotPoints, Polygon, Text};
use std::f64::consts::TAU;

pub const RISK_COLOR: Color32 = Color32::from_rgb(255, 99, 132); // #FF6384
pub const SAFE_COLOR: Color32 = Color32::from_rgb(54, 162, 235); // #36A2EB

/// Hole size as a fraction of the outer radius
pub const CUTOUT: f64 = 0.7;
pub const OUTER_RADIUS: f64 = 1.0;

/// Quads used for a full turn of the ring
const ARC_STEPS: usize = 120;

/// One slice of the ring
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeSegment {
    pub label: &'static str,
    /// Percentage value, not clamped
    pub value: f64,
    pub color: Color32,
}

/// Segment values derived from a risk score.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeData {
    pub risk_score: f64,
    pub segments: [GaugeSegment; 2],
}

impl GaugeData {
    pub fn new(risk_score: f64) -> Self {
        Self {
            risk_score,
            segments: [
                GaugeSegment {
                    label: "Risk",
                    value: risk_score * 100.0,
                    color: RISK_COLOR,
                },
                GaugeSegment {
                    label: "Safe",
                    value: (1.0 - risk_score) * 100.0,
                    color: SAFE_COLOR,
                },
            ],
        }
    }

    /// Start and end of every segment as fractions of a full turn.
    ///
    /// Negative values get no sweep. Both sweeps are empty when nothing is positive.
    pub fn sweeps(&self) -> [(f64, f64); 2] {
        let clamped = self.segments.each_ref().map(|s| s.value.max(0.0));
        let total: f64 = clamped.iter().sum();
        if !(total > 0.0) {
            return [(0.0, 0.0); 2];
        }

        let mut start = 0.0;
        clamped.map(|value| {
            let end = start + value / total;
            let sweep = (start, end);
            start = end;
            sweep
        })
    }

    /// Index of the segment under a plot coordinate, if any.
    pub fn segment_at(&self, x: f64, y: f64) -> Option<usize> {
        let radius = x.hypot(y);
        if radius < CUTOUT * OUTER_RADIUS || radius > OUTER_RADIUS {
            return None;
        }

        // Clockwise from 12 o'clock
        let mut frac = x.atan2(y) / TAU;
        if frac < 0.0 {
            frac += 1.0;
        }

        self.sweeps()
            .iter()
            .position(|&(start, end)| end > start && frac >= start && frac < end)
    }

    pub fn tooltip(&self, index: usize) -> Option<String> {
        self.segments
            .get(index)
            .map(|segment| tooltip_text(segment.label, segment.value))
    }
}

/// Hover label, e.g. `Risk: 23%`.
pub fn tooltip_text(label: &str, value: f64) -> String {
    format!("{}: {}%", label, value.round() as i64)
}

/// Point on a circle at a fraction of a clockwise turn from 12 o'clock.
pub fn point_on_ring(frac: f64, radius: f64) -> [f64; 2] {
    let angle = frac * TAU;
    [radius * angle.sin(), radius * angle.cos()]
}

/// Split a ring band into convex quads (outer start, outer end, inner end, inner start).
pub fn band_quads(start: f64, end: f64, inner: f64, outer: f64) -> Vec<[[f64; 2]; 4]> {
    if !(end > start) {
        return Vec::new();
    }

    let steps = (((end - start) * ARC_STEPS as f64).ceil() as usize).max(1);
    let step = (end - start) / steps as f64;

    (0..steps)
        .map(|i| {
            let a = start + i as f64 * step;
            let b = if i + 1 == steps { end } else { a + step };
            [
                point_on_ring(a, outer),
                point_on_ring(b, outer),
                point_on_ring(b, inner),
                point_on_ring(a, inner),
            ]
        })
        .collect()
}

/// A live gauge. Each instance carries its own plot id, so a replacement
/// never inherits the previous plot's interaction state.
#[derive(Debug, Clone)]
pub struct GaugeChart {
    generation: u64,
    data: GaugeData,
}

impl GaugeChart {
    pub fn data(&self) -> &GaugeData {
        &self.data
    }

    /// Draw the ring with a centred percentage and a hover tooltip.
    pub fn show(&self, ui: &mut egui::Ui, height: f32) {
        let data = &self.data;
        let extent = OUTER_RADIUS * 1.05;

        let plot = Plot::new(("gauge", self.generation))
            .height(height)
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .show_x(false)
            .show_y(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .include_x(-extent)
            .include_x(extent)
            .include_y(-extent)
            .include_y(extent)
            .show(ui, |plot_ui| {
                for (segment, (start, end)) in data.segments.iter().zip(data.sweeps()) {
                    for quad in band_quads(start, end, CUTOUT * OUTER_RADIUS, OUTER_RADIUS) {
                        plot_ui.polygon(
                            Polygon::new(PlotPoints::new(quad.to_vec()))
                                .fill_color(segment.color)
                                .stroke(Stroke::NONE),
                        );
                    }
                }

                plot_ui.text(Text::new(
                    PlotPoint::new(0.0, 0.0),
                    RichText::new(format!("{}%", data.segments[0].value.round() as i64))
                        .size(22.0)
                        .strong(),
                ));

                plot_ui
                    .pointer_coordinate()
                    .and_then(|p| data.segment_at(p.x, p.y))
                    .and_then(|idx| data.tooltip(idx))
            });

        if let Some(text) = plot.inner {
            let _ = plot.response.on_hover_text_at_pointer(text);
        }
    }
}

/// Owner of the single gauge instance.
#[derive(Debug, Default)]
pub struct GaugeSlot {
    current: Option<GaugeChart>,
    created: u64,
    destroyed: u64,
}

impl GaugeSlot {
    /// Destroy the current gauge, if any, then create one for `risk_score`.
    pub fn replace(&mut self, risk_score: f64) -> &GaugeChart {
        self.destroy();
        self.created += 1;
        self.current.insert(GaugeChart {
            generation: self.created,
            data: GaugeData::new(risk_score),
        })
    }

    /// Idempotent.
    pub fn destroy(&mut self) {
        if self.current.take().is_some() {
            self.destroyed += 1;
        }
    }

    pub fn current(&self) -> Option<&GaugeChart> {
        self.current.as_ref()
    }

    pub fn live_instances(&self) -> u64 {
        self.created - self.destroyed
    }
}
