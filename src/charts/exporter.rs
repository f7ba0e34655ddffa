//! Gauge Exporter Module
//! Renders the gauge to a PNG image with plotters.

use crate::charts::gauge::{band_quads, GaugeData, CUTOUT, OUTER_RADIUS};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fmt::Display;
use std::path::Path;
use thiserror::Error;

/// Default edge length of the exported square image
pub const DEFAULT_SIZE: u32 = 600;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Image size must be positive")]
    EmptyImage,
    #[error("Failed to render gauge: {0}")]
    Render(String),
}

fn render_error(e: impl Display) -> ExportError {
    ExportError::Render(e.to_string())
}

/// Static gauge renderer.
pub struct GaugeExporter;

impl GaugeExporter {
    /// Write the gauge as a `size` x `size` PNG.
    pub fn export_png(data: &GaugeData, path: &Path, size: u32) -> Result<(), ExportError> {
        if size == 0 {
            return Err(ExportError::EmptyImage);
        }

        let root = BitMapBackend::new(path, (size, size)).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let center = size as f64 / 2.0;
        let scale = center * 0.9;
        let to_pixel = |[x, y]: [f64; 2]| -> (i32, i32) {
            (
                (center + x * scale).round() as i32,
                (center - y * scale).round() as i32,
            )
        };

        for (segment, (start, end)) in data.segments.iter().zip(data.sweeps()) {
            let [r, g, b, _] = segment.color.to_array();
            let style = RGBColor(r, g, b).filled();
            for quad in band_quads(start, end, CUTOUT * OUTER_RADIUS, OUTER_RADIUS) {
                let points: Vec<(i32, i32)> = quad.iter().copied().map(to_pixel).collect();
                root.draw(&Polygon::new(points, style)).map_err(render_error)?;
            }
        }

        // Centre label needs a system font; the ring alone is still a valid export
        let label = format!("{}%", data.segments[0].value.round() as i64);
        let text_style = ("sans-serif", size as f64 / 8.0)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));
        if let Err(e) = root.draw(&Text::new(
            label,
            (center as i32, center as i32),
            text_style,
        )) {
            log::warn!("Skipping gauge label: {}", e);
        }

        root.present().map_err(render_error)?;
        log::info!("Gauge exported to {}", path.display());
        Ok(())
    }
}
