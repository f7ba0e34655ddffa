//! Charts module - Gauge rendering

mod exporter;
mod gauge;

pub use exporter::{GaugeExporter, DEFAULT_SIZE};
pub use gauge::GaugeSlot;
