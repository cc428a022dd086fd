use serde::Serialize;

use crate::system::snapshot::PressureLevel;

pub const CPU_ELEVATED_PERCENT: f64 = 50.0;
pub const CPU_SATURATED_PERCENT: f64 = 80.0;

/// Severity color of a series, independent of any terminal palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SeriesColor {
    Green,
    Yellow,
    Red,
    Cyan,
    Orange,
}

pub fn pressure_color(level: PressureLevel) -> SeriesColor {
    match level {
        PressureLevel::Normal => SeriesColor::Green,
        PressureLevel::Warning => SeriesColor::Yellow,
        PressureLevel::Critical => SeriesColor::Red,
    }
}

/// Thresholds are inclusive on the low side: 50 is elevated, 80 saturated.
pub fn cpu_color(percent: f64) -> SeriesColor {
    if percent >= CPU_SATURATED_PERCENT {
        SeriesColor::Red
    } else if percent >= CPU_ELEVATED_PERCENT {
        SeriesColor::Orange
    } else {
        SeriesColor::Cyan
    }
}
