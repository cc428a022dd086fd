use crate::classify::{SeriesColor, cpu_color, pressure_color};
use crate::sparkline::algorithm::{layout, split_glyph};
use crate::sparkline::node::{PlotRect, SparklineShape};
use crate::system::history::RollingHistory;
use crate::system::snapshot::PressureLevel;

#[derive(Debug, Clone, PartialEq)]
pub struct GraphPanel {
    pub shape: SparklineShape,
    pub color: SeriesColor,
}

/// The status glyph: memory graph on the left, CPU graph on the right.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusGlyph {
    pub memory: GraphPanel,
    pub cpu: GraphPanel,
}

impl StatusGlyph {
    pub fn compose(
        memory: &RollingHistory,
        cpu: &RollingHistory,
        pressure: PressureLevel,
        bounds: &PlotRect,
        gap: f64,
    ) -> Self {
        let (left, right) = split_glyph(bounds, gap);
        let latest_cpu = cpu.latest().copied().unwrap_or(0.0);
        StatusGlyph {
            memory: GraphPanel {
                shape: layout(&memory.to_vec(), &left, memory.capacity()),
                color: pressure_color(pressure),
            },
            cpu: GraphPanel {
                shape: layout(&cpu.to_vec(), &right, cpu.capacity()),
                color: cpu_color(latest_cpu),
            },
        }
    }
}

/// Text-mode status, e.g. `M:44% C:60%`.
pub fn text_summary(memory_percent: f64, cpu_percent: f64) -> String {
    format!(
        "M:{}% C:{}%",
        round_percent(memory_percent),
        round_percent(cpu_percent)
    )
}

/// Nearest whole percent, halves away from zero; NaN is 0.
pub fn round_percent(value: f64) -> i64 {
    if value.is_nan() {
        return 0;
    }
    value.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn text_rounds_to_nearest() {
        assert_snapshot!(text_summary(43.75, 60.0), @"M:44% C:60%");
        assert_snapshot!(text_summary(0.4, 99.5), @"M:0% C:100%");
        assert_snapshot!(text_summary(f64::NAN, 12.49), @"M:0% C:12%");
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(round_percent(42.5), 43);
        assert_eq!(round_percent(12.5), 13);
        assert_eq!(round_percent(0.5), 1);
    }

    #[test]
    fn compose_colors_follow_classifiers() {
        let mut memory = RollingHistory::new();
        let mut cpu = RollingHistory::new();
        memory.push(40.0);
        cpu.push(90.0);
        cpu.push(55.0);
        let glyph = StatusGlyph::compose(
            &memory,
            &cpu,
            PressureLevel::Warning,
            &PlotRect::new(0.0, 0.0, 41.0, 16.0),
            1.0,
        );
        assert_eq!(glyph.memory.color, SeriesColor::Yellow);
        // latest value decides, not the peak
        assert_eq!(glyph.cpu.color, SeriesColor::Orange);
        assert_eq!(glyph.memory.shape.panel.rect.width, 20.0);
        assert_eq!(glyph.cpu.shape.panel.rect.x, 21.0);
        assert_eq!(glyph.memory.shape.line.len(), 2);
        assert_eq!(glyph.cpu.shape.line.len(), 2);
    }

    #[test]
    fn empty_histories_compose_blank_panels() {
        let glyph = StatusGlyph::compose(
            &RollingHistory::new(),
            &RollingHistory::new(),
            PressureLevel::Normal,
            &PlotRect::new(0.0, 0.0, 20.0, 8.0),
            2.0,
        );
        assert!(glyph.memory.shape.is_blank());
        assert!(glyph.cpu.shape.is_blank());
        assert_eq!(glyph.cpu.color, SeriesColor::Cyan);
    }
}
