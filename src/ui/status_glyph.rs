use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::widgets::canvas::{Canvas, Context, Line as CanvasLine};

use crate::classify::{cpu_color, pressure_color};
use crate::glyph::{GraphPanel, StatusGlyph, text_summary};
use crate::sparkline::algorithm::{clip_span, line_y_at};
use crate::sparkline::node::PlotRect;
use crate::system::history::RollingHistory;
use crate::system::snapshot::PressureLevel;
use crate::ui::theme::Theme;

/// Terminal columns per graph at full size.
pub const GRAPH_COLUMNS: u16 = 14;

/// Braille dots per terminal cell.
const DOTS_X: u16 = 2;
const DOTS_Y: u16 = 4;

/// Widest gap between the graphs; the config value is clamped to this.
pub const MAX_GAP: u16 = 8;

pub struct GlyphStyle {
    pub gap: u16,
    pub fill_opacity: f64,
}

pub fn glyph_width(gap: u16) -> u16 {
    (GRAPH_COLUMNS * 2).saturating_add(gap)
}

/// Draws both sparklines into `area`, shrinking the graphs when it is narrow.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    memory: &RollingHistory,
    cpu: &RollingHistory,
    pressure: PressureLevel,
    style: &GlyphStyle,
    theme: &Theme,
) {
    let _render_span = tracing::debug_span!(
        "ui.status_glyph.render",
        width = area.width,
        height = area.height
    )
    .entered();

    let columns = GRAPH_COLUMNS.min(area.width.saturating_sub(style.gap) / 2);
    if columns == 0 || area.height == 0 {
        return;
    }

    // Plot space is in braille dots so the halves land on cell boundaries.
    let width_dots = (u32::from(columns) * 2 + u32::from(style.gap)) * u32::from(DOTS_X);
    let height_dots = u32::from(area.height) * u32::from(DOTS_Y);
    let bounds = PlotRect::new(0.0, 0.0, f64::from(width_dots), f64::from(height_dots));
    let glyph = StatusGlyph::compose(
        memory,
        cpu,
        pressure,
        &bounds,
        f64::from(u32::from(style.gap) * u32::from(DOTS_X)),
    );

    let left = Rect::new(area.x, area.y, columns, area.height);
    let right_x = area.x.saturating_add(columns).saturating_add(style.gap);
    let right = Rect::new(right_x, area.y, columns, area.height);
    render_panel(frame, left, &glyph.memory, style.fill_opacity, theme);
    render_panel(frame, right, &glyph.cpu, style.fill_opacity, theme);
}

fn render_panel(frame: &mut Frame, area: Rect, panel: &GraphPanel, opacity: f64, theme: &Theme) {
    let rect = panel.shape.panel.rect;
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(theme.panel_bg)
        .x_bounds([rect.min_x(), rect.max_x()])
        .y_bounds([rect.min_y(), rect.max_y()])
        .paint(|ctx| paint_panel(ctx, panel, opacity, theme));
    frame.render_widget(canvas, area);
}

/// Fill first, then the stroke on top; both clipped to the rounded panel.
fn paint_panel(ctx: &mut Context, panel: &GraphPanel, opacity: f64, theme: &Theme) {
    let shape = &panel.shape;
    let (Some(first), Some(last)) = (shape.fill.first(), shape.line.last()) else {
        return;
    };

    let fill_color = theme.fill_color(panel.color, opacity);
    let start = first.x.ceil() as i64;
    let end = last.x.floor() as i64;
    for column in start..=end {
        let x = column as f64;
        if let (Some(top), Some((lo, hi))) = (line_y_at(&shape.line, x), clip_span(&shape.panel, x)) {
            let top = top.min(hi);
            if top > lo {
                ctx.draw(&CanvasLine::new(x, lo, x, top, fill_color));
            }
        }
    }

    let stroke_color = theme.series_color(panel.color);
    for pair in shape.line.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let clamp = |x: f64, y: f64| match clip_span(&shape.panel, x) {
            Some((lo, hi)) => y.clamp(lo, hi),
            None => y,
        };
        ctx.draw(&CanvasLine::new(
            a.x,
            clamp(a.x, a.y),
            b.x,
            clamp(b.x, b.y),
            stroke_color,
        ));
    }
}

/// `M:44% C:60%` with each figure in its series color.
pub fn render_text(
    frame: &mut Frame,
    area: Rect,
    memory_percent: f64,
    cpu_percent: f64,
    pressure: PressureLevel,
    theme: &Theme,
) {
    let summary = text_summary(memory_percent, cpu_percent);
    let (mem_part, cpu_part) = summary.split_once(' ').unwrap_or((summary.as_str(), ""));
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let line = Line::from(vec![
        Span::styled(
            mem_part.to_string(),
            bold.fg(theme.series_color(pressure_color(pressure))),
        ),
        Span::raw(" "),
        Span::styled(
            cpu_part.to_string(),
            bold.fg(theme.series_color(cpu_color(cpu_percent))),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
