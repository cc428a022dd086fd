use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use unicode_width::UnicodeWidthStr;

use crate::classify::pressure_color;
use crate::glyph::text_summary;
use crate::prefs::DisplayMode;
use crate::system::history::RollingHistory;
use crate::system::snapshot::PressureLevel;
use crate::ui::status_glyph::{self, GlyphStyle};
use crate::ui::theme::Theme;

const BRAND: &str = " membar ";

#[allow(clippy::too_many_arguments)]
pub fn render(
    frame: &mut Frame,
    area: Rect,
    mode: DisplayMode,
    memory: &RollingHistory,
    cpu: &RollingHistory,
    pressure: PressureLevel,
    style: &GlyphStyle,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.overlay_border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let memory_percent = memory.latest().copied().unwrap_or(0.0);
    let cpu_percent = cpu.latest().copied().unwrap_or(0.0);
    let status_width = match mode {
        DisplayMode::Graph => status_glyph::glyph_width(style.gap),
        DisplayMode::Text => {
            let width = text_summary(memory_percent, cpu_percent).width();
            u16::try_from(width).unwrap_or(u16::MAX).saturating_add(1)
        }
    };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BRAND.len() as u16 + 1),
            Constraint::Length(status_width),
            Constraint::Min(0),
        ])
        .split(inner);

    let brand = Line::from(Span::styled(
        BRAND,
        Style::default()
            .fg(theme.header_accent_fg)
            .bg(theme.header_accent_bg)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(brand), chunks[0]);

    match mode {
        DisplayMode::Graph => {
            status_glyph::render(frame, chunks[1], memory, cpu, pressure, style, theme);
        }
        DisplayMode::Text => status_glyph::render_text(
            frame,
            chunks[1],
            memory_percent,
            cpu_percent,
            pressure,
            theme,
        ),
    }

    let info = Line::from(vec![
        Span::raw("  "),
        Span::styled(
            pressure.label(),
            Style::default().fg(theme.series_color(pressure_color(pressure))),
        ),
        Span::raw("  "),
        Span::styled(mode.label(), Style::default().fg(theme.text_secondary)),
    ]);
    frame.render_widget(Paragraph::new(info), chunks[2]);
}
