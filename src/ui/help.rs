use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::Theme;

/// Space between the key pill and its description.
const COLUMN_GAP: usize = 2;

/// Key overlay, sized to its longest row and centered in `area`.
pub fn render(frame: &mut Frame, area: Rect, entries: &[(String, &str)], theme: &Theme) {
    let key_width = entries.iter().map(|(key, _)| key.width()).max().unwrap_or(0);
    let desc_width = entries.iter().map(|(_, desc)| desc.width()).max().unwrap_or(0);

    // pill is the key plus one space each side; +1 trailing space, +2 borders
    let row_width = key_width + 2 + COLUMN_GAP + desc_width + 1;
    let overlay = center(area, to_u16(row_width + 2), to_u16(entries.len() + 2));
    if overlay.width < 3 || overlay.height < 3 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.overlay_border))
        .title(Span::styled(
            " Keys ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(overlay);

    let key_style = Style::default()
        .fg(theme.pill_key_fg)
        .bg(theme.pill_key_bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(theme.pill_desc_fg);
    let lines: Vec<Line> = entries
        .iter()
        .map(|(key, desc)| {
            let pad = " ".repeat(key_width.saturating_sub(key.width()));
            Line::from(vec![
                Span::styled(format!(" {pad}{key} "), key_style),
                Span::styled(format!("{}{desc}", " ".repeat(COLUMN_GAP)), desc_style),
            ])
        })
        .collect();

    frame.render_widget(Clear, overlay);
    frame.render_widget(block, overlay);
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(theme.surface_bg)),
        inner,
    );
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// A `width` x `height` rect in the middle of `area`, shrunk to fit.
fn center(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
