use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{InputMode, ResolvedKeybinds};
use crate::ui::theme::Theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    input_mode: InputMode,
    keybinds: &ResolvedKeybinds,
    show_detail_panel: bool,
    theme: &Theme,
) {
    let bg_style = Style::default().bg(theme.statusbar_bg);

    let line = match input_mode {
        InputMode::Help => {
            let mut spans = Vec::new();
            spans.extend(pill_spans(keybinds.label(keybinds.help), "Close", theme));
            spans.extend(pill_spans("Esc".to_string(), "Close", theme));
            Line::from(spans)
        }
        InputMode::Normal => {
            let mut spans = Vec::new();
            spans.extend(pill_spans(keybinds.label(keybinds.quit), "Quit", theme));
            spans.extend(pill_spans(keybinds.label(keybinds.toggle_mode), "Mode", theme));
            spans.extend(pill_spans(keybinds.label(keybinds.toggle_detail), "Detail", theme));
            if show_detail_panel {
                spans.extend(pill_spans("1-4".to_string(), "Fold", theme));
            }
            spans.extend(pill_spans(keybinds.label(keybinds.refresh), "Refresh", theme));
            spans.extend(pill_spans(keybinds.label(keybinds.help), "Help", theme));
            Line::from(spans)
        }
    };

    frame.render_widget(Paragraph::new(line).style(bg_style), area);
}

fn pill_spans(key: String, desc: &'static str, theme: &Theme) -> Vec<Span<'static>> {
    vec![
        Span::raw(" "),
        Span::styled(
            format!(" {key} "),
            Style::default()
                .fg(theme.pill_key_fg)
                .bg(theme.pill_key_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {desc}"),
            Style::default().fg(theme.pill_desc_fg).bg(theme.surface_bg),
        ),
    ]
}
