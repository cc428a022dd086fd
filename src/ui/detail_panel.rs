use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::classify::{cpu_color, pressure_color};
use crate::format::{format_bytes, format_kb, truncate_unicode};
use crate::glyph::round_percent;
use crate::prefs::{Section, SectionCollapseState};
use crate::system::snapshot::{MetricSnapshot, SwapStats};
use crate::ui::theme::Theme;

const NAME_WIDTH: usize = 22;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    detail: Option<&MetricSnapshot>,
    collapsed: &SectionCollapseState,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.overlay_border))
        .title(Span::styled(
            " Details ",
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        ));

    let lines = match detail {
        Some(snapshot) => detail_lines(snapshot, collapsed, theme),
        None => vec![Line::from(Span::styled(
            " Waiting for the first sample\u{2026}",
            Style::default().fg(theme.text_secondary),
        ))],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn detail_lines(
    snapshot: &MetricSnapshot,
    collapsed: &SectionCollapseState,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, section) in Section::ALL.into_iter().enumerate() {
        let is_collapsed = collapsed.is_collapsed(section);
        let marker = if is_collapsed { '\u{25b8}' } else { '\u{25be}' };
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {marker} {}", section.title()),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  [{}]", index + 1),
                Style::default().fg(theme.text_secondary),
            ),
        ]));
        if !is_collapsed {
            lines.extend(section_body(section, snapshot, theme));
        }
    }
    lines
}

fn section_body(section: Section, snapshot: &MetricSnapshot, theme: &Theme) -> Vec<Line<'static>> {
    match section {
        Section::Memory => {
            let mem = &snapshot.memory;
            vec![
                detail_line(
                    "Used",
                    format!(
                        "{} / {} ({}%)",
                        format_bytes(mem.used),
                        format_bytes(mem.total),
                        round_percent(mem.used_percentage())
                    ),
                    theme,
                ),
                Line::from(vec![
                    label_span("Pressure", theme),
                    Span::styled(
                        snapshot.pressure.label(),
                        Style::default().fg(theme.series_color(pressure_color(snapshot.pressure))),
                    ),
                ]),
                detail_line("Active", format_bytes(mem.active), theme),
                detail_line("Inactive", format_bytes(mem.inactive), theme),
                detail_line("Wired", format_bytes(mem.wired), theme),
                detail_line("Compressed", format_bytes(mem.compressed), theme),
                detail_line("Free", format_bytes(mem.free), theme),
            ]
        }
        Section::Swap => vec![detail_line("Swap", swap_summary(&snapshot.swap), theme)],
        Section::Cpu => vec![Line::from(vec![
            label_span("Usage", theme),
            Span::styled(
                format!("{}%", round_percent(snapshot.cpu_percent)),
                Style::default().fg(theme.series_color(cpu_color(snapshot.cpu_percent))),
            ),
        ])],
        Section::Processes => {
            if snapshot.top_processes.is_empty() {
                return vec![Line::from(Span::styled(
                    "   No process data",
                    Style::default().fg(theme.text_secondary),
                ))];
            }
            snapshot
                .top_processes
                .iter()
                .map(|p| {
                    Line::from(vec![
                        Span::styled(
                            format!("   {:<width$}", truncate_unicode(&p.name, NAME_WIDTH), width = NAME_WIDTH),
                            Style::default().fg(theme.text_primary),
                        ),
                        Span::styled(
                            format!(" {:>9}", format_kb(p.resident_kb)),
                            Style::default().fg(theme.text_secondary),
                        ),
                    ])
                })
                .collect()
        }
    }
}

/// Swap line text; hosts without swap say so instead of showing 0 / 0.
pub fn swap_summary(swap: &SwapStats) -> String {
    if !swap.is_available() {
        return "Unavailable".to_string();
    }
    format!("{} / {}", format_bytes(swap.used), format_bytes(swap.total))
}

fn label_span(label: &str, theme: &Theme) -> Span<'static> {
    Span::styled(format!("   {label:<11}"), Style::default().fg(theme.pill_key_bg))
}

fn detail_line(label: &str, value: String, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        label_span(label, theme),
        Span::styled(value, Style::default().fg(theme.text_primary)),
    ])
}
