pub mod detail_panel;
pub mod header;
pub mod help;
pub mod status_glyph;
pub mod statusbar;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::App;
use crate::system::source::MetricsSource;
use crate::ui::status_glyph::GlyphStyle;

pub fn draw<S: MetricsSource>(frame: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let style = GlyphStyle {
        gap: app.glyph_gap,
        fill_opacity: app.fill_opacity,
    };
    header::render(
        frame,
        chunks[0],
        app.display_mode,
        app.sampler.memory_history(),
        app.sampler.cpu_history(),
        app.snapshot.pressure,
        &style,
        &app.theme,
    );

    if app.show_detail_panel {
        detail_panel::render(
            frame,
            chunks[1],
            app.detail.as_ref(),
            &app.collapsed,
            &app.theme,
        );
    }

    statusbar::render(
        frame,
        chunks[2],
        app.input_mode,
        &app.keybinds,
        app.show_detail_panel,
        &app.theme,
    );

    // Help overlay last so it sits on top
    if app.show_help() {
        help::render(frame, frame.area(), &app.help_entries(), &app.theme);
    }
}
