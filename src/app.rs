use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::config::{Config, KeybindsConfig, parse_key};
use crate::prefs::{DisplayMode, PreferenceStore, Preferences, Section, SectionCollapseState};
use crate::system::sampler::Sampler;
use crate::system::snapshot::MetricSnapshot;
use crate::system::source::MetricsSource;
use crate::ui::status_glyph::MAX_GAP;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Help,
}

#[derive(Debug, Clone)]
pub struct ResolvedKeybinds {
    pub quit: KeyCode,
    pub toggle_mode: KeyCode,
    pub toggle_detail: KeyCode,
    pub refresh: KeyCode,
    pub help: KeyCode,
}

impl ResolvedKeybinds {
    pub fn from_config(kb: &KeybindsConfig) -> Self {
        Self {
            quit: parse_key(&kb.quit).unwrap_or(KeyCode::Char('q')),
            toggle_mode: parse_key(&kb.toggle_mode).unwrap_or(KeyCode::Char('m')),
            toggle_detail: parse_key(&kb.toggle_detail).unwrap_or(KeyCode::Char('d')),
            refresh: parse_key(&kb.refresh).unwrap_or(KeyCode::Char('r')),
            help: parse_key(&kb.help).unwrap_or(KeyCode::Char('?')),
        }
    }

    /// Returns (key_label, description) pairs for all keybinds.
    pub fn help_entries(&self) -> Vec<(String, &'static str)> {
        let mut entries = vec![
            (key_label(self.quit), "Quit"),
            (key_label(self.toggle_mode), "Graph / text mode"),
            (key_label(self.toggle_detail), "Toggle detail panel"),
            (key_label(self.refresh), "Sample now"),
            (key_label(self.help), "Toggle help"),
        ];
        entries.push(("1-4".to_string(), "Collapse section"));
        entries.push(("Ctrl+C".to_string(), "Quit (always)"));
        entries
    }

    pub fn label(&self, code: KeyCode) -> String {
        key_label(code)
    }
}

fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Bksp".to_string(),
        _ => "?".to_string(),
    }
}

fn section_for_key(code: KeyCode) -> Option<Section> {
    match code {
        KeyCode::Char(c @ '1'..='4') => Section::ALL.get(c as usize - '1' as usize).copied(),
        _ => None,
    }
}

pub struct App<S> {
    pub running: bool,
    pub sampler: Sampler<S>,
    /// Latest tick; what the status glyph is drawn from.
    pub snapshot: MetricSnapshot,
    /// What the detail panel shows; only refreshed while it is visible.
    pub detail: Option<MetricSnapshot>,
    pub display_mode: DisplayMode,
    pub collapsed: SectionCollapseState,
    pub show_detail_panel: bool,
    pub input_mode: InputMode,
    pub keybinds: ResolvedKeybinds,
    pub theme: Theme,
    pub glyph_gap: u16,
    pub fill_opacity: f64,
    store: Box<dyn PreferenceStore>,
}

impl<S: MetricsSource> App<S> {
    /// `mode_override` applies to this session only and is not written back.
    pub fn new(
        config: Config,
        source: S,
        store: Box<dyn PreferenceStore>,
        mode_override: Option<DisplayMode>,
    ) -> Self {
        let prefs = store.load();
        let sampler = Sampler::new(source, config.general.top_process_count);
        let display_mode = mode_override.unwrap_or(prefs.display_mode);

        tracing::info!(
            refresh_rate_ms = config.general.refresh_rate_ms,
            top_process_count = config.general.top_process_count,
            display_mode = display_mode.label(),
            "starting"
        );

        let show_detail_panel = config.general.show_detail_panel;
        App {
            running: true,
            sampler,
            snapshot: MetricSnapshot::default(),
            detail: None,
            display_mode,
            collapsed: prefs.collapsed_sections,
            show_detail_panel,
            input_mode: InputMode::Normal,
            keybinds: ResolvedKeybinds::from_config(&config.keybinds),
            theme: Theme::from_config(&config.general.theme),
            glyph_gap: config.glyph.gap.min(MAX_GAP),
            fill_opacity: config.glyph.fill_opacity.clamp(0.0, 1.0),
            store,
        }
    }

    pub fn refresh_data(&mut self) {
        self.snapshot = self.sampler.tick();
        if self.show_detail_panel {
            self.detail = Some(self.snapshot.clone());
        }
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        // Ctrl+C always quits (hardwired safety)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.input_mode {
            InputMode::Normal => self.map_key_normal(key),
            InputMode::Help => self.map_key_help(key),
        }
    }

    fn map_key_normal(&self, key: KeyEvent) -> Action {
        let code = key.code;
        let kb = &self.keybinds;

        // Section keys are hardwired (not configurable)
        if let Some(section) = section_for_key(code) {
            return Action::ToggleSection(section);
        }

        if code == kb.quit {
            return Action::Quit;
        }
        if code == kb.toggle_mode {
            return Action::ToggleDisplayMode;
        }
        if code == kb.toggle_detail {
            return Action::ToggleDetailPanel;
        }
        if code == kb.refresh {
            return Action::Refresh;
        }
        if code == kb.help {
            return Action::ToggleHelp;
        }

        Action::None
    }

    fn map_key_help(&self, key: KeyEvent) -> Action {
        let code = key.code;
        // In help mode, only the help key and Esc dismiss, everything else is ignored
        if code == self.keybinds.help || code == KeyCode::Esc {
            return Action::ToggleHelp;
        }
        Action::None
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::ToggleDisplayMode => {
                self.display_mode = self.display_mode.toggle();
                self.persist();
            }
            Action::ToggleDetailPanel => {
                self.show_detail_panel = !self.show_detail_panel;
                if self.show_detail_panel {
                    self.detail = Some(self.snapshot.clone());
                }
            }
            Action::ToggleSection(section) => {
                self.collapsed.toggle(section);
                self.persist();
            }
            Action::ToggleHelp => {
                self.input_mode = if self.input_mode == InputMode::Help {
                    InputMode::Normal
                } else {
                    InputMode::Help
                };
            }
            Action::Refresh => self.refresh_data(),
            Action::None => {}
        }
    }

    fn persist(&mut self) {
        let prefs = Preferences {
            display_mode: self.display_mode,
            collapsed_sections: self.collapsed.clone(),
        };
        self.store.save(&prefs);
    }

    pub fn show_help(&self) -> bool {
        self.input_mode == InputMode::Help
    }

    pub fn help_entries(&self) -> Vec<(String, &'static str)> {
        self.keybinds.help_entries()
    }
}
