use std::path::{Path, PathBuf};

use crossterm::event::KeyCode;
use serde::Deserialize;

use crate::system::sampler::DEFAULT_TOP_PROCESSES;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub glyph: GlyphConfig,
    pub keybinds: KeybindsConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub refresh_rate_ms: u64,
    pub top_process_count: usize,
    pub show_detail_panel: bool,
    /// `dark` or `light`.
    pub theme: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            refresh_rate_ms: 3000,
            top_process_count: DEFAULT_TOP_PROCESSES,
            show_detail_panel: false,
            theme: "dark".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GlyphConfig {
    /// Terminal columns between the memory and CPU graphs.
    pub gap: u16,
    pub fill_opacity: f64,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        GlyphConfig {
            gap: 1,
            fill_opacity: 0.35,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct KeybindsConfig {
    pub quit: String,
    pub toggle_mode: String,
    pub toggle_detail: String,
    pub refresh: String,
    pub help: String,
}

impl Default for KeybindsConfig {
    fn default() -> Self {
        KeybindsConfig {
            quit: "q".to_string(),
            toggle_mode: "m".to_string(),
            toggle_detail: "d".to_string(),
            refresh: "r".to_string(),
            help: "?".to_string(),
        }
    }
}

pub fn parse_key(s: &str) -> Option<KeyCode> {
    match s {
        "Enter" => Some(KeyCode::Enter),
        "Escape" | "Esc" => Some(KeyCode::Esc),
        "Tab" => Some(KeyCode::Tab),
        "Space" => Some(KeyCode::Char(' ')),
        "Backspace" => Some(KeyCode::Backspace),
        _ => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c)),
                _ => None,
            }
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("membar").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), error = %err, "invalid config, using defaults");
            Config::default()
        }),
        Err(_) => Config::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert_eq!(config.general.refresh_rate_ms, 3000);
        assert_eq!(config.general.top_process_count, 5);
        assert!(!config.general.show_detail_panel);
        assert_eq!(config.general.theme, "dark");
        assert_eq!(config.glyph.gap, 1);
        assert_eq!(config.keybinds.quit, "q");
        assert_eq!(config.keybinds.toggle_mode, "m");
    }

    #[test]
    fn parse_partial_toml() {
        let toml_str = r#"
[general]
refresh_rate_ms = 500
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.refresh_rate_ms, 500);
        // Other fields should be defaults
        assert_eq!(config.general.top_process_count, 5);
        assert!((config.glyph.fill_opacity - 0.35).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_full_toml() {
        let toml_str = r#"
[general]
refresh_rate_ms = 1000
top_process_count = 8
show_detail_panel = true
theme = "light"

[glyph]
gap = 2
fill_opacity = 0.5

[keybinds]
quit = "x"
toggle_mode = "t"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.refresh_rate_ms, 1000);
        assert_eq!(config.general.top_process_count, 8);
        assert!(config.general.show_detail_panel);
        assert_eq!(config.general.theme, "light");
        assert_eq!(config.glyph.gap, 2);
        assert!((config.glyph.fill_opacity - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.keybinds.quit, "x");
        assert_eq!(config.keybinds.toggle_mode, "t");
        assert_eq!(config.keybinds.help, "?");
    }

    #[test]
    fn missing_file_returns_default() {
        let config = load_config_from_path(Path::new("/nonexistent/path/config.toml"));
        assert_eq!(config.general.refresh_rate_ms, 3000);
    }

    #[test]
    fn invalid_toml_returns_default() {
        let temp = std::env::temp_dir().join("membar_test_invalid.toml");
        std::fs::write(&temp, "this is not valid toml {{{{").unwrap();
        let config = load_config_from_path(&temp);
        assert_eq!(config.general.refresh_rate_ms, 3000);
        let _ = std::fs::remove_file(&temp);
    }

    #[test]
    fn key_names() {
        assert_eq!(parse_key("q"), Some(KeyCode::Char('q')));
        assert_eq!(parse_key("Escape"), Some(KeyCode::Esc));
        assert_eq!(parse_key("Space"), Some(KeyCode::Char(' ')));
        assert_eq!(parse_key("qq"), None);
        assert_eq!(parse_key(""), None);
    }
}
