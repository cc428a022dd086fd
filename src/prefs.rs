use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Graph,
    Text,
}

impl DisplayMode {
    pub fn toggle(self) -> Self {
        match self {
            DisplayMode::Graph => DisplayMode::Text,
            DisplayMode::Text => DisplayMode::Graph,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Graph => "Graph",
            DisplayMode::Text => "Text",
        }
    }

    pub fn from_str_config(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "graph" => Some(DisplayMode::Graph),
            "text" => Some(DisplayMode::Text),
            _ => None,
        }
    }
}

/// Detail-panel sections a user can collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Memory,
    Swap,
    Cpu,
    Processes,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Memory,
        Section::Swap,
        Section::Cpu,
        Section::Processes,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Section::Memory => "memory",
            Section::Swap => "swap",
            Section::Cpu => "cpu",
            Section::Processes => "processes",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Memory => "Memory",
            Section::Swap => "Swap",
            Section::Cpu => "CPU",
            Section::Processes => "Top Processes",
        }
    }
}

/// Collapsed section keys. Only user toggles change it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionCollapseState {
    keys: BTreeSet<String>,
}

impl SectionCollapseState {
    pub fn is_collapsed(&self, section: Section) -> bool {
        self.keys.contains(section.key())
    }

    /// Flips a section and returns whether it is now collapsed.
    pub fn toggle(&mut self, section: Section) -> bool {
        let key = section.key();
        if self.keys.remove(key) {
            false
        } else {
            self.keys.insert(key.to_string());
            true
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    pub display_mode: DisplayMode,
    pub collapsed_sections: SectionCollapseState,
}

/// Where preferences survive restarts. Failures never reach the caller.
pub trait PreferenceStore {
    fn load(&self) -> Preferences;
    fn save(&mut self, prefs: &Preferences);
}

pub fn state_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("membar").join("state.json"))
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for JsonFileStore {
    fn load(&self) -> Preferences {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return Preferences::default(),
        };
        serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(path = %self.path.display(), error = %err, "ignoring unreadable preferences");
            Preferences::default()
        })
    }

    fn save(&mut self, prefs: &Preferences) {
        if let Err(err) = write_json(&self.path, prefs) {
            tracing::warn!(path = %self.path.display(), error = %err, "failed to save preferences");
        }
    }
}

fn write_json(path: &Path, prefs: &Preferences) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(prefs)?;
    fs::write(path, json)
}

/// In-process store; used when no config directory exists and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub saved: Preferences,
    pub writes: usize,
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Preferences {
        self.saved.clone()
    }

    fn save(&mut self, prefs: &Preferences) {
        self.saved = prefs.clone();
        self.writes += 1;
    }
}
