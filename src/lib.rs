pub mod action;
pub mod app;
pub mod classify;
pub mod config;
pub mod event;
pub mod format;
pub mod glyph;
pub mod logging;
pub mod prefs;
pub mod sparkline;
pub mod system;
pub mod ui;
