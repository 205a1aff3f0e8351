use std::{collections::HashMap, fs, path::Path};

use room_controls::view::DEFAULT_SMALL_SCREEN_BREAKPOINT_PX;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "controls.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub small_screen_breakpoint_px: u32,
    pub viewport_width_px: u32,
    pub command_queue_capacity: usize,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            small_screen_breakpoint_px: DEFAULT_SMALL_SCREEN_BREAKPOINT_PX,
            viewport_width_px: 1280,
            command_queue_capacity: 64,
            log_filter: "info".into(),
        }
    }
}

pub fn load_settings(config_path: &Path) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(config_path) {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            apply_overrides(&mut settings, |key| file_cfg.get(key).cloned());
        }
    }

    apply_overrides(&mut settings, |key| {
        std::env::var(format!("APP__{}", key.to_ascii_uppercase())).ok()
    });

    settings
}

/// Unparsable values keep whatever was configured before.
fn apply_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("small_screen_breakpoint_px") {
        if let Ok(parsed) = v.trim().parse::<u32>() {
            settings.small_screen_breakpoint_px = parsed;
        }
    }
    if let Some(v) = lookup("viewport_width_px") {
        if let Ok(parsed) = v.trim().parse::<u32>() {
            settings.viewport_width_px = parsed;
        }
    }
    if let Some(v) = lookup("command_queue_capacity") {
        if let Ok(parsed) = v.trim().parse::<usize>() {
            if parsed > 0 {
                settings.command_queue_capacity = parsed;
            }
        }
    }
    if let Some(v) = lookup("log_filter") {
        if !v.trim().is_empty() {
            settings.log_filter = v;
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
