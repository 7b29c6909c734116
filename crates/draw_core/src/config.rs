use std::{collections::HashMap, fs, path::Path, time::Duration};

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SETTINGS_FILE: &str = "draw.toml";

/// Timing and layout knobs for the draw pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawSettings {
    pub reveal_delay_ms: u64,
    pub prepare_delay_ms: u64,
    pub max_revealed: usize,
    pub ghost_limit: usize,
    pub idle_ghosts: usize,
    pub pending_ghost_cap: usize,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 70,
            prepare_delay_ms: 200,
            max_revealed: 48,
            ghost_limit: 24,
            idle_ghosts: 8,
            pending_ghost_cap: 12,
        }
    }
}

impl DrawSettings {
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    pub fn prepare_delay(&self) -> Duration {
        Duration::from_millis(self.prepare_delay_ms)
    }
}

/// Defaults, then `path` (or `draw.toml` when present), then `APP__*` env vars.
///
/// An explicitly named file that cannot be read is an error; the implicit
/// default file is optional.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<DrawSettings> {
    let raw = match path {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))?,
        ),
        None => fs::read_to_string(DEFAULT_SETTINGS_FILE).ok(),
    };

    Ok(resolve_settings(raw.as_deref(), |key| std::env::var(key).ok()))
}

pub(crate) fn resolve_settings(
    file_contents: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> DrawSettings {
    let mut settings = DrawSettings::default();

    if let Some(raw) = file_contents {
        match toml::from_str::<HashMap<String, toml::Value>>(raw) {
            Ok(file_cfg) => {
                for (key, value) in &file_cfg {
                    let text = match value {
                        toml::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    apply(&mut settings, key, &text);
                }
            }
            Err(err) => tracing::warn!("ignoring malformed settings file: {err}"),
        }
    }

    for key in KEYS {
        if let Some(v) = env(&format!("APP__{}", key.to_ascii_uppercase())) {
            apply(&mut settings, key, &v);
        }
    }

    settings
}

const KEYS: [&str; 6] = [
    "reveal_delay_ms",
    "prepare_delay_ms",
    "max_revealed",
    "ghost_limit",
    "idle_ghosts",
    "pending_ghost_cap",
];

fn apply(settings: &mut DrawSettings, key: &str, value: &str) {
    let value = value.trim();
    let applied = match key {
        "reveal_delay_ms" => set(&mut settings.reveal_delay_ms, value),
        "prepare_delay_ms" => set(&mut settings.prepare_delay_ms, value),
        "max_revealed" => set(&mut settings.max_revealed, value),
        "ghost_limit" => set(&mut settings.ghost_limit, value),
        "idle_ghosts" => set(&mut settings.idle_ghosts, value),
        "pending_ghost_cap" => set(&mut settings.pending_ghost_cap, value),
        _ => {
            tracing::warn!(key, "ignoring unknown setting");
            return;
        }
    };
    if !applied {
        tracing::warn!(key, value, "ignoring unparseable setting");
    }
}

fn set<T: std::str::FromStr>(slot: &mut T, value: &str) -> bool {
    match value.parse::<T>() {
        Ok(parsed) => {
            *slot = parsed;
            true
        }
        Err(_) => false,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
