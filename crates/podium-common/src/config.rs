//! Application configuration.
//!
//! Defaults work out of the box; an optional `podium.toml` next to the
//! binary overrides them, and a handful of `PODIUM_*` environment variables
//! override the file.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PodiumError, Result};

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Spreadsheet source settings
    #[serde(default)]
    pub sheet: SheetConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Periodic refresh settings
    #[serde(default)]
    pub refresh: RefreshConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sheet: SheetConfig::default(),
            server: ServerConfig::default(),
            refresh: RefreshConfig::default(),
        }
    }
}

// ── Spreadsheet source ───────────────────────────────────────────────────────

/// Published spreadsheet the leaderboard is read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Document id of the published sheet (must be link-accessible)
    #[serde(default = "default_sheet_id")]
    pub sheet_id: String,

    /// Request timeout for the CSV export fetch, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// How long a fetched-and-ranked board stays valid, in seconds
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

fn default_sheet_id() -> String {
    "1W6KceOOBmnGxblXell3gvTC4vZ7LwHaOYQPZESYGxXQ".to_string()
}
fn default_timeout_secs() -> u64 { 30 }
fn default_cache_ttl_secs() -> u64 { 60 * 60 }

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            sheet_id: default_sheet_id(),
            timeout_secs: default_timeout_secs(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

// ── Server ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the dashboard listens on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_bind_addr() -> String { "127.0.0.1:3001".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: default_bind_addr() }
    }
}

// ── Periodic refresh ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshConfig {
    /// Re-run the fetch pipeline on an interval
    #[serde(default = "default_true")]
    pub auto: bool,

    /// Seconds between refresh ticks
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

fn default_true() -> bool { true }
fn default_interval_secs() -> u64 { 120 }

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            auto: default_true(),
            interval_secs: default_interval_secs(),
        }
    }
}

// ── Loading ──────────────────────────────────────────────────────────────────

impl AppConfig {
    /// Load from a TOML file.
    pub fn from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PodiumError::Config(format!("cannot read {}: {e}", path.display())))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| PodiumError::Config(format!("cannot parse {}: {e}", path.display())))?;
        Ok(config)
    }

    /// Load `podium.toml` if present, otherwise defaults, then apply
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let path = Path::new("podium.toml");
        let mut config = if path.exists() {
            Self::from_toml(path)?
        } else {
            Self::default()
        };
        config.apply_env();
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(id) = std::env::var("PODIUM_SHEET_ID") {
            if !id.is_empty() {
                self.sheet.sheet_id = id;
            }
        }
        if let Ok(addr) = std::env::var("PODIUM_BIND_ADDR") {
            if !addr.is_empty() {
                self.server.bind_addr = addr;
            }
        }
        if let Ok(ttl) = std::env::var("PODIUM_CACHE_TTL_SECS") {
            if let Ok(secs) = ttl.parse() {
                self.sheet.cache_ttl_secs = secs;
            }
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.sheet.cache_ttl_secs, 3600);
        assert_eq!(config.refresh.interval_secs, 120);
        assert!(config.refresh.auto);
        assert_eq!(config.server.bind_addr, "127.0.0.1:3001");
    }

    #[test]
    fn test_partial_toml_uses_field_defaults() {
        let parsed: AppConfig = toml::from_str(
            r#"
            [sheet]
            sheet_id = "abc123"

            [refresh]
            auto = false
            "#,
        )
        .unwrap();
        assert_eq!(parsed.sheet.sheet_id, "abc123");
        assert_eq!(parsed.sheet.timeout_secs, 30);
        assert!(!parsed.refresh.auto);
        assert_eq!(parsed.refresh.interval_secs, 120);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml).unwrap();
        assert_eq!(config.sheet.sheet_id, parsed.sheet.sheet_id);
        assert_eq!(config.server.bind_addr, parsed.server.bind_addr);
    }
}
