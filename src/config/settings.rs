//! Configuration settings for Mirror.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI configuration.
    pub ui: UiConfig,
    /// Insight service configuration.
    pub insight: InsightConfig,
    /// Key bindings.
    pub keybindings: KeyBindings,
    /// Theme configuration.
    pub theme: ThemeConfig,
}

impl Config {
    /// Load configuration from file, returning default if file doesn't exist or fails.
    pub fn load_or_default() -> crate::Result<Self> {
        Self::load(None)
    }

    /// Load configuration from file.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(|| {
            super::config_dir()
                .map(|p| p.join("config.toml"))
                .unwrap_or_else(|_| PathBuf::from("config.toml"))
        });

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let config_path = path.unwrap_or_else(|| {
            super::config_dir()
                .map(|p| p.join("config.toml"))
                .unwrap_or_else(|_| PathBuf::from("config.toml"))
        });

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tick rate in milliseconds for UI updates.
    pub tick_rate_ms: u64,
    /// Enable mouse support (chart hover tracking).
    pub mouse_support: bool,
    /// Subdivisions per curve segment when flattening for the canvas.
    pub chart_smoothing_steps: usize,
    /// Milliseconds between scan status steps.
    pub scan_step_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            mouse_support: true,
            chart_smoothing_steps: 8,
            scan_step_ms: 600,
        }
    }
}

/// Insight service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    /// Completion endpoint base URL.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// API key. Falls back to the MIRROR_API_KEY environment variable.
    pub api_key: Option<String>,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.0-flash".to_string(),
            timeout_secs: 20,
            api_key: None,
        }
    }
}

/// Key bindings configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Quit the application.
    pub quit: String,
    /// Show help.
    pub help: String,
    /// Navigate up.
    pub up: String,
    /// Navigate down.
    pub down: String,
    /// Navigate left.
    pub left: String,
    /// Navigate right.
    pub right: String,
    /// Select/confirm.
    pub select: String,
    /// Cancel/back.
    pub back: String,
    /// Open search.
    pub search: String,
    /// Run a network scan.
    pub scan: String,
    /// Toggle light/dark theme.
    pub theme: String,
    /// Watch/unwatch the focused cluster or market.
    pub watch: String,
    /// Open the trade sheet.
    pub trade: String,
    /// Request an AI insight for the focused signal.
    pub insight: String,
    /// Mark activity read / toggle trade mode.
    pub mark: String,
    /// Expand/collapse the market description.
    pub expand: String,
    /// Switch to the Discover screen.
    pub discover: String,
    /// Switch to the Watchlist screen.
    pub watchlist: String,
    /// Switch to the Activity screen.
    pub activity: String,
    /// Switch to the Profile screen.
    pub profile: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            help: "?".to_string(),
            up: "k".to_string(),
            down: "j".to_string(),
            left: "h".to_string(),
            right: "l".to_string(),
            select: "Enter".to_string(),
            back: "Esc".to_string(),
            search: "/".to_string(),
            scan: "s".to_string(),
            theme: "t".to_string(),
            watch: "w".to_string(),
            trade: "o".to_string(),
            insight: "i".to_string(),
            mark: "m".to_string(),
            expand: "d".to_string(),
            discover: "1".to_string(),
            watchlist: "2".to_string(),
            activity: "3".to_string(),
            profile: "4".to_string(),
        }
    }
}

/// Theme configuration: one palette per mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub dark: Palette,
    pub light: Palette,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            dark: Palette::default(),
            light: Palette::light(),
        }
    }
}

/// A color palette (hex strings).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Background color (hex).
    pub background: String,
    /// Foreground/text color (hex).
    pub foreground: String,
    /// Muted/secondary text color (hex).
    pub muted: String,
    /// Accent color (hex).
    pub accent: String,
    /// Success color (hex).
    pub success: String,
    /// Warning color (hex).
    pub warning: String,
    /// Error color (hex).
    pub error: String,
    /// Border color (hex).
    pub border: String,
    /// Selection/highlight color (hex).
    pub selection: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#09090b".to_string(),
            foreground: "#fafafa".to_string(),
            muted: "#71717a".to_string(),
            accent: "#6366f1".to_string(),
            success: "#22c55e".to_string(),
            warning: "#f59e0b".to_string(),
            error: "#ef4444".to_string(),
            border: "#27272a".to_string(),
            selection: "#3f3f46".to_string(),
        }
    }
}

impl Palette {
    /// The default light-mode palette.
    pub fn light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            foreground: "#09090b".to_string(),
            muted: "#71717a".to_string(),
            accent: "#4f46e5".to_string(),
            success: "#16a34a".to_string(),
            warning: "#d97706".to_string(),
            error: "#dc2626".to_string(),
            border: "#e4e4e7".to_string(),
            selection: "#d4d4d8".to_string(),
        }
    }
}

