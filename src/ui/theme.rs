//! Theme palette resolution.

use ratatui::style::{Color, Modifier, Style};

use crate::config::{Palette, ThemeConfig};
use crate::state::ThemeMode;

/// Resolved theme colors for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub border: Color,
    pub selection: Color,
}

impl Theme {
    /// Resolve the palette for a theme mode. Unparseable hex values fall
    /// back to terminal default colors rather than failing the render.
    pub fn resolve(config: &ThemeConfig, mode: ThemeMode) -> Self {
        let palette = match mode {
            ThemeMode::Dark => &config.dark,
            ThemeMode::Light => &config.light,
        };
        Self::from_palette(palette)
    }

    fn from_palette(palette: &Palette) -> Self {
        Self {
            background: parse_hex(&palette.background).unwrap_or(Color::Reset),
            foreground: parse_hex(&palette.foreground).unwrap_or(Color::White),
            muted: parse_hex(&palette.muted).unwrap_or(Color::DarkGray),
            accent: parse_hex(&palette.accent).unwrap_or(Color::Indexed(105)),
            success: parse_hex(&palette.success).unwrap_or(Color::Green),
            warning: parse_hex(&palette.warning).unwrap_or(Color::Yellow),
            error: parse_hex(&palette.error).unwrap_or(Color::Red),
            border: parse_hex(&palette.border).unwrap_or(Color::DarkGray),
            selection: parse_hex(&palette.selection).unwrap_or(Color::DarkGray),
        }
    }

    /// Base style: foreground on background.
    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    /// Muted/secondary text.
    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Section label style (small-caps analogue).
    pub fn label(&self) -> Style {
        Style::default().fg(self.muted).add_modifier(Modifier::DIM)
    }

    /// Emphasized foreground.
    pub fn strong(&self) -> Style {
        Style::default()
            .fg(self.foreground)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected row highlight.
    pub fn highlight(&self) -> Style {
        Style::default()
            .bg(self.selection)
            .add_modifier(Modifier::BOLD)
    }
}

/// Parse a `#rrggbb` hex color.
fn parse_hex(hex: &str) -> Option<Color> {
    let hex = hex.trim().strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#6366f1"), Some(Color::Rgb(0x63, 0x66, 0xf1)));
        assert_eq!(parse_hex("  #FFFFFF "), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex("6366f1"), None);
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#gggggg"), None);
    }

    #[test]
    fn test_modes_resolve_different_palettes() {
        let config = ThemeConfig::default();
        let dark = Theme::resolve(&config, ThemeMode::Dark);
        let light = Theme::resolve(&config, ThemeMode::Light);
        assert_ne!(dark.background, light.background);
        assert_eq!(dark.background, Color::Rgb(0x09, 0x09, 0x0b));
    }

    #[test]
    fn test_bad_hex_falls_back() {
        let mut config = ThemeConfig::default();
        config.dark.accent = "not-a-color".into();
        let theme = Theme::resolve(&config, ThemeMode::Dark);
        assert_eq!(theme.accent, Color::Indexed(105));
    }
}
