//! Grid color palettes, selected by the `theme` setting and optionally
//! overridden slot-by-slot with hex colors from the config file.

use ratatui::style::Color;
use std::collections::HashMap;

/// Theme colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,         // Active borders, highlights
    pub danger: Color,         // Delete action, red badge text
    pub success: Color,        // Green badge text, high progress fill
    pub warning: Color,        // Mid progress fill, status messages
    pub text: Color,           // Primary text
    pub text_dim: Color,       // Dimmed text, empty progress track
    pub bg_selected: Color,    // Selection background
    pub bg_stripe: Color,      // Alternate row background (striped mode)
    pub badge_positive: Color, // Green badge background tint
    pub badge_negative: Color, // Red badge background tint
    pub inactive: Color,       // Inactive borders
    pub header: Color,         // Column header text
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Resolve a theme by name, then apply any hex overrides from config.
    /// Unknown names fall back to dark.
    pub fn load(name: &str, overrides: &HashMap<String, String>) -> Self {
        let mut theme = match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            other => {
                tracing::warn!("Unknown theme '{}', using dark", other);
                Self::dark()
            }
        };
        theme.apply_overrides(overrides);
        theme
    }

    fn dark() -> Self {
        Self {
            accent: Color::Rgb(250, 179, 135),
            danger: Color::Rgb(243, 139, 168),
            success: Color::Rgb(166, 218, 149),
            warning: Color::Rgb(249, 226, 175),
            text: Color::Rgb(205, 214, 244),
            text_dim: Color::Rgb(147, 153, 178),
            bg_selected: Color::Rgb(69, 71, 90),
            bg_stripe: Color::Rgb(39, 40, 56),
            badge_positive: Color::Rgb(42, 74, 48),
            badge_negative: Color::Rgb(86, 40, 46),
            inactive: Color::Rgb(88, 91, 112),
            header: Color::Rgb(243, 139, 168),
        }
    }

    fn light() -> Self {
        Self {
            accent: Color::Rgb(223, 142, 29),
            danger: Color::Rgb(169, 68, 66),
            success: Color::Rgb(60, 118, 61),
            warning: Color::Rgb(240, 173, 78),
            text: Color::Rgb(54, 56, 74),
            text_dim: Color::Rgb(140, 143, 161),
            bg_selected: Color::Rgb(204, 208, 218),
            bg_stripe: Color::Rgb(230, 233, 239),
            badge_positive: Color::Rgb(223, 240, 216),
            badge_negative: Color::Rgb(242, 222, 222),
            inactive: Color::Rgb(172, 176, 190),
            header: Color::Rgb(136, 57, 239),
        }
    }

    fn apply_overrides(&mut self, overrides: &HashMap<String, String>) {
        for (slot, value) in overrides {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!("Ignoring bad color '{}' for slot '{}'", value, slot);
                continue;
            };
            match slot.as_str() {
                "accent" => self.accent = color,
                "danger" => self.danger = color,
                "success" => self.success = color,
                "warning" => self.warning = color,
                "text" => self.text = color,
                "text_dim" => self.text_dim = color,
                "bg_selected" => self.bg_selected = color,
                "bg_stripe" => self.bg_stripe = color,
                "badge_positive" => self.badge_positive = color,
                "badge_negative" => self.badge_negative = color,
                "inactive" => self.inactive = color,
                "header" => self.header = color,
                other => tracing::warn!("Unknown theme slot '{}'", other),
            }
        }
    }
}

/// Parse a hex color string (#RRGGBB or #RGB)
fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.trim().trim_start_matches('#');

    if s.len() == 6 {
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Color::Rgb(r, g, b))
    } else if s.len() == 3 {
        let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
        let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
        let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
        Some(Color::Rgb(r, g, b))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(parse_hex_color("#dff0d8"), Some(Color::Rgb(223, 240, 216)));
        assert_eq!(parse_hex_color("f2dede"), Some(Color::Rgb(242, 222, 222)));
    }

    #[test]
    fn parses_three_digit_hex() {
        assert_eq!(parse_hex_color("#fff"), Some(Color::Rgb(255, 255, 255)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_hex_color("#zzz"), None);
        assert_eq!(parse_hex_color("not-a-color"), None);
    }

    #[test]
    fn overrides_replace_named_slots() {
        let mut overrides = HashMap::new();
        overrides.insert("accent".to_string(), "#ff0000".to_string());
        overrides.insert("bogus_slot".to_string(), "#00ff00".to_string());
        let theme = Theme::load("dark", &overrides);
        assert_eq!(theme.accent, Color::Rgb(255, 0, 0));
    }

    #[test]
    fn unknown_theme_falls_back_to_dark() {
        let theme = Theme::load("solarized", &HashMap::new());
        assert_eq!(theme.text, Theme::dark().text);
    }
}
