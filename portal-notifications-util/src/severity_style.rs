use crate::{Severity, Variant};

/// RGBA color (values 0.0-1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Accent colors for each severity
pub mod severity_colors {
    use super::Color;

    /// Success - green
    pub const SUCCESS: Color = Color::rgb(0.18, 0.62, 0.33);

    /// Error - alert red
    pub const ERROR: Color = Color::rgb(0.83, 0.18, 0.18);

    /// Warning - amber
    pub const WARNING: Color = Color::rgb(0.93, 0.56, 0.0);

    /// Info - accent blue
    pub const INFO: Color = Color::rgb(0.01, 0.53, 0.82);
}

/// Symbolic icon names for each severity
pub mod severity_icons {
    pub const SUCCESS: &str = "emblem-ok-symbolic";
    pub const ERROR: &str = "dialog-error-symbolic";
    pub const WARNING: &str = "dialog-warning-symbolic";
    pub const INFO: &str = "dialog-information-symbolic";
}

/// Get the accent color for a severity
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => severity_colors::SUCCESS,
        Severity::Error => severity_colors::ERROR,
        Severity::Warning => severity_colors::WARNING,
        Severity::Info => severity_colors::INFO,
    }
}

/// Get the icon name drawn next to a notification of this severity
pub fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => severity_icons::SUCCESS,
        Severity::Error => severity_icons::ERROR,
        Severity::Warning => severity_icons::WARNING,
        Severity::Info => severity_icons::INFO,
    }
}

/// Background fill of a card: solid accent for filled cards, a faint tint for
/// standard ones, nothing for outlined ones (those only get a border).
pub fn variant_background(severity: Severity, variant: Variant) -> Option<Color> {
    let accent = severity_color(severity);
    match variant {
        Variant::Filled => Some(accent),
        Variant::Standard => Some(accent.with_alpha(0.12)),
        Variant::Outlined => None,
    }
}

/// Border color of a card; only outlined cards draw one
pub fn variant_border(severity: Severity, variant: Variant) -> Option<Color> {
    match variant {
        Variant::Outlined => Some(severity_color(severity)),
        Variant::Filled | Variant::Standard => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_color_error() {
        let color = severity_color(Severity::Error);
        assert_eq!(color, severity_colors::ERROR);
        assert!(color.r > 0.5); // Errors should be reddish
    }

    #[test]
    fn test_severity_colors_are_distinct() {
        for a in Severity::ALL {
            for b in Severity::ALL {
                if a != b {
                    assert_ne!(severity_color(a), severity_color(b));
                }
            }
        }
    }

    #[test]
    fn test_severity_icon() {
        assert_eq!(severity_icon(Severity::Error), "dialog-error-symbolic");
        assert_eq!(severity_icon(Severity::Warning), "dialog-warning-symbolic");
        assert_eq!(severity_icon(Severity::Info), "dialog-information-symbolic");
        assert_eq!(severity_icon(Severity::Success), "emblem-ok-symbolic");
    }

    #[test]
    fn test_variant_background() {
        assert_eq!(
            variant_background(Severity::Error, Variant::Filled),
            Some(severity_colors::ERROR)
        );
        assert_eq!(variant_background(Severity::Error, Variant::Outlined), None);

        let tint = variant_background(Severity::Info, Variant::Standard).unwrap();
        assert!(tint.a < 1.0);
    }

    #[test]
    fn test_variant_border() {
        assert_eq!(
            variant_border(Severity::Warning, Variant::Outlined),
            Some(severity_colors::WARNING)
        );
        assert_eq!(variant_border(Severity::Warning, Variant::Filled), None);
        assert_eq!(variant_border(Severity::Warning, Variant::Standard), None);
    }

    #[test]
    fn test_color_constructors() {
        let rgba = Color::new(1.0, 0.5, 0.0, 0.8);
        assert_eq!(rgba.a, 0.8);

        let rgb = Color::rgb(1.0, 0.5, 0.0);
        assert_eq!(rgb.a, 1.0);
        assert_eq!(rgb.with_alpha(0.3).a, 0.3);
    }
}
