//! App theme: colors, spacing, radii and type scale.

use crate::color::with_opacity;

/// Light medical palette.
#[derive(Clone, Copy)]
pub struct AppColors;

impl AppColors {
    /// Medical blue.
    pub const PRIMARY: &'static str = "#2196F3";
    pub const PRIMARY_DARK: &'static str = "#1976D2";
    /// Medical green.
    pub const SECONDARY: &'static str = "#4CAF50";
    pub const BACKGROUND: &'static str = "#FFFFFF";
    pub const SURFACE: &'static str = "#F5F5F5";
    pub const SURFACE_LIGHT: &'static str = "#FAFAFA";
    pub const TEXT: &'static str = "#212121";
    pub const TEXT_SECONDARY: &'static str = "#757575";
    pub const TEXT_LIGHT: &'static str = "#FFFFFF";
    pub const ERROR: &'static str = "#F44336";
    pub const SUCCESS: &'static str = "#4CAF50";
    pub const WARNING: &'static str = "#FF9800";
    pub const INFO: &'static str = "#2196F3";
    pub const BORDER: &'static str = "#E0E0E0";
    pub const DIVIDER: &'static str = "#BDBDBD";
    pub const SOS: &'static str = "#F44336";
    pub const ACCENT: &'static str = "#FF5722";
    pub const DISABLED: &'static str = "#BDBDBD";
}

/// Tint strengths used for selected cards, icon circles and banners.
pub const TINT_SUBTLE: f64 = 0.06;
pub const TINT_LIGHT: f64 = 0.08;
pub const TINT: f64 = 0.12;

/// Translucent background for a theme color.
pub fn tint(color: &str, opacity: f64) -> String {
    with_opacity(color, opacity)
}

/// Bordered text field used by the form screens.
pub fn input_style() -> String {
    format!(
        "width: 100%; padding: {pad}; border-radius: {r}; border: 1px solid {border}; box-sizing: border-box; margin-bottom: {gap}; {body}",
        pad = spacing::MD,
        r = radius::MEDIUM,
        border = AppColors::BORDER,
        gap = spacing::MD,
        body = typography::BODY.css(),
    )
}

/// 8px grid spacing.
pub mod spacing {
    pub const XS: &str = "4px";
    pub const SM: &str = "8px";
    pub const MD: &str = "16px";
    pub const LG: &str = "24px";
    pub const XL: &str = "32px";
}

pub mod radius {
    pub const SMALL: &str = "4px";
    pub const MEDIUM: &str = "8px";
    pub const LARGE: &str = "16px";
    pub const ROUND: &str = "999px";
}

pub mod typography {
    /// Font size in px plus CSS weight.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct TextStyle {
        pub size: u16,
        pub weight: &'static str,
    }

    impl TextStyle {
        pub fn css(&self) -> String {
            format!("font-size: {}px; font-weight: {};", self.size, self.weight)
        }
    }

    pub const H1: TextStyle = TextStyle { size: 32, weight: "bold" };
    pub const H2: TextStyle = TextStyle { size: 24, weight: "bold" };
    pub const H3: TextStyle = TextStyle { size: 20, weight: "600" };
    pub const BODY: TextStyle = TextStyle { size: 16, weight: "normal" };
    pub const CAPTION: TextStyle = TextStyle { size: 12, weight: "normal" };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tint_uses_palette_color() {
        assert_eq!(tint(AppColors::PRIMARY, TINT), "rgba(33, 150, 243, 0.12)");
        assert_eq!(tint(AppColors::ERROR, TINT), "rgba(244, 67, 54, 0.12)");
    }

    #[test]
    fn input_style_uses_tokens() {
        let css = input_style();
        assert!(css.contains(&format!("border: 1px solid {};", AppColors::BORDER)));
        assert!(css.contains(&format!("border-radius: {};", radius::MEDIUM)));
        assert!(css.contains(&format!("margin-bottom: {};", spacing::MD)));
    }

    #[test]
    fn text_style_css() {
        assert_eq!(typography::H3.css(), "font-size: 20px; font-weight: 600;");
    }
}
