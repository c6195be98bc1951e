use dioxus::prelude::*;
use crate::theme::{radius, spacing, typography, AppColors};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    /// (background, text, border)
    fn colors(&self, disabled: bool) -> (&'static str, &'static str, &'static str) {
        if disabled {
            return (AppColors::SURFACE, AppColors::TEXT_SECONDARY, "transparent");
        }
        match self {
            ButtonVariant::Primary => (AppColors::PRIMARY, AppColors::TEXT_LIGHT, "transparent"),
            ButtonVariant::Secondary => (AppColors::SECONDARY, "#000000", "transparent"),
            ButtonVariant::Outline => ("transparent", AppColors::PRIMARY, AppColors::PRIMARY),
        }
    }
}

#[component]
pub fn Button(
    title: String,
    on_press: EventHandler<()>,
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
) -> Element {
    let (bg, fg, border) = variant.colors(disabled);
    let opacity = if disabled { "0.5" } else { "1" };
    let text = typography::BODY.css();
    rsx! {
        button {
            disabled: disabled,
            onclick: move |_| {
                if !disabled {
                    on_press.call(());
                }
            },
            style: "width: 100%; min-height: 48px; padding: {spacing::MD} {spacing::LG}; border-radius: {radius::MEDIUM}; background: {bg}; color: {fg}; border: 1px solid {border}; opacity: {opacity}; cursor: pointer; {text} font-weight: 600;",
            "{title}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secondary_is_green_and_disabled_overrides_variant() {
        assert_eq!(ButtonVariant::Secondary.colors(false).0, AppColors::SECONDARY);
        assert_eq!(
            ButtonVariant::Secondary.colors(true),
            ButtonVariant::Outline.colors(true)
        );
    }
}
