use dioxus::prelude::*;
use crate::theme::{radius, spacing, AppColors};

/// White surface with a soft border. `background` overrides the surface, e.g. a tint.
#[component]
pub fn Card(background: Option<String>, children: Element) -> Element {
    let bg = background.unwrap_or_else(|| AppColors::BACKGROUND.to_string());
    rsx! {
        div {
            style: "background: {bg}; border: 1px solid {AppColors::BORDER}; border-radius: {radius::LARGE}; padding: {spacing::MD}; margin-bottom: {spacing::MD};",
            {children}
        }
    }
}
