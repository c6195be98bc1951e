use dioxus::prelude::*;
use crate::theme::{radius, tint, TINT};

/// Round icon holder on a translucent version of `color`.
#[component]
pub fn IconCircle(
    icon: &'static str,
    color: &'static str,
    #[props(default = TINT)] opacity: f64,
    #[props(default = 48)] size: u32,
) -> Element {
    let bg = tint(color, opacity);
    let font_size = size / 2;
    rsx! {
        div {
            style: "width: {size}px; height: {size}px; border-radius: {radius::ROUND}; background: {bg}; color: {color}; display: flex; align-items: center; justify-content: center; font-size: {font_size}px; flex-shrink: 0;",
            "{icon}"
        }
    }
}
