use dioxus::prelude::*;
use crate::theme::{spacing, typography, AppColors};

/// Full-height page on the app background.
#[component]
pub fn Screen(children: Element) -> Element {
    rsx! {
        div {
            style: "min-height: 100vh; background: {AppColors::BACKGROUND}; color: {AppColors::TEXT}; max-width: 480px; margin: 0 auto;",
            {children}
        }
    }
}

/// Title bar with a back arrow.
#[component]
pub fn ScreenHeader(title: String, on_back: EventHandler<()>) -> Element {
    let h3 = typography::H3.css();
    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; padding: {spacing::MD} {spacing::LG}; border-bottom: 1px solid {AppColors::BORDER};",
            button {
                onclick: move |_| on_back.call(()),
                style: "background: none; border: none; cursor: pointer; font-size: 20px; color: {AppColors::TEXT};",
                "←"
            }
            h1 { style: "{h3} margin: 0; color: {AppColors::TEXT};", "{title}" }
            div { style: "width: 24px;" }
        }
    }
}
