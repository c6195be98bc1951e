use dioxus::prelude::*;
use crate::models::{unread_count, NOTIFICATIONS};
use crate::theme::{radius, spacing, tint, AppColors, TINT_SUBTLE};
use crate::widgets::{IconCircle, Screen, ScreenHeader};

#[component]
pub fn NotificationScreen(on_back: EventHandler<()>) -> Element {
    // Local only; resets when the screen is left.
    let mut notifications = use_signal(|| NOTIFICATIONS.to_vec());
    let unread = unread_count(&notifications.read());
    let unread_bg = tint(AppColors::PRIMARY, TINT_SUBTLE);

    rsx! {
        Screen {
            ScreenHeader { title: "Notifications", on_back: move |_| on_back.call(()) }
            div { style: "padding: {spacing::LG};",
                div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: {spacing::MD};",
                    span { style: "color: {AppColors::TEXT_SECONDARY};", "{unread} unread" }
                    button {
                        disabled: unread == 0,
                        onclick: move |_| notifications.write().iter_mut().for_each(|n| n.read = true),
                        style: "background: none; border: none; cursor: pointer; color: {AppColors::PRIMARY}; font-weight: 600;",
                        "Mark all read"
                    }
                }
                if unread == 0 {
                    p { style: "color: {AppColors::TEXT_SECONDARY};", "You're all caught up." }
                }
                for n in notifications() {
                    div {
                        key: "{n.id}",
                        style: "display: flex; gap: {spacing::MD}; padding: {spacing::MD}; margin-bottom: {spacing::SM}; border-radius: {radius::MEDIUM}; border: 1px solid {AppColors::BORDER}; background: {row_background(n.read, &unread_bg)};",
                        IconCircle { icon: n.kind.icon(), color: n.kind.color() }
                        div { style: "flex: 1;",
                            div { style: "display: flex; justify-content: space-between;",
                                span { style: "font-weight: 600;", "{n.title}" }
                                if !n.read {
                                    span { style: "width: 8px; height: 8px; border-radius: {radius::ROUND}; background: {AppColors::PRIMARY};" }
                                }
                            }
                            p { style: "margin: {spacing::XS} 0; color: {AppColors::TEXT_SECONDARY};", "{n.message}" }
                            span { style: "font-size: 12px; color: {AppColors::TEXT_SECONDARY};", "{n.time}" }
                        }
                    }
                }
            }
        }
    }
}

fn row_background(read: bool, unread_bg: &str) -> String {
    if read {
        AppColors::BACKGROUND.to_string()
    } else {
        unread_bg.to_string()
    }
}
