use dioxus::prelude::*;
use crate::models::{SettingsItem, ToggleState, SETTINGS_GROUPS};
use crate::theme::{radius, spacing, tint, AppColors, TINT_LIGHT};
use crate::widgets::{Screen, ScreenHeader};

#[component]
pub fn SettingsScreen(on_back: EventHandler<()>) -> Element {
    let mut toggles = use_signal(ToggleState::default);
    let icon_bg = tint(AppColors::PRIMARY, TINT_LIGHT);

    rsx! {
        Screen {
            ScreenHeader { title: "Settings", on_back: move |_| on_back.call(()) }
            div { style: "padding: {spacing::LG};",
                for group in SETTINGS_GROUPS {
                    div { key: "{group.title}", style: "margin-bottom: {spacing::LG};",
                        h2 { style: "font-size: 14px; font-weight: 600; text-transform: uppercase; color: {AppColors::TEXT_SECONDARY}; margin-bottom: {spacing::SM};",
                            "{group.title}"
                        }
                        div { style: "border-radius: {radius::MEDIUM}; border: 1px solid {AppColors::BORDER}; overflow: hidden;",
                            for item in group.items {
                                div {
                                    key: "{item.title()}",
                                    style: "display: flex; align-items: center; gap: {spacing::MD}; padding: {spacing::MD}; border-bottom: 1px solid {AppColors::BORDER};",
                                    div { style: "width: 36px; height: 36px; border-radius: {radius::MEDIUM}; background: {icon_bg}; display: flex; align-items: center; justify-content: center;",
                                        "{item.icon()}"
                                    }
                                    span { style: "flex: 1;", "{item.title()}" }
                                    {match *item {
                                        SettingsItem::Toggle { key, .. } => rsx! {
                                            input {
                                                r#type: "checkbox",
                                                checked: toggles().get(key),
                                                onchange: move |_| {
                                                    let next = toggles().toggled(key);
                                                    toggles.set(next);
                                                },
                                            }
                                        },
                                        SettingsItem::Action { right_text: Some(right), .. } => rsx! {
                                            span { style: "color: {AppColors::TEXT_SECONDARY};", "{right} ›" }
                                        },
                                        SettingsItem::Action { .. } => rsx! {
                                            span { style: "color: {AppColors::TEXT_SECONDARY};", "›" }
                                        },
                                    }}
                                }
                            }
                        }
                    }
                }
                p { style: "text-align: center; color: {AppColors::TEXT_SECONDARY}; font-size: 12px;", "Version 1.0.0" }
            }
        }
    }
}
