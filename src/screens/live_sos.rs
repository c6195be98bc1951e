use dioxus::prelude::*;
use crate::models::{SosState, SOS_INFO};
use crate::navigation::Route;
use crate::theme::{radius, spacing, tint, typography, AppColors, TINT, TINT_LIGHT};
use crate::widgets::{Button, ButtonVariant, IconCircle, Screen};

#[component]
pub fn LiveSosScreen(on_navigate: EventHandler<Route>, on_back: EventHandler<()>) -> Element {
    let mut sos = use_signal(SosState::default);
    let state = sos();
    let h2 = typography::H2.css();
    let h3 = typography::H3.css();
    let header_bg = state.header_color();
    let button_bg = state.button_color();
    let ring = tint(button_bg, TINT);
    let cancel_bg = tint(AppColors::ERROR, TINT);

    rsx! {
        Screen {
            div { style: "background: {header_bg}; color: {AppColors::TEXT_LIGHT}; padding: {spacing::LG} {spacing::LG};",
                button {
                    onclick: move |_| on_back.call(()),
                    style: "background: none; border: none; cursor: pointer; font-size: 20px; color: {AppColors::TEXT_LIGHT}; padding: 0;",
                    "←"
                }
                h1 { style: "{h2} margin: {spacing::SM} 0 {spacing::XS};", "Emergency SOS" }
                p { style: "margin: 0; opacity: 0.9;", "{state.status_text()}" }
            }
            div { style: "padding: {spacing::LG}; display: flex; flex-direction: column; align-items: center;",
                button {
                    onclick: move |_| {
                        let next = sos().toggled();
                        if next.active {
                            tracing::warn!("emergency SOS raised");
                        } else {
                            tracing::info!("emergency SOS cleared");
                        }
                        sos.set(next);
                    },
                    style: "width: 220px; height: 220px; border-radius: {radius::ROUND}; background: {button_bg}; color: {AppColors::TEXT_LIGHT}; border: none; box-shadow: 0 0 0 24px {ring}; margin: {spacing::XL} 0; cursor: pointer; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: {spacing::SM};",
                    span { style: "font-size: 72px;", "{state.button_icon()}" }
                    span { style: "{h3}", "{state.button_label()}" }
                }
                div { style: "width: 100%;",
                    for info in SOS_INFO {
                        div {
                            key: "{info.title}",
                            style: "display: flex; align-items: center; gap: {spacing::MD}; padding: {spacing::MD}; margin-bottom: {spacing::SM}; border-radius: {radius::MEDIUM}; background: {AppColors::SURFACE};",
                            IconCircle { icon: info.icon, color: AppColors::PRIMARY, opacity: TINT_LIGHT, size: 40 }
                            div {
                                p { style: "margin: 0; font-size: 14px; color: {AppColors::TEXT_SECONDARY};", "{info.title}" }
                                p { style: "margin: 0; font-weight: 600;", "{info.value}" }
                            }
                        }
                    }
                }
                if state.active {
                    div { style: "width: 100%; display: flex; flex-direction: column; gap: {spacing::MD}; margin-top: {spacing::MD};",
                        Button {
                            title: "Chat with Driver",
                            variant: ButtonVariant::Secondary,
                            on_press: move |_| on_navigate.call(Route::ChatWithDriver),
                        }
                        button {
                            onclick: move |_| sos.set(sos().cancelled()),
                            style: "width: 100%; padding: {spacing::MD}; border-radius: {radius::MEDIUM}; border: 1px solid {AppColors::ERROR}; background: {cancel_bg}; color: {AppColors::ERROR}; font-weight: 600; cursor: pointer;",
                            "Cancel Emergency"
                        }
                    }
                }
            }
        }
    }
}
