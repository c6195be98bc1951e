use dioxus::prelude::*;
use crate::models::{unread_count, NOTIFICATIONS};
use crate::navigation::Route;
use crate::theme::{radius, spacing, tint, typography, AppColors, TINT, TINT_SUBTLE};
use crate::widgets::{Card, IconCircle};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuickAction {
    pub title: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub route: Route,
}

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction { title: "Book Appointment", icon: "📅", color: AppColors::PRIMARY, route: Route::BookAppointment },
    QuickAction { title: "Live Chat", icon: "💬", color: AppColors::SECONDARY, route: Route::Chat },
    QuickAction { title: "Emergency SOS", icon: "⚠", color: AppColors::SOS, route: Route::LiveSos },
    QuickAction { title: "My Membership", icon: "💳", color: AppColors::ACCENT, route: Route::MyMembership },
];

#[component]
pub fn HomeScreen(on_navigate: EventHandler<Route>) -> Element {
    let unread = unread_count(NOTIFICATIONS);
    let h2 = typography::H2.css();
    let h3 = typography::H3.css();
    let caption = typography::CAPTION.css();
    let avatar_bg = tint(AppColors::PRIMARY, TINT);
    let tip_bg = tint(AppColors::SECONDARY, TINT_SUBTLE);

    rsx! {
        div { style: "background: {AppColors::PRIMARY}; color: {AppColors::TEXT_LIGHT}; padding: 60px {spacing::LG} {spacing::XL};",
            div { style: "display: flex; justify-content: space-between; align-items: center;",
                div {
                    p { style: "margin: 0; opacity: 0.9;", "Good Morning" }
                    h1 { style: "{h2} margin: {spacing::XS} 0 0;", "John Doe" }
                }
                button {
                    onclick: move |_| on_navigate.call(Route::Notifications),
                    style: "position: relative; background: none; border: none; cursor: pointer; font-size: 28px; color: {AppColors::TEXT_LIGHT};",
                    "🔔"
                    if unread > 0 {
                        span {
                            style: "position: absolute; top: -4px; right: -4px; min-width: 18px; height: 18px; border-radius: {radius::ROUND}; background: {AppColors::ERROR}; {caption} font-weight: bold; line-height: 18px;",
                            "{unread}"
                        }
                    }
                }
            }
        }
        div { style: "padding: {spacing::LG};",
            div {
                style: "display: flex; align-items: center; gap: {spacing::SM}; padding: {spacing::MD}; border-radius: {radius::MEDIUM}; background: {AppColors::SURFACE}; color: {AppColors::TEXT_SECONDARY}; margin-bottom: {spacing::LG};",
                "🔍 Search doctors, services..."
            }
            h2 { style: "{h3}", "Quick Actions" }
            div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: {spacing::MD}; margin-bottom: {spacing::LG};",
                for action in QUICK_ACTIONS {
                    button {
                        key: "{action.title}",
                        onclick: move |_| on_navigate.call(action.route),
                        style: "display: flex; flex-direction: column; align-items: center; gap: {spacing::SM}; padding: {spacing::MD}; border-radius: {radius::LARGE}; border: 1px solid {AppColors::BORDER}; background: {AppColors::BACKGROUND}; cursor: pointer;",
                        IconCircle { icon: action.icon, color: action.color, size: 64 }
                        span { style: "font-weight: 600; color: {AppColors::TEXT};", "{action.title}" }
                    }
                }
            }
            div { style: "display: flex; justify-content: space-between; align-items: baseline;",
                h2 { style: "{h3}", "Upcoming Appointments" }
                span { style: "color: {AppColors::PRIMARY}; font-weight: 600;", "See All" }
            }
            Card {
                div { style: "display: flex; align-items: center; gap: {spacing::MD}; margin-bottom: {spacing::MD};",
                    div { style: "width: 48px; height: 48px; border-radius: {radius::ROUND}; background: {avatar_bg}; display: flex; align-items: center; justify-content: center;", "👤" }
                    div {
                        p { style: "margin: 0; font-weight: 600;", "Dr. Sarah Johnson" }
                        p { style: "margin: 0; color: {AppColors::TEXT_SECONDARY};", "Cardiologist" }
                    }
                }
                p { style: "margin: 0 0 {spacing::XS}; color: {AppColors::TEXT_SECONDARY};", "📅 Tomorrow, March 15" }
                p { style: "margin: 0; color: {AppColors::TEXT_SECONDARY};", "🕙 10:00 AM" }
            }
            h2 { style: "{h3}", "Health Tips" }
            Card { background: tip_bg,
                p { style: "margin: 0 0 {spacing::SM}; font-weight: 600;", "Stay Hydrated" }
                p { style: "margin: 0; color: {AppColors::TEXT_SECONDARY};",
                    "Drink at least 8 glasses of water daily to maintain optimal health and energy levels."
                }
            }
        }
    }
}
