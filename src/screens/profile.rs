use dioxus::prelude::*;
use crate::navigation::Route;
use crate::theme::{radius, spacing, tint, typography, AppColors, TINT};
use crate::widgets::{Card, IconCircle};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuItem {
    pub title: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub route: Option<Route>,
}

pub const MENU_ITEMS: &[MenuItem] = &[
    MenuItem { title: "My Appointments", icon: "📅", color: AppColors::PRIMARY, route: Some(Route::BookAppointment) },
    MenuItem { title: "My Membership", icon: "💳", color: AppColors::ACCENT, route: Some(Route::MyMembership) },
    MenuItem { title: "Medical Records", icon: "📄", color: AppColors::INFO, route: None },
    MenuItem { title: "Prescriptions", icon: "💊", color: AppColors::SECONDARY, route: None },
    MenuItem { title: "Emergency Contacts", icon: "📞", color: AppColors::SOS, route: None },
    MenuItem { title: "Settings", icon: "⚙", color: AppColors::TEXT_SECONDARY, route: Some(Route::Settings) },
];

#[component]
pub fn ProfileScreen(on_navigate: EventHandler<Route>, on_logout: EventHandler<()>) -> Element {
    let h2 = typography::H2.css();
    let avatar_bg = tint(AppColors::PRIMARY, TINT);
    let logout_bg = tint(AppColors::ERROR, TINT);

    rsx! {
        div { style: "background: {AppColors::PRIMARY}; color: {AppColors::TEXT_LIGHT}; padding: 60px {spacing::LG} {spacing::LG};",
            h1 { style: "{h2} margin: 0;", "Profile" }
        }
        div { style: "padding: {spacing::LG};",
            Card {
                div { style: "display: flex; flex-direction: column; align-items: center;",
                    div { style: "width: 100px; height: 100px; border-radius: {radius::ROUND}; background: {avatar_bg}; display: flex; align-items: center; justify-content: center; font-size: 56px;", "👤" }
                    p { style: "margin: {spacing::MD} 0 {spacing::XS}; {h2}", "John Doe" }
                    p { style: "margin: 0; color: {AppColors::TEXT_SECONDARY};", "john.doe@example.com" }
                    p { style: "margin: {spacing::XS} 0 0; color: {AppColors::TEXT_SECONDARY};", "+1 234 567 8900" }
                }
            }
            for item in MENU_ITEMS {
                button {
                    key: "{item.title}",
                    onclick: move |_| {
                        if let Some(route) = item.route {
                            on_navigate.call(route);
                        }
                    },
                    style: "width: 100%; display: flex; align-items: center; gap: {spacing::MD}; padding: {spacing::MD}; margin-bottom: {spacing::SM}; border-radius: {radius::MEDIUM}; border: none; background: {AppColors::SURFACE_LIGHT}; cursor: pointer; text-align: left;",
                    IconCircle { icon: item.icon, color: item.color }
                    span { style: "flex: 1; font-weight: 500; color: {AppColors::TEXT};", "{item.title}" }
                    span { style: "color: {AppColors::TEXT_SECONDARY};", "›" }
                }
            }
            button {
                onclick: move |_| on_logout.call(()),
                style: "width: 100%; margin-top: {spacing::LG}; padding: {spacing::MD}; border-radius: {radius::MEDIUM}; border: none; background: {logout_bg}; color: {AppColors::ERROR}; font-weight: 600; cursor: pointer;",
                "⎋ Logout"
            }
        }
    }
}
