use dioxus::prelude::*;
use crate::navigation::Route;
use crate::theme::{spacing, typography, AppColors};
use crate::widgets::{Button, ButtonVariant};

#[component]
pub fn LandingScreen(on_navigate: EventHandler<Route>) -> Element {
    let h1 = typography::H1.css();
    let body = typography::BODY.css();

    rsx! {
        div {
            style: "min-height: 100vh; display: flex; flex-direction: column; justify-content: space-between; padding: {spacing::XL} {spacing::LG}; background: linear-gradient(to bottom, {AppColors::PRIMARY}, {AppColors::PRIMARY_DARK}); color: {AppColors::TEXT_LIGHT}; max-width: 480px; margin: 0 auto; box-sizing: border-box;",
            div { style: "text-align: center; margin-top: 80px;",
                div { style: "font-size: 72px;", "⚕" }
                h1 { style: "{h1} margin: {spacing::MD} 0 {spacing::SM};", "AscendiMed" }
                p { style: "{body} opacity: 0.9;", "Your health, our priority" }
            }
            div { style: "display: flex; flex-direction: column; gap: {spacing::MD};",
                Button {
                    title: "Get Started",
                    on_press: move |_| on_navigate.call(Route::Onboarding),
                }
                Button {
                    title: "View Membership Plans",
                    variant: ButtonVariant::Outline,
                    on_press: move |_| on_navigate.call(Route::Membership),
                }
            }
        }
    }
}
