use dioxus::prelude::*;
use crate::models::{OnboardingPager, ONBOARDING_PAGES};
use crate::navigation::Route;
use crate::theme::{radius, spacing, tint, typography, AppColors, TINT};
use crate::widgets::{Button, ButtonVariant, Screen};

#[component]
pub fn OnboardingScreen(on_navigate: EventHandler<Route>) -> Element {
    let mut pager = use_signal(OnboardingPager::default);
    let page = pager.read().page();
    let is_last = pager.read().is_last();
    let current = pager.read().current();
    let h2 = typography::H2.css();
    let body = typography::BODY.css();
    let icon_bg = tint(AppColors::PRIMARY, TINT);

    rsx! {
        Screen {
            div { style: "min-height: 100vh; display: flex; flex-direction: column; justify-content: space-between; padding: {spacing::XL} {spacing::LG}; box-sizing: border-box;",
                div { style: "flex: 1; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center;",
                    div { style: "width: 200px; height: 200px; border-radius: {radius::ROUND}; background: {icon_bg}; display: flex; align-items: center; justify-content: center; font-size: 80px; margin-bottom: {spacing::XL};",
                        "{page.icon}"
                    }
                    h1 { style: "{h2} margin: 0 0 {spacing::MD};", "{page.title}" }
                    p { style: "{body} color: {AppColors::TEXT_SECONDARY}; line-height: 1.5; padding: 0 {spacing::LG};", "{page.description}" }
                }
                div { style: "display: flex; justify-content: center; gap: {spacing::SM}; margin-bottom: {spacing::LG};",
                    for (index, _) in ONBOARDING_PAGES.iter().enumerate() {
                        button {
                            key: "{index}",
                            onclick: move |_| pager.set(pager().go_to(index)),
                            style: "{dot_style(index == current)}",
                        }
                    }
                }
                div { style: "display: flex; flex-direction: column; gap: {spacing::MD};",
                    if is_last {
                        Button {
                            title: "Get Started",
                            on_press: move |_| on_navigate.call(Route::CreateAccount),
                        }
                    } else {
                        Button {
                            title: "Next",
                            on_press: move |_| pager.set(pager().next()),
                        }
                    }
                    Button {
                        title: "Skip",
                        variant: ButtonVariant::Outline,
                        on_press: move |_| on_navigate.call(Route::CreateAccount),
                    }
                }
            }
        }
    }
}

fn dot_style(active: bool) -> String {
    let (width, color) = if active {
        ("24px", AppColors::PRIMARY)
    } else {
        ("8px", AppColors::BORDER)
    };
    format!(
        "width: {width}; height: 8px; padding: 0; border: none; border-radius: {}; background: {color}; cursor: pointer;",
        radius::SMALL
    )
}
