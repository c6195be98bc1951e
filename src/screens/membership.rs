use dioxus::prelude::*;
use crate::models::{CheckoutSummary, PlanId, PLANS};
use crate::navigation::Route;
use crate::theme::{radius, spacing, tint, typography, AppColors, TINT_SUBTLE};
use crate::widgets::{Button, Screen, ScreenHeader};

#[component]
pub fn MembershipScreen(on_navigate: EventHandler<Route>, on_back: EventHandler<()>) -> Element {
    let mut selected = use_signal(PlanId::default);
    let h2 = typography::H2.css();
    let h3 = typography::H3.css();
    let selected_bg = tint(AppColors::PRIMARY, TINT_SUBTLE);

    rsx! {
        Screen {
            ScreenHeader { title: "Membership Plans", on_back: move |_| on_back.call(()) }
            div { style: "padding: {spacing::LG};",
                p { style: "color: {AppColors::TEXT_SECONDARY}; text-align: center; margin-bottom: {spacing::LG};",
                    "Choose the plan that best fits your healthcare needs"
                }
                for plan in PLANS {
                    div {
                        key: "{plan.id}",
                        onclick: move |_| selected.set(plan.id),
                        style: "position: relative; padding: {spacing::LG}; margin-bottom: {spacing::MD}; border-radius: {radius::LARGE}; cursor: pointer; {plan_card_style(selected() == plan.id, plan.popular, &selected_bg)}",
                        if plan.popular {
                            span {
                                style: "position: absolute; top: -12px; right: {spacing::MD}; padding: {spacing::XS} {spacing::SM}; border-radius: {radius::MEDIUM}; background: {AppColors::ACCENT}; color: {AppColors::TEXT_LIGHT}; font-size: 12px; font-weight: 600;",
                                "Most Popular"
                            }
                        }
                        div { style: "display: flex; justify-content: space-between; align-items: baseline;",
                            h2 { style: "{h3} margin: 0;", "{plan.name}" }
                            div {
                                span { style: "{h2} color: {AppColors::PRIMARY};", "{CheckoutSummary::format_whole(plan.monthly_price)}" }
                                span { style: "color: {AppColors::TEXT_SECONDARY};", "/month" }
                            }
                        }
                        ul { style: "margin: {spacing::MD} 0 0; padding: 0; list-style: none;",
                            for feature in plan.features {
                                li { style: "margin-bottom: {spacing::XS};",
                                    span { style: "color: {AppColors::SUCCESS};", "✓ " }
                                    "{feature}"
                                }
                            }
                        }
                    }
                }
                Button {
                    title: "Continue to Checkout",
                    on_press: move |_| on_navigate.call(Route::MembershipCheckout(selected())),
                }
            }
        }
    }
}

fn plan_card_style(selected: bool, popular: bool, selected_bg: &str) -> String {
    let border = if selected {
        format!("2px solid {}", AppColors::PRIMARY)
    } else if popular {
        format!("2px solid {}", AppColors::ACCENT)
    } else {
        format!("1px solid {}", AppColors::BORDER)
    };
    let bg = if selected { selected_bg } else { AppColors::BACKGROUND };
    format!("border: {}; background: {};", border, bg)
}
