use dioxus::prelude::*;
use crate::models::{CheckoutSummary, CURRENT_MEMBERSHIP, PAYMENT_HISTORY};
use crate::navigation::Route;
use crate::theme::{radius, spacing, tint, typography, AppColors, TINT};
use crate::widgets::{Button, Card, Screen};

#[component]
pub fn MyMembershipScreen(on_navigate: EventHandler<Route>, on_back: EventHandler<()>) -> Element {
    let membership = CURRENT_MEMBERSHIP;
    let h2 = typography::H2.css();
    let h3 = typography::H3.css();
    let glass = tint(AppColors::TEXT_LIGHT, 0.2);
    let badge_bg = tint(AppColors::SUCCESS, TINT);

    rsx! {
        Screen {
            div { style: "background: linear-gradient(to bottom, {AppColors::PRIMARY}, {AppColors::PRIMARY_DARK}); color: {AppColors::TEXT_LIGHT}; padding: {spacing::LG};",
                div { style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: {spacing::LG};",
                    button {
                        onclick: move |_| on_back.call(()),
                        style: "background: none; border: none; cursor: pointer; font-size: 20px; color: {AppColors::TEXT_LIGHT};",
                        "←"
                    }
                    h1 { style: "{h3} margin: 0;", "My Membership" }
                    div { style: "width: 24px;" }
                }
                div { style: "padding: {spacing::LG}; border-radius: {radius::LARGE}; background: {glass};",
                    div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: {spacing::MD};",
                        span { style: "{h2}", "{membership.plan.plan().name} Plan" }
                        span { style: "padding: {spacing::XS} {spacing::MD}; border-radius: {radius::ROUND}; background: {badge_bg}; color: {AppColors::TEXT_LIGHT}; font-weight: 600;",
                            "{membership.status}"
                        }
                    }
                    p { style: "margin: 0 0 {spacing::SM};", "📅 Renews on {membership.renewal_date}" }
                    p { style: "margin: 0;", "🕙 Member since {membership.member_since}" }
                }
            }
            div { style: "padding: {spacing::LG};",
                h2 { style: "{h3}", "Your Benefits" }
                for benefit in membership.benefits {
                    div { key: "{benefit}", style: "display: flex; align-items: center; gap: {spacing::MD}; margin-bottom: {spacing::MD};",
                        span { style: "color: {AppColors::SUCCESS}; font-size: 20px;", "✔" }
                        span { "{benefit}" }
                    }
                }
                div { style: "margin: {spacing::LG} 0;",
                    Button {
                        title: "Upgrade Plan",
                        on_press: move |_| on_navigate.call(Route::Membership),
                    }
                    p { style: "text-align: center; color: {AppColors::ERROR}; font-weight: 600; margin-top: {spacing::MD};", "Cancel Membership" }
                }
                h2 { style: "{h3}", "Payment History" }
                Card {
                    for payment in PAYMENT_HISTORY {
                        div { key: "{payment.date}", style: "display: flex; justify-content: space-between; align-items: center; padding: {spacing::SM} 0; border-bottom: 1px solid {AppColors::BORDER};",
                            div {
                                p { style: "margin: 0; font-weight: 600;", "{payment.date}" }
                                p { style: "margin: 0; color: {AppColors::SUCCESS}; font-size: 14px;", "{payment.status}" }
                            }
                            span { style: "font-weight: 600;", "{CheckoutSummary::format_money(payment.amount_cents)}" }
                        }
                    }
                }
            }
        }
    }
}
