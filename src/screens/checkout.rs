use dioxus::prelude::*;
use crate::models::{CheckoutSummary, PaymentForm, PlanId};
use crate::navigation::Route;
use crate::theme::{input_style, radius, spacing, tint, typography, AppColors, TINT};
use crate::widgets::{Button, Screen, ScreenHeader};

#[component]
pub fn MembershipCheckoutScreen(
    plan: PlanId,
    on_navigate: EventHandler<Route>,
    on_back: EventHandler<()>,
) -> Element {
    let mut form = use_signal(PaymentForm::default);
    let summary = CheckoutSummary::for_plan(plan);
    let h3 = typography::H3.css();
    let secure_bg = tint(AppColors::SUCCESS, TINT);
    let complete = form.read().is_complete();
    let field_style = input_style();
    let pay_label = format!("Pay {}/month", CheckoutSummary::format_money(summary.total_cents));

    rsx! {
        Screen {
            ScreenHeader { title: "Checkout", on_back: move |_| on_back.call(()) }
            div { style: "padding: {spacing::LG};",
                div { style: "padding: {spacing::MD}; border-radius: {radius::LARGE}; background: {AppColors::SURFACE}; margin-bottom: {spacing::LG};",
                    h2 { style: "{h3} margin-top: 0;", "Plan Summary" }
                    div { style: "display: flex; justify-content: space-between; margin-bottom: {spacing::SM};",
                        span { "{plan.plan().name} Plan" }
                        span { "{CheckoutSummary::format_money(summary.subtotal_cents)}/month" }
                    }
                    div { style: "display: flex; justify-content: space-between; margin-bottom: {spacing::SM};",
                        span { "Tax" }
                        span { "{CheckoutSummary::format_money(summary.tax_cents)}" }
                    }
                    div { style: "display: flex; justify-content: space-between; padding-top: {spacing::SM}; border-top: 1px solid {AppColors::BORDER}; font-weight: bold;",
                        span { "Total" }
                        span { style: "color: {AppColors::PRIMARY};", "{CheckoutSummary::format_money(summary.total_cents)}/month" }
                    }
                }
                h2 { style: "{h3}", "Payment Method" }
                label { "Cardholder Name" }
                input {
                    r#type: "text",
                    placeholder: "John Doe",
                    value: "{form.read().card_name}",
                    oninput: move |ev| form.write().card_name = ev.value(),
                    style: "{field_style}",
                }
                label { "Card Number" }
                input {
                    r#type: "text",
                    placeholder: "1234 5678 9012 3456",
                    maxlength: "19",
                    value: "{form.read().card_number}",
                    oninput: move |ev| form.write().card_number = ev.value(),
                    style: "{field_style}",
                }
                div { style: "display: flex; gap: {spacing::MD};",
                    div { style: "flex: 1;",
                        label { "Expiry Date" }
                        input {
                            r#type: "text",
                            placeholder: "MM/YY",
                            maxlength: "5",
                            value: "{form.read().expiry}",
                            oninput: move |ev| form.write().expiry = ev.value(),
                            style: "{field_style}",
                        }
                    }
                    div { style: "flex: 1;",
                        label { "CVV" }
                        input {
                            r#type: "password",
                            placeholder: "123",
                            maxlength: "3",
                            value: "{form.read().cvv}",
                            oninput: move |ev| form.write().cvv = ev.value(),
                            style: "{field_style}",
                        }
                    }
                }
                div { style: "display: flex; gap: {spacing::SM}; align-items: center; padding: {spacing::MD}; border-radius: {radius::MEDIUM}; background: {secure_bg}; color: {AppColors::SUCCESS}; margin-bottom: {spacing::LG};",
                    "🔒 Your payment information is secure and encrypted"
                }
                Button {
                    title: pay_label,
                    disabled: !complete,
                    on_press: move |_| {
                        tracing::info!(plan = %plan, "membership payment accepted");
                        on_navigate.call(Route::MyMembership);
                    },
                }
            }
        }
    }
}
