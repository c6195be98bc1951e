use dioxus::prelude::*;
use crate::models::AccountForm;
use crate::navigation::Route;
use crate::theme::{input_style, spacing, typography, AppColors};
use crate::widgets::{Button, Screen};

#[component]
pub fn CreateAccountScreen(on_navigate: EventHandler<Route>) -> Element {
    let mut form = use_signal(AccountForm::default);
    let h1 = typography::H1.css();
    let caption = typography::CAPTION.css();
    let field_style = input_style();
    let can_submit = form.read().can_submit();
    let mismatch = form.read().is_complete() && !form.read().passwords_match();

    rsx! {
        Screen {
            div { style: "padding: {spacing::XL} {spacing::LG};",
                h1 { style: "{h1} margin: 0 0 {spacing::XS};", "Create Account" }
                p { style: "color: {AppColors::TEXT_SECONDARY}; margin: 0 0 {spacing::XL};", "Join AscendiMed today" }

                label { "Full Name" }
                input {
                    r#type: "text",
                    placeholder: "Enter your full name",
                    value: "{form.read().full_name}",
                    oninput: move |ev| form.write().full_name = ev.value(),
                    style: "{field_style}",
                }
                label { "Email" }
                input {
                    r#type: "email",
                    placeholder: "Enter your email",
                    autocapitalize: "none",
                    value: "{form.read().email}",
                    oninput: move |ev| form.write().email = ev.value(),
                    style: "{field_style}",
                }
                label { "Phone Number" }
                input {
                    r#type: "tel",
                    placeholder: "Enter your phone number",
                    value: "{form.read().phone}",
                    oninput: move |ev| form.write().phone = ev.value(),
                    style: "{field_style}",
                }
                label { "Password" }
                input {
                    r#type: "password",
                    placeholder: "Create a password",
                    value: "{form.read().password}",
                    oninput: move |ev| form.write().password = ev.value(),
                    style: "{field_style}",
                }
                label { "Confirm Password" }
                input {
                    r#type: "password",
                    placeholder: "Confirm your password",
                    value: "{form.read().confirm_password}",
                    oninput: move |ev| form.write().confirm_password = ev.value(),
                    style: "{field_style}",
                }
                if mismatch {
                    p { style: "{caption} color: {AppColors::ERROR}; margin: 0 0 {spacing::MD};", "Passwords do not match" }
                }
                p { style: "{caption} color: {AppColors::TEXT_SECONDARY}; text-align: center; margin: 0 0 {spacing::LG};",
                    "By creating an account, you agree to our "
                    span { style: "color: {AppColors::PRIMARY};", "Terms of Service" }
                    " and "
                    span { style: "color: {AppColors::PRIMARY};", "Privacy Policy" }
                }
                Button {
                    title: "Create Account",
                    disabled: !can_submit,
                    on_press: move |_| {
                        tracing::info!("account created locally");
                        on_navigate.call(Route::Home);
                    },
                }
            }
        }
    }
}
