use dioxus::prelude::*;
use crate::models::{AppointmentRequest, DATE_OPTIONS, DOCTORS, TIME_SLOTS};
use crate::theme::{radius, spacing, tint, typography, AppColors, TINT_SUBTLE};
use crate::widgets::{Button, Screen, ScreenHeader};

#[component]
pub fn BookAppointmentScreen(on_back: EventHandler<()>) -> Element {
    let mut request = use_signal(AppointmentRequest::default);
    let mut confirmed = use_signal(|| false);
    let h3 = typography::H3.css();
    let selected_bg = tint(AppColors::PRIMARY, TINT_SUBTLE);
    let complete = request.read().is_complete();

    rsx! {
        Screen {
            ScreenHeader { title: "Book Appointment", on_back: move |_| on_back.call(()) }
            div { style: "padding: {spacing::LG};",
                h2 { style: "{h3}", "Select Doctor" }
                div { style: "display: flex; gap: {spacing::MD}; overflow-x: auto; padding-bottom: {spacing::SM};",
                    for doctor in DOCTORS {
                        button {
                            key: "{doctor.id}",
                            onclick: move |_| request.write().doctor_id = Some(doctor.id.to_string()),
                            style: "min-width: 140px; padding: {spacing::MD}; border-radius: {radius::LARGE}; cursor: pointer; {chip_style(request.read().doctor_id.as_deref() == Some(doctor.id), &selected_bg)}",
                            div { style: "font-size: 40px;", "👤" }
                            p { style: "margin: {spacing::SM} 0 0; font-weight: 600; color: {AppColors::TEXT};", "{doctor.name}" }
                            p { style: "margin: 0; color: {AppColors::TEXT_SECONDARY};", "{doctor.specialty}" }
                            p { style: "margin: {spacing::XS} 0 0; color: {AppColors::WARNING};", "★ {doctor.rating}" }
                        }
                    }
                }
                h2 { style: "{h3}", "Select Date" }
                div { style: "display: flex; flex-wrap: wrap; gap: {spacing::SM};",
                    for date in DATE_OPTIONS {
                        button {
                            key: "{date}",
                            onclick: move |_| request.write().date = Some(date.to_string()),
                            style: "padding: {spacing::SM} {spacing::MD}; border-radius: {radius::MEDIUM}; cursor: pointer; {chip_style(request.read().date.as_deref() == Some(*date), &selected_bg)}",
                            "{date}"
                        }
                    }
                }
                h2 { style: "{h3}", "Select Time" }
                div { style: "display: flex; flex-wrap: wrap; gap: {spacing::SM};",
                    for time in TIME_SLOTS {
                        button {
                            key: "{time}",
                            onclick: move |_| request.write().time = Some(time.to_string()),
                            style: "padding: {spacing::SM} {spacing::MD}; border-radius: {radius::MEDIUM}; cursor: pointer; {chip_style(request.read().time.as_deref() == Some(*time), &selected_bg)}",
                            "{time}"
                        }
                    }
                }
                h2 { style: "{h3}", "Reason for Visit" }
                textarea {
                    placeholder: "Describe your symptoms or reason for visit...",
                    value: "{request.read().reason}",
                    oninput: move |ev| request.write().reason = ev.value(),
                    style: "width: 100%; min-height: 100px; padding: {spacing::MD}; border-radius: {radius::MEDIUM}; border: 1px solid {AppColors::BORDER}; box-sizing: border-box; margin-bottom: {spacing::LG};",
                }
                if confirmed() {
                    p { style: "color: {AppColors::SUCCESS}; font-weight: 600;", "Appointment booked successfully!" }
                }
                Button {
                    title: "Confirm Appointment",
                    disabled: !complete,
                    on_press: move |_| {
                        tracing::info!(doctor = ?request.read().doctor().map(|d| d.name), "appointment confirmed");
                        confirmed.set(true);
                    },
                }
            }
        }
    }
}

fn chip_style(selected: bool, selected_bg: &str) -> String {
    if selected {
        format!("border: 2px solid {}; background: {};", AppColors::PRIMARY, selected_bg)
    } else {
        format!("border: 1px solid {}; background: {};", AppColors::BORDER, AppColors::BACKGROUND)
    }
}
