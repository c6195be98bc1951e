use dioxus::prelude::*;
use crate::models::{can_send, clock_label, ChatPeer, ChatThread};
use crate::theme::{radius, spacing, typography, AppColors};
use crate::widgets::Screen;

/// Conversation with a doctor or with the ambulance driver. Messages stay on this screen.
#[component]
pub fn ChatScreen(peer: ChatPeer, on_back: EventHandler<()>) -> Element {
    let mut thread = use_signal(move || match peer {
        ChatPeer::Doctor => ChatThread::with_doctor(),
        ChatPeer::Driver => ChatThread::with_driver(),
    });
    let mut draft = use_signal(String::new);
    let sendable = can_send(&draft.read());
    let h3 = typography::H3.css();
    let caption = typography::CAPTION.css();
    let (send_bg, send_fg) = if sendable {
        (AppColors::PRIMARY, AppColors::TEXT_LIGHT)
    } else {
        (AppColors::SURFACE, AppColors::TEXT_SECONDARY)
    };

    let mut send = move || {
        let text = draft();
        if let Some(sent) = thread.write().send(&text, clock_label()) {
            tracing::debug!(peer = ?peer, id = sent.id, "message sent");
        }
        draft.set(String::new());
    };

    rsx! {
        Screen {
            div { style: "display: flex; flex-direction: column; height: 100vh;",
                div { style: "display: flex; align-items: center; gap: {spacing::MD}; padding: {spacing::MD} {spacing::LG}; border-bottom: 1px solid {AppColors::BORDER};",
                    button {
                        onclick: move |_| on_back.call(()),
                        style: "background: none; border: none; cursor: pointer; font-size: 20px; color: {AppColors::TEXT};",
                        "←"
                    }
                    if peer == ChatPeer::Driver {
                        span { style: "width: 12px; height: 12px; border-radius: {radius::ROUND}; background: {AppColors::SOS};" }
                    }
                    div { style: "flex: 1;",
                        p { style: "{h3} margin: 0;", "{peer.name()}" }
                        p { style: "{caption} margin: 0; color: {AppColors::SUCCESS};", "{peer.presence()}" }
                    }
                    span { style: "font-size: 22px; color: {AppColors::PRIMARY};", "📞" }
                }
                if peer == ChatPeer::Driver {
                    div { style: "height: 180px; display: flex; flex-direction: column; align-items: center; justify-content: center; background: {AppColors::SURFACE}; color: {AppColors::TEXT_SECONDARY};",
                        span { style: "font-size: 48px;", "🗺" }
                        span { "Live Location Tracking" }
                    }
                }
                div { style: "flex: 1; overflow-y: auto; padding: {spacing::MD};",
                    for message in thread.read().messages.clone() {
                        div {
                            key: "{message.id}",
                            style: "{bubble_style(message.is_user)}",
                            p { style: "margin: 0;", "{message.text}" }
                            p { style: "{caption} margin: {spacing::XS} 0 0; opacity: 0.7; text-align: right;", "{message.time}" }
                        }
                    }
                }
                div { style: "display: flex; align-items: flex-end; gap: {spacing::SM}; padding: {spacing::MD}; border-top: 1px solid {AppColors::BORDER};",
                    textarea {
                        rows: "1",
                        placeholder: "Type a message...",
                        value: "{draft.read()}",
                        oninput: move |ev| draft.set(ev.value()),
                        style: "flex: 1; resize: none; padding: {spacing::SM} {spacing::MD}; border-radius: {radius::LARGE}; border: 1px solid {AppColors::BORDER}; background: {AppColors::SURFACE}; font: inherit;",
                    }
                    button {
                        disabled: !sendable,
                        onclick: move |_| send(),
                        style: "width: 40px; height: 40px; border-radius: {radius::ROUND}; border: none; background: {send_bg}; color: {send_fg}; cursor: pointer;",
                        "➤"
                    }
                }
            }
        }
    }
}

fn bubble_style(is_user: bool) -> String {
    let (align, bg, fg) = if is_user {
        ("flex-end", AppColors::PRIMARY, AppColors::TEXT_LIGHT)
    } else {
        ("flex-start", AppColors::SURFACE, AppColors::TEXT)
    };
    format!(
        "max-width: 80%; width: fit-content; margin-bottom: {}; margin-left: {}; padding: {}; border-radius: {}; background: {bg}; color: {fg}; align-self: {align};",
        spacing::SM,
        if is_user { "auto" } else { "0" },
        spacing::MD,
        radius::LARGE,
    )
}
