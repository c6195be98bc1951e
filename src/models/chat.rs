use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u32,
    pub text: String,
    pub is_user: bool,
    pub time: String,
}

impl ChatMessage {
    fn seeded(id: u32, text: &str, is_user: bool, time: &str) -> Self {
        Self {
            id,
            text: text.to_string(),
            is_user,
            time: time.to_string(),
        }
    }
}

/// Who is on the other side of a conversation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatPeer {
    Doctor,
    Driver,
}

impl ChatPeer {
    pub fn name(&self) -> &'static str {
        match self {
            ChatPeer::Doctor => "Dr. Sarah Johnson",
            ChatPeer::Driver => "Ambulance Driver",
        }
    }

    pub fn presence(&self) -> &'static str {
        match self {
            ChatPeer::Doctor => "Online",
            ChatPeer::Driver => "Available",
        }
    }
}

/// In-memory conversation. Lives as long as the chat screen does.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatThread {
    pub peer: ChatPeer,
    pub messages: Vec<ChatMessage>,
}

impl ChatThread {
    pub fn with_doctor() -> Self {
        Self {
            peer: ChatPeer::Doctor,
            messages: vec![
                ChatMessage::seeded(1, "Hello, how can I help you today?", false, "10:30 AM"),
                ChatMessage::seeded(2, "I have a question about my prescription", true, "10:31 AM"),
                ChatMessage::seeded(
                    3,
                    "Sure, I can help with that. What medication are you taking?",
                    false,
                    "10:32 AM",
                ),
            ],
        }
    }

    pub fn with_driver() -> Self {
        Self {
            peer: ChatPeer::Driver,
            messages: vec![
                ChatMessage::seeded(1, "I'm on my way. ETA 5 minutes.", false, "2:45 PM"),
                ChatMessage::seeded(2, "Thank you!", true, "2:46 PM"),
            ],
        }
    }

    /// Appends the trimmed input as a user message. Blank input is ignored.
    pub fn send(&mut self, input: &str, time: impl Into<String>) -> Option<&ChatMessage> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.messages.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        self.messages.push(ChatMessage {
            id,
            text: text.to_string(),
            is_user: true,
            time: time.into(),
        });
        self.messages.last()
    }
}

/// Send button state for the current draft.
pub fn can_send(draft: &str) -> bool {
    !draft.trim().is_empty()
}

/// Wall-clock label for a new message, e.g. "02:47 PM".
pub fn clock_label() -> String {
    chrono::Local::now().format("%I:%M %p").to_string()
}
