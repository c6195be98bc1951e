use crate::theme::AppColors;
use serde::{Deserialize, Serialize};

/// Emergency request toggle. Nothing is dispatched; the state is local to the screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SosState {
    pub active: bool,
}

impl SosState {
    pub fn toggled(self) -> Self {
        Self { active: !self.active }
    }

    pub fn cancelled(self) -> Self {
        Self { active: false }
    }

    pub fn status_text(&self) -> &'static str {
        if self.active {
            "Emergency services notified"
        } else {
            "Tap the button below for emergency assistance"
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.active {
            "Emergency Active"
        } else {
            "Tap for SOS"
        }
    }

    pub fn button_icon(&self) -> &'static str {
        if self.active {
            "✔"
        } else {
            "⚠"
        }
    }

    pub fn header_color(&self) -> &'static str {
        if self.active {
            AppColors::SOS
        } else {
            AppColors::PRIMARY
        }
    }

    pub fn button_color(&self) -> &'static str {
        if self.active {
            AppColors::SUCCESS
        } else {
            AppColors::SOS
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SosInfo {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
}

pub const SOS_INFO: &[SosInfo] = &[
    SosInfo { icon: "📍", title: "Location", value: "Sharing your location..." },
    SosInfo { icon: "📞", title: "Emergency Contact", value: "911" },
    SosInfo { icon: "⏱", title: "Response Time", value: "~5 minutes" },
];
