use crate::theme::AppColors;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Appointment,
    Prescription,
    Report,
    Payment,
    #[serde(other)]
    Other,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Appointment => "📅",
            NotificationKind::Prescription => "💊",
            NotificationKind::Report => "📄",
            NotificationKind::Payment => "💳",
            NotificationKind::Other => "🔔",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            NotificationKind::Appointment => AppColors::PRIMARY,
            NotificationKind::Prescription => AppColors::SECONDARY,
            NotificationKind::Report => AppColors::INFO,
            NotificationKind::Payment => AppColors::SUCCESS,
            NotificationKind::Other => AppColors::TEXT_SECONDARY,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Notification {
    pub id: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub time: &'static str,
    pub kind: NotificationKind,
    pub read: bool,
}

pub const NOTIFICATIONS: &[Notification] = &[
    Notification {
        id: "1",
        title: "Appointment Reminder",
        message: "Your appointment with Dr. Smith is tomorrow at 10:00 AM",
        time: "2 hours ago",
        kind: NotificationKind::Appointment,
        read: false,
    },
    Notification {
        id: "2",
        title: "Prescription Ready",
        message: "Your prescription is ready for pickup",
        time: "5 hours ago",
        kind: NotificationKind::Prescription,
        read: false,
    },
    Notification {
        id: "3",
        title: "Health Report",
        message: "Your lab results are now available",
        time: "1 day ago",
        kind: NotificationKind::Report,
        read: true,
    },
    Notification {
        id: "4",
        title: "Payment Received",
        message: "Your payment of $150 has been processed",
        time: "2 days ago",
        kind: NotificationKind::Payment,
        read: true,
    },
];

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}
