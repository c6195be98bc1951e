mod account;
mod chat;
mod doctor;
mod membership;
mod notification;
mod onboarding;
mod settings;
mod sos;

pub use account::AccountForm;
pub use chat::{can_send, clock_label, ChatMessage, ChatPeer, ChatThread};
pub use doctor::{AppointmentRequest, Doctor, DATE_OPTIONS, DOCTORS, TIME_SLOTS};
pub use membership::{
    CheckoutSummary, MembershipPlan, MembershipStatus, PaymentForm, PaymentRecord, PlanId,
    CURRENT_MEMBERSHIP, PAYMENT_HISTORY, PLANS,
};
pub use notification::{unread_count, Notification, NotificationKind, NOTIFICATIONS};
pub use onboarding::{OnboardingPage, OnboardingPager, ONBOARDING_PAGES};
pub use settings::{SettingsGroup, SettingsItem, ToggleKey, ToggleState, SETTINGS_GROUPS};
pub use sos::{SosInfo, SosState, SOS_INFO};
