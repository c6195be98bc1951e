mod book_appointment;
mod chat;
mod checkout;
mod create_account;
mod home;
mod landing;
mod live_sos;
mod membership;
mod my_membership;
mod notifications;
mod onboarding;
mod profile;
mod settings;

pub use book_appointment::BookAppointmentScreen;
pub use chat::ChatScreen;
pub use checkout::MembershipCheckoutScreen;
pub use create_account::CreateAccountScreen;
pub use home::{HomeScreen, QuickAction, QUICK_ACTIONS};
pub use landing::LandingScreen;
pub use live_sos::LiveSosScreen;
pub use membership::MembershipScreen;
pub use my_membership::MyMembershipScreen;
pub use notifications::NotificationScreen;
pub use onboarding::OnboardingScreen;
pub use profile::{MenuItem, ProfileScreen, MENU_ITEMS};
pub use settings::SettingsScreen;
