//! Route table and back stack. Pure data so it can be tested without a renderer.

use crate::models::PlanId;
use std::str::FromStr;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Landing,
    Onboarding,
    CreateAccount,
    Home,
    Profile,
    Notifications,
    BookAppointment,
    Membership,
    MembershipCheckout(PlanId),
    MyMembership,
    Chat,
    ChatWithDriver,
    LiveSos,
    Settings,
}

impl Route {
    /// Bottom-tab roots.
    pub const TABS: [Route; 2] = [Route::Home, Route::Profile];

    pub fn is_tab(&self) -> bool {
        Self::TABS.contains(self)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Landing => "AscendiMed",
            Route::Onboarding => "Welcome",
            Route::CreateAccount => "Create Account",
            Route::Home => "Home",
            Route::Profile => "Profile",
            Route::Notifications => "Notifications",
            Route::BookAppointment => "Book Appointment",
            Route::Membership => "Membership Plans",
            Route::MembershipCheckout(_) => "Checkout",
            Route::MyMembership => "My Membership",
            Route::Chat => "Chat",
            Route::ChatWithDriver => "Ambulance Driver",
            Route::LiveSos => "Emergency SOS",
            Route::Settings => "Settings",
        }
    }
}

impl FromStr for Route {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "landing" => Ok(Route::Landing),
            "onboarding" => Ok(Route::Onboarding),
            "create_account" => Ok(Route::CreateAccount),
            "home" => Ok(Route::Home),
            "profile" => Ok(Route::Profile),
            "notifications" => Ok(Route::Notifications),
            "book_appointment" => Ok(Route::BookAppointment),
            "membership" => Ok(Route::Membership),
            "my_membership" => Ok(Route::MyMembership),
            "chat" => Ok(Route::Chat),
            "chat_with_driver" => Ok(Route::ChatWithDriver),
            "live_sos" | "sos" => Ok(Route::LiveSos),
            "settings" => Ok(Route::Settings),
            other => Err(format!("Unknown route: {}", other)),
        }
    }
}

/// Stack navigator. The bottom of the stack is never popped.
#[derive(Clone, Debug, PartialEq)]
pub struct NavStack {
    stack: Vec<Route>,
}

impl NavStack {
    pub fn new(initial: Route) -> Self {
        Self {
            stack: vec![initial],
        }
    }

    pub fn current(&self) -> Route {
        // Non-empty: `back` keeps the root.
        self.stack.last().copied().unwrap_or(Route::Landing)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Tabs reset the history, everything else stacks on top.
    pub fn navigate(&mut self, route: Route) {
        if route.is_tab() {
            self.switch_tab(route);
        } else {
            self.push(route);
        }
    }

    pub fn push(&mut self, route: Route) {
        debug!(from = ?self.current(), to = ?route, "navigate");
        self.stack.push(route);
    }

    /// Returns false when already at the root.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        let left = self.stack.pop();
        debug!(from = ?left, to = ?self.current(), "back");
        true
    }

    /// Tab switch resets history to the tab root.
    pub fn switch_tab(&mut self, tab: Route) {
        debug!(from = ?self.current(), to = ?tab, "switch tab");
        self.stack.clear();
        self.stack.push(tab);
    }

    /// Replace the whole stack, e.g. after logout.
    pub fn reset(&mut self, route: Route) {
        debug!(to = ?route, "reset");
        self.stack = vec![route];
    }
}
