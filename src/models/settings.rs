use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleKey {
    Push,
    Email,
    Sms,
}

/// Notification switches on the settings screen. Resets when the screen is left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleState {
    pub push: bool,
    pub email: bool,
    pub sms: bool,
}

impl Default for ToggleState {
    fn default() -> Self {
        Self {
            push: true,
            email: true,
            sms: false,
        }
    }
}

impl ToggleState {
    pub fn get(&self, key: ToggleKey) -> bool {
        match key {
            ToggleKey::Push => self.push,
            ToggleKey::Email => self.email,
            ToggleKey::Sms => self.sms,
        }
    }

    pub fn toggled(self, key: ToggleKey) -> Self {
        let mut next = self;
        match key {
            ToggleKey::Push => next.push = !next.push,
            ToggleKey::Email => next.email = !next.email,
            ToggleKey::Sms => next.sms = !next.sms,
        }
        next
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SettingsItem {
    Action {
        title: &'static str,
        icon: &'static str,
        right_text: Option<&'static str>,
    },
    Toggle {
        title: &'static str,
        icon: &'static str,
        key: ToggleKey,
    },
}

impl SettingsItem {
    pub fn title(&self) -> &'static str {
        match self {
            SettingsItem::Action { title, .. } | SettingsItem::Toggle { title, .. } => *title,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SettingsItem::Action { icon, .. } | SettingsItem::Toggle { icon, .. } => *icon,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettingsGroup {
    pub title: &'static str,
    pub items: &'static [SettingsItem],
}

const fn action(title: &'static str, icon: &'static str) -> SettingsItem {
    SettingsItem::Action { title, icon, right_text: None }
}

const fn action_with(title: &'static str, icon: &'static str, right: &'static str) -> SettingsItem {
    SettingsItem::Action { title, icon, right_text: Some(right) }
}

const fn toggle(title: &'static str, icon: &'static str, key: ToggleKey) -> SettingsItem {
    SettingsItem::Toggle { title, icon, key }
}

pub const SETTINGS_GROUPS: &[SettingsGroup] = &[
    SettingsGroup {
        title: "Account",
        items: &[
            action("Edit Profile", "👤"),
            action("Change Password", "🔒"),
            action("Privacy Settings", "🛡"),
        ],
    },
    SettingsGroup {
        title: "Notifications",
        items: &[
            toggle("Push Notifications", "🔔", ToggleKey::Push),
            toggle("Email Notifications", "✉", ToggleKey::Email),
            toggle("SMS Notifications", "💬", ToggleKey::Sms),
        ],
    },
    SettingsGroup {
        title: "Preferences",
        items: &[
            action_with("Language", "🌐", "English"),
            action_with("Currency", "💵", "USD"),
            action_with("Theme", "🎨", "Light"),
        ],
    },
    SettingsGroup {
        title: "Support",
        items: &[
            action("Help Center", "❓"),
            action("Contact Us", "✉"),
            action("About", "ℹ"),
        ],
    },
];
