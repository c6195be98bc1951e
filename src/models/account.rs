use serde::{Deserialize, Serialize};

/// Sign-up form as typed. There is no backend; submitting just enters the app.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl AccountForm {
    pub fn is_complete(&self) -> bool {
        [
            &self.full_name,
            &self.email,
            &self.phone,
            &self.password,
            &self.confirm_password,
        ]
        .iter()
        .all(|f| !f.trim().is_empty())
    }

    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }

    pub fn can_submit(&self) -> bool {
        self.is_complete() && self.passwords_match()
    }
}
