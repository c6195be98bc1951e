use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Doctor {
    pub id: &'static str,
    pub name: &'static str,
    pub specialty: &'static str,
    pub rating: f32,
}

pub const DOCTORS: &[Doctor] = &[
    Doctor { id: "1", name: "Dr. Sarah Johnson", specialty: "Cardiologist", rating: 4.8 },
    Doctor { id: "2", name: "Dr. Michael Chen", specialty: "General Practitioner", rating: 4.9 },
    Doctor { id: "3", name: "Dr. Emily Davis", specialty: "Dermatologist", rating: 4.7 },
];

pub const DATE_OPTIONS: &[&str] = &["Today", "Tomorrow", "Mon", "Tue", "Wed"];

pub const TIME_SLOTS: &[&str] = &["9:00 AM", "10:00 AM", "11:00 AM", "2:00 PM", "3:00 PM", "4:00 PM"];

/// Booking form state. Held locally by the booking screen.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AppointmentRequest {
    pub doctor_id: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    #[serde(default)]
    pub reason: String,
}

impl AppointmentRequest {
    /// Reason is optional; doctor, date and time are not.
    pub fn is_complete(&self) -> bool {
        self.doctor_id.is_some() && self.date.is_some() && self.time.is_some()
    }

    pub fn doctor(&self) -> Option<&'static Doctor> {
        let id = self.doctor_id.as_deref()?;
        DOCTORS.iter().find(|d| d.id == id)
    }
}
