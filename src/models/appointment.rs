use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lifecycle status of an appointment. Status never transitions
/// automatically; it only changes through an explicit edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

/// A file attached to an appointment, stored inline as a base64 data URL.
/// No size limit or content validation is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub url: String,
}

/// An appointment record as persisted in the `dentalIncidents` snapshot.
///
/// Timestamps are zone-less (`2025-01-15T10:00:00`), matching the snapshot
/// layout byte-for-byte. The patient id is an unchecked reference: deleting
/// a patient orphans their appointments and readers degrade to a placeholder
/// label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    #[serde(rename = "patientId")]
    pub patient_id: String,
    pub title: String,
    pub description: String,
    pub comments: String,
    #[serde(rename = "appointmentDate")]
    pub appointment_date: NaiveDateTime,
    pub cost: f64,
    pub treatment: String,
    pub status: AppointmentStatus,
    #[serde(rename = "nextDate", skip_serializing_if = "Option::is_none", default)]
    pub next_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub files: Vec<Attachment>,
}

/// The mutable fields of an appointment, as entered in the scheduling form.
///
/// `appointment_date` is optional here so an incomplete form submission can
/// be expressed and rejected with a validation error instead of silently
/// defaulting.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentDraft {
    pub patient_id: String,
    pub title: String,
    pub description: String,
    pub comments: String,
    pub appointment_date: Option<NaiveDateTime>,
    pub cost: f64,
    pub treatment: String,
    pub status: AppointmentStatus,
    pub next_date: Option<NaiveDateTime>,
}

impl Default for AppointmentDraft {
    fn default() -> Self {
        Self {
            patient_id: String::new(),
            title: String::new(),
            description: String::new(),
            comments: String::new(),
            appointment_date: None,
            cost: 0.0,
            treatment: String::new(),
            status: AppointmentStatus::Scheduled,
            next_date: None,
        }
    }
}

impl AppointmentDraft {
    /// Create a draft with the required fields set
    pub fn new(
        patient_id: impl Into<String>,
        title: impl Into<String>,
        appointment_date: NaiveDateTime,
    ) -> Self {
        Self {
            patient_id: patient_id.into(),
            title: title.into(),
            appointment_date: Some(appointment_date),
            ..Self::default()
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the free-text comments
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = comments.into();
        self
    }

    /// Set the treatment description
    pub fn with_treatment(mut self, treatment: impl Into<String>) -> Self {
        self.treatment = treatment.into();
        self
    }

    /// Set the monetary cost
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: AppointmentStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the follow-up timestamp
    pub fn with_next_date(mut self, next_date: NaiveDateTime) -> Self {
        self.next_date = Some(next_date);
        self
    }
}
