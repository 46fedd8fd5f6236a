//! Data layer for a small clinic-management dashboard: a persistent record
//! store over an embedded key-value medium, a mock session provider, and
//! pure view-model derivations over the patient and appointment collections.

pub mod attachments;
pub mod error;
pub mod models;
pub mod repository;
pub mod session;
pub mod store;
pub mod views;

pub use error::StoreError;
pub use models::{
    Appointment, AppointmentDraft, AppointmentStatus, Attachment, Patient, PatientDraft, Role,
    SessionUser, UserAccount,
};
pub use repository::{Appointments, Patients};
pub use session::SessionProvider;
pub use store::{RecordStore, StoreConfig};
