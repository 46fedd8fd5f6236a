pub mod appointment;
pub mod patient;
pub mod user;

pub use appointment::{Appointment, AppointmentDraft, AppointmentStatus, Attachment};
pub use patient::{Patient, PatientDraft};
pub use user::{Role, SessionUser, UserAccount};
