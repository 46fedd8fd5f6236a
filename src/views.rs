//! Pure projections over the domain collections.
//!
//! Every function here is deterministic and side-effect free: inputs are
//! borrowed snapshots, outputs are freshly built, and recomputing on every
//! read is the intended usage. Nothing locks because readers always operate
//! on a single-threaded snapshot.

use std::collections::{BTreeSet, HashMap};

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::{Appointment, AppointmentStatus, Patient, Role, SessionUser};

/// Display label for an appointment whose patient record no longer exists.
/// The exact string matters for display compatibility; it carries no meaning
/// beyond "missing reference".
pub const UNKNOWN_PATIENT: &str = "Unknown Patient";

/// Restrict both collections to what the identity may see.
///
/// A patient-role identity sees only their own record and appointments; an
/// admin sees everything unchanged.
pub fn scope_for_role(
    identity: &SessionUser,
    patients: &[Patient],
    appointments: &[Appointment],
) -> (Vec<Patient>, Vec<Appointment>) {
    match identity.role {
        Role::Admin => (patients.to_vec(), appointments.to_vec()),
        Role::Patient => {
            let patient_id = identity.patient_id.as_deref().unwrap_or("");
            let own_patients = patients
                .iter()
                .filter(|p| p.id == patient_id)
                .cloned()
                .collect();
            let own_appointments = appointments
                .iter()
                .filter(|a| a.patient_id == patient_id)
                .cloned()
                .collect();
            (own_patients, own_appointments)
        }
    }
}

/// Scheduled appointments from the start of the as-of day onward, soonest
/// first, truncated to `limit`.
pub fn upcoming_appointments(
    appointments: &[Appointment],
    as_of: NaiveDateTime,
    limit: usize,
) -> Vec<Appointment> {
    let day_start = start_of_day(as_of);
    let mut upcoming: Vec<Appointment> = appointments
        .iter()
        .filter(|a| a.status == AppointmentStatus::Scheduled && a.appointment_date >= day_start)
        .cloned()
        .collect();
    upcoming.sort_by(|a, b| a.appointment_date.cmp(&b.appointment_date));
    upcoming.truncate(limit);
    upcoming
}

/// Treatment history: completed appointments, plus anything before the as-of
/// day that is no longer scheduled. Most recent first.
pub fn past_or_resolved_appointments(
    appointments: &[Appointment],
    as_of: NaiveDateTime,
) -> Vec<Appointment> {
    let day_start = start_of_day(as_of);
    let mut resolved: Vec<Appointment> = appointments
        .iter()
        .filter(|a| {
            a.status == AppointmentStatus::Completed
                || (a.appointment_date < day_start && a.status != AppointmentStatus::Scheduled)
        })
        .cloned()
        .collect();
    resolved.sort_by(|a, b| b.appointment_date.cmp(&a.appointment_date));
    resolved
}

/// Appointments falling in the same calendar month as the reference date,
/// both month boundaries included.
pub fn monthly_appointments(
    appointments: &[Appointment],
    reference: NaiveDate,
) -> Vec<Appointment> {
    appointments
        .iter()
        .filter(|a| {
            let date = a.appointment_date.date();
            date.year() == reference.year() && date.month() == reference.month()
        })
        .cloned()
        .collect()
}

/// Count appointments per status. Statuses with no appointments are present
/// with a zero count.
pub fn status_counts(appointments: &[Appointment]) -> HashMap<AppointmentStatus, usize> {
    let mut counts = HashMap::from([
        (AppointmentStatus::Scheduled, 0),
        (AppointmentStatus::Completed, 0),
        (AppointmentStatus::Cancelled, 0),
    ]);
    for appointment in appointments {
        *counts.entry(appointment.status).or_insert(0) += 1;
    }
    counts
}

/// Sum the cost of appointments whose status is in `statuses`.
/// Revenue dashboards pass `[Completed]`.
pub fn revenue_sum(appointments: &[Appointment], statuses: &[AppointmentStatus]) -> f64 {
    appointments
        .iter()
        .filter(|a| statuses.contains(&a.status))
        .map(|a| a.cost)
        .sum()
}

/// Appointments on the given calendar day, ignoring time of day
pub fn appointments_on_date(appointments: &[Appointment], date: NaiveDate) -> Vec<Appointment> {
    appointments
        .iter()
        .filter(|a| a.appointment_date.date() == date)
        .cloned()
        .collect()
}

/// The days in the reference month that have at least one appointment,
/// for calendar-day highlighting.
pub fn days_with_appointments(
    appointments: &[Appointment],
    reference: NaiveDate,
) -> BTreeSet<NaiveDate> {
    monthly_appointments(appointments, reference)
        .iter()
        .map(|a| a.appointment_date.date())
        .collect()
}

/// The latest completed treatments, most recent first, truncated to `limit`
pub fn recent_treatments(appointments: &[Appointment], limit: usize) -> Vec<Appointment> {
    let mut completed: Vec<Appointment> = appointments
        .iter()
        .filter(|a| a.status == AppointmentStatus::Completed)
        .cloned()
        .collect();
    completed.sort_by(|a, b| b.appointment_date.cmp(&a.appointment_date));
    completed.truncate(limit);
    completed
}

/// Look up a patient by id. `None` is a referential gap, not an error.
pub fn find_patient<'a>(patients: &'a [Patient], patient_id: &str) -> Option<&'a Patient> {
    patients.iter().find(|p| p.id == patient_id)
}

/// The patient's display name, or the [`UNKNOWN_PATIENT`] placeholder when
/// the reference dangles.
pub fn resolve_patient_name(patients: &[Patient], patient_id: &str) -> String {
    find_patient(patients, patient_id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| UNKNOWN_PATIENT.to_string())
}

fn start_of_day(at: NaiveDateTime) -> NaiveDateTime {
    NaiveDateTime::new(at.date(), NaiveTime::MIN)
}
