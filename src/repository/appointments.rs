use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{Appointment, AppointmentDraft, Attachment};
use crate::store::{RecordStore, INCIDENTS_KEY};

/// Appointment lifecycle operations over the record store.
///
/// The owning patient id is not checked against the patient collection; a
/// dangling reference degrades to a placeholder label at display time
/// instead of failing the write.
pub struct Appointments {
    store: RecordStore,
}

impl Appointments {
    /// Create a repository over the given store
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// All appointment records
    pub fn list(&self) -> Result<Vec<Appointment>, StoreError> {
        self.store.load_collection(INCIDENTS_KEY)
    }

    /// Look up an appointment by id
    pub fn get(&self, id: &str) -> Result<Option<Appointment>, StoreError> {
        Ok(self.list()?.into_iter().find(|a| a.id == id))
    }

    /// Schedule an appointment from the draft and persist it.
    ///
    /// Patient id, title and the appointment timestamp are required; a
    /// rejected draft leaves the collection unchanged. New appointments
    /// start with an empty attachment list.
    pub fn create(&self, draft: AppointmentDraft) -> Result<Appointment, StoreError> {
        let appointment_date = validate_draft(&draft)?;

        let appointment = Appointment {
            id: Uuid::new_v4().to_string(),
            patient_id: draft.patient_id,
            title: draft.title,
            description: draft.description,
            comments: draft.comments,
            appointment_date,
            cost: draft.cost,
            treatment: draft.treatment,
            status: draft.status,
            next_date: draft.next_date,
            files: Vec::new(),
        };

        let mut appointments = self.list()?;
        appointments.push(appointment.clone());
        self.store.save_collection(INCIDENTS_KEY, &appointments)?;

        tracing::info!("appointment {} scheduled", appointment.id);
        Ok(appointment)
    }

    /// Replace all fields of the appointment with the given id.
    ///
    /// The id and the existing attachment list are preserved; attachments
    /// change only through [`Appointments::add_attachment`] and
    /// [`Appointments::remove_attachment`].
    pub fn update(&self, id: &str, draft: AppointmentDraft) -> Result<Appointment, StoreError> {
        let appointment_date = validate_draft(&draft)?;

        let mut appointments = self.list()?;
        let appointment = appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::not_found("appointment", id))?;

        appointment.patient_id = draft.patient_id;
        appointment.title = draft.title;
        appointment.description = draft.description;
        appointment.comments = draft.comments;
        appointment.appointment_date = appointment_date;
        appointment.cost = draft.cost;
        appointment.treatment = draft.treatment;
        appointment.status = draft.status;
        appointment.next_date = draft.next_date;
        let updated = appointment.clone();

        self.store.save_collection(INCIDENTS_KEY, &appointments)?;
        tracing::info!("appointment {} updated", id);
        Ok(updated)
    }

    /// Remove the appointment with the given id
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut appointments = self.list()?;
        let before = appointments.len();
        appointments.retain(|a| a.id != id);
        if appointments.len() == before {
            return Err(StoreError::not_found("appointment", id));
        }

        self.store.save_collection(INCIDENTS_KEY, &appointments)?;
        tracing::info!("appointment {} deleted", id);
        Ok(())
    }

    /// Append an attachment to the appointment's file list
    pub fn add_attachment(
        &self,
        id: &str,
        attachment: Attachment,
    ) -> Result<Appointment, StoreError> {
        let mut appointments = self.list()?;
        let appointment = appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::not_found("appointment", id))?;

        appointment.files.push(attachment);
        let updated = appointment.clone();

        self.store.save_collection(INCIDENTS_KEY, &appointments)?;
        Ok(updated)
    }

    /// Remove the attachment at `index` from the appointment's file list
    pub fn remove_attachment(&self, id: &str, index: usize) -> Result<Appointment, StoreError> {
        let mut appointments = self.list()?;
        let appointment = appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::not_found("appointment", id))?;

        if index >= appointment.files.len() {
            return Err(StoreError::not_found("attachment", index.to_string()));
        }
        appointment.files.remove(index);
        let updated = appointment.clone();

        self.store.save_collection(INCIDENTS_KEY, &appointments)?;
        Ok(updated)
    }
}

fn validate_draft(draft: &AppointmentDraft) -> Result<chrono::NaiveDateTime, StoreError> {
    if draft.patient_id.is_empty() {
        return Err(StoreError::validation(
            "patientId",
            "an owning patient is required",
        ));
    }
    if draft.title.is_empty() {
        return Err(StoreError::validation("title", "a title is required"));
    }
    draft
        .appointment_date
        .ok_or_else(|| StoreError::validation("appointmentDate", "a date and time is required"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppointmentStatus;
    use crate::store::MemoryMedium;
    use chrono::{NaiveDate, NaiveDateTime};

    fn repo() -> Appointments {
        Appointments::new(RecordStore::new(MemoryMedium::new()))
    }

    fn ts(y: i32, mo: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_create_defaults_status_and_files() {
        let appointments = repo();
        let created = appointments
            .create(AppointmentDraft::new("p1", "Routine Checkup", ts(2025, 3, 1, 10)))
            .unwrap();

        assert_eq!(created.status, AppointmentStatus::Scheduled);
        assert!(created.files.is_empty());
        assert_eq!(created.patient_id, "p1");
    }

    #[test]
    fn test_create_without_date_is_rejected_and_collection_unchanged() {
        let appointments = repo();
        let draft = AppointmentDraft {
            patient_id: "p1".to_string(),
            title: "Routine Checkup".to_string(),
            ..AppointmentDraft::default()
        };

        let err = appointments.create(draft).unwrap_err();
        assert!(
            matches!(err, StoreError::Validation { ref field, .. } if field == "appointmentDate")
        );
        assert!(appointments.list().unwrap().is_empty());
    }

    #[test]
    fn test_create_requires_patient_and_title() {
        let appointments = repo();

        let no_patient = AppointmentDraft::new("", "Checkup", ts(2025, 3, 1, 10));
        let err = appointments.create(no_patient).unwrap_err();
        assert!(matches!(err, StoreError::Validation { ref field, .. } if field == "patientId"));

        let no_title = AppointmentDraft::new("p1", "", ts(2025, 3, 1, 10));
        let err = appointments.create(no_title).unwrap_err();
        assert!(matches!(err, StoreError::Validation { ref field, .. } if field == "title"));
    }

    #[test]
    fn test_update_preserves_attachments() {
        let appointments = repo();
        let created = appointments
            .create(AppointmentDraft::new("p1", "X-Ray", ts(2025, 3, 1, 10)))
            .unwrap();
        appointments
            .add_attachment(
                &created.id,
                Attachment {
                    name: "scan.png".to_string(),
                    url: "data:application/octet-stream;base64,AAAA".to_string(),
                },
            )
            .unwrap();

        let updated = appointments
            .update(
                &created.id,
                AppointmentDraft::new("p1", "X-Ray and Cleaning", ts(2025, 3, 2, 11))
                    .with_status(AppointmentStatus::Completed)
                    .with_cost(90.0),
            )
            .unwrap();

        assert_eq!(updated.title, "X-Ray and Cleaning");
        assert_eq!(updated.status, AppointmentStatus::Completed);
        assert_eq!(updated.files.len(), 1);
    }

    #[test]
    fn test_update_absent_id_is_not_found() {
        let appointments = repo();
        let err = appointments
            .update("nope", AppointmentDraft::new("p1", "Checkup", ts(2025, 3, 1, 10)))
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { kind: "appointment", .. }));
    }

    #[test]
    fn test_remove_attachment_by_index() {
        let appointments = repo();
        let created = appointments
            .create(AppointmentDraft::new("p1", "X-Ray", ts(2025, 3, 1, 10)))
            .unwrap();

        for name in ["a.png", "b.png"] {
            appointments
                .add_attachment(
                    &created.id,
                    Attachment {
                        name: name.to_string(),
                        url: "data:application/octet-stream;base64,AAAA".to_string(),
                    },
                )
                .unwrap();
        }

        let updated = appointments.remove_attachment(&created.id, 0).unwrap();
        assert_eq!(updated.files.len(), 1);
        assert_eq!(updated.files[0].name, "b.png");

        let err = appointments.remove_attachment(&created.id, 5).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { kind: "attachment", .. }));
    }

    #[test]
    fn test_delete_surfaces_not_found() {
        let appointments = repo();
        let created = appointments
            .create(AppointmentDraft::new("p1", "Checkup", ts(2025, 3, 1, 10)))
            .unwrap();

        appointments.delete(&created.id).unwrap();
        assert!(matches!(
            appointments.delete(&created.id).unwrap_err(),
            StoreError::NotFound { .. }
        ));
    }
}
