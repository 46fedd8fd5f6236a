use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{Patient, PatientDraft};
use crate::store::{RecordStore, PATIENTS_KEY};

/// Patient lifecycle operations over the record store.
///
/// Every mutation loads the full snapshot, transforms it in memory and
/// writes it back; a failed validation leaves the collection untouched.
pub struct Patients {
    store: RecordStore,
}

impl Patients {
    /// Create a repository over the given store
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// All patient records
    pub fn list(&self) -> Result<Vec<Patient>, StoreError> {
        self.store.load_collection(PATIENTS_KEY)
    }

    /// Look up a patient by id
    pub fn get(&self, id: &str) -> Result<Option<Patient>, StoreError> {
        Ok(self.list()?.into_iter().find(|p| p.id == id))
    }

    /// Create a patient from the draft and persist it.
    ///
    /// Name, contact and email are required; remaining fields default to
    /// empty strings. The id is a fresh uuid.
    pub fn create(&self, draft: PatientDraft) -> Result<Patient, StoreError> {
        validate_draft(&draft)?;

        let patient = Patient {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            dob: draft.dob,
            contact: draft.contact,
            email: draft.email,
            address: draft.address,
            health_info: draft.health_info,
        };

        let mut patients = self.list()?;
        patients.push(patient.clone());
        self.store.save_collection(PATIENTS_KEY, &patients)?;

        tracing::info!("patient {} created", patient.id);
        Ok(patient)
    }

    /// Replace all fields of the patient with the given id
    pub fn update(&self, id: &str, draft: PatientDraft) -> Result<Patient, StoreError> {
        validate_draft(&draft)?;

        let mut patients = self.list()?;
        let patient = patients
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("patient", id))?;

        patient.name = draft.name;
        patient.dob = draft.dob;
        patient.contact = draft.contact;
        patient.email = draft.email;
        patient.address = draft.address;
        patient.health_info = draft.health_info;
        let updated = patient.clone();

        self.store.save_collection(PATIENTS_KEY, &patients)?;
        tracing::info!("patient {} updated", id);
        Ok(updated)
    }

    /// Remove the patient with the given id.
    ///
    /// Deletion does not cascade: appointments referencing the patient are
    /// orphaned and readers fall back to the placeholder label.
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut patients = self.list()?;
        let before = patients.len();
        patients.retain(|p| p.id != id);
        if patients.len() == before {
            return Err(StoreError::not_found("patient", id));
        }

        self.store.save_collection(PATIENTS_KEY, &patients)?;
        tracing::info!("patient {} deleted", id);
        Ok(())
    }
}

fn validate_draft(draft: &PatientDraft) -> Result<(), StoreError> {
    if draft.name.is_empty() {
        return Err(StoreError::validation("name", "patient name is required"));
    }
    if draft.contact.is_empty() {
        return Err(StoreError::validation(
            "contact",
            "contact number is required",
        ));
    }
    if draft.email.is_empty() {
        return Err(StoreError::validation("email", "email is required"));
    }
    Ok(())
}
