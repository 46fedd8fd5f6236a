use serde::{Deserialize, Serialize};

/// A patient record as persisted in the `dentalPatients` snapshot.
///
/// All fields are kept as plain strings: the snapshot layout treats the date
/// of birth as opaque and unset fields default to the empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub dob: String,
    pub contact: String,
    pub email: String,
    pub address: String,
    #[serde(rename = "healthInfo")]
    pub health_info: String,
}

/// The mutable fields of a patient, as entered in the edit form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientDraft {
    pub name: String,
    pub dob: String,
    pub contact: String,
    pub email: String,
    pub address: String,
    pub health_info: String,
}

impl PatientDraft {
    /// Create a draft with the required fields set
    pub fn new(
        name: impl Into<String>,
        contact: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// Set the date of birth
    pub fn with_dob(mut self, dob: impl Into<String>) -> Self {
        self.dob = dob.into();
        self
    }

    /// Set the address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the free-text health notes
    pub fn with_health_info(mut self, health_info: impl Into<String>) -> Self {
        self.health_info = health_info.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_snapshot_layout() {
        let patient = Patient {
            id: "p1".to_string(),
            name: "John Doe".to_string(),
            dob: "1990-05-10".to_string(),
            contact: "1234567890".to_string(),
            email: "john@entnt.in".to_string(),
            address: "123 Main St, City".to_string(),
            health_info: "No known allergies".to_string(),
        };

        let json = serde_json::to_string(&patient).unwrap();
        assert!(json.contains("\"healthInfo\":\"No known allergies\""));
        assert!(json.contains("\"dob\":\"1990-05-10\""));
    }

    #[test]
    fn test_patient_deserialization() {
        let json = r#"{
            "id": "p1",
            "name": "John Doe",
            "dob": "1990-05-10",
            "contact": "1234567890",
            "email": "john@entnt.in",
            "address": "123 Main St, City",
            "healthInfo": "No known allergies"
        }"#;

        let patient: Patient = serde_json::from_str(json).unwrap();
        assert_eq!(patient.id, "p1");
        assert_eq!(patient.health_info, "No known allergies");
    }

    #[test]
    fn test_draft_defaults_to_empty_strings() {
        let draft = PatientDraft::new("Jane Roe", "555-0101", "jane@example.com");
        assert_eq!(draft.dob, "");
        assert_eq!(draft.address, "");
        assert_eq!(draft.health_info, "");
    }
}
