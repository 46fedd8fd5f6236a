use serde::{Deserialize, Serialize};

/// Access role attached to a credential record. Role comparison is the only
/// authorization mechanism in this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Patient,
}

/// A credential record as persisted in the `dentalUsers` snapshot.
///
/// Passwords are stored in plaintext and matched exactly; the seed data
/// depends on that contract. `patient_id` is present only for
/// `Role::Patient`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub role: Role,
    pub email: String,
    pub password: String,
    #[serde(rename = "patientId", skip_serializing_if = "Option::is_none", default)]
    pub patient_id: Option<String>,
}

/// The authenticated user's public projection, persisted under
/// `dentalCurrentUser` so a restart restores the session. Never carries the
/// password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub role: Role,
    pub email: String,
    #[serde(rename = "patientId", skip_serializing_if = "Option::is_none", default)]
    pub patient_id: Option<String>,
}

impl UserAccount {
    /// Reduce this account to its session projection
    pub fn session(&self) -> SessionUser {
        SessionUser {
            id: self.id.clone(),
            role: self.role,
            email: self.email.clone(),
            patient_id: self.patient_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_projection_excludes_password() {
        let account = UserAccount {
            id: "2".to_string(),
            role: Role::Patient,
            email: "john@entnt.in".to_string(),
            password: "patient123".to_string(),
            patient_id: Some("p1".to_string()),
        };

        let session = account.session();
        let json = serde_json::to_string(&session).unwrap();
        assert!(!json.contains("password"));
        assert!(json.contains("\"patientId\":\"p1\""));
        assert_eq!(session.role, Role::Patient);
    }

    #[test]
    fn test_admin_account_omits_patient_id() {
        let account = UserAccount {
            id: "1".to_string(),
            role: Role::Admin,
            email: "admin@entnt.in".to_string(),
            password: "admin123".to_string(),
            patient_id: None,
        };

        let json = serde_json::to_string(&account).unwrap();
        assert!(!json.contains("patientId"));
        assert!(json.contains("\"role\":\"Admin\""));
    }

    #[test]
    fn test_user_snapshot_deserialization() {
        let json = r#"[
            {"id": "1", "role": "Admin", "email": "admin@entnt.in", "password": "admin123"},
            {"id": "2", "role": "Patient", "email": "john@entnt.in", "password": "patient123", "patientId": "p1"}
        ]"#;

        let users: Vec<UserAccount> = serde_json::from_str(json).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].role, Role::Admin);
        assert_eq!(users[1].patient_id.as_deref(), Some("p1"));
    }
}
