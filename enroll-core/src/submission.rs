use serde::{Deserialize, Serialize};

/// One registration as it travels over the wire. Field names follow the
/// JSON body of `POST /api/submit`. Every field is defaulted so that a
/// missing key surfaces as a validation error instead of a decode error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub supervisor: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_body() {
        let submission: Submission = serde_json::from_str(
            r#"{
                "firstName": "Jane",
                "lastName": "Doe",
                "email": "jane@example.com",
                "phoneNumber": "555-123-4567",
                "supervisor": "A - Jones, Z"
            }"#,
        )
        .unwrap();

        assert_eq!(submission.first_name, "Jane");
        assert_eq!(submission.last_name, "Doe");
        assert_eq!(submission.email.as_deref(), Some("jane@example.com"));
        assert_eq!(submission.phone_number.as_deref(), Some("555-123-4567"));
        assert_eq!(submission.supervisor, "A - Jones, Z");
    }

    #[test]
    fn missing_keys_default_instead_of_failing() {
        let submission: Submission = serde_json::from_str(r#"{"firstName": "Jane"}"#).unwrap();

        assert_eq!(submission.first_name, "Jane");
        assert_eq!(submission.last_name, "");
        assert_eq!(submission.email, None);
        assert_eq!(submission.phone_number, None);
        assert_eq!(submission.supervisor, "");
    }
}
