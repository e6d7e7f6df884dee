use serde::Deserialize;

use staffdir_core::UserDraft;

// -------------------------
// Request DTOs
// -------------------------

/// Write payload for create and update.
///
/// A client-supplied `id` is accepted and discarded: identifiers are
/// store-assigned. Missing string fields deserialize to empty strings and
/// are rejected by validation rather than by the JSON layer.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[serde(default)]
    pub id: Option<u64>,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub department: String,
}

impl UserRequest {
    pub fn into_draft(self) -> UserDraft {
        UserDraft {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            department: self.department,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_supplied_id_is_parsed_but_dropped_from_the_draft() {
        let request: UserRequest = serde_json::from_str(
            r#"{"id": 99, "firstName": "Jo", "lastName": "Li", "email": "jo@x.com", "department": "Eng"}"#,
        )
        .unwrap();

        assert_eq!(request.id, Some(99));

        let draft = request.into_draft();
        assert_eq!(draft.first_name, "Jo");
        assert_eq!(draft.department, "Eng");
    }

    #[test]
    fn missing_fields_default_to_empty_strings() {
        let request: UserRequest = serde_json::from_str(r#"{"firstName": "Jo"}"#).unwrap();

        assert_eq!(request.id, None);
        assert_eq!(request.last_name, "");
        assert_eq!(request.email, "");
    }
}
