//! The `User` record and its write-side candidate form.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A staff directory record.
///
/// The `id` is assigned by the store on creation and never changes afterwards.
/// Wire form is camelCase (`firstName`, `lastName`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

/// Candidate for a [`User`]: everything except the identifier.
///
/// This is the payload for create and update. Field constraints live here so
/// every write path validates the same way; reads never re-check them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    #[validate(length(min = 2, message = "must be at least 2 characters"))]
    pub first_name: String,

    #[validate(length(min = 2, message = "must be at least 2 characters"))]
    pub last_name: String,

    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub department: String,
}

impl User {
    /// Materialize a stored record from a validated draft.
    pub fn from_draft(id: u64, draft: UserDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            department: draft.department,
        }
    }

    /// Overwrite all mutable fields in place. The id is untouched.
    pub fn apply_draft(&mut self, draft: UserDraft) {
        self.first_name = draft.first_name;
        self.last_name = draft.last_name;
        self.email = draft.email;
        self.department = draft.department;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> UserDraft {
        UserDraft {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            department: "Engineering".to_string(),
        }
    }

    #[test]
    fn valid_draft_passes_validation() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn one_character_first_name_is_rejected() {
        let mut draft = valid_draft();
        draft.first_name = "A".to_string();

        let errs = draft.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("first_name"));
    }

    #[test]
    fn empty_last_name_is_rejected() {
        let mut draft = valid_draft();
        draft.last_name = String::new();

        let errs = draft.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("last_name"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut draft = valid_draft();
        draft.email = "not-an-email".to_string();

        let errs = draft.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("email"));
    }

    #[test]
    fn empty_department_is_rejected() {
        let mut draft = valid_draft();
        draft.department = String::new();

        let errs = draft.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("department"));
    }

    #[test]
    fn apply_draft_never_touches_the_id() {
        let mut user = User::from_draft(7, valid_draft());
        let mut replacement = valid_draft();
        replacement.department = "Sales".to_string();

        user.apply_draft(replacement);

        assert_eq!(user.id, 7);
        assert_eq!(user.department, "Sales");
    }

    #[test]
    fn user_serializes_with_camel_case_field_names() {
        let user = User::from_draft(1, valid_draft());
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert_eq!(json["department"], "Engineering");
    }
}
