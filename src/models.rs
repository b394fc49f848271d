// Data model shared by the form and the API clients
//
// Category records come from the MyContacts API; ContactSubmission is the
// four-value payload the form hands to its submission handler.

use serde::{Deserialize, Serialize};

/// A category option as returned by `GET /categories`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Values forwarded to the submission handler when the gate is open
///
/// Serializes to the body expected by `POST /contacts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_deserializes_from_api_shape() {
        let json = r#"[{"id":"1","name":"Work"},{"id":"2","name":"Family"}]"#;
        let categories: Vec<Category> = serde_json::from_str(json).unwrap();

        assert_eq!(
            categories,
            vec![Category::new("1", "Work"), Category::new("2", "Family")]
        );
    }

    #[test]
    fn test_submission_body_uses_snake_case_category() {
        let submission = ContactSubmission {
            name: "Ana".to_string(),
            email: String::new(),
            phone: "(11) 98765-4321".to_string(),
            category_id: String::new(),
        };

        let body = serde_json::to_value(&submission).unwrap();
        assert_eq!(body["name"], "Ana");
        assert_eq!(body["phone"], "(11) 98765-4321");
        assert_eq!(body["category_id"], "");
    }
}
