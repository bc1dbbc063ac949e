use serde::{Deserialize, Serialize};

/// A persisted journal entry as the backend returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub highlights: Option<String>,
    #[serde(default)]
    pub photo_links: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// The six form fields, sent verbatim as the body of create/update calls.
/// Every key is always present; optional fields default to the empty string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryDraft {
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub highlights: String,
    #[serde(default)]
    pub photo_links: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_body_carries_all_six_keys() {
        let draft = EntryDraft {
            destination: "Paris".to_string(),
            start_date: "2024-06-01".to_string(),
            end_date: "2024-06-10".to_string(),
            description: String::new(),
            highlights: String::new(),
            photo_links: String::new(),
        };

        let value = serde_json::to_value(&draft).unwrap();
        let body = value.as_object().unwrap();
        assert_eq!(body.len(), 6);
        for key in [
            "destination",
            "start_date",
            "end_date",
            "description",
            "highlights",
            "photo_links",
        ] {
            assert!(body.contains_key(key), "missing key {}", key);
        }
        assert_eq!(value["destination"], "Paris");
        assert_eq!(value["photo_links"], "");
    }

    #[test]
    fn entry_tolerates_absent_optional_fields() {
        let entry: Entry = serde_json::from_str(
            r#"{"id": 1, "destination": "Paris", "start_date": "2024-06-01", "end_date": "2024-06-10"}"#,
        )
        .unwrap();
        assert_eq!(entry.id, 1);
        assert!(entry.description.is_none());
        assert!(entry.highlights.is_none());
        assert!(entry.photo_links.is_none());
    }
}
