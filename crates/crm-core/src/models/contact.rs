//! Contact Entity

use serde::{Deserialize, Serialize};

use super::{deserialize_id, Activity, Deal, Entity};

/// Lead qualification status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Lost,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::New => "new",
            ContactStatus::Contacted => "contacted",
            ContactStatus::Qualified => "qualified",
            ContactStatus::Lost => "lost",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub status: ContactStatus,
    #[serde(default)]
    pub created_at: String,
}

impl Contact {
    /// Up to two upper-case initials for the avatar
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

impl Entity for Contact {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of `POST /contacts`
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ContactDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl ContactDraft {
    /// Blank optional inputs are sent as absent, not as empty strings
    pub fn from_inputs(name: &str, email: &str, phone: &str) -> Self {
        let non_empty = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        Self {
            name: name.trim().to_string(),
            email: non_empty(email),
            phone: non_empty(phone),
            source: Some("manual".to_string()),
        }
    }
}

/// Body of `PUT /contacts/{id}`
///
/// `source` is left out so the server keeps where the contact came from.
/// Cleared email or phone inputs are sent as `null` so the server clears them.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ContactUpdate {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactUpdate {
    pub fn from_inputs(name: &str, email: &str, phone: &str) -> Self {
        let non_empty = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        Self {
            name: name.trim().to_string(),
            email: non_empty(email),
            phone: non_empty(phone),
        }
    }
}

/// Response of `GET /contacts/{id}/summary`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactSummary {
    pub contact: Contact,
    #[serde(default)]
    pub deals: Vec<Deal>,
    #[serde(default)]
    pub recent_activities: Vec<Activity>,
    #[serde(default)]
    pub activity_count: u64,
    #[serde(default)]
    pub total_pipeline_value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str) -> Contact {
        Contact {
            id: "1".into(),
            name: name.into(),
            email: None,
            phone: None,
            source: None,
            status: ContactStatus::New,
            created_at: String::new(),
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(contact("ada lovelace").initials(), "AL");
        assert_eq!(contact("Grace Brewster Hopper").initials(), "GB");
        assert_eq!(contact("Cher").initials(), "C");
        assert_eq!(contact("  ").initials(), "");
    }

    #[test]
    fn test_draft_from_inputs() {
        let draft = ContactDraft::from_inputs(" Ada ", "ada@example.com", "  ");
        assert_eq!(draft.name, "Ada");
        assert_eq!(draft.email.as_deref(), Some("ada@example.com"));
        assert_eq!(draft.phone, None);
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn test_update_keeps_source_and_clears_blanks() {
        let update = ContactUpdate::from_inputs("Ada L", "", " 555-0100 ");
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Ada L", "email": null, "phone": "555-0100"}));
        assert!(json.get("source").is_none());
    }

    #[test]
    fn test_summary_wire_format() {
        let summary: ContactSummary = serde_json::from_str(
            r#"{"contact":{"id":"c1","name":"Ada","status":"qualified","created_at":"2024-01-01T00:00:00"},
                "deals":[],"recent_activities":[],"activity_count":3,"total_pipeline_value":99.5}"#,
        )
        .unwrap();
        assert_eq!(summary.contact.status, ContactStatus::Qualified);
        assert_eq!(summary.activity_count, 3);
    }
}
