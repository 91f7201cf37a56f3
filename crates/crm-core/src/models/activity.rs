//! Activity Entity
//!
//! Timeline entries attached to a contact.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{deserialize_id, Entity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Call,
    Email,
    #[default]
    Note,
    Meeting,
    Form,
}

impl ActivityType {
    /// Types a user can log by hand (`Form` is created by submissions)
    pub const LOGGABLE: [ActivityType; 4] = [
        ActivityType::Note,
        ActivityType::Call,
        ActivityType::Email,
        ActivityType::Meeting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Call => "call",
            ActivityType::Email => "email",
            ActivityType::Note => "note",
            ActivityType::Meeting => "meeting",
            ActivityType::Form => "form",
        }
    }

}

impl FromStr for ActivityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "call" => Ok(ActivityType::Call),
            "email" => Ok(ActivityType::Email),
            "note" => Ok(ActivityType::Note),
            "meeting" => Ok(ActivityType::Meeting),
            "form" => Ok(ActivityType::Form),
            other => Err(format!("unknown activity type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: ActivityType,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(deserialize_with = "deserialize_id")]
    pub contact_id: String,
    #[serde(default)]
    pub created_at: String,
}

impl Entity for Activity {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of `POST /activities/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityDraft {
    pub contact_id: String,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub content: Option<String>,
}

/// Body of `PUT /activities/{id}`
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ActivityUpdate {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ActivityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_type_field() {
        let activity: Activity = serde_json::from_str(
            r#"{"id":"a1","type":"meeting","content":"Kickoff","contact_id":"c1","created_at":"2024-01-01T00:00:00"}"#,
        )
        .unwrap();
        assert_eq!(activity.kind, ActivityType::Meeting);

        let draft = ActivityDraft {
            contact_id: "c1".into(),
            kind: ActivityType::Call,
            content: Some("Left voicemail".into()),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["type"], "call");

        let update = serde_json::to_value(ActivityUpdate { content: Some("x".into()), ..Default::default() }).unwrap();
        assert!(update.get("type").is_none());
    }

    #[test]
    fn test_activity_type_parse() {
        for kind in ActivityType::LOGGABLE {
            assert_eq!(kind.as_str().parse::<ActivityType>(), Ok(kind));
        }
        assert_eq!("form".parse::<ActivityType>(), Ok(ActivityType::Form));
        assert!("fax".parse::<ActivityType>().is_err());
        assert_eq!("fax".parse::<ActivityType>().unwrap_or_default(), ActivityType::Note);
    }
}
