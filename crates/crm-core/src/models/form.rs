//! Lead Capture Forms
//!
//! Forms belong to a website and are rendered on third-party pages through
//! the public embed script.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{deserialize_id, Entity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Email,
    Number,
    Textarea,
    Select,
    Checkbox,
}

impl FieldType {
    /// Value for an `<input type=...>` attribute
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldType::Text | FieldType::Select => "text",
            FieldType::Email => "email",
            FieldType::Number => "number",
            FieldType::Textarea => "textarea",
            FieldType::Checkbox => "checkbox",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub website_id: String,
    #[serde(default)]
    pub settings: Map<String, Value>,
    #[serde(default)]
    pub fields: Vec<FormField>,
    #[serde(default)]
    pub created_at: String,
}

impl Form {
    /// Fields in display order
    pub fn ordered_fields(&self) -> Vec<FormField> {
        let mut fields = self.fields.clone();
        fields.sort_by_key(|f| f.order);
        fields
    }
}

impl Entity for Form {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormFieldDraft {
    pub key: String,
    pub label: String,
    pub field_type: FieldType,
    pub required: bool,
    pub order: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl FormFieldDraft {
    fn required(key: &str, label: &str, field_type: FieldType, order: i32, placeholder: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            field_type,
            required: true,
            order,
            placeholder: Some(placeholder.to_string()),
        }
    }
}

/// Body of `POST /websites/{id}/forms`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormDraft {
    pub name: String,
    pub settings: Map<String, Value>,
    pub fields: Vec<FormFieldDraft>,
}

impl FormDraft {
    /// New contact form with the standard name / email / message fields
    pub fn contact_form(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            settings: Map::new(),
            fields: vec![
                FormFieldDraft::required("name", "Full Name", FieldType::Text, 0, "Your Name"),
                FormFieldDraft::required("email", "Email Address", FieldType::Email, 1, "you@example.com"),
                FormFieldDraft::required("message", "Message", FieldType::Textarea, 2, "How can we help?"),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FormStats {
    #[serde(default)]
    pub submission_count: u64,
    #[serde(default)]
    pub last_submission: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_fields() {
        let form: Form = serde_json::from_str(
            r#"{"id":"f1","name":"Contact","website_id":"w1","fields":[
                {"id":"b","key":"email","label":"Email","field_type":"email","order":1},
                {"id":"a","key":"name","label":"Name","field_type":"text","order":0,"required":true}
            ]}"#,
        )
        .unwrap();
        let keys: Vec<_> = form.ordered_fields().into_iter().map(|f| f.key).collect();
        assert_eq!(keys, vec!["name", "email"]);
        assert!(form.settings.is_empty());
    }

    #[test]
    fn test_contact_form_defaults() {
        let draft = FormDraft::contact_form(" Contact Us ");
        assert_eq!(draft.name, "Contact Us");
        let keys: Vec<_> = draft.fields.iter().map(|f| (f.key.as_str(), f.order)).collect();
        assert_eq!(keys, vec![("name", 0), ("email", 1), ("message", 2)]);
        assert!(draft.fields.iter().all(|f| f.required));
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["fields"][2]["field_type"], "textarea");
    }
}
