//! Deal Entity
//!
//! A deal sits in exactly one pipeline stage. Stages are totally ordered and
//! the UI only ever advances a deal by one step.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{deserialize_id, Entity};

/// Pipeline stage, in pipeline order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum DealStage {
    #[default]
    #[serde(alias = "lead")]
    Lead,
    #[serde(alias = "qualified")]
    Qualified,
    #[serde(alias = "proposal")]
    Proposal,
    #[serde(alias = "negotiation")]
    Negotiation,
    #[serde(alias = "closed")]
    Closed,
}

impl DealStage {
    /// All stages in pipeline order
    pub const ALL: [DealStage; 5] = [
        DealStage::Lead,
        DealStage::Qualified,
        DealStage::Proposal,
        DealStage::Negotiation,
        DealStage::Closed,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The single stage a deal may move forward to; `None` for the terminal stage
    pub fn next(self) -> Option<DealStage> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DealStage::Lead => "LEAD",
            DealStage::Qualified => "QUALIFIED",
            DealStage::Proposal => "PROPOSAL",
            DealStage::Negotiation => "NEGOTIATION",
            DealStage::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for DealStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DealStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown deal stage: {}", s))
    }
}

/// Deal as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub stage: DealStage,
    #[serde(deserialize_with = "deserialize_id")]
    pub contact_id: String,
    #[serde(default)]
    pub created_at: String,
}

impl Entity for Deal {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Create/update payload for a deal
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DealDraft {
    pub title: String,
    pub value: f64,
    pub stage: DealStage,
    pub contact_id: String,
}

impl From<&Deal> for DealDraft {
    fn from(deal: &Deal) -> Self {
        Self {
            title: deal.title.clone(),
            value: deal.value,
            stage: deal.stage,
            contact_id: deal.contact_id.clone(),
        }
    }
}

/// Body of `PUT /deals/{id}/stage`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StageUpdate {
    pub stage: DealStage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order() {
        assert!(DealStage::Lead < DealStage::Qualified);
        assert!(DealStage::Negotiation < DealStage::Closed);
        assert_eq!(DealStage::Lead.next(), Some(DealStage::Qualified));
        assert_eq!(DealStage::Negotiation.next(), Some(DealStage::Closed));
        assert_eq!(DealStage::Closed.next(), None);
        assert!(DealStage::Closed.is_terminal());
        assert!(!DealStage::Proposal.is_terminal());
    }

    #[test]
    fn test_stage_parse() {
        assert_eq!("proposal".parse::<DealStage>(), Ok(DealStage::Proposal));
        assert_eq!(" CLOSED ".parse::<DealStage>(), Ok(DealStage::Closed));
        assert!("won".parse::<DealStage>().is_err());
    }

    #[test]
    fn test_deal_wire_format() {
        let deal: Deal = serde_json::from_str(
            r#"{"id":7,"title":"Renewal","value":1200.5,"stage":"NEGOTIATION","contact_id":"c-1","created_at":"2024-01-01T00:00:00"}"#,
        )
        .unwrap();
        assert_eq!(deal.id, "7");
        assert_eq!(deal.stage, DealStage::Negotiation);

        let lower: Deal =
            serde_json::from_str(r#"{"id":"d","title":"x","stage":"lead","contact_id":3}"#).unwrap();
        assert_eq!(lower.stage, DealStage::Lead);
        assert_eq!(lower.value, 0.0);

        let body = serde_json::to_string(&StageUpdate { stage: DealStage::Qualified }).unwrap();
        assert_eq!(body, r#"{"stage":"QUALIFIED"}"#);
    }
}
