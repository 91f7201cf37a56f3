//! Dashboard Aggregates

use std::collections::BTreeMap;

use serde::Deserialize;

use super::DealStage;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DashboardOverview {
    #[serde(default)]
    pub total_contacts: u64,
    #[serde(default)]
    pub active_deals: u64,
    #[serde(default)]
    pub pipeline_value: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PipelineStage {
    pub stage: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub value: f64,
}

/// `/dashboard/pipeline` answers either with a list of stage rows or with a
/// bare `{ stage: count }` map; both are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PipelineResponse {
    Stages(Vec<PipelineStage>),
    Counts(BTreeMap<String, u64>),
}

impl PipelineResponse {
    /// Normalise into rows, known stages first in pipeline order
    pub fn into_stages(self) -> Vec<PipelineStage> {
        let mut stages = match self {
            PipelineResponse::Stages(stages) => stages,
            PipelineResponse::Counts(counts) => counts
                .into_iter()
                .map(|(stage, count)| PipelineStage { stage, count, value: 0.0 })
                .collect(),
        };
        stages.sort_by_key(|row| {
            row.stage
                .parse::<DealStage>()
                .map(DealStage::index)
                .unwrap_or(DealStage::ALL.len())
        });
        stages
    }
}

/// Bar width in percent, relative to the largest stage count
pub fn bar_percent(count: u64, max: u64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (count as f64 / max as f64 * 100.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_list_shape() {
        let response: PipelineResponse = serde_json::from_str(
            r#"[{"stage":"CLOSED","count":1,"value":10},{"stage":"LEAD","count":4,"value":400}]"#,
        )
        .unwrap();
        let stages = response.into_stages();
        assert_eq!(stages[0].stage, "LEAD");
        assert_eq!(stages[1].stage, "CLOSED");
    }

    #[test]
    fn test_pipeline_map_shape() {
        let response: PipelineResponse =
            serde_json::from_str(r#"{"won":2,"proposal":5,"lead":10}"#).unwrap();
        let stages = response.into_stages();
        let names: Vec<_> = stages.iter().map(|s| s.stage.as_str()).collect();
        assert_eq!(names, vec!["lead", "proposal", "won"]);
        assert_eq!(stages[0].count, 10);
    }

    #[test]
    fn test_bar_percent() {
        assert_eq!(bar_percent(5, 10), 50.0);
        assert_eq!(bar_percent(10, 10), 100.0);
        assert_eq!(bar_percent(0, 0), 0.0);
    }
}
