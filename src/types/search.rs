use serde::{Deserialize, Serialize};

/// Advanced search criteria, serialized as query parameters.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nr_num: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comp_name: Option<String>,
}

/// Search results page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedSearchResults {
    #[serde(default)]
    pub name_requests: Vec<serde_json::Value>,
    #[serde(default)]
    pub num_found: Option<i64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Daily processing statistics.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    #[serde(default)]
    pub auto_approved_count: Option<i64>,
    #[serde(default)]
    pub priority_wait_time: Option<f64>,
    #[serde(default)]
    pub regular_wait_time: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Name-analysis request parameters.
///
/// Field names match the backend's query-parameter names, which are
/// snake_case unlike the JSON payloads.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NameAnalysisQuery {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type_cd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_action_cd: Option<String>,
}

/// Result of the name-analysis endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisJson {
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub issues: Vec<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
