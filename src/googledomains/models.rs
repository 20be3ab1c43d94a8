#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ChallengeRecord {
    pub fqdn: String,
    pub digest: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RotateRequest {
    pub access_token: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub records_to_add: Vec<ChallengeRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub records_to_remove: Vec<ChallengeRecord>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub keep_expired_records: bool,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub(super) struct ErrorResponse {
    pub error: ErrorInfo,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub(super) struct ErrorInfo {
    pub code: usize,
    pub message: String,
    pub status: String,
    pub details: Vec<ErrorDetail>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub(super) struct ErrorDetail {
    #[serde(rename = "fieldViolations")]
    pub field_violations: Vec<FieldViolation>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub(super) struct FieldViolation {
    pub description: String,
}
