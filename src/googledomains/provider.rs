use snafu::prelude::*;

use crate::common::{
    self, absolute_name, key_file_or_string, DecodeSnafu, ModeSnafu, Record, RequestSnafu,
    ResponseSnafu, Result, UnsupportedSnafu, RECORD_KIND_TXT,
};

use super::models::{ChallengeRecord, ErrorResponse, RotateRequest};

// API Reference: https://developers.google.com/domains/acme-dns/reference/rest
const API_BASE_URL: &str = "https://acmedns.googleapis.com/v1/acmeChallengeSets/";

pub const PROVIDER_ID: &str = "google_domains";
pub const PROVIDER_NAME: &str = "GoogleDomains";

pub const MODE_ADD: &str = "add";
pub const MODE_REMOVE: &str = "remove";

/// Rotates ACME DNS-01 challenge records through the Google Domains API.
pub struct GoogleDomains {
    access_token: String,
    keep_expired_records: bool,
    api_base: String,
}

fn handle_response(response: ureq::Response) -> Result<()> {
    let status = response.status();
    if status == 200 {
        return Ok(());
    }

    let info: ErrorResponse =
        serde_json::from_reader(response.into_reader()).context(DecodeSnafu)?;

    tracing::debug!(
        provider = PROVIDER_NAME,
        code = info.error.code,
        status = info.error.status,
        "Provider rejected rotation"
    );

    let mut message = info.error.message;
    for detail in info.error.details {
        for violation in detail.field_violations {
            message.push_str(&format!("; {}", violation.description));
        }
    }

    ResponseSnafu { status, message }.fail()
}

impl GoogleDomains {
    fn make_payload(&self, zone: &str, records: &[Record], mode: &str) -> Result<RotateRequest> {
        if mode != MODE_ADD && mode != MODE_REMOVE {
            return ModeSnafu { mode }.fail();
        }

        let mut challenges = Vec::with_capacity(records.len());
        for record in records {
            // The rotation endpoint only understands challenge TXT records.
            if record.kind != RECORD_KIND_TXT {
                return UnsupportedSnafu {
                    name: record.name.clone(),
                    kind: record.kind.clone(),
                }
                .fail();
            }

            challenges.push(ChallengeRecord {
                fqdn: absolute_name(&record.name, zone),
                digest: record.content.clone(),
                update_time: None,
            });
        }

        let mut payload = RotateRequest {
            access_token: self.access_token.clone(),
            records_to_add: Vec::new(),
            records_to_remove: Vec::new(),
            keep_expired_records: self.keep_expired_records,
        };

        if mode == MODE_REMOVE {
            payload.records_to_remove = challenges;
        } else {
            payload.records_to_add = challenges;
        }

        Ok(payload)
    }

    fn rotate(&self, zone: &str, records: Vec<Record>, mode: &str) -> Result<Vec<Record>> {
        let payload = self.make_payload(zone, &records, mode)?;
        let url = format!("{}{}:rotateChallenges", self.api_base, zone);
        let tracing_id = uuid::Uuid::new_v4();

        tracing::debug!(
            provider = PROVIDER_NAME,
            url = url,
            method = "POST",
            mode = mode,
            records = records.len(),
            tracing_id = tracing_id.to_string(),
            "Sending rotation"
        );

        let response = match ureq::post(&url)
            .set("Content-Type", "application/json")
            .send_json(&payload)
        {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(source) => {
                return Err(source).context(RequestSnafu {
                    url,
                    method: "POST",
                });
            }
        };

        handle_response(response)?;

        tracing::info!(
            provider = PROVIDER_NAME,
            mode = mode,
            records = records.len(),
            tracing_id = tracing_id.to_string(),
            "Rotation completed"
        );

        Ok(records)
    }
}

impl common::Provider for GoogleDomains {
    fn append_records(&self, zone: &str, records: Vec<Record>) -> Result<Vec<Record>> {
        self.rotate(zone, records, MODE_ADD)
    }

    fn delete_records(&self, zone: &str, records: Vec<Record>) -> Result<Vec<Record>> {
        self.rotate(zone, records, MODE_REMOVE)
    }
}

impl From<super::Config> for GoogleDomains {
    fn from(value: super::Config) -> Self {
        let access_token = key_file_or_string(value.access_token, PROVIDER_NAME.into()).unwrap();

        let mut api_base = match value.api_base {
            Some(base) => base.to_string(),
            None => API_BASE_URL.to_string(),
        };
        if !api_base.ends_with('/') {
            api_base.push('/');
        }

        Self {
            access_token,
            keep_expired_records: value.keep_expired_records,
            api_base,
        }
    }
}
