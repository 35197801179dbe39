//! AI audit client.
//!
//! Ships the full record collections to the Gemini `generateContent`
//! endpoint and maps its structured JSON answer back into typed findings.
//! The call is opaque to the rest of the crate: it reads records, never
//! writes them, and a failure here is reported and forgotten.

use serde::Deserialize;
use serde_json::{Value, json};
use strum::{Display, EnumString};

use crate::config::Config;
use crate::error::{Result, WfmError};
use crate::model::{AdvanceEntry, AttendanceEntry, Employee, Project};

const SERVICE: &str = "gemini";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuditFinding {
    pub severity: Severity,
    /// "Duplicate", "Anomaly", or "Insight".
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    #[serde(default, rename = "affectedEntryIds")]
    pub affected_entry_ids: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuditReport {
    pub summary: String,
    pub findings: Vec<AuditFinding>,
}

pub struct GeminiAuditor {
    client: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiAuditor {
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config
            .gemini_api_key
            .clone()
            .ok_or_else(|| WfmError::ExternalService {
                service: SERVICE,
                message: "GEMINI_API_KEY is not configured".to_string(),
            })?;

        // No request timeout: the caller suspends until the service resolves
        // and retry is manual.
        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            model: config.gemini_model.clone(),
            endpoint: config.gemini_endpoint.clone(),
        })
    }

    pub async fn audit(
        &self,
        employees: &[Employee],
        projects: &[Project],
        attendance: &[AttendanceEntry],
        advances: &[AdvanceEntry],
    ) -> Result<AuditReport> {
        let body = request_body(employees, projects, attendance, advances)?;
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(external)?;
        let payload: Value = response.json().await.map_err(external)?;
        parse_response(&payload)
    }
}

fn external(e: reqwest::Error) -> WfmError {
    WfmError::ExternalService {
        service: SERVICE,
        message: e.to_string(),
    }
}

fn malformed(detail: &str) -> WfmError {
    WfmError::ExternalService {
        service: SERVICE,
        message: format!("malformed response: {detail}"),
    }
}

fn request_body(
    employees: &[Employee],
    projects: &[Project],
    attendance: &[AttendanceEntry],
    advances: &[AdvanceEntry],
) -> Result<Value> {
    let prompt = format!(
        "Act as a construction company auditor.\n\
         Review these logs for duplicate entries, anomalies, or suspicious patterns.\n\
         Duplicate entries are multiple logs for the same employee on the same date for the same project.\n\
         Anomalies include excessive overtime (> 4 hours daily) or unusually large advances.\n\n\
         Employees: {}\n\
         Projects: {}\n\
         Attendance: {}\n\
         Advances: {}",
        serde_json::to_string(employees)?,
        serde_json::to_string(projects)?,
        serde_json::to_string(attendance)?,
        serde_json::to_string(advances)?,
    );

    Ok(json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "findings": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "severity": { "type": "STRING", "description": "low, medium, high" },
                                "type": { "type": "STRING", "description": "Duplicate, Anomaly, or Insight" },
                                "description": { "type": "STRING" },
                                "affectedEntryIds": {
                                    "type": "ARRAY",
                                    "items": { "type": "STRING" }
                                }
                            },
                            "required": ["severity", "type", "description"]
                        }
                    },
                    "summary": { "type": "STRING" }
                },
                "required": ["findings", "summary"]
            }
        }
    }))
}

/// The structured answer arrives as JSON text inside the first candidate
/// part.
fn parse_response(payload: &Value) -> Result<AuditReport> {
    let text = payload
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("no candidate text"))?;
    serde_json::from_str(text).map_err(|e| malformed(&e.to_string()))
}
