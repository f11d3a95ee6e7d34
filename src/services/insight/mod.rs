// Insight service
// Blocking Gemini client producing an AI critique of one tracked week

use std::collections::BTreeMap;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::models::insight::AiInsight;
use crate::models::slot::TimeSlot;
use crate::services::slot::WeekData;

const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";
const API_KEY_VAR: &str = "GEMINI_API_KEY";

#[derive(Debug, Error)]
pub enum InsightError {
    #[error("No Gemini API key configured (set {API_KEY_VAR})")]
    MissingApiKey,
    #[error("Failed to reach the insight service: {0}")]
    Connectivity(#[from] reqwest::Error),
    #[error("Insight service returned HTTP status {0}")]
    Status(StatusCode),
    #[error("Insight response was malformed: {0}")]
    Malformed(String),
}

pub struct InsightService {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl InsightService {
    pub fn new(api_key: impl Into<String>) -> Result<Self, InsightError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            endpoint: GEMINI_ENDPOINT.to_string(),
        })
    }

    /// Build the service from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, InsightError> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(InsightError::MissingApiKey)?;
        Self::new(api_key)
    }

    #[cfg(test)]
    fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Request a critique of the given week snapshot. Blocking; call from
    /// a worker thread, not the UI thread.
    pub fn request_insight(&self, data: &WeekData) -> Result<AiInsight, InsightError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": build_prompt(data) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
            }
        });

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()?;

        let status = response.status();
        if status != StatusCode::OK {
            log::warn!("Insight request failed with HTTP status {}", status);
            return Err(InsightError::Status(status));
        }

        let payload: GenerateContentResponse = response.json()?;
        parse_insight(&payload)
    }
}

/// Run the insight request on a worker thread; the UI polls the returned
/// channel each frame. Fire-and-forget with respect to selection state.
pub fn spawn_insight_request(
    service: InsightService,
    data: WeekData,
) -> mpsc::Receiver<Result<AiInsight, InsightError>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = service.request_insight(&data);
        if let Err(ref err) = result {
            log::error!("Insight request failed: {}", err);
        }
        // Receiver may have been dropped (week navigated away); fine.
        let _ = tx.send(result);
    });
    rx
}

/// Schema the model's JSON reply must satisfy. The score is constrained to
/// an integer so it deserializes straight into [`AiInsight::score`].
fn response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "score": { "type": "INTEGER" },
            "critique": { "type": "STRING" },
            "recommendations": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "required": ["score", "critique", "recommendations"]
    })
}

/// Serialize the week into the prompt. Dates are ISO keys; hours map to
/// their category and rating, matching what the model is asked to analyze.
fn build_prompt(data: &WeekData) -> String {
    // BTreeMap for a stable day/hour order in the prompt
    let ordered: BTreeMap<String, BTreeMap<u32, TimeSlot>> = data
        .iter()
        .map(|(date, hours)| {
            (
                date.format("%Y-%m-%d").to_string(),
                hours.iter().map(|(h, s)| (*h, *s)).collect(),
            )
        })
        .collect();
    let payload = serde_json::to_string(&ordered).unwrap_or_else(|_| "{}".to_string());

    format!(
        "Analyze the following weekly productivity data.\n\
         The data is formatted as ISO date keys and a map of hours (0-23) with their \
         activity status (PRODUCTIVE, UNPRODUCTIVE, SLEEP, UNTRACKED) and ratings (1-5).\n\n\
         Data: {}\n\n\
         Provide:\n\
         1. An accountability score (0-100).\n\
         2. A brief, punchy, \"tough love\" critique of the user's time management.\n\
         3. 3 specific, actionable recommendations to improve productivity or sleep.\n\n\
         Format the response as JSON.",
        payload
    )
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

fn parse_insight(response: &GenerateContentResponse) -> Result<AiInsight, InsightError> {
    let text = response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.as_str())
        .ok_or_else(|| InsightError::Malformed("response contained no candidates".into()))?;

    let insight: AiInsight = serde_json::from_str(text)
        .map_err(|e| InsightError::Malformed(format!("invalid insight JSON: {}", e)))?;
    insight.validate().map_err(InsightError::Malformed)?;
    Ok(insight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::slot::SlotCategory;
    use chrono::NaiveDate;
    use serial_test::serial;

    fn sample_week() -> WeekData {
        let mut data = WeekData::new();
        data.entry(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap())
            .or_default()
            .insert(9, TimeSlot::new(SlotCategory::Productive, Some(4)).unwrap());
        data
    }

    #[test]
    fn test_build_prompt_contains_week_payload() {
        let prompt = build_prompt(&sample_week());
        assert!(prompt.contains("2024-06-03"));
        assert!(prompt.contains("PRODUCTIVE"));
        assert!(prompt.contains("accountability score"));
    }

    #[test]
    fn test_response_schema_requests_integer_score() {
        // A NUMBER here would let the model return fractions the u8 score
        // field rejects
        let schema = response_schema();
        assert_eq!(schema["properties"]["score"]["type"], "INTEGER");
        assert_eq!(schema["required"][0], "score");
    }

    #[test]
    fn test_parse_insight_success() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: CandidateContent {
                    parts: vec![CandidatePart {
                        text: r#"{"score":60,"critique":"Meh.","recommendations":["a","b","c"]}"#
                            .to_string(),
                    }],
                },
            }],
        };
        let insight = parse_insight(&response).unwrap();
        assert_eq!(insight.score, 60);
        assert_eq!(insight.critique, "Meh.");
    }

    #[test]
    fn test_parse_insight_no_candidates() {
        let response = GenerateContentResponse { candidates: vec![] };
        assert!(matches!(
            parse_insight(&response),
            Err(InsightError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_insight_bad_json() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: CandidateContent {
                    parts: vec![CandidatePart {
                        text: "not json".to_string(),
                    }],
                },
            }],
        };
        assert!(matches!(
            parse_insight(&response),
            Err(InsightError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_insight_score_out_of_range() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: CandidateContent {
                    parts: vec![CandidatePart {
                        text: r#"{"score":250,"critique":"","recommendations":[]}"#.to_string(),
                    }],
                },
            }],
        };
        assert!(parse_insight(&response).is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_missing_key() {
        std::env::remove_var(API_KEY_VAR);
        assert!(matches!(
            InsightService::from_env(),
            Err(InsightError::MissingApiKey)
        ));
    }

    #[test]
    #[serial]
    fn test_from_env_blank_key_rejected() {
        std::env::set_var(API_KEY_VAR, "  ");
        assert!(matches!(
            InsightService::from_env(),
            Err(InsightError::MissingApiKey)
        ));
        std::env::remove_var(API_KEY_VAR);
    }

    #[test]
    fn test_spawn_request_reports_connectivity_error() {
        // Connection refused locally; exercises the worker-thread path
        let service = InsightService::new("test-key")
            .unwrap()
            .with_endpoint("http://127.0.0.1:9/generate");
        let rx = spawn_insight_request(service, sample_week());
        let result = rx.recv_timeout(Duration::from_secs(40)).unwrap();
        assert!(matches!(result, Err(InsightError::Connectivity(_))));
    }
}
