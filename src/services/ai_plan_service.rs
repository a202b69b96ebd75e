use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Write as _;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, error};

#[cfg(test)]
use mockall::automock;

use crate::config::AiConfig;
use crate::models::{AthleteProfile, PlanRequest, RaceGoal, TrainingPhase};

const API_VERSION: &str = "2023-06-01";

#[derive(Error, Debug)]
pub enum AiPlanError {
    #[error("AI API key not configured")]
    MissingApiKey,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("AI API returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("AI response contained no text")]
    EmptyResponse,
    #[error("no JSON object in AI response")]
    NoJson,
    #[error("AI response JSON invalid: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Alternate source of plans. Whatever it returns is untrusted and must be
/// validated; any error means falling back to the rule-based generator.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlanSource: Send + Sync {
    async fn fetch_plan(
        &self,
        profile: &AthleteProfile,
        request: PlanRequest,
    ) -> Result<Value, AiPlanError>;
}

/// Plan source backed by a chat-style messages API.
#[derive(Debug, Clone)]
pub struct MessagesApiClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl MessagesApiClient {
    pub fn new(config: &AiConfig) -> Result<Self, AiPlanError> {
        let api_key = config.api_key.clone().ok_or(AiPlanError::MissingApiKey)?;
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            api_key,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }

    async fn complete(&self, prompt: &str) -> Result<String, AiPlanError> {
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .http
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "AI API error");
            return Err(AiPlanError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: MessagesResponse = response.json().await?;
        parsed
            .content
            .into_iter()
            .filter(|block| block.kind.is_empty() || block.kind == "text")
            .find_map(|block| block.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or(AiPlanError::EmptyResponse)
    }
}

#[async_trait]
impl PlanSource for MessagesApiClient {
    async fn fetch_plan(
        &self,
        profile: &AthleteProfile,
        request: PlanRequest,
    ) -> Result<Value, AiPlanError> {
        let prompt = build_prompt(profile, request);
        let text = self.complete(&prompt).await?;
        debug!(chars = text.len(), "received AI plan response");

        let json = extract_json_object(&text).ok_or(AiPlanError::NoJson)?;
        Ok(serde_json::from_str(json)?)
    }
}

/// Finds the plan JSON in a model reply: a fenced block if present, else
/// the outermost braces.
pub fn extract_json_object(text: &str) -> Option<&str> {
    static FENCED: OnceLock<Regex> = OnceLock::new();
    let fenced = FENCED.get_or_init(|| {
        Regex::new(r"```(?:json)?\s*(\{[\s\S]*?\})\s*```").expect("fenced JSON pattern")
    });

    if let Some(captures) = fenced.captures(text) {
        return captures.get(1).map(|m| m.as_str());
    }

    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

pub fn build_prompt(profile: &AthleteProfile, request: PlanRequest) -> String {
    let mut prompt = String::from(
        "You are an experienced marathon coach. Create a personalised 45-week \
         marathon training plan for the athlete below.\n\nATHLETE PROFILE:\n",
    );

    let name = if profile.name.trim().is_empty() { "the athlete" } else { profile.name.trim() };
    let _ = writeln!(prompt, "- Name: {}", name);
    if let Some(age) = profile.age {
        let _ = writeln!(prompt, "- Age: {} years", age);
    }
    if let (Some(weight), Some(height)) = (profile.weight, profile.height) {
        let _ = writeln!(prompt, "- Weight: {} kg, height: {} cm", weight, height);
    }
    if let Some(bmi) = profile.bmi() {
        let _ = writeln!(prompt, "- BMI: {:.1}", bmi);
    }
    let _ = writeln!(prompt, "- Experience: {:?}", profile.experience);
    if let Some(km) = profile.current_km_per_week {
        let _ = writeln!(prompt, "- Current volume: {} km/week", km);
    }
    if let Some(longest) = profile.longest_run {
        let _ = writeln!(prompt, "- Longest recent run: {}", longest);
    }
    if let Some(marathons) = profile.previous_marathons {
        let _ = writeln!(prompt, "- Previous marathons: {}", marathons);
    }
    let injuries = if profile.has_injuries() { profile.injuries.trim() } else { "none" };
    let _ = writeln!(prompt, "- Injuries: {}", injuries);
    let goal = match profile.goal {
        RaceGoal::Time => format!("finish in {}", profile.goal_label()),
        RaceGoal::Finish => "finish healthy".to_string(),
    };
    let _ = writeln!(prompt, "- Goal: {}", goal);

    let _ = writeln!(prompt, "\nTRAINING PREFERENCES:");
    let _ = writeln!(prompt, "- Run sessions per week: exactly {}", request.sessions_per_week);
    if request.include_strength {
        let _ = writeln!(
            prompt,
            "- Strength training: 2 sessions per week on Monday, Wednesday, Thursday or Friday, never displacing a run"
        );
    } else {
        let _ = writeln!(prompt, "- Strength training: none");
    }
    let _ = writeln!(
        prompt,
        "- Time per session: about {} minutes",
        profile.time_per_session.unwrap_or(60)
    );

    let _ = writeln!(prompt, "\nSTRUCTURE (exactly 5 phases):");
    for phase in TrainingPhase::ALL {
        let weeks = phase.weeks();
        let _ = writeln!(
            prompt,
            "- Phase {}: weeks {}-{} ({:?})",
            phase.number(),
            weeks.start(),
            weeks.end(),
            phase
        );
    }

    prompt.push_str(
        "\nRULES:\n\
         - The week runs Saturday to Friday; the long run is on Sunday.\n\
         - Do not list rest days; days without a workout are rest days.\n\
         - At most one workout per day.\n\
         \nReturn ONLY valid JSON in this shape:\n\
         {\"phases\": [{\"name\": \"...\", \"weeks\": [1, 2, 3, 4], \"description\": \"...\", \
         \"weeklyMinutes\": \"...\", \"workouts\": [{\"type\": \"...\", \"description\": \"...\", \
         \"day\": \"Sunday\"}]}], \"personalizedAdvice\": \"...\"}\n",
    );

    prompt
}
