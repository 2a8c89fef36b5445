//! Published-spreadsheet content retrieval.
//!
//! One fetch per call: no retry, no caching, no in-flight de-duplication.
//! Every request gets a `t=<millis>` cache-busting parameter so a freshly
//! edited sheet shows up immediately. Failures at this boundary never
//! propagate: question loading degrades to the sample set for the topic,
//! config/leaderboard loading degrades to an empty list.

use std::sync::OnceLock;

use chrono::Utc;
use regex::Regex;
use reqwest::Client;
use thiserror::Error;

use quiz_core::questions::parse_questions_with_stats;
use quiz_core::types::{LeaderboardEntry, Question, Topic, TopicConfig};
use quiz_core::{parse_leaderboard, parse_topic_configs, samples};

/// Published master configuration/leaderboard sheet.
pub const DEFAULT_MASTER_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQUv4zA167WG6griM00FRz-MTUm-v8o0687XWoWk_VbJ4PP-X5AyF-joKVu5gTVLu89rWJzvzvZnP55/pub?output=csv";

/// Fetch errors. Always absorbed inside this module; exposed for logging.
#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("HTTP {status} fetching sheet")]
    Status { status: u16 },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Sheet endpoint configuration.
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    pub master_sheet_url: String,
}

impl SheetsConfig {
    /// Read configuration from the environment (`MASTER_SHEET_URL`),
    /// falling back to the published default.
    pub fn from_env() -> Self {
        Self {
            master_sheet_url: std::env::var("MASTER_SHEET_URL")
                .unwrap_or_else(|_| DEFAULT_MASTER_SHEET_URL.to_string()),
        }
    }
}

/// HTTP client over the published sheets.
pub struct SheetsService {
    client: Client,
    config: SheetsConfig,
}

impl SheetsService {
    pub fn new(config: SheetsConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Load questions for a topic, filtered by its worksheet number.
    ///
    /// A placeholder URL, any transport failure, or a sheet yielding zero
    /// usable rows all fall back to the topic's sample questions. An
    /// unknown topic id has no samples and yields an empty list.
    pub async fn questions_for_topic(&self, topic: &Topic) -> Vec<Question> {
        if topic.sheet_url.starts_with("PLACEHOLDER_") {
            tracing::warn!(
                topic = %topic.id,
                "sheet URL not configured, serving sample questions"
            );
            return samples::sample_questions(&topic.id);
        }

        let mut csv_url = topic.sheet_url.clone();
        if csv_url.contains("/edit") {
            csv_url = csv_url
                .replace("/edit#gid=0", "/export?format=csv")
                .replace("/edit", "/export?format=csv");
        }
        if let Some(gid) = &topic.worksheet_gid {
            csv_url = csv_url_with_worksheet(&csv_url, Some(gid));
        }

        tracing::info!(
            topic = %topic.id,
            worksheet = ?topic.worksheet_number,
            "loading questions from sheet"
        );

        match self.fetch_csv(&csv_url).await {
            Ok(csv_text) => {
                let (questions, stats) =
                    parse_questions_with_stats(&csv_text, &topic.id, topic.worksheet_number);
                if stats.unmatched_answers > 0 {
                    tracing::warn!(
                        topic = %topic.id,
                        count = stats.unmatched_answers,
                        "rows whose answer text matched no option defaulted to letter A"
                    );
                }
                if questions.is_empty() {
                    tracing::warn!(topic = %topic.id, "sheet yielded no questions, serving samples");
                    samples::sample_questions(&topic.id)
                } else {
                    tracing::info!(topic = %topic.id, count = questions.len(), "loaded questions");
                    questions
                }
            }
            Err(err) => {
                tracing::warn!(topic = %topic.id, error = %err, "sheet fetch failed, serving samples");
                samples::sample_questions(&topic.id)
            }
        }
    }

    /// Load topic configuration rows from the master sheet; empty on failure.
    pub async fn topic_configs(&self) -> Vec<TopicConfig> {
        match self.fetch_csv(&self.config.master_sheet_url).await {
            Ok(csv_text) => parse_topic_configs(&csv_text),
            Err(err) => {
                tracing::warn!(error = %err, "master sheet fetch failed, no topic config");
                Vec::new()
            }
        }
    }

    /// Load leaderboard rows from the master sheet; empty on failure.
    pub async fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        match self.fetch_csv(&self.config.master_sheet_url).await {
            Ok(csv_text) => parse_leaderboard(&csv_text),
            Err(err) => {
                tracing::warn!(error = %err, "master sheet fetch failed, empty leaderboard");
                Vec::new()
            }
        }
    }

    async fn fetch_csv(&self, url: &str) -> Result<String, SheetsError> {
        let url = with_cache_buster(url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SheetsError::Status {
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

/// Append the cache-busting timestamp parameter.
fn with_cache_buster(url: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}t={}", url, separator, Utc::now().timestamp_millis())
}

/// Rewrite a sheet URL to address one worksheet tab by GID.
///
/// Handles the three Google Sheets URL shapes: published (`/pub?`), export
/// (`/export`), and editor (`/edit`, converted to an export URL). Uses the
/// provided GID, then any GID already in the URL, then `0`.
pub fn csv_url_with_worksheet(base_url: &str, worksheet_gid: Option<&str>) -> String {
    static GID_RE: OnceLock<Regex> = OnceLock::new();
    static SHEET_ID_RE: OnceLock<Regex> = OnceLock::new();
    let gid_re = GID_RE.get_or_init(|| Regex::new(r"[?&]gid=(\d+)").expect("static regex"));
    let sheet_id_re = SHEET_ID_RE
        .get_or_init(|| Regex::new(r"/d/([a-zA-Z0-9-_]+)").expect("static regex"));

    let existing_gid = gid_re
        .captures(base_url)
        .map(|caps| caps[1].to_string());
    let gid = worksheet_gid
        .map(str::to_string)
        .or(existing_gid)
        .unwrap_or_else(|| "0".to_string());

    let replace_gid = |url: &str| -> String {
        static BARE_GID_RE: OnceLock<Regex> = OnceLock::new();
        let re = BARE_GID_RE.get_or_init(|| Regex::new(r"gid=\d+").expect("static regex"));
        re.replace(url, format!("gid={}", gid).as_str()).into_owned()
    };

    if base_url.contains("/pub?") {
        if base_url.contains("gid=") {
            replace_gid(base_url)
        } else {
            let separator = if base_url.contains('?') { '&' } else { '?' };
            format!("{}{}gid={}&single=true&output=csv", base_url, separator, gid)
        }
    } else if base_url.contains("/export") {
        if base_url.contains("gid=") {
            replace_gid(base_url)
        } else {
            let separator = if base_url.contains('?') { '&' } else { '?' };
            format!("{}{}gid={}", base_url, separator, gid)
        }
    } else if base_url.contains("/edit") {
        match sheet_id_re.captures(base_url) {
            Some(caps) => format!(
                "https://docs.google.com/spreadsheets/d/{}/export?format=csv&gid={}",
                &caps[1], gid
            ),
            None => base_url.to_string(),
        }
    } else {
        base_url.to_string()
    }
}
