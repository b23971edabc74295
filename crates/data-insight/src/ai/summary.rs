//! Prompt construction and the credential fallback for summaries.

use super::SummaryProvider;
use crate::error::{InsightError, Result};
use crate::reporting::{InsightReport, format_basic_stats, format_missing_summary};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Returned instead of a summary when no provider credentials are configured.
pub const MISSING_API_KEY_MESSAGE: &str =
    "OPENAI_API_KEY is missing. Add it to a .env file and restart.";

/// Already-computed facts handed to the text-generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryFacts {
    /// (rows, columns)
    pub shape: (usize, usize),
    pub numeric_columns: Vec<String>,
    pub categorical_columns: Vec<String>,
    /// Mean/min/max table rendered as text.
    pub descriptive_stats: String,
    /// Missing-value table rendered as text.
    pub missing_summary: String,
}

impl SummaryFacts {
    /// Collect the facts from a finished report.
    pub fn from_report(report: &InsightReport) -> Self {
        Self {
            shape: report.shape,
            numeric_columns: report.columns.numeric.clone(),
            categorical_columns: report.columns.categorical.clone(),
            descriptive_stats: format_basic_stats(&report.descriptive_stats.to_basic()),
            missing_summary: format_missing_summary(&report.missing_values),
        }
    }
}

/// Render the facts into the instruction prompt sent to the provider.
pub fn build_summary_prompt(facts: &SummaryFacts) -> String {
    format!(
        "You are a data analyst. Write a clear, non-technical summary.\n\n\
        Dataset:\n\
        - Rows, Columns: ({}, {})\n\
        - Numeric columns: {:?}\n\
        - Categorical columns: {:?}\n\n\
        Descriptive stats (mean/min/max):\n{}\n\n\
        Missing values summary:\n{}\n\n\
        Rules:\n\
        - Only describe what is supported by the provided stats.\n\
        - Do NOT invent numbers.\n\
        - If something cannot be determined, say so.\n\
        - Keep it concise (5-8 bullet points).\n",
        facts.shape.0,
        facts.shape.1,
        facts.numeric_columns,
        facts.categorical_columns,
        facts.descriptive_stats,
        facts.missing_summary,
    )
}

/// Produce a plain-English summary of the facts.
///
/// Without a provider (no credentials) this returns
/// [`MISSING_API_KEY_MESSAGE`] rather than failing.
///
/// # Errors
///
/// [`InsightError::AiClientError`] if the provider call fails.
pub fn generate_summary(
    provider: Option<&dyn SummaryProvider>,
    facts: &SummaryFacts,
) -> Result<String> {
    let Some(provider) = provider else {
        warn!("No summary provider configured; returning fallback message");
        return Ok(MISSING_API_KEY_MESSAGE.to_string());
    };

    let prompt = build_summary_prompt(facts);
    debug!(
        "Requesting summary from {} ({})",
        provider.name(),
        provider.model().unwrap_or("default model")
    );

    provider
        .generate(&prompt)
        .map(|text| text.trim().to_string())
        .map_err(|e| InsightError::AiClientError(format!("{}: {}", provider.name(), e)))
}

/// Like [`generate_summary`], but never fails: a provider error is logged
/// and returned as a `Summary unavailable: ...` notice.
pub fn summary_or_notice(provider: Option<&dyn SummaryProvider>, facts: &SummaryFacts) -> String {
    generate_summary(provider, facts).unwrap_or_else(|e| {
        warn!("Summary generation failed: {}", e);
        format!("Summary unavailable: {}", e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::sync::Mutex;

    struct RecordingProvider {
        reply: std::result::Result<String, String>,
        prompts: Mutex<Vec<String>>,
    }

    impl RecordingProvider {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    impl SummaryProvider for RecordingProvider {
        fn generate(&self, prompt: &str) -> anyhow::Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone().map_err(|e| anyhow!(e))
        }

        fn name(&self) -> &str {
            "Recording"
        }
    }

    fn facts() -> SummaryFacts {
        SummaryFacts {
            shape: (120, 3),
            numeric_columns: vec!["sales".to_string(), "units".to_string()],
            categorical_columns: vec!["region".to_string()],
            descriptive_stats: "column mean min max\nsales 10.00 1.00 20.00".to_string(),
            missing_summary: "No missing values found.".to_string(),
        }
    }

    #[test]
    fn test_prompt_contains_facts_and_rules() {
        let prompt = build_summary_prompt(&facts());

        assert!(prompt.contains("Rows, Columns: (120, 3)"));
        assert!(prompt.contains("\"sales\", \"units\""));
        assert!(prompt.contains("\"region\""));
        assert!(prompt.contains("sales 10.00 1.00 20.00"));
        assert!(prompt.contains("No missing values found."));
        assert!(prompt.contains("Do NOT invent numbers."));
        assert!(prompt.contains("5-8 bullet points"));
    }

    #[test]
    fn test_missing_provider_returns_fallback() {
        let text = generate_summary(None, &facts()).unwrap();
        assert_eq!(text, MISSING_API_KEY_MESSAGE);
    }

    #[test]
    fn test_provider_text_is_trimmed() {
        let provider = RecordingProvider::replying("\n- Sales look steady.\n  ");
        let text = generate_summary(Some(&provider), &facts()).unwrap();

        assert_eq!(text, "- Sales look steady.");
        let prompts = provider.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Rows, Columns: (120, 3)"));
    }

    #[test]
    fn test_provider_failure_is_ai_client_error() {
        let provider = RecordingProvider::failing("quota exceeded");
        let err = generate_summary(Some(&provider), &facts()).unwrap_err();

        assert_eq!(err.error_code(), "AI_CLIENT_ERROR");
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn test_summary_or_notice_keeps_failure_as_text() {
        let provider = RecordingProvider::failing("connection refused");
        let text = summary_or_notice(Some(&provider), &facts());

        assert!(text.starts_with("Summary unavailable:"));
        assert!(text.contains("connection refused"));
    }

    #[test]
    fn test_summary_or_notice_passes_through_success() {
        let provider = RecordingProvider::replying(" - Revenue peaks in the west. ");
        assert_eq!(
            summary_or_notice(Some(&provider), &facts()),
            "- Revenue peaks in the west."
        );
        assert_eq!(summary_or_notice(None, &facts()), MISSING_API_KEY_MESSAGE);
    }
}
