//! Natural-language summary generation.
//!
//! The summary is produced by an external text-generation service from
//! facts the analyzer has already computed. The library never calls the
//! service on its own; callers opt in through [`generate_summary`].
//!
//! # Feature Flag
//!
//! The [`SummaryProvider`] trait and the prompt/fallback logic are always
//! available. The concrete [`OpenAiProvider`] requires the `ai` feature
//! (enabled by default).
//!
//! ```toml
//! # Disable the HTTP provider for a smaller binary
//! data-insight = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use data_insight::ai::{generate_summary, provider_from_env, SummaryFacts};
//!
//! let facts = SummaryFacts::from_report(&report);
//! let provider = provider_from_env()?;
//! let text = generate_summary(provider.as_ref().map(|p| p as _), &facts)?;
//! ```

mod provider;
mod summary;

pub use provider::SummaryProvider;
pub use summary::{
    MISSING_API_KEY_MESSAGE, SummaryFacts, build_summary_prompt, generate_summary,
    summary_or_notice,
};

#[cfg(feature = "ai")]
mod openai;

#[cfg(feature = "ai")]
pub use openai::{API_KEY_ENV, OpenAiConfig, OpenAiConfigBuilder, OpenAiProvider, provider_from_env};
