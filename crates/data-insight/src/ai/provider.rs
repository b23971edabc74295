//! Summary provider trait for abstracting text-generation services.
//!
//! To add a new provider:
//!
//! 1. Create a new file in `src/ai/` (e.g., `ollama.rs`)
//! 2. Implement the [`SummaryProvider`] trait for your provider struct
//! 3. Export the provider in `src/ai/mod.rs`

use anyhow::Result;

/// Trait for services that turn a prompt into free text.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow usage across threads.
///
/// # Error Handling
///
/// Implementations should return meaningful errors via `anyhow::Result`;
/// [`super::generate_summary`] wraps them as
/// [`crate::InsightError::AiClientError`].
pub trait SummaryProvider: Send + Sync {
    /// Send the prompt and return the provider's text response.
    fn generate(&self, prompt: &str) -> Result<String>;

    /// Get the provider name for logging and debugging.
    fn name(&self) -> &str;

    /// Get the model being used by this provider.
    ///
    /// Returns `None` if the provider doesn't expose model information.
    fn model(&self) -> Option<&str> {
        None
    }
}
