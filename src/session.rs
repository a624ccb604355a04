//! Generation session: one in-flight call, one remembered result
//!
//! [`OutlineSession`] is what a presentation layer holds on to. It enforces
//! that at most one completion call runs at a time and keeps the most recent
//! successful outline until the next success replaces it.

use crate::config::{ConnectionSettings, GenerationParams};
use crate::core_types::provider::{CompletionProvider, CompletionResult};
use crate::error::{OutlineError, OutlineResult};
use crate::form::OutlineForm;
use crate::logging::{log_debug, log_info, log_warn};
use crate::outline::{MarkdownExport, OutlineCheck};
use crate::prompt::{build_messages, InterviewRequest, PromptTemplate};
use reqwest::Url;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Drives outline generation for a single form
pub struct OutlineSession<P: CompletionProvider> {
    provider: P,
    template: PromptTemplate,
    params: GenerationParams,
    in_flight: tokio::sync::Mutex<()>,
    last_result: Mutex<Option<CompletionResult>>,
}

impl<P: CompletionProvider> OutlineSession<P> {
    /// Create a session with the interview-outline template and fixed
    /// generation parameters (3000 tokens, temperature 0.3).
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            template: PromptTemplate::INTERVIEW_OUTLINE,
            params: GenerationParams::default(),
            in_flight: tokio::sync::Mutex::new(()),
            last_result: Mutex::new(None),
        }
    }

    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Whether a generation is currently awaiting the provider.
    ///
    /// Presentation layers use this to disable the generate button.
    pub fn is_generating(&self) -> bool {
        self.in_flight.try_lock().is_err()
    }

    /// Generate an outline from raw form values
    ///
    /// # Errors
    ///
    /// - `GenerationInProgress` if another call is still running
    /// - `ConfigurationError` for a missing key, unknown model or bad URL;
    ///   no provider call is made
    /// - Any transport or provider error from the call itself
    ///
    /// On error the previously stored result is left untouched.
    pub async fn generate(&self, form: &OutlineForm) -> OutlineResult<CompletionResult> {
        let _guard = self
            .in_flight
            .try_lock()
            .map_err(|_| OutlineError::generation_in_progress())?;

        let input = form.parse()?;
        self.execute(&input.endpoint, &input.settings, &input.request)
            .await
    }

    /// Generate an outline from already-typed values
    ///
    /// Same contract as [`generate`](Self::generate).
    pub async fn generate_with(
        &self,
        settings: &ConnectionSettings,
        request: &InterviewRequest,
    ) -> OutlineResult<CompletionResult> {
        let _guard = self
            .in_flight
            .try_lock()
            .map_err(|_| OutlineError::generation_in_progress())?;

        let endpoint = settings.validate()?;
        self.execute(&endpoint, settings, request).await
    }

    async fn execute(
        &self,
        endpoint: &Url,
        settings: &ConnectionSettings,
        request: &InterviewRequest,
    ) -> OutlineResult<CompletionResult> {
        self.params.validate()?;

        let model_id = request.model_id.as_str();
        let messages = build_messages(&self.template, request);

        log_debug!(
            provider = self.provider.provider_name(),
            model = model_id,
            endpoint = %endpoint,
            user_prompt_chars = messages[1].content.chars().count(),
            "Generating interview outline"
        );

        let result = self
            .provider
            .generate(
                endpoint,
                &settings.api_key,
                model_id,
                &messages,
                &self.params,
            )
            .await?;

        let check = OutlineCheck::inspect(&result.text);
        if !check.is_complete() {
            log_warn!(
                missing_sections = ?check.missing_sections,
                "Generated outline is missing required sections"
            );
        }

        log_info!(
            model = model_id,
            output_chars = result.text.chars().count(),
            placeholder_count = check.placeholder_count,
            "Interview outline generated"
        );

        *self
            .last_result
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(result.clone());

        Ok(result)
    }

    /// The most recent successful outline, if any
    pub fn last_result(&self) -> Option<CompletionResult> {
        self.last_result
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The `outline.md` download for the most recent outline, if any
    pub fn last_export(&self) -> Option<MarkdownExport> {
        self.last_result().as_ref().map(MarkdownExport::from_result)
    }

    /// Write the most recent outline to `dir/outline.md`
    ///
    /// Returns `Ok(None)` when nothing has been generated yet.
    pub async fn export_last(&self, dir: impl AsRef<Path>) -> OutlineResult<Option<PathBuf>> {
        match self.last_export() {
            Some(export) => export.write_to_dir(dir).await.map(Some),
            None => Ok(None),
        }
    }
}
