//! Raw form input and its validation
//!
//! [`OutlineForm`] carries the strings a presentation layer collects, before
//! any parsing. Turning it into typed values is the only place where input is
//! rejected: API key presence, model identifier and base URL.

use crate::config::{ConnectionSettings, ModelId, DEFAULT_BASE_URL};
use crate::error::{OutlineError, OutlineResult};
use crate::prompt::InterviewRequest;
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Values of every form widget, as entered
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineForm {
    #[serde(skip_serializing, default)]
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub subject_name: String,
    pub subject_role: String,
    pub topic: String,
    pub goal: String,
    pub audience: String,
}

/// A form that passed validation, ready for one provider call
#[derive(Debug, Clone)]
pub struct GenerationInput {
    pub settings: ConnectionSettings,
    pub endpoint: Url,
    pub request: InterviewRequest,
}

impl OutlineForm {
    /// Validate the form
    ///
    /// # Errors
    ///
    /// Returns [`OutlineError::ConfigurationError`] if the API key is missing,
    /// the model is not one of [`ModelId::ALL`], or the base URL is invalid.
    /// The five interview fields are accepted as-is, empty or not.
    pub fn parse(&self) -> OutlineResult<GenerationInput> {
        if self.api_key.trim().is_empty() {
            return Err(OutlineError::configuration_error(
                "Please enter your DeepSeek API key first",
            ));
        }

        let model = self.model.parse::<ModelId>()?;
        let settings = ConnectionSettings::new(self.api_key.clone(), self.base_url.clone());
        let endpoint = settings.validate()?;

        let request = InterviewRequest::new(
            self.subject_name.clone(),
            self.subject_role.clone(),
            self.topic.clone(),
            self.goal.clone(),
            self.audience.clone(),
            model,
        );

        Ok(GenerationInput {
            settings,
            endpoint,
            request,
        })
    }
}

impl Default for OutlineForm {
    /// The form as first shown: sample interview, empty key.
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: ModelId::default().as_str().to_string(),
            subject_name: "张三".to_string(),
            subject_role: "店东".to_string(),
            topic: "团队管理".to_string(),
            goal: "半年内从8人扩到20人且流失率<10%".to_string(),
            audience: "商圈经理/课程研发".to_string(),
        }
    }
}

impl std::fmt::Debug for OutlineForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineForm")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("subject_name", &self.subject_name)
            .field("subject_role", &self.subject_role)
            .field("topic", &self.topic)
            .field("goal", &self.goal)
            .field("audience", &self.audience)
            .finish()
    }
}
