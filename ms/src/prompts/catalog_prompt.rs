//! CatalogPrompt - a prompt template backed by one catalog entry

use std::collections::HashMap;

use handlebars::Handlebars;
use promptcatalog::LoadedPrompt;
use tracing::debug;

use crate::protocol::{PromptArgumentDescriptor, PromptMessage, ServerError};

use super::PromptTemplate;

/// Renders a catalog prompt's body as a single user message
pub struct CatalogPrompt {
    prompt: LoadedPrompt,
    hbs: Handlebars<'static>,
}

impl CatalogPrompt {
    pub fn new(prompt: LoadedPrompt) -> Self {
        let mut hbs = Handlebars::new();
        // Prompt text is not HTML
        hbs.register_escape_fn(handlebars::no_escape);
        Self { prompt, hbs }
    }
}

impl PromptTemplate for CatalogPrompt {
    fn name(&self) -> &str {
        self.prompt.name()
    }

    fn description(&self) -> &str {
        &self.prompt.metadata.description
    }

    fn arguments(&self) -> Vec<PromptArgumentDescriptor> {
        self.prompt
            .metadata
            .arguments
            .iter()
            .map(|a| PromptArgumentDescriptor {
                name: a.name.clone(),
                description: a.description.clone(),
                required: a.required,
            })
            .collect()
    }

    fn render(&self, arguments: &HashMap<String, String>) -> Result<Vec<PromptMessage>, ServerError> {
        debug!(name = self.name(), args = arguments.len(), "CatalogPrompt::render: called");

        // Only prompts that declare arguments are templates; other bodies are verbatim
        if self.prompt.metadata.arguments.is_empty() {
            return Ok(vec![PromptMessage::user(self.prompt.content.clone())]);
        }

        let text = self
            .hbs
            .render_template(&self.prompt.content, arguments)
            .map_err(|e| ServerError::Render {
                name: self.name().to_string(),
                message: e.to_string(),
            })?;

        Ok(vec![PromptMessage::user(text)])
    }
}
