//! PromptRegistry - holds the prompt templates a server exposes

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::protocol::{GetPromptResult, PromptDescriptor, ServerError};

use super::PromptTemplate;

/// Prompt templates keyed by name
pub struct PromptRegistry {
    prompts: BTreeMap<String, Box<dyn PromptTemplate>>,
}

impl PromptRegistry {
    pub fn new() -> Self {
        Self {
            prompts: BTreeMap::new(),
        }
    }

    /// Add a template, replacing any template with the same name
    pub fn add_prompt(&mut self, prompt: Box<dyn PromptTemplate>) {
        debug!(name = prompt.name(), "PromptRegistry::add_prompt: called");
        self.prompts.insert(prompt.name().to_string(), prompt);
    }

    /// Descriptors for prompts/list, ordered by name
    pub fn descriptors(&self) -> Vec<PromptDescriptor> {
        self.prompts
            .values()
            .map(|p| PromptDescriptor {
                name: p.name().to_string(),
                description: p.description().to_string(),
                arguments: p.arguments(),
            })
            .collect()
    }

    /// Render a template after checking its required arguments
    pub fn get(&self, name: &str, arguments: &HashMap<String, String>) -> Result<GetPromptResult, ServerError> {
        let prompt = self
            .prompts
            .get(name)
            .ok_or_else(|| ServerError::UnknownPrompt(name.to_string()))?;

        if let Some(missing) = prompt
            .arguments()
            .into_iter()
            .find(|a| a.required && !arguments.contains_key(&a.name))
        {
            return Err(ServerError::MissingArgument {
                prompt: name.to_string(),
                argument: missing.name,
            });
        }

        Ok(GetPromptResult {
            description: prompt.description().to_string(),
            messages: prompt.render(arguments)?,
        })
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

impl Default for PromptRegistry {
    fn default() -> Self {
        Self::new()
    }
}
