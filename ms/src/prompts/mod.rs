//! Prompt template system
//!
//! Prompt templates are named, parameterized generators that return a list
//! of messages for the client to send to its model. A catalog prompt whose
//! header declares `arguments: [{name: code}]` renders its body with
//! Handlebars and can use `{{code}}`; a prompt without arguments is sent as is.

mod catalog_prompt;
mod registry;

pub use catalog_prompt::CatalogPrompt;
pub use registry::PromptRegistry;

use std::collections::HashMap;

use crate::protocol::{PromptArgumentDescriptor, PromptMessage, ServerError};

/// A named prompt a client can list and fetch
pub trait PromptTemplate: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Arguments the template accepts
    fn arguments(&self) -> Vec<PromptArgumentDescriptor>;

    /// Render the messages; required arguments are checked by the registry
    fn render(&self, arguments: &HashMap<String, String>) -> Result<Vec<PromptMessage>, ServerError>;
}
