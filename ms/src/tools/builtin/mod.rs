//! Built-in tool implementations

mod add;
mod get_config;
mod get_prompt;
mod get_prompt_by_category;
mod list_languages;
mod list_prompts;

pub use add::AddTool;
pub use get_config::GetConfigTool;
pub use get_prompt::GetPromptTool;
pub use get_prompt_by_category::{DEFAULT_LANGUAGE, GetPromptByCategoryTool};
pub use list_languages::ListLanguagesTool;
pub use list_prompts::ListPromptsTool;
