//! Boundary to the external text-completion service

pub mod client;
pub mod prompts;

pub use client::{GenerationError, OllamaClient, TextGenerator};
pub use prompts::PromptTemplates;
