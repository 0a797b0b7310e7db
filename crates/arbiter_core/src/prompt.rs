//! The prompt abstraction consumed by model adapters.

use crate::{ContentType, PromptPart};
use serde::{Deserialize, Serialize};

/// An ordered sequence of typed prompt parts.
///
/// # Examples
///
/// ```
/// use arbiter_core::{ContentType, Prompt, PromptPart};
///
/// let prompt = Prompt::from_string("Is the sky blue? A) yes B) no");
/// assert_eq!(prompt.parts().len(), 1);
/// assert!(prompt.is_text_only());
///
/// let mixed = Prompt::new(vec![
///     PromptPart::text("Describe this image:"),
///     PromptPart::new(ContentType::Image, "aGVsbG8="),
/// ]);
/// assert!(!mixed.is_text_only());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Prompt {
    parts: Vec<PromptPart>,
}

impl Prompt {
    /// Create a prompt from an ordered list of parts.
    pub fn new(parts: Vec<PromptPart>) -> Self {
        Self { parts }
    }

    /// Create a prompt holding a single text part.
    pub fn from_string(text: impl Into<String>) -> Self {
        Self {
            parts: vec![PromptPart::text(text)],
        }
    }

    /// The ordered parts of this prompt.
    pub fn parts(&self) -> &[PromptPart] {
        &self.parts
    }

    /// True when every part is plain text.
    pub fn is_text_only(&self) -> bool {
        self.parts
            .iter()
            .all(|part| part.content_type == ContentType::Text)
    }
}

impl From<&str> for Prompt {
    fn from(text: &str) -> Self {
        Self::from_string(text)
    }
}

impl From<String> for Prompt {
    fn from(text: String) -> Self {
        Self::from_string(text)
    }
}
