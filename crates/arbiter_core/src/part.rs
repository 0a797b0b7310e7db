//! Typed prompt parts.

use serde::{Deserialize, Serialize};

/// Content-type tag for a prompt part.
///
/// Evaluation prompts are ordered sequences of typed parts. Text-only
/// providers accept `Text` parts and reject everything else before any
/// network call is made.
///
/// # Examples
///
/// ```
/// use arbiter_core::ContentType;
///
/// assert_eq!(format!("{}", ContentType::Text), "text");
/// assert_ne!(ContentType::Text, ContentType::Image);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Plain text content
    #[display("text")]
    Text,
    /// Image content (base64 or URL payload)
    #[display("image")]
    Image,
    /// Audio content (base64 or URL payload)
    #[display("audio")]
    Audio,
}

/// One part of a multimodal prompt.
///
/// # Examples
///
/// ```
/// use arbiter_core::{ContentType, PromptPart};
///
/// let part = PromptPart::text("Is the sky blue? A) yes B) no");
/// assert_eq!(part.content_type, ContentType::Text);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptPart {
    /// The content-type tag of this part
    pub content_type: ContentType,
    /// The content payload
    pub content: String,
}

impl PromptPart {
    /// Create a new part with an explicit content type.
    pub fn new(content_type: ContentType, content: impl Into<String>) -> Self {
        Self {
            content_type,
            content: content.into(),
        }
    }

    /// Create a text part.
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(ContentType::Text, content)
    }
}
