//! Test utilities for model adapter tests.
//!
//! Provides a scripted stand-in for the Mistral HTTP client so adapter
//! behavior can be verified without network access.

use arbiter_error::{ModelError, ModelErrorKind};
use arbiter_models::{
    ChatApi, ChatChoice, ChatCompletionRequest, ChatCompletionResponse, MistralMessage,
    MistralRole,
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return success with the given text
    Success(String),
    /// Always return the specified error
    Error(ModelErrorKind),
    /// Fail N times with the error, then succeed with the text
    FailThenSucceed {
        fail_count: usize,
        error: ModelErrorKind,
        success_text: String,
    },
    /// Return a sequence of responses (errors or success)
    Sequence(Vec<MockResponse>),
}

/// A single mock response (success or error).
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    Error(ModelErrorKind),
}

/// Scripted chat client for testing.
///
/// Records every request it receives so tests can assert on the exact wire
/// payload the adapter built. Clones share call counts and the captured
/// request, so tests keep a handle after moving a clone into the adapter.
#[derive(Clone)]
pub struct MockChatApi {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
    last_request: Arc<Mutex<Option<ChatCompletionRequest>>>,
}

impl MockChatApi {
    /// Create a mock client that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(text.into()))
    }

    /// Create a mock client that always fails with the given error.
    pub fn new_error(error: ModelErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    /// Create a mock client that fails N times, then succeeds.
    ///
    /// Useful for testing retry behavior.
    pub fn new_fail_then_succeed(
        fail_count: usize,
        error: ModelErrorKind,
        success_text: impl Into<String>,
    ) -> Self {
        Self::new_with_behavior(MockBehavior::FailThenSucceed {
            fail_count,
            error,
            success_text: success_text.into(),
        })
    }

    /// Create a mock client with a sequence of responses.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self::new_with_behavior(MockBehavior::Sequence(responses))
    }

    /// Create a mock client with custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(Mutex::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Number of chat calls received, across both execution paths.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// The most recent request received, if any.
    pub fn last_request(&self) -> Option<ChatCompletionRequest> {
        self.last_request.lock().unwrap().clone()
    }

    fn assistant_reply(text: &str) -> ChatCompletionResponse {
        let message = MistralMessage::builder()
            .role(MistralRole::Assistant)
            .content(text)
            .build()
            .expect("Failed to build mock message");
        let choice = ChatChoice::builder()
            .message(message)
            .build()
            .expect("Failed to build mock choice");
        ChatCompletionResponse::builder()
            .choices(vec![choice])
            .build()
            .expect("Failed to build mock response")
    }

    /// Record the request and produce the next scripted response.
    fn next_response(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ModelError> {
        *self.last_request.lock().unwrap() = Some(request.clone());

        let mut count = self.call_count.lock().unwrap();
        let current_count = *count;
        *count += 1;

        match &self.behavior {
            MockBehavior::Success(text) => Ok(Self::assistant_reply(text)),
            MockBehavior::Error(kind) => Err(ModelError::new(kind.clone())),
            MockBehavior::FailThenSucceed {
                fail_count,
                error,
                success_text,
            } => {
                if current_count < *fail_count {
                    Err(ModelError::new(error.clone()))
                } else {
                    Ok(Self::assistant_reply(success_text))
                }
            }
            MockBehavior::Sequence(responses) => match responses.get(current_count) {
                Some(MockResponse::Success(text)) => Ok(Self::assistant_reply(text)),
                Some(MockResponse::Error(kind)) => Err(ModelError::new(kind.clone())),
                None => Err(ModelError::new(ModelErrorKind::Parse(format!(
                    "Mock sequence exhausted (call {} beyond {} responses)",
                    current_count + 1,
                    responses.len()
                )))),
            },
        }
    }
}

#[async_trait]
impl ChatApi for MockChatApi {
    async fn chat(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ModelError> {
        // Small delay to simulate network latency (but keep it minimal for fast tests)
        tokio::time::sleep(tokio::time::Duration::from_millis(1)).await;
        self.next_response(request)
    }

    fn chat_blocking(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ModelError> {
        self.next_response(request)
    }
}
