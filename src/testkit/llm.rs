//! Scripted LLM double.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::port::outbound::llm::Llm;

type ErrorFactory = Box<dyn Fn() -> Error + Send + Sync>;

enum Reply {
    Text(String),
    Fail(ErrorFactory),
}

/// [`Llm`] that returns the same scripted outcome for every call and
/// records each prompt it receives.
pub struct ScriptedLlm {
    reply: Reply,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedLlm {
    /// Always complete with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Reply::Text(text.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Always fail with the error built by `make_error`.
    pub fn failing<F>(make_error: F) -> Self
    where
        F: Fn() -> Error + Send + Sync + 'static,
    {
        Self {
            reply: Reply::Fail(Box::new(make_error)),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Number of completion calls made so far.
    pub fn calls(&self) -> usize {
        self.prompts.lock().len()
    }

    /// Prompt of the most recent call.
    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().last().cloned()
    }

    /// Every prompt received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl Llm for ScriptedLlm {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().push(prompt.to_string());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail(make_error) => Err(make_error()),
        }
    }
}
