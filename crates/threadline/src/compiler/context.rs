use anyhow::Result;
use async_trait::async_trait;

use crate::models::message::ConversationMessage;

/// Read-only accessors a compile call draws its inputs from
///
/// Each accessor is called exactly once per compile. Implementations backed by a
/// shared store should hand out an owned snapshot from [`ConversationContext::log`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConversationContext: Send + Sync {
    /// The conversation, most recent turn first
    async fn log(&self) -> Result<Vec<ConversationMessage>>;

    /// Maximum number of turns to send
    async fn budget(&self) -> Result<i64>;

    /// Configured provider variant name
    async fn provider_variant(&self) -> Result<String>;
}

/// A context over values already in memory
#[derive(Debug, Clone, Default)]
pub struct StaticContext {
    log: Vec<ConversationMessage>,
    budget: i64,
    provider_variant: String,
}

impl StaticContext {
    pub fn new<S: Into<String>>(
        log: Vec<ConversationMessage>,
        budget: i64,
        provider_variant: S,
    ) -> Self {
        Self {
            log,
            budget,
            provider_variant: provider_variant.into(),
        }
    }
}

#[async_trait]
impl ConversationContext for StaticContext {
    async fn log(&self) -> Result<Vec<ConversationMessage>> {
        Ok(self.log.clone())
    }

    async fn budget(&self) -> Result<i64> {
        Ok(self.budget)
    }

    async fn provider_variant(&self) -> Result<String> {
        Ok(self.provider_variant.clone())
    }
}
