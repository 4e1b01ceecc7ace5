use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use threadline::compiler::context::ConversationContext;
use threadline::compiler::Compiler;
use threadline::models::log::ConversationLog;
use threadline::models::message::ConversationMessage;
use tokio::sync::RwLock;

use crate::configuration::CompilerSettings;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub compiler: Arc<Compiler>,
    pub compiler_settings: Arc<CompilerSettings>,
    pub conversations: Arc<RwLock<HashMap<String, ConversationLog>>>,
}

impl AppState {
    pub fn new(compiler_settings: CompilerSettings) -> Self {
        Self {
            compiler: Arc::new(Compiler::new()),
            compiler_settings: Arc::new(compiler_settings),
            conversations: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Compile context for one conversation, optionally overriding the configured budget
    pub fn context<'a>(&'a self, conversation_id: &'a str, budget: Option<i64>) -> StoreContext<'a> {
        StoreContext {
            state: self,
            conversation_id,
            budget,
        }
    }
}

/// Reads a conversation out of the in-memory store
pub struct StoreContext<'a> {
    state: &'a AppState,
    conversation_id: &'a str,
    budget: Option<i64>,
}

#[async_trait]
impl ConversationContext for StoreContext<'_> {
    async fn log(&self) -> Result<Vec<ConversationMessage>> {
        let conversations = self.state.conversations.read().await;
        Ok(conversations
            .get(self.conversation_id)
            .map(ConversationLog::snapshot)
            .unwrap_or_default())
    }

    async fn budget(&self) -> Result<i64> {
        Ok(self
            .budget
            .unwrap_or(self.state.compiler_settings.budget))
    }

    async fn provider_variant(&self) -> Result<String> {
        Ok(self.state.compiler_settings.provider.clone())
    }
}
