//! Compiles a conversation log into the items of a chat-completion request
//!
//! A compile runs three stages over one snapshot of the log:
//! - [`window::select_window`] keeps the most recent turns allowed by the budget, oldest first
//! - [`recency::find_latest_user_id`] finds the one user turn allowed to resend images,
//!   looking at the whole log rather than the window
//! - [`mapper::map_items`] turns each windowed turn into at most one request item
//!
//! Nothing is kept between calls, so one [`Compiler`] can serve any number of
//! conversations concurrently.
pub mod budget;
pub mod context;
pub mod ids;
pub mod mapper;
pub mod recency;
pub mod window;

use tracing::debug;

use crate::errors::{CompileError, CompileResult};
use crate::models::item::RequestItem;
use crate::models::message::ConversationMessage;
use crate::providers::capabilities::ProviderVariant;
use budget::Budget;
use context::ConversationContext;
use ids::{CallIdGenerator, TimestampCallIds};

pub struct Compiler {
    call_ids: Box<dyn CallIdGenerator>,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler {
    pub fn new() -> Self {
        Self::with_call_ids(TimestampCallIds)
    }

    /// Use a custom generator for tool results stored without a call id
    pub fn with_call_ids<G: CallIdGenerator + 'static>(call_ids: G) -> Self {
        Self {
            call_ids: Box::new(call_ids),
        }
    }

    /// Read the context once and compile it
    ///
    /// A bad budget fails the call before the log is read. Accessor failures are returned
    /// as [`CompileError::Context`]; no items are produced in either case.
    pub async fn compile<C>(&self, context: &C) -> CompileResult<Vec<RequestItem>>
    where
        C: ConversationContext + ?Sized,
    {
        let budget = context.budget().await.map_err(CompileError::Context)?;
        let budget = Budget::try_from(budget)?;
        let variant = context
            .provider_variant()
            .await
            .map_err(CompileError::Context)?;
        let log = context.log().await.map_err(CompileError::Context)?;

        Ok(self.compile_snapshot(&log, budget, &ProviderVariant::parse(&variant)))
    }

    /// Compile an already captured most-recent-first log
    pub fn compile_snapshot(
        &self,
        log: &[ConversationMessage],
        budget: Budget,
        variant: &ProviderVariant,
    ) -> Vec<RequestItem> {
        let window = window::select_window(log, budget);
        let latest_user_id = recency::find_latest_user_id(log);
        let capabilities = variant.capabilities();

        debug!(
            log_len = log.len(),
            window_len = window.len(),
            latest_user_id = ?latest_user_id,
            provider = variant.as_str(),
            tool_echo = capabilities.tool_echo,
            "compiling conversation"
        );

        mapper::map_items(
            &window,
            latest_user_id,
            capabilities.tool_echo,
            self.call_ids.as_ref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConfigurationError;
    use crate::models::item::{InboundPart, OutboundPart};
    use context::{MockConversationContext, StaticContext};
    use serde_json::json;

    fn conversation() -> Vec<ConversationMessage> {
        vec![
            ConversationMessage::assistant().with_text("Hello!"),
            ConversationMessage::user().with_text("Show me a cat"),
        ]
    }

    #[tokio::test]
    async fn test_compile_reads_each_accessor_once() -> anyhow::Result<()> {
        let mut context = MockConversationContext::new();
        context.expect_budget().times(1).returning(|| Ok(50));
        context
            .expect_provider_variant()
            .times(1)
            .returning(|| Ok("openai".to_string()));
        context
            .expect_log()
            .times(1)
            .returning(|| Ok(conversation()));

        let items = Compiler::new().compile(&context).await?;
        assert_eq!(items.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_negative_budget_fails_before_reading_log() {
        let mut context = MockConversationContext::new();
        context.expect_budget().times(1).returning(|| Ok(-1));
        context.expect_provider_variant().times(0);
        context.expect_log().times(0);

        let err = Compiler::new().compile(&context).await.unwrap_err();
        assert!(matches!(
            err,
            CompileError::Configuration(ConfigurationError::NegativeBudget(_))
        ));
    }

    #[tokio::test]
    async fn test_accessor_failure_produces_no_items() {
        let mut context = MockConversationContext::new();
        context.expect_budget().returning(|| Ok(10));
        context
            .expect_provider_variant()
            .returning(|| Ok("openai".to_string()));
        context
            .expect_log()
            .returning(|| Err(anyhow::anyhow!("store offline")));

        let err = Compiler::new().compile(&context).await.unwrap_err();
        assert!(matches!(err, CompileError::Context(_)));
        assert!(err.to_string().contains("store offline"));
    }

    #[tokio::test]
    async fn test_compile_static_context() -> anyhow::Result<()> {
        let context = StaticContext::new(conversation(), 50, "openai");
        let items = Compiler::new().compile(&context).await?;

        let user = items[0].as_message().unwrap();
        assert_eq!(
            user.content().as_inbound(),
            Some(&[InboundPart::text("Show me a cat")][..])
        );
        let assistant = items[1].as_message().unwrap();
        assert_eq!(
            assistant.content().as_outbound(),
            Some(&[OutboundPart::text("Hello!")][..])
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_compile_as_trait_object() -> anyhow::Result<()> {
        let context: Box<dyn ConversationContext> =
            Box::new(StaticContext::new(conversation(), 1, "openai"));
        let items = Compiler::new().compile(context.as_ref()).await?;
        assert_eq!(items.len(), 1);
        Ok(())
    }

    #[test]
    fn test_tool_echo_follows_provider_variant() {
        let log = vec![ConversationMessage::assistant()
            .with_text("")
            .with_tool_calls(json!([{"id": "call_1"}]))];
        let compiler = Compiler::new();

        let items = compiler.compile_snapshot(&log, Budget::new(5), &ProviderVariant::Ollama);
        assert!(items[0].as_message().unwrap().tool_calls().is_some());

        let items = compiler.compile_snapshot(&log, Budget::new(5), &ProviderVariant::OpenAi);
        assert!(items[0].as_message().unwrap().tool_calls().is_none());
    }

    #[test]
    fn test_injected_call_ids() {
        let log = vec![ConversationMessage::new(crate::models::role::Role::Tool, "done")];
        let compiler = Compiler::with_call_ids(|| "call_pinned".to_string());
        let items = compiler.compile_snapshot(&log, Budget::new(1), &ProviderVariant::OpenAi);
        assert_eq!(items[0].as_tool_output().unwrap().call_id, "call_pinned");
    }
}
