use chrono::Utc;

/// Produces a call id for tool results stored without one
pub trait CallIdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// `call_<unix millis>`, the id the application has always synthesized
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampCallIds;

impl CallIdGenerator for TimestampCallIds {
    fn next_id(&self) -> String {
        format!("call_{}", Utc::now().timestamp_millis())
    }
}

impl<F> CallIdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn next_id(&self) -> String {
        self()
    }
}
