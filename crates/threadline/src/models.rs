//! These models represent the objects the compiler reads and produces
//!
//! There are two related formats we need to interact with:
//! - the conversation log, as persisted by the application store (most recent first)
//! - request items, as sent to a chat-completion provider (oldest first)
//!
//! The log side is deliberately permissive: optional fields may be missing and unknown
//! content parts are tolerated. The request side is strict: every item is built through
//! constructors that keep the inbound/outbound part vocabulary separate.
pub mod content;
pub mod item;
pub mod log;
pub mod message;
pub mod role;
