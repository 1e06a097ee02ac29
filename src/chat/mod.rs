//! Chat assistant support
//!
//! Builds the financial context and prompts for a chat assistant. The
//! provider call is not part of this crate.

pub mod context;
pub mod session;

pub use context::{compose_prompt, FinancialContext};
pub use session::{ChatMessage, ChatSession, Role};
