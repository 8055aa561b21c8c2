pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod session;
pub mod ui;
pub mod util;

pub use api::{ApiHealth, QueryResult, RagClient, ReasoningDepth};
pub use config::ChatConfig;
pub use error::{ChatError, Result};
pub use session::{ConversationSession, Message, Role, SessionId, new_session_id};
