// Session adapter and the component context that publishes its snapshots

pub mod adapter;
pub mod oidc;
pub mod provider;

pub use adapter::{BrowserSession, SessionAdapter};
pub use provider::{SessionContext, use_session, use_session_provider};
