pub mod session_context;
pub mod use_session;

pub use session_context::SessionContextProvider;
pub use use_session::{use_session, SessionState, UseSessionHandle};
