#![forbid(unsafe_code)]

pub mod error;
pub mod flow;
pub mod session;
pub mod timer;

pub use error::SessionError;
pub use flow::{Answer, CardFace, CardFlow, FlowPhase};
pub use session::{SessionController, SessionStats};
pub use timer::{DEFAULT_FLIP_DELAY, FlipTicket, FlipTimer};
