//! Game session state machine
//!
//! Input arrives as [`GameEvent`]s, output leaves as [`Notification`]s and
//! [`Request`]s. The session itself is synchronous and I/O free.

mod driver;
mod event;
mod session;
#[cfg(test)]
mod test_support;

pub use driver::Driver;
pub use event::{GameEvent, GameId, IllegalInput, Notification, Request, ScoredCell, Step};
pub use session::{CellView, GameSession, GameStatus, Outcome, Phase, ScoredRow};
