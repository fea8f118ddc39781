pub mod format;
pub mod session;
pub mod ticker;
pub mod widget;

pub use session::{Durations, Phase};
pub use ticker::Ticker;
pub use widget::{Action, TimerWidget};
