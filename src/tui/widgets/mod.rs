pub mod duration;
pub mod progress;
pub mod session;
