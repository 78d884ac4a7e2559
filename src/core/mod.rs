pub mod clock;
pub mod controller;
pub mod duration;
pub mod log;
pub mod notice;
pub mod stats;
pub mod tracker;

pub use clock::Clock;
pub use controller::BreakController;
pub use notice::{Notice, Severity};
pub use tracker::{BreakEvent, TrackerState};
