pub mod ranking;
pub mod stats;
pub mod streak;
pub mod video;
