mod misc;
pub mod params;
pub mod payload;

pub use misc::OrStatus;
