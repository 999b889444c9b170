//! Station schedule input.
//!
//! Schedules arrive as per-day JSON lists of station train records. This
//! module deserializes them, converts them to domain entries and combines
//! the days a board needs.

mod convert;
mod error;
mod file;
mod station;
mod types;
mod window;

pub use convert::{ConversionError, combine_days, convert_schedule, convert_train};
pub use error::FeedError;
pub use file::FileFeed;
pub use station::StationKey;
pub use types::StationTrainDto;
pub use window::window_dates;
