pub mod bible_reading;
pub mod rosary_prayer;
pub mod sin_entry;

pub use bible_reading::BibleReading;
pub use rosary_prayer::RosaryPrayer;
pub use sin_entry::{ConfessOutcome, SinEntry};
