pub mod daily_pick;
pub mod identifiers;

pub use daily_pick::{DailyPick, SelectionError};
pub use identifiers::{DateKey, ListFingerprint};
