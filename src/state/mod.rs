pub mod progress;
pub mod stats;

pub use progress::{BarProgress, NoProgress, ProgressObserver};
pub use stats::TranslationStats;
