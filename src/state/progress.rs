use indicatif::{ProgressBar, ProgressStyle};

/// Receives one notification per finished chunk, successful or not.
pub trait ProgressObserver: Send {
    fn started(&mut self, _total: usize) {}

    /// `processed` is the cumulative item count across all finished chunks.
    fn chunk_completed(&mut self, processed: usize, total: usize, succeeded: bool);

    fn finished(&mut self) {}
}

#[derive(Debug, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn chunk_completed(&mut self, _processed: usize, _total: usize, _succeeded: bool) {}
}

/// Terminal progress bar.
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new() -> Self {
        let style = ProgressStyle::with_template(
            "Translating |{bar:40.cyan/blue}| {percent}% | {pos}/{len} strings | ETA: {eta}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("\u{2588}\u{2591} ");

        let bar = ProgressBar::new(0);
        bar.set_style(style);
        Self { bar }
    }
}

impl Default for BarProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for BarProgress {
    fn started(&mut self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(0);
    }

    fn chunk_completed(&mut self, processed: usize, _total: usize, _succeeded: bool) {
        self.bar.set_position(processed as u64);
    }

    fn finished(&mut self) {
        self.bar.finish();
    }
}
