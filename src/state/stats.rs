use serde::Serialize;
use std::time::Duration;

/// Counters for one run. Updated once per completed chunk.
#[derive(Debug, Clone, Serialize)]
pub struct TranslationStats {
    pub total: usize,
    pub success_count: usize,
    pub error_count: usize,
    pub provider_label: String,
    pub duration: Duration,
}

impl TranslationStats {
    pub fn new(total: usize, provider_label: impl Into<String>) -> Self {
        Self {
            total,
            success_count: 0,
            error_count: 0,
            provider_label: provider_label.into(),
            duration: Duration::ZERO,
        }
    }

    pub fn record_success(&mut self, items: usize) {
        self.success_count += items;
    }

    pub fn record_failure(&mut self, items: usize) {
        self.error_count += items;
    }

    pub fn finish(&mut self, duration: Duration) {
        self.duration = duration;
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration.as_secs_f64()
    }

    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.success_count as f64 / self.total as f64 * 100.0
        }
    }
}

impl std::fmt::Display for TranslationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Provider:   {}", self.provider_label)?;
        writeln!(f, "Total:      {}", self.total)?;
        writeln!(
            f,
            "Translated: {} ({:.1}%)",
            self.success_count,
            self.success_rate()
        )?;
        writeln!(f, "Failed:     {}", self.error_count)?;
        write!(f, "Duration:   {:.1}s", self.duration_seconds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_per_chunk() {
        let mut stats = TranslationStats::new(120, "GEMINI");
        stats.record_success(50);
        stats.record_failure(50);
        stats.record_success(20);

        assert_eq!(stats.success_count, 70);
        assert_eq!(stats.error_count, 50);
        assert_eq!(stats.success_count + stats.error_count, stats.total);
    }

    #[test]
    fn renders_summary() {
        let mut stats = TranslationStats::new(4, "OPENAI");
        stats.record_success(3);
        stats.record_failure(1);
        stats.finish(Duration::from_millis(2500));

        let text = stats.to_string();
        assert!(text.contains("Provider:   OPENAI"));
        assert!(text.contains("Translated: 3 (75.0%)"));
        assert!(text.contains("Duration:   2.5s"));
    }

    #[test]
    fn empty_run_has_zero_rate() {
        let stats = TranslationStats::new(0, "CLAUDE");
        assert_eq!(stats.success_rate(), 0.0);
    }
}
