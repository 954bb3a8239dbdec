use std::io::IsTerminal;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use indicatif::{ProgressBar, ProgressStyle};

/// Counting progress bar on stderr.
///
/// Hidden in quiet mode or when stderr is not a terminal. Clones share one
/// counter, so rayon workers can each hold a handle.
#[derive(Clone)]
pub struct ScanProgress {
    progress_bar: ProgressBar,
    counted: Arc<AtomicU64>,
}

impl ScanProgress {
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let visible = !quiet && std::io::stderr().is_terminal();
        let progress_bar = if visible {
            Self::counting_bar(total)
        } else {
            ProgressBar::hidden()
        };

        Self {
            progress_bar,
            counted: Arc::new(AtomicU64::new(0)),
        }
    }

    fn counting_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} Counting [{bar:40.cyan/blue}] {pos}/{len} files ({eta})")
        {
            pb.set_style(style.progress_chars("█▓░"));
        }
        pb
    }

    /// Record one finished file.
    pub fn inc(&self) {
        let count = self.counted.fetch_add(1, Ordering::Relaxed) + 1;
        self.progress_bar.set_position(count);
    }

    #[must_use]
    pub fn counted(&self) -> u64 {
        self.counted.load(Ordering::Relaxed)
    }

    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
