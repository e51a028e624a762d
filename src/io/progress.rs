//! Progress display for loading images and composing the collage

use crate::io::configuration::{PROGRESS_BAR_WIDTH, SPINNER_TICK_MS};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static LOAD_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!("Loading [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg} [{elapsed}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Coordinates progress output for one collage run
///
/// A bar tracks image decoding; a spinner covers the composing and encoding
/// stages that have no natural unit of progress.
pub struct ProgressManager {
    load_bar: Option<ProgressBar>,
    stage: Option<ProgressBar>,
    hidden: bool,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager drawing to stderr
    pub const fn new() -> Self {
        Self {
            load_bar: None,
            stage: None,
            hidden: false,
        }
    }

    /// Create a manager that tracks state but draws nothing
    pub const fn hidden() -> Self {
        Self {
            load_bar: None,
            stage: None,
            hidden: true,
        }
    }

    fn make_bar(&self, len: u64) -> ProgressBar {
        if self.hidden {
            ProgressBar::with_draw_target(Some(len), ProgressDrawTarget::hidden())
        } else {
            ProgressBar::new(len)
        }
    }

    /// Start the loading bar for `file_count` inputs
    pub fn start_loading(&mut self, file_count: usize) {
        let bar = self.make_bar(file_count as u64);
        bar.set_style(LOAD_STYLE.clone());
        self.load_bar = Some(bar);
    }

    /// Record that `path` has been decoded
    pub fn image_loaded(&self, path: &Path) {
        if let Some(ref bar) = self.load_bar {
            let name = path.file_name().unwrap_or_default().to_string_lossy();
            bar.set_message(name.into_owned());
            bar.inc(1);
        }
    }

    /// Number of images reported as loaded so far
    pub fn loaded(&self) -> u64 {
        self.load_bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Close the loading bar and show a spinner for a named stage
    pub fn begin_stage(&mut self, message: &'static str) {
        if let Some(bar) = self.load_bar.take() {
            bar.finish_and_clear();
        }
        if let Some(previous) = self.stage.take() {
            previous.finish_and_clear();
        }

        let spinner = self.make_bar(0);
        spinner.set_style(STAGE_STYLE.clone());
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        self.stage = Some(spinner);
    }

    /// Message of the running stage, if any
    pub fn current_stage(&self) -> Option<String> {
        self.stage.as_ref().map(|s| s.message())
    }

    /// Clear every progress display
    pub fn finish(&mut self) {
        if let Some(bar) = self.load_bar.take() {
            bar.finish_and_clear();
        }
        if let Some(spinner) = self.stage.take() {
            spinner.finish_and_clear();
        }
    }
}
