//! Progress bar display for packaging

use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::ArtifactClass;

/// Progress over the artifact classes of one packaging run
pub struct ProgressDisplay {
    class_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a progress display over `total_classes` classes.
    ///
    /// A disabled display never draws anything.
    pub fn new(total_classes: u64, enabled: bool) -> Self {
        if !enabled {
            return Self {
                class_pb: ProgressBar::hidden(),
            };
        }

        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let class_pb = ProgressBar::new(total_classes);
        class_pb.set_style(style);

        Self { class_pb }
    }

    /// Show the class about to be copied
    pub fn start_class(&self, class: &ArtifactClass) {
        self.class_pb.set_message(class.to_string());
    }

    /// Run `f` with the bar cleared, so log lines written meanwhile stay readable
    pub fn suspend<T>(&self, f: impl FnOnce() -> T) -> T {
        self.class_pb.suspend(f)
    }

    pub fn inc_class(&self) {
        self.class_pb.inc(1);
    }

    pub fn finish(&self) {
        self.class_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.class_pb.abandon();
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.class_pb.position()
    }
}
