// autorip-cli/src/progress.rs
//
// Terminal progress reporting driven by makemkvcon telemetry lines. PRGT
// and PRGC name the task and sub-task, PRGV carries the bar values, and MSG
// lines are routed to the logger.

use autorip_core::Line;
use indicatif::{ProgressBar, ProgressStyle};

/// An indicatif progress bar fed from the observer callback of a core
/// operation.
pub struct ProgressView {
    bar: ProgressBar,
}

impl ProgressView {
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::with_template("{msg:.cyan} {wide_bar} {percent:>3}%")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        ProgressView { bar }
    }

    /// Routes one output line into the bar or the logger.
    pub fn observe(&self, line: &Line) {
        match line {
            Line::CurrentTask(task) => self.bar.set_message(task.name.clone()),
            Line::CurrentSubtask(task) => {
                self.bar.println(format!("  {}", task.name));
            }
            Line::ProgressBar(progress) => {
                self.bar.set_length(progress.max as u64);
                self.bar.set_position(progress.total.max(0) as u64);
            }
            Line::Message(message) => log::debug!("makemkv: {}", message.text),
            _ => {}
        }
    }

    /// Clears the bar from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for ProgressView {
    fn default() -> Self {
        Self::new()
    }
}
