//! Loading indicator shown while a scan is in flight

use std::future::Future;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

use crate::session::CoalescingScheduler;

/// How often the elapsed-time counter fires
const TICK_INTERVAL: Duration = Duration::from_millis(5);

/// Minimum time between spinner redraws
const REDRAW_FRAME: Duration = Duration::from_millis(80);

/// Drive `fut` to completion behind a spinner on stderr.
///
/// The ticker fires far more often than the terminal needs; redraws go
/// through a [`CoalescingScheduler`] so at most one is pending per frame. The
/// spinner is cleared whatever the outcome.
pub async fn with_spinner<F: Future>(label: String, fut: F) -> F::Output {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(label.clone());

    let scheduler = CoalescingScheduler::new(REDRAW_FRAME);
    let started = Instant::now();
    let mut ticks = tokio::time::interval(TICK_INTERVAL);

    tokio::pin!(fut);
    let output = loop {
        tokio::select! {
            output = &mut fut => break output,
            _ = ticks.tick() => {
                let spinner = spinner.clone();
                let label = label.clone();
                let elapsed = started.elapsed();
                scheduler.schedule(move || {
                    spinner.set_message(format!("{} ({}s)", label, elapsed.as_secs()));
                    spinner.tick();
                });
            }
        }
    };

    spinner.finish_and_clear();
    output
}
