use crate::monitor::best_effort_read::BestEffortReader;
use crate::monitor::monitor_reporter::MonitorReporter;
use crate::monitor::monitor_state::MonitorState;
use crate::monitor::shared_output::SharedOutput;
use std::sync::Arc;
use std::time::Duration;
use tokio::process::Child;
use tokio::select;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorExit {
    WorkerExited,
    Canceled,
}

/// Watches a running crawl worker, republishing the shared output as a live
/// view on every poll tick. The view is recomputed from the file each time;
/// nothing is carried between ticks.
pub struct ProgressMonitor<TP>
where
    TP: MonitorReporter,
{
    output: SharedOutput,
    poll_interval: Duration,
    reporter: TP,
}

impl<TP> ProgressMonitor<TP>
where
    TP: MonitorReporter,
{
    pub fn new(output: SharedOutput, poll_interval: Duration, reporter: TP) -> Self {
        Self {
            output,
            poll_interval,
            reporter,
        }
    }

    /// Runs until the worker exits or shutdown is requested. On shutdown the
    /// worker is terminated; either way the caller owns the finalize step.
    pub async fn watch(
        &self,
        worker: &mut Child,
        shutdown_notify: Arc<tokio::sync::Notify>,
    ) -> MonitorExit {
        self.reporter.state_changed(MonitorState::Running);

        let mut reader = BestEffortReader::new();
        let mut ticker = tokio::time::interval(self.poll_interval);
        let exit = loop {
            select! {
                _ = worker.wait() => {
                    break MonitorExit::WorkerExited;
                }
                _ = ticker.tick() => {
                    self.publish_tick(&mut reader);
                }
                _ = shutdown_notify.notified() => {
                    break MonitorExit::Canceled;
                }
            }
        };

        if exit == MonitorExit::Canceled {
            info!("cancellation requested, terminating crawl worker");
            if let Err(e) = worker.kill().await {
                warn!(error = %e, "failed to kill crawl worker");
            }
        }

        self.reporter.state_changed(MonitorState::Draining);
        exit
    }

    fn publish_tick(&self, reader: &mut BestEffortReader) {
        if let Some(records) = reader.read(&self.output) {
            let view = records
                .into_iter()
                .map(|record| (record.url, record.status))
                .collect();
            self.reporter.live_view(view);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tempfile::tempdir;
    use url::Url;

    #[derive(Default)]
    struct RecordingReporter {
        views: RefCell<Vec<Vec<(String, u16)>>>,
        states: RefCell<Vec<MonitorState>>,
    }

    impl MonitorReporter for RecordingReporter {
        fn begin(&self, _seed: &Url) {}

        fn live_view(&self, records: Vec<(String, u16)>) {
            self.views.borrow_mut().push(records);
        }

        fn state_changed(&self, state: MonitorState) {
            self.states.borrow_mut().push(state);
        }

        fn end(&self) {}
    }

    fn monitor(output: SharedOutput) -> ProgressMonitor<RecordingReporter> {
        ProgressMonitor::new(output, Duration::from_secs(3), RecordingReporter::default())
    }

    #[test]
    fn tick_publishes_the_full_projection() {
        let dir = tempdir().unwrap();
        let output = SharedOutput::create_in(dir.path()).unwrap();
        std::fs::write(
            output.path(),
            "{\"url\":\"https://example.test/\",\"status\":200}\n\
             {\"url\":\"https://example.test/gone\",\"status\":404}\n\
             {\"url\":\"https://example.test/par",
        )
        .unwrap();

        let monitor = monitor(output);
        let mut reader = BestEffortReader::new();
        monitor.publish_tick(&mut reader);

        let views = monitor.reporter.views.borrow();
        assert_eq!(views.len(), 1);
        assert_eq!(
            views[0],
            vec![
                ("https://example.test/".to_owned(), 200),
                ("https://example.test/gone".to_owned(), 404),
            ]
        );
    }

    #[test]
    fn unreadable_output_publishes_nothing_and_retries_later() {
        let dir = tempdir().unwrap();
        let output = SharedOutput::attach(dir.path().join("not-yet.jsonl"));

        let monitor = monitor(output.clone());
        let mut reader = BestEffortReader::new();
        monitor.publish_tick(&mut reader);
        assert!(monitor.reporter.views.borrow().is_empty());

        std::fs::write(output.path(), "{\"url\":\"https://example.test/\",\"status\":200}\n")
            .unwrap();
        monitor.publish_tick(&mut reader);
        assert_eq!(monitor.reporter.views.borrow().len(), 1);
    }
}
