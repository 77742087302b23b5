mod best_effort_read;
mod channel_reporter;
mod crawl_result;
mod finalizer;
mod monitor_event;
mod monitor_reporter;
mod monitor_state;
mod progress_monitor;
mod shared_output;

pub use best_effort_read::BestEffortReader;
pub use channel_reporter::ChannelMonitorReporter;
pub use crawl_result::CrawlResult;
pub use finalizer::{CrawlOutcome, FinalizeError, ResultFinalizer};
pub use monitor_event::MonitorEvent;
pub use monitor_reporter::MonitorReporter;
pub use monitor_state::MonitorState;
pub use progress_monitor::{MonitorExit, ProgressMonitor};
pub use shared_output::{SharedOutput, SharedOutputSink};
