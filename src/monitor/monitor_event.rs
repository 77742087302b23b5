use crate::monitor::monitor_state::MonitorState;
use url::Url;

#[derive(Debug, Clone)]
pub enum MonitorEvent {
    Begin {
        seed: Url,
    },
    /// Full replacement of the live view: every (URL, status) pair parsed
    /// from the shared output so far.
    LiveView {
        records: Vec<(String, u16)>,
    },
    StateChanged {
        state: MonitorState,
    },
    End,
}
