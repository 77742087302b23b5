use crate::monitor::monitor_state::MonitorState;
use url::Url;

pub trait MonitorReporter {
    fn begin(&self, seed: &Url);
    fn live_view(&self, records: Vec<(String, u16)>);
    fn state_changed(&self, state: MonitorState);
    fn end(&self);
}
