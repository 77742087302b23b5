use crate::monitor::monitor_event::MonitorEvent;
use crate::monitor::monitor_reporter::MonitorReporter;
use crate::monitor::monitor_state::MonitorState;
use url::Url;

/// Forwards monitor callbacks onto an event channel, typically consumed by
/// the console view.
#[derive(Clone)]
pub struct ChannelMonitorReporter {
    event_tx: tokio::sync::mpsc::Sender<MonitorEvent>,
}

impl ChannelMonitorReporter {
    pub fn new(event_tx: tokio::sync::mpsc::Sender<MonitorEvent>) -> Self {
        Self { event_tx }
    }
}

impl MonitorReporter for ChannelMonitorReporter {
    fn begin(&self, seed: &Url) {
        futures::executor::block_on(async {
            let _ = self
                .event_tx
                .send(MonitorEvent::Begin { seed: seed.clone() })
                .await;
        })
    }

    fn live_view(&self, records: Vec<(String, u16)>) {
        futures::executor::block_on(async {
            let _ = self.event_tx.send(MonitorEvent::LiveView { records }).await;
        })
    }

    fn state_changed(&self, state: MonitorState) {
        futures::executor::block_on(async {
            let _ = self.event_tx.send(MonitorEvent::StateChanged { state }).await;
        })
    }

    fn end(&self) {
        futures::executor::block_on(async {
            let _ = self.event_tx.send(MonitorEvent::End).await;
        })
    }
}
