use crate::monitor::{MonitorEvent, MonitorState};
use crossterm::{ExecutableCommand, queue};
use std::io::{Stdout, Write, stdout};
use std::sync::Arc;
use tokio::select;
use url::Url;

const MAX_VISIBLE_ROWS: usize = 15;

struct ConsoleState {
    stdout: Stdout,
    seed: Option<Url>,
    state: MonitorState,
    records: Vec<(String, u16)>,
}

/// Alternate-screen live view of a monitored crawl. Events arrive over a
/// channel; the screen is torn down before the final tables print.
#[derive(Clone)]
pub struct ConsoleReporter {
    event_tx: tokio::sync::mpsc::Sender<MonitorEvent>,
    event_rx: Arc<tokio::sync::Mutex<Option<tokio::sync::mpsc::Receiver<MonitorEvent>>>>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        let (event_tx, event_rx) = tokio::sync::mpsc::channel::<MonitorEvent>(100);
        Self {
            event_tx,
            event_rx: Arc::new(tokio::sync::Mutex::new(Some(event_rx))),
        }
    }

    pub fn event_tx(&self) -> tokio::sync::mpsc::Sender<MonitorEvent> {
        self.event_tx.clone()
    }

    pub async fn run(&self, stop_notify: Arc<tokio::sync::Notify>) -> anyhow::Result<()> {
        let mut event_rx = {
            let mut mtx = self.event_rx.lock().await;
            match mtx.take() {
                Some(event_rx) => event_rx,
                None => return Ok(()), // already running elsewhere
            }
        };

        let mut console_state = ConsoleState {
            stdout: stdout(),
            seed: None,
            state: MonitorState::Running,
            records: Vec::new(),
        };

        let _ = ConsoleReporter::console_setup(&mut console_state);

        let mut stop_requested = false;
        while !stop_requested {
            select! {
                event = event_rx.recv() => {
                    match event {
                        Some(event) => {
                            if matches!(event, MonitorEvent::End) {
                                stop_requested = true;
                            }
                            ConsoleReporter::handle_event(event, &mut console_state);
                            let _ = ConsoleReporter::console_redraw(&console_state);
                        }
                        None => {
                            stop_requested = true;
                        }
                    }
                }
                _ = stop_notify.notified() => {
                    stop_requested = true;
                }
            }
        }

        let _ = ConsoleReporter::console_teardown(&mut console_state);

        Ok(())
    }

    fn console_setup(state: &mut ConsoleState) -> anyhow::Result<()> {
        let mut stdout = &state.stdout;
        stdout.execute(crossterm::terminal::EnterAlternateScreen)?;
        stdout.execute(crossterm::cursor::Hide)?;
        stdout.execute(crossterm::terminal::Clear(
            crossterm::terminal::ClearType::All,
        ))?;
        Ok(())
    }

    fn console_teardown(state: &mut ConsoleState) -> anyhow::Result<()> {
        let mut stdout = &state.stdout;
        stdout.execute(crossterm::cursor::Show)?;
        stdout.execute(crossterm::terminal::LeaveAlternateScreen)?;
        Ok(())
    }

    fn console_redraw(state: &ConsoleState) -> anyhow::Result<()> {
        let mut stdout = &state.stdout;
        queue!(
            stdout,
            crossterm::cursor::MoveTo(0, 0),
            crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
        )?;

        let state_str = match state.state {
            MonitorState::Running => "Crawling",
            MonitorState::Draining => "Finishing",
            MonitorState::Done => "Done",
        };
        let seed_str = state
            .seed
            .as_ref()
            .map(|seed| seed.to_string())
            .unwrap_or_default();
        queue!(
            stdout,
            crossterm::style::Print(format!("Crawling: {} ({})", seed_str, state_str)),
            crossterm::cursor::MoveToNextLine(1),
            crossterm::style::Print(format!("   # URLs Discovered: {}", state.records.len())),
            crossterm::cursor::MoveToNextLine(2),
        )?;

        let skip = state.records.len().saturating_sub(MAX_VISIBLE_ROWS);
        for (url, status) in state.records.iter().skip(skip) {
            queue!(
                stdout,
                crossterm::style::Print(format!("   {:>3}  {}", status, url)),
                crossterm::cursor::MoveToNextLine(1),
            )?;
        }

        stdout.flush()?;
        Ok(())
    }

    fn handle_event(event: MonitorEvent, state: &mut ConsoleState) {
        match event {
            MonitorEvent::Begin { seed } => {
                state.seed = Some(seed);
                state.records.clear();
            }
            MonitorEvent::LiveView { records } => {
                state.records = records;
            }
            MonitorEvent::StateChanged {
                state: monitor_state,
            } => {
                state.state = monitor_state;
            }
            MonitorEvent::End => {}
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
