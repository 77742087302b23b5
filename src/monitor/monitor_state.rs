/// Lifecycle of one monitored crawl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    /// Worker alive, live view refreshed every poll tick.
    Running,
    /// Worker exited, final read pending.
    Draining,
    /// Finalizer has taken over.
    Done,
}
