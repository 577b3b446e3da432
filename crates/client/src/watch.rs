//! Watch mode: lint each `.js` file as soon as it is written

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{debug, warn};

use crate::error::ClientError;
use crate::lint::{is_lintable, LintClient};
use crate::output;

/// Editors often emit several write events for one save
const DUPLICATE_WINDOW: Duration = Duration::from_millis(200);

/// Recursive watcher over the workspace, forwarding events to the async side
pub struct SourceWatcher {
    _watcher: RecommendedWatcher,
    rx: UnboundedReceiver<notify::Result<Event>>,
    last: Option<(PathBuf, Instant)>,
}

impl SourceWatcher {
    pub fn new(root: &Path) -> Result<Self, ClientError> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;
        watcher.watch(root, RecursiveMode::Recursive)?;
        Ok(Self { _watcher: watcher, rx, last: None })
    }

    /// Next written source file; `None` once the watcher is gone
    pub async fn next_change(&mut self) -> Option<PathBuf> {
        while let Some(res) = self.rx.recv().await {
            let event = match res {
                Ok(event) => event,
                Err(err) => {
                    warn!(error = %err, "watch error");
                    continue;
                }
            };
            if let Some(path) = self.accept(event, Instant::now()) {
                return Some(path);
            }
        }
        None
    }

    fn accept(&mut self, event: Event, now: Instant) -> Option<PathBuf> {
        if !matches!(event.kind, EventKind::Modify(_)) {
            return None;
        }
        let path = event.paths.into_iter().find(|path| is_lintable(path))?;
        if let Some((last_path, at)) = &self.last {
            if *last_path == path && now.duration_since(*at) < DUPLICATE_WINDOW {
                debug!(file = %path.display(), "skipping duplicate write event");
                return None;
            }
        }
        self.last = Some((path.clone(), now));
        Some(path)
    }
}

/// Lint every written source until the watcher stops
pub async fn run(client: &mut LintClient, workspace: &Path) -> Result<(), ClientError> {
    let mut watcher = SourceWatcher::new(workspace)?;
    while let Some(path) = watcher.next_change().await {
        debug!(file = %path.display(), "source changed");
        match client.lint_path(&path).await {
            Ok(report) => output::print_report(&report),
            Err(err) => warn!(file = %path.display(), error = %err, "lint failed"),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use notify::event::{CreateKind, DataChange, ModifyKind};

    use super::*;

    fn event(kind: EventKind, path: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from(path))
    }

    fn write(path: &str) -> Event {
        event(EventKind::Modify(ModifyKind::Data(DataChange::Content)), path)
    }

    #[test]
    fn test_accepts_writes_to_sources_only() {
        let dir = tempfile::tempdir().unwrap();
        let mut watcher = SourceWatcher::new(dir.path()).unwrap();
        let now = Instant::now();

        assert_eq!(watcher.accept(write("/w/app.js"), now), Some(PathBuf::from("/w/app.js")));
        assert_eq!(watcher.accept(write("/w/notes.txt"), now), None);
        assert_eq!(watcher.accept(event(EventKind::Create(CreateKind::File), "/w/new.js"), now), None);
    }

    #[test]
    fn test_collapses_duplicate_writes() {
        let dir = tempfile::tempdir().unwrap();
        let mut watcher = SourceWatcher::new(dir.path()).unwrap();
        let now = Instant::now();

        assert!(watcher.accept(write("/w/app.js"), now).is_some());
        assert!(watcher.accept(write("/w/app.js"), now + Duration::from_millis(50)).is_none());
        assert!(watcher.accept(write("/w/other.js"), now + Duration::from_millis(60)).is_some());
        assert!(watcher.accept(write("/w/other.js"), now + Duration::from_secs(1)).is_some());
    }
}
