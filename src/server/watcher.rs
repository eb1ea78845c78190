use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use log::{debug, error, info, warn};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::config::SiteConfig;
use crate::pipeline;
use crate::server::ServerError;

/// Quiet period after the last event before a rebuild starts
pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// Watch the site sources and rebuild on change.
///
/// The returned watcher must be kept alive; dropping it closes the channel
/// and stops the rebuild thread.
pub fn watch_site(config: &SiteConfig) -> Result<RecommendedWatcher, ServerError> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
        Ok(event) => {
            if matches!(
                event.kind,
                EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
            ) {
                if let Err(e) = tx.send(event) {
                    debug!("Dropping file event: {}", e);
                }
            }
        }
        Err(e) => error!("Watch error: {}", e),
    })?;

    for dir in config.watched_dirs() {
        if dir.is_dir() {
            watcher.watch(dir, RecursiveMode::Recursive)?;
            info!("Watching {}", dir.display());
        } else {
            warn!("Not watching missing directory {}", dir.display());
        }
    }

    let config = config.clone();
    let output_dir = absolute(&config.output_dir);
    thread::Builder::new()
        .name("quire-watch".to_string())
        .spawn(move || rebuild_loop(rx, config, output_dir))
        .map_err(ServerError::Io)?;

    Ok(watcher)
}

fn rebuild_loop(rx: Receiver<Event>, config: SiteConfig, output_dir: PathBuf) {
    while let Ok(event) = rx.recv() {
        if !is_relevant(&event, &output_dir) {
            continue;
        }
        debug!("File event: {:?}", event);

        // Coalesce a burst of events into one rebuild
        loop {
            match rx.recv_timeout(DEBOUNCE) {
                Ok(_) => continue,
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => return,
            }
        }

        info!("Change detected, rebuilding site...");
        if let Err(e) = pipeline::build_site(config.clone()) {
            error!("Rebuild failed: {}", e);
        }
    }
    debug!("Watcher closed, stopping rebuild loop");
}

/// Events touching only the output directory are the build's own writes
pub fn is_relevant(event: &Event, output_dir: &Path) -> bool {
    event
        .paths
        .iter()
        .any(|p| !absolute(p).starts_with(output_dir))
}

fn absolute(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind};
    use tempfile::TempDir;

    #[test]
    fn test_output_writes_are_ignored() {
        let dir = TempDir::new().unwrap();
        let output = absolute(dir.path()).join("public");
        let content = absolute(dir.path()).join("content");

        let own_write =
            Event::new(EventKind::Create(CreateKind::File)).add_path(output.join("index.html"));
        assert!(!is_relevant(&own_write, &output));

        let edit = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(content.join("post.md"));
        assert!(is_relevant(&edit, &output));

        let mixed = Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path(output.join("a.html"))
            .add_path(content.join("a.md"));
        assert!(is_relevant(&mixed, &output));
    }
}
