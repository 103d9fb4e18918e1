//! Live sync against a CSS file on disk
//!
//! The file plays the part of the code editor: each save is a CSS edit fed
//! into the [`LiveSyncController`], which parses it once the debounce window
//! has passed without another save. Clean parses are persisted.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use notify::{recommended_watcher, Event, EventKind, RecursiveMode, Watcher};
use shade_sync::{LiveSyncController, ParseOutcome};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::commands::Session;

/// Block on the watch loop until the watcher shuts down
pub fn run(session: &Session, file: &Path, colored: bool) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start async runtime")?;
    runtime.block_on(watch_file(session, file, colored))
}

async fn watch_file(session: &Session, file: &Path, colored: bool) -> Result<()> {
    let mut sync = LiveSyncController::from_store(Box::new(session.store.clone()), session.config.sync_config());

    if file.exists() {
        let text = fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
        if text != sync.css_text() {
            sync.on_css_text_edited(text, Instant::now());
        }
    } else {
        fs::write(file, sync.css_text()).with_context(|| format!("Failed to create {}", file.display()))?;
        info!(path = %file.display(), "Created stylesheet from current settings");
    }

    let target = file
        .file_name()
        .map(PathBuf::from)
        .with_context(|| format!("{} is not a file path", file.display()))?;
    let dir = match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut watcher = recommended_watcher(move |res: notify::Result<Event>| match res {
        Ok(event) if is_change_to(&event, &target) => {
            let _ = tx.send(());
        }
        Ok(_) => {}
        Err(err) => warn!(%err, "File watcher error"),
    })
    .context("Failed to create file watcher")?;

    // Editors often save by renaming a temp file, so watch the directory
    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch {}", dir.display()))?;

    info!(
        path = %file.display(),
        debounce_ms = session.config.sync.debounce_ms,
        "Watching stylesheet"
    );

    let mut out = io::stdout();
    loop {
        let deadline = sync.next_deadline();
        tokio::select! {
            event = rx.recv() => {
                let Some(()) = event else { break };
                match fs::read_to_string(file) {
                    Ok(text) if text == sync.css_text() => debug!("Stylesheet saved without changes"),
                    Ok(text) => {
                        sync.on_css_text_edited(text, Instant::now());
                    }
                    Err(err) => warn!(path = %file.display(), %err, "Cannot read stylesheet"),
                }
            }
            _ = sleep_until(deadline) => {
                if let Some(outcome) = sync.poll(Instant::now()) {
                    report(&sync, outcome, colored, &mut out)?;
                }
            }
        }
    }

    info!("File watcher stopped");
    Ok(())
}

/// Wait for `deadline`, or forever when nothing is pending
async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}

/// Whether `event` created or modified a file named `target`
fn is_change_to(event: &Event, target: &Path) -> bool {
    matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_))
        && event
            .paths
            .iter()
            .any(|path| path.file_name() == Some(target.as_os_str()))
}

fn report(sync: &LiveSyncController, outcome: ParseOutcome, colored: bool, out: &mut dyn Write) -> io::Result<()> {
    let diagnostics = sync.diagnostics();
    diagnostics.log();
    if !diagnostics.is_empty() {
        writeln!(out, "{}", diagnostics.render(colored))?;
    }
    match outcome {
        ParseOutcome::Applied { fields } => {
            info!(fields, "Settings updated from stylesheet");
            writeln!(out, "{} ({} field(s) applied)", diagnostics.summary(colored), fields)
        }
        ParseOutcome::Rejected { errors } => {
            warn!(errors, "Stylesheet has errors, keeping previous settings");
            writeln!(out, "{} (settings unchanged)", diagnostics.summary(colored))
        }
    }
}
