use crate::handlers::generate;
use crate::views;
use anyhow::Result;
use notify::{Event, EventKind, PollWatcher, RecursiveMode, Watcher};
use rulesync_core::Config;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::time::Duration;

pub fn handle(base_dir: &Path) -> Result<()> {
    let config = Config::load(base_dir)?;
    let rules_dir = base_dir.join(&config.ai_rules_dir);

    views::info("👀 Watching for changes in .rulesync directory...");
    views::info("Press Ctrl+C to stop watching");

    // Initial generation; a failure here should not kill the watch loop
    if let Err(e) = generate::handle(base_dir, None, false, false) {
        views::error(&format!("Initial generation failed: {}", e));
    }

    let (tx, rx) = channel();

    // Polling watcher for consistent behavior across platforms; FSEvents
    // coalescing on macOS otherwise delays delivery of rapid edits
    let watcher_config =
        notify::Config::default().with_poll_interval(Duration::from_millis(500));
    let mut watcher = PollWatcher::new(
        move |res: Result<Event, _>| {
            if let Ok(event) = res {
                let _ = tx.send(event);
            }
        },
        watcher_config,
    )?;
    watcher.watch(&rules_dir, RecursiveMode::Recursive)?;

    let running = Arc::new(AtomicBool::new(true));
    let handler_flag = running.clone();
    ctrlc::set_handler(move || {
        handler_flag.store(false, Ordering::SeqCst);
    })?;

    while running.load(Ordering::SeqCst) {
        let Ok(event) = rx.recv_timeout(Duration::from_millis(200)) else {
            continue;
        };

        if !is_relevant(&event) {
            continue;
        }

        for path in &event.paths {
            views::info(&format!("\n📝 Detected change in {}", path.display()));
        }

        // Drain the rest of the burst so one save triggers one regeneration
        while rx.try_recv().is_ok() {}

        match generate::handle(base_dir, None, false, false) {
            Ok(()) => views::success("Regenerated configuration files"),
            Err(e) => views::error(&format!("Failed to regenerate: {}", e)),
        }
    }

    views::info("\n👋 Stopping watcher...");
    Ok(())
}

fn is_relevant(event: &Event) -> bool {
    let touches_markdown = event
        .paths
        .iter()
        .any(|p| p.extension().is_some_and(|e| e == "md"));

    touches_markdown
        && matches!(
            event.kind,
            EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
        )
}
