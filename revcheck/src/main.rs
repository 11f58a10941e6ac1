//! revcheck — AI review of your working-tree diff, as an interactive checklist.
//!
//! Entry point for the `revcheck` binary. Wires together the terminal
//! lifecycle (`tui`), unified event bus (`event`), review fetch worker
//! (`review`), session reducer (`app`), views (`ui`), and the theme system
//! (`theme`). The tolerant item extractor lives in the `revcheck-core` crate.
//!
//! # Startup sequence (order matters)
//!
//! 1. Parse CLI flags and load config — read-only, safe before terminal init.
//! 2. Capture the git diff. An empty diff exits before any terminal setup,
//!    so "nothing to review" never flashes an alternate screen.
//! 3. `install_panic_hook()` — installed first so it is the innermost hook.
//!    Restores the terminal before the panic message prints.
//! 4. `register_sigterm()` — returns `Arc<AtomicBool>` polled in the event
//!    loop.
//! 5. `init_tui()` — enters alternate screen and enables raw mode.
//! 6. Create the event channel, spawn the event task, and hand the diff to
//!    the worker thread before the first frame, so the spinner is honest.
//!
//! # Safety
//!
//! `restore_tui()` is called after the event loop exits (quit key, Enter,
//! SIGTERM, or channel close). The `?` operator is only used before
//! `init_tui()` or inside the Render arm — draw errors propagate out of the
//! loop via `break` and still reach `restore_tui()`. The panic hook covers
//! the panic path.

mod app;
mod config;
mod event;
mod git;
mod highlight;
mod review;
mod theme;
mod tui;
mod ui;

use std::path::Path;
use std::sync::atomic::Ordering;

use anyhow::{bail, Context};
use clap::Parser;

use crate::review::types::ReviewRequest;
use crate::review::worker::review_worker_loop;
use crate::ui::keybindings::{handle_key, KeyAction};

/// AI review of your uncommitted changes, as an interactive checklist.
#[derive(Debug, Parser)]
#[command(name = "revcheck", version, about)]
struct Cli {
    /// Limit the review to this path (file or directory). Defaults to all
    /// changed files.
    path: Option<String>,

    /// Chat-completion model to use; overrides the config file.
    #[arg(long)]
    model: Option<String>,

    /// Color theme ("dark" or "dracula"); overrides the config file.
    #[arg(long)]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load();

    let env_key = std::env::var("OPENAI_API_KEY").ok();
    let Some(api_key) = config::resolve_api_key(env_key.as_deref(), &cfg) else {
        bail!(
            "no API key found: set OPENAI_API_KEY or add api_key to {}",
            config::config_path().display()
        );
    };

    let model = cli
        .model
        .or(cfg.model)
        .unwrap_or_else(|| config::DEFAULT_MODEL.to_owned());
    let theme_name = cli
        .theme
        .or(cfg.theme)
        .unwrap_or_else(|| "dark".to_owned());
    let theme = theme::Theme::from_name(&theme_name);

    // Diff capture happens before any terminal setup so the empty-diff exit
    // is a plain println, not a flash of alternate screen.
    let diff = git::capture_diff(Path::new("."), cli.path.as_deref())
        .context("failed to read git diff")?;
    if diff.trim().is_empty() {
        println!("No changes detected in git diff");
        return Ok(());
    }

    let target = match cli.path.as_deref() {
        None | Some(".") => "all changed files".to_owned(),
        Some(p) => p.to_owned(),
    };
    let mut state = app::SessionState::new(target);

    // Panic hook installed first — innermost hook restores the terminal.
    tui::install_panic_hook();

    // SIGTERM flag, polled in the 50ms heartbeat arm below.
    let term_flag = tui::register_sigterm();

    let mut terminal = tui::init_tui()?;

    let handler = event::EventHandler::new();
    event::spawn_event_task(handler.tx.clone());
    let mut rx = handler.rx;

    // The worker owns the blocking HTTP client; it gets its own plain thread
    // because blocking reqwest must not run on the tokio runtime.
    let (req_tx, req_rx) = crossbeam_channel::unbounded::<ReviewRequest>();
    let event_tx = handler.tx.clone();
    std::thread::spawn(move || review_worker_loop(api_key, req_rx, event_tx));
    let _ = req_tx.send(ReviewRequest { diff, model });

    // Event loop — exits only via `break`, never via `?`, so `restore_tui()`
    // is always reached.
    let mut loop_result: anyhow::Result<()> = Ok(());
    'event_loop: loop {
        tokio::select! {
            // Heartbeat: guarantees SIGTERM is checked at least every 50ms,
            // even when no crossterm/tick/render events arrive.
            _ = tokio::time::sleep(std::time::Duration::from_millis(50)) => {
                if term_flag.load(Ordering::Relaxed) {
                    break 'event_loop;
                }
            }
            maybe_event = rx.recv() => {
                match maybe_event {
                    Some(event::AppEvent::Render) => {
                        // Exactly one draw() call per Render event.
                        if let Err(e) = terminal.draw(|frame| ui::render(frame, &mut state, &theme)) {
                            loop_result = Err(e.into());
                            break 'event_loop;
                        }
                    }
                    Some(event::AppEvent::Key(key)) => {
                        if handle_key(&mut state, key) == KeyAction::Quit {
                            state.quitting = true;
                            break 'event_loop;
                        }
                    }
                    Some(event::AppEvent::Tick) => state.tick(),
                    Some(event::AppEvent::Resize(w, h)) => state.resize(w, h),
                    Some(event::AppEvent::ReviewResult(outcome)) => state.apply_review(*outcome),
                    Some(event::AppEvent::Quit) | None => break 'event_loop,
                }
                // Check SIGTERM after every event too, so quit latency is at
                // most one event cycle rather than 50ms.
                if term_flag.load(Ordering::Relaxed) {
                    break 'event_loop;
                }
            }
        }
    }

    // Restore the terminal at the single exit point of the loop.
    tui::restore_tui()?;
    loop_result
}
