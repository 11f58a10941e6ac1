//! Terminal lifecycle management for revcheck.
//!
//! Raw mode and the alternate screen are entered once at startup and must be
//! restored at every exit path — ratatui 0.30 does not auto-restore the
//! terminal on `Drop`, so a missed restore leaves the shell unusable until
//! the user types `reset`. The panic hook covers the panic path.

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use signal_hook::consts::SIGTERM;
use signal_hook::flag::register;
use std::io::{stdout, BufWriter, Stdout};
use std::panic;
use std::sync::{atomic::AtomicBool, Arc};

/// The terminal type used by revcheck — CrosstermBackend over buffered stdout.
///
/// `BufWriter<Stdout>` batches escape sequences into fewer write(2) syscalls,
/// reducing flicker at the 30 FPS render interval.
pub type Tui = Terminal<CrosstermBackend<BufWriter<Stdout>>>;

/// Initialise the terminal for TUI rendering.
///
/// Enables raw mode and enters the alternate screen. Call [`restore_tui`] at
/// every exit path.
///
/// # Errors
///
/// Returns `Err` if `enable_raw_mode`, `execute!`, or `Terminal::new` fails.
pub fn init_tui() -> std::io::Result<Tui> {
    let mut out = BufWriter::new(stdout());
    enable_raw_mode()?;
    execute!(out, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(out))
}

/// Restore the terminal to its pre-TUI state.
///
/// Disables raw mode and leaves the alternate screen. Idempotent; callers in
/// the panic hook should use `let _ = restore_tui();` (best-effort only).
pub fn restore_tui() -> std::io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic
/// message.
///
/// Must be called **before** [`init_tui`]. Chains onto any previously
/// installed hook so the default panic printer still runs after the terminal
/// is restored.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore first so the panic message is readable.
        let _ = restore_tui();
        original_hook(panic_info);
    }));
}

/// Register a SIGTERM handler that sets an `AtomicBool` flag.
///
/// The returned flag transitions from `false` to `true` when the process
/// receives SIGTERM; the main event loop polls it on a short heartbeat.
///
/// # Panics
///
/// Panics if the OS refuses to register the signal handler — treated as a
/// fatal initialisation error rather than a recoverable condition.
pub fn register_sigterm() -> Arc<AtomicBool> {
    let term = Arc::new(AtomicBool::new(false));
    // Safety: signal_hook::flag::register only performs an atomic store in
    // the handler, which is async-signal-safe.
    register(SIGTERM, Arc::clone(&term)).expect("Failed to register SIGTERM handler");
    term
}
