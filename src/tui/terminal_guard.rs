use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::split::guard::CursorIcon;

use super::host::{
    pointer_shape_sequence, TermEnv, ANY_MOTION_OFF, BUTTON_TRACKING_OFF, BUTTON_TRACKING_ON,
};

pub trait TerminalOps: Send + Sync + 'static {
    fn setup(&self) -> io::Result<()>;
    fn restore(&self) -> io::Result<()>;
}

/// Raw mode, alternate screen and button/drag mouse reporting.
///
/// Any-motion reporting is left off here; the split's drag guard turns it on only while a
/// divider drag is active.
#[derive(Debug, Default)]
pub struct CrosstermTerminalOps {
    env: TermEnv,
}

impl CrosstermTerminalOps {
    pub fn new(env: TermEnv) -> Self {
        Self { env }
    }
}

/// Mouse and pointer-shape state to undo on exit, including whatever an interrupted divider drag
/// still holds.
pub fn mouse_restore_sequence(env: TermEnv) -> String {
    format!(
        "{ANY_MOTION_OFF}{}{BUTTON_TRACKING_OFF}",
        pointer_shape_sequence(CursorIcon::Default, env)
    )
}

impl TerminalOps for CrosstermTerminalOps {
    fn setup(&self) -> io::Result<()> {
        use crossterm::{
            cursor, execute,
            style::Print,
            terminal::{enable_raw_mode, EnterAlternateScreen},
        };

        enable_raw_mode()?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            Print(BUTTON_TRACKING_ON),
            crossterm::event::EnableFocusChange,
            cursor::Hide
        )?;
        Ok(())
    }

    fn restore(&self) -> io::Result<()> {
        use crossterm::{
            cursor, execute,
            style::Print,
            terminal::{disable_raw_mode, LeaveAlternateScreen},
        };

        // Best-effort restore: try all steps even if one fails.
        let mut first_err: Option<io::Error> = None;

        if let Err(err) = disable_raw_mode() {
            first_err.get_or_insert(err);
        }
        if let Err(err) = execute!(
            io::stdout(),
            Print(mouse_restore_sequence(self.env)),
            crossterm::event::DisableFocusChange,
            LeaveAlternateScreen,
            cursor::Show
        ) {
            first_err.get_or_insert(err);
        }

        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[derive(Clone)]
pub struct TerminalRestorer {
    restored: Arc<AtomicBool>,
    ops: Arc<dyn TerminalOps>,
}

impl TerminalRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.restored.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.restore()
    }
}

pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermTerminalOps::new(TermEnv::detect())))
    }

    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        ops.setup()?;
        Ok(Self {
            restorer: TerminalRestorer {
                restored: Arc::new(AtomicBool::new(false)),
                ops,
            },
        })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restorer.restore() {
            tracing::warn!(error = %err, "failed to restore terminal");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::SigInt => 130,
            TerminationSignal::SigTerm => 143,
        }
    }
}

/// Forward SIGINT/SIGTERM to `tx`; if the main loop has not exited after a grace period,
/// restore the terminal and exit.
#[cfg(unix)]
pub fn install_termination_signals(
    restorer: TerminalRestorer,
    tx: std::sync::mpsc::Sender<TerminationSignal>,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;
    use std::time::Duration;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    Ok(std::thread::spawn(move || {
        if let Some(sig) = signals.forever().next() {
            let signal = if sig == SIGINT {
                TerminationSignal::SigInt
            } else {
                TerminationSignal::SigTerm
            };
            tracing::info!(?signal, "termination signal received");
            let _ = tx.send(signal);

            std::thread::sleep(Duration::from_secs(2));
            let _ = restorer.restore();
            std::process::exit(signal.exit_code());
        }
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
