//! splitpane demo: two text panes with a draggable divider.
//!
//! Usage: `splitpane [settings.json]`. Drag the divider with the mouse, `Alt+Left`/`Alt+Right`
//! to nudge it, `Alt+0` to reset, `Esc` to cancel a drag, `Tab` to switch panes, `q` to quit
//! (`Ctrl+C` quits even mid-drag).

use std::io;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event;
use splitpane::core::event::{InputEvent, KeyCode, KeyModifiers};
use splitpane::settings::{self, Settings};
use splitpane::split::{SplitState, SplitView};
use splitpane::tui::crossterm::into_input_event;
use splitpane::tui::host::TerminalHost;
use splitpane::tui::terminal_guard::{TerminalGuard, TerminationSignal};
use splitpane::ui::backend::terminal::RatatuiTerminal;
use splitpane::ui::core::geom::Pos;
use splitpane::ui::core::painter::Painter;
use splitpane::ui::core::style::{Color, Style};
use splitpane::ui::widgets::TextPane;

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn load_settings(path: Option<String>) -> Settings {
    match path {
        Some(path) => settings::load_settings_from(&path).unwrap_or_else(|err| {
            tracing::warn!(%path, error = %err, "failed to load settings; using defaults");
            Settings::default()
        }),
        None => {
            if let Err(err) = settings::ensure_settings_file() {
                tracing::debug!(error = %err, "settings file not created");
            }
            settings::load_settings().unwrap_or_default()
        }
    }
}

fn help_lines(settings: &Settings, log_dir: Option<&std::path::Path>) -> Vec<String> {
    let mut lines = vec![
        "Drag the divider with the mouse.".to_string(),
        "Alt+Left / Alt+Right  nudge".to_string(),
        "Alt+0                 reset".to_string(),
        "Esc (while dragging)  cancel".to_string(),
        "Tab                   switch pane".to_string(),
        "q                     quit".to_string(),
        String::new(),
        format!("default width  {}%", settings.split.default_left_width),
        format!("min width      {}%", settings.split.min_left_width),
        format!("max width      {}%", settings.split.max_left_width),
        format!("keyboard step  {}%", settings.keyboard_step),
    ];
    if let Some(dir) = log_dir {
        lines.push(String::new());
        lines.push(format!("logs: {}", dir.display()));
    }
    lines
}

fn sample_lines() -> Vec<String> {
    (1..=200)
        .map(|i| format!("{i:>4}  click and drag to select lines"))
        .collect()
}

fn main() -> io::Result<()> {
    let mut logging = logging::init();
    let settings = load_settings(std::env::args().nth(1));
    let log_dir = logging.as_ref().map(|l| l.log_dir().to_path_buf());
    let mut log_rx = logging.as_mut().and_then(|l| l.take_log_rx());

    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel::<TerminationSignal>();
    #[cfg(unix)]
    let _signal_thread =
        splitpane::tui::terminal_guard::install_termination_signals(guard.restorer(), signal_tx)?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let host = Arc::new(TerminalHost::stdout());
    let gate = host.selection_gate();
    let state = SplitState::new(settings.split, host);
    let left = TextPane::new("help", help_lines(&settings, log_dir.as_deref()))
        .with_selection_gate(gate.clone());
    let right = TextPane::new("content", sample_lines()).with_selection_gate(gate);
    let mut view = SplitView::new(left, right, state).with_keyboard_step(settings.keyboard_step);

    let mut terminal = RatatuiTerminal::new(io::stdout())?;
    let status_style = Style::default().fg(Color::Indexed(0)).bg(Color::Indexed(7));
    let mut last_log = String::new();

    let result = run(
        &mut view,
        &mut terminal,
        &signal_rx,
        &mut log_rx,
        &mut last_log,
        status_style,
    );

    view.teardown();
    drop(terminal);
    drop(guard);
    result
}

fn run(
    view: &mut SplitView<TextPane, TextPane>,
    terminal: &mut RatatuiTerminal,
    signal_rx: &Receiver<TerminationSignal>,
    log_rx: &mut Option<Receiver<String>>,
    last_log: &mut String,
    status_style: Style,
) -> io::Result<()> {
    let mut painter = Painter::new();
    loop {
        match signal_rx.try_recv() {
            Ok(signal) => {
                tracing::info!(?signal, "exiting on signal");
                return Ok(());
            }
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => {}
        }
        if let Some(rx) = log_rx.as_ref() {
            while let Ok(line) = rx.try_recv() {
                *last_log = line;
            }
        }

        terminal.draw(|backend, area| {
            painter.clear();
            let (body, status) = area.split_bottom(1);
            view.paint(&mut painter, body);

            let state = view.state();
            painter.fill_rect(status, status_style);
            let text = format!(
                " {:>5.1}% | {:>5.1}%{}  {}",
                state.left_percent(),
                state.right_percent(),
                if state.is_dragging() { "  [dragging]" } else { "" },
                last_log
            );
            painter.text_clipped(Pos::new(status.x, status.y), text, status_style, status);
            backend.draw(area, painter.cmds());
        })?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let input = into_input_event(event::read()?);
        if quit_requested(&input, view.state().is_dragging()) {
            view.teardown();
            return Ok(());
        }
        view.handle_input(&input);
    }
}

/// `q` quits when idle; `Ctrl+C` always quits, since a drag swallows other keys.
fn quit_requested(input: &InputEvent, dragging: bool) -> bool {
    let Some(key) = input.as_key() else {
        return false;
    };
    key.is_press()
        && match key.code {
            KeyCode::Char('q') => key.modifiers.is_empty() && !dragging,
            KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        }
}

#[cfg(test)]
#[path = "../tests/unit/main.rs"]
mod tests;
