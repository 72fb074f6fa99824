//! Terminal setup and the interactive event loop

use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use super::{render, CalculatorApp, InputHandler};
use crate::config::CalcConfig;
use crate::error::AppResult;

static PANIC_HOOK_SET: Once = Once::new();

/// Whether the live guard enabled mouse capture; read by the panic hook
static MOUSE_CAPTURED: AtomicBool = AtomicBool::new(false);

fn set_mouse_captured(mouse: bool) {
    MOUSE_CAPTURED.store(mouse, Ordering::SeqCst);
}

fn mouse_captured() -> bool {
    MOUSE_CAPTURED.load(Ordering::SeqCst)
}

/// Raw mode and alternate screen for as long as the guard lives
#[derive(Debug)]
pub struct TerminalGuard {
    mouse: bool,
}

impl TerminalGuard {
    /// Enters raw mode and the alternate screen
    pub fn new(mouse: bool) -> AppResult<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        set_mouse_captured(mouse);
        set_panic_hook();
        Ok(Self { mouse })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore(self.mouse);
        set_mouse_captured(false);
    }
}

fn restore(mouse: bool) {
    let mut stdout = io::stdout();
    if mouse {
        let _ = execute!(stdout, DisableMouseCapture);
    }
    let _ = execute!(stdout, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore(mouse_captured());
            previous(info);
        }));
    });
}

/// Runs the interactive calculator until the user quits
pub fn run(config: &CalcConfig) -> AppResult<()> {
    let _guard = TerminalGuard::new(config.mouse)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    tracing::info!(mouse = config.mouse, "interactive session started");

    let result = event_loop(&mut terminal, config);
    terminal.show_cursor()?;

    tracing::info!("interactive session ended");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &CalcConfig,
) -> AppResult<()> {
    let mut app = CalculatorApp::new();
    let input = InputHandler::new();

    while !app.should_quit() {
        terminal.draw(|f| render(&app, f))?;

        match event::read()? {
            Event::Key(key) => app.handle_action(input.handle_key(key)),
            Event::Mouse(mouse) if config.mouse => {
                if let Some((x, y)) = InputHandler::click_position(mouse) {
                    let size = terminal.size()?;
                    app.click(Rect::new(0, 0, size.width, size.height), x, y);
                }
            }
            _ => {}
        }
    }

    Ok(())
}
