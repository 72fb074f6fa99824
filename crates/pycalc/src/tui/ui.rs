//! TUI rendering
//!
//! A fixed-size window in the top-left corner of the terminal: display on
//! top, keypad below, one help line at the bottom.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::coordinator::CoordinatorState;

/// Window width in cells
pub const WINDOW_WIDTH: u16 = 32;
/// Window height in cells
pub const WINDOW_HEIGHT: u16 = 16;

/// Window title
pub const TITLE: &str = " pycalc ";

/// Help line shown under the keypad
pub const HELP_LINE: &str = "Enter = | Esc C | q quit";

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Returns where the keypad is drawn in a terminal of size `area`
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    sections(area)[1]
}

fn window(area: Rect) -> Rect {
    area.intersection(Rect::new(area.x, area.y, WINDOW_WIDTH, WINDOW_HEIGHT))
}

/// Display, keypad and help rows inside the window border
fn sections(area: Rect) -> [Rect; 3] {
    let inner = Block::default().borders(Borders::ALL).inner(window(area));
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner)
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let style = match self.app.state() {
            CoordinatorState::ErrorShown => Style::default().fg(Color::Red),
            CoordinatorState::Normal => Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        };

        Paragraph::new(Span::styled(self.app.display_text(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(HELP_LINE, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(window(area), buf);

        let [display, keypad, help] = sections(area);
        self.render_display(display, buf);
        KeypadWidget::new(self.app.keypad()).render(keypad, buf);
        self.render_help(help, buf);
    }
}
