//! Unified calculator drivers
//!
//! Scenarios are written once against [`CalculatorDriver`] and run on both
//! the headless coordinator and the terminal app.

use crate::coordinator::{CoordinatorState, InputCoordinator};
use crate::core::ERROR_MSG;
use crate::keys::Key;

/// Test-facing handle that presses keys and reads the display
///
/// # Example
///
/// ```rust
/// use pycalc::driver::{CalculatorDriver, HeadlessDriver};
///
/// let mut driver = HeadlessDriver::new();
/// driver.type_keys("42*(3+7)=");
/// assert_eq!(driver.display_text(), "420");
/// ```
pub trait CalculatorDriver {
    /// Presses one keypad key
    fn press(&mut self, key: Key);

    /// Activates the dedicated commit key
    fn commit(&mut self);

    /// Gets the display text
    fn display_text(&self) -> String;

    /// Gets the coordinator state
    fn state(&self) -> CoordinatorState;

    /// Types keyboard characters; `\n` commits
    ///
    /// Returns the number of characters that reached the calculator.
    fn type_keys(&mut self, input: &str) -> usize {
        let mut accepted = 0;
        for c in input.chars() {
            if c == '\n' {
                self.commit();
            } else if let Some(key) = Key::from_char(c) {
                self.press(key);
            } else {
                continue;
            }
            accepted += 1;
        }
        accepted
    }
}

/// Driver over a bare coordinator
#[derive(Debug, Default)]
pub struct HeadlessDriver {
    coordinator: InputCoordinator,
}

impl HeadlessDriver {
    /// Creates a new headless driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying coordinator
    #[must_use]
    pub fn coordinator(&self) -> &InputCoordinator {
        &self.coordinator
    }
}

impl CalculatorDriver for HeadlessDriver {
    fn press(&mut self, key: Key) {
        self.coordinator.press(key);
    }

    fn commit(&mut self) {
        self.coordinator.commit();
    }

    fn display_text(&self) -> String {
        self.coordinator.text().to_string()
    }

    fn state(&self) -> CoordinatorState {
        self.coordinator.state()
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalculatorDriver, CoordinatorState, Key};
    use crate::tui::CalculatorApp;

    /// Driver wrapping the terminal app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, key: Key) {
            self.app.press(key);
        }

        fn commit(&mut self) {
            self.app.commit();
        }

        fn display_text(&self) -> String {
            self.app.display_text().to_string()
        }

        fn state(&self) -> CoordinatorState {
            self.app.state()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified scenarios =====
// These run against ANY CalculatorDriver implementation

/// Verifies precedence and parentheses
pub fn verify_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Key::Clear);
    driver.type_keys("2+3*4=");
    assert_eq!(driver.display_text(), "14");

    driver.press(Key::Clear);
    driver.type_keys("(1+2)*3=");
    assert_eq!(driver.display_text(), "9");

    driver.press(Key::Clear);
    driver.type_keys("7/2=");
    assert_eq!(driver.display_text(), "3.5");

    driver.press(Key::Clear);
    driver.type_keys("4/2=");
    assert_eq!(driver.display_text(), "2.0");
}

/// Verifies the error marker and its recovery
pub fn verify_error_recovery<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Key::Clear);
    driver.type_keys("5/0=");
    assert_eq!(driver.display_text(), ERROR_MSG);
    assert_eq!(driver.state(), CoordinatorState::ErrorShown);

    driver.press(Key::Digit(4));
    assert_eq!(driver.display_text(), "4");
    assert_eq!(driver.state(), CoordinatorState::Normal);

    driver.type_keys("2+=");
    assert_eq!(driver.display_text(), ERROR_MSG);
    driver.press(Key::Clear);
    assert_eq!(driver.display_text(), "");
}

/// Verifies commit equals `=` and repeated `=` is stable
pub fn verify_commit<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Key::Clear);
    driver.type_keys("6*7\n");
    assert_eq!(driver.display_text(), "42");
    driver.press(Key::Equals);
    assert_eq!(driver.display_text(), "42");
    driver.commit();
    assert_eq!(driver.display_text(), "42");
}

/// Runs every scenario
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_arithmetic(driver);
    verify_error_recovery(driver);
    verify_commit(driver);
}
