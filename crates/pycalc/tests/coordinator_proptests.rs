//! Property-based tests for the input coordinator

use proptest::prelude::*;
use pycalc::prelude::*;

// ===== Strategy definitions =====

/// Any key that appends text
fn token_strategy() -> impl Strategy<Value = Key> {
    prop::sample::select(Key::all().filter(|k| !k.is_command()).collect::<Vec<_>>())
}

/// Any key at all
fn key_strategy() -> impl Strategy<Value = Key> {
    prop::sample::select(Key::all().collect::<Vec<_>>())
}

/// Small well-formed expressions
fn expression_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        (0u32..1000).prop_map(|n| n.to_string()),
        (0u32..100, 1u32..100).prop_map(|(a, b)| format!("{a}.{b}")),
    ];
    leaf.prop_recursive(4, 16, 2, |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(vec!["+", "-", "*", "/", "//"]), inner.clone())
                .prop_map(|(a, op, b)| format!("{a}{op}{b}")),
            inner.clone().prop_map(|a| format!("({a})")),
            inner.prop_map(|a| format!("-{a}")),
        ]
    })
}

fn pressed(keys: &[Key]) -> InputCoordinator {
    let mut calc = InputCoordinator::default();
    calc.press_all(keys.iter().copied());
    calc
}

// ===== Buffer properties =====

proptest! {
    /// Appending keys from an empty display concatenates their labels
    #[test]
    fn prop_tokens_concatenate(keys in prop::collection::vec(token_strategy(), 0..40)) {
        let calc = pressed(&keys);
        let expected: String = keys.iter().map(|k| k.label()).collect();
        prop_assert_eq!(calc.text(), expected.as_str());
        prop_assert_eq!(calc.state(), CoordinatorState::Normal);
    }

    /// The first token after an error replaces the marker
    #[test]
    fn prop_token_clears_error(
        prefix in prop::collection::vec(key_strategy(), 0..20),
        token in token_strategy(),
    ) {
        let mut calc = pressed(&prefix);
        calc.build_expression("/0");
        calc.commit();
        prop_assert_eq!(calc.state(), CoordinatorState::ErrorShown);

        calc.press(token);
        prop_assert_eq!(calc.text(), token.label());
        prop_assert_eq!(calc.state(), CoordinatorState::Normal);
    }

    /// `C` empties the display whatever came before
    #[test]
    fn prop_clear_resets(keys in prop::collection::vec(key_strategy(), 0..40)) {
        let mut calc = pressed(&keys);
        calc.press(Key::Clear);
        prop_assert_eq!(calc.text(), "");
        prop_assert_eq!(calc.state(), CoordinatorState::Normal);
    }

    /// A second `=` shows the same text as the first
    #[test]
    fn prop_equals_idempotent(keys in prop::collection::vec(key_strategy(), 0..30)) {
        let mut calc = pressed(&keys);
        calc.press(Key::Equals);
        let first = calc.text().to_string();
        calc.press(Key::Equals);
        prop_assert_eq!(calc.text(), first.as_str());
    }

    /// Re-evaluating a well-formed result keeps it
    #[test]
    fn prop_result_reevaluates(expr in expression_strategy()) {
        let result = evaluate(&expr);
        if let EvaluationResult::Ok(text) = &result {
            let evaluated = evaluate(text);
            prop_assert_eq!(evaluated.text(), text.as_str());
        }
    }

    /// The commit key behaves exactly like `=`
    #[test]
    fn prop_commit_matches_equals(keys in prop::collection::vec(key_strategy(), 0..30)) {
        let mut a = pressed(&keys);
        let mut b = pressed(&keys);
        a.press(Key::Equals);
        b.commit();
        prop_assert_eq!(a.text(), b.text());
        prop_assert_eq!(a.state(), b.state());
    }

    /// The evaluator never panics on keypad input
    #[test]
    fn prop_evaluate_total(keys in prop::collection::vec(token_strategy(), 0..40)) {
        let expr: String = keys.iter().map(|k| k.label()).collect();
        let result = evaluate(&expr);
        prop_assert_eq!(result.is_error(), result.text() == ERROR_MSG);
    }
}
