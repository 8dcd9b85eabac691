//! Property-based tests for the browser classifier
//!
//! These verify the selection is never empty, unknown tokens never leak into
//! the project set, and classification ignores case and surrounding space.

#[cfg(test)]
mod tests {
    use crate::core::browser::*;
    use crate::core::config::default_browsers;
    use proptest::prelude::*;

    // Tokens guaranteed not to contain any classifier keyword
    fn unknown_token() -> impl Strategy<Value = String> {
        "[a-z]{1,12}".prop_filter("must not match a rule", |token| {
            classify_token(token).is_none()
        })
    }

    fn known_token() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("chrome".to_string()),
            Just("Chrome".to_string()),
            Just("FIREFOX".to_string()),
            Just("safari".to_string()),
            Just("WebKit".to_string()),
            Just("mobile".to_string()),
            Just("Mobile Chrome".to_string()),
        ]
    }

    proptest! {
        #[test]
        fn test_unknown_tokens_always_yield_default(
            tokens in prop::collection::vec(unknown_token(), 0..8),
        ) {
            let input = tokens.join(",");
            let selection = parse_browser_selection(&input);

            prop_assert_eq!(selection.projects, default_browsers());
            prop_assert!(selection.defaulted);
            prop_assert_eq!(selection.discarded.len(), tokens.len());
        }

        #[test]
        fn test_selection_is_never_empty(input in ".{0,80}") {
            let selection = parse_browser_selection(&input);
            prop_assert!(!selection.projects.is_empty());
        }

        #[test]
        fn test_known_tokens_are_never_discarded(
            known in prop::collection::vec(known_token(), 1..6),
            unknown in prop::collection::vec(unknown_token(), 0..4),
        ) {
            let mut tokens = known.clone();
            tokens.extend(unknown.iter().cloned());
            let selection = parse_browser_selection(&tokens.join(" , "));

            prop_assert!(!selection.defaulted);
            prop_assert_eq!(selection.discarded.len(), unknown.len());
            for token in &known {
                let project = classify_token(&token.to_lowercase());
                prop_assert!(project.is_some());
                prop_assert!(selection.projects.contains(&project.unwrap()));
            }
        }

        #[test]
        fn test_classification_ignores_padding_and_case(
            token in known_token(),
            left in " {0,3}",
            right in " {0,3}",
        ) {
            let padded = format!("{left}{}{right}", token.to_uppercase());
            let plain = parse_browser_selection(&token);
            let noisy = parse_browser_selection(&padded);
            prop_assert_eq!(plain.projects, noisy.projects);
        }

        #[test]
        fn test_repeating_input_does_not_change_result(
            tokens in prop::collection::vec(known_token(), 1..5),
            repeats in 1usize..4,
        ) {
            let once = parse_browser_selection(&tokens.join(","));
            let repeated_input = vec![tokens.join(","); repeats].join(",");
            let many = parse_browser_selection(&repeated_input);
            prop_assert_eq!(once.projects, many.projects);
        }
    }
}
