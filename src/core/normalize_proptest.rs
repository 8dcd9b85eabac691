//! Property-based tests for answer normalization
//!
//! Blank and unparseable numeric answers must resolve to the supplied
//! default for every possible input.

#[cfg(test)]
mod tests {
    use crate::core::config::{WorkerCount, DEFAULT_BASE_URL};
    use crate::core::normalize::*;
    use proptest::prelude::*;
    use std::path::Path;

    fn worker_default() -> impl Strategy<Value = WorkerCount> {
        prop_oneof![
            Just(WorkerCount::OsDefault),
            (1u32..64).prop_map(WorkerCount::Fixed),
        ]
    }

    proptest! {
        #[test]
        fn test_blank_workers_resolve_to_default(
            blank in "[ \t]{0,6}",
            default in worker_default(),
        ) {
            prop_assert_eq!(parse_workers(&blank, default), default);
        }

        #[test]
        fn test_non_numeric_workers_resolve_to_default(
            garbage in "[a-zA-Z][a-zA-Z_.-]{0,10}",
            default in worker_default(),
        ) {
            prop_assume!(!garbage.eq_ignore_ascii_case("unbounded"));
            prop_assert_eq!(parse_workers(&garbage, default), default);
        }

        #[test]
        fn test_positive_workers_are_kept(count in 1u32..10_000) {
            prop_assert_eq!(
                parse_workers(&count.to_string(), WorkerCount::OsDefault),
                WorkerCount::Fixed(count)
            );
        }

        #[test]
        fn test_blank_or_garbage_retries_resolve_to_default(
            garbage in prop_oneof!["[ \t]{0,4}", "[a-zA-Z]{1,8}", "-[0-9]{1,4}"],
            default in 0u32..10,
        ) {
            prop_assert_eq!(parse_retries(&garbage, default), default);
        }

        #[test]
        fn test_retries_roundtrip(count in 0u32..1_000) {
            prop_assert_eq!(parse_retries(&format!(" {count} "), 7), count);
        }

        #[test]
        fn test_base_url_never_empty(raw in ".{0,40}") {
            let resolved = resolve_base_url(&raw);
            prop_assert!(!resolved.is_empty());
            if raw.trim().is_empty() {
                prop_assert_eq!(resolved, DEFAULT_BASE_URL);
            }
        }

        #[test]
        fn test_target_path_always_has_test_dir(
            raw in prop_oneof!["", "[a-z]{1,8}", "[a-z]{1,8}/[a-z]{1,8}", "\\.\\./[a-z]{1,8}"],
        ) {
            let target = resolve_target_path(&raw, Path::new("/work/app"));
            prop_assert!(!target.test_dir_name.is_empty());
            prop_assert!(!target.framework_root.as_os_str().is_empty());
        }
    }
}
