//! Property tests for the analyzer argument translation.

use crosscheck::arguments::analyzer_arguments;
use crosscheck::config::RunConfig;
use proptest::prelude::*;

fn config_strategy() -> impl Strategy<Value = RunConfig> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        0u32..64,
        0u8..4,
        proptest::option::of("[a-z]{1,8}=[a-z]{1,8}"),
        proptest::collection::vec("[a-z]{2,8}\\.[a-z]{2,8}", 0..3),
        proptest::collection::vec("[a-z]{2,8}\\.[a-z]{2,8}", 0..3),
    )
        .prop_map(
            |(
                internal_stats,
                analyze_headers,
                stats,
                maxloop,
                verbose,
                analyzer_config,
                enable_checker,
                disable_checker,
            )| RunConfig {
                internal_stats,
                analyze_headers,
                stats,
                maxloop,
                verbose,
                analyzer_config,
                enable_checker,
                disable_checker,
                ..RunConfig::default()
            },
        )
}

proptest! {
    #[test]
    fn translation_is_idempotent(config in config_strategy()) {
        prop_assert_eq!(analyzer_arguments(&config), analyzer_arguments(&config));
    }

    #[test]
    fn every_flag_is_frontend_wrapped(config in config_strategy()) {
        let arguments = analyzer_arguments(&config);
        prop_assert_eq!(arguments.len() % 2, 0);
        for pair in arguments.chunks(2) {
            prop_assert_eq!(pair[0].as_str(), "-Xclang");
        }
    }

    #[test]
    fn store_and_constraints_lead(config in config_strategy()) {
        let arguments = analyzer_arguments(&config);
        prop_assert!(arguments[1].starts_with("-analyzer-store="));
        prop_assert!(arguments[3].starts_with("-analyzer-constraints="));
    }

    #[test]
    fn enabled_checkers_precede_disabled(config in config_strategy()) {
        let arguments = analyzer_arguments(&config);
        let last_enable = arguments.iter().rposition(|a| a == "-analyzer-checker");
        let first_disable = arguments
            .iter()
            .position(|a| a == "-analyzer-disable-checker");
        if let (Some(enable), Some(disable)) = (last_enable, first_disable) {
            prop_assert!(enable < disable);
        }
    }

    #[test]
    fn checker_lists_expand_completely(config in config_strategy()) {
        let arguments = analyzer_arguments(&config);
        let enabled = arguments.iter().filter(|a| *a == "-analyzer-checker").count();
        let disabled = arguments
            .iter()
            .filter(|a| *a == "-analyzer-disable-checker")
            .count();
        prop_assert_eq!(enabled, config.enable_checker.len());
        prop_assert_eq!(disabled, config.disable_checker.len());
    }
}
