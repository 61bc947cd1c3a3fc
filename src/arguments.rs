//! Translation of run options into analyzer frontend arguments.
//!
//! Each configuration field contributes independently, in a fixed emission
//! order, and the whole list is wrapped so every flag reaches the analyzer
//! through the compiler frontend (`-Xclang` before each token).

use crate::config::RunConfig;

/// Translates the run configuration into the analyzer argument list.
///
/// Pure: the same configuration always yields the same list. Options with
/// declared defaults (store model, constraint engine, max loop count,
/// output format) always emit; boolean and optional fields emit nothing
/// when unset.
pub fn analyzer_arguments(config: &RunConfig) -> Vec<String> {
    let mut direct: Vec<String> = Vec::new();

    direct.push(format!("-analyzer-store={}", config.store_model.as_str()));
    direct.push(format!(
        "-analyzer-constraints={}",
        config.constraints_model.as_str()
    ));
    if config.internal_stats {
        direct.push("-analyzer-stats".to_owned());
    }
    if config.analyze_headers {
        direct.push("-analyzer-opt-analyze-headers".to_owned());
    }
    if config.stats {
        direct.push("-analyzer-checker=debug.Stats".to_owned());
    }
    direct.push("-analyzer-max-loop".to_owned());
    direct.push(config.maxloop.to_string());
    direct.push(format!("-analyzer-output={}", config.output_format.as_str()));
    if let Some(options) = &config.analyzer_config {
        direct.push(options.clone());
    }
    if config.verbose >= 2 {
        direct.push("-analyzer-display-progress".to_owned());
    }
    for plugin in &config.plugins {
        direct.push("-load".to_owned());
        direct.push(plugin.display().to_string());
    }
    for checker in &config.enable_checker {
        direct.push("-analyzer-checker".to_owned());
        direct.push(checker.clone());
    }
    for checker in &config.disable_checker {
        direct.push("-analyzer-disable-checker".to_owned());
        direct.push(checker.clone());
    }

    let mut wrapped = Vec::with_capacity(direct.len() * 2);
    for argument in direct {
        wrapped.push("-Xclang".to_owned());
        wrapped.push(argument);
    }
    wrapped
}
