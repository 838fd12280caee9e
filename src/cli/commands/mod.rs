pub mod calendar;
pub mod config;
pub mod init;
pub mod meetings;
pub mod schedule;

use crate::cli::parser::{InputArgs, OutputArgs};
use crate::config::Config;
use crate::core::parser::ErrorMode;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

pub(crate) fn output_path(out: &OutputArgs) -> Option<PathBuf> {
    out.output.as_deref().map(expand_tilde)
}

pub(crate) fn input_path(input: &InputArgs) -> PathBuf {
    expand_tilde(&input.input)
}

/// A flag on the command line enables skipping even if the config does not.
pub(crate) fn error_mode(input: &InputArgs, cfg: &Config) -> ErrorMode {
    ErrorMode::from_flag(input.skip_invalid || cfg.skip_invalid)
}

pub(crate) fn has_headers(input: &InputArgs, cfg: &Config) -> bool {
    !input.no_headers && cfg.has_headers
}
