use crate::cli::commands::{error_mode, has_headers, input_path, output_path};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{CalendarLogic, CalendarOptions};
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { input, start, out } = cmd {
        CalendarLogic::run(&CalendarOptions {
            input: input_path(input),
            output: output_path(out),
            format: out.format,
            year: cfg.reference_year(input.year, start.as_deref())?,
            has_headers: has_headers(input, cfg),
            error_mode: error_mode(input, cfg),
            force: out.force,
        })?;
    }
    Ok(())
}
