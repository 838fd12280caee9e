use crate::cli::commands::{error_mode, has_headers, input_path, output_path};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::schedule::{ScheduleLogic, ScheduleOptions};
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schedule {
        input,
        start,
        end,
        tie_break,
        out,
    } = cmd
    {
        let year = cfg.reference_year(input.year, start.as_deref())?;
        let (start, end) = cfg.term_bounds(start.as_deref(), end.as_deref())?;

        ScheduleLogic::run(&ScheduleOptions {
            input: input_path(input),
            output: output_path(out),
            format: out.format,
            start,
            end,
            year,
            tie_break: tie_break.unwrap_or(cfg.tie_break),
            has_headers: has_headers(input, cfg),
            error_mode: error_mode(input, cfg),
            force: out.force,
        })?;
    }
    Ok(())
}
