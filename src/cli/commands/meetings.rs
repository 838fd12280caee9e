use crate::cli::commands::output_path;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::meetings::{MeetingsLogic, MeetingsOptions};
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Meetings { start, end, out } = cmd {
        let (start, end) = cfg.term_bounds(start.as_deref(), end.as_deref())?;

        MeetingsLogic::run(&MeetingsOptions {
            start,
            end,
            output: output_path(out),
            format: out.format,
            force: out.force,
        })?;
    }
    Ok(())
}
