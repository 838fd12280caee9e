pub mod calendar;
pub mod meetings;
pub mod merge;
pub mod parser;
pub mod schedule;
pub mod source;

pub use calendar::CalendarLogic;
pub use meetings::{MeetingDayGenerator, MeetingsLogic};
pub use merge::{ScheduleMerger, TieBreak};
pub use parser::{DateRangeParser, ErrorMode};
pub use schedule::ScheduleLogic;
