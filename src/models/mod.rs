pub mod calendar_row;
pub mod date_event;
pub mod meeting_day;
pub mod schedule_row;
pub mod weekday_tag;

pub use calendar_row::CalendarRow;
pub use date_event::DateEvent;
pub use meeting_day::MeetingDay;
pub use schedule_row::ScheduleRow;
pub use weekday_tag::WeekdayTag;
