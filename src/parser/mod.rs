pub mod calendar;
pub mod race_page;
