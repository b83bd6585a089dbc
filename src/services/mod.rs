/// Wall-clock to UTC conversion for shifts and timesheets
pub mod timezone;
