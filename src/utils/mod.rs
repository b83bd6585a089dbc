/// Civil date/time types, accepted grammars, and parsing helpers
pub mod datetime;
/// Tagged error values for conversion failures
pub mod error;
/// Logging setup and structured log helpers
pub mod logging;
/// Request field validation for shift and timesheet payloads
pub mod validation;
