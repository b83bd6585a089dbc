use anyhow::{anyhow, Result};

use crate::utils::datetime;
use crate::utils::logging;

/// Validates a `shiftdate` / `date` request field: strict `YYYY-MM-DD`
/// shape and a real calendar date.
pub fn validate_shift_date(value: &str) -> Result<()> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return fail("shiftdate", value, "Shift date cannot be empty");
    }

    if !datetime::is_date_shape(trimmed) {
        return fail("shiftdate", value, "Shift date must be in YYYY-MM-DD format");
    }

    if datetime::parse_civil(trimmed).is_err() {
        return fail("shiftdate", value, "Shift date is not a valid calendar date");
    }

    Ok(())
}

/// Validates a civil time field (`starttime`, `endtime`, `start_time`,
/// `end_time`) against the accepted wall-clock shapes.
pub fn validate_civil_time_field(field_name: &str, value: &str) -> Result<()> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return fail(field_name, value, &format!("{} cannot be empty", field_name));
    }

    if !datetime::matches_accepted_shape(trimmed) {
        return fail(
            field_name,
            value,
            &format!(
                "{} must be 'YYYY-MM-DD', 'YYYY-MM-DD HH:mm' or 'YYYY-MM-DD HH:mm:ss'",
                field_name
            ),
        );
    }

    if datetime::parse_civil(trimmed).is_err() {
        return fail(
            field_name,
            value,
            &format!("{} is not a valid date/time", field_name),
        );
    }

    Ok(())
}

/// Validates that a shift or timesheet entry ends after it starts.
///
/// Both values must be accepted wall-clock strings. Overnight ranges that
/// cross midnight are valid as long as the end date is the later one.
pub fn validate_time_range(start: &str, end: &str) -> Result<()> {
    validate_civil_time_field("starttime", start)?;
    validate_civil_time_field("endtime", end)?;

    let start_civil = datetime::parse_civil(start)
        .map_err(|_| anyhow!("starttime is not a valid date/time"))?;
    let end_civil = datetime::parse_civil(end)
        .map_err(|_| anyhow!("endtime is not a valid date/time"))?;

    if end_civil <= start_civil {
        return fail(
            "endtime",
            end,
            "Shift end time must be after the start time",
        );
    }

    Ok(())
}

fn fail(field: &str, value: &str, message: &str) -> Result<()> {
    logging::log_validation_error(field, value, message);
    Err(anyhow!("{}", message))
}
