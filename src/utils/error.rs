use thiserror::Error;

/// Errors produced while converting between wall-clock strings and UTC instants.
///
/// Malformed user input is an expected case, so conversions return these as
/// values instead of panicking. Callers decide whether a failure rejects the
/// request or degrades to a placeholder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The input string matches none of the accepted date/time shapes,
    /// or matches a shape but is not a real calendar date/time.
    #[error("Unrecognized date/time format: '{input}'")]
    InvalidFormat {
        /// The rejected input, as received.
        input: String,
    },

    /// No instant was available to format, usually propagated from an
    /// earlier failed parse. Callers must treat this as "no value to store".
    #[error("No instant available to format")]
    InvalidInstant,

    /// The wall-clock time never occurs in the reference zone and gap
    /// resolution could not find a surrounding offset.
    #[error("Local time {local} does not exist in {zone}")]
    NonexistentLocalTime {
        /// The wall-clock time that falls inside the transition gap.
        local: String,
        /// IANA name of the reference zone.
        zone: String,
    },
}

/// Result alias for conversion operations.
pub type ConversionResult<T> = std::result::Result<T, ConversionError>;
