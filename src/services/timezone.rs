use chrono::offset::LocalResult;
use chrono::{DateTime, Duration, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::config::{Config, DEFAULT_DISPLAY_PLACEHOLDER};
use crate::utils::datetime::{self, CivilDateTime, DisplayPrecision};
use crate::utils::error::{ConversionError, ConversionResult};
use crate::utils::logging;

// Widest historical transition gap is a skipped calendar day (date-line
// changes), so probing back two days always lands before the transition.
const MAX_GAP_PROBE_HOURS: i64 = 48;

/// Bidirectional conversion between wall-clock time in a fixed reference
/// timezone and UTC instants, plus display formatting.
///
/// Shift and timesheet handlers parse user-supplied civil strings through
/// this service, persist the resulting UTC instants, and render them back as
/// local strings on read. Every operation is a pure function of its inputs;
/// the service holds no mutable state and is safe to share across requests.
///
/// Daylight-saving transitions are resolved deterministically:
/// - a wall time inside a spring-forward gap is shifted forward by the width
///   of the gap (`02:30` on a one-hour gap day becomes `03:30`);
/// - a wall time inside a fall-back overlap resolves to its first
///   occurrence, the earlier UTC instant.
///
/// Both cases are logged as `DST_ANOMALY` events.
#[derive(Debug, Clone)]
pub struct TimeConversionService {
    reference_zone: Tz,
    placeholder: String,
}

impl TimeConversionService {
    /// Creates a service for the given reference zone with the default
    /// display placeholder.
    pub fn new(reference_zone: Tz) -> Self {
        Self {
            reference_zone,
            placeholder: DEFAULT_DISPLAY_PLACEHOLDER.to_string(),
        }
    }

    /// Creates a service from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            reference_zone: config.reference_timezone,
            placeholder: config.display_placeholder.clone(),
        }
    }

    /// The IANA zone all civil input is interpreted in.
    pub fn reference_zone(&self) -> Tz {
        self.reference_zone
    }

    /// Parses a civil wall-clock string into the UTC instant to store.
    ///
    /// Accepts `YYYY-MM-DD` (midnight), `YYYY-MM-DD HH:mm` and
    /// `YYYY-MM-DD HH:mm:ss`, interpreted in the reference zone. Other
    /// input gets a best-effort ISO 8601 parse; an embedded offset wins
    /// over the reference zone. Malformed input yields
    /// [`ConversionError::InvalidFormat`], never a panic.
    pub fn parse_civil_to_instant(&self, text: &str) -> ConversionResult<DateTime<Utc>> {
        match datetime::parse_civil(text) {
            Ok(civil) => self.civil_to_instant(civil),
            Err(err) => DateTime::parse_from_rfc3339(text.trim())
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|_| {
                    logging::log_conversion_error(
                        text,
                        self.reference_zone.name(),
                        "unrecognized format",
                    );
                    err
                }),
        }
    }

    /// Resolves a wall-clock value in the reference zone to a UTC instant,
    /// applying the documented gap and overlap policy.
    pub fn civil_to_instant(&self, civil: CivilDateTime) -> ConversionResult<DateTime<Utc>> {
        match self.reference_zone.from_local_datetime(&civil.naive()) {
            LocalResult::Single(local) => Ok(local.with_timezone(&Utc)),
            LocalResult::Ambiguous(first, _) => {
                // Fall-back overlap: the wall time occurs twice; take the
                // first occurrence so repeated saves pick the same instant.
                let instant = first.with_timezone(&Utc);
                logging::log_dst_anomaly(
                    "overlap",
                    self.reference_zone.name(),
                    &civil.to_string(),
                    &instant.format(datetime::STORAGE_FORMAT).to_string(),
                );
                Ok(instant)
            }
            LocalResult::None => self.resolve_gap(civil),
        }
    }

    // Spring-forward gap: the wall time never occurs in the reference zone.
    // Interpreting it with the pre-transition offset shifts it forward by
    // exactly the width of the gap.
    fn resolve_gap(&self, civil: CivilDateTime) -> ConversionResult<DateTime<Utc>> {
        let mut probe = civil.naive();
        for _ in 0..MAX_GAP_PROBE_HOURS {
            probe = probe - Duration::hours(1);
            if let Some(before) = self.reference_zone.from_local_datetime(&probe).earliest() {
                let offset = Duration::seconds(i64::from(before.offset().fix().local_minus_utc()));
                let instant = Utc.from_utc_datetime(&(civil.naive() - offset));
                logging::log_dst_anomaly(
                    "gap",
                    self.reference_zone.name(),
                    &civil.to_string(),
                    &instant.format(datetime::STORAGE_FORMAT).to_string(),
                );
                return Ok(instant);
            }
        }
        Err(ConversionError::NonexistentLocalTime {
            local: civil.to_string(),
            zone: self.reference_zone.name().to_string(),
        })
    }

    /// Formats an instant as the canonical UTC storage string
    /// (`YYYY-MM-DD HH:mm:ss`, no offset marker).
    ///
    /// The storage column carries no zone information of its own; the stored
    /// string IS UTC. A missing instant yields
    /// [`ConversionError::InvalidInstant`] so callers store no value instead
    /// of crashing.
    pub fn format_instant_for_storage(instant: Option<DateTime<Utc>>) -> ConversionResult<String> {
        let instant = instant.ok_or(ConversionError::InvalidInstant)?;
        Ok(instant.format(datetime::STORAGE_FORMAT).to_string())
    }

    /// Re-interprets a stored UTC string as an instant. Inverse of
    /// [`Self::format_instant_for_storage`]; only the strict storage shape
    /// is accepted.
    pub fn parse_utc_storage(&self, text: &str) -> ConversionResult<DateTime<Utc>> {
        let trimmed = text.trim();
        if !datetime::is_seconds_shape(trimmed) {
            return Err(ConversionError::InvalidFormat {
                input: text.to_string(),
            });
        }
        NaiveDateTime::parse_from_str(trimmed, datetime::STORAGE_FORMAT)
            .map(|naive| Utc.from_utc_datetime(&naive))
            .map_err(|_| ConversionError::InvalidFormat {
                input: text.to_string(),
            })
    }

    /// Converts a stored UTC instant to the wall-clock date/time in the
    /// reference zone.
    ///
    /// The offset is determined by the zone's rules for that specific
    /// instant, so winter instants render with the standard offset and
    /// summer instants with the daylight-saving offset.
    pub fn instant_to_civil(&self, instant: DateTime<Utc>) -> CivilDateTime {
        CivilDateTime::new(instant.with_timezone(&self.reference_zone).naive_local())
    }

    /// Formats an instant for outbound responses and email bodies.
    ///
    /// A missing instant renders as the configured placeholder rather than
    /// a literal `null`, so template output stays presentable.
    pub fn format_for_display(
        &self,
        instant: Option<DateTime<Utc>>,
        precision: DisplayPrecision,
    ) -> String {
        match instant {
            Some(instant) => self.instant_to_civil(instant).format(precision),
            None => self.placeholder.clone(),
        }
    }
}
