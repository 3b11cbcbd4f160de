use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::errors::DecodeError;

/// Sub-second rounding between the three wire serializations of one
/// timestamp is expected (the calendar forms carry whole seconds only) and
/// reconciled silently. Anything beyond this is a data-integrity anomaly.
pub(crate) const RECONCILE_TOLERANCE_MS: i64 = 1000;

/// One logical timestamp recovered from up to three parallel wire
/// serializations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ReconciledInstant {
    pub(crate) canonical: DateTime<Utc>,
    /// True if two parsed representations disagreed by more than
    /// `RECONCILE_TOLERANCE_MS`.
    pub(crate) mismatch: bool,
}

/// Reconcile the three parallel serializations of one timestamp field.
///
/// Returns `Ok(None)` when all three are absent (the triple itself is
/// absent; the caller decides whether that is legal for the field). Each
/// present representation is parsed independently; a malformed one does not
/// fail the triple as long as at least one parses. Zero parseable
/// representations is a hard decode error.
///
/// The canonical instant is the epoch-milliseconds value when it parses (it
/// is the least format-ambiguous representation), else the ISO-like value,
/// else the zone-local value.
pub(crate) fn reconcile_date_fields(
    field: &str,
    iso: Option<&str>,
    epoch_ms: Option<&str>,
    zone_local: Option<&str>,
) -> Result<Option<ReconciledInstant>, DecodeError> {
    if iso.is_none() && epoch_ms.is_none() && zone_local.is_none() {
        return Ok(None);
    }
    let from_epoch = epoch_ms.and_then(parse_epoch_ms);
    let from_iso = iso.and_then(parse_zoned_datetime);
    let from_zone_local = zone_local.and_then(parse_zoned_datetime);

    let canonical = from_epoch
        .or(from_iso)
        .or(from_zone_local)
        .ok_or_else(|| DecodeError::UnparseableTimestamp(field.to_string()))?;

    let parsed: Vec<DateTime<Utc>> = [from_epoch, from_iso, from_zone_local]
        .into_iter()
        .flatten()
        .collect();
    let mismatch = parsed.iter().any(|a| {
        parsed
            .iter()
            .any(|b| (*a - *b).num_milliseconds().abs() > RECONCILE_TOLERANCE_MS)
    });

    Ok(Some(ReconciledInstant {
        canonical,
        mismatch,
    }))
}

fn parse_epoch_ms(value: &str) -> Option<DateTime<Utc>> {
    let ms = value.trim().parse::<i64>().ok()?;
    Utc.timestamp_millis_opt(ms).single()
}

/// Parses the platform's calendar forms, e.g. `2021-03-01 07:00:00 Etc/GMT`
/// or `2021-01-01 00:00:00 America/Los_Angeles`, resolving the trailing
/// IANA zone name through the tz database. Proper RFC 3339 stamps are
/// accepted as well ("a date-time format similar to the ISO 8601").
fn parse_zoned_datetime(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value.trim()) {
        return Some(datetime.with_timezone(&Utc));
    }
    let (calendar, zone_name) = value.trim().rsplit_once(' ')?;
    let zone: Tz = zone_name.parse().ok()?;
    let naive = NaiveDateTime::parse_from_str(calendar, "%Y-%m-%d %H:%M:%S").ok()?;
    match naive.and_local_timezone(zone) {
        LocalResult::Single(datetime) => Some(datetime.with_timezone(&Utc)),
        // DST fold; the epoch-ms representation dominates anyway.
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => None,
    }
}
