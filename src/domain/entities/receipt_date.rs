use chrono::{DateTime, Utc};

/// One logical receipt timestamp, reconciled from the three parallel wire
/// serializations the platform emits for every date field (ISO-like,
/// epoch-milliseconds, and Pacific-zone-local).
///
/// The raw strings are kept as received so a decoded receipt can be
/// re-serialized with the platform's own vocabulary; `canonical` is the
/// single instant callers should use for any date arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptDate {
    /// The reconciled instant. Taken from the epoch-milliseconds
    /// representation when it parses (it is the least format-ambiguous),
    /// otherwise the best remaining representation.
    pub canonical: DateTime<Utc>,
    /// Raw ISO-like representation, e.g. `2021-03-01 07:00:00 Etc/GMT`.
    pub iso: Option<String>,
    /// Raw epoch-milliseconds representation, e.g. `1616411598724`.
    pub epoch_ms: Option<String>,
    /// Raw zone-local representation, e.g.
    /// `2021-01-01 00:00:00 America/Los_Angeles`.
    pub zone_local: Option<String>,
}

impl ReceiptDate {
    /// The epoch-milliseconds string to write back on re-serialization:
    /// the raw value when present, else regenerated from `canonical` so a
    /// re-serialized receipt always decodes again.
    pub(crate) fn epoch_ms_for_wire(&self) -> String {
        self.epoch_ms
            .clone()
            .unwrap_or_else(|| self.canonical.timestamp_millis().to_string())
    }
}
