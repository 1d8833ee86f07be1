//! Names used on the wire by pump-history exports.
//!
//! Events arrive as JSON objects with heterogeneous optional fields; only
//! `_type` is guaranteed. Field lookups are presence-based, so the
//! constants below are the single place these strings are spelled.

/// Field names recognized in a pump-history event object.
pub mod field {
    /// Event classification tag. The only required field.
    pub const TYPE: &str = "_type";
    /// Insulin units for a bolus-type event.
    pub const AMOUNT: &str = "amount";
    /// Marks a bolus as an automated micro-bolus.
    pub const IS_SMB: &str = "isSMB";
    /// Basal rate for a temporary-basal event.
    pub const RATE: &str = "rate";
    /// Duration of a temporary-basal segment. The key really does contain
    /// a space and parentheses.
    pub const DURATION_MIN: &str = "duration (min)";
}

/// `_type` tags carried by the pump history stream.
///
/// Only [`PUMP_SUSPEND`](event_type::PUMP_SUSPEND) and
/// [`PUMP_RESUME`](event_type::PUMP_RESUME) affect the summary; the rest
/// are listed so callers name event types consistently.
pub mod event_type {
    pub const BOLUS: &str = "Bolus";
    pub const SMB: &str = "SMB";
    pub const EXTERNAL_INSULIN: &str = "External Insulin";
    pub const TEMP_BASAL: &str = "TempBasal";
    pub const TEMP_BASAL_DURATION: &str = "TempBasalDuration";
    pub const PUMP_SUSPEND: &str = "PumpSuspend";
    pub const PUMP_RESUME: &str = "PumpResume";
    pub const PUMP_ALARM: &str = "PumpAlarm";
    pub const REWIND: &str = "Rewind";
    pub const PRIME: &str = "Prime";
}
