use crate::error::HistoryError;
use crate::event::{event_type, field};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Aggregate totals over one pump-history pass.
///
/// All accumulators start at zero and only ever grow. A summary is final
/// once [`aggregate`] returns; nothing mutates it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Insulin units summed across all amount-carrying events.
    pub bolus_total: f64,
    /// Basal rates summed across all rate-carrying events.
    pub rate_total: f64,
    /// Minutes summed across all duration-carrying events.
    pub duration_total: f64,
    /// Boluses flagged `isSMB`. Always a subset of `bolus_count`.
    pub smb_count: u64,
    /// Events carrying an `amount` field, SMB or not.
    pub bolus_count: u64,
    /// Events carrying a `rate` field.
    pub temp_basal_count: u64,
    pub suspend_count: u64,
    pub resume_count: u64,
}

/// One line per accumulator, in report order. Values use the default
/// decimal rendering; no precision is imposed.
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "bolus_total: {}", self.bolus_total)?;
        writeln!(f, "rate_total: {}", self.rate_total)?;
        writeln!(f, "duration_total: {}", self.duration_total)?;
        writeln!(f, "smb_count: {}", self.smb_count)?;
        writeln!(f, "bolus_count: {}", self.bolus_count)?;
        writeln!(f, "temp_basal_count: {}", self.temp_basal_count)?;
        writeln!(f, "suspend_count: {}", self.suspend_count)?;
        writeln!(f, "resume_count: {}", self.resume_count)
    }
}

/// Run the single aggregation pass over a pump-history export.
///
/// Each event contributes independently: an `amount` field feeds the bolus
/// accumulators, a `rate` field the temp-basal ones, a `duration (min)`
/// field the duration total, and the required `_type` tag the
/// suspend/resume counts. The triggers are not mutually exclusive; an
/// event carrying both `amount` and `rate` contributes to both totals.
///
/// An event without `_type` fails the whole pass. No partial summary is
/// returned.
pub fn aggregate(events: &[Value]) -> Result<Summary, HistoryError> {
    let mut summary = Summary::default();

    for (index, event) in events.iter().enumerate() {
        if let Some(amount) = event.get(field::AMOUNT) {
            summary.bolus_total += amount.as_f64().unwrap_or(0.0);
            summary.bolus_count += 1;
            if event
                .get(field::IS_SMB)
                .and_then(Value::as_bool)
                .unwrap_or(false)
            {
                summary.smb_count += 1;
            }
        }

        if let Some(rate) = event.get(field::RATE) {
            summary.rate_total += rate.as_f64().unwrap_or(0.0);
            summary.temp_basal_count += 1;
        }

        if let Some(duration) = event.get(field::DURATION_MIN) {
            summary.duration_total += duration.as_f64().unwrap_or(0.0);
        }

        let ty = event
            .get(field::TYPE)
            .ok_or(HistoryError::MissingField {
                index,
                field: field::TYPE,
            })?;
        match ty.as_str() {
            Some(event_type::PUMP_SUSPEND) => summary.suspend_count += 1,
            Some(event_type::PUMP_RESUME) => summary.resume_count += 1,
            _ => {}
        }
    }

    tracing::debug!(records = events.len(), "aggregated pump history");
    Ok(summary)
}
