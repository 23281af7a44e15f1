//! Flatten SenML records into a readings map

use ecosense_core::Readings;
use log::{debug, warn};

use crate::record::SenmlRecord;

/// Collect `n → v` from every record carrying both
///
/// Records are applied in packet order, so a later record with the same name
/// replaces an earlier one. Units and times are dropped.
pub fn extract_readings(records: &[SenmlRecord]) -> Readings {
    let mut readings = Readings::new();

    for (index, record) in records.iter().enumerate() {
        let Some((name, value)) = record.reading() else {
            debug!("Skipping SenML record {} without name and numeric value", index);
            continue;
        };

        if let Some(previous) = readings.insert(name, value) {
            warn!(
                "Duplicate reading '{}' at record {}: {} replaces {}",
                name, index, value, previous
            );
        }
    }

    readings
}
