// Keydyn Timing Analysis
// Flight-time and dwell-time extraction from captured sequences

use indexmap::IndexMap;
use serde::Serialize;
use smallvec::SmallVec;
use std::collections::HashMap;

use crate::record::KeyRecord;

/// Flight times: differences between consecutive press offsets, in
/// sequence order.
///
/// Release records are ignored; a sequence with fewer than two presses
/// has no flight samples. Differences clamp at zero if offsets are ever
/// out of order.
pub fn flight_times(records: &[KeyRecord]) -> Vec<u64> {
    let presses: Vec<u64> = records
        .iter()
        .filter(|r| r.is_press())
        .map(KeyRecord::offset_ms)
        .collect();

    presses
        .windows(2)
        .map(|pair| pair[1].saturating_sub(pair[0]))
        .collect()
}

/// Dwell times: for each press, the time until the next release of the
/// same key identifier.
///
/// Press and release records are independent entries, so pairing is done
/// by key identity, FIFO per key to tolerate overlapping holds of the
/// same key (auto-repeat). Unmatched presses and releases with no
/// pending press produce no sample.
pub fn dwell_times(records: &[KeyRecord]) -> Vec<u64> {
    // Pending press offsets per key, oldest first
    let mut pending: HashMap<&str, SmallVec<[u64; 2]>> = HashMap::new();
    let mut dwells = Vec::new();

    for record in records {
        match record {
            KeyRecord::Press { key, press_ms } => {
                pending.entry(key.as_str()).or_default().push(*press_ms);
            }
            KeyRecord::Release { key, up_ms } => {
                if let Some(presses) = pending.get_mut(key.as_str()) {
                    if !presses.is_empty() {
                        let press_ms = presses.remove(0);
                        dwells.push(up_ms.saturating_sub(press_ms));
                    }
                }
            }
        }
    }

    dwells
}

/// Dwell times grouped by key, preserving first-seen key order.
pub fn dwell_by_key(records: &[KeyRecord]) -> IndexMap<String, Vec<u64>> {
    let mut pending: HashMap<&str, SmallVec<[u64; 2]>> = HashMap::new();
    let mut grouped: IndexMap<String, Vec<u64>> = IndexMap::new();

    for record in records {
        match record {
            KeyRecord::Press { key, press_ms } => {
                pending.entry(key.as_str()).or_default().push(*press_ms);
            }
            KeyRecord::Release { key, up_ms } => {
                if let Some(presses) = pending.get_mut(key.as_str()) {
                    if !presses.is_empty() {
                        let press_ms = presses.remove(0);
                        grouped
                            .entry(key.clone())
                            .or_default()
                            .push(up_ms.saturating_sub(press_ms));
                    }
                }
            }
        }
    }

    grouped
}

/// Arithmetic mean of a sample series, or None if it is empty
pub fn mean_ms(samples: &[u64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<u64>() as f64 / samples.len() as f64)
}

/// Flight and dwell series for one captured sequence, with means.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimingSummary {
    pub flight_times: Vec<u64>,
    pub dwell_times: Vec<u64>,
    pub mean_flight_ms: Option<f64>,
    pub mean_dwell_ms: Option<f64>,
}

/// Extract the full timing summary from a captured sequence
pub fn summarize(records: &[KeyRecord]) -> TimingSummary {
    let flight_times = flight_times(records);
    let dwell_times = dwell_times(records);
    let mean_flight_ms = mean_ms(&flight_times);
    let mean_dwell_ms = mean_ms(&dwell_times);

    TimingSummary {
        flight_times,
        dwell_times,
        mean_flight_ms,
        mean_dwell_ms,
    }
}
