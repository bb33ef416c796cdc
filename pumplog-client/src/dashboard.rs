use pumplog_common::api::RemoteEntry;
use pumplog_common::domain::Side;
use std::collections::BTreeMap;

/// Width of one service-time histogram bucket, in seconds.
const BUCKET_SECONDS: u64 = 30;

/// Aggregates for one door/pump combination.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseStat {
    pub fuel_door_position: Side,
    pub pump_side: Side,
    pub count: usize,
    /// Rounded to one decimal.
    pub average_duration: f64,
    pub is_match: bool,
}

/// One service-time histogram bucket: durations in `[start, start + 30)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationBucket {
    pub start: u64,
    pub count: usize,
}

impl DurationBucket {
    pub fn label(&self) -> String {
        format!("{}-{}s", self.start, self.start + BUCKET_SECONDS)
    }
}

/// Read-only statistics over the remote records for the analytics view.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_entries: usize,
    pub average_duration: f64,
    pub match_percentage: f64,
    pub matched_count: usize,
    pub unmatched_count: usize,
    pub time_distribution: Vec<DurationBucket>,
    pub cases: Vec<CaseStat>,
}

impl DashboardStats {
    pub fn from_entries(entries: &[RemoteEntry]) -> Self {
        let total = entries.len();
        let matched_count = entries.iter().filter(|e| e.is_match).count();
        let total_duration: u64 = entries.iter().map(|e| e.duration).sum();

        let (average_duration, match_percentage) = if total == 0 {
            (0.0, 0.0)
        } else {
            (
                total_duration as f64 / total as f64,
                matched_count as f64 / total as f64 * 100.0,
            )
        };

        let mut distribution: BTreeMap<u64, usize> = BTreeMap::new();
        for entry in entries {
            let start = entry.duration / BUCKET_SECONDS * BUCKET_SECONDS;
            *distribution.entry(start).or_default() += 1;
        }
        let time_distribution = distribution
            .into_iter()
            .map(|(start, count)| DurationBucket { start, count })
            .collect();

        let mut cases: BTreeMap<(&str, &str), (Side, Side, usize, u64, bool)> = BTreeMap::new();
        for entry in entries {
            let key = (entry.fuel_door_position.as_str(), entry.pump_side.as_str());
            let case = cases.entry(key).or_insert((
                entry.fuel_door_position,
                entry.pump_side,
                0,
                0,
                entry.is_match,
            ));
            case.2 += 1;
            case.3 += entry.duration;
        }
        let cases = cases
            .into_values()
            .map(|(door, pump, count, duration, is_match)| CaseStat {
                fuel_door_position: door,
                pump_side: pump,
                count,
                average_duration: round1(duration as f64 / count as f64),
                is_match,
            })
            .collect();

        Self {
            total_entries: total,
            average_duration,
            match_percentage,
            matched_count,
            unmatched_count: total - matched_count,
            time_distribution,
            cases,
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
