//! The weekly bus departure table.
//!
//! The table is configuration data, supplied as JSON mapping hour-of-day to
//! an ascending list of departure minutes:
//!
//! ```json
//! { "7": [12, 32, 52], "8": [15, 45] }
//! ```
//!
//! It is validated once when loaded and immutable afterwards.

use std::collections::BTreeMap;
use std::path::Path;

/// Errors from loading or validating a departure table.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// Reading the schedule file failed.
    #[error("failed to read schedule: {0}")]
    Io(#[from] std::io::Error),

    /// The schedule JSON could not be parsed.
    #[error("failed to parse schedule: {0}")]
    Parse(#[from] serde_json::Error),

    /// An hour key outside 0-23.
    #[error("hour {hour} out of range (expected 0-23)")]
    HourOutOfRange { hour: u8 },

    /// A minute value outside 0-59.
    #[error("minute {minute} out of range in hour {hour} (expected 0-59)")]
    MinuteOutOfRange { hour: u8, minute: u8 },

    /// Minute lists must be strictly ascending; the selector does not
    /// re-sort them.
    #[error("minutes for hour {hour} are not strictly ascending")]
    MinutesNotAscending { hour: u8 },

    /// An hour with no departures should be left out of the table
    /// entirely.
    #[error("empty minute list for hour {hour}")]
    MinutesEmpty { hour: u8 },
}

/// A weekly-shaped departure table: hour-of-day mapped to departure minutes.
///
/// Hours iterate in ascending order. Minute lists are non-empty and strictly
/// ascending, enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureTable {
    hours: BTreeMap<u8, Vec<u8>>,
}

impl DepartureTable {
    /// Create a table from raw entries, validating every hour and minute.
    pub fn new(hours: BTreeMap<u8, Vec<u8>>) -> Result<Self, ScheduleError> {
        for (&hour, minutes) in &hours {
            if hour > 23 {
                return Err(ScheduleError::HourOutOfRange { hour });
            }
            if minutes.is_empty() {
                return Err(ScheduleError::MinutesEmpty { hour });
            }
            for &minute in minutes {
                if minute > 59 {
                    return Err(ScheduleError::MinuteOutOfRange { hour, minute });
                }
            }
            if minutes.windows(2).any(|w| w[0] >= w[1]) {
                return Err(ScheduleError::MinutesNotAscending { hour });
            }
        }

        Ok(Self { hours })
    }

    /// Parse a table from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, ScheduleError> {
        let hours: BTreeMap<u8, Vec<u8>> = serde_json::from_str(json)?;
        Self::new(hours)
    }

    /// Load a table from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Iterate over `(hour, minutes)` entries in ascending hour order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[u8])> {
        self.hours.iter().map(|(&h, m)| (h, m.as_slice()))
    }

    /// Total number of scheduled departures across the day.
    pub fn len(&self) -> usize {
        self.hours.values().map(Vec::len).sum()
    }

    /// Whether the table has no departures at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn table(entries: &[(u8, &[u8])]) -> Result<DepartureTable, ScheduleError> {
        DepartureTable::new(
            entries
                .iter()
                .map(|&(h, m)| (h, m.to_vec()))
                .collect::<BTreeMap<_, _>>(),
        )
    }

    #[test]
    fn valid_table() {
        let t = table(&[(7, &[12, 32, 52]), (8, &[15, 45])]).unwrap();
        assert_eq!(t.len(), 5);
        assert!(!t.is_empty());

        let hours: Vec<u8> = t.iter().map(|(h, _)| h).collect();
        assert_eq!(hours, vec![7, 8]);
    }

    #[test]
    fn rejects_hour_out_of_range() {
        let err = table(&[(24, &[0])]).unwrap_err();
        assert!(matches!(err, ScheduleError::HourOutOfRange { hour: 24 }));
    }

    #[test]
    fn rejects_minute_out_of_range() {
        let err = table(&[(9, &[0, 60])]).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::MinuteOutOfRange { hour: 9, minute: 60 }
        ));
    }

    #[test]
    fn rejects_unsorted_minutes() {
        let err = table(&[(9, &[30, 15])]).unwrap_err();
        assert!(matches!(err, ScheduleError::MinutesNotAscending { hour: 9 }));
    }

    #[test]
    fn rejects_duplicate_minutes() {
        let err = table(&[(9, &[15, 15])]).unwrap_err();
        assert!(matches!(err, ScheduleError::MinutesNotAscending { hour: 9 }));
    }

    #[test]
    fn rejects_empty_minute_list() {
        let err = table(&[(9, &[])]).unwrap_err();
        assert!(matches!(err, ScheduleError::MinutesEmpty { hour: 9 }));
    }

    #[test]
    fn parse_from_json() {
        let t = DepartureTable::from_json(r#"{"6": [32, 52], "21": [15]}"#).unwrap();
        assert_eq!(t.len(), 3);

        let hours: Vec<u8> = t.iter().map(|(h, _)| h).collect();
        assert_eq!(hours, vec![6, 21]);
    }

    #[test]
    fn parse_invalid_json() {
        assert!(matches!(
            DepartureTable::from_json("not json"),
            Err(ScheduleError::Parse(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"10": [0, 30]}}"#).unwrap();

        let t = DepartureTable::load(file.path()).unwrap();
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn load_missing_file() {
        assert!(matches!(
            DepartureTable::load("/nonexistent/schedule.json"),
            Err(ScheduleError::Io(_))
        ));
    }
}
