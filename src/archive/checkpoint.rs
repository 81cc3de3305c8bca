//! Daily publication checkpoints and snapshot resolution.

use anyhow::{bail, Result};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};

/// One daily outlook issuance time (UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    /// Zero-padded HHMM as it appears in archive file names
    pub label: &'static str,
    pub hour: u32,
    pub minute: u32,
}

impl Checkpoint {
    const fn new(label: &'static str, hour: u32, minute: u32) -> Self {
        Self {
            label,
            hour,
            minute,
        }
    }

    /// Look up a checkpoint by its file name label
    pub fn from_label(label: &str) -> Option<Checkpoint> {
        CHECKPOINTS.iter().copied().find(|c| c.label == label)
    }

    fn at_or_before(&self, hour: u32, minute: u32) -> bool {
        (self.hour, self.minute) <= (hour, minute)
    }
}

/// Checkpoints in issuance order. Resolution keeps the last match.
pub const CHECKPOINTS: [Checkpoint; 5] = [
    Checkpoint::new("0100", 1, 0),
    Checkpoint::new("1200", 12, 0),
    Checkpoint::new("1300", 13, 0),
    Checkpoint::new("1630", 16, 30),
    Checkpoint::new("2000", 20, 0),
];

/// A single archived outlook: issuance date plus checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub date: NaiveDate,
    pub checkpoint: Checkpoint,
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}Z", self.date, self.checkpoint.label)
    }
}

/// Find the latest outlook published at or before `time`.
///
/// Times before the first checkpoint of the day (including midnight) fall
/// back to the previous day's final issuance.
pub fn resolve_snapshot<Tz: TimeZone>(time: &DateTime<Tz>) -> Snapshot {
    let utc = time.with_timezone(&Utc);
    let (hour, minute) = (utc.hour(), utc.minute());

    let same_day = CHECKPOINTS
        .iter()
        .filter(|c| c.at_or_before(hour, minute))
        .last();

    match same_day {
        Some(checkpoint) => Snapshot {
            date: utc.date_naive(),
            checkpoint: *checkpoint,
        },
        None => Snapshot {
            date: (utc - Duration::days(1)).date_naive(),
            checkpoint: CHECKPOINTS[CHECKPOINTS.len() - 1],
        },
    }
}

/// Parse an ISO-8601 query time.
///
/// Offsets are honored; naive datetimes and bare dates are taken as UTC.
pub fn parse_query_time(s: &str) -> Result<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
    }

    bail!("Invalid ISO-8601 date '{}'", s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_labels_match_times() {
        for checkpoint in CHECKPOINTS {
            assert_eq!(
                checkpoint.label,
                format!("{:02}{:02}", checkpoint.hour, checkpoint.minute)
            );
        }
    }

    #[test]
    fn test_every_minute_of_the_day() {
        for h in 0..24 {
            for m in 0..60 {
                let snapshot = resolve_snapshot(&utc(2023, 5, 15, h, m));
                let expected = CHECKPOINTS
                    .iter()
                    .filter(|c| (c.hour, c.minute) <= (h, m))
                    .last();

                match expected {
                    Some(c) => {
                        assert_eq!(snapshot.checkpoint, *c, "at {:02}:{:02}", h, m);
                        assert_eq!(snapshot.date, NaiveDate::from_ymd_opt(2023, 5, 15).unwrap());
                    }
                    None => {
                        assert_eq!(h, 0);
                        assert_eq!(snapshot.checkpoint.label, "2000");
                        assert_eq!(snapshot.date, NaiveDate::from_ymd_opt(2023, 5, 14).unwrap());
                    }
                }
            }
        }
    }

    #[test]
    fn test_minute_compared_after_hour() {
        // 17:05 is past 16:30 even though its minute is smaller
        assert_eq!(resolve_snapshot(&utc(2023, 5, 15, 17, 5)).checkpoint.label, "1630");
        assert_eq!(resolve_snapshot(&utc(2023, 5, 15, 12, 5)).checkpoint.label, "1200");
        assert_eq!(resolve_snapshot(&utc(2023, 5, 15, 16, 29)).checkpoint.label, "1300");
        assert_eq!(resolve_snapshot(&utc(2023, 5, 15, 23, 59)).checkpoint.label, "2000");
    }

    #[test]
    fn test_midnight_rolls_back_across_year() {
        let snapshot = resolve_snapshot(&utc(2024, 1, 1, 0, 0));
        assert_eq!(snapshot.date, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        assert_eq!(snapshot.checkpoint.label, "2000");

        let leap = resolve_snapshot(&utc(2024, 3, 1, 0, 0));
        assert_eq!(leap.date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_offset_converted_to_utc() {
        // 07:30 CDT is 12:30Z
        let cdt = FixedOffset::west_opt(5 * 3600).unwrap();
        let local = cdt.with_ymd_and_hms(2023, 5, 15, 7, 30, 0).unwrap();
        let snapshot = resolve_snapshot(&local);
        assert_eq!(snapshot.checkpoint.label, "1200");
        assert_eq!(snapshot.date, NaiveDate::from_ymd_opt(2023, 5, 15).unwrap());
    }

    #[test]
    fn test_parse_query_time_forms() {
        let expected = utc(2023, 5, 15, 12, 5);
        assert_eq!(parse_query_time("2023-05-15T12:05:00Z").unwrap(), expected);
        assert_eq!(parse_query_time("2023-05-15T07:05:00-05:00").unwrap(), expected);
        assert_eq!(parse_query_time("2023-05-15T12:05:00").unwrap(), expected);
        assert_eq!(parse_query_time("2023-05-15 12:05").unwrap(), expected);
        assert_eq!(parse_query_time("2023-05-15").unwrap(), utc(2023, 5, 15, 0, 0));
        assert!(parse_query_time("15/05/2023").is_err());
        assert!(parse_query_time("2023-13-01").is_err());
    }
}
