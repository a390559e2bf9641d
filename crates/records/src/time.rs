use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use chrono::DateTime;
use chrono::SecondsFormat;
use chrono::Utc;

use crate::error::RecordError;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_DAY: i64 = 24 * 60 * SECONDS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = SECONDS_PER_DAY * 1000;

/// An elapsed race time placed on the reference date `1970-01-01T00:00:00Z`.
///
/// Only the time-of-day component is meaningful. The value is always
/// non-negative and less than 24 hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct RaceTime(DateTime<Utc>);

impl RaceTime {
    /// Creates a race time from the milliseconds elapsed since the reference
    /// date. Returns `None` when the value falls outside of `[0, 24h)`.
    pub fn from_millis(millis: i64) -> Option<RaceTime> {
        if !(0..MILLIS_PER_DAY).contains(&millis) {
            return None;
        }

        DateTime::from_timestamp_millis(millis).map(RaceTime)
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Formats the time as `MM:SS`, with both parts zero-padded. Times of an
    /// hour or more keep counting minutes, so `75:05` is not folded to `15:05`.
    pub fn minutes_seconds(&self) -> String {
        self.to_string()
    }

    /// Formats the underlying timestamp as ISO 8601 with milliseconds,
    /// e.g. `1970-01-01T00:36:15.000Z`.
    pub fn to_iso_string(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl FromStr for RaceTime {
    type Err = RecordError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || RecordError::InvalidTime {
            value: value.to_owned(),
        };

        let mut parts = value.split(':');
        let (Some(minutes), Some(seconds), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let minutes = parse_digits(minutes).ok_or_else(invalid)?;
        let seconds = parse_digits(seconds).ok_or_else(invalid)?;

        if seconds >= SECONDS_PER_MINUTE {
            return Err(invalid());
        }

        let total = minutes
            .checked_mul(SECONDS_PER_MINUTE)
            .and_then(|m| m.checked_add(seconds))
            .filter(|total| *total < SECONDS_PER_DAY)
            .ok_or_else(invalid)?;

        RaceTime::from_millis(total * 1000).ok_or_else(invalid)
    }
}

impl Display for RaceTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let seconds = self.0.timestamp();
        let (minutes, seconds) = (seconds / SECONDS_PER_MINUTE, seconds % SECONDS_PER_MINUTE);

        write!(f, "{minutes:02}:{seconds:02}")
    }
}

fn parse_digits(part: &str) -> Option<i64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    part.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;

    #[test]
    fn parse_minutes_and_seconds() {
        let time: RaceTime = "36:15".parse().unwrap();
        let expected = Utc.with_ymd_and_hms(1970, 1, 1, 0, 36, 15).unwrap();

        assert_eq!(expected, time.timestamp());
        assert_eq!((36 * 60 + 15) * 1000, time.millis());
    }

    #[test]
    fn single_digit_minutes_are_accepted() {
        let time: RaceTime = "5:07".parse().unwrap();

        assert_eq!("05:07", time.minutes_seconds());
    }

    #[test]
    fn times_of_an_hour_or_more_keep_their_minutes() {
        let time: RaceTime = "75:05".parse().unwrap();

        assert_eq!("75:05", time.minutes_seconds());
        assert_eq!("1439:59", "1439:59".parse::<RaceTime>().unwrap().to_string());
    }

    #[test]
    fn format_as_iso_timestamp() {
        let time: RaceTime = "36:15".parse().unwrap();

        assert_eq!("1970-01-01T00:36:15.000Z", time.to_iso_string());
    }

    #[test]
    fn iso_timestamp_parses_back_to_the_same_time() {
        let time: RaceTime = "39:23".parse().unwrap();
        let parsed = DateTime::parse_from_rfc3339(&time.to_iso_string())
            .unwrap()
            .with_timezone(&Utc);

        assert_eq!(time.timestamp(), parsed);
    }

    #[test]
    fn reject_malformed_times() {
        for value in ["", "36", "36:", ":15", "36:15:00", "3a:15", "36:-1", "36:60", "+3:15"] {
            let result = value.parse::<RaceTime>();

            assert_eq!(
                Err(RecordError::InvalidTime {
                    value: value.to_owned()
                }),
                result,
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn reject_times_of_a_day_or_more() {
        assert!("1440:00".parse::<RaceTime>().is_err());
        assert!("1439:59".parse::<RaceTime>().is_ok());
    }

    #[test]
    fn from_millis_respects_bounds() {
        assert!(RaceTime::from_millis(-1).is_none());
        assert!(RaceTime::from_millis(MILLIS_PER_DAY).is_none());
        assert_eq!(Some(0), RaceTime::from_millis(0).map(|t| t.millis()));
    }

    #[test]
    fn times_order_by_duration() {
        let fast: RaceTime = "36:50".parse().unwrap();
        let slow: RaceTime = "39:50".parse().unwrap();

        assert!(fast < slow);
    }
}
