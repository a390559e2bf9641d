use serde::Deserialize;

use crate::category::Category;
use crate::error::RecordError;
use crate::time::RaceTime;

/// A race record as published by the remote dataset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawRecord {
    pub place: RawPlace,
    pub time: String,
    pub year: i32,
    pub name: String,
    pub nationality: String,
    #[serde(default)]
    pub doping: String,
    /// The source of the allegation. It is not carried onto [RaceRecord].
    #[serde(rename = "URL", default)]
    pub url: Option<String>,
}

/// The place is published as a numeric string, although some copies
/// of the dataset carry a plain JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawPlace {
    Number(u32),
    Text(String),
}

impl RawPlace {
    fn rank(&self) -> Result<u32, RecordError> {
        match self {
            RawPlace::Number(place) => Ok(*place),
            RawPlace::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| RecordError::InvalidPlace {
                    value: text.clone(),
                }),
        }
    }
}

/// A normalized race record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceRecord {
    place: u32,
    name: String,
    nationality: String,
    year: i32,
    time: RaceTime,
    doping_allegation: String,
}

impl RaceRecord {
    pub fn place(&self) -> u32 {
        self.place
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nationality(&self) -> &str {
        &self.nationality
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn time(&self) -> RaceTime {
        self.time
    }

    /// The allegation detail; empty when the rider has none.
    pub fn doping_allegation(&self) -> &str {
        &self.doping_allegation
    }

    pub fn category(&self) -> Category {
        Category::of(&self.doping_allegation)
    }
}

impl TryFrom<RawRecord> for RaceRecord {
    type Error = RecordError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let place = raw.place.rank()?;
        let time: RaceTime = raw.time.parse()?;

        Ok(Self {
            place,
            name: raw.name,
            nationality: raw.nationality,
            year: raw.year,
            time,
            doping_allegation: raw.doping,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(place: &str, time: &str, doping: &str) -> RawRecord {
        RawRecord {
            place: RawPlace::Text(place.to_owned()),
            time: time.to_owned(),
            year: 2015,
            name: String::from("A"),
            nationality: String::from("USA"),
            doping: doping.to_owned(),
            url: None,
        }
    }

    #[test]
    fn deserialize_published_record() {
        let json = r#"{
            "Time": "36:50",
            "Place": 1,
            "Seconds": 2210,
            "Name": "Marco Pantani",
            "Year": 1995,
            "Nationality": "ITA",
            "Doping": "Alleged drug use during 1995 due to high hematocrit levels",
            "URL": "https://en.wikipedia.org/wiki/Marco_Pantani#Alleged_drug_use"
        }"#;

        let raw: RawRecord = serde_json::from_str(json).unwrap();

        assert_eq!(RawPlace::Number(1), raw.place);
        assert_eq!("36:50", raw.time);
        assert_eq!(1995, raw.year);
        assert!(raw.url.is_some());

        let record = RaceRecord::try_from(raw).unwrap();
        assert_eq!("Marco Pantani", record.name());
        assert_eq!(Category::Allegation, record.category());
    }

    #[test]
    fn deserialize_record_with_string_place_and_no_url() {
        let json = r#"{"Place":"1","Name":"A","Nationality":"USA","Year":2015,"Time":"36:15","Doping":""}"#;

        let raw: RawRecord = serde_json::from_str(json).unwrap();

        assert_eq!(RawPlace::Text(String::from("1")), raw.place);
        assert_eq!(None, raw.url);
    }

    #[test]
    fn normalize_record_without_allegation() {
        let record = RaceRecord::try_from(raw("1", "36:15", "")).unwrap();

        assert_eq!(1, record.place());
        assert_eq!("A", record.name());
        assert_eq!("USA", record.nationality());
        assert_eq!(2015, record.year());
        assert_eq!("1970-01-01T00:36:15.000Z", record.time().to_iso_string());
        assert_eq!(Category::NoAllegation, record.category());
    }

    #[test]
    fn normalize_record_with_allegation() {
        let record = RaceRecord::try_from(raw("3", "37:15", "Confessed")).unwrap();

        assert_eq!(Category::Allegation, record.category());
        assert_eq!("Confessed", record.doping_allegation());
    }

    #[test]
    fn normalization_is_deterministic() {
        let first = RaceRecord::try_from(raw("2", "36:55", "")).unwrap();
        let second = RaceRecord::try_from(raw("2", "36:55", "")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn reject_non_numeric_place() {
        let result = RaceRecord::try_from(raw("first", "36:15", ""));

        assert_eq!(
            Err(RecordError::InvalidPlace {
                value: String::from("first")
            }),
            result
        );
    }

    #[test]
    fn reject_malformed_time() {
        let result = RaceRecord::try_from(raw("1", "36.15", ""));

        assert!(matches!(result, Err(RecordError::InvalidTime { .. })));
    }
}
