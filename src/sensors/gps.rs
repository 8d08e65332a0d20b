//! Parser for the composite `gpsData` field, e.g.
//! `"lat:12.9,long:77.5,date:2024-01-01,time:10:00:00"`.

use std::str::FromStr;

/// The sub-field labels a GPS blob may carry. Matching is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpsKey {
    Lat,
    Long,
    Date,
    Time,
}

impl FromStr for GpsKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lat" => Ok(Self::Lat),
            "long" => Ok(Self::Long),
            "date" => Ok(Self::Date),
            "time" => Ok(Self::Time),
            _ => Err(()),
        }
    }
}

/// Values pulled out of a GPS blob. Values are kept verbatim (trimmed); no
/// numeric or calendar validation is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GpsFix {
    pub lat: Option<String>,
    pub long: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

impl GpsFix {
    /// Scans comma-separated `key:value` parts left to right.
    ///
    /// - each part is split on its first `:` only, so `time:10:00:00` keeps
    ///   `10:00:00` as the value
    /// - parts without a `:` and unknown keys are skipped
    /// - a repeated key overwrites the earlier value
    pub fn parse(raw: Option<&str>) -> Self {
        let mut fix = Self::default();

        let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
            return fix;
        };

        for part in raw.split(',') {
            let Some((key, value)) = part.split_once(':') else {
                continue;
            };
            if let Ok(key) = key.trim().parse::<GpsKey>() {
                fix.set(key, value.trim().to_owned());
            }
        }

        fix
    }

    fn set(&mut self, key: GpsKey, value: String) {
        let slot = match key {
            GpsKey::Lat => &mut self.lat,
            GpsKey::Long => &mut self.long,
            GpsKey::Date => &mut self.date,
            GpsKey::Time => &mut self.time,
        };
        *slot = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_owned())
    }

    #[test]
    fn parses_all_four_fields() {
        let fix = GpsFix::parse(Some("lat:12.9,long:77.5,date:2024-01-01,time:10:00:00"));
        assert_eq!(
            fix,
            GpsFix {
                lat: some("12.9"),
                long: some("77.5"),
                date: some("2024-01-01"),
                time: some("10:00:00"),
            }
        );
    }

    #[test]
    fn absent_empty_and_blank_yield_nothing() {
        assert_eq!(GpsFix::parse(None), GpsFix::default());
        assert_eq!(GpsFix::parse(Some("")), GpsFix::default());
        assert_eq!(GpsFix::parse(Some("   ")), GpsFix::default());
    }

    #[test]
    fn last_write_wins() {
        let fix = GpsFix::parse(Some("lat:1,lat:2"));
        assert_eq!(fix.lat, some("2"));
        assert_eq!(fix.long, None);
    }

    #[test]
    fn colonless_parts_and_unknown_keys_are_ignored() {
        assert_eq!(GpsFix::parse(Some("foo,bar:baz,unknown:x")), GpsFix::default());
    }

    #[test]
    fn keys_are_case_insensitive_and_trimmed() {
        let fix = GpsFix::parse(Some(" LAT : 12.9 , Long:77.5"));
        assert_eq!(fix.lat, some("12.9"));
        assert_eq!(fix.long, some("77.5"));
    }

    #[test]
    fn values_are_not_validated() {
        let fix = GpsFix::parse(Some("lat:north-ish,date:yesterday,time:"));
        assert_eq!(fix.lat, some("north-ish"));
        assert_eq!(fix.date, some("yesterday"));
        assert_eq!(fix.time, some(""));
    }

    #[test]
    fn partial_blob_leaves_other_fields_null() {
        let fix = GpsFix::parse(Some("time:23:59:59"));
        assert_eq!(fix.time, some("23:59:59"));
        assert_eq!(fix.lat, None);
        assert_eq!(fix.long, None);
        assert_eq!(fix.date, None);
    }

    #[test]
    fn key_from_str_rejects_unknown_labels() {
        assert_eq!("Time".parse::<GpsKey>(), Ok(GpsKey::Time));
        assert!("altitude".parse::<GpsKey>().is_err());
    }
}
