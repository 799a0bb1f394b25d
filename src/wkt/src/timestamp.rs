// Copyright 2024 the glue-model authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use time::format_description::well_known::Rfc3339;

const NS_PER_MILLI: i32 = 1_000_000;
const MS: i64 = 1_000;

/// A point in time, independent of any time zone or calendar.
///
/// Stored as a count of seconds and fractions of a second relative to the
/// Unix epoch (1970-01-01T00:00:00Z).
///
/// # JSON Mapping
///
/// On the wire the AWS JSON protocol encodes timestamps as epoch-seconds
/// numbers with millisecond precision. `1596236400.123` encodes 123
/// milliseconds past 23:00 UTC on July 31, 2020. Serialization truncates any
/// sub-millisecond component; deserialization accepts integer or floating
/// point epoch values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub struct Timestamp {
    /// Seconds of UTC time since the Unix epoch. May be negative for
    /// instants before the epoch.
    pub seconds: i64,

    /// Non-negative fractions of a second at nanosecond resolution. Must be
    /// from 0 to 999,999,999 inclusive, counting forward in time even for
    /// negative `seconds`.
    pub nanos: i32,
}

impl Timestamp {
    /// Creates a new [Timestamp] from a seconds and nanos pair.
    pub fn new(seconds: i64, nanos: i32) -> Self {
        Self { seconds, nanos }
    }

    /// Creates a new [Timestamp] from a count of milliseconds since the
    /// Unix epoch.
    pub fn from_millis(millis: i64) -> Self {
        Self {
            seconds: millis.div_euclid(MS),
            nanos: (millis.rem_euclid(MS) as i32) * NS_PER_MILLI,
        }
    }

    /// Returns the timestamp as milliseconds since the Unix epoch,
    /// truncating any sub-millisecond component.
    pub fn as_millis(&self) -> i64 {
        self.seconds * MS + (self.nanos / NS_PER_MILLI) as i64
    }
}

/// Implement [`serde`](::serde) serialization as an epoch-seconds number.
impl serde::ser::Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_f64(self.as_millis() as f64 / MS as f64)
    }
}

struct TimestampVisitor;

impl serde::de::Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a number with seconds since the Unix epoch")
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if !value.is_finite() {
            return Err(E::custom("timestamp must be a finite number"));
        }
        Ok(Timestamp::from_millis((value * MS as f64).round() as i64))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Timestamp::new(value, 0))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Timestamp::new(value as i64, 0))
    }
}

/// Implement [`serde`](::serde) deserialization for timestamps.
impl<'de> serde::de::Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(TimestampVisitor)
    }
}

/// Renders the timestamp in RFC 3339 format for human consumption. The wire
/// format is the epoch number, not this string.
impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const NS: i128 = 1_000_000_000;
        let ts = time::OffsetDateTime::from_unix_timestamp_nanos(
            self.seconds as i128 * NS + self.nanos as i128,
        )
        .map_err(|_| std::fmt::Error)?;
        let formatted = ts.format(&Rfc3339).map_err(|_| std::fmt::Error)?;
        f.write_str(&formatted)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn unix_epoch() {
        let ts = Timestamp::default();
        let got = serde_json::to_value(ts).unwrap();
        assert_eq!(got, json!(0.0));
        let roundtrip = serde_json::from_value::<Timestamp>(got).unwrap();
        assert_eq!(ts, roundtrip);
    }

    #[test]
    fn millisecond_precision() {
        let ts = Timestamp::new(1596236400, 123_000_000);
        let got = serde_json::to_value(ts).unwrap();
        assert_eq!(got, json!(1596236400.123));
        let roundtrip = serde_json::from_value::<Timestamp>(got).unwrap();
        assert_eq!(ts, roundtrip);
    }

    #[test]
    fn sub_millisecond_truncated() {
        let ts = Timestamp::new(12, 345_678_900);
        let got = serde_json::to_value(ts).unwrap();
        assert_eq!(got, json!(12.345));
    }

    #[test]
    fn integer_epoch_accepted() {
        let got = serde_json::from_value::<Timestamp>(json!(1596236400)).unwrap();
        assert_eq!(got, Timestamp::new(1596236400, 0));
    }

    #[test]
    fn negative_epoch() {
        let ts = Timestamp::from_millis(-1_500);
        assert_eq!(ts, Timestamp::new(-2, 500_000_000));
        assert_eq!(ts.as_millis(), -1_500);
    }

    #[test]
    fn display_is_rfc3339() {
        let ts = Timestamp::new(1596236400, 123_000_000);
        assert_eq!(ts.to_string(), "2020-07-31T23:00:00.123Z");
    }

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Helper {
        pub created_on: Option<Timestamp>,
    }

    #[test]
    fn serialize_in_struct() {
        let input = Helper::default();
        let got = serde_json::to_value(input).unwrap();
        assert_eq!(got, json!({}));

        let input = Helper {
            created_on: Some(Timestamp::new(12, 345_000_000)),
        };
        let got = serde_json::to_value(input).unwrap();
        assert_eq!(got, json!({ "CreatedOn": 12.345 }));
    }

    #[test]
    fn deserialize_in_struct() {
        let got = serde_json::from_value::<Helper>(json!({})).unwrap();
        assert_eq!(got, Helper::default());

        let got = serde_json::from_value::<Helper>(json!({ "CreatedOn": 12.345 })).unwrap();
        assert_eq!(got.created_on, Some(Timestamp::new(12, 345_000_000)));
    }
}
