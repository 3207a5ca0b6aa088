//! Serde adapters for both text forms.
//!
//! [Hours] serializes as its flat string (`"*"` for the sentinel), so it can
//! sit in any document as a scalar. [HoursObject] serializes as a
//! [WeekSchedule] map keyed by `mon` … `sun`, with inactive days omitted:
//!
//! ```json
//! { "mon": "000000000111111110000000", "sat": "*" }
//! ```

use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Visitor},
};

use crate::{errors::DecodeError, hours::Hours, schedule::HoursObject, schedule::WeekSchedule};

impl Serialize for Hours {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hours {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct HoursVisitor;

        impl Visitor<'_> for HoursVisitor {
            type Value = Hours;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a string of at most 168 '1'/'0' hours, or \"*\"")
            }

            fn visit_str<E>(self, v: &str) -> Result<Hours, E>
            where
                E: de::Error,
            {
                Hours::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HoursVisitor)
    }
}

impl Serialize for HoursObject {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.schedule().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for HoursObject {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let schedule = WeekSchedule::deserialize(deserializer)?;
        HoursObject::from_schedule(&schedule).map_err(de::Error::custom)
    }
}

impl HoursObject {
    /// Decodes a JSON object in the structured form. Always explicit, `{}` is "nothing active".
    pub fn from_json(data: &[u8]) -> Result<Self, DecodeError> {
        let schedule: WeekSchedule = serde_json::from_slice(data).map_err(|err| {
            log::debug!("malformed schedule document: {err}");
            DecodeError::MalformedDocument(err.to_string())
        })?;
        HoursObject::from_schedule(&schedule)
    }

    /// Encodes the structured form as a JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.schedule())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;
    use serde::{Deserialize, Serialize};

    use super::*;
    use crate::canonical::{ACTIVE_DAY_HOURS, ACTIVE_WEEK_HOURS, DISABLED_DAY_HOURS};

    #[derive(Debug, Serialize, Deserialize)]
    struct Item {
        hours: Hours,
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct ObjectItem {
        hours: HoursObject,
    }

    #[test]
    fn test_hours_to_json() {
        let cases = [
            ("*".to_string(), r#"{"hours":"*"}"#.to_string()),
            (ACTIVE_WEEK_HOURS.to_string(), r#"{"hours":"*"}"#.to_string()),
            (
                format!("{ACTIVE_DAY_HOURS}{DISABLED_DAY_HOURS}{ACTIVE_DAY_HOURS}"),
                format!(
                    r#"{{"hours":"{ACTIVE_DAY_HOURS}{DISABLED_DAY_HOURS}{ACTIVE_DAY_HOURS}{}"}}"#,
                    DISABLED_DAY_HOURS.repeat(4)
                ),
            ),
        ];

        for (input, expected) in cases {
            let item = Item {
                hours: Hours::must_parse(&input),
            };
            assert_eq!(serde_json::to_string(&item).unwrap(), expected);
        }
    }

    #[test]
    fn test_hours_from_json() {
        let item: Item = serde_json::from_str(r#"{"hours":"*"}"#).unwrap();
        assert!(item.hours.is_sentinel());

        let json = format!(r#"{{"hours":"{ACTIVE_WEEK_HOURS}"}}"#);
        let item: Item = serde_json::from_str(&json).unwrap();
        assert!(item.hours.is_sentinel());

        let json = format!(r#"{{"hours":"{ACTIVE_DAY_HOURS}"}}"#);
        let item: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(item.hours, Hours::must_parse(ACTIVE_DAY_HOURS));
        assert!(item.hours.test_hour(Weekday::Sun, 23));
        assert!(!item.hours.test_hour(Weekday::Mon, 0));
    }

    #[test]
    fn test_hours_from_json_too_long() {
        let json = format!(r#"{{"hours":"{}"}}"#, "1".repeat(169));
        assert!(serde_json::from_str::<Item>(&json).is_err());
    }

    #[test]
    fn test_hours_from_str_deserializer() {
        use serde::de::{
            IntoDeserializer,
            value::{Error as ValueError, StrDeserializer},
        };

        let de: StrDeserializer<'_, ValueError> = "*".into_deserializer();
        assert!(Hours::deserialize(de).unwrap().is_sentinel());

        let de: StrDeserializer<'_, ValueError> = ACTIVE_DAY_HOURS.into_deserializer();
        assert_eq!(Hours::deserialize(de).unwrap(), Hours::must_parse(ACTIVE_DAY_HOURS));

        let overlong = "1".repeat(169);
        let de: StrDeserializer<'_, ValueError> = overlong.as_str().into_deserializer();
        assert!(Hours::deserialize(de).is_err());
    }

    #[test]
    fn test_value_tree_round_trip() {
        let mut hours = Hours::inactive();
        hours.set_hour(Weekday::Thu, 22, true);

        let value = serde_json::to_value(&hours).unwrap();
        assert_eq!(value, serde_json::Value::String(hours.to_string()));
        assert_eq!(serde_json::from_value::<Hours>(value).unwrap(), hours);

        let object = HoursObject(hours);
        let value = serde_json::to_value(&object).unwrap();
        assert_eq!(value["thu"], "000000000000000000000010");
        assert_eq!(serde_json::from_value::<HoursObject>(value).unwrap(), object);
    }

    #[test]
    fn test_object_to_json() {
        let mut hours = Hours::inactive();
        for hour in 9..17 {
            hours.set_hour(Weekday::Mon, hour, true);
        }
        for hour in 0..24 {
            hours.set_hour(Weekday::Sat, hour, true);
        }

        let object = HoursObject(hours);
        assert_eq!(
            object.to_json().unwrap(),
            r#"{"mon":"000000000111111110000000","sat":"*"}"#
        );
        assert_eq!(
            serde_json::to_string(&ObjectItem { hours: object }).unwrap(),
            r#"{"hours":{"mon":"000000000111111110000000","sat":"*"}}"#
        );
    }

    #[test]
    fn test_object_sentinel_to_json() {
        assert_eq!(
            HoursObject(Hours::AllActive).to_json().unwrap(),
            r#"{"mon":"*","tue":"*","wed":"*","thu":"*","fri":"*","sat":"*","sun":"*"}"#
        );
    }

    #[test]
    fn test_object_from_json() {
        let object = HoursObject::from_json(br#"{}"#).unwrap();
        assert!(!object.is_sentinel());
        assert!(object.is_no_active());

        let object = HoursObject::from_json(br#"{"tue":"*","fri":"0011"}"#).unwrap();
        assert!(object.test_hour(Weekday::Tue, 0));
        assert!(object.test_hour(Weekday::Fri, 2));
        assert!(!object.test_hour(Weekday::Fri, 1));
        assert!(!object.test_hour(Weekday::Sun, 0));

        let item: ObjectItem = serde_json::from_str(r#"{"hours":{"sun":"*"}}"#).unwrap();
        assert!(item.hours.test_hour(Weekday::Sun, 12));
    }

    #[test]
    fn test_object_from_malformed_json() {
        assert!(matches!(
            HoursObject::from_json(b"[1, 2"),
            Err(DecodeError::MalformedDocument(_))
        ));
    }

    #[test]
    fn test_object_json_round_trip() {
        let json = r#"{"mon":"*","wed":"100000000000000000000001","sun":"*"}"#;
        let object = HoursObject::from_json(json.as_bytes()).unwrap();
        assert_eq!(object.to_json().unwrap(), json);
    }
}
