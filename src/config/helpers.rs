use std::time::Duration;

use serde::{Deserialize, Deserializer, de};
use url::Url;

/// Custom deserializer for Duration from seconds
pub fn deserialize_duration_from_seconds<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = u64::deserialize(deserializer)?;
    Ok(Duration::from_secs(secs))
}

/// Custom deserializer for an optional Duration from seconds
pub fn deserialize_optional_duration_from_seconds<'de, D>(
    deserializer: D,
) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = Option::<u64>::deserialize(deserializer)?;
    Ok(secs.map(Duration::from_secs))
}

/// Custom deserializer for a URL.
pub fn deserialize_url<'de, D>(deserializer: D) -> Result<Url, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Url::parse(&s).map_err(de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestDurationSecs {
        #[serde(deserialize_with = "deserialize_duration_from_seconds")]
        duration: Duration,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestOptionalDurationSecs {
        #[serde(default, deserialize_with = "deserialize_optional_duration_from_seconds")]
        duration: Option<Duration>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestUrl {
        #[serde(deserialize_with = "deserialize_url")]
        url: Url,
    }

    #[test]
    fn test_deserialize_duration_from_seconds() {
        let json = r#"{"duration": 5}"#;
        let expected = TestDurationSecs { duration: Duration::from_secs(5) };
        let actual: TestDurationSecs = serde_json::from_str(json).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_optional_duration() {
        let present: TestOptionalDurationSecs =
            serde_json::from_str(r#"{"duration": 30}"#).unwrap();
        assert_eq!(present.duration, Some(Duration::from_secs(30)));

        let absent: TestOptionalDurationSecs = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.duration, None);

        let null: TestOptionalDurationSecs =
            serde_json::from_str(r#"{"duration": null}"#).unwrap();
        assert_eq!(null.duration, None);
    }

    #[test]
    fn test_deserialize_url() {
        let json = r#"{"url": "https://api.example.com/api/v0"}"#;
        let actual: TestUrl = serde_json::from_str(json).unwrap();
        assert_eq!(actual.url, Url::parse("https://api.example.com/api/v0").unwrap());
    }

    #[test]
    fn test_deserialize_invalid_url() {
        let json = r#"{"url": "not a valid url"}"#;
        let result: Result<TestUrl, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
