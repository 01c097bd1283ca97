use std::{fmt::Display, str::FromStr};

use chrono::Duration;
use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::CodecError;

/// an ISO-8601 duration limited to the time designators (`PT#H#M#S`) accepted
/// by the transit router, such as `PT120M` or `PT1H30M`.
///
/// the source text is kept as written so that encoding a query reproduces
/// exactly what the user (or the address bar) provided: `PT120M` stays
/// `PT120M` and is never normalized to `PT2H`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoDuration {
    text: String,
    duration: Duration,
}

impl IsoDuration {
    pub fn minutes(minutes: u32) -> IsoDuration {
        IsoDuration {
            text: format!("PT{minutes}M"),
            duration: Duration::minutes(minutes as i64),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Display for IsoDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl FromStr for IsoDuration {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |msg: &str| CodecError::InvalidDuration(s.to_string(), msg.to_string());
        let text = s.trim();
        let body = text
            .strip_prefix("PT")
            .ok_or_else(|| invalid("must start with 'PT'"))?;
        if body.is_empty() {
            return Err(invalid("no time components"));
        }

        let mut seconds: i64 = 0;
        let mut digits = String::new();
        // H, M, S must each appear at most once and in that order
        let mut last_rank = 0;
        for c in body.chars() {
            if c.is_ascii_digit() {
                digits.push(c);
                continue;
            }
            let (rank, scale) = match c {
                'H' => (1, 3600),
                'M' => (2, 60),
                'S' => (3, 1),
                _ => return Err(invalid(&format!("unexpected designator '{c}'"))),
            };
            if digits.is_empty() {
                return Err(invalid(&format!("designator '{c}' has no value")));
            }
            if rank <= last_rank {
                return Err(invalid("designators must appear once, in H, M, S order"));
            }
            let value = digits
                .parse::<i64>()
                .map_err(|e| invalid(&format!("{e}")))?;
            seconds = value
                .checked_mul(scale)
                .and_then(|v| seconds.checked_add(v))
                .ok_or_else(|| invalid("duration overflow"))?;
            digits.clear();
            last_rank = rank;
        }
        if !digits.is_empty() {
            return Err(invalid("trailing value without designator"));
        }

        let duration =
            Duration::try_seconds(seconds).ok_or_else(|| invalid("duration overflow"))?;
        Ok(IsoDuration {
            text: text.to_string(),
            duration,
        })
    }
}

impl Serialize for IsoDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IsoDuration {
    fn deserialize<D>(deserializer: D) -> Result<IsoDuration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = String::deserialize(deserializer)?;
        IsoDuration::from_str(&s).map_err(|e| D::Error::custom(format!("{e}")))
    }
}

#[cfg(test)]
mod test {
    use super::IsoDuration;
    use chrono::Duration;
    use std::str::FromStr;

    #[test]
    fn test_keeps_source_text() {
        let d = IsoDuration::from_str("PT120M").expect("test failed");
        assert_eq!(d.as_str(), "PT120M");
        assert_eq!(d.duration(), Duration::hours(2));
        assert_eq!(d, IsoDuration::minutes(120));
    }

    #[test]
    fn test_mixed_designators() {
        let d = IsoDuration::from_str("PT1H30M15S").expect("test failed");
        assert_eq!(d.duration(), Duration::seconds(5415));
    }

    #[test]
    fn test_invalid_durations() {
        let invalid = [
            "",
            "PT",
            "P1D",
            "120M",
            "PT30",
            "PTM",
            "PT5M1H",
            "PT1M1M",
            "PT-5M",
            "PT9999999999999999S",
            "PT99999999999999999999H",
        ];
        for s in invalid {
            assert!(IsoDuration::from_str(s).is_err(), "'{s}' should be invalid");
        }
    }

    #[test]
    fn test_serde_as_string() {
        let d: IsoDuration = serde_json::from_str("\"PT30M\"").expect("test failed");
        assert_eq!(d, IsoDuration::minutes(30));
        let s = serde_json::to_string(&d).expect("test failed");
        assert_eq!(s, "\"PT30M\"");
        assert!(serde_json::from_str::<IsoDuration>("\"thirty minutes\"").is_err());
    }
}
