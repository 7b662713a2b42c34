use serde::{Deserialize, Serialize};

// 学期
//
// 线上取值为 "FALL" / "SPRING" / "SUMMER" / "N/A"，精确匹配，
// 不做大小写归一化。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Semester {
    #[serde(rename = "FALL")]
    Fall,
    #[serde(rename = "SPRING")]
    Spring,
    #[serde(rename = "SUMMER")]
    Summer,
    #[serde(rename = "N/A")]
    #[default]
    NotApplicable,
}

impl<'de> Deserialize<'de> for Semester {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Semester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Semester::Fall => write!(f, "FALL"),
            Semester::Spring => write!(f, "SPRING"),
            Semester::Summer => write!(f, "SUMMER"),
            Semester::NotApplicable => write!(f, "N/A"),
        }
    }
}

impl std::str::FromStr for Semester {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FALL" => Ok(Semester::Fall),
            "SPRING" => Ok(Semester::Spring),
            "SUMMER" => Ok(Semester::Summer),
            "N/A" => Ok(Semester::NotApplicable),
            _ => Err(format!(
                "invalid semester: '{s}'. Supported: FALL, SPRING, SUMMER, N/A"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_spellings_roundtrip() {
        for (text, semester) in [
            ("\"FALL\"", Semester::Fall),
            ("\"SPRING\"", Semester::Spring),
            ("\"SUMMER\"", Semester::Summer),
            ("\"N/A\"", Semester::NotApplicable),
        ] {
            let parsed: Semester = serde_json::from_str(text).unwrap();
            assert_eq!(parsed, semester);
            assert_eq!(serde_json::to_string(&semester).unwrap(), text);
        }
    }

    #[test]
    fn test_no_case_normalization() {
        assert!(serde_json::from_str::<Semester>("\"fall\"").is_err());
        assert!(serde_json::from_str::<Semester>("\"Spring\"").is_err());
        assert!(serde_json::from_str::<Semester>("\"WINTER\"").is_err());
    }

    #[test]
    fn test_default_is_not_applicable() {
        assert_eq!(Semester::default(), Semester::NotApplicable);
    }
}
