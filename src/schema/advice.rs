//! Advice output of the recommendation engine

use serde::{Deserialize, Serialize};

/// Three-step scale used for impact and effort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Laag,
    Middel,
    Hoog,
}

/// One recommended automation workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceItem {
    pub category: String,
    pub title: String,
    pub impact: Level,
    pub effort: Level,
    pub description: String,
}

/// Recommendations for one QuickScan, in rule order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceReport {
    pub summary: String,
    pub recommendations: Vec<AdviceItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_wire_format() {
        assert_eq!(serde_json::to_string(&Level::Hoog).unwrap(), r#""hoog""#);
        let level: Level = serde_json::from_str(r#""middel""#).unwrap();
        assert_eq!(level, Level::Middel);
        assert!(serde_json::from_str::<Level>(r#""extreem""#).is_err());
    }
}
