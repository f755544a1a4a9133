//! Keyword rule table and the classification routine.
//!
//! Rule groups are tested in a fixed priority order and the first group with
//! any keyword present in the lowercased text decides every derived field.
//! Matching is plain substring search, so "windy" triggers the weather group.

use serde::Serialize;

use crate::risk::RiskLevel;

/// Marker stored in `source_url` for machine-generated alerts.
pub const SOURCE_MARKER: &str = "AI Analysis";

/// A named set of keywords mapped to one fixed outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleGroup {
    pub name: &'static str,
    /// Lowercase keywords; any single one present is a match.
    pub keywords: &'static [&'static str],
    pub outcome: Analysis,
}

impl RuleGroup {
    /// Whether `text` (already lowercased) contains any keyword.
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|keyword| text.contains(keyword))
    }
}

/// Structured classification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub headline: &'static str,
    pub risk_level: RiskLevel,
    pub ai_advice: &'static str,
    pub region: &'static str,
}

impl Analysis {
    /// Build the alert record derived from this result.
    pub fn to_alert(&self) -> NewAlert {
        NewAlert {
            headline: self.headline,
            risk_level: self.risk_level,
            region: self.region,
            affected_country: self.region,
            ai_advice: self.ai_advice,
            source_url: SOURCE_MARKER,
        }
    }
}

/// An alert record ready to be persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewAlert {
    pub headline: &'static str,
    pub risk_level: RiskLevel,
    pub region: &'static str,
    /// Always equal to `region`.
    pub affected_country: &'static str,
    pub ai_advice: &'static str,
    pub source_url: &'static str,
}

impl NewAlert {
    /// Borrow as a database row.
    pub fn as_row(&self) -> database::AlertRow<'static> {
        database::AlertRow {
            headline: self.headline,
            risk_level: self.risk_level.as_str(),
            region: self.region,
            affected_country: self.affected_country,
            ai_advice: self.ai_advice,
            source_url: self.source_url,
        }
    }
}

pub const PIRACY: RuleGroup = RuleGroup {
    name: "piracy",
    keywords: &["pirate", "skiff", "weapon"],
    outcome: Analysis {
        headline: "PIRACY ATTACK IMMINENT",
        risk_level: RiskLevel::Critical,
        ai_advice: "LOCKDOWN: Muster crew to citadel. Activate SSAS immediately. Increase speed.",
        region: "Gulf of Aden",
    },
};

pub const AERIAL: RuleGroup = RuleGroup {
    name: "aerial",
    keywords: &["drone", "uav", "missile"],
    outcome: Analysis {
        headline: "AERIAL THREAT DETECTED",
        risk_level: RiskLevel::High,
        ai_advice: "EVASIVE MANEUVERS: Alter course. Monitor air radar. Report to UKMTO.",
        region: "Red Sea",
    },
};

pub const WEATHER: RuleGroup = RuleGroup {
    name: "weather",
    keywords: &["storm", "hurricane", "wind"],
    outcome: Analysis {
        headline: "SEVERE WEATHER WARNING",
        risk_level: RiskLevel::Medium,
        ai_advice: "NAVIGATION HAZARD: Secure loose deck cargo. Check weather routing.",
        region: "Pacific Ocean",
    },
};

/// Rule groups in priority order.
pub static RULES: [RuleGroup; 3] = [PIRACY, AERIAL, WEATHER];

/// Result used when no rule group matches.
pub const DEFAULT_OUTCOME: Analysis = Analysis {
    headline: "Routine Traffic",
    risk_level: RiskLevel::Low,
    ai_advice: "Maintain standard watch.",
    region: "Global",
};

/// Return the first rule group that matches `raw_text`, if any.
pub fn matched_group(raw_text: &str) -> Option<&'static RuleGroup> {
    let text = raw_text.to_lowercase();
    RULES.iter().find(|group| group.matches(&text))
}

/// Classify free text into a risk assessment. Never fails.
pub fn classify(raw_text: &str) -> Analysis {
    matched_group(raw_text)
        .map(|group| group.outcome)
        .unwrap_or(DEFAULT_OUTCOME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piracy_report() {
        let analysis = classify("A pirate skiff with weapons approaching");
        assert_eq!(analysis.headline, "PIRACY ATTACK IMMINENT");
        assert_eq!(analysis.risk_level, RiskLevel::Critical);
        assert_eq!(analysis.region, "Gulf of Aden");
    }

    #[test]
    fn test_aerial_report() {
        let analysis = classify("Unidentified drone spotted overhead");
        assert_eq!(analysis.headline, "AERIAL THREAT DETECTED");
        assert_eq!(analysis.risk_level, RiskLevel::High);
        assert_eq!(analysis.region, "Red Sea");
    }

    #[test]
    fn test_weather_report() {
        let analysis = classify("Heavy wind and storm expected tonight");
        assert_eq!(analysis.headline, "SEVERE WEATHER WARNING");
        assert_eq!(analysis.risk_level, RiskLevel::Medium);
        assert_eq!(analysis.region, "Pacific Ocean");
    }

    #[test]
    fn test_routine_report() {
        assert_eq!(classify("All quiet, routine patrol"), DEFAULT_OUTCOME);
        assert_eq!(DEFAULT_OUTCOME.headline, "Routine Traffic");
        assert_eq!(DEFAULT_OUTCOME.risk_level, RiskLevel::Low);
        assert_eq!(DEFAULT_OUTCOME.region, "Global");
    }

    #[test]
    fn test_empty_text_uses_default() {
        assert_eq!(classify(""), DEFAULT_OUTCOME);
        assert!(matched_group("").is_none());
    }

    #[test]
    fn test_every_keyword_fires_its_group() {
        for group in RULES.iter() {
            for keyword in group.keywords {
                let text = format!("report: {} sighted", keyword.to_uppercase());
                assert_eq!(classify(&text), group.outcome, "keyword {keyword}");
            }
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("PIRATE SHIP"), classify("pirate ship"));
        assert_eq!(classify("pIrAtE sHiP").risk_level, RiskLevel::Critical);
    }

    #[test]
    fn test_earlier_group_wins() {
        assert_eq!(classify("pirate boarding during a storm"), PIRACY.outcome);
        assert_eq!(classify("storm front, missile launch reported"), AERIAL.outcome);
        assert_eq!(classify("uav shadowing skiff"), PIRACY.outcome);
        assert_eq!(matched_group("hurricane and drone").map(|g| g.name), Some("aerial"));
    }

    #[test]
    fn test_substring_matching() {
        // Keywords match inside longer words.
        assert_eq!(classify("Windy conditions on deck"), WEATHER.outcome);
        assert_eq!(classify("Weaponry stored below"), PIRACY.outcome);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let text = "Missile debris near the bow";
        assert_eq!(classify(text), classify(text));
    }

    #[test]
    fn test_alert_derivation() {
        for outcome in RULES.iter().map(|g| g.outcome).chain([DEFAULT_OUTCOME]) {
            let alert = outcome.to_alert();
            assert_eq!(alert.headline, outcome.headline);
            assert_eq!(alert.risk_level, outcome.risk_level);
            assert_eq!(alert.ai_advice, outcome.ai_advice);
            assert_eq!(alert.region, outcome.region);
            assert_eq!(alert.affected_country, outcome.region);
            assert_eq!(alert.source_url, SOURCE_MARKER);

            let row = alert.as_row();
            assert_eq!(row.risk_level, outcome.risk_level.as_str());
        }
    }

    #[test]
    fn test_analysis_serializes_as_wire_object() {
        let value = serde_json::to_value(classify("drone")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "headline": "AERIAL THREAT DETECTED",
                "risk_level": "HIGH",
                "ai_advice": "EVASIVE MANEUVERS: Alter course. Monitor air radar. Report to UKMTO.",
                "region": "Red Sea",
            })
        );
    }
}
