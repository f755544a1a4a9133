//! Rule-based maritime incident classifier.
//!
//! Free-text reports are matched against an ordered table of keyword groups
//! (piracy, aerial, weather) and mapped to a headline, [`RiskLevel`], region,
//! and recommended action. Text matching no group gets a routine default.
//!
//! ```
//! use intel_engine::{classify, RiskLevel};
//!
//! let analysis = classify("Unidentified drone spotted overhead");
//! assert_eq!(analysis.risk_level, RiskLevel::High);
//! assert_eq!(analysis.region, "Red Sea");
//! ```
//!
//! [`IntelEngine`] wraps classification with an [`AlertSink`] so every call
//! also records a new alert.

pub mod engine;
pub mod error;
pub mod risk;
pub mod rules;

pub use engine::{AlertSink, IntelEngine, IntelReport};
pub use error::{IntelError, Result};
pub use risk::{ParseRiskLevelError, RiskLevel};
pub use rules::{classify, matched_group, Analysis, NewAlert, RuleGroup, DEFAULT_OUTCOME, RULES};
