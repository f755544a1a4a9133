//! Classification plus persistence of the resulting alert.

use async_trait::async_trait;
use database::Database;
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::rules::{self, Analysis, NewAlert};

/// Append-only store for classified alerts.
#[async_trait]
pub trait AlertSink: Send + Sync {
    /// Insert one alert and return its ID.
    async fn insert_alert(&self, alert: &NewAlert) -> Result<i64>;
}

#[async_trait]
impl AlertSink for Database {
    async fn insert_alert(&self, alert: &NewAlert) -> Result<i64> {
        let id = database::alert::insert_alert(self.pool(), &alert.as_row()).await?;
        Ok(id)
    }
}

/// Outcome of one analysis call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntelReport {
    /// ID of the persisted alert.
    pub alert_id: i64,
    pub analysis: Analysis,
}

/// Classifies incident reports and records each result as a new alert.
#[derive(Debug, Clone)]
pub struct IntelEngine<S> {
    sink: S,
}

impl<S: AlertSink> IntelEngine<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Classify `raw_text` and persist one alert for it.
    pub async fn analyze(&self, raw_text: &str) -> Result<IntelReport> {
        let group = rules::matched_group(raw_text);
        let analysis = group.map(|g| g.outcome).unwrap_or(rules::DEFAULT_OUTCOME);

        let alert_id = self.sink.insert_alert(&analysis.to_alert()).await?;

        info!(
            alert_id,
            rule = group.map(|g| g.name).unwrap_or("default"),
            risk_level = %analysis.risk_level,
            region = analysis.region,
            "Intel report classified"
        );

        Ok(IntelReport { alert_id, analysis })
    }
}
