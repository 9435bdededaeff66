use crate::core::{detect_new_matches, seen_cat_ids, Matcher};
use crate::models::{CatProfile, SavedProfile};
use crate::services::catalog::{CachedCatalog, CatalogError};
use crate::services::postgres::{PostgresClient, PostgresError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors that abort a whole sweep
///
/// Failures for a single saved profile are logged and counted instead.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Database error: {0}")]
    Database(#[from] PostgresError),
}

/// Summary of one sweep run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepReport {
    pub profiles_scanned: usize,
    pub alerts_created: usize,
    pub failures: usize,
}

/// Re-runs the matcher for every saved profile and raises "new match" alerts
#[derive(Clone)]
pub struct AlertSweeper {
    catalog: Arc<CachedCatalog>,
    postgres: Arc<PostgresClient>,
    matcher: Matcher,
    min_score: u8,
}

impl AlertSweeper {
    pub fn new(
        catalog: Arc<CachedCatalog>,
        postgres: Arc<PostgresClient>,
        matcher: Matcher,
        min_score: u8,
    ) -> Self {
        Self {
            catalog,
            postgres,
            matcher,
            min_score,
        }
    }

    /// Run one sweep over all saved profiles
    pub async fn run_once(&self) -> Result<SweepReport, SweepError> {
        let cats = self.catalog.candidates().await?;
        let profiles = self.postgres.list_all_profiles().await?;

        let mut report = SweepReport::default();

        for profile in &profiles {
            report.profiles_scanned += 1;

            match self.sweep_profile(profile, &cats).await {
                Ok(created) => report.alerts_created += created,
                Err(e) => {
                    report.failures += 1;
                    tracing::error!("Alert sweep failed for profile {}: {}", profile.id, e);
                }
            }
        }

        tracing::info!(
            "Alert sweep finished: {} profiles, {} alerts, {} failures",
            report.profiles_scanned,
            report.alerts_created,
            report.failures
        );

        Ok(report)
    }

    async fn sweep_profile(
        &self,
        profile: &SavedProfile,
        cats: &[CatProfile],
    ) -> Result<usize, PostgresError> {
        let results = self.matcher.match_all_cats(&profile.answers, cats);
        let new_matches = detect_new_matches(&profile.last_seen_cat_ids, &results, self.min_score);

        let alerts = self
            .postgres
            .record_sweep_result(profile, &new_matches, &seen_cat_ids(&results))
            .await?;

        if !alerts.is_empty() {
            tracing::debug!(
                "Profile {} of user {} has {} new matches",
                profile.id,
                profile.user_id,
                alerts.len()
            );
        }

        Ok(alerts.len())
    }

    /// Run the sweep on a fixed interval in a background task
    pub fn spawn(self, interval: Duration) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if let Err(e) = self.run_once().await {
                    tracing::error!("Alert sweep aborted: {}", e);
                }
            }
        })
    }
}
