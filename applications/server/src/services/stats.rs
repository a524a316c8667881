/// Aggregator - dashboard counts over the job collection
use crate::error::Result;
use staffboard_core::{DashboardStats, JobStore};

/// Scan every job and derive the dashboard summary
///
/// Nothing is cached; each call reloads the full collection.
pub async fn compute_stats(store: &dyn JobStore) -> Result<DashboardStats> {
    let jobs = store.list_all().await?;
    Ok(DashboardStats::from_jobs(&jobs))
}
