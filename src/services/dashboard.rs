//! Dashboard aggregation service

use crate::{
    api::dashboard::{DashboardResponse, ProjectStats, ToolStats},
    error::AppResult,
    repository::Repository,
};

#[derive(Clone)]
pub struct DashboardService {
    repository: Repository,
}

impl DashboardService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Compute the dashboard aggregates.
    ///
    /// Recomputed from full-table aggregates on every call; the data set is
    /// a single warehouse's catalog, so no caching is warranted.
    pub async fn get_dashboard(&self) -> AppResult<DashboardResponse> {
        let (total_projects, done_projects) =
            self.repository.projects.count_with_done().await?;
        let total_tools = self.repository.tools.count().await?;
        let (total_awal, total_sekarang, total_terpakai) =
            self.repository.tools.sum_counters().await?;

        Ok(DashboardResponse {
            projects: ProjectStats {
                total: total_projects,
                done: done_projects,
                completion_ratio: ratio(done_projects, total_projects),
            },
            tools: ToolStats {
                total: total_tools,
                jumlah_awal: total_awal,
                jumlah_sekarang: total_sekarang,
                jumlah_terpakai: total_terpakai,
                usage_ratio: ratio(total_terpakai, total_awal),
            },
        })
    }
}

/// Progress ratio in [0, 1]; an empty denominator reads as zero progress
fn ratio(part: i64, whole: i64) -> f64 {
    if whole <= 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_of_empty_set_is_zero() {
        assert_eq!(ratio(0, 0), 0.0);
        assert_eq!(ratio(5, 0), 0.0);
    }

    #[test]
    fn ratio_is_fractional() {
        assert!((ratio(3, 4) - 0.75).abs() < f64::EPSILON);
        assert!((ratio(3, 18) - 1.0 / 6.0).abs() < f64::EPSILON);
    }
}
