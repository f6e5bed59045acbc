//! Analysis Service

use std::sync::Arc;

use kernel::id::AnalysisId;

use crate::domain::entities::Analysis;
use crate::domain::repository::AnalysisRepository;
use crate::domain::services::compute_insight;
use crate::error::FinanceResult;

/// Input for a new analysis baseline (stored verbatim)
pub struct NewAnalysis {
    pub average_monthly_spending: String,
    pub average_monthly_saving: String,
    pub monthly_salary: String,
    pub current_balance: String,
    pub feedback: String,
}

/// Analysis service
pub struct AnalysisService<R>
where
    R: AnalysisRepository,
{
    repo: Arc<R>,
}

impl<R> AnalysisService<R>
where
    R: AnalysisRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, input: NewAnalysis) -> FinanceResult<Analysis> {
        let analysis = Analysis::new(
            input.average_monthly_spending,
            input.average_monthly_saving,
            input.monthly_salary,
            input.current_balance,
            input.feedback,
        );

        self.repo.create_analysis(&analysis).await?;

        tracing::info!(analysis_id = %analysis.id, "Analysis created");

        Ok(analysis)
    }

    /// Baseline with freshly computed feedback, or `None` for an unknown id
    ///
    /// The recomputed feedback is returned only; the stored record is untouched.
    pub async fn compute_insight(
        &self,
        raw_id: &str,
        current_spending: f64,
        current_saving: f64,
    ) -> FinanceResult<Option<Analysis>> {
        let Some(id) = AnalysisId::parse(raw_id) else {
            return Ok(None);
        };
        let Some(mut analysis) = self.repo.find_analysis(&id).await? else {
            return Ok(None);
        };

        let insight = compute_insight(&analysis, current_spending, current_saving)?;

        tracing::debug!(
            analysis_id = %analysis.id,
            spending_change = insight.spending_change,
            saving_change = insight.saving_change,
            "Computed insight"
        );

        analysis.feedback = insight.feedback;
        Ok(Some(analysis))
    }
}
