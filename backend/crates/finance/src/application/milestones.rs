//! Milestone Service

use std::sync::Arc;

use kernel::id::MilestoneId;

use crate::domain::entities::Milestone;
use crate::domain::repository::MilestoneRepository;
use crate::error::{FinanceError, FinanceResult};

/// Input for a new milestone
pub struct NewMilestone {
    pub saved_amount: String,
    pub goal_amount: String,
    pub duration: String,
}

/// Full replacement of an existing milestone
pub struct MilestoneUpdate {
    pub id: String,
    pub saved_amount: String,
    pub goal_amount: String,
    pub duration: String,
}

/// Milestone service
pub struct MilestoneService<R>
where
    R: MilestoneRepository,
{
    repo: Arc<R>,
}

impl<R> MilestoneService<R>
where
    R: MilestoneRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, input: NewMilestone) -> FinanceResult<Milestone> {
        let milestone = Milestone::new(input.saved_amount, input.goal_amount, input.duration);

        self.repo.create_milestone(&milestone).await?;

        tracing::info!(milestone_id = %milestone.id, "Milestone created");

        Ok(milestone)
    }

    pub async fn list_all(&self) -> FinanceResult<Vec<Milestone>> {
        self.repo.find_all_milestones().await
    }

    pub async fn update(&self, input: MilestoneUpdate) -> FinanceResult<Milestone> {
        let id = MilestoneId::parse(&input.id).ok_or(FinanceError::MilestoneNotFound)?;

        let replacement = Milestone {
            id,
            saved_amount: input.saved_amount,
            goal_amount: input.goal_amount,
            duration: input.duration,
        };

        let updated = self
            .repo
            .update_milestone(&replacement)
            .await?
            .ok_or(FinanceError::MilestoneNotFound)?;

        tracing::info!(milestone_id = %updated.id, "Milestone updated");

        Ok(updated)
    }

    /// Idempotent: unknown ids are ignored
    pub async fn delete_by_id(&self, raw_id: &str) -> FinanceResult<()> {
        let Some(id) = MilestoneId::parse(raw_id) else {
            return Ok(());
        };

        if self.repo.delete_milestone(&id).await? {
            tracing::info!(milestone_id = %id, "Milestone deleted");
        }

        Ok(())
    }
}
