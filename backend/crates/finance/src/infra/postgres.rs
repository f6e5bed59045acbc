//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{AnalysisId, MilestoneId, TransactionId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Analysis, Milestone, Transaction};
use crate::domain::repository::{AnalysisRepository, MilestoneRepository, TransactionRepository};
use crate::error::FinanceResult;

/// PostgreSQL-backed finance repository
#[derive(Clone)]
pub struct PgFinanceRepository {
    pool: PgPool,
}

impl PgFinanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Transaction Repository Implementation
// ============================================================================

impl TransactionRepository for PgFinanceRepository {
    async fn create_transaction(&self, transaction: &Transaction) -> FinanceResult<()> {
        sqlx::query(
            r#"
            INSERT INTO transactions (
                transaction_id,
                phone_number,
                amount,
                spent_category,
                methode_of_payment,
                receiver,
                transacted_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(transaction.id.as_uuid())
        .bind(&transaction.phone_number)
        .bind(transaction.amount)
        .bind(&transaction.spent_category)
        .bind(&transaction.methode_of_payment)
        .bind(&transaction.receiver)
        .bind(transaction.date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_all_transactions(&self) -> FinanceResult<Vec<Transaction>> {
        let rows = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT
                transaction_id,
                phone_number,
                amount,
                spent_category,
                methode_of_payment,
                receiver,
                transacted_at
            FROM transactions
            ORDER BY transacted_at, transaction_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TransactionRow::into_transaction).collect())
    }

    async fn find_transactions_by_phone(
        &self,
        phone_number: &str,
    ) -> FinanceResult<Vec<Transaction>> {
        let rows = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT
                transaction_id,
                phone_number,
                amount,
                spent_category,
                methode_of_payment,
                receiver,
                transacted_at
            FROM transactions
            WHERE phone_number = $1
            ORDER BY transacted_at, transaction_id
            "#,
        )
        .bind(phone_number)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TransactionRow::into_transaction).collect())
    }

    async fn find_transaction(&self, id: &TransactionId) -> FinanceResult<Option<Transaction>> {
        let row = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT
                transaction_id,
                phone_number,
                amount,
                spent_category,
                methode_of_payment,
                receiver,
                transacted_at
            FROM transactions
            WHERE transaction_id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TransactionRow::into_transaction))
    }

    async fn delete_transaction(&self, id: &TransactionId) -> FinanceResult<Option<Transaction>> {
        let row = sqlx::query_as::<_, TransactionRow>(
            r#"
            DELETE FROM transactions
            WHERE transaction_id = $1
            RETURNING
                transaction_id,
                phone_number,
                amount,
                spent_category,
                methode_of_payment,
                receiver,
                transacted_at
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TransactionRow::into_transaction))
    }
}

// ============================================================================
// Milestone Repository Implementation
// ============================================================================

impl MilestoneRepository for PgFinanceRepository {
    async fn create_milestone(&self, milestone: &Milestone) -> FinanceResult<()> {
        sqlx::query(
            r#"
            INSERT INTO milestones (
                milestone_id,
                saved_amount,
                goal_amount,
                duration
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(milestone.id.as_uuid())
        .bind(&milestone.saved_amount)
        .bind(&milestone.goal_amount)
        .bind(&milestone.duration)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_all_milestones(&self) -> FinanceResult<Vec<Milestone>> {
        let rows = sqlx::query_as::<_, MilestoneRow>(
            r#"
            SELECT
                milestone_id,
                saved_amount,
                goal_amount,
                duration
            FROM milestones
            ORDER BY created_at, milestone_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MilestoneRow::into_milestone).collect())
    }

    async fn update_milestone(&self, milestone: &Milestone) -> FinanceResult<Option<Milestone>> {
        let row = sqlx::query_as::<_, MilestoneRow>(
            r#"
            UPDATE milestones SET
                saved_amount = $2,
                goal_amount = $3,
                duration = $4
            WHERE milestone_id = $1
            RETURNING
                milestone_id,
                saved_amount,
                goal_amount,
                duration
            "#,
        )
        .bind(milestone.id.as_uuid())
        .bind(&milestone.saved_amount)
        .bind(&milestone.goal_amount)
        .bind(&milestone.duration)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(MilestoneRow::into_milestone))
    }

    async fn delete_milestone(&self, id: &MilestoneId) -> FinanceResult<bool> {
        let deleted = sqlx::query("DELETE FROM milestones WHERE milestone_id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Analysis Repository Implementation
// ============================================================================

impl AnalysisRepository for PgFinanceRepository {
    async fn create_analysis(&self, analysis: &Analysis) -> FinanceResult<()> {
        sqlx::query(
            r#"
            INSERT INTO analyses (
                analysis_id,
                average_monthly_spending,
                average_monthly_saving,
                monthly_salary,
                current_balance,
                feedback
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(analysis.id.as_uuid())
        .bind(&analysis.average_monthly_spending)
        .bind(&analysis.average_monthly_saving)
        .bind(&analysis.monthly_salary)
        .bind(&analysis.current_balance)
        .bind(&analysis.feedback)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_analysis(&self, id: &AnalysisId) -> FinanceResult<Option<Analysis>> {
        let row = sqlx::query_as::<_, AnalysisRow>(
            r#"
            SELECT
                analysis_id,
                average_monthly_spending,
                average_monthly_saving,
                monthly_salary,
                current_balance,
                feedback
            FROM analyses
            WHERE analysis_id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AnalysisRow::into_analysis))
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct TransactionRow {
    transaction_id: Uuid,
    phone_number: String,
    amount: f64,
    spent_category: String,
    methode_of_payment: String,
    receiver: String,
    transacted_at: DateTime<Utc>,
}

impl TransactionRow {
    fn into_transaction(self) -> Transaction {
        Transaction {
            id: TransactionId::from_uuid(self.transaction_id),
            phone_number: self.phone_number,
            amount: self.amount,
            spent_category: self.spent_category,
            methode_of_payment: self.methode_of_payment,
            receiver: self.receiver,
            date: self.transacted_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct MilestoneRow {
    milestone_id: Uuid,
    saved_amount: String,
    goal_amount: String,
    duration: String,
}

impl MilestoneRow {
    fn into_milestone(self) -> Milestone {
        Milestone {
            id: MilestoneId::from_uuid(self.milestone_id),
            saved_amount: self.saved_amount,
            goal_amount: self.goal_amount,
            duration: self.duration,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AnalysisRow {
    analysis_id: Uuid,
    average_monthly_spending: String,
    average_monthly_saving: String,
    monthly_salary: String,
    current_balance: String,
    feedback: String,
}

impl AnalysisRow {
    fn into_analysis(self) -> Analysis {
        Analysis {
            id: AnalysisId::from_uuid(self.analysis_id),
            average_monthly_spending: self.average_monthly_spending,
            average_monthly_saving: self.average_monthly_saving,
            monthly_salary: self.monthly_salary,
            current_balance: self.current_balance,
            feedback: self.feedback,
        }
    }
}
