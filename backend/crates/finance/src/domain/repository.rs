//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{AnalysisId, MilestoneId, TransactionId};

use crate::domain::entities::{Analysis, Milestone, Transaction};
use crate::error::FinanceResult;

/// Transaction repository trait
#[trait_variant::make(TransactionRepository: Send)]
pub trait LocalTransactionRepository {
    /// Create a new transaction
    async fn create_transaction(&self, transaction: &Transaction) -> FinanceResult<()>;

    /// All transactions, oldest first
    async fn find_all_transactions(&self) -> FinanceResult<Vec<Transaction>>;

    /// Transactions recorded for a phone number (possibly none)
    async fn find_transactions_by_phone(&self, phone_number: &str)
    -> FinanceResult<Vec<Transaction>>;

    /// Find transaction by ID
    async fn find_transaction(&self, id: &TransactionId) -> FinanceResult<Option<Transaction>>;

    /// Delete a transaction, returning the removed record if it existed
    async fn delete_transaction(&self, id: &TransactionId) -> FinanceResult<Option<Transaction>>;
}

/// Milestone repository trait
#[trait_variant::make(MilestoneRepository: Send)]
pub trait LocalMilestoneRepository {
    /// Create a new milestone
    async fn create_milestone(&self, milestone: &Milestone) -> FinanceResult<()>;

    /// All milestones, oldest first
    async fn find_all_milestones(&self) -> FinanceResult<Vec<Milestone>>;

    /// Replace every field of an existing milestone in one statement
    ///
    /// Returns `None` (and writes nothing) when the id is unknown.
    async fn update_milestone(&self, milestone: &Milestone) -> FinanceResult<Option<Milestone>>;

    /// Delete a milestone; returns whether a row was removed
    async fn delete_milestone(&self, id: &MilestoneId) -> FinanceResult<bool>;
}

/// Analysis repository trait
#[trait_variant::make(AnalysisRepository: Send)]
pub trait LocalAnalysisRepository {
    /// Create a new analysis baseline
    async fn create_analysis(&self, analysis: &Analysis) -> FinanceResult<()>;

    /// Find analysis by ID
    async fn find_analysis(&self, id: &AnalysisId) -> FinanceResult<Option<Analysis>>;
}

/// Everything the finance routes need from a single store
pub trait FinanceRepository:
    TransactionRepository + MilestoneRepository + AnalysisRepository + Clone + Send + Sync + 'static
{
}

impl<T> FinanceRepository for T where
    T: TransactionRepository
        + MilestoneRepository
        + AnalysisRepository
        + Clone
        + Send
        + Sync
        + 'static
{
}
