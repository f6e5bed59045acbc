//! Transaction Service

use std::sync::Arc;

use kernel::id::TransactionId;

use crate::domain::entities::Transaction;
use crate::domain::repository::TransactionRepository;
use crate::error::FinanceResult;

/// Input for a new transaction
pub struct NewTransaction {
    pub phone_number: String,
    pub amount: f64,
    pub spent_category: String,
    pub methode_of_payment: String,
    pub receiver: String,
}

/// Transaction service
pub struct TransactionService<R>
where
    R: TransactionRepository,
{
    repo: Arc<R>,
}

impl<R> TransactionService<R>
where
    R: TransactionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, input: NewTransaction) -> FinanceResult<Transaction> {
        let transaction = Transaction::new(
            input.phone_number,
            input.amount,
            input.spent_category,
            input.methode_of_payment,
            input.receiver,
        );

        self.repo.create_transaction(&transaction).await?;

        tracing::info!(
            transaction_id = %transaction.id,
            amount = transaction.amount,
            "Transaction created"
        );

        Ok(transaction)
    }

    pub async fn list_all(&self) -> FinanceResult<Vec<Transaction>> {
        self.repo.find_all_transactions().await
    }

    pub async fn list_by_phone(&self, phone_number: &str) -> FinanceResult<Vec<Transaction>> {
        self.repo.find_transactions_by_phone(phone_number).await
    }

    /// Ids that are not UUIDs cannot exist and yield `None`
    pub async fn get_by_id(&self, raw_id: &str) -> FinanceResult<Option<Transaction>> {
        let Some(id) = TransactionId::parse(raw_id) else {
            tracing::debug!(id = raw_id, "Malformed transaction id");
            return Ok(None);
        };
        self.repo.find_transaction(&id).await
    }

    /// Idempotent: unknown ids are ignored
    pub async fn delete_by_id(&self, raw_id: &str) -> FinanceResult<()> {
        let Some(id) = TransactionId::parse(raw_id) else {
            return Ok(());
        };

        if let Some(deleted) = self.repo.delete_transaction(&id).await? {
            tracing::info!(
                transaction_id = %deleted.id,
                amount = deleted.amount,
                phone_number = %deleted.phone_number,
                "Transaction deleted"
            );
        }

        Ok(())
    }
}
