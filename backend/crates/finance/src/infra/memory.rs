//! In-memory repository used by the crate's tests

use std::sync::{Arc, Mutex};

use kernel::id::{AnalysisId, MilestoneId, TransactionId};

use crate::domain::entities::{Analysis, Milestone, Transaction};
use crate::domain::repository::{AnalysisRepository, MilestoneRepository, TransactionRepository};
use crate::error::FinanceResult;

#[derive(Default)]
struct Tables {
    transactions: Vec<Transaction>,
    milestones: Vec<Milestone>,
    analyses: Vec<Analysis>,
}

/// Insertion-ordered tables behind one lock
#[derive(Clone, Default)]
pub struct InMemoryFinanceRepository {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryFinanceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transaction_count(&self) -> usize {
        self.tables.lock().unwrap().transactions.len()
    }

    pub fn milestones(&self) -> Vec<Milestone> {
        self.tables.lock().unwrap().milestones.clone()
    }

    pub fn analysis(&self, id: &AnalysisId) -> Option<Analysis> {
        let tables = self.tables.lock().unwrap();
        tables.analyses.iter().find(|a| &a.id == id).cloned()
    }
}

impl TransactionRepository for InMemoryFinanceRepository {
    async fn create_transaction(&self, transaction: &Transaction) -> FinanceResult<()> {
        self.tables
            .lock()
            .unwrap()
            .transactions
            .push(transaction.clone());
        Ok(())
    }

    async fn find_all_transactions(&self) -> FinanceResult<Vec<Transaction>> {
        Ok(self.tables.lock().unwrap().transactions.clone())
    }

    async fn find_transactions_by_phone(
        &self,
        phone_number: &str,
    ) -> FinanceResult<Vec<Transaction>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .transactions
            .iter()
            .filter(|t| t.phone_number == phone_number)
            .cloned()
            .collect())
    }

    async fn find_transaction(&self, id: &TransactionId) -> FinanceResult<Option<Transaction>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.transactions.iter().find(|t| &t.id == id).cloned())
    }

    async fn delete_transaction(&self, id: &TransactionId) -> FinanceResult<Option<Transaction>> {
        let mut tables = self.tables.lock().unwrap();
        let position = tables.transactions.iter().position(|t| &t.id == id);
        Ok(position.map(|i| tables.transactions.remove(i)))
    }
}

impl MilestoneRepository for InMemoryFinanceRepository {
    async fn create_milestone(&self, milestone: &Milestone) -> FinanceResult<()> {
        self.tables.lock().unwrap().milestones.push(milestone.clone());
        Ok(())
    }

    async fn find_all_milestones(&self) -> FinanceResult<Vec<Milestone>> {
        Ok(self.milestones())
    }

    async fn update_milestone(&self, milestone: &Milestone) -> FinanceResult<Option<Milestone>> {
        let mut tables = self.tables.lock().unwrap();
        let Some(existing) = tables.milestones.iter_mut().find(|m| m.id == milestone.id) else {
            return Ok(None);
        };
        *existing = milestone.clone();
        Ok(Some(milestone.clone()))
    }

    async fn delete_milestone(&self, id: &MilestoneId) -> FinanceResult<bool> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.milestones.len();
        tables.milestones.retain(|m| &m.id != id);
        Ok(tables.milestones.len() < before)
    }
}

impl AnalysisRepository for InMemoryFinanceRepository {
    async fn create_analysis(&self, analysis: &Analysis) -> FinanceResult<()> {
        self.tables.lock().unwrap().analyses.push(analysis.clone());
        Ok(())
    }

    async fn find_analysis(&self, id: &AnalysisId) -> FinanceResult<Option<Analysis>> {
        Ok(self.analysis(id))
    }
}
