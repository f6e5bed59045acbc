//! Domain Entities
//!
//! Core records of the finance domain. None of them is scoped to a user.

use chrono::{DateTime, Utc};
use kernel::id::{AnalysisId, MilestoneId, TransactionId};

/// A logged money movement
///
/// `amount` carries no sign or range constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub phone_number: String,
    pub amount: f64,
    pub spent_category: String,
    pub methode_of_payment: String,
    pub receiver: String,
    /// Assigned by the server at creation
    pub date: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        phone_number: String,
        amount: f64,
        spent_category: String,
        methode_of_payment: String,
        receiver: String,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            phone_number,
            amount,
            spent_category,
            methode_of_payment,
            receiver,
            date: Utc::now(),
        }
    }
}

/// A savings goal
///
/// Amounts are free text; nothing is validated at write time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    pub id: MilestoneId,
    pub saved_amount: String,
    pub goal_amount: String,
    pub duration: String,
}

impl Milestone {
    pub fn new(saved_amount: String, goal_amount: String, duration: String) -> Self {
        Self {
            id: MilestoneId::new(),
            saved_amount,
            goal_amount,
            duration,
        }
    }
}

/// Baseline spending/saving snapshot
///
/// Figures are stored verbatim as text and only parsed when an insight is
/// computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub id: AnalysisId,
    pub average_monthly_spending: String,
    pub average_monthly_saving: String,
    pub monthly_salary: String,
    pub current_balance: String,
    pub feedback: String,
}

impl Analysis {
    pub fn new(
        average_monthly_spending: String,
        average_monthly_saving: String,
        monthly_salary: String,
        current_balance: String,
        feedback: String,
    ) -> Self {
        Self {
            id: AnalysisId::new(),
            average_monthly_spending,
            average_monthly_saving,
            monthly_salary,
            current_balance,
            feedback,
        }
    }
}
