//! API DTOs (Data Transfer Objects)
//!
//! Field names follow the mobile client's camelCase JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entities::{Analysis, Milestone, Transaction};

/// A stored figure sent either as JSON text or as a JSON number
#[derive(Deserialize)]
#[serde(untagged)]
enum Figure {
    Text(String),
    Number(serde_json::Number),
}

/// Accept `"5000"`, `5000` or `null` for a text-stored figure
fn figure<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Figure>::deserialize(deserializer)? {
        Some(Figure::Text(text)) => text,
        Some(Figure::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

// ============================================================================
// Transaction
// ============================================================================

/// Create transaction request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    pub phone_number: String,
    pub amount: f64,
    #[serde(default)]
    pub spent_category: String,
    #[serde(default)]
    pub methode_of_payment: String,
    #[serde(default)]
    pub receiver: String,
}

/// Stored transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub id: String,
    pub phone_number: String,
    pub amount: f64,
    pub spent_category: String,
    pub methode_of_payment: String,
    pub receiver: String,
    pub date: DateTime<Utc>,
}

impl From<Transaction> for TransactionResponse {
    fn from(t: Transaction) -> Self {
        Self {
            id: t.id.to_string(),
            phone_number: t.phone_number,
            amount: t.amount,
            spent_category: t.spent_category,
            methode_of_payment: t.methode_of_payment,
            receiver: t.receiver,
            date: t.date,
        }
    }
}

// ============================================================================
// Milestone
// ============================================================================

/// Create milestone request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMilestoneRequest {
    #[serde(default, deserialize_with = "figure")]
    pub saved_amount: String,
    #[serde(default, deserialize_with = "figure")]
    pub goal_amount: String,
    #[serde(default)]
    pub duration: String,
}

/// Update milestone request (full replace)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMilestoneRequest {
    pub id: String,
    #[serde(default, deserialize_with = "figure")]
    pub saved_amount: String,
    #[serde(default, deserialize_with = "figure")]
    pub goal_amount: String,
    #[serde(default)]
    pub duration: String,
}

/// Stored milestone
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneResponse {
    pub id: String,
    pub saved_amount: String,
    pub goal_amount: String,
    pub duration: String,
}

impl From<Milestone> for MilestoneResponse {
    fn from(m: Milestone) -> Self {
        Self {
            id: m.id.to_string(),
            saved_amount: m.saved_amount,
            goal_amount: m.goal_amount,
            duration: m.duration,
        }
    }
}

// ============================================================================
// Analysis
// ============================================================================

/// Create analysis request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnalysisRequest {
    #[serde(default, deserialize_with = "figure")]
    pub average_monthly_spending: String,
    #[serde(default, deserialize_with = "figure")]
    pub average_monthly_saving: String,
    #[serde(default, deserialize_with = "figure")]
    pub monthly_salary: String,
    #[serde(default, deserialize_with = "figure")]
    pub current_balance: String,
    #[serde(default)]
    pub feedback: String,
}

/// Insight query (`?currentSpending=..&currentSaving=..`)
///
/// Kept as text so malformed numbers surface as a problem document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightQuery {
    pub current_spending: Option<String>,
    pub current_saving: Option<String>,
}

/// Stored analysis (or a baseline with recomputed feedback)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub id: String,
    pub average_monthly_spending: String,
    pub average_monthly_saving: String,
    pub monthly_salary: String,
    pub current_balance: String,
    pub feedback: String,
}

impl From<Analysis> for AnalysisResponse {
    fn from(a: Analysis) -> Self {
        Self {
            id: a.id.to_string(),
            average_monthly_spending: a.average_monthly_spending,
            average_monthly_saving: a.average_monthly_saving,
            monthly_salary: a.monthly_salary,
            current_balance: a.current_balance,
            feedback: a.feedback,
        }
    }
}
