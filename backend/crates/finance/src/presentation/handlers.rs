//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::{
    AnalysisService, MilestoneService, MilestoneUpdate, NewAnalysis, NewMilestone, NewTransaction,
    TransactionService,
};
use crate::domain::repository::FinanceRepository;
use crate::domain::services::parse_figure;
use crate::error::{FinanceError, FinanceResult};
use crate::presentation::dto::{
    AnalysisResponse, CreateAnalysisRequest, CreateMilestoneRequest, CreateTransactionRequest,
    InsightQuery, MilestoneResponse, TransactionResponse, UpdateMilestoneRequest,
};

/// Shared state for finance handlers
#[derive(Clone)]
pub struct FinanceAppState<R>
where
    R: FinanceRepository,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Transactions
// ============================================================================

/// POST /api/transactions
pub async fn create_transaction<R>(
    State(state): State<FinanceAppState<R>>,
    payload: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> FinanceResult<Json<TransactionResponse>>
where
    R: FinanceRepository,
{
    let Json(req) = payload?;
    let service = TransactionService::new(state.repo.clone());

    let transaction = service
        .create(NewTransaction {
            phone_number: req.phone_number,
            amount: req.amount,
            spent_category: req.spent_category,
            methode_of_payment: req.methode_of_payment,
            receiver: req.receiver,
        })
        .await?;

    Ok(Json(transaction.into()))
}

/// GET /api/transactions
pub async fn list_transactions<R>(
    State(state): State<FinanceAppState<R>>,
) -> FinanceResult<Json<Vec<TransactionResponse>>>
where
    R: FinanceRepository,
{
    let service = TransactionService::new(state.repo.clone());
    let transactions = service.list_all().await?;

    Ok(Json(transactions.into_iter().map(Into::into).collect()))
}

/// GET /api/transactions/phone/{phone_number}
pub async fn list_transactions_by_phone<R>(
    State(state): State<FinanceAppState<R>>,
    Path(phone_number): Path<String>,
) -> FinanceResult<Json<Vec<TransactionResponse>>>
where
    R: FinanceRepository,
{
    let service = TransactionService::new(state.repo.clone());
    let transactions = service.list_by_phone(&phone_number).await?;

    Ok(Json(transactions.into_iter().map(Into::into).collect()))
}

/// GET /api/transactions/{id}
pub async fn get_transaction<R>(
    State(state): State<FinanceAppState<R>>,
    Path(id): Path<String>,
) -> FinanceResult<Json<TransactionResponse>>
where
    R: FinanceRepository,
{
    let service = TransactionService::new(state.repo.clone());

    let transaction = service
        .get_by_id(&id)
        .await?
        .ok_or(FinanceError::TransactionNotFound)?;

    Ok(Json(transaction.into()))
}

/// DELETE /api/transactions/{id}
pub async fn delete_transaction<R>(
    State(state): State<FinanceAppState<R>>,
    Path(id): Path<String>,
) -> FinanceResult<StatusCode>
where
    R: FinanceRepository,
{
    let service = TransactionService::new(state.repo.clone());
    service.delete_by_id(&id).await?;

    Ok(StatusCode::OK)
}

// ============================================================================
// Milestones
// ============================================================================

/// POST /api/milestone
pub async fn create_milestone<R>(
    State(state): State<FinanceAppState<R>>,
    payload: Result<Json<CreateMilestoneRequest>, JsonRejection>,
) -> FinanceResult<Json<MilestoneResponse>>
where
    R: FinanceRepository,
{
    let Json(req) = payload?;
    let service = MilestoneService::new(state.repo.clone());

    let milestone = service
        .create(NewMilestone {
            saved_amount: req.saved_amount,
            goal_amount: req.goal_amount,
            duration: req.duration,
        })
        .await?;

    Ok(Json(milestone.into()))
}

/// GET /api/milestone
pub async fn list_milestones<R>(
    State(state): State<FinanceAppState<R>>,
) -> FinanceResult<Json<Vec<MilestoneResponse>>>
where
    R: FinanceRepository,
{
    let service = MilestoneService::new(state.repo.clone());
    let milestones = service.list_all().await?;

    Ok(Json(milestones.into_iter().map(Into::into).collect()))
}

/// PUT /api/milestone
pub async fn update_milestone<R>(
    State(state): State<FinanceAppState<R>>,
    payload: Result<Json<UpdateMilestoneRequest>, JsonRejection>,
) -> FinanceResult<Json<MilestoneResponse>>
where
    R: FinanceRepository,
{
    let Json(req) = payload?;
    let service = MilestoneService::new(state.repo.clone());

    let milestone = service
        .update(MilestoneUpdate {
            id: req.id,
            saved_amount: req.saved_amount,
            goal_amount: req.goal_amount,
            duration: req.duration,
        })
        .await?;

    Ok(Json(milestone.into()))
}

/// DELETE /api/milestone/{id}
pub async fn delete_milestone<R>(
    State(state): State<FinanceAppState<R>>,
    Path(id): Path<String>,
) -> FinanceResult<StatusCode>
where
    R: FinanceRepository,
{
    let service = MilestoneService::new(state.repo.clone());
    service.delete_by_id(&id).await?;

    Ok(StatusCode::OK)
}

// ============================================================================
// Analysis
// ============================================================================

/// POST /api/analysis
pub async fn create_analysis<R>(
    State(state): State<FinanceAppState<R>>,
    payload: Result<Json<CreateAnalysisRequest>, JsonRejection>,
) -> FinanceResult<Json<AnalysisResponse>>
where
    R: FinanceRepository,
{
    let Json(req) = payload?;
    let service = AnalysisService::new(state.repo.clone());

    let analysis = service
        .create(NewAnalysis {
            average_monthly_spending: req.average_monthly_spending,
            average_monthly_saving: req.average_monthly_saving,
            monthly_salary: req.monthly_salary,
            current_balance: req.current_balance,
            feedback: req.feedback,
        })
        .await?;

    Ok(Json(analysis.into()))
}

/// GET /api/analysis/{id}/insights?currentSpending=..&currentSaving=..
pub async fn analysis_insights<R>(
    State(state): State<FinanceAppState<R>>,
    Path(id): Path<String>,
    Query(query): Query<InsightQuery>,
) -> FinanceResult<Json<AnalysisResponse>>
where
    R: FinanceRepository,
{
    let current_spending = parse_figure(
        "currentSpending",
        query.current_spending.as_deref().unwrap_or_default(),
    )?;
    let current_saving = parse_figure(
        "currentSaving",
        query.current_saving.as_deref().unwrap_or_default(),
    )?;

    let service = AnalysisService::new(state.repo.clone());

    let analysis = service
        .compute_insight(&id, current_spending, current_saving)
        .await?
        .ok_or(FinanceError::AnalysisNotFound(id))?;

    Ok(Json(analysis.into()))
}
