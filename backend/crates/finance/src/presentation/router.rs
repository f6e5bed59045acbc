//! Finance Router

use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;

use crate::domain::repository::FinanceRepository;
use crate::presentation::handlers::{self, FinanceAppState};

/// Create the finance router (mounted under `/api`)
pub fn finance_router<R>(repo: R) -> Router
where
    R: FinanceRepository,
{
    let state = FinanceAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/transactions",
            post(handlers::create_transaction::<R>).get(handlers::list_transactions::<R>),
        )
        .route(
            "/transactions/phone/{phone_number}",
            get(handlers::list_transactions_by_phone::<R>),
        )
        .route(
            "/transactions/{id}",
            get(handlers::get_transaction::<R>).delete(handlers::delete_transaction::<R>),
        )
        .route(
            "/milestone",
            post(handlers::create_milestone::<R>)
                .get(handlers::list_milestones::<R>)
                .put(handlers::update_milestone::<R>),
        )
        .route("/milestone/{id}", delete(handlers::delete_milestone::<R>))
        .route("/analysis", post(handlers::create_analysis::<R>))
        .route(
            "/analysis/{id}/insights",
            get(handlers::analysis_insights::<R>),
        )
        .with_state(state)
}
