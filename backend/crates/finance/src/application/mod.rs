//! Application Layer - Services
//!
//! Thin orchestration over the repositories. Services hold no state of
//! their own between requests.

pub mod analysis;
pub mod milestones;
pub mod transactions;

pub use analysis::{AnalysisService, NewAnalysis};
pub use milestones::{MilestoneService, MilestoneUpdate, NewMilestone};
pub use transactions::{NewTransaction, TransactionService};
