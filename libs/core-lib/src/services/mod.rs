//! Hierarchy-aware services over the store ports.
//!
//! Every child lookup is expressed relative to its parent. A missing record is
//! reported as `None`; store failures are passed through untouched.

pub mod plant_service;
pub mod portfolio_service;
pub mod tenant_service;

pub use plant_service::PlantService;
pub use portfolio_service::PortfolioService;
pub use tenant_service::TenantService;

use uuid::Uuid;

/// Picks `child_id` out of a list that was already fetched by parent key.
///
/// Scans the whole list, so it only suits parents with a small number of children.
fn find_scoped<T>(children: Vec<T>, child_id: Uuid, id_of: impl Fn(&T) -> Uuid) -> Option<T> {
    children.into_iter().find(|child| id_of(child) == child_id)
}
