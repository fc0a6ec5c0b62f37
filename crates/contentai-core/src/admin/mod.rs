//! Admin surface domain module.
//!
//! # Module Structure
//!
//! - `model`: dashboard statistics and user updates
//! - `filter`: client-side filtering of the user list

mod filter;
mod model;

pub use filter::{PlanFilter, UserFilter};
pub use model::{DashboardStats, GenerationCounts, UserCounts, UserUpdate};
