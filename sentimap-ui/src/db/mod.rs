//! Database access layer for sentimap-ui
//!
//! Per-table query helpers over the shared pool. Schema creation and
//! migrations live in sentimap-common.

pub mod queries;
pub mod users;

pub use queries::{delete_query, history_for_user, map_points, save_query, MapPoint};
pub use users::{create_user, get_user_by_token};
