//! Types and formulas shared by the backend and the frontend.

pub mod dashboards;
pub mod shared;
