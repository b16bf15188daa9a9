//! D100 sales commission dashboard: data shapes and the formulas the
//! dashboard cards render.

pub mod drivers;
pub mod dto;
pub mod history;
pub mod milestones;
pub mod payments;
pub mod penalties;
pub mod profile;
pub mod progress;
pub mod simulator;

pub use dto::*;
