mod achievements;
mod commission_driver;
mod commission_summary;
mod dashboard;
mod dashboard_header;
mod driver_cards;
mod growth_volume;
mod historical_performance;
mod motivation_message;
mod payment_collection;
mod penalties;
mod profile_header;
mod simulation_tool;
mod weekly_commission;

pub use dashboard::SalesCommissionDashboard;
