//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod bar_charts;
pub mod footer;
pub mod header;
pub mod hourly_chart;
pub mod logs;
pub mod metrics;
pub mod sidebar;
