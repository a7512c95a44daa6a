pub mod dashboard;

pub use dashboard::SmartAutomationDashboard;
