pub mod d404_smart_automation;

pub use d404_smart_automation::ui::SmartAutomationDashboard;
