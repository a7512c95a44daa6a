pub mod state;
pub mod tabs;
pub mod ui;
