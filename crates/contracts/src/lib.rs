//! Record shapes shared by the dashboard frontend and the data server.

pub mod domain;
pub mod enums;
