#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_lines)]

pub mod app;
pub mod capabilities;
pub mod config;
pub mod error;
pub mod event;
pub mod model;
pub mod view;

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use config::{AdminConfig, ConfigError};
pub use crux_core::{render::Render, App as CruxApp};
pub use error::{RemoteError, RemoteOperation};
pub use event::Event;
pub use model::{
    GeoLocation, Model, OperatorDecision, Report, ReportId, ReportList, ReportStatus, Selection,
};
pub use view::{MapPanel, ReportRow, ViewModel};

pub const DEFAULT_API_BASE_URL: &str = "https://backend-0bq4.onrender.com";

pub const REPORTS_PATH: &[&str] = &["api", "reports", "all"];
pub const UPDATE_STATUS_PATH: &[&str] = &["api", "admin", "update-status"];
pub const DELETE_REPORT_PATH: &[&str] = &["api", "admin", "delete"];
pub const UPLOADS_PATH: &[&str] = &["uploads"];

pub const PANEL_TITLE: &str = "Admin Panel";
pub const MAP_PANEL_TITLE: &str = "Location Map";
pub const BUSY_LABEL: &str = "Loading...";
pub const TABLE_COLUMNS: &[&str] = &["Description", "Image", "Location", "Status", "Actions"];

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this report?";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch reports";
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update status";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete report";
pub const DELETE_SUCCESS_MESSAGE: &str = "Report deleted";
