use crux_http::Response;
use serde::{Deserialize, Serialize};

use crate::model::{OperatorDecision, Report, ReportId};

pub type FetchResult = crux_http::Result<Response<Vec<Report>>>;
pub type MutationResult = crux_http::Result<Response<Vec<u8>>>;

#[derive(Debug, Serialize, Deserialize)]
pub enum Event {
    // --- Shell-initiated ---
    AppStarted,
    SetStatusRequested {
        id: ReportId,
        decision: OperatorDecision,
    },
    DeleteRequested {
        id: ReportId,
    },
    ShowOnMap {
        id: ReportId,
    },
    CloseMap,

    // --- Capability responses ---
    #[serde(skip)]
    ReportsFetched(Box<FetchResult>),
    #[serde(skip)]
    StatusUpdated {
        id: ReportId,
        decision: OperatorDecision,
        result: Box<MutationResult>,
    },
    #[serde(skip)]
    DeleteConfirmed { id: ReportId, confirmed: bool },
    #[serde(skip)]
    ReportDeleted {
        id: ReportId,
        result: Box<MutationResult>,
    },
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AppStarted => "app_started",
            Self::SetStatusRequested { .. } => "set_status_requested",
            Self::DeleteRequested { .. } => "delete_requested",
            Self::ShowOnMap { .. } => "show_on_map",
            Self::CloseMap => "close_map",
            Self::ReportsFetched(_) => "reports_fetched",
            Self::StatusUpdated { .. } => "status_updated",
            Self::DeleteConfirmed { .. } => "delete_confirmed",
            Self::ReportDeleted { .. } => "report_deleted",
        }
    }

    #[must_use]
    pub const fn is_user_initiated(&self) -> bool {
        matches!(
            self,
            Self::SetStatusRequested { .. }
                | Self::DeleteRequested { .. }
                | Self::ShowOnMap { .. }
                | Self::CloseMap
                | Self::DeleteConfirmed { .. }
        )
    }
}
