use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::{Model, Report, ReportId, ReportStatus};
use crate::{BUSY_LABEL, MAP_PANEL_TITLE, PANEL_TITLE, TABLE_COLUMNS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<ReportRow>,
    /// Approve, Reject and Delete are offered only when this is set.
    pub actions_enabled: bool,
    /// Shown in place of the row actions while a mutation is in flight.
    pub busy_label: Option<String>,
    pub map: Option<MapPanel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub id: ReportId,
    pub description: String,
    pub image_url: Option<String>,
    pub has_location: bool,
    pub status: ReportStatus,
    pub status_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPanel {
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl ViewModel {
    #[must_use]
    pub fn from_model(model: &Model) -> Self {
        Self {
            title: PANEL_TITLE.to_string(),
            columns: TABLE_COLUMNS.iter().map(ToString::to_string).collect(),
            rows: model
                .reports
                .iter()
                .map(|report| ReportRow::from_report(report, model))
                .collect(),
            actions_enabled: !model.busy,
            busy_label: model.busy.then(|| BUSY_LABEL.to_string()),
            map: model.selection.current().map(|location| MapPanel {
                title: MAP_PANEL_TITLE.to_string(),
                latitude: location.latitude,
                longitude: location.longitude,
            }),
        }
    }
}

impl ReportRow {
    fn from_report(report: &Report, model: &Model) -> Self {
        let image_url = report.image.as_deref().and_then(|image| {
            match model.config.image_url(image) {
                Ok(url) => Some(url.to_string()),
                Err(e) => {
                    warn!(report_id = %report.id, error = %e, "Could not resolve report image");
                    None
                }
            }
        });

        Self {
            id: report.id.clone(),
            description: report.description.clone(),
            image_url,
            has_location: report.location.is_some(),
            status: report.status,
            status_label: report.status.label().to_string(),
        }
    }
}
