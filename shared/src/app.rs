use tracing::{debug, info, warn};

use crate::capabilities::Capabilities;
use crate::error::{RemoteError, RemoteOperation};
use crate::event::{Event, FetchResult, MutationResult};
use crate::model::{Model, OperatorDecision, Report, ReportId};
use crate::view::ViewModel;
use crate::{DELETE_CONFIRMATION, DELETE_SUCCESS_MESSAGE};

#[derive(Default)]
pub struct App;

#[derive(serde::Serialize)]
struct UpdateStatusBody {
    status: &'static str,
}

impl App {
    fn send_fetch_request(model: &Model, caps: &Capabilities) {
        let url = match model.config.reports_url() {
            Ok(url) => url,
            Err(e) => {
                Self::report_failure(RemoteOperation::FetchReports, &RemoteError::from(e), caps);
                return;
            }
        };

        caps.http
            .get(url.as_str())
            .expect_json::<Vec<Report>>()
            .send(|result| Event::ReportsFetched(Box::new(result)));
    }

    fn send_update_status_request(
        id: &ReportId,
        decision: OperatorDecision,
        model: &Model,
        caps: &Capabilities,
    ) -> Result<(), RemoteError> {
        let url = model.config.update_status_url(id)?;
        let body = UpdateStatusBody {
            status: decision.status().as_str(),
        };
        let id = id.clone();

        caps.http
            .put(url.as_str())
            .body_json(&body)?
            .send(move |result| Event::StatusUpdated {
                id,
                decision,
                result: Box::new(result),
            });
        Ok(())
    }

    fn send_delete_request(
        id: &ReportId,
        model: &Model,
        caps: &Capabilities,
    ) -> Result<(), RemoteError> {
        let url = model.config.delete_report_url(id)?;
        let id = id.clone();

        caps.http
            .delete(url.as_str())
            .send(move |result| Event::ReportDeleted {
                id,
                result: Box::new(result),
            });
        Ok(())
    }

    fn handle_fetch_response(result: FetchResult, model: &mut Model, caps: &Capabilities) {
        match result {
            Ok(mut response) => {
                let reports = response.take_body().unwrap_or_default();
                model.reports.replace_all(reports);
                info!(count = model.reports.len(), "Reports loaded");
            }
            Err(e) => {
                Self::report_failure(RemoteOperation::FetchReports, &RemoteError::from(e), caps);
            }
        }
    }

    fn handle_update_status_response(
        id: &ReportId,
        decision: OperatorDecision,
        result: MutationResult,
        model: &mut Model,
        caps: &Capabilities,
    ) {
        model.busy = false;

        match result {
            Ok(_) => {
                caps.notify.notify(decision.success_message());
                if !model.reports.patch_status(id, decision.status()) {
                    warn!(report_id = %id, "Status updated for a report no longer listed");
                }
            }
            Err(e) => {
                Self::report_failure(RemoteOperation::UpdateStatus, &RemoteError::from(e), caps);
            }
        }
    }

    fn handle_delete_response(
        id: &ReportId,
        result: MutationResult,
        model: &mut Model,
        caps: &Capabilities,
    ) {
        model.busy = false;

        match result {
            Ok(_) => {
                caps.notify.notify(DELETE_SUCCESS_MESSAGE);
                if model.reports.remove(id).is_none() {
                    warn!(report_id = %id, "Deleted a report no longer listed");
                }
            }
            Err(e) => {
                Self::report_failure(RemoteOperation::DeleteReport, &RemoteError::from(e), caps);
            }
        }
    }

    fn report_failure(operation: RemoteOperation, error: &RemoteError, caps: &Capabilities) {
        warn!(operation = operation.name(), error = %error, "Report service call failed");
        caps.notify.notify(operation.failure_message());
    }

    /// Whether a status change or delete on `id` may start now.
    fn can_mutate(id: &ReportId, model: &Model, event_name: &str) -> bool {
        if model.busy {
            warn!(event = event_name, report_id = %id, "Ignoring request while another is in flight");
            return false;
        }
        if !model.reports.contains(id) {
            warn!(event = event_name, report_id = %id, "Ignoring request for unknown report");
            return false;
        }
        true
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        let event_name = event.name();
        if event.is_user_initiated() {
            info!(event = event_name, "User action");
        } else {
            debug!(event = event_name, "Processing event");
        }

        match event {
            Event::AppStarted => {
                Self::send_fetch_request(model, caps);
            }

            Event::SetStatusRequested { id, decision } => {
                if !Self::can_mutate(&id, model, event_name) {
                    return;
                }

                model.busy = true;
                if let Err(e) = Self::send_update_status_request(&id, decision, model, caps) {
                    model.busy = false;
                    Self::report_failure(RemoteOperation::UpdateStatus, &e, caps);
                }
                caps.render.render();
            }

            Event::DeleteRequested { id } => {
                if !Self::can_mutate(&id, model, event_name) {
                    return;
                }

                caps.confirm.ask(DELETE_CONFIRMATION, move |confirmed| {
                    Event::DeleteConfirmed { id, confirmed }
                });
            }

            Event::DeleteConfirmed { id, confirmed } => {
                if !confirmed {
                    debug!(report_id = %id, "Delete declined");
                    return;
                }
                if !Self::can_mutate(&id, model, event_name) {
                    return;
                }

                model.busy = true;
                if let Err(e) = Self::send_delete_request(&id, model, caps) {
                    model.busy = false;
                    Self::report_failure(RemoteOperation::DeleteReport, &e, caps);
                }
                caps.render.render();
            }

            Event::ShowOnMap { id } => {
                match model.reports.get(&id).and_then(|report| report.location) {
                    Some(location) => model.selection.select(location),
                    None => model.selection.clear(),
                }
                caps.render.render();
            }

            Event::CloseMap => {
                model.selection.clear();
                caps.render.render();
            }

            Event::ReportsFetched(result) => {
                Self::handle_fetch_response(*result, model, caps);
                caps.render.render();
            }

            Event::StatusUpdated {
                id,
                decision,
                result,
            } => {
                Self::handle_update_status_response(&id, decision, *result, model, caps);
                caps.render.render();
            }

            Event::ReportDeleted { id, result } => {
                Self::handle_delete_response(&id, *result, model, caps);
                caps.render.render();
            }
        }
    }

    fn view(&self, model: &Model) -> ViewModel {
        ViewModel::from_model(model)
    }
}
