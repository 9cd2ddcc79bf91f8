//! Yes/no prompt answered by the operator through the shell.

use crux_core::capability::{CapabilityContext, Operation};
use crux_core::macros::Capability;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfirmOperation {
    pub message: String,
}

impl Operation for ConfirmOperation {
    type Output = bool;
}

#[derive(Capability)]
pub struct Confirm<Ev> {
    context: CapabilityContext<ConfirmOperation, Ev>,
}

impl<Ev> Confirm<Ev>
where
    Ev: 'static,
{
    #[must_use]
    pub fn new(context: CapabilityContext<ConfirmOperation, Ev>) -> Self {
        Self { context }
    }

    /// Shows `message` and dispatches `callback(answer)` once the operator
    /// has answered.
    pub fn ask<F>(&self, message: impl Into<String>, callback: F)
    where
        F: FnOnce(bool) -> Ev + Send + 'static,
    {
        let ctx = self.context.clone();
        let operation = ConfirmOperation {
            message: message.into(),
        };
        self.context.spawn(async move {
            let confirmed = ctx.request_from_shell(operation).await;
            ctx.update_app(callback(confirmed));
        });
    }
}
