//! Fire-and-forget notices for the operator (the shell decides how they
//! are shown).

use crux_core::capability::{CapabilityContext, Operation};
use crux_core::macros::Capability;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotifyOperation {
    pub message: String,
}

impl Operation for NotifyOperation {
    type Output = ();
}

#[derive(Capability)]
pub struct Notify<Ev> {
    context: CapabilityContext<NotifyOperation, Ev>,
}

impl<Ev> Notify<Ev>
where
    Ev: 'static,
{
    #[must_use]
    pub fn new(context: CapabilityContext<NotifyOperation, Ev>) -> Self {
        Self { context }
    }

    pub fn notify(&self, message: impl Into<String>) {
        let ctx = self.context.clone();
        let operation = NotifyOperation {
            message: message.into(),
        };
        self.context.spawn(async move {
            ctx.notify_shell(operation).await;
        });
    }
}
