//! Ports the core drives. `Http` and `Render` come from Crux; `Confirm` and
//! `Notify` are answered by the shell's own UI.

mod confirm;
mod notify;

pub use self::confirm::{Confirm, ConfirmOperation};
pub use self::notify::{Notify, NotifyOperation};
pub use crux_core::render::Render;
pub use crux_http::Http;

use crate::app::App;
use crate::event::Event;

#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub http: Http<Event>,
    pub render: Render<Event>,
    pub confirm: Confirm<Event>,
    pub notify: Notify<Event>,
}
