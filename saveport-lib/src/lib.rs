//! Saveport: a bridge between a UI-layer `saveFile` request and the
//! platform's destination picker.
//!
//! The caller supplies a file name, base64 content and an optional MIME
//! type; the bridge opens a [`picker::DocumentPicker`], writes the decoded
//! bytes to whatever destination the user confirms, and resolves a
//! [`bridge::SaveTicket`] with the destination identifier (`None` when the
//! user cancelled).

pub mod bridge;
pub mod error;
pub mod handler;
pub mod picker;

pub use futures;
pub use log;
pub use saveport_protocol as protocol;
pub use tokio;

pub use bridge::{PickerOutcome, RequestId, SaveBridge, SaveTicket};
pub use error::Error;
pub use handler::{handle_method, handle_request};
pub use picker::{DocumentPicker, NativePicker, PickRequest};
