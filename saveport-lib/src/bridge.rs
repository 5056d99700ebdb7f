use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use futures::channel::oneshot;
use log::{debug, warn};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use saveport_protocol::WILDCARD_MIME;

use crate::error::Error;
use crate::picker::{DocumentPicker, PickRequest};

/// Identifies one in-flight save request, so a late picker callback from a
/// superseded request cannot complete a newer one.
pub type RequestId = Uuid;

/// Outcome reported by the platform picker when it is dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    /// The user confirmed a destination.
    Confirmed(PathBuf),
    /// The user dismissed the picker without choosing a destination.
    Cancelled,
}

type SaveSender = oneshot::Sender<Result<Option<String>, Error>>;

/// The single in-flight save request, held while the picker is open.
struct PendingSaveRequest {
    id: RequestId,
    file_name: String,
    bytes_b64: String,
    sender: SaveSender,
}

enum BridgeState {
    Idle,
    AwaitingPicker(PendingSaveRequest),
}

/// Awaitable handle for one save request.
///
/// Resolves when the picker returns: `Ok(Some(identifier))` after a
/// successful write, `Ok(None)` when the user cancelled, or the error that
/// stopped the save.
pub struct SaveTicket {
    receiver: oneshot::Receiver<Result<Option<String>, Error>>,
}

impl SaveTicket {
    pub async fn wait(self) -> Result<Option<String>, Error> {
        self.receiver.await.map_err(|_| Error::BridgeClosed)?
    }
}

/// Bridge between a save request and the platform's destination picker.
///
/// Holds at most one pending request at a time. `request_save` hands the
/// suggested name and MIME type to the picker and returns immediately; the
/// picker later reports back through [`SaveBridge::on_picker_result`], which
/// decodes the content, writes it to the chosen destination and resolves the
/// caller's [`SaveTicket`].
///
/// Clones share state, so a picker implementation can carry a clone into
/// whatever callback context the platform dictates.
pub struct SaveBridge {
    state: Arc<Mutex<BridgeState>>,
    picker: Arc<dyn DocumentPicker>,
}

impl Clone for SaveBridge {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            picker: self.picker.clone(),
        }
    }
}

impl SaveBridge {
    pub fn new<P: DocumentPicker + 'static>(picker: P) -> Self {
        Self {
            state: Arc::new(Mutex::new(BridgeState::Idle)),
            picker: Arc::new(picker),
        }
    }

    /// Starts a save request: stores it as pending and opens the picker.
    ///
    /// Fails synchronously with [`Error::InvalidArguments`] when `file_name`
    /// is empty; the picker is not invoked in that case. `mime_type` falls
    /// back to `*/*` when absent.
    ///
    /// A request arriving while another is pending supersedes it: the older
    /// ticket resolves with [`Error::Superseded`] and the new request takes
    /// the slot.
    pub fn request_save(
        &self,
        file_name: &str,
        bytes_b64: &str,
        mime_type: Option<&str>,
    ) -> Result<SaveTicket, Error> {
        if file_name.is_empty() {
            return Err(Error::InvalidArguments);
        }

        let id = Uuid::new_v4();
        let mime_type = mime_type.unwrap_or(WILDCARD_MIME).to_string();
        let (sender, receiver) = oneshot::channel();
        let pending = PendingSaveRequest {
            id,
            file_name: file_name.to_string(),
            bytes_b64: bytes_b64.to_string(),
            sender,
        };

        let previous = {
            let mut state = self.state.lock().unwrap();
            std::mem::replace(&mut *state, BridgeState::AwaitingPicker(pending))
        };
        if let BridgeState::AwaitingPicker(old) = previous {
            warn!(
                "Save request {} ({}) superseded by {} before the picker returned",
                old.id, old.file_name, id
            );
            if old.sender.send(Err(Error::Superseded)).is_err() {
                debug!("Superseded ticket for {} was already dropped", old.id);
            }
        }

        debug!(
            "Opening picker for request {}: file_name={}, mime_type={}",
            id, file_name, mime_type
        );
        self.picker.open(
            PickRequest {
                id,
                suggested_name: file_name.to_string(),
                mime_type,
            },
            self.clone(),
        );

        Ok(SaveTicket { receiver })
    }

    /// Consumes the pending request and resolves its ticket.
    ///
    /// Called by the picker implementation exactly once per `open`. A result
    /// whose `id` no longer matches the pending slot is dropped: either no
    /// request is pending, or the slot now belongs to a newer request.
    pub async fn on_picker_result(&self, id: RequestId, outcome: PickerOutcome) {
        let pending = {
            let mut state = self.state.lock().unwrap();
            match std::mem::replace(&mut *state, BridgeState::Idle) {
                BridgeState::AwaitingPicker(p) if p.id == id => Some(p),
                other => {
                    // Not ours to complete; put the slot back untouched.
                    *state = other;
                    None
                }
            }
        };

        let Some(pending) = pending else {
            warn!("Picker result for {} but no matching request was pending", id);
            return;
        };

        let result = match outcome {
            PickerOutcome::Cancelled => {
                debug!("Picker cancelled for request {}", id);
                Ok(None)
            }
            PickerOutcome::Confirmed(path) => {
                write_destination(&path, &pending.bytes_b64).await
            }
        };

        if pending.sender.send(result).is_err() {
            warn!(
                "Failed to deliver save result for {} (receiver dropped)",
                id
            );
        }
    }
}

/// Decodes the content and writes it to `path`, returning the destination
/// identifier. The file handle is closed on every path out of here.
async fn write_destination(path: &Path, bytes_b64: &str) -> Result<Option<String>, Error> {
    let decoded = BASE64_STANDARD.decode(bytes_b64)?;

    let mut file = tokio::fs::File::create(path)
        .await
        .map_err(|e| Error::DestinationWrite(e, path.to_path_buf()))?;
    file.write_all(&decoded)
        .await
        .map_err(|e| Error::DestinationWrite(e, path.to_path_buf()))?;
    file.flush()
        .await
        .map_err(|e| Error::DestinationWrite(e, path.to_path_buf()))?;

    debug!("Wrote {} bytes to {}", decoded.len(), path.display());
    Ok(Some(path.display().to_string()))
}
