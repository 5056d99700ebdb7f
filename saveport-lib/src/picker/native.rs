use std::path::Path;

use log::debug;
use rfd::AsyncFileDialog;

use crate::bridge::{PickerOutcome, SaveBridge};

use super::{DocumentPicker, PickRequest};

/// Destination picker backed by the OS save dialog (`rfd`).
///
/// The dialog runs on a spawned tokio task; `open` returns immediately.
/// `rfd` has no notion of MIME types, so the dialog is filtered by the
/// suggested name's extension when it has one.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativePicker;

impl DocumentPicker for NativePicker {
    fn open(&self, request: PickRequest, bridge: SaveBridge) {
        tokio::spawn(async move {
            let mut dialog = AsyncFileDialog::new().set_file_name(&request.suggested_name);
            if let Some(ext) = Path::new(&request.suggested_name)
                .extension()
                .and_then(|e| e.to_str())
            {
                dialog = dialog.add_filter(&request.mime_type, &[ext]);
            }

            let outcome = match dialog.save_file().await {
                Some(handle) => {
                    debug!(
                        "Save dialog for {} confirmed: {}",
                        request.id,
                        handle.path().display()
                    );
                    PickerOutcome::Confirmed(handle.path().to_path_buf())
                }
                None => {
                    debug!("Save dialog for {} dismissed", request.id);
                    PickerOutcome::Cancelled
                }
            };

            bridge.on_picker_result(request.id, outcome).await;
        });
    }
}
