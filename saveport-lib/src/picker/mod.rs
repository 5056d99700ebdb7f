mod native;

pub use native::NativePicker;

use crate::bridge::{RequestId, SaveBridge};

/// What the bridge asks the picker to open: a "create document" dialog
/// suggesting `suggested_name` and constrained by `mime_type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickRequest {
    pub id: RequestId,
    pub suggested_name: String,
    pub mime_type: String,
}

/// Platform destination picker.
///
/// `open` must not block. The implementation eventually calls
/// `bridge.on_picker_result(request.id, outcome)` exactly once, whether the
/// user confirmed a destination or dismissed the dialog. A picker that never
/// reports back leaves the bridge awaiting it indefinitely.
pub trait DocumentPicker: Send + Sync {
    fn open(&self, request: PickRequest, bridge: SaveBridge);
}
