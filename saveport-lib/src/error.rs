use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level error enum for the Saveport library.
#[derive(Error, Debug)]
pub enum Error {
    #[error("fileName or bytes missing")]
    InvalidArguments,

    #[error("Base64 decoding error: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    #[error("Failed to write destination {1}: {0}")]
    DestinationWrite(io::Error, PathBuf),

    #[error("Request superseded by a newer save request")]
    Superseded,

    #[error("Bridge dropped before the picker returned")]
    BridgeClosed,
}
