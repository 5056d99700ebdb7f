use log::{debug, error};

use saveport_protocol::{
    ErrorCode, ErrorResponse, Request, Response, SaveFileRequest, SaveResultResponse,
    SAVE_FILE_METHOD,
};

use crate::bridge::SaveBridge;
use crate::error::Error;

/// Handles one typed request from the channel and produces the response.
pub async fn handle_request(request: Request, bridge: &SaveBridge) -> Response {
    match request {
        Request::SaveFile(req) => handle_save_file(req, bridge).await,
    }
}

/// Router for hosts whose channel delivers `(method, arguments)` pairs, the
/// shape a UI-layer method channel speaks. Arguments arrive as a JSON object.
pub async fn handle_method(method: &str, arguments: &str, bridge: &SaveBridge) -> Response {
    if method != SAVE_FILE_METHOD {
        debug!("Rejecting unknown channel method: {}", method);
        return error_response(
            ErrorCode::NotImplemented,
            format!("Unknown method: {}", method),
        );
    }

    match serde_json::from_str::<SaveFileRequest>(arguments) {
        Ok(req) => handle_save_file(req, bridge).await,
        Err(e) => error_response(
            ErrorCode::InvalidArgs,
            format!("Malformed saveFile arguments: {}", e),
        ),
    }
}

async fn handle_save_file(req: SaveFileRequest, bridge: &SaveBridge) -> Response {
    let (Some(file_name), Some(bytes)) = (req.file_name.as_deref(), req.bytes.as_deref()) else {
        return error_response(ErrorCode::InvalidArgs, "fileName or bytes missing".to_string());
    };

    let ticket = match bridge.request_save(file_name, bytes, req.mime_type.as_deref()) {
        Ok(ticket) => ticket,
        Err(e) => return error_for(e),
    };

    match ticket.wait().await {
        Ok(destination) => Response::SaveResult(SaveResultResponse { destination }),
        Err(e) => error_for(e),
    }
}

fn error_for(e: Error) -> Response {
    let code = match e {
        Error::InvalidArguments => ErrorCode::InvalidArgs,
        _ => ErrorCode::SaveError,
    };
    error!("saveFile failed ({}): {}", code, e);
    error_response(code, e.to_string())
}

fn error_response(code: ErrorCode, message: String) -> Response {
    Response::Error(ErrorResponse { code, message })
}
