//! Opens the native save dialog and writes a small text file wherever the
//! user points it. Run with `RUST_LOG=debug` to watch the request lifecycle.

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use saveport_lib::{NativePicker, SaveBridge};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let bridge = SaveBridge::new(NativePicker);
    let content = BASE64_STANDARD.encode(b"hello from saveport\n");
    let ticket = bridge.request_save("hello.txt", &content, Some("text/plain"))?;

    match ticket.wait().await? {
        Some(destination) => println!("Saved to {}", destination),
        None => println!("Save cancelled"),
    }
    Ok(())
}
