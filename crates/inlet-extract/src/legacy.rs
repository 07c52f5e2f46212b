//! Tool-backed extraction for legacy binary formats.
//!
//! Both strategies write the bytes to a temp file and shell out to an
//! external executable, bounded by a fixed wall-clock timeout. A
//! missing tool, a nonzero exit, or a timeout all surface as errors the
//! facade degrades to empty text.

use crate::error::{ExtractError, ExtractResult};
use crate::ToolConfig;
use inlet_core::{DECK_CONVERT_TIMEOUT_SECS, LEGACY_WORD_TIMEOUT_SECS};
use std::process::{Command, Output, Stdio};
use std::time::{Duration, Instant};
use tracing::debug;

/// Convert a legacy slide deck to text with the document-conversion
/// tool. The tool writes `<stem>.txt` next to its output directory.
pub(crate) fn convert_deck(content: &[u8], tools: &ToolConfig) -> ExtractResult<String> {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("deck.ppt");
    std::fs::write(&input_path, content)?;

    let mut command = Command::new(&tools.soffice);
    command
        .arg("--headless")
        .arg("--convert-to")
        .arg("txt")
        .arg("--outdir")
        .arg(dir.path())
        .arg(&input_path);
    debug!("Converting legacy deck with {}", tools.soffice);

    let output = run_with_timeout(command, Duration::from_secs(DECK_CONVERT_TIMEOUT_SECS))?
        .ok_or(ExtractError::ToolTimeout {
            tool: "soffice",
            seconds: DECK_CONVERT_TIMEOUT_SECS,
        })?;

    if !output.status.success() {
        return Err(ExtractError::ToolFailed {
            tool: "soffice",
            status: output.status.code().unwrap_or(-1),
        });
    }

    let text = std::fs::read_to_string(dir.path().join("deck.txt"))?;
    Ok(text.trim().to_string())
}

/// Extract text from a legacy word document with the plain-text
/// extraction tool, reading its stdout.
pub(crate) fn extract_doc(content: &[u8], tools: &ToolConfig) -> ExtractResult<String> {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("document.doc");
    std::fs::write(&input_path, content)?;

    let mut command = Command::new(&tools.antiword);
    command.arg(&input_path);
    debug!("Extracting legacy document with {}", tools.antiword);

    let output = run_with_timeout(command, Duration::from_secs(LEGACY_WORD_TIMEOUT_SECS))?
        .ok_or(ExtractError::ToolTimeout {
            tool: "antiword",
            seconds: LEGACY_WORD_TIMEOUT_SECS,
        })?;

    if !output.status.success() {
        return Err(ExtractError::ToolFailed {
            tool: "antiword",
            status: output.status.code().unwrap_or(-1),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Run a command, killing it once the timeout elapses. Returns `None`
/// on timeout.
fn run_with_timeout(mut command: Command, timeout: Duration) -> std::io::Result<Option<Output>> {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = command.spawn()?;
    let start = Instant::now();

    loop {
        if child.try_wait()?.is_some() {
            return child.wait_with_output().map(Some);
        }
        if start.elapsed() >= timeout {
            let _ = child.kill();
            let _ = child.wait();
            return Ok(None);
        }
        std::thread::sleep(Duration::from_millis(100));
    }
}
