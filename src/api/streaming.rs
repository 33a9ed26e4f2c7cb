use crate::api::models::StreamEvent;
use crate::error::{AuditError, Result};
use colored::*;
use futures::StreamExt;
use std::io::{self, Write};
use tokio::time::{timeout, Duration};

/// Splits a server-sent event byte stream into `data:` payloads.
///
/// Bytes are buffered until a newline arrives, so a multi-byte character
/// split across chunks is decoded whole.
#[derive(Default)]
pub struct SseDecoder {
    incomplete_line: Vec<u8>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk and return the data payloads of every line it completed.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.incomplete_line.extend_from_slice(chunk);

        let Some(last_newline_pos) = self.incomplete_line.iter().rposition(|&b| b == b'\n') else {
            return Vec::new();
        };
        let complete: Vec<u8> = self.incomplete_line.drain(..=last_newline_pos).collect();

        complete
            .split(|&b| b == b'\n')
            .filter_map(|line| {
                let line = String::from_utf8_lossy(line);
                let line = line.trim_end_matches('\r');
                if line.is_empty() || line.starts_with(':') {
                    return None;
                }
                let (field, value) = line.split_once(':')?;
                if field.trim() == "data" {
                    Some(value.trim_start().to_string())
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Print output text deltas as they arrive and return the full text.
pub async fn process_streaming_response(
    response: reqwest::Response,
    timeout_secs: u64,
    verbose: bool,
) -> Result<String> {
    let mut stream = response.bytes_stream();
    let mut decoder = SseDecoder::new();
    let mut assistant_response = String::new();
    let chunk_timeout = Duration::from_secs(timeout_secs);

    loop {
        let chunk = match timeout(chunk_timeout, stream.next()).await {
            Ok(Some(chunk)) => chunk?,
            Ok(None) => break,
            Err(_) => {
                eprintln!(
                    "{}",
                    format!(
                        "Error: Connection timeout - no data received for {} seconds",
                        timeout_secs
                    )
                    .red()
                );
                io::stdout().flush()?;
                return Err(AuditError::Timeout);
            }
        };

        for payload in decoder.push(&chunk) {
            if payload == "[DONE]" {
                continue;
            }
            match serde_json::from_str::<StreamEvent>(&payload) {
                Ok(StreamEvent::OutputTextDelta { delta }) => {
                    print!("{}", delta);
                    io::stdout().flush()?;
                    assistant_response.push_str(&delta);
                }
                Ok(StreamEvent::Completed { response }) => {
                    if verbose {
                        eprintln!(
                            "{}",
                            format!(
                                "\n[api] Stream completed (id={})",
                                response.id.as_deref().unwrap_or("?")
                            )
                            .dimmed()
                        );
                    }
                    println!();
                    return Ok(assistant_response);
                }
                Ok(StreamEvent::Failed { response }) => {
                    println!();
                    return Err(AuditError::ApiError {
                        status: 200,
                        message: response
                            .get("error")
                            .map(|e| e.to_string())
                            .unwrap_or_else(|| "response.failed".to_string()),
                    });
                }
                Ok(StreamEvent::Error { message }) => {
                    println!();
                    return Err(AuditError::ApiError {
                        status: 200,
                        message,
                    });
                }
                Ok(StreamEvent::Other) => {}
                Err(e) => {
                    if verbose {
                        eprintln!("{}", format!("[api] JSON parse error: {}", e).dimmed());
                    }
                }
            }
        }
    }

    println!();
    io::stdout().flush()?;
    Ok(assistant_response)
}
