//! Metron MCP Server
//!
//! Line-delimited JSON-RPC over stdio. Logs go to stderr so stdout stays a
//! clean protocol channel.
//!
//! Tools:
//! - convert: Convert a value between two units of a category
//! - list_categories: List the unit categories
//! - list_units: List the unit labels of a category

mod config;
mod protocol;
mod tools;

use std::io::{self, BufRead, IsTerminal, Write};

use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use config::ServerConfig;
use protocol::{handle_request, McpError, McpRequest, McpResponse, PARSE_ERROR};

fn init_logging(config: &ServerConfig) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn write_response(response: &McpResponse) -> io::Result<()> {
    let response_json = serde_json::to_string(response)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", response_json)?;
    stdout.flush()
}

/// Handle one input line. Blank lines and notifications produce no response.
fn handle_line(config: &ServerConfig, line: &str) -> Option<McpResponse> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let request: McpRequest = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "unparseable request");
            return Some(McpResponse::failure(
                None,
                McpError::new(PARSE_ERROR, format!("Parse error: {}", e)),
            ));
        }
    };

    debug!(method = %request.method, "processing");
    let response = handle_request(config, &request);

    if request.id.is_none() {
        debug!(method = %request.method, "notification processed");
        return None;
    }
    Some(response)
}

fn main() {
    let config = ServerConfig::from_env();
    init_logging(&config);

    info!(
        version = protocol::SERVER_VERSION,
        protocol = protocol::PROTOCOL_VERSION,
        scientific_default = config.scientific_default,
        "Metron MCP server started"
    );

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let Some(response) = handle_line(&config, &line) else {
                    continue;
                };
                if let Err(e) = write_response(&response) {
                    error!(error = %e, "failed to write response");
                    break;
                }
            }
            Err(e) => {
                error!(error = %e, "failed to read input");
                break;
            }
        }
    }

    info!("server shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_garbage_line_is_parse_error() {
        let response = handle_line(&ServerConfig::default(), "not json {").unwrap();
        assert!(response.id.is_none());
        assert!(response.result.is_none());
        assert_eq!(response.error.unwrap().code, PARSE_ERROR);
    }

    #[test]
    fn test_notification_gets_no_response() {
        let line = r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#;
        assert!(handle_line(&ServerConfig::default(), line).is_none());
    }

    #[test]
    fn test_blank_line_ignored() {
        assert!(handle_line(&ServerConfig::default(), "").is_none());
        assert!(handle_line(&ServerConfig::default(), "   \n").is_none());
    }

    #[test]
    fn test_request_line_answered() {
        let line = r#"{"jsonrpc":"2.0","id":3,"method":"ping"}"#;
        let response = handle_line(&ServerConfig::default(), line).unwrap();
        assert_eq!(response.id, Some(json!(3)));
        assert_eq!(response.result, Some(json!({})));
    }
}
