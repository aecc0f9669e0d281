//! HTTP implementation of the game service port.
//!
//! Talks to the service with a blocking reqwest client. The client keeps a
//! cookie store, so a service that scopes boards to a session cookie sees the
//! same session for every request this process makes.

use reqwest::blocking::{Client, Response};
use tracing::debug;

use crate::{
    Result,
    app::ClientConfig,
    board::{BoardSnapshot, MoveReply, MoveRequest, parse_move_reply, parse_snapshot},
    error::Error,
    ports::GameService,
};

/// Game service reached over HTTP.
///
/// # Examples
///
/// ```no_run
/// use boardsync::adapters::HttpGameService;
/// use boardsync::app::ClientConfig;
/// use boardsync::ports::GameService;
///
/// let config = ClientConfig::new("http://127.0.0.1:5000");
/// let mut service = HttpGameService::new(&config)?;
/// let snapshot = service.reset()?;
/// println!("{snapshot}");
/// # Ok::<(), boardsync::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct HttpGameService {
    http: Client,
    base_url: String,
}

impl HttpGameService {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = Client::builder()
            .cookie_store(true)
            .timeout(config.request_timeout())
            .build()
            .map_err(|source| Error::Transport {
                operation: "build HTTP client".to_string(),
                source,
            })?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn read(response: Response, operation: &str) -> Result<(u16, String)> {
        let status = response.status().as_u16();
        let body = response.text().map_err(|source| Error::Transport {
            operation: format!("read {operation} response"),
            source,
        })?;
        debug!(operation, status, bytes = body.len(), "service responded");
        Ok((status, body))
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Interpret a `/move` response.
///
/// Rejections are honoured whatever the status code, since services answer
/// them with a client-error status. Any other non-success status is a
/// transport failure.
pub fn decode_move_response(status: u16, body: &str) -> Result<MoveReply> {
    match parse_move_reply(body) {
        Ok(reply @ MoveReply::Rejected { .. }) => Ok(reply),
        Ok(reply) if is_success(status) => Ok(reply),
        Err(err) if is_success(status) => Err(err),
        _ => Err(Error::UnexpectedStatus {
            status,
            body: body.to_string(),
        }),
    }
}

/// Interpret a `/reset` response.
pub fn decode_reset_response(status: u16, body: &str) -> Result<BoardSnapshot> {
    if !is_success(status) {
        return Err(Error::UnexpectedStatus {
            status,
            body: body.to_string(),
        });
    }
    parse_snapshot(body, "reset")
}

impl GameService for HttpGameService {
    fn submit_move(&mut self, index: usize) -> Result<MoveReply> {
        let url = self.endpoint("move");
        debug!(%url, index, "POST move");

        let response = self
            .http
            .post(&url)
            .json(&MoveRequest { index })
            .send()
            .map_err(|source| Error::Transport {
                operation: format!("send move to {url}"),
                source,
            })?;

        let (status, body) = Self::read(response, "move")?;
        decode_move_response(status, &body)
    }

    fn reset(&mut self) -> Result<BoardSnapshot> {
        let url = self.endpoint("reset");
        debug!(%url, "POST reset");

        let response = self.http.post(&url).send().map_err(|source| Error::Transport {
            operation: format!("send reset to {url}"),
            source,
        })?;

        let (status, body) = Self::read(response, "reset")?;
        decode_reset_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;

    const SNAPSHOT: &str = r#"{"board":["","","","","A","","","",""],"current_player":"B","winner":"","game_over":false}"#;

    #[test]
    fn test_rejection_on_bad_request_status() {
        let reply =
            decode_move_response(400, r#"{"status":"error","message":"Game is over"}"#).unwrap();
        assert_eq!(
            reply,
            MoveReply::Rejected {
                message: "Game is over".to_string()
            }
        );
    }

    #[test]
    fn test_snapshot_on_success() {
        let MoveReply::Accepted(snapshot) = decode_move_response(200, SNAPSHOT).unwrap() else {
            panic!("expected snapshot");
        };
        assert_eq!(snapshot.current_player, Mark::B);
    }

    #[test]
    fn test_server_error_is_transport_failure() {
        let err = decode_move_response(500, "Internal Server Error").unwrap_err();
        assert!(matches!(err, Error::UnexpectedStatus { status: 500, .. }));
        assert!(err.is_transport());
    }

    #[test]
    fn test_snapshot_with_error_status_is_not_trusted() {
        let err = decode_move_response(502, SNAPSHOT).unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn test_reset_requires_success() {
        assert!(decode_reset_response(200, SNAPSHOT).is_ok());
        assert!(decode_reset_response(404, SNAPSHOT).is_err());
        assert!(decode_reset_response(200, "{}").unwrap_err().is_transport());
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let config = ClientConfig::new("http://localhost:5000/");
        let service = HttpGameService::new(&config).unwrap();
        assert_eq!(service.base_url(), "http://localhost:5000");
        assert_eq!(service.endpoint("move"), "http://localhost:5000/move");
    }
}
