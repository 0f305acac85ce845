//! HTTP API client for the blackjack server.
//!
//! One method per server command, all funnelled through a single request
//! routine that normalizes transport, protocol, and server-reported errors.

use log::{debug, error};
use reqwest::{Method, header::ACCEPT};
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;

const NO_QUERY: &[(String, String)] = &[];

/// The commands understood by the server, as URL path segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiCommand {
    Login,
    Logout,
    ViewTables,
    JoinTable,
    LeaveTable,
    Bet,
    Hit,
    Stand,
    DebugCredits,
    DebugGetPlayer,
    DebugGameState,
}

impl ApiCommand {
    /// The path segment appended to the base URL for this command.
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Logout => "logout",
            Self::ViewTables => "viewTables",
            Self::JoinTable => "joinTable",
            Self::LeaveTable => "leaveTable",
            Self::Bet => "bet",
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::DebugCredits => "debugCredits",
            Self::DebugGetPlayer => "debugGetPlayer",
            Self::DebugGameState => "debugGameState",
        }
    }

    /// The HTTP method the server expects for this command.
    pub fn method(self) -> Method {
        match self {
            Self::ViewTables | Self::DebugGetPlayer | Self::DebugGameState => Method::GET,
            _ => Method::POST,
        }
    }
}

/// Errors surfaced by API calls.
///
/// The three wire-level failure kinds stay distinguishable so callers can
/// decide between retrying elsewhere, reporting the server's message, or
/// treating the endpoint as broken. None are retried here.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The request never produced a response (DNS failure, connection
    /// refused, timeout).
    #[error("'{command}' failed in transport: {source}")]
    Transport {
        command: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// A response arrived but its body was not valid JSON.
    #[error("'{command}' returned a non-JSON body: {source}")]
    Protocol {
        command: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with `success: false`. Displays as the server's
    /// own error message; the full parsed body is kept for inspection.
    #[error("{message}")]
    Server {
        command: &'static str,
        message: String,
        body: Value,
    },
}

impl ApiError {
    /// The parsed response body, when one was available at failure time.
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Server { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// API client for communicating with the blackjack server.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a new API client from a configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if config.disable_pooling {
            // No idle connections are kept; each command opens a fresh one.
            builder = builder.pool_max_idle_per_host(0);
        }
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ApiError::Build)?;

        Ok(Self {
            base_url: config.base_url(),
            http,
        })
    }

    /// Create a client configured from environment variables.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(&ClientConfig::from_env())
    }

    /// The base URL this client sends commands to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Log a player into the game.
    pub async fn login<B>(&self, body: &B) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.send_command(ApiCommand::Login, Some(body), NO_QUERY).await
    }

    /// Log a player out of the game. A seated player is removed from their
    /// table, and any bet on the current hand is forfeited.
    pub async fn logout<B>(&self, body: &B) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.send_command(ApiCommand::Logout, Some(body), NO_QUERY).await
    }

    /// Get all the tables in the game with the players at them.
    pub async fn view_tables(&self) -> Result<Value, ApiError> {
        self.send_command::<Value>(ApiCommand::ViewTables, None, NO_QUERY)
            .await
    }

    /// Join a table to start playing.
    pub async fn join_table<B>(&self, body: &B) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.send_command(ApiCommand::JoinTable, Some(body), NO_QUERY)
            .await
    }

    /// Leave a table and return to the lobby.
    pub async fn leave_table<B>(&self, body: &B) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.send_command(ApiCommand::LeaveTable, Some(body), NO_QUERY)
            .await
    }

    /// Set the bet for the next hand.
    pub async fn bet<B>(&self, body: &B) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.send_command(ApiCommand::Bet, Some(body), NO_QUERY).await
    }

    /// Request another card for the current hand.
    pub async fn hit<B>(&self, body: &B) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.send_command(ApiCommand::Hit, Some(body), NO_QUERY).await
    }

    /// Stand on the current hand.
    pub async fn stand<B>(&self, body: &B) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.send_command(ApiCommand::Stand, Some(body), NO_QUERY).await
    }

    /// Set the amount of credits a player has.
    pub async fn debug_credits<B>(&self, body: &B) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.send_command(ApiCommand::DebugCredits, Some(body), NO_QUERY)
            .await
    }

    /// Get player information, filtered by the given query parameters.
    pub async fn debug_get_player(&self, query: &[(String, String)]) -> Result<Value, ApiError> {
        self.send_command::<Value>(ApiCommand::DebugGetPlayer, None, query)
            .await
    }

    /// Get game state information, filtered by the given query parameters.
    pub async fn debug_game_state(&self, query: &[(String, String)]) -> Result<Value, ApiError> {
        self.send_command::<Value>(ApiCommand::DebugGameState, None, query)
            .await
    }

    /// Send a command to the server and normalize the outcome.
    ///
    /// Joins the base URL with the command's path segment, serializes `body`
    /// as JSON when present, and appends `query` when non-empty. The parsed
    /// response body is returned unless the transport fails, the body is not
    /// JSON, or the body carries `success: false`.
    async fn send_command<B>(
        &self,
        command: ApiCommand,
        body: Option<&B>,
        query: &[(String, String)],
    ) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let name = command.path();
        let url = format!("{}/{}", self.base_url, name);

        let mut request = self
            .http
            .request(command.method(), &url)
            .header(ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(|source| {
            error!("{name}: {source}");
            ApiError::Transport {
                command: name,
                source,
            }
        })?;

        // Status codes are not significant on this API; the body's success
        // flag is the only application-level signal.
        let body: Value = response.json().await.map_err(|source| {
            error!("{name}: {source}");
            ApiError::Protocol {
                command: name,
                source,
            }
        })?;

        if body.get("success").and_then(Value::as_bool) == Some(false) {
            error!("{name}: {body}");
            let message = body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("server reported failure")
                .to_string();
            return Err(ApiError::Server {
                command: name,
                message,
                body,
            });
        }

        debug!("{name}: {body}");
        Ok(body)
    }
}
