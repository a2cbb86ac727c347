use thiserror::Error;

/// Ways a single upstream bid call can fail
///
/// These never escape the dispatcher: a failed call is logged and dropped,
/// and the auction proceeds with whatever the other upstreams returned.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// Network or connection error reaching the upstream
    #[error("Connection error: {0}")]
    Connection(String),

    /// Upstream answered with a status other than 200 OK or 201 Created
    #[error("Unexpected status: {0}")]
    Status(u16),

    /// Upstream body was not a decodable bid response
    #[error("Invalid bid response: {0}")]
    Decode(String),
}

/// Semantic validation failures for an inbound placement request
///
/// Structural problems (missing fields, bad JSON) are caught at decode time;
/// these cover values that decode fine but describe an unusable placement.
/// All of them map to HTTP 400 with an empty body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Request id is an empty string
    #[error("Request id must not be empty")]
    EmptyRequestId,

    /// Request carries no tiles to auction
    #[error("Request must contain at least one tile")]
    NoTiles,

    /// Tile width of zero derives a meaningless size constraint
    #[error("Tile {id}: width must be greater than zero")]
    InvalidWidth { id: u64 },

    /// Aspect ratio must derive a real, positive minimum height
    #[error("Tile {id}: ratio must be a positive finite number")]
    InvalidRatio { id: u64 },

    /// Context is missing the client IP
    #[error("Context ip must not be empty")]
    EmptyIp,

    /// Context is missing the user agent
    #[error("Context user agent must not be empty")]
    EmptyUserAgent,
}
