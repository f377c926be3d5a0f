use poem_openapi::Object;

/// Liveness report
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Always "healthy" when the process can answer
    pub status: String,

    /// Time of the check (RFC 3339)
    pub timestamp: String,
}

/// Body of every non-2xx response from the item endpoints
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Machine-readable code, e.g. "item_not_found"
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code, repeated for clients that only see the body
    pub status_code: u16,
}
