/// Errors from the photo API boundary.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The configured base URL is missing or not an absolute URL.
    #[error("Invalid base URL '{0}' given")]
    InvalidBaseUrl(String),

    /// The photo API answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body, verbatim.
        body: String,
    },

    /// No usable response: DNS, connection, timeout, or an undecodable body.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// A transport failure reported by a gateway without a real HTTP client.
    #[error("{0}")]
    Unavailable(String),
}

impl GatewayError {
    /// HTTP status of the upstream response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Status { status, .. } => Some(*status),
            GatewayError::Transport(err) => err.status().map(|s| s.as_u16()),
            GatewayError::InvalidBaseUrl(_) | GatewayError::Unavailable(_) => None,
        }
    }

    /// Whether the upstream reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_embeds_code_and_body() {
        let err = GatewayError::Status {
            status: 500,
            body: "Connection timeout".into(),
        };
        assert_eq!(err.to_string(), "HTTP 500: Connection timeout");
        assert_eq!(err.status(), Some(500));
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_is_detected_from_status() {
        let err = GatewayError::Status {
            status: 404,
            body: "Photo not found with ID 1".into(),
        };
        assert!(err.is_not_found());
    }

    #[test]
    fn transport_error_is_displayed_unwrapped() {
        let req_err = reqwest::Client::new().get("://bad").build().unwrap_err();
        let expected = req_err.to_string();
        let err = GatewayError::Transport(req_err);
        assert_eq!(err.to_string(), expected);
        assert_eq!(err.status(), None);
    }

    #[test]
    fn unavailable_has_no_status() {
        let err = GatewayError::Unavailable("connection refused".into());
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(err.status(), None);
    }
}
