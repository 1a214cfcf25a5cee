use thiserror::Error;

/// Errors produced at the REST boundary. They never escape the API loop:
/// each one is logged and surfaced to the UI as a transient notification.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend returned {status} for {endpoint}")]
    Status { endpoint: &'static str, status: u16 },

    #[error("unexpected response shape from {endpoint}: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{action} is not wired to the backend yet")]
    NotImplemented { action: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_names_the_endpoint() {
        let source = serde_json::from_str::<Vec<u8>>("{}").unwrap_err();
        let err = ApiError::Decode {
            endpoint: "/api/getusers",
            source,
        };
        assert!(err.to_string().contains("/api/getusers"));
    }

    #[test]
    fn not_implemented_reads_as_a_stub_message() {
        let err = ApiError::NotImplemented {
            action: "course approval",
        };
        assert_eq!(
            err.to_string(),
            "course approval is not wired to the backend yet"
        );
    }
}
