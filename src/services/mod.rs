//! MyContacts API clients
//!
//! - `CategorySource`: the seam the form loads its category options through
//! - `CategoriesService`: HTTP implementation (`GET /categories`)
//! - `ContactsService`: contact creation (`POST /contacts`)

mod categories;
mod contacts;

pub use categories::CategoriesService;
pub use contacts::ContactsService;

use crate::config::Config;
use crate::models::Category;
use futures::future::BoxFuture;
use std::fmt;
use std::time::Duration;

/// Errors from talking to the MyContacts API
#[derive(Debug)]
pub enum ServiceError {
    /// Connection, DNS or timeout failure
    Network(String),
    /// Non-success HTTP status
    Api { status: u16, message: String },
    /// Response body did not match the expected shape
    Decode(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Api { status, message } => write!(f, "API error ({}): {}", status, message),
            Self::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

/// Asynchronous source of category options
///
/// Called once per form activation. Implementations must be shareable with
/// the spawned loader task.
pub trait CategorySource: Send + Sync {
    fn list_categories(&self) -> BoxFuture<'_, Result<Vec<Category>, ServiceError>>;
}

/// Build the shared HTTP client with the configured timeout
pub fn build_client(config: &Config) -> Result<reqwest::Client, ServiceError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(|e| ServiceError::Network(format!("Failed to create HTTP client: {}", e)))
}

/// Join the API base URL and a resource path
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

/// Turn a non-success response into `ServiceError::Api`
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    Err(ServiceError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Local HTTP server for exercising the clients
#[cfg(test)]
pub(crate) mod test_server {
    /// Serve `router` on an ephemeral port and return its base URL
    pub async fn serve(router: axum::Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        assert_eq!(
            endpoint("http://localhost:3001/", "categories"),
            "http://localhost:3001/categories"
        );
        assert_eq!(
            endpoint("http://localhost:3001", "contacts"),
            "http://localhost:3001/contacts"
        );
    }

    #[test]
    fn test_error_display() {
        let err = ServiceError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "API error (500): boom");
    }
}
