//! Category listing over HTTP

use super::{check_status, endpoint, CategorySource, ServiceError};
use crate::models::Category;
use futures::future::BoxFuture;
use futures::FutureExt;

/// `GET {api_url}/categories`
#[derive(Clone)]
pub struct CategoriesService {
    client: reqwest::Client,
    base_url: String,
}

impl CategoriesService {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch the ordered category list
    pub async fn list(&self) -> Result<Vec<Category>, ServiceError> {
        let url = endpoint(&self.base_url, "categories");
        tracing::debug!("Listing categories from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let response = check_status(response).await?;

        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        serde_json::from_str::<Vec<Category>>(&body)
            .map_err(|e| ServiceError::Decode(e.to_string()))
    }
}

impl CategorySource for CategoriesService {
    fn list_categories(&self) -> BoxFuture<'_, Result<Vec<Category>, ServiceError>> {
        self.list().boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_server;
    use axum::{http::StatusCode, routing::get, Json, Router};

    #[tokio::test]
    async fn test_list_categories_success() {
        let router = Router::new().route(
            "/categories",
            get(|| async {
                Json(serde_json::json!([
                    {"id": "1", "name": "Work"},
                    {"id": "2", "name": "Family"}
                ]))
            }),
        );
        let base_url = test_server::serve(router).await;

        let service = CategoriesService::new(reqwest::Client::new(), base_url);
        let categories = service.list_categories().await.unwrap();

        assert_eq!(
            categories,
            vec![Category::new("1", "Work"), Category::new("2", "Family")]
        );
    }

    #[tokio::test]
    async fn test_list_categories_server_error() {
        let router = Router::new().route(
            "/categories",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database offline") }),
        );
        let base_url = test_server::serve(router).await;

        let service = CategoriesService::new(reqwest::Client::new(), base_url);
        match service.list_categories().await {
            Err(ServiceError::Api { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "database offline");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_categories_bad_body() {
        let router = Router::new().route(
            "/categories",
            get(|| async { Json(serde_json::json!({"unexpected": true})) }),
        );
        let base_url = test_server::serve(router).await;

        let service = CategoriesService::new(reqwest::Client::new(), base_url);
        assert!(matches!(
            service.list_categories().await,
            Err(ServiceError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_list_categories_unreachable() {
        // Port 9 (discard) on localhost is not expected to accept HTTP
        let service = CategoriesService::new(reqwest::Client::new(), "http://127.0.0.1:9");
        assert!(matches!(
            service.list_categories().await,
            Err(ServiceError::Network(_))
        ));
    }
}
