//! Contact creation over HTTP

use super::{check_status, endpoint, ServiceError};
use crate::models::ContactSubmission;

/// `POST {api_url}/contacts`
#[derive(Clone)]
pub struct ContactsService {
    client: reqwest::Client,
    base_url: String,
}

impl ContactsService {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub async fn create_contact(&self, contact: &ContactSubmission) -> Result<(), ServiceError> {
        let url = endpoint(&self.base_url, "contacts");

        let response = self
            .client
            .post(&url)
            .json(contact)
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_server;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn test_create_contact_posts_json_body() {
        let received: Arc<Mutex<Option<ContactSubmission>>> = Arc::new(Mutex::new(None));
        let sink = received.clone();

        let router = Router::new().route(
            "/contacts",
            post(move |Json(body): Json<ContactSubmission>| {
                let sink = sink.clone();
                async move {
                    *sink.lock().unwrap() = Some(body);
                    StatusCode::CREATED
                }
            }),
        );
        let base_url = test_server::serve(router).await;

        let contact = ContactSubmission {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: "(11) 98765-4321".to_string(),
            category_id: "1".to_string(),
        };

        let service = ContactsService::new(reqwest::Client::new(), base_url);
        service.create_contact(&contact).await.unwrap();

        assert_eq!(received.lock().unwrap().as_ref(), Some(&contact));
    }

    #[tokio::test]
    async fn test_create_contact_rejected() {
        let router = Router::new().route(
            "/contacts",
            post(|| async { (StatusCode::BAD_REQUEST, "Name is required") }),
        );
        let base_url = test_server::serve(router).await;

        let service = ContactsService::new(reqwest::Client::new(), base_url);
        let err = service
            .create_contact(&ContactSubmission::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Api { status: 400, .. }));
    }
}
