// Contact submission worker
//
// Receives the values the form's submission handler queues, creates each
// contact through the API and reports the outcome back to the UI loop.
// Requests are sent one at a time in submission order.

use crate::events::AppEvent;
use crate::models::ContactSubmission;
use crate::services::ContactsService;
use tokio::sync::mpsc;

pub struct ContactSubmitter {
    service: ContactsService,
    submission_rx: mpsc::Receiver<ContactSubmission>,
    event_tx: mpsc::Sender<AppEvent>,
}

impl ContactSubmitter {
    pub fn new(
        service: ContactsService,
        submission_rx: mpsc::Receiver<ContactSubmission>,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        Self {
            service,
            submission_rx,
            event_tx,
        }
    }

    /// Process submissions until every sender is gone
    pub async fn run(mut self) {
        tracing::debug!("Contact submitter started");

        while let Some(contact) = self.submission_rx.recv().await {
            let name = contact.name.clone();

            let event = match self.service.create_contact(&contact).await {
                Ok(()) => {
                    tracing::info!("Contact '{}' created", name);
                    AppEvent::ContactCreated { name }
                }
                Err(e) => {
                    tracing::error!("Failed to create contact '{}': {}", name, e);
                    AppEvent::ContactFailed {
                        name,
                        error: e.to_string(),
                    }
                }
            };

            if self.event_tx.send(event).await.is_err() {
                // UI loop is gone; nobody left to report to
                break;
            }
        }

        tracing::debug!("Contact submitter shutting down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_server;
    use axum::{http::StatusCode, routing::post, Router};

    async fn run_one(router: Router, contact: ContactSubmission) -> AppEvent {
        let base_url = test_server::serve(router).await;
        let service = ContactsService::new(reqwest::Client::new(), base_url);

        let (submission_tx, submission_rx) = mpsc::channel(4);
        let (event_tx, mut event_rx) = mpsc::channel(4);
        let worker = tokio::spawn(ContactSubmitter::new(service, submission_rx, event_tx).run());

        submission_tx.send(contact).await.unwrap();
        drop(submission_tx);

        let event = event_rx.recv().await.unwrap();
        worker.await.unwrap();
        event
    }

    fn ana() -> ContactSubmission {
        ContactSubmission {
            name: "Ana".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_reports_created_contact() {
        let router = Router::new().route("/contacts", post(|| async { StatusCode::CREATED }));

        let event = run_one(router, ana()).await;
        assert!(matches!(event, AppEvent::ContactCreated { name } if name == "Ana"));
    }

    #[tokio::test]
    async fn test_reports_rejected_contact() {
        let router = Router::new().route(
            "/contacts",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database down") }),
        );

        let event = run_one(router, ana()).await;
        match event {
            AppEvent::ContactFailed { name, error } => {
                assert_eq!(name, "Ana");
                assert!(error.contains("500"));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
