//! One-shot category loading per form activation
//!
//! The fetch runs off the UI loop. Its outcome comes back as a
//! `CategoriesSettled` message tagged with the activation that started it, so
//! a form that was deactivated in the meantime can discard it.

use crate::events::AppEvent;
use crate::models::Category;
use crate::services::CategorySource;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Identifies one activation of a form instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation(pub(super) u64);

/// Outcome of a category fetch
///
/// `categories` is `None` when the fetch failed; the failure itself has
/// already been logged by the loader.
#[derive(Debug, Clone)]
pub struct CategoriesSettled {
    pub activation: Activation,
    pub categories: Option<Vec<Category>>,
}

/// Fetch categories once and always produce a settled outcome
pub async fn load(source: &dyn CategorySource, activation: Activation) -> CategoriesSettled {
    let categories = match source.list_categories().await {
        Ok(list) => {
            tracing::info!("Loaded {} categories", list.len());
            Some(list)
        }
        Err(e) => {
            tracing::warn!("Failed to load categories: {}", e);
            None
        }
    };

    CategoriesSettled {
        activation,
        categories,
    }
}

/// Run `load` on a background task and deliver the outcome to the UI loop
pub fn spawn(
    source: Arc<dyn CategorySource>,
    activation: Activation,
    tx: mpsc::Sender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let settled = load(source.as_ref(), activation).await;
        // Receiver gone means the UI already shut down
        let _ = tx.send(AppEvent::CategoriesSettled(settled)).await;
    })
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::services::ServiceError;
    use futures::future::{self, BoxFuture};
    use futures::FutureExt;

    /// Category source with a canned answer
    pub struct StaticCategories(pub Result<Vec<Category>, String>);

    impl StaticCategories {
        pub fn ok(categories: Vec<Category>) -> Self {
            Self(Ok(categories))
        }

        pub fn failing(message: &str) -> Self {
            Self(Err(message.to_string()))
        }
    }

    impl CategorySource for StaticCategories {
        fn list_categories(&self) -> BoxFuture<'_, Result<Vec<Category>, ServiceError>> {
            let result = self
                .0
                .clone()
                .map_err(ServiceError::Network);
            future::ready(result).boxed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::StaticCategories;
    use super::*;

    #[tokio::test]
    async fn test_load_success_carries_list() {
        let source = StaticCategories::ok(vec![Category::new("1", "Work")]);
        let settled = load(&source, Activation(3)).await;

        assert_eq!(settled.activation, Activation(3));
        assert_eq!(settled.categories, Some(vec![Category::new("1", "Work")]));
    }

    #[tokio::test]
    async fn test_load_failure_settles_without_list() {
        let source = StaticCategories::failing("connection refused");
        let settled = load(&source, Activation(1)).await;

        assert_eq!(settled.activation, Activation(1));
        assert!(settled.categories.is_none());
    }

    #[tokio::test]
    async fn test_spawn_delivers_to_channel() {
        let (tx, mut rx) = mpsc::channel(4);
        let source: Arc<dyn CategorySource> =
            Arc::new(StaticCategories::ok(vec![Category::new("2", "Family")]));

        spawn(source, Activation(7), tx).await.unwrap();

        match rx.recv().await {
            Some(AppEvent::CategoriesSettled(settled)) => {
                assert_eq!(settled.activation, Activation(7));
                assert_eq!(settled.categories.unwrap()[0].name, "Family");
            }
            other => panic!("Expected CategoriesSettled, got {:?}", other),
        }
    }
}
