//! Reactive course collection store.

use std::sync::Arc;

use lectern_common::{Course, CourseChanges};
use thiserror::Error;
use tokio::sync::watch;
use tracing::{error, info};

use crate::catalog::client::{CatalogClientError, CourseGateway};
use crate::catalog::view::CategoryView;
use crate::loading::LoadingTracker;
use crate::messages::MessageHub;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("course not found: {0}")]
    CourseNotFound(String),
    #[error("gateway error: {0}")]
    Gateway(#[from] CatalogClientError),
}

/// In-memory cache of the full course collection.
///
/// Loaded once, then updated optimistically on save: the merged course is
/// published to every subscriber before the network confirmation resolves.
/// Each publication is a fresh `Arc<Vec<Course>>`, never an in-place
/// mutation, so a subscriber holding an earlier snapshot keeps a consistent
/// view.
pub struct CourseStore {
    gateway: Arc<dyn CourseGateway>,
    messages: MessageHub,
    loading: LoadingTracker,
    courses_tx: watch::Sender<Arc<Vec<Course>>>,
}

impl std::fmt::Debug for CourseStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CourseStore")
            .field("courses", &self.courses_tx.borrow().len())
            .finish_non_exhaustive()
    }
}

impl CourseStore {
    /// Create an empty store. Call [`CourseStore::load`] once afterwards to
    /// populate it.
    pub fn new(
        gateway: Arc<dyn CourseGateway>,
        messages: MessageHub,
        loading: LoadingTracker,
    ) -> Self {
        let (courses_tx, _) = watch::channel(Arc::new(Vec::new()));
        Self {
            gateway,
            messages,
            loading,
            courses_tx,
        }
    }

    /// Fetch the full course collection and replace the cache with it.
    ///
    /// Meant to run exactly once, right after construction. The loading
    /// tracker covers the duration of the request. On failure the cache
    /// keeps its previous contents (empty on first load), one error message
    /// is published, and the error is returned to the caller. Not retried.
    pub async fn load(&self) -> Result<(), StoreError> {
        let result = self
            .loading
            .show_until(self.gateway.fetch_all_courses())
            .await;
        match result {
            Ok(courses) => {
                info!("Loaded {} courses", courses.len());
                self.courses_tx.send_replace(Arc::new(courses));
                Ok(())
            }
            Err(e) => {
                error!("Failed to load courses: {}", e);
                self.messages.show_error("Couldn't load courses");
                Err(e.into())
            }
        }
    }

    /// Subscribe to the course collection. The receiver starts at the
    /// current snapshot and observes every subsequent publication.
    pub fn courses(&self) -> watch::Receiver<Arc<Vec<Course>>> {
        self.courses_tx.subscribe()
    }

    /// Current snapshot of the cached collection.
    pub fn snapshot(&self) -> Arc<Vec<Course>> {
        self.courses_tx.borrow().clone()
    }

    /// Apply a partial update to one course.
    ///
    /// The merged course is published to all subscribers immediately, then
    /// the update is sent to the backend. A failed confirmation is reported
    /// and returned, but the optimistic state is not rolled back.
    ///
    /// Saving an identifier that is not in the cache fails with
    /// [`StoreError::CourseNotFound`] and leaves the cache untouched.
    pub async fn save_course(
        &self,
        course_id: &str,
        changes: &CourseChanges,
    ) -> Result<(), StoreError> {
        let current = self.snapshot();
        let index = current
            .iter()
            .position(|course| course.id == course_id)
            .ok_or_else(|| StoreError::CourseNotFound(course_id.to_string()))?;

        let mut next = current.as_ref().clone();
        next[index] = changes.apply_to(&current[index]);
        self.courses_tx.send_replace(Arc::new(next));

        if let Err(e) = self.gateway.update_course(course_id, changes).await {
            error!("Failed to save course {}: {}", course_id, e);
            self.messages.show_error("Couldn't save course");
            return Err(e.into());
        }
        Ok(())
    }

    /// Continuously reactive view of one category, sorted ascending by
    /// sequence number.
    pub fn filter_by_category(&self, category: &str) -> CategoryView {
        CategoryView::new(self.courses_tx.subscribe(), category)
    }
}
