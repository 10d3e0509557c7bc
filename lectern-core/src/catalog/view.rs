//! Derived read-only views over the course cache.

use std::sync::Arc;

use lectern_common::Course;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tokio_stream::{Stream, StreamExt};

/// A continuously reactive projection of the course cache onto one category.
///
/// Every read recomputes from the latest snapshot: matching courses only,
/// sorted ascending by sequence number. The view hands out fresh copies,
/// never the backing sequence.
pub struct CategoryView {
    rx: watch::Receiver<Arc<Vec<Course>>>,
    category: String,
}

impl CategoryView {
    pub(crate) fn new(rx: watch::Receiver<Arc<Vec<Course>>>, category: &str) -> Self {
        Self {
            rx,
            category: category.to_string(),
        }
    }

    /// The category this view projects.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Filtered, sorted copy of the current snapshot.
    pub fn current(&self) -> Vec<Course> {
        project(&self.rx.borrow(), &self.category)
    }

    /// Wait until the underlying cache publishes a new snapshot.
    ///
    /// Returns an error once the owning store has been dropped.
    pub async fn changed(&mut self) -> Result<(), watch::error::RecvError> {
        self.rx.changed().await
    }

    /// Adapt the view into a stream of filtered snapshots. The current
    /// snapshot is yielded first, then one item per cache publication.
    pub fn into_stream(self) -> impl Stream<Item = Vec<Course>> {
        let category = self.category;
        WatchStream::new(self.rx).map(move |courses| project(&courses, &category))
    }
}

fn project(courses: &[Course], category: &str) -> Vec<Course> {
    let mut matching: Vec<Course> = courses
        .iter()
        .filter(|course| course.category == category)
        .cloned()
        .collect();
    matching.sort_by_key(|course| course.seq_no);
    matching
}
