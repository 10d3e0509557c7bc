//! API client for the course catalog backend.

use async_trait::async_trait;
use lectern_common::{Course, CourseChanges, Lesson};
use serde::Deserialize;
use tracing::debug;

/// Page size used to fetch "all" lessons of a course in one request. The
/// lessons endpoint is always paginated, so we ask for more than any course
/// has. Known limitation of the backend, not a feature.
const LESSONS_PAGE_SIZE: u32 = 10_000;

/// Page size for lesson search results.
const SEARCH_PAGE_SIZE: u32 = 100;

#[derive(Debug, thiserror::Error)]
pub enum CatalogClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server error (status {status}): {body}")]
    Server { status: u16, body: String },
    #[error("unexpected response format")]
    Parse,
}

/// Response envelope wrapping list endpoints.
#[derive(Debug, Deserialize)]
struct Payload<T> {
    payload: T,
}

/// Operations the course store needs from the backend.
///
/// Implemented by [`CatalogClient`] against the real API, and by in-memory
/// fakes in tests. The gateway is stateless: no caching, no retries, every
/// failure propagates to the caller unmodified.
#[async_trait]
pub trait CourseGateway: Send + Sync {
    /// Fetch the full course collection.
    async fn fetch_all_courses(&self) -> Result<Vec<Course>, CatalogClientError>;

    /// Fetch a single course by identifier.
    async fn fetch_course_by_id(&self, course_id: &str) -> Result<Course, CatalogClientError>;

    /// Fetch all lessons of a course.
    async fn fetch_lessons_for_course(
        &self,
        course_id: &str,
    ) -> Result<Vec<Lesson>, CatalogClientError>;

    /// Search lessons by free text.
    async fn search_lessons(&self, filter: &str) -> Result<Vec<Lesson>, CatalogClientError>;

    /// Persist a partial course update. The confirmation body is returned
    /// raw; it is not folded back into any cache.
    async fn update_course(
        &self,
        course_id: &str,
        changes: &CourseChanges,
    ) -> Result<serde_json::Value, CatalogClientError>;
}

/// A client for the course catalog REST API.
pub struct CatalogClient {
    base_url: String,
    http: reqwest::Client,
}

impl CatalogClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Client pointed at the configured API base URL.
    pub fn from_env() -> Self {
        Self::new(crate::config::api_url())
    }

    /// Build a full URL with encoded query parameters.
    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}", self.base_url, endpoint);
        for (i, (key, value)) in params.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    /// Issue a GET and deserialize the response body.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, CatalogClientError> {
        debug!("Catalog API request: GET {}", url);
        let resp = self.http.get(url).send().await?;
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(CatalogClientError::Server { status, body });
        }
        resp.json().await.map_err(|_| CatalogClientError::Parse)
    }
}

#[async_trait]
impl CourseGateway for CatalogClient {
    async fn fetch_all_courses(&self) -> Result<Vec<Course>, CatalogClientError> {
        let url = self.build_url("/api/courses", &[]);
        let envelope: Payload<Vec<Course>> = self.get_json(&url).await?;
        Ok(envelope.payload)
    }

    async fn fetch_course_by_id(&self, course_id: &str) -> Result<Course, CatalogClientError> {
        // Single-course responses are not wrapped in an envelope.
        let url = self.build_url(&format!("/api/courses/{}", course_id), &[]);
        self.get_json(&url).await
    }

    async fn fetch_lessons_for_course(
        &self,
        course_id: &str,
    ) -> Result<Vec<Lesson>, CatalogClientError> {
        let page_size = LESSONS_PAGE_SIZE.to_string();
        let url = self.build_url(
            "/api/lessons",
            &[("courseId", course_id), ("pageSize", &page_size)],
        );
        let envelope: Payload<Vec<Lesson>> = self.get_json(&url).await?;
        Ok(envelope.payload)
    }

    async fn search_lessons(&self, filter: &str) -> Result<Vec<Lesson>, CatalogClientError> {
        let page_size = SEARCH_PAGE_SIZE.to_string();
        let url = self.build_url(
            "/api/lessons",
            &[("filter", filter), ("pageSize", &page_size)],
        );
        let envelope: Payload<Vec<Lesson>> = self.get_json(&url).await?;
        Ok(envelope.payload)
    }

    async fn update_course(
        &self,
        course_id: &str,
        changes: &CourseChanges,
    ) -> Result<serde_json::Value, CatalogClientError> {
        let url = self.build_url(&format!("/api/courses/{}", course_id), &[]);
        debug!("Catalog API request: PUT {}", url);
        let resp = self.http.put(&url).json(changes).send().await?;
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(CatalogClientError::Server { status, body });
        }
        let body = resp.text().await.unwrap_or_default();
        if body.is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&body).map_err(|_| CatalogClientError::Parse)
    }
}
