//! Course catalog: remote API gateway and reactive collection store.

pub mod client;
pub mod store;
pub mod view;

pub use client::{CatalogClient, CatalogClientError, CourseGateway};
pub use store::{CourseStore, StoreError};
pub use view::CategoryView;
