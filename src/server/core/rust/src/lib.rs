/* src/server/core/rust/src/lib.rs */

pub mod article;
pub mod client;
pub mod errors;
pub mod normalize;
pub mod server;
pub mod strapi;
pub mod upstream;
pub mod wordpress;

// Re-exports for ergonomic use
pub use article::{AuthorRef, CategoryRef, MediaRef, NormalizedArticle};
pub use busbar_engine as engine;
pub use client::{ContentClient, ContentConfig, PostsQuery, PostsWithCategories};
pub use errors::SiteError;
pub use normalize::{
  NormalizedResponse, ParsedPayload, normalize_api_response, normalize_collection,
  normalize_payload,
};
pub use server::{SiteParts, SiteServer};
pub use upstream::{Pagination, UpstreamFetchOutcome};
