//! Asynchronous client for the Lokalise translation-management API.
//!
//! # Overview
//! Every API resource (projects, keys, translations, teams, team users, user
//! groups, translation providers, files) is exposed as a collection with the
//! verbs the API supports. Collections share one generic layer that builds the
//! request, sends it through a `Transport`, and hydrates the JSON answer into
//! typed models.
//!
//! # Design
//! - A resource is declared as a static `CollectionMeta` record: plural and
//!   singular root keys, URI template, optional secondary root.
//! - List calls return `ListResult`, which becomes `Paginated` only when the
//!   response carries both the total count and current page headers.
//! - Bulk endpoints return `BulkResult` with the API's per-item `errors`.
//! - Requests and responses are plain data (`HttpRequest`/`HttpResponse`), so
//!   any HTTP stack can implement `Transport`; `ReqwestTransport` is the
//!   default.
//! - Rejected calls surface as `Error::Api` with a normalized `ApiError`.

pub mod client;
pub mod collection;
pub mod collections;
pub mod config;
pub mod error;
pub mod http;
pub mod results;
pub mod transport;
pub mod types;
pub mod uri;

pub use client::LokaliseApi;
pub use collection::{BaseCollection, CollectionMeta};
pub use config::ClientConfig;
pub use error::{ApiError, Error, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use results::{BulkResult, ListResult, PaginatedResult};
pub use transport::{ReqwestTransport, Transport};
pub use types::{
    CreateProject, File, Key, Project, QueuedProcess, Team, TeamUser, Translation,
    TranslationProvider, UpdateProject, UserGroup,
};
pub use uri::{params, Params};
