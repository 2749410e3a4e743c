//! Translation keys of a project.
//!
//! Creation and bulk update accept many keys in one call and report per-key
//! failures in `errors` next to the keys that succeeded.

use serde::Serialize;
use serde_json::{json, Value};

use crate::collection::{to_body, BaseCollection, CollectionMeta};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpMethod;
use crate::results::{BulkResult, ListResult};
use crate::transport::Transport;
use crate::types::Key;
use crate::uri::Params;

static META: CollectionMeta = CollectionMeta {
    root_element_name: "keys",
    root_element_name_singular: Some("key"),
    prefix_uri: "projects/{!:project_id}/keys/{:id}",
    secondary_element_name_singular: None,
};

/// Keys of a project. Every call needs `project_id` in its parameters.
///
/// Creation and bulk update accept many keys at once and report per-key
/// failures in `BulkResult::errors` instead of failing the whole call.
#[derive(Debug)]
pub struct Keys<'a, T> {
    base: BaseCollection<'a, T>,
}

impl<'a, T: Transport> Keys<'a, T> {
    pub(crate) fn new(config: &'a ClientConfig, transport: &'a T) -> Self {
        Self {
            base: BaseCollection::new(config, transport, &META),
        }
    }

    pub async fn list(&self, params: &Params) -> Result<ListResult<Key>> {
        self.base.list(params).await
    }

    pub async fn get(&self, key_id: impl Into<Value>, params: &Params) -> Result<Key> {
        self.base.get(key_id, params).await
    }

    /// Create keys from a `{"keys": [...]}` body.
    pub async fn create<B: Serialize + ?Sized>(
        &self,
        body: &B,
        params: &Params,
    ) -> Result<BulkResult<Key>> {
        self.base.create_bulk(body, params).await
    }

    pub async fn update<B: Serialize + ?Sized>(
        &self,
        key_id: impl Into<Value>,
        body: &B,
        params: &Params,
    ) -> Result<Key> {
        self.base.update(key_id, body, params, None).await
    }

    pub async fn delete(&self, key_id: impl Into<Value>, params: &Params) -> Result<Value> {
        self.base.delete(key_id, params).await
    }

    /// Update several keys from a `{"keys": [{"key_id": ..}, ..]}` body.
    pub async fn bulk_update<B: Serialize + ?Sized>(
        &self,
        body: &B,
        params: &Params,
    ) -> Result<BulkResult<Key>> {
        let payload = self
            .base
            .dispatch(HttpMethod::Put, params.clone(), to_body(body)?, None)
            .await?;
        self.base.meta().populate_array_from_json_bulk(payload.json)
    }

    /// Delete several keys by id. Returns the raw acknowledgement.
    pub async fn bulk_delete(&self, key_ids: &[u64], params: &Params) -> Result<Value> {
        let body = json!({ "keys": key_ids });
        let payload = self
            .base
            .dispatch(HttpMethod::Delete, params.clone(), to_body(&body)?, None)
            .await?;
        Ok(payload.json)
    }
}
