//! Per-language values of project keys.

use serde::Serialize;
use serde_json::Value;

use crate::collection::{BaseCollection, CollectionMeta};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::results::ListResult;
use crate::transport::Transport;
use crate::types::Translation;
use crate::uri::Params;

static META: CollectionMeta = CollectionMeta {
    root_element_name: "translations",
    root_element_name_singular: Some("translation"),
    prefix_uri: "projects/{!:project_id}/translations/{:id}",
    secondary_element_name_singular: None,
};

/// Translations of a project. Created implicitly with keys, so only read and
/// update are offered.
#[derive(Debug)]
pub struct Translations<'a, T> {
    base: BaseCollection<'a, T>,
}

impl<'a, T: Transport> Translations<'a, T> {
    pub(crate) fn new(config: &'a ClientConfig, transport: &'a T) -> Self {
        Self {
            base: BaseCollection::new(config, transport, &META),
        }
    }

    pub async fn list(&self, params: &Params) -> Result<ListResult<Translation>> {
        self.base.list(params).await
    }

    pub async fn get(&self, translation_id: impl Into<Value>, params: &Params) -> Result<Translation> {
        self.base.get(translation_id, params).await
    }

    pub async fn update<B: Serialize + ?Sized>(
        &self,
        translation_id: impl Into<Value>,
        body: &B,
        params: &Params,
    ) -> Result<Translation> {
        self.base.update(translation_id, body, params, None).await
    }
}
