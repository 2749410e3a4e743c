//! Translation vendors a team can order from. Read only.

use serde_json::Value;

use crate::collection::{BaseCollection, CollectionMeta};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::results::ListResult;
use crate::transport::Transport;
use crate::types::TranslationProvider;
use crate::uri::Params;

static META: CollectionMeta = CollectionMeta {
    root_element_name: "translation_providers",
    root_element_name_singular: Some("translation_provider"),
    prefix_uri: "teams/{!:team_id}/translation_providers/{:id}",
    secondary_element_name_singular: None,
};

#[derive(Debug)]
pub struct TranslationProviders<'a, T> {
    base: BaseCollection<'a, T>,
}

impl<'a, T: Transport> TranslationProviders<'a, T> {
    pub(crate) fn new(config: &'a ClientConfig, transport: &'a T) -> Self {
        Self {
            base: BaseCollection::new(config, transport, &META),
        }
    }

    pub async fn list(&self, params: &Params) -> Result<ListResult<TranslationProvider>> {
        self.base.list(params).await
    }

    pub async fn get(
        &self,
        provider_id: impl Into<Value>,
        params: &Params,
    ) -> Result<TranslationProvider> {
        self.base.get(provider_id, params).await
    }
}
