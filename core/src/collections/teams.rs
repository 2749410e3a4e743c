//! Teams the token can see.

use crate::collection::{BaseCollection, CollectionMeta};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::results::ListResult;
use crate::transport::Transport;
use crate::types::Team;
use crate::uri::Params;

static META: CollectionMeta = CollectionMeta {
    root_element_name: "teams",
    root_element_name_singular: None,
    prefix_uri: "teams",
    secondary_element_name_singular: None,
};

/// Teams the token's owner belongs to. The API only allows listing them.
#[derive(Debug)]
pub struct Teams<'a, T> {
    base: BaseCollection<'a, T>,
}

impl<'a, T: Transport> Teams<'a, T> {
    pub(crate) fn new(config: &'a ClientConfig, transport: &'a T) -> Self {
        Self {
            base: BaseCollection::new(config, transport, &META),
        }
    }

    pub async fn list(&self, params: &Params) -> Result<ListResult<Team>> {
        self.base.list(params).await
    }
}
