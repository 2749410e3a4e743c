//! Members of a team and their roles.

use serde::Serialize;
use serde_json::Value;

use crate::collection::{BaseCollection, CollectionMeta};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::results::ListResult;
use crate::transport::Transport;
use crate::types::TeamUser;
use crate::uri::Params;

static META: CollectionMeta = CollectionMeta {
    root_element_name: "team_users",
    root_element_name_singular: Some("team_user"),
    prefix_uri: "teams/{!:team_id}/users/{:id}",
    secondary_element_name_singular: None,
};

/// Members of a team. Every call needs `team_id` in its parameters.
#[derive(Debug)]
pub struct TeamUsers<'a, T> {
    base: BaseCollection<'a, T>,
}

impl<'a, T: Transport> TeamUsers<'a, T> {
    pub(crate) fn new(config: &'a ClientConfig, transport: &'a T) -> Self {
        Self {
            base: BaseCollection::new(config, transport, &META),
        }
    }

    pub async fn list(&self, params: &Params) -> Result<ListResult<TeamUser>> {
        self.base.list(params).await
    }

    pub async fn get(&self, user_id: impl Into<Value>, params: &Params) -> Result<TeamUser> {
        self.base.get(user_id, params).await
    }

    /// Change a member's role, e.g. `{"role": "admin"}`.
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        user_id: impl Into<Value>,
        body: &B,
        params: &Params,
    ) -> Result<TeamUser> {
        self.base.update(user_id, body, params, None).await
    }

    pub async fn delete(&self, user_id: impl Into<Value>, params: &Params) -> Result<Value> {
        self.base.delete(user_id, params).await
    }
}
