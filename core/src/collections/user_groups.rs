//! User groups of a team, with member and project assignment.

use serde::Serialize;
use serde_json::{json, Value};

use crate::collection::{to_body, with_id, BaseCollection, CollectionMeta};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpMethod;
use crate::results::ListResult;
use crate::transport::Transport;
use crate::types::UserGroup;
use crate::uri::Params;

static META: CollectionMeta = CollectionMeta {
    root_element_name: "user_groups",
    root_element_name_singular: Some("group"),
    prefix_uri: "teams/{!:team_id}/groups/{:id}",
    secondary_element_name_singular: None,
};

const ADD_MEMBERS_URI: &str = "teams/{!:team_id}/groups/{!:id}/members/add";
const REMOVE_MEMBERS_URI: &str = "teams/{!:team_id}/groups/{!:id}/members/remove";
const ADD_PROJECTS_URI: &str = "teams/{!:team_id}/groups/{!:id}/projects/add";
const REMOVE_PROJECTS_URI: &str = "teams/{!:team_id}/groups/{!:id}/projects/remove";

/// User groups of a team. Every call needs `team_id` in its parameters.
#[derive(Debug)]
pub struct UserGroups<'a, T> {
    base: BaseCollection<'a, T>,
}

impl<'a, T: Transport> UserGroups<'a, T> {
    pub(crate) fn new(config: &'a ClientConfig, transport: &'a T) -> Self {
        Self {
            base: BaseCollection::new(config, transport, &META),
        }
    }

    pub async fn list(&self, params: &Params) -> Result<ListResult<UserGroup>> {
        self.base.list(params).await
    }

    pub async fn get(&self, group_id: impl Into<Value>, params: &Params) -> Result<UserGroup> {
        self.base.get(group_id, params).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, body: &B, params: &Params) -> Result<UserGroup> {
        self.base.create(body, params).await
    }

    pub async fn update<B: Serialize + ?Sized>(
        &self,
        group_id: impl Into<Value>,
        body: &B,
        params: &Params,
    ) -> Result<UserGroup> {
        self.base.update(group_id, body, params, None).await
    }

    pub async fn delete(&self, group_id: impl Into<Value>, params: &Params) -> Result<Value> {
        self.base.delete(group_id, params).await
    }

    pub async fn add_members(
        &self,
        group_id: impl Into<Value>,
        user_ids: &[u64],
        params: &Params,
    ) -> Result<UserGroup> {
        self.put_group(ADD_MEMBERS_URI, group_id, json!({ "users": user_ids }), params)
            .await
    }

    pub async fn remove_members(
        &self,
        group_id: impl Into<Value>,
        user_ids: &[u64],
        params: &Params,
    ) -> Result<UserGroup> {
        self.put_group(REMOVE_MEMBERS_URI, group_id, json!({ "users": user_ids }), params)
            .await
    }

    pub async fn add_projects(
        &self,
        group_id: impl Into<Value>,
        project_ids: &[&str],
        params: &Params,
    ) -> Result<UserGroup> {
        self.put_group(ADD_PROJECTS_URI, group_id, json!({ "projects": project_ids }), params)
            .await
    }

    pub async fn remove_projects(
        &self,
        group_id: impl Into<Value>,
        project_ids: &[&str],
        params: &Params,
    ) -> Result<UserGroup> {
        self.put_group(REMOVE_PROJECTS_URI, group_id, json!({ "projects": project_ids }), params)
            .await
    }

    async fn put_group(
        &self,
        uri: &str,
        group_id: impl Into<Value>,
        body: Value,
        params: &Params,
    ) -> Result<UserGroup> {
        let payload = self
            .base
            .dispatch(HttpMethod::Put, with_id(params, group_id), to_body(&body)?, Some(uri))
            .await?;
        self.base.meta().populate_object_from_json_root(payload.json)
    }
}
