//! Projects. Responses carry the project object unwrapped, without a
//! singular root.

use serde_json::Value;

use crate::collection::{with_id, BaseCollection, CollectionMeta};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpMethod;
use crate::results::ListResult;
use crate::transport::Transport;
use crate::types::{CreateProject, Project, UpdateProject};
use crate::uri::Params;

static META: CollectionMeta = CollectionMeta {
    root_element_name: "projects",
    root_element_name_singular: None,
    prefix_uri: "projects/{:id}",
    secondary_element_name_singular: None,
};

const EMPTY_URI: &str = "projects/{!:id}/empty";

/// Projects visible to the token. Single projects come back unwrapped.
#[derive(Debug)]
pub struct Projects<'a, T> {
    base: BaseCollection<'a, T>,
}

impl<'a, T: Transport> Projects<'a, T> {
    pub(crate) fn new(config: &'a ClientConfig, transport: &'a T) -> Self {
        Self {
            base: BaseCollection::new(config, transport, &META),
        }
    }

    pub async fn list(&self, params: &Params) -> Result<ListResult<Project>> {
        self.base.list(params).await
    }

    pub async fn get(&self, project_id: &str, params: &Params) -> Result<Project> {
        self.base.get(project_id, params).await
    }

    pub async fn create(&self, body: &CreateProject, params: &Params) -> Result<Project> {
        self.base.create(body, params).await
    }

    pub async fn update(
        &self,
        project_id: &str,
        body: &UpdateProject,
        params: &Params,
    ) -> Result<Project> {
        self.base.update(project_id, body, params, None).await
    }

    pub async fn delete(&self, project_id: &str, params: &Params) -> Result<Value> {
        self.base.delete(project_id, params).await
    }

    /// Remove every key from a project while keeping its languages and
    /// settings.
    pub async fn empty(&self, project_id: &str, params: &Params) -> Result<Value> {
        let payload = self
            .base
            .dispatch(HttpMethod::Put, with_id(params, project_id), None, Some(EMPTY_URI))
            .await?;
        Ok(payload.json)
    }
}
