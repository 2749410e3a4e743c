//! Files of a project. Uploads are processed in the background, so `upload`
//! answers with the queued process rather than a file.

use serde::Serialize;

use crate::collection::{BaseCollection, CollectionMeta};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::results::ListResult;
use crate::transport::Transport;
use crate::types::{File, QueuedProcess};
use crate::uri::Params;

static META: CollectionMeta = CollectionMeta {
    root_element_name: "files",
    root_element_name_singular: None,
    prefix_uri: "projects/{!:project_id}/files/{:id}",
    secondary_element_name_singular: Some("process"),
};

const UPLOAD_URI: &str = "projects/{!:project_id}/files/upload";

/// Files of a project. Every call needs `project_id` in its parameters.
#[derive(Debug)]
pub struct Files<'a, T> {
    base: BaseCollection<'a, T>,
}

impl<'a, T: Transport> Files<'a, T> {
    pub(crate) fn new(config: &'a ClientConfig, transport: &'a T) -> Self {
        Self {
            base: BaseCollection::new(config, transport, &META),
        }
    }

    pub async fn list(&self, params: &Params) -> Result<ListResult<File>> {
        self.base.list(params).await
    }

    /// Queue an import. The body carries `data` (base64), `filename` and
    /// `lang_iso`; the API answers with the background process, not a file.
    pub async fn upload<B: Serialize + ?Sized>(
        &self,
        body: &B,
        params: &Params,
    ) -> Result<QueuedProcess> {
        self.base.create_secondary(body, params, UPLOAD_URI).await
    }
}
