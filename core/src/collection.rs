//! Generic request dispatch and response mapping shared by every collection.
//!
//! # Design
//! A resource collection is nothing more than a `CollectionMeta` record (root
//! keys and URI template) plus the element types it hydrates into. The
//! `BaseCollection` turns a verb into an `HttpRequest`, sends it through the
//! `Transport`, and maps the answer with one of the `populate_*` functions.
//! The mapping functions are pure over `(json, headers)` so they can be tested
//! without any I/O.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ApiError, Error, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::results::{BulkResult, ListResult, PaginatedResult};
use crate::transport::Transport;
use crate::uri::{self, Params};

/// Static description of one API resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionMeta {
    /// Key wrapping the array in list responses.
    pub root_element_name: &'static str,
    /// Key wrapping the object in single-item responses, if the API wraps it.
    pub root_element_name_singular: Option<&'static str>,
    /// Default URI template, relative to the API host.
    pub prefix_uri: &'static str,
    /// Key wrapping an object of a different type returned by some endpoints,
    /// such as the queued process started by a file upload.
    pub secondary_element_name_singular: Option<&'static str>,
}

impl CollectionMeta {
    /// Unwrap the singular root, when declared, and hydrate one element.
    pub fn populate_object_from_json_root<E: DeserializeOwned>(&self, json: Value) -> Result<E> {
        let json = match self.root_element_name_singular {
            Some(root) => take_root(json, root)?,
            None => json,
        };
        populate_object_from_json(json)
    }

    /// Unwrap the secondary root and hydrate it as `S`.
    pub fn populate_secondary_object_from_json_root<S: DeserializeOwned>(
        &self,
        json: Value,
    ) -> Result<S> {
        let root = self.secondary_element_name_singular.ok_or_else(|| {
            Error::UnexpectedShape(format!(
                "`{}` declares no secondary element",
                self.root_element_name
            ))
        })?;
        populate_object_from_json(take_root(json, root)?)
    }

    /// Hydrate the plural root in order. The result is paginated only when
    /// both the total count and current page headers are present.
    pub fn populate_array_from_json<E: DeserializeOwned>(
        &self,
        json: Value,
        headers: &[(String, String)],
    ) -> Result<ListResult<E>> {
        let items = self.hydrate_array(json)?;
        Ok(match PaginatedResult::from_headers(items, headers) {
            Ok(page) => ListResult::Paginated(page),
            Err(items) => ListResult::Plain(items),
        })
    }

    /// Hydrate the plural root and carry the payload's `errors` through as is.
    pub fn populate_array_from_json_bulk<E: DeserializeOwned>(
        &self,
        mut json: Value,
    ) -> Result<BulkResult<E>> {
        let errors = json.get_mut("errors").map(Value::take).unwrap_or(Value::Null);
        let items = self.hydrate_array(json)?;
        Ok(BulkResult { items, errors })
    }

    fn hydrate_array<E: DeserializeOwned>(&self, json: Value) -> Result<Vec<E>> {
        match take_root(json, self.root_element_name)? {
            Value::Array(elements) => elements
                .into_iter()
                .map(populate_object_from_json)
                .collect(),
            _ => Err(Error::UnexpectedShape(format!(
                "`{}` is not an array",
                self.root_element_name
            ))),
        }
    }
}

/// Hydrate a whole payload into `E`.
pub fn populate_object_from_json<E: DeserializeOwned>(json: Value) -> Result<E> {
    serde_json::from_value(json).map_err(Error::Deserialization)
}

/// Deletion acknowledgements are not resource-shaped; hand them back untouched.
pub fn return_bare_json(json: Value) -> Value {
    json
}

fn take_root(json: Value, root: &str) -> Result<Value> {
    match json {
        Value::Object(mut map) => map
            .remove(root)
            .ok_or_else(|| Error::UnexpectedShape(format!("missing `{root}` in response"))),
        _ => Err(Error::UnexpectedShape(format!(
            "expected an object wrapping `{root}`"
        ))),
    }
}

fn handle_reject(response: &HttpResponse) -> Error {
    Error::Api(ApiError::from_response(response))
}

/// Copy the caller's parameters and add the resource id.
pub(crate) fn with_id(req_params: &Params, id: impl Into<Value>) -> Params {
    let mut params = req_params.clone();
    params.insert("id".to_string(), id.into());
    params
}

pub(crate) fn to_body<B: Serialize + ?Sized>(body: &B) -> Result<Option<String>> {
    serde_json::to_string(body)
        .map(Some)
        .map_err(Error::Serialization)
}

/// A successful response, decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    pub json: Value,
    pub headers: Vec<(String, String)>,
}

/// CRUD verbs over one resource type.
///
/// Each call works on a copy of the caller's parameters and retains nothing
/// between calls.
#[derive(Debug)]
pub struct BaseCollection<'a, T> {
    config: &'a ClientConfig,
    transport: &'a T,
    meta: &'static CollectionMeta,
}

impl<'a, T> Clone for BaseCollection<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for BaseCollection<'a, T> {}

impl<'a, T: Transport> BaseCollection<'a, T> {
    pub fn new(config: &'a ClientConfig, transport: &'a T, meta: &'static CollectionMeta) -> Self {
        Self {
            config,
            transport,
            meta,
        }
    }

    pub fn meta(&self) -> &'static CollectionMeta {
        self.meta
    }

    pub async fn list<E: DeserializeOwned>(&self, req_params: &Params) -> Result<ListResult<E>> {
        let payload = self
            .dispatch(HttpMethod::Get, req_params.clone(), None, None)
            .await?;
        self.meta
            .populate_array_from_json(payload.json, &payload.headers)
    }

    pub async fn get<E: DeserializeOwned>(
        &self,
        id: impl Into<Value>,
        req_params: &Params,
    ) -> Result<E> {
        let payload = self
            .dispatch(HttpMethod::Get, with_id(req_params, id), None, None)
            .await?;
        self.meta.populate_object_from_json_root(payload.json)
    }

    pub async fn create<E, B>(&self, body: &B, req_params: &Params) -> Result<E>
    where
        E: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let payload = self
            .dispatch(HttpMethod::Post, req_params.clone(), to_body(body)?, None)
            .await?;
        self.meta.populate_object_from_json_root(payload.json)
    }

    /// Create several items at once; per-item failures come back in `errors`.
    pub async fn create_bulk<E, B>(&self, body: &B, req_params: &Params) -> Result<BulkResult<E>>
    where
        E: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let payload = self
            .dispatch(HttpMethod::Post, req_params.clone(), to_body(body)?, None)
            .await?;
        self.meta.populate_array_from_json_bulk(payload.json)
    }

    /// Update one item. `method` overrides the default `PUT`.
    pub async fn update<E, B>(
        &self,
        id: impl Into<Value>,
        body: &B,
        req_params: &Params,
        method: Option<HttpMethod>,
    ) -> Result<E>
    where
        E: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let payload = self
            .dispatch(
                method.unwrap_or(HttpMethod::Put),
                with_id(req_params, id),
                to_body(body)?,
                None,
            )
            .await?;
        self.meta.populate_object_from_json_root(payload.json)
    }

    pub async fn delete(&self, id: impl Into<Value>, req_params: &Params) -> Result<Value> {
        let payload = self
            .dispatch(HttpMethod::Delete, with_id(req_params, id), None, None)
            .await?;
        Ok(return_bare_json(payload.json))
    }

    /// Call an endpoint whose success payload is the secondary element, at
    /// `uri` instead of the collection's default template.
    pub async fn create_secondary<S, B>(&self, body: &B, req_params: &Params, uri: &str) -> Result<S>
    where
        S: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let payload = self
            .dispatch(HttpMethod::Post, req_params.clone(), to_body(body)?, Some(uri))
            .await?;
        self.meta.populate_secondary_object_from_json_root(payload.json)
    }

    /// Send one request and decode the success payload.
    ///
    /// Non-2xx responses become `Error::Api`. An empty body decodes as `null`.
    pub async fn dispatch(
        &self,
        method: HttpMethod,
        params: Params,
        body: Option<String>,
        uri: Option<&str>,
    ) -> Result<Payload> {
        let request = self.prepare_request(method, body, params, uri)?;
        debug!(method = %request.method, url = %request.path, "dispatching request");

        let response = self.transport.execute(request).await?;
        debug!(status = response.status, "request settled");

        if !response.is_success() {
            return Err(handle_reject(&response));
        }

        let json = if response.body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&response.body).map_err(Error::Deserialization)?
        };
        Ok(Payload {
            json,
            headers: response.headers,
        })
    }

    /// Describe the HTTP call without sending it.
    pub fn prepare_request(
        &self,
        method: HttpMethod,
        body: Option<String>,
        params: Params,
        uri: Option<&str>,
    ) -> Result<HttpRequest> {
        let path = uri::build_url(&self.config.base_url(), self.get_uri(uri), params)?;
        let mut headers = self.config.default_headers();
        if body.is_some() {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }
        Ok(HttpRequest {
            method,
            path,
            headers,
            body,
        })
    }

    fn get_uri<'u>(&self, uri: Option<&'u str>) -> &'u str {
        uri.unwrap_or(self.meta.prefix_uri)
    }
}
