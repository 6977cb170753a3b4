//! Single HTTP exchange against a [`Route`], shared by every sub-client.
//!
//! One request per call: no retries, no caching. Non-2xx statuses become
//! [`MetadataError::Status`] unless the route maps 404 to an empty result.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::MetadataError;
use crate::routes::{NotFound, Route, Verb};

/// Request body for one exchange.
pub(crate) enum Payload<'a> {
    Empty,
    Json(Vec<u8>),
    /// Multipart form with the file contents in a `file` part.
    File(&'a Path),
}

#[derive(Debug)]
pub(crate) struct Reply {
    pub(crate) status: StatusCode,
    pub(crate) body: String,
}

#[derive(Debug, Clone)]
pub(crate) struct Transport {
    http: reqwest::Client,
    base_url: Url,
}

impl Transport {
    pub(crate) fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Perform the exchange and return status and body, whatever the status.
    pub(crate) async fn exchange(
        &self,
        route: &Route,
        params: &[(&str, &str)],
        payload: Payload<'_>,
    ) -> Result<Reply, MetadataError> {
        let endpoint = route.endpoint();
        let url = route.url(&self.base_url, params);
        tracing::debug!(%endpoint, %url, "metadata request");

        let request = match route.verb {
            Verb::Get => self.http.get(&url),
            Verb::Post => self.http.post(&url),
            Verb::Put => self.http.put(&url),
            Verb::Delete => self.http.delete(&url),
        };
        let request = match payload {
            Payload::Empty => request,
            Payload::Json(body) => request
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body),
            Payload::File(path) => request.multipart(file_form(path).await?),
        };

        let resp = request.send().await.map_err(|e| MetadataError::Http {
            endpoint: endpoint.clone(),
            source: e,
        })?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| MetadataError::Http { endpoint, source: e })?;
        tracing::debug!(status = status.as_u16(), "metadata response");
        Ok(Reply { status, body })
    }

    /// Exchange and require a 2xx status; returns the raw body.
    pub(crate) async fn send(
        &self,
        route: &Route,
        params: &[(&str, &str)],
        payload: Payload<'_>,
    ) -> Result<String, MetadataError> {
        let reply = self.exchange(route, params, payload).await?;
        if reply.status.is_success() {
            Ok(reply.body)
        } else {
            Err(status_error(route, reply))
        }
    }

    /// GET and decode a required entity.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        route: &Route,
        params: &[(&str, &str)],
    ) -> Result<T, MetadataError> {
        let body = self.send(route, params, Payload::Empty).await?;
        decode(route, &body)
    }

    /// GET and decode an entity that may be absent, per the route's 404 policy.
    pub(crate) async fn fetch_optional<T: DeserializeOwned>(
        &self,
        route: &Route,
        params: &[(&str, &str)],
    ) -> Result<Option<T>, MetadataError> {
        let reply = self.exchange(route, params, Payload::Empty).await?;
        if reply.status == StatusCode::NOT_FOUND && route.not_found == NotFound::Empty {
            tracing::debug!(endpoint = %route.endpoint(), "not found");
            return Ok(None);
        }
        if !reply.status.is_success() {
            return Err(status_error(route, reply));
        }
        decode(route, &reply.body).map(Some)
    }

    /// POST or PUT a JSON entity; returns the raw body. Failures are logged
    /// at info with the response body.
    pub(crate) async fn submit<T: Serialize>(
        &self,
        route: &Route,
        entity: &T,
    ) -> Result<String, MetadataError> {
        let payload = encode(route, entity)?;
        self.send(route, &[], payload).await.map_err(|e| {
            tracing::info!(
                endpoint = %route.endpoint(),
                status = e.status().unwrap_or_default(),
                reason = %e.signal().reason,
                "metadata write failed"
            );
            e
        })
    }
}

fn status_error(route: &Route, reply: Reply) -> MetadataError {
    MetadataError::Status {
        endpoint: route.endpoint(),
        status: reply.status.as_u16(),
        body: reply.body,
    }
}

fn encode<T: Serialize>(route: &Route, entity: &T) -> Result<Payload<'static>, MetadataError> {
    serde_json::to_vec(entity)
        .map(Payload::Json)
        .map_err(|source| MetadataError::Serialization {
            endpoint: route.endpoint(),
            source,
        })
}

fn decode<T: DeserializeOwned>(route: &Route, body: &str) -> Result<T, MetadataError> {
    serde_json::from_str(body).map_err(|source| MetadataError::Deserialization {
        endpoint: route.endpoint(),
        source,
    })
}

async fn file_form(path: &Path) -> Result<Form, MetadataError> {
    let contents = tokio::fs::read(path)
        .await
        .map_err(|source| MetadataError::File {
            path: path.to_path_buf(),
            source,
        })?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "profile".into());
    Ok(Form::new().part("file", Part::bytes(contents).file_name(file_name)))
}
