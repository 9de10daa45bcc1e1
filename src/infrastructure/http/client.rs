// SPDX-License-Identifier: MPL-2.0
//! `reqwest`-backed implementation of [`CollectionTransport`].

use super::endpoints::{resolve, Endpoints};
use super::envelope::{self, Envelope};
use super::wire::WireResource;
use crate::application::port::{CollectionTransport, FavoriteAck, FetchError, Reply};
use crate::config::defaults::MAX_REDIRECTS;
use crate::domain::{Attachment, EntityId};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;
use std::marker::PhantomData;
use url::Url;

/// Multipart field carrying the attachment.
const ATTACHMENT_FIELD: &str = "photo";

/// Builds the HTTP client shared by every transport of a session.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_client(user_agent: &str) -> crate::error::Result<Client> {
    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// HTTP transport for the collection of `E`.
pub struct ReqwestTransport<E> {
    client: Client,
    base: Url,
    endpoints: Endpoints,
    _entity: PhantomData<fn() -> E>,
}

impl<E: WireResource> ReqwestTransport<E> {
    /// Creates a transport for `E` under `base_url`, with the default
    /// endpoint layout of `E`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL.
    pub fn new(client: Client, base_url: &str) -> crate::error::Result<Self> {
        Ok(Self {
            client,
            base: Url::parse(base_url)?,
            endpoints: E::endpoints(),
            _entity: PhantomData,
        })
    }

    /// Overrides the endpoint templates.
    #[must_use]
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Returns the active endpoint templates.
    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn request(
        &self,
        method: Method,
        template: &str,
        id: Option<&EntityId>,
    ) -> Result<RequestBuilder, FetchError> {
        let url = resolve(&self.base, template, id)?;
        tracing::debug!(%method, %url, collection = E::COLLECTION, "sending request");
        Ok(self.client.request(method, url))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Envelope, FetchError> {
        let response = request
            .send()
            .await
            .map_err(|err| FetchError::network(err.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| FetchError::network(format!("failed to read response body: {err}")))?;
        tracing::debug!(%status, bytes = body.len(), "response received");
        envelope::decode(status, &body)
    }

    fn entity(envelope: &mut Envelope) -> Result<Option<E>, FetchError> {
        envelope
            .take_optional::<E::Dto>(E::ENVELOPE_KEY)?
            .map(E::from_dto)
            .transpose()
    }
}

/// Attaches `fields` as JSON, or as multipart when an attachment is present.
fn with_body(
    request: RequestBuilder,
    fields: Map<String, Value>,
    attachment: Option<&Attachment>,
) -> Result<RequestBuilder, FetchError> {
    let Some(attachment) = attachment else {
        return Ok(request.json(&fields));
    };

    let mut form = Form::new();
    for (key, value) in fields {
        let text = match value {
            Value::String(text) => text,
            other => other.to_string(),
        };
        form = form.text(key, text);
    }
    let part = Part::bytes(attachment.bytes().to_vec())
        .file_name(attachment.file_name.clone())
        .mime_str(&attachment.content_type)
        .map_err(|err| {
            FetchError::request(format!(
                "invalid attachment type `{}`: {err}",
                attachment.content_type
            ))
        })?;
    Ok(request.multipart(form.part(ATTACHMENT_FIELD, part)))
}

fn decode_list<T: DeserializeOwned>(
    envelope: &mut Envelope,
    key: &str,
) -> Result<Vec<T>, FetchError> {
    envelope.take(key)
}

fn reply<T>(envelope: &Envelope, payload: T) -> Reply<T> {
    Reply {
        message: envelope.message(),
        payload,
    }
}

#[async_trait]
impl<E: WireResource> CollectionTransport<E> for ReqwestTransport<E> {
    async fn list(&self) -> Result<Reply<Vec<E>>, FetchError> {
        let request = self.request(Method::GET, &self.endpoints.list, None)?;
        let mut envelope = self.send(request).await?;
        let items = decode_list::<E::Dto>(&mut envelope, E::ENVELOPE_KEY)?
            .into_iter()
            .map(E::from_dto)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(reply(&envelope, items))
    }

    async fn detail(&self, id: &EntityId) -> Result<Reply<E>, FetchError> {
        let request = self.request(Method::GET, &self.endpoints.detail, Some(id))?;
        let mut envelope = self.send(request).await?;
        let entity = envelope.take::<E::Dto>(E::ENVELOPE_KEY).and_then(E::from_dto)?;
        Ok(reply(&envelope, entity))
    }

    async fn create(
        &self,
        draft: &E::Draft,
        attachment: Option<&Attachment>,
    ) -> Result<Reply<Option<E>>, FetchError> {
        let request = self.request(Method::POST, &self.endpoints.create, None)?;
        let request = with_body(request, E::draft_body(draft), attachment)?;
        let mut envelope = self.send(request).await?;
        let created = Self::entity(&mut envelope)?;
        Ok(reply(&envelope, created))
    }

    async fn edit(
        &self,
        id: &EntityId,
        patch: &E::Patch,
        attachment: Option<&Attachment>,
    ) -> Result<Reply<Option<E::Patch>>, FetchError> {
        let request = self.request(Method::PUT, &self.endpoints.edit, Some(id))?;
        let request = with_body(request, E::patch_body(patch), attachment)?;
        let mut envelope = self.send(request).await?;
        let accepted = envelope
            .take_optional::<E::Dto>(E::ENVELOPE_KEY)?
            .map(E::accepted_fields);
        Ok(reply(&envelope, accepted))
    }

    async fn delete(&self, id: &EntityId) -> Result<Reply<()>, FetchError> {
        let request = self.request(Method::DELETE, &self.endpoints.delete, Some(id))?;
        let envelope = self.send(request).await?;
        Ok(reply(&envelope, ()))
    }

    async fn toggle_favorite(&self, id: &EntityId) -> Result<FavoriteAck, FetchError> {
        let template = &self.endpoints.toggle_favorite;
        let needs_id = template.contains(super::endpoints::ID_PLACEHOLDER);
        let request = self.request(Method::POST, template, needs_id.then_some(id))?;
        let request = request.json(&serde_json::json!({ "id": id.as_str() }));
        let envelope = self.send(request).await?;
        Ok(FavoriteAck {
            message: envelope.message(),
            favorited: envelope.favorite_flag(E::ENVELOPE_KEY),
        })
    }
}

impl<E> fmt::Debug for ReqwestTransport<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("base", &self.base.as_str())
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}
