use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use shared::{
    domain::{Contact, ContactDraft, ContactId},
    protocol::{AckEnvelope, ApiEnvelope, ContactListEnvelope},
};
use tracing::debug;
use url::Url;

use crate::{error::StoreError, settings::ClientSettings};

/// CRUD access to the remote contacts collection.
#[async_trait]
pub trait ContactsRemoteStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Contact>, StoreError>;
    async fn create(&self, draft: &ContactDraft) -> Result<(), StoreError>;
    async fn update(&self, id: ContactId, draft: &ContactDraft) -> Result<(), StoreError>;
    async fn delete(&self, id: ContactId) -> Result<(), StoreError>;
}

#[async_trait]
impl<T> ContactsRemoteStore for Arc<T>
where
    T: ContactsRemoteStore + ?Sized,
{
    async fn list(&self) -> Result<Vec<Contact>, StoreError> {
        (**self).list().await
    }

    async fn create(&self, draft: &ContactDraft) -> Result<(), StoreError> {
        (**self).create(draft).await
    }

    async fn update(&self, id: ContactId, draft: &ContactDraft) -> Result<(), StoreError> {
        (**self).update(id, draft).await
    }

    async fn delete(&self, id: ContactId) -> Result<(), StoreError> {
        (**self).delete(id).await
    }
}

/// JSON-over-HTTP store speaking the `/contacts` envelope contract.
#[derive(Debug, Clone)]
pub struct HttpContactsStore {
    http: Client,
    base_url: Url,
}

impl HttpContactsStore {
    pub fn new(base_url: &str) -> Result<Self, StoreError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self, StoreError> {
        let mut builder = Client::builder();
        if let Some(secs) = settings.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Self::with_client(builder.build()?, &settings.base_url)
    }

    pub fn with_client(http: Client, base_url: &str) -> Result<Self, StoreError> {
        Ok(Self {
            http,
            base_url: normalize_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, StoreError> {
        self.base_url
            .join(path)
            .map_err(|err| StoreError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: err.to_string(),
            })
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&ContactDraft>,
    ) -> Result<Response, StoreError> {
        let url = self.endpoint(path)?;
        debug!(%method, %url, "contacts request");
        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        Ok(request.send().await?)
    }

    async fn acknowledge(
        &self,
        method: Method,
        path: &str,
        body: Option<&ContactDraft>,
    ) -> Result<(), StoreError> {
        let response = self.send(method, path, body).await?;
        let envelope: AckEnvelope = read_envelope(response).await?;
        envelope.into_result()?;
        Ok(())
    }
}

#[async_trait]
impl ContactsRemoteStore for HttpContactsStore {
    async fn list(&self) -> Result<Vec<Contact>, StoreError> {
        let response = self.send(Method::GET, "contacts", None).await?;
        let envelope: ContactListEnvelope = read_envelope(response).await?;
        Ok(envelope.into_result()?.unwrap_or_default())
    }

    async fn create(&self, draft: &ContactDraft) -> Result<(), StoreError> {
        self.acknowledge(Method::POST, "contacts", Some(draft)).await
    }

    async fn update(&self, id: ContactId, draft: &ContactDraft) -> Result<(), StoreError> {
        self.acknowledge(Method::PUT, &format!("contacts/{id}"), Some(draft))
            .await
    }

    async fn delete(&self, id: ContactId) -> Result<(), StoreError> {
        self.acknowledge(Method::DELETE, &format!("contacts/{id}"), None)
            .await
    }
}

/// The envelope is decoded regardless of HTTP status so server messages on
/// error statuses still reach the user.
async fn read_envelope<T: DeserializeOwned>(
    response: Response,
) -> Result<ApiEnvelope<T>, StoreError> {
    let status = response.status();
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|err| StoreError::Decode {
        status: status.as_u16(),
        detail: err.to_string(),
    })
}

fn normalize_base_url(raw: &str) -> Result<Url, StoreError> {
    let invalid = |reason: String| StoreError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };
    let mut url = Url::parse(raw.trim()).map_err(|err| invalid(err.to_string()))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("expected an http(s) base url".to_string()));
    }
    // Keep any path prefix when joining relative endpoints.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
