//! Typed API client layered over the [`Transport`] port.

use listhub_domain::error::RequestError;
use listhub_domain::form::Form;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::ports::Transport;
use crate::resource::{self, Resource, WithAsset};

/// Typed calls for every backend endpoint the panel uses.
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// `GET /{collection}` with the query's filters.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] when the call fails or the body is not a
    /// list of records.
    pub async fn list<R: Resource>(&self, query: &R::Query) -> Result<Vec<R>, RequestError> {
        let pairs = R::query_pairs(query);
        let body = self
            .transport
            .get(&resource::collection_path::<R>(), &pairs)
            .await?;
        decode(body)
    }

    /// `POST /{collection}` with a validated draft.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] when the backend rejects the draft.
    pub async fn create<R: Resource>(
        &self,
        draft: &<R::Form as Form>::Draft,
    ) -> Result<R, RequestError> {
        let body = self
            .transport
            .post(&resource::collection_path::<R>(), &encode(draft)?)
            .await?;
        decode(body)
    }

    /// `PUT /{collection}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] when the backend rejects the changes.
    pub async fn update<R: Resource>(
        &self,
        id: R::Id,
        changes: &R::Changes,
    ) -> Result<R, RequestError> {
        let body = self
            .transport
            .put(&resource::item_path::<R>(id), &encode(changes)?)
            .await?;
        decode(body)
    }

    /// `DELETE /{collection}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] when the backend refuses the deletion.
    pub async fn delete<R: Resource>(&self, id: R::Id) -> Result<(), RequestError> {
        self.transport.delete(&resource::item_path::<R>(id)).await?;
        Ok(())
    }

    /// `POST /{collection}/{id}/{asset}` as multipart.
    ///
    /// Returns the public URL reported by the backend, when present.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] when the upload is rejected.
    pub async fn upload_asset<R: WithAsset>(
        &self,
        id: R::Id,
        file: T::File,
    ) -> Result<Option<String>, RequestError> {
        let body = self
            .transport
            .upload(&resource::asset_path::<R>(id), file)
            .await?;
        let key = format!("{}_url", R::ASSET);
        Ok(body.get(&key).and_then(Value::as_str).map(str::to_string))
    }

    /// `DELETE /{collection}/{id}/{asset}`.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] when the removal is rejected.
    pub async fn remove_asset<R: WithAsset>(&self, id: R::Id) -> Result<(), RequestError> {
        self.transport
            .delete(&resource::asset_path::<R>(id))
            .await?;
        Ok(())
    }
}

fn encode<B: Serialize>(body: &B) -> Result<Value, RequestError> {
    serde_json::to_value(body).map_err(|err| RequestError::transport(err.to_string()))
}

fn decode<D: DeserializeOwned>(body: Value) -> Result<D, RequestError> {
    serde_json::from_value(body).map_err(|err| {
        tracing::warn!(error = %err, "unexpected response body");
        RequestError::transport(format!("unexpected response body: {err}"))
    })
}
