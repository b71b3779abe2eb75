//! Generic client for one REST resource
//!
//! ```ignore
//! let brands: RestResource<Brand> = RestResource::new(use_api(), "brands");
//! let page = brands.list(&ListQuery::default().with_search("pan")).await?;
//! ```

use contracts::domain::common::{ApiRecord, RecordId};
use contracts::shared::list::{ListQuery, Paginated};
use serde::Serialize;
use std::marker::PhantomData;

use super::client::ApiClient;
use super::error::ApiError;

pub struct RestResource<T> {
    client: ApiClient,
    base: &'static str,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for RestResource<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            base: self.base,
            _record: PhantomData,
        }
    }
}

impl<T: ApiRecord> RestResource<T> {
    pub fn new(client: ApiClient, base: &'static str) -> Self {
        Self {
            client,
            base,
            _record: PhantomData,
        }
    }

    pub fn base(&self) -> &'static str {
        self.base
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn collection_path(&self) -> String {
        collection_path(self.base)
    }

    pub fn item_path(&self, id: &T::Id) -> String {
        item_path(self.base, &id.as_string())
    }

    pub fn action_path(&self, id: &T::Id, action: &str) -> String {
        format!("{}/{}", self.item_path(id), action)
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Paginated<T>, ApiError> {
        self.client
            .get_with_query(&self.collection_path(), query)
            .await
    }

    pub async fn get(&self, id: &T::Id) -> Result<T, ApiError> {
        self.client.get(&self.item_path(id)).await
    }

    pub async fn create<B: Serialize>(&self, body: &B) -> Result<T, ApiError> {
        self.client.post(&self.collection_path(), body).await
    }

    pub async fn update<B: Serialize>(&self, id: &T::Id, body: &B) -> Result<T, ApiError> {
        self.client.put(&self.item_path(id), body).await
    }

    pub async fn delete(&self, id: &T::Id) -> Result<(), ApiError> {
        self.client.delete(&self.item_path(id)).await
    }
}

pub fn collection_path(base: &str) -> String {
    format!("/{}", base.trim_matches('/'))
}

/// Item path with the id percent-encoded as one segment
pub fn item_path(base: &str, id: &str) -> String {
    format!("{}/{}", collection_path(base), urlencoding::encode(id))
}
