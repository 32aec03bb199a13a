use std::marker::PhantomData;

use mge_common::models::{Console, Faq, Fnb, Game, Promo, Room, Unit};
use mge_common::{log_result, ApiClient, MgeError, Validate};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::forms::{ConsoleForm, FaqForm, FnbForm, GameForm, PromoForm, RoomForm, UnitForm};

/// A record type managed through the backend's `/admin/{PATH}` CRUD endpoints.
pub trait AdminResource: DeserializeOwned + Send {
    /// Path segment under `admin/`
    const PATH: &'static str;
    /// Key the backend may wrap a single record in
    const KEY: &'static str;
    /// Body sent on create and update
    type Payload: Serialize + Validate + Sync;
}

macro_rules! admin_resource {
    ($record:ty, $form:ty, $path:literal, $key:literal) => {
        impl AdminResource for $record {
            const PATH: &'static str = $path;
            const KEY: &'static str = $key;
            type Payload = $form;
        }
    };
}

admin_resource!(Console, ConsoleForm, "consoles", "console");
admin_resource!(Room, RoomForm, "rooms", "room");
admin_resource!(Unit, UnitForm, "units", "unit");
admin_resource!(Game, GameForm, "games", "game");
admin_resource!(Fnb, FnbForm, "fnbs", "fnb");
admin_resource!(Promo, PromoForm, "promos", "promo");
admin_resource!(Faq, FaqForm, "faqs", "faq");

/// CRUD calls for one admin resource type.
///
/// Payloads are validated locally before any request goes out.
pub struct ResourceClient<'a, R> {
    client: &'a ApiClient,
    _resource: PhantomData<R>,
}

impl<'a, R: AdminResource> ResourceClient<'a, R> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    fn collection_path() -> String {
        format!("admin/{}", R::PATH)
    }

    fn item_path(id: u64) -> String {
        format!("admin/{}/{}", R::PATH, id)
    }

    pub async fn list(&self) -> Result<Vec<R>, MgeError> {
        debug!("Listing admin {}", R::PATH);
        self.client
            .get_json(&Self::collection_path(), Some(R::PATH))
            .await
    }

    pub async fn get(&self, id: u64) -> Result<R, MgeError> {
        self.client
            .get_json(&Self::item_path(id), Some(R::KEY))
            .await
    }

    pub async fn create(&self, payload: &R::Payload) -> Result<R, MgeError> {
        payload.validate()?;
        let result = self
            .client
            .post_json(&Self::collection_path(), payload, Some(R::KEY))
            .await;
        log_result(
            result,
            &format!("Created admin {} record", R::KEY),
            &format!("Failed to create admin {} record", R::KEY),
        )
    }

    pub async fn update(&self, id: u64, payload: &R::Payload) -> Result<R, MgeError> {
        payload.validate()?;
        let result = self
            .client
            .put_json(&Self::item_path(id), payload, Some(R::KEY))
            .await;
        log_result(
            result,
            &format!("Updated admin {} {}", R::KEY, id),
            &format!("Failed to update admin {} {}", R::KEY, id),
        )
    }

    pub async fn delete(&self, id: u64) -> Result<(), MgeError> {
        log_result(
            self.client.delete(&Self::item_path(id)).await,
            &format!("Deleted admin {} {}", R::KEY, id),
            &format!("Failed to delete admin {} {}", R::KEY, id),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(ResourceClient::<Fnb>::collection_path(), "admin/fnbs");
        assert_eq!(ResourceClient::<Promo>::item_path(9), "admin/promos/9");
        assert_eq!(<Faq as AdminResource>::KEY, "faq");
    }
}
