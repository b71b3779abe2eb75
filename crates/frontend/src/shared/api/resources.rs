//! Admin API resources and their extra endpoints

use contracts::domain::a001_admin::aggregate::Admin;
use contracts::domain::a002_user::aggregate::User;
use contracts::domain::a003_brand::aggregate::Brand;
use contracts::domain::a004_tag::aggregate::Tag;
use contracts::domain::a005_clinic::aggregate::Clinic;
use contracts::domain::a006_order::aggregate::{Order, UpdateOrderStatusDto};
use contracts::domain::a007_prescription::aggregate::{Prescription, ReviewPrescriptionDto};
use contracts::domain::a008_banner::aggregate::Banner;
use contracts::domain::a009_content_page::aggregate::{ContentPage, ContentPageDto};
use contracts::domain::a010_delivery_fee::aggregate::DeliveryFee;
use contracts::domain::a011_backup::aggregate::Backup;
use contracts::domain::a012_notification::aggregate::Notification;
use contracts::enums::ContentPageKind;
use serde::de::IgnoredAny;

use super::client::ApiClient;
use super::error::ApiError;
use super::resource::{collection_path, RestResource};

pub const ADMINS: &str = "admins";
pub const USERS: &str = "users";
pub const BRANDS: &str = "brands";
pub const TAGS: &str = "tags";
pub const CLINICS: &str = "clinics";
pub const ORDERS: &str = "orders";
pub const PRESCRIPTIONS: &str = "prescriptions";
pub const BANNERS: &str = "banners";
pub const PAGES: &str = "pages";
pub const DELIVERY_FEES: &str = "delivery-fees";
pub const BACKUPS: &str = "backups";
pub const NOTIFICATIONS: &str = "notifications";

pub fn admins(client: &ApiClient) -> RestResource<Admin> {
    RestResource::new(client.clone(), ADMINS)
}

pub fn users(client: &ApiClient) -> RestResource<User> {
    RestResource::new(client.clone(), USERS)
}

pub fn brands(client: &ApiClient) -> RestResource<Brand> {
    RestResource::new(client.clone(), BRANDS)
}

pub fn tags(client: &ApiClient) -> RestResource<Tag> {
    RestResource::new(client.clone(), TAGS)
}

pub fn clinics(client: &ApiClient) -> RestResource<Clinic> {
    RestResource::new(client.clone(), CLINICS)
}

pub fn orders(client: &ApiClient) -> RestResource<Order> {
    RestResource::new(client.clone(), ORDERS)
}

pub fn prescriptions(client: &ApiClient) -> RestResource<Prescription> {
    RestResource::new(client.clone(), PRESCRIPTIONS)
}

pub fn banners(client: &ApiClient) -> RestResource<Banner> {
    RestResource::new(client.clone(), BANNERS)
}

pub fn delivery_fees(client: &ApiClient) -> RestResource<DeliveryFee> {
    RestResource::new(client.clone(), DELIVERY_FEES)
}

pub fn backups(client: &ApiClient) -> RestResource<Backup> {
    RestResource::new(client.clone(), BACKUPS)
}

pub fn notifications(client: &ApiClient) -> RestResource<Notification> {
    RestResource::new(client.clone(), NOTIFICATIONS)
}

impl RestResource<Order> {
    pub async fn set_status(&self, id: &i64, dto: &UpdateOrderStatusDto) -> Result<Order, ApiError> {
        self.client().put(&self.action_path(id, "status"), dto).await
    }
}

impl RestResource<Prescription> {
    pub async fn review(
        &self,
        id: &i64,
        dto: &ReviewPrescriptionDto,
    ) -> Result<Prescription, ApiError> {
        self.client().put(&self.action_path(id, "status"), dto).await
    }
}

impl RestResource<Backup> {
    /// Ask the server to take a new snapshot
    pub async fn create_backup(&self) -> Result<Backup, ApiError> {
        self.client()
            .post(&self.collection_path(), &serde_json::json!({}))
            .await
    }

    pub async fn restore(&self, id: &String) -> Result<(), ApiError> {
        self.client()
            .post::<_, IgnoredAny>(&self.action_path(id, "restore"), &serde_json::json!({}))
            .await
            .map(|_| ())
    }
}

impl RestResource<Notification> {
    pub async fn mark_read(&self, id: &i64) -> Result<(), ApiError> {
        self.client()
            .put::<_, IgnoredAny>(&self.action_path(id, "read"), &serde_json::json!({}))
            .await
            .map(|_| ())
    }
}

/// Content pages are addressed by kind instead of id
#[derive(Clone, Debug)]
pub struct ContentPages {
    client: ApiClient,
}

impl ContentPages {
    pub fn new(client: &ApiClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    pub fn path(kind: ContentPageKind) -> String {
        format!("{}/{}", collection_path(PAGES), kind.slug())
    }

    pub async fn get(&self, kind: ContentPageKind) -> Result<ContentPage, ApiError> {
        self.client.get(&Self::path(kind)).await
    }

    pub async fn update(
        &self,
        kind: ContentPageKind,
        dto: &ContentPageDto,
    ) -> Result<ContentPage, ApiError> {
        self.client.put(&Self::path(kind), dto).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::client::StaticToken;
    use crate::shared::config::ApiConfig;

    #[test]
    fn test_extra_endpoint_paths() {
        let client = ApiClient::new(ApiConfig::default(), StaticToken::default());
        assert_eq!(orders(&client).action_path(&5, "status"), "/orders/5/status");
        assert_eq!(
            backups(&client).action_path(&"b1.sql".to_string(), "restore"),
            "/backups/b1.sql/restore"
        );
        assert_eq!(notifications(&client).action_path(&9, "read"), "/notifications/9/read");
        assert_eq!(delivery_fees(&client).collection_path(), "/delivery-fees");
        assert_eq!(ContentPages::path(ContentPageKind::Returns), "/pages/returns");
    }
}
