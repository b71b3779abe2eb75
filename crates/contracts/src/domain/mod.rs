pub mod common;

pub mod a001_admin;
pub mod a002_user;
pub mod a003_brand;
pub mod a004_tag;
pub mod a005_clinic;
pub mod a006_order;
pub mod a007_prescription;
pub mod a008_banner;
pub mod a009_content_page;
pub mod a010_delivery_fee;
pub mod a011_backup;
pub mod a012_notification;
