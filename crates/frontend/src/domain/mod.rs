pub mod a003_brand;
pub mod a005_clinic;
pub mod a006_order;
