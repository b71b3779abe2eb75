pub mod content_page_kind;
pub mod order_status;
pub mod prescription_status;

pub use content_page_kind::ContentPageKind;
pub use order_status::OrderStatus;
pub use prescription_status::PrescriptionStatus;
