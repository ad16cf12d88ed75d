//! Shared domain types.

pub mod email;
pub mod key;
pub mod price;
pub mod status;

pub use email::{Email, EmailError};
pub use key::{AdminUserId, ProductKey};
pub use price::{PriceTag, format_thb};
pub use status::ProductStatus;
