pub mod branch;
pub mod category;
pub mod courier;
pub mod dish;
pub mod order;
pub mod promo_code;
pub mod sub_category;
pub mod user;

mod router;
pub use router::get_router;
