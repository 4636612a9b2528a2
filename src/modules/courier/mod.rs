//! Couriers are `users` rows with the `courier` role.

mod routes;

pub use routes::get_router;
