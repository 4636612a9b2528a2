pub mod database;
pub mod qr;
pub mod validation;
