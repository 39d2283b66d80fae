//! Request handlers, one module per endpoint.

pub mod health;
pub mod inventory;
pub mod products;
pub mod settings;
pub mod submit;
pub mod upload;
