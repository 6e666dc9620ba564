//! User domain — driver account creation.

pub mod client;
pub mod wire;

pub use client::Users;
pub use wire::{CreateUserRequest, UserRecord};
