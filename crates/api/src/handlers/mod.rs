//! Request handlers.
//!
//! Each submodule provides async handler functions for one area of the site.
//! Handlers read from the shared catalog or relay, and map errors via
//! [`AppError`](crate::error::AppError).

pub mod about;
pub mod contact;
pub mod portfolio;
pub mod services;
pub mod theme;
