//! HTTP surface: JSON handlers under `/api`, a health probe and middleware

pub mod middleware;
pub mod services;
