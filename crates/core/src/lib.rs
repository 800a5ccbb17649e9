//! Domain logic for the atelier portfolio backend.
//!
//! This crate is I/O-free: localized-field resolution, reorder planning,
//! YouTube URL parsing, and the shared error/type definitions live here.
//! Persistence and HTTP concerns live in `atelier-db` and `atelier-api`.

pub mod category;
pub mod error;
pub mod i18n;
pub mod ordering;
pub mod roles;
pub mod types;
pub mod video;
