//! User role names stored in the `users.role` column.

/// Full access to the admin panel (content CRUD, reorder, uploads).
pub const ROLE_ADMIN: &str = "admin";
