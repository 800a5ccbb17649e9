//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. The sequential reorder
//! write path lives in [`ordering`].

pub mod artwork_repo;
pub mod exhibition_image_repo;
pub mod exhibition_repo;
pub mod media_item_repo;
pub mod ordering;
pub mod session_repo;
pub mod user_repo;

pub use artwork_repo::ArtworkRepo;
pub use exhibition_image_repo::ExhibitionImageRepo;
pub use exhibition_repo::ExhibitionRepo;
pub use media_item_repo::MediaItemRepo;
pub use ordering::{apply_order_updates, OrderedCollection, ReorderError};
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
