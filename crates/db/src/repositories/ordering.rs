//! Sequential write path for reorder operations.
//!
//! A planned reorder (see `atelier_core::ordering::plan_move`) is persisted
//! as one `UPDATE` per displaced row. Writes are awaited in sequence, not
//! fanned out, so a failure partway leaves a deterministic prefix of
//! completed writes. There is no transaction and no rollback: this is a
//! single-curator editing tool, and the accepted recovery path is for the
//! caller to re-fetch the collection and retry.

use sqlx::PgPool;

use atelier_core::ordering::OrderUpdate;

/// The sortable tables. A closed set so table names never come from input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderedCollection {
    Artworks,
    Exhibitions,
    ExhibitionImages,
    MediaItems,
}

impl OrderedCollection {
    fn table(self) -> &'static str {
        match self {
            OrderedCollection::Artworks => "artworks",
            OrderedCollection::Exhibitions => "exhibitions",
            OrderedCollection::ExhibitionImages => "exhibition_images",
            OrderedCollection::MediaItems => "media_items",
        }
    }
}

/// Failure of a reorder batch.
#[derive(Debug, thiserror::Error)]
pub enum ReorderError {
    /// Some (possibly zero) of the batch's writes were applied before or
    /// between failures. Succeeded writes are not rolled back; the caller
    /// must re-fetch to observe the persisted order.
    #[error("reorder incomplete: {applied} of {total} order writes applied")]
    Partial {
        applied: usize,
        total: usize,
        #[source]
        source: sqlx::Error,
    },
}

/// Apply a reorder write-set, one row at a time.
///
/// Every entry is attempted regardless of earlier failures, so the persisted
/// state after a partial failure is as close to the intended order as the
/// backend allowed. Returns the first error wrapped in
/// [`ReorderError::Partial`] if any write failed.
pub async fn apply_order_updates(
    pool: &PgPool,
    collection: OrderedCollection,
    updates: &[OrderUpdate],
) -> Result<(), ReorderError> {
    let query = format!(
        "UPDATE {} SET display_order = $1 WHERE id = $2",
        collection.table()
    );

    let mut applied = 0usize;
    let mut first_error: Option<sqlx::Error> = None;

    for update in updates {
        match sqlx::query(&query)
            .bind(update.display_order)
            .bind(update.id)
            .execute(pool)
            .await
        {
            Ok(_) => applied += 1,
            Err(err) => {
                tracing::warn!(
                    table = collection.table(),
                    id = update.id,
                    display_order = update.display_order,
                    error = %err,
                    "Order write failed",
                );
                first_error.get_or_insert(err);
            }
        }
    }

    match first_error {
        None => Ok(()),
        Some(source) => Err(ReorderError::Partial {
            applied,
            total: updates.len(),
            source,
        }),
    }
}
