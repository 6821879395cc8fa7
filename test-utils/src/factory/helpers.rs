use std::sync::atomic::{AtomicI64, Ordering};

static NEXT_ID: AtomicI64 = AtomicI64::new(1);

/// Returns a process-wide unique id for factory defaults.
///
/// Guarantees that two factories in the same test never produce colliding
/// unique columns (such as `Users.UserId`).
pub fn next_id() -> i64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
