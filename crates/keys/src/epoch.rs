/// Seconds between the Unix epoch and the ripple epoch (2000-01-01T00:00Z).
pub const RIPPLE_EPOCH_OFFSET: i64 = 946_684_800;

/// Convert ripple-epoch seconds to Unix-epoch seconds.
///
/// Pure arithmetic with no range validation; nonsensical inputs pass through
/// unchanged, matching the published documents' garbage-in-garbage-out
/// contract. The addition wraps rather than panics: the timestamp comes
/// straight from a fetched document, which must not be able to abort the
/// process.
pub fn ripple_to_unix(seconds: i64) -> i64 {
    seconds.wrapping_add(RIPPLE_EPOCH_OFFSET)
}
