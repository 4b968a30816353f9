use chrono::{DateTime, Utc};

/// A domain event: an immutable fact that something happened.
///
/// Events are append-only and versioned so their schema can evolve without
/// rewriting history.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "vending.coin_inserted").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn schema_version(&self) -> u32;

    /// When the event occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
