use vendo_core::Aggregate;

/// Execute an aggregate command deterministically (no IO, no async).
///
/// The canonical lifecycle in two steps:
///
/// 1. **Decide**: `aggregate.handle(command)` returns events without
///    mutating anything. A rejected command therefore leaves the aggregate
///    untouched.
/// 2. **Evolve**: each event is applied in order via `aggregate.apply(event)`.
///
/// The returned events are handed back so callers can feed projections or
/// render receipts from them.
pub fn execute<A>(aggregate: &mut A, command: &A::Command) -> Result<Vec<A::Event>, A::Error>
where
    A: Aggregate,
{
    let events = A::handle(aggregate, command)?;
    for ev in &events {
        A::apply(aggregate, ev);
    }
    Ok(events)
}
