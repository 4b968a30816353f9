use crate::Event;

/// A projection builds a read model from a stream of events.
///
/// Read models are disposable: events are the source of truth and a
/// projection can always be rebuilt by replaying them from the start. This
/// crate stays in-memory; persistence of a read model (if any) is an
/// external concern.
pub trait Projection {
    type Ev: Event;

    /// Fold a single event into the read model.
    ///
    /// Implementations must tolerate events they do not care about by
    /// ignoring them.
    fn project(&mut self, event: &Self::Ev);
}
