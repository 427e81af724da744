use crate::tables::ReferenceTables;

/// Source of the reference tables backing a locator. Isolates how the
/// tables are obtained (in-memory fixtures, a deserialized snapshot, a
/// database read at startup) and allows different backends to be swapped
/// in easily.
pub trait TableSource {
    type Error;

    /// Hands over the three reference tables. Called at most once per
    /// locator lifetime; the tables are immutable from that point on.
    fn acquire(&mut self) -> Result<ReferenceTables, Self::Error>;

    /// Releases whatever backed the tables (file handles, mapped memory).
    /// A scoped locator calls this on every exit path, including panics.
    /// Defaults to a no-op for purely in-memory sources.
    fn release(&mut self) {}
}
