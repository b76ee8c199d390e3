/// Fixed-size bitset over catalog positions
pub mod bitset;
/// Selection state with bulk select and deselect
pub mod store;

pub use store::SelectionStore;
