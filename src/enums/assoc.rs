/// Which side a position sticks to when an edit lands exactly on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    /// Stay before content inserted at this position.
    Before,
    /// Move past content inserted at this position.
    After,
}
