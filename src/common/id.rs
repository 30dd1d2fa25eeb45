/// Monotonic ID allocation.
///
/// Documents keep independent counters per ID space (drawing IDs,
/// relationship IDs). Each counter is owned by the document that uses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdCounter {
    next: u32,
}

impl IdCounter {
    /// Create a counter whose first allocation returns `first`.
    pub const fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    /// Allocate the next ID.
    pub fn allocate(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// The ID the next call to [`allocate`](Self::allocate) will return.
    pub fn peek(&self) -> u32 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_is_strictly_increasing() {
        let mut ids = IdCounter::starting_at(2);
        assert_eq!(ids.peek(), 2);
        assert_eq!(ids.allocate(), 2);
        assert_eq!(ids.allocate(), 3);
        assert_eq!(ids.allocate(), 4);
        assert_eq!(ids.peek(), 5);
    }

    #[test]
    fn test_independent_counters() {
        let mut images = IdCounter::starting_at(1);
        let mut rels = IdCounter::starting_at(2);
        assert_eq!(images.allocate(), 1);
        assert_eq!(rels.allocate(), 2);
        assert_eq!(images.allocate(), 2);
        assert_eq!(rels.allocate(), 3);
    }
}
