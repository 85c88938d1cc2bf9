/// A fixed-capacity LIFO stack stored in a circular array.
///
/// `size` and the write cursor move independently: pushing writes at the
/// cursor and advances it, popping moves it back. When the stack is full the
/// slot under the cursor holds the oldest entry, which is what
/// [`RingStack::push_evicting`] overwrites.
#[derive(Debug, Clone)]
pub struct RingStack<T> {
    slots: Vec<Option<T>>,
    cursor: usize,
    size: usize,
}

impl<T> RingStack<T> {
    /// Create an empty stack. A capacity of zero is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            cursor: 0,
            size: 0,
        }
    }

    /// Maximum number of entries.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of entries currently held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the stack holds no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns true if another [`push`](Self::push) would fail.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.size == self.capacity()
    }

    /// Push `item` on top.
    ///
    /// # Errors
    ///
    /// Hands `item` back if the stack is full.
    pub fn push(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        self.store(item);
        Ok(())
    }

    /// Push `item` on top, evicting and returning the oldest entry if the
    /// stack is full.
    pub fn push_evicting(&mut self, item: T) -> Option<T> {
        let evicted = if self.is_full() {
            self.slots[self.cursor].take()
        } else {
            None
        };
        self.store(item);
        evicted
    }

    /// Remove and return the most recently pushed entry.
    pub fn pop(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }
        self.size -= 1;
        self.cursor = self.previous(self.cursor);
        self.slots[self.cursor].take()
    }

    /// The most recently pushed entry, without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        if self.size == 0 {
            return None;
        }
        self.slots[self.previous(self.cursor)].as_ref()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.cursor = 0;
        self.size = 0;
    }

    fn store(&mut self, item: T) {
        self.slots[self.cursor] = Some(item);
        self.cursor = (self.cursor + 1) % self.capacity();
        self.size = (self.size + 1).min(self.capacity());
    }

    fn previous(&self, index: usize) -> usize {
        (index + self.capacity() - 1) % self.capacity()
    }
}
