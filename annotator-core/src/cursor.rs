//! Bounded cursors over in-memory record lists
//!
//! A cursor is either unpositioned (the `-1` state, `index() == None`) or
//! points at a valid element. Stepping past either end leaves it where it is.

use annotator_store::{MessageRecord, UserRecord};

/// Cursor over the users page.
pub type UserCursor = Cursor<UserRecord>;

/// Cursor over the current user's messages, highest score first.
pub type MessageCursor = Cursor<MessageRecord>;

/// Ordered list plus a saturating position in it.
#[derive(Debug, Clone)]
pub struct Cursor<T> {
    items: Vec<T>,
    index: Option<usize>,
}

impl<T> Cursor<T> {
    /// Create an empty, unpositioned cursor
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            index: None,
        }
    }

    /// Replace the whole list and unposition the cursor
    pub fn load(&mut self, items: Vec<T>) {
        self.items = items;
        self.index = None;
    }

    /// Step forward.
    ///
    /// Returns the new current item, or `None` when the cursor is already on the
    /// last item or the list is empty (the position is left unchanged).
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&T> {
        let target = self.index.map_or(0, |i| i + 1);
        if target >= self.items.len() {
            return None;
        }
        self.index = Some(target);
        self.items.get(target)
    }

    /// Step backward.
    ///
    /// Returns the new current item, or `None` when the cursor is on the first
    /// item, unpositioned, or the list is empty.
    pub fn prev(&mut self) -> Option<&T> {
        let target = self.index?.checked_sub(1)?;
        self.index = Some(target);
        self.items.get(target)
    }

    /// Step in `direction`
    pub fn step(&mut self, direction: crate::types::Direction) -> Option<&T> {
        match direction {
            crate::types::Direction::Next => self.next(),
            crate::types::Direction::Prev => self.prev(),
        }
    }

    /// Item under the cursor
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index?)
    }

    /// Position, `None` when unpositioned
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Put the cursor back at a previously observed position.
    ///
    /// Out-of-range positions unposition the cursor.
    pub fn restore(&mut self, index: Option<usize>) {
        self.index = index.filter(|&i| i < self.items.len());
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for Cursor<T> {
    fn default() -> Self {
        Self::new()
    }
}
