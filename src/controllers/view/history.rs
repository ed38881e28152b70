use crate::core::data::viewport::Viewport;

/// Previously displayed viewports, most recent last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewHistory {
    entries: Vec<Viewport>,
}

impl ViewHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, viewport: Viewport) {
        self.entries.push(viewport);
    }

    pub fn pop(&mut self) -> Option<Viewport> {
        self.entries.pop()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&Viewport> {
        self.entries.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
