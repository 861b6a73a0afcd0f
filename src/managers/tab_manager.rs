use uuid::Uuid;

use crate::types::errors::TabError;
use crate::types::tab::TabSlot;

/// Trait defining the tab strip interface.
pub trait TabManagerTrait {
    fn open_tab(&mut self, url: &str, label: &str) -> usize;
    fn close_tab(&mut self, index: usize) -> Result<bool, TabError>;
    fn switch_to(&mut self, index: usize) -> Result<(), TabError>;
    fn get(&self, index: usize) -> Option<&TabSlot>;
    fn get_by_id(&self, tab_id: &str) -> Option<&TabSlot>;
    fn current(&self) -> Option<&TabSlot>;
    fn current_index(&self) -> Option<usize>;
    fn is_current(&self, tab_id: &str) -> bool;
    fn all(&self) -> &[TabSlot];
    fn count(&self) -> usize;
    fn update_url(&mut self, tab_id: &str, url: &str) -> Result<(), TabError>;
    fn update_title(&mut self, tab_id: &str, title: &str) -> Result<(), TabError>;
}

/// In-memory tab strip for the shell.
///
/// Slot order is display order; a slot's index shifts when tabs to its left
/// close. The strip starts empty and holds at least one slot from the first
/// `open_tab` on: `close_tab` refuses to remove the last remaining slot.
pub struct TabManager {
    slots: Vec<TabSlot>,
    current: Option<usize>,
}

impl TabManager {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            current: None,
        }
    }

    fn find_index(&self, tab_id: &str) -> Option<usize> {
        self.slots.iter().position(|t| t.id == tab_id)
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TabManagerTrait for TabManager {
    /// Open a new tab at `url`, append it to the strip, and make it current.
    /// Returns the new tab's index.
    fn open_tab(&mut self, url: &str, label: &str) -> usize {
        let slot = TabSlot {
            id: Uuid::new_v4().to_string(),
            url: url.to_string(),
            title: label.to_string(),
        };
        self.slots.push(slot);
        let index = self.slots.len() - 1;
        self.current = Some(index);
        index
    }

    /// Close the tab at `index`. Returns `Ok(false)` without touching any
    /// state when fewer than 2 tabs remain. When the current tab is removed,
    /// the slot that slides into its position becomes current (the new last
    /// slot when the closed tab was rightmost).
    fn close_tab(&mut self, index: usize) -> Result<bool, TabError> {
        if index >= self.slots.len() {
            return Err(TabError::InvalidIndex(index));
        }
        if self.slots.len() < 2 {
            return Ok(false);
        }

        self.slots.remove(index);

        if let Some(cur) = self.current {
            if cur == index {
                self.current = Some(index.min(self.slots.len() - 1));
            } else if cur > index {
                self.current = Some(cur - 1);
            }
        }

        Ok(true)
    }

    /// Make the tab at `index` current.
    fn switch_to(&mut self, index: usize) -> Result<(), TabError> {
        if index >= self.slots.len() {
            return Err(TabError::InvalidIndex(index));
        }
        self.current = Some(index);
        Ok(())
    }

    fn get(&self, index: usize) -> Option<&TabSlot> {
        self.slots.get(index)
    }

    fn get_by_id(&self, tab_id: &str) -> Option<&TabSlot> {
        self.slots.iter().find(|t| t.id == tab_id)
    }

    fn current(&self) -> Option<&TabSlot> {
        self.current.and_then(|i| self.slots.get(i))
    }

    fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Whether `tab_id` names the current tab. Notification handlers use
    /// this to drop events from tabs that are no longer current.
    fn is_current(&self, tab_id: &str) -> bool {
        self.current().map(|t| t.id == tab_id).unwrap_or(false)
    }

    fn all(&self) -> &[TabSlot] {
        &self.slots
    }

    fn count(&self) -> usize {
        self.slots.len()
    }

    fn update_url(&mut self, tab_id: &str, url: &str) -> Result<(), TabError> {
        let index = self
            .find_index(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        self.slots[index].url = url.to_string();
        Ok(())
    }

    fn update_title(&mut self, tab_id: &str, title: &str) -> Result<(), TabError> {
        let index = self
            .find_index(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        self.slots[index].title = title.to_string();
        Ok(())
    }
}
