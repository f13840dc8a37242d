use crate::state::VisitState;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Record of every URL the crawl has claimed
///
/// The registry is not synchronized on its own. It lives inside
/// [`Site`](crate::state::Site), whose single lock guards it together with
/// the page map.
#[derive(Debug, Default)]
pub struct VisitedRegistry {
    entries: HashMap<String, VisitState>,
}

impl VisitedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims a URL for fetching
    ///
    /// # Returns
    ///
    /// * `true` - The URL was unknown and is now recorded as discovered;
    ///   the caller owns it and may schedule a fetch
    /// * `false` - Another task already claimed it; nothing changed
    pub fn try_claim(&mut self, url: &str) -> bool {
        match self.entries.entry(url.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(VisitState::Discovered);
                true
            }
        }
    }

    /// Records the outcome of a fetch attempt
    ///
    /// A success marks the URL fetched (inserting it if the caller never
    /// claimed it). A failure removes the entry so a later discovery can
    /// claim the URL again.
    pub fn mark_attempted(&mut self, url: &str, success: bool) {
        if success {
            self.entries.insert(url.to_string(), VisitState::Fetched);
        } else {
            self.entries.remove(url);
        }
    }

    /// Returns the state of a URL, or None if it is not known
    pub fn get(&self, url: &str) -> Option<VisitState> {
        self.entries.get(url).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over every known URL and its state, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, VisitState)> {
        self.entries.iter().map(|(url, state)| (url.as_str(), *state))
    }
}
