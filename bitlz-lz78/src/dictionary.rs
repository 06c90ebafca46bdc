//! Append-only phrase dictionaries.
//!
//! Both dictionaries are binary tries stored as vector-backed arenas. Entries
//! are addressed by their creation index, which never changes when the arena
//! reallocates. Id 0 is the root (the empty phrase) and is never a child, so
//! a child link of 0 means "absent".
//!
//! - [`ForwardDictionary`] walks from root to leaf and is used by the encoder
//!   to find the longest known prefix.
//! - [`BackwardDictionary`] walks from leaf to root and is used by the decoder
//!   to rebuild a phrase from its id.

use crate::schedule::WidthSchedule;

/// Identifier of a dictionary entry, assigned in creation order.
pub type PhraseId = usize;

/// Id of the root entry (the empty phrase).
pub const ROOT: PhraseId = 0;

/// Entries reserved up front by both dictionaries.
const INITIAL_CAPACITY: usize = 2048;

/// Outcome of extending a match by one bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitMatch {
    /// The extended phrase is already known; the match continues at this id.
    Extended(PhraseId),
    /// The extended phrase was unseen and has just been added under `created`.
    /// The prefix must be emitted now.
    Unseen {
        /// Id assigned to the new entry.
        created: PhraseId,
    },
}

/// Encoder-side trie: `(prefix id, next bit) -> child id`.
#[derive(Debug, Clone)]
pub struct ForwardDictionary {
    /// Child links for bit 0 and bit 1; `ROOT` means absent.
    children: Vec<[PhraseId; 2]>,
    /// Pointer width schedule, stepped on every append.
    schedule: WidthSchedule,
}

impl Default for ForwardDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl ForwardDictionary {
    /// Create a dictionary containing only the root.
    pub fn new() -> Self {
        let mut children = Vec::with_capacity(INITIAL_CAPACITY);
        children.push([ROOT; 2]);
        Self {
            children,
            schedule: WidthSchedule::new(),
        }
    }

    /// Reset the dictionary to only the root, keeping its allocation.
    pub fn reset(&mut self) {
        self.children.truncate(1);
        self.children[ROOT] = [ROOT; 2];
        self.schedule = WidthSchedule::new();
    }

    /// Extend the phrase `prefix` by `bit`.
    ///
    /// Returns [`BitMatch::Extended`] with the child id if the longer phrase
    /// exists. Otherwise the child is created and [`BitMatch::Unseen`] is
    /// returned; the caller is still positioned at `prefix`.
    ///
    /// # Panics
    ///
    /// Panics if `prefix` is not an existing id.
    #[inline]
    pub fn match_bit(&mut self, prefix: PhraseId, bit: u8) -> BitMatch {
        let slot = usize::from(bit & 1);
        let child = self.children[prefix][slot];
        if child != ROOT {
            return BitMatch::Extended(child);
        }

        let created = self.children.len();
        self.schedule.advance(created);
        self.children.push([ROOT; 2]);
        self.children[prefix][slot] = created;

        BitMatch::Unseen { created }
    }

    /// Bits needed to encode the pointer of the phrase that was just added.
    #[inline]
    pub fn pointer_width(&self) -> u32 {
        self.schedule.width()
    }

    /// Total number of entries, root included.
    #[inline]
    pub fn count(&self) -> usize {
        self.children.len()
    }

    /// Child of `prefix` along `bit`, if it exists.
    pub fn child(&self, prefix: PhraseId, bit: u8) -> Option<PhraseId> {
        self.children
            .get(prefix)
            .map(|links| links[usize::from(bit & 1)])
            .filter(|&child| child != ROOT)
    }
}

/// A single decoder-side entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BackwardEntry {
    parent: PhraseId,
    bit: u8,
}

/// Decoder-side trie: `child id -> (parent id, bit)`.
#[derive(Debug, Clone)]
pub struct BackwardDictionary {
    entries: Vec<BackwardEntry>,
}

impl Default for BackwardDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl BackwardDictionary {
    /// Create a dictionary containing only the root, which is its own parent.
    pub fn new() -> Self {
        let mut entries = Vec::with_capacity(INITIAL_CAPACITY);
        entries.push(BackwardEntry {
            parent: ROOT,
            bit: 0,
        });
        Self { entries }
    }

    /// Reset the dictionary to only the root, keeping its allocation.
    pub fn reset(&mut self) {
        self.entries.truncate(1);
    }

    /// Add the phrase `parent + bit` and return its id.
    ///
    /// No duplicate check is made; the decoder always adds a new phrase.
    #[inline]
    pub fn append(&mut self, parent: PhraseId, bit: u8) -> PhraseId {
        debug_assert!(parent < self.entries.len(), "parent {parent} out of range");

        let id = self.entries.len();
        self.entries.push(BackwardEntry {
            parent,
            bit: bit & 1,
        });
        id
    }

    /// The bit appended to reach `id` from its parent.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not an existing id.
    #[inline]
    pub fn bit_of(&self, id: PhraseId) -> u8 {
        self.entries[id].bit
    }

    /// The parent of `id`. The root is its own parent.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not an existing id.
    #[inline]
    pub fn parent_of(&self, id: PhraseId) -> PhraseId {
        self.entries[id].parent
    }

    /// Total number of entries, root included.
    #[inline]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Whether `id` names an existing entry.
    #[inline]
    pub fn contains(&self, id: PhraseId) -> bool {
        id < self.entries.len()
    }

    /// Bits of the phrase `id`, last bit first, ending just below the root.
    ///
    /// # Panics
    ///
    /// The iterator panics if `id` is not an existing id.
    pub fn ancestry(&self, id: PhraseId) -> Ancestry<'_> {
        Ancestry {
            dict: self,
            current: id,
        }
    }
}

/// Iterator over the bits of a phrase from leaf to root.
#[derive(Debug, Clone)]
pub struct Ancestry<'a> {
    dict: &'a BackwardDictionary,
    current: PhraseId,
}

impl Iterator for Ancestry<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.current == ROOT {
            return None;
        }
        let bit = self.dict.bit_of(self.current);
        self.current = self.dict.parent_of(self.current);
        Some(bit)
    }
}
