//! # LimbStorage
//! Container of limbs with small-object optimization and copy-on-write sharing.
//!
//! Up to [`INLINE_CAPACITY`] limbs live inline. The first growth past that
//! moves the limbs into a [`SharedBuffer`] and the storage stays shared for
//! the rest of its life, even if it later shrinks. Clones of a shared storage
//! point at the same buffer; any write through a clone first privatizes it.

use std::ops::{Index, IndexMut};

use log::trace;

use crate::big_num_constants::*;
use crate::shared_buffer::SharedBuffer;

#[derive(Debug, Clone)]
pub struct LimbStorage {
    repr: Repr,
}

#[derive(Debug, Clone)]
enum Repr {
    Inline { buf: [Limb; INLINE_CAPACITY], len: usize },
    // `len` is the logical length, the buffer may hold more
    Shared { buf: SharedBuffer, len: usize },
}

impl Default for LimbStorage {
    fn default() -> Self {
        LimbStorage::new()
    }
}

impl LimbStorage {
    pub const fn new() -> Self {
        LimbStorage {
            repr: Repr::Inline { buf: [0; INLINE_CAPACITY], len: 0 },
        }
    }

    pub fn from_slice(limbs: &[Limb]) -> Self {
        let mut storage = LimbStorage::new();
        storage.extend_from_slice(limbs);
        storage
    }

    pub fn len(&self) -> usize {
        match &self.repr {
            Repr::Inline { len, .. } | Repr::Shared { len, .. } => *len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_inline(&self) -> bool {
        matches!(self.repr, Repr::Inline { .. })
    }

    /// Number of storages holding the same heap buffer, `None` while inline.
    pub fn shared_count(&self) -> Option<usize> {
        match &self.repr {
            Repr::Inline { .. } => None,
            Repr::Shared { buf, .. } => Some(buf.use_count()),
        }
    }

    pub fn as_slice(&self) -> &[Limb] {
        match &self.repr {
            Repr::Inline { buf, len } => &buf[..*len],
            Repr::Shared { buf, len } => &buf.as_slice()[..*len],
        }
    }

    /// Mutable view of the limbs, privatizing a shared buffer first.
    pub fn as_mut_slice(&mut self) -> &mut [Limb] {
        match &mut self.repr {
            Repr::Inline { buf, len } => &mut buf[..*len],
            Repr::Shared { buf, len } => {
                let len = *len;
                &mut buf.make_unique(len)[..len]
            }
        }
    }

    pub fn last(&self) -> Option<Limb> {
        self.as_slice().last().copied()
    }

    /// Sets the length to `new_len`, filling any new slots with `fill`.
    pub fn resize(&mut self, new_len: usize, fill: Limb) {
        match &mut self.repr {
            Repr::Inline { buf, len } => {
                if new_len <= INLINE_CAPACITY {
                    if new_len > *len {
                        buf[*len..new_len].fill(fill);
                    }
                    *len = new_len;
                    return;
                }
            }
            Repr::Shared { buf, len } => {
                // shrinking only narrows the logical view, nothing is written
                if new_len > *len {
                    let v = buf.make_unique(*len);
                    v.truncate(*len);
                    v.resize(new_len, fill);
                }
                *len = new_len;
                return;
            }
        }
        self.promote(new_len);
        self.resize(new_len, fill);
    }

    pub fn push(&mut self, limb: Limb) {
        self.resize(self.len() + 1, limb);
    }

    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len() {
            self.resize(new_len, 0);
        }
    }

    pub fn clear(&mut self) {
        self.truncate(0);
    }

    pub fn extend_from_slice(&mut self, limbs: &[Limb]) {
        let start = self.len();
        self.resize(start + limbs.len(), 0);
        self.as_mut_slice()[start..].copy_from_slice(limbs);
    }

    // moves the inline limbs into a fresh shared buffer, there is no way back
    fn promote(&mut self, capacity: usize) {
        if let Repr::Inline { buf, len } = &self.repr {
            trace!("promoting inline limb storage of {} limbs to the heap", len);
            let len = *len;
            let shared = SharedBuffer::from_slice(&buf[..len], capacity);
            self.repr = Repr::Shared { buf: shared, len };
        }
    }
}

impl Index<usize> for LimbStorage {
    type Output = Limb;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl IndexMut<usize> for LimbStorage {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
