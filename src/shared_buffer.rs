use std::rc::Rc;

use log::trace;

use crate::big_num_constants::Limb;

/// Heap array of limbs shared between clones of a `LimbStorage`.
///
/// Cloning only bumps a non-atomic reference count, the limbs are copied the
/// first time a holder asks for write access while the count is above one.
#[derive(Debug, Clone)]
pub struct SharedBuffer {
    limbs: Rc<Vec<Limb>>,
}

impl SharedBuffer {
    pub fn from_slice(limbs: &[Limb], capacity: usize) -> Self {
        let mut v = Vec::with_capacity(capacity.max(limbs.len()));
        v.extend_from_slice(limbs);
        SharedBuffer { limbs: Rc::new(v) }
    }

    pub fn use_count(&self) -> usize {
        Rc::strong_count(&self.limbs)
    }

    pub fn as_slice(&self) -> &[Limb] {
        &self.limbs
    }

    /// Write access to the buffer. If other holders exist, the first `len`
    /// limbs are copied into a fresh buffer which replaces this handle first.
    pub fn make_unique(&mut self, len: usize) -> &mut Vec<Limb> {
        if self.use_count() > 1 {
            trace!("privatizing shared limb buffer of {} limbs ({} holders)", len, self.use_count());
            *self = SharedBuffer::from_slice(&self.limbs[..len], len);
        }
        // the count is one here, so this never clones
        Rc::make_mut(&mut self.limbs)
    }
}
