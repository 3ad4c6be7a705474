//! Inline storage for a single `T` with in-place construct and destruct.
//!
//! A `Slot` does not know whether it holds a live value. The owner tracks
//! that and upholds the preconditions on every `unsafe` method.

use core::mem::MaybeUninit;
use core::ptr;

/// Storage sized and aligned for exactly one `T`. Never drops its contents.
#[repr(transparent)]
pub struct Slot<T> {
    bytes: MaybeUninit<T>,
}

impl<T> Slot<T> {
    /// Uninitialized storage.
    #[inline]
    pub const fn vacant() -> Self {
        Self { bytes: MaybeUninit::uninit() }
    }

    /// Storage already holding `value`.
    #[inline]
    pub const fn holding(value: T) -> Self {
        Self { bytes: MaybeUninit::new(value) }
    }

    /// Writes `value` into the storage and returns a borrow of it.
    ///
    /// # Safety
    ///
    /// The slot must not hold a live value, otherwise that value is leaked.
    #[inline]
    pub unsafe fn construct(&mut self, value: T) -> &mut T {
        self.bytes.write(value)
    }

    /// Runs the destructor of the live value in place.
    ///
    /// # Safety
    ///
    /// The slot must hold a live value. It holds none afterwards, even if the
    /// destructor panics.
    #[inline]
    pub unsafe fn destruct(&mut self) {
        ptr::drop_in_place(self.bytes.as_mut_ptr());
    }

    /// Moves the live value out.
    ///
    /// # Safety
    ///
    /// The slot must hold a live value. It holds none afterwards.
    #[inline]
    pub unsafe fn take(&mut self) -> T {
        self.bytes.assume_init_read()
    }

    /// # Safety
    ///
    /// The slot must hold a live value.
    #[inline]
    pub unsafe fn get(&self) -> &T {
        self.bytes.assume_init_ref()
    }

    /// # Safety
    ///
    /// The slot must hold a live value.
    #[inline]
    pub unsafe fn get_mut(&mut self) -> &mut T {
        self.bytes.assume_init_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Tally(Rc<Cell<usize>>);

    impl Drop for Tally {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn layout_matches_payload() {
        assert_eq!(core::mem::size_of::<Slot<u64>>(), core::mem::size_of::<u64>());
        assert_eq!(core::mem::align_of::<Slot<u64>>(), core::mem::align_of::<u64>());
        assert_eq!(core::mem::size_of::<Slot<[u8; 3]>>(), 3);
        assert_eq!(core::mem::align_of::<Slot<(u8, u32)>>(), core::mem::align_of::<u32>());
    }

    #[test]
    fn construct_then_destruct_drops_once() {
        let drops = Rc::new(Cell::new(0));
        let mut slot = Slot::vacant();
        unsafe {
            slot.construct(Tally(drops.clone()));
            assert_eq!(drops.get(), 0);
            slot.destruct();
        }
        assert_eq!(drops.get(), 1);
        // The slot itself never drops what it holds.
        drop(slot);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn take_moves_without_dropping() {
        let drops = Rc::new(Cell::new(0));
        let mut slot = Slot::holding(Tally(drops.clone()));
        let out = unsafe { slot.take() };
        assert_eq!(drops.get(), 0);
        drop(out);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn borrows_see_writes() {
        let mut slot = Slot::vacant();
        unsafe {
            *slot.construct(String::from("ab")) += "c";
            slot.get_mut().push('d');
            assert_eq!(slot.get(), "abcd");
            slot.destruct();
        }
    }
}
