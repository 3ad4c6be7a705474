//! `Optional<T>`: zero or one `T`, stored inline in a [`Slot`].
//!
//! Every transition of `occupied` from `false` to `true` is paired with one
//! `Slot::construct`, and every transition back with one `Slot::destruct` or
//! `Slot::take`. All `unsafe` blocks below rely on that pairing.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut};

use crate::error::BadOptionalAccess;
use crate::slot::Slot;

/// A value of type `T` that may be absent, held without heap allocation.
///
/// `Optional` derefs to `T`, but its inherent methods (`get`, `take`, `set`,
/// `reset`, ...) win method resolution. Write `(*o).take()` to reach a
/// method of the contained value with the same name.
pub struct Optional<T> {
    slot: Slot<T>,
    occupied: bool,
}

impl<T> Optional<T> {
    /// An empty container.
    #[inline]
    pub const fn new() -> Self {
        Self { slot: Slot::vacant(), occupied: false }
    }

    /// A container holding `value`, moved in place.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self { slot: Slot::holding(value), occupied: true }
    }

    /// A container holding a clone of `value`.
    #[inline]
    pub fn cloned_from(value: &T) -> Self
    where
        T: Clone,
    {
        Self::some(value.clone())
    }

    /// Moves the content of `other` into a new container, leaving `other` empty.
    pub fn take_from(other: &mut Self) -> Self {
        match other.take() {
            Some(value) => Self::some(value),
            None => Self::new(),
        }
    }

    #[inline]
    pub const fn has_value(&self) -> bool {
        self.occupied
    }

    /// Borrows the value, failing when empty.
    #[inline]
    pub fn value(&self) -> Result<&T, BadOptionalAccess> {
        self.get().ok_or(BadOptionalAccess)
    }

    /// Mutably borrows the value, failing when empty.
    #[inline]
    pub fn value_mut(&mut self) -> Result<&mut T, BadOptionalAccess> {
        self.get_mut().ok_or(BadOptionalAccess)
    }

    #[inline]
    pub fn get(&self) -> Option<&T> {
        if self.occupied {
            Some(unsafe { self.slot.get() })
        } else {
            None
        }
    }

    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.occupied {
            Some(unsafe { self.slot.get_mut() })
        } else {
            None
        }
    }

    /// Destroys the value if there is one. No-op when already empty.
    pub fn reset(&mut self) {
        if self.occupied {
            // Cleared first so a panicking destructor cannot lead to a second drop.
            self.occupied = false;
            unsafe { self.slot.destruct() };
        }
    }

    /// Moves the value out, leaving the container empty.
    pub fn take(&mut self) -> Option<T> {
        if self.occupied {
            self.occupied = false;
            Some(unsafe { self.slot.take() })
        } else {
            None
        }
    }

    /// Stores `value`. An existing value is assigned over, not destroyed and
    /// rebuilt; an empty container constructs it in place.
    pub fn set(&mut self, value: T) -> &mut T {
        if self.occupied {
            let current = unsafe { self.slot.get_mut() };
            *current = value;
            current
        } else {
            self.construct(value)
        }
    }

    /// Stores a clone of `value`, through `T::clone_from` when occupied.
    pub fn set_cloned(&mut self, value: &T) -> &mut T
    where
        T: Clone,
    {
        if self.occupied {
            let current = unsafe { self.slot.get_mut() };
            current.clone_from(value);
            current
        } else {
            self.construct(value.clone())
        }
    }

    /// Destroys the current value, if any, and constructs `value` in its place.
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.reset();
        self.construct(value)
    }

    /// Borrows the value, constructing it from `f` first when empty.
    pub fn get_or_insert_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if !self.occupied {
            let value = f();
            self.construct(value);
        }
        unsafe { self.slot.get_mut() }
    }

    /// Copy assignment: afterwards `self` mirrors `other`'s occupancy and value.
    ///
    /// | self     | other    | effect                          |
    /// |----------|----------|---------------------------------|
    /// | empty    | empty    | nothing                         |
    /// | occupied | empty    | `reset`                         |
    /// | empty    | occupied | clone constructed in place      |
    /// | occupied | occupied | `T::clone_from` on the existing |
    pub fn assign_from(&mut self, other: &Self)
    where
        T: Clone,
    {
        match other.get() {
            Some(value) => {
                self.set_cloned(value);
            }
            None => self.reset(),
        }
    }

    /// Move assignment from a container passed by value. Same table as
    /// [`assign_from`](Self::assign_from), with a move instead of a clone.
    pub fn move_assign(&mut self, mut other: Self) {
        self.move_from(&mut other);
    }

    /// Move assignment that leaves `other` empty.
    pub fn move_from(&mut self, other: &mut Self) {
        match other.take() {
            Some(value) => {
                self.set(value);
            }
            None => self.reset(),
        }
    }

    /// Consumes the container, failing when empty.
    pub fn into_inner(self) -> Result<T, BadOptionalAccess> {
        self.into_option().ok_or(BadOptionalAccess)
    }

    pub fn into_option(mut self) -> Option<T> {
        self.take()
    }

    fn construct(&mut self, value: T) -> &mut T {
        debug_assert!(!self.occupied);
        // `value` is fully built by now and the write itself cannot unwind.
        self.occupied = true;
        unsafe { self.slot.construct(value) }
    }
}

impl<T> Drop for Optional<T> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Optional<T> {
    fn clone(&self) -> Self {
        match self.get() {
            Some(value) => Self::cloned_from(value),
            None => Self::new(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_from(source);
    }
}

impl<T> Deref for Optional<T> {
    type Target = T;

    /// # Panics
    ///
    /// Panics with [`BadOptionalAccess`] when empty.
    fn deref(&self) -> &T {
        match self.value() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> DerefMut for Optional<T> {
    fn deref_mut(&mut self) -> &mut T {
        match self.value_mut() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("Some").field(value).finish(),
            None => f.write_str("None"),
        }
    }
}

impl<T: PartialEq> PartialEq for Optional<T> {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<T: Eq> Eq for Optional<T> {}

impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}

impl<T> From<T> for Optional<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::some(value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::some(value),
            None => Self::new(),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}
