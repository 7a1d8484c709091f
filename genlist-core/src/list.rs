//! The resizable sequence container.
//!
//! # Examples
//!
//! ## Copy mode
//!
//! ```
//! use genlist_core::{Copied, GenList};
//!
//! let mut list = GenList::<Copied>::new(4)?;
//! list.add(&100i32.to_ne_bytes())?;
//! list.add(&102i32.to_ne_bytes())?;
//! list.add_at(1, &101i32.to_ne_bytes())?;
//!
//! let mut out = [0u8; 4];
//! list.copy_to(1, &mut out)?;
//! assert_eq!(i32::from_ne_bytes(out), 101);
//! assert_eq!(list.len(), 3);
//! # Ok::<(), genlist_core::Error>(())
//! ```
//!
//! ## Reference mode
//!
//! ```
//! use genlist_core::{GenList, Referenced};
//! use std::ffi::c_void;
//!
//! let mut value = 42u32;
//! let ptr = (&mut value as *mut u32).cast::<c_void>();
//!
//! let mut list = GenList::<Referenced>::new(std::mem::size_of::<*mut c_void>())?;
//! list.add(ptr)?;
//! assert_eq!(list.get(0)?, ptr);
//! # Ok::<(), genlist_core::Error>(())
//! ```

use crate::{
    config::ListConfig,
    error::{Error, Result},
    last_error::{fail, record},
    policy::{Copied, Ownership, SlotPolicy},
};
use std::{fmt, ops::ControlFlow};

/// Snapshot of a list's metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListInfo {
    /// Number of live items.
    pub count: usize,
    /// Byte size of one item.
    pub item_size: usize,
    /// Ownership mode fixed at creation.
    pub ownership: Ownership,
}

/// A growable sequence of fixed-size items under the ownership policy `P`.
///
/// Slots at `index < len()` are occupied; the remaining slots up to
/// `capacity()` are vacant. Capacity grows by a fixed increment and is
/// never reduced.
pub struct GenList<P: SlotPolicy> {
    item_size: usize,
    count: usize,
    growth: usize,
    slots: Vec<Option<P::Slot>>,
}

impl<P: SlotPolicy> GenList<P> {
    /// Creates an empty list with the default capacity and growth.
    ///
    /// # Errors
    ///
    /// [`Error::NullArgument`] if `item_size` is zero.
    pub fn new(item_size: usize) -> Result<Self> {
        Self::with_config(ListConfig::with_item_size(item_size)?)
    }

    /// Creates an empty list from a validated configuration.
    ///
    /// # Errors
    ///
    /// [`Error::Alloc`] if the initial slot array cannot be allocated.
    pub fn with_config(config: ListConfig) -> Result<Self> {
        let mut list = Self {
            item_size: config.item_size(),
            count: 0,
            growth: config.growth(),
            slots: Vec::new(),
        };
        list.grow_by(config.initial_capacity())?;
        Ok(list)
    }

    /// Returns count, item size and ownership in one call.
    pub fn info(&self) -> ListInfo {
        ListInfo {
            count: self.count,
            item_size: self.item_size,
            ownership: P::OWNERSHIP,
        }
    }

    /// Number of live items.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Byte size of one item.
    pub fn item_size(&self) -> usize {
        self.item_size
    }

    /// Ownership mode of this list.
    pub fn ownership(&self) -> Ownership {
        P::OWNERSHIP
    }

    /// Appends `item` at index `len()`.
    ///
    /// # Errors
    ///
    /// [`Error::ShortBuffer`] if a copied item is shorter than the item size,
    /// [`Error::Alloc`] if growing fails.
    pub fn add(&mut self, item: P::Item<'_>) -> Result<()> {
        self.add_at(self.count, item)
    }

    /// Inserts `item` at `index`, shifting later items one slot toward the end.
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `index > len()`. The list is unchanged on
    /// any error.
    pub fn add_at(&mut self, index: usize, item: P::Item<'_>) -> Result<()> {
        if index > self.count {
            return fail(Error::OutOfRange {
                index,
                len: self.count,
            });
        }
        let slot = P::store(self.item_size, item)?;
        if self.count == self.capacity() {
            self.grow_by(self.growth)?;
        }

        if index < self.count {
            let moved = self.count - index;
            tracing::trace!(index, moved, "shifting items toward the end");
        }
        // Walk from the last occupied slot down so nothing is overwritten
        // before it has moved.
        for j in (index..self.count).rev() {
            self.slots[j + 1] = self.slots[j].take();
        }
        self.slots[index] = Some(slot);
        self.count += 1;
        Ok(())
    }

    /// Borrows the item at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if the list is empty or `index >= len()`.
    pub fn get(&self, index: usize) -> Result<P::View<'_>> {
        match self.occupied(index) {
            Some(slot) => Ok(P::view(slot)),
            None => fail(self.out_of_range(index)),
        }
    }

    /// Removes the item at `index`, shifting later items one slot toward
    /// the front. Capacity is kept.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if the list is empty or `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<()> {
        if index >= self.count {
            return fail(self.out_of_range(index));
        }
        drop(self.slots[index].take());
        if index + 1 < self.count {
            let moved = self.count - index - 1;
            tracing::trace!(index, moved, "shifting items toward the front");
        }
        for j in index + 1..self.count {
            self.slots[j - 1] = self.slots[j].take();
        }
        self.count -= 1;
        debug_assert!(self.slots[self.count].is_none());
        Ok(())
    }

    /// Removes every item. Capacity is kept for reuse.
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.count] {
            drop(slot.take());
        }
        self.count = 0;
    }

    /// Returns a forward iterator over `(index, item)` pairs.
    pub fn iter(&self) -> Iter<'_, P> {
        Iter {
            slots: self.slots[..self.count].iter().enumerate(),
        }
    }

    /// Calls `f` for each item in order until it returns
    /// [`ControlFlow::Break`].
    ///
    /// Stopping early is not an error.
    pub fn for_each<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(usize, P::View<'a>) -> ControlFlow<()>,
    {
        for (index, item) in self.iter() {
            if f(index, item).is_break() {
                tracing::trace!(index, "traversal stopped early");
                break;
            }
        }
    }

    /// Destroys the list, releasing every owned block and the slot array.
    pub fn destroy(self) {
        tracing::debug!(
            count = self.count,
            capacity = self.capacity(),
            ownership = ?P::OWNERSHIP,
            "destroying list"
        );
    }

    fn occupied(&self, index: usize) -> Option<&P::Slot> {
        if index < self.count {
            self.slots[index].as_ref()
        } else {
            None
        }
    }

    fn out_of_range(&self, index: usize) -> Error {
        Error::OutOfRange {
            index,
            len: self.count,
        }
    }

    fn grow_by(&mut self, additional: usize) -> Result<()> {
        if additional == 0 {
            return Ok(());
        }
        self.slots
            .try_reserve_exact(additional)
            .map_err(|e| record(e.into()))?;
        let capacity = self.slots.len() + additional;
        self.slots.resize_with(capacity, || None);
        tracing::trace!(capacity, "grew slot array");
        Ok(())
    }
}

impl GenList<Copied> {
    /// Copies the item at `index` into the first `item_size()` bytes of `dest`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `index >= len()`, [`Error::ShortBuffer`] if
    /// `dest` is shorter than the item size.
    pub fn copy_to(&self, index: usize, dest: &mut [u8]) -> Result<()> {
        let block = self.get(index)?;
        let actual = dest.len();
        match dest.get_mut(..block.len()) {
            Some(dest) => {
                dest.copy_from_slice(block);
                Ok(())
            }
            None => fail(Error::ShortBuffer {
                expected: block.len(),
                actual,
            }),
        }
    }

    /// Like [`for_each`](Self::for_each), but hands out each owned block
    /// mutably so the callback may rewrite it in place.
    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, &mut [u8]) -> ControlFlow<()>,
    {
        for (index, slot) in self.slots[..self.count].iter_mut().enumerate() {
            let Some(block) = slot.as_deref_mut() else {
                continue;
            };
            if f(index, block).is_break() {
                tracing::trace!(index, "traversal stopped early");
                break;
            }
        }
    }
}

impl<P: SlotPolicy> fmt::Debug for GenList<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenList")
            .field("ownership", &P::OWNERSHIP)
            .field("item_size", &self.item_size)
            .field("count", &self.count)
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<'a, P: SlotPolicy> IntoIterator for &'a GenList<P> {
    type Item = (usize, P::View<'a>);
    type IntoIter = Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward iterator over the items of a [`GenList`].
pub struct Iter<'a, P: SlotPolicy> {
    slots: std::iter::Enumerate<std::slice::Iter<'a, Option<P::Slot>>>,
}

impl<'a, P: SlotPolicy> Iterator for Iter<'a, P> {
    type Item = (usize, P::View<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let (index, slot) = self.slots.next()?;
        Some((index, P::view(slot.as_ref()?)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}
