//! Ownership disciplines for list slots.
//!
//! A list either owns a private copy of every item ([`Copied`]) or keeps
//! the caller's references untouched ([`Referenced`]). The discipline is a
//! type parameter of [`GenList`](crate::GenList), so a single list can never
//! mix the two.

use crate::{
    error::{Error, Result},
    last_error::fail,
};
use std::ffi::c_void;

/// Run-time name of an ownership discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ownership {
    /// The list allocates, copies and frees one block per item.
    Copy,
    /// The list stores caller-owned references and never frees them.
    Reference,
}

impl Ownership {
    /// Maps the C interface's `do_memcpy` flag to an ownership mode.
    pub const fn from_memcpy(do_memcpy: bool) -> Self {
        if do_memcpy {
            Ownership::Copy
        } else {
            Ownership::Reference
        }
    }

    /// Returns `true` for [`Ownership::Copy`].
    pub const fn is_copy(self) -> bool {
        matches!(self, Ownership::Copy)
    }
}

mod private {
    pub trait Sealed {}
}

/// Storage policy of a list slot.
///
/// This trait is sealed; [`Copied`] and [`Referenced`] are its only
/// implementations.
pub trait SlotPolicy: private::Sealed {
    /// The run-time ownership mode this policy stands for.
    const OWNERSHIP: Ownership;

    /// What an occupied slot holds.
    type Slot;

    /// What `add` and `add_at` accept.
    type Item<'a>;

    /// What `get` and traversal hand out.
    type View<'a>;

    /// Turns a caller item into a slot value.
    ///
    /// Must not have side effects on failure.
    fn store(item_size: usize, item: Self::Item<'_>) -> Result<Self::Slot>;

    /// Borrows the contents of an occupied slot.
    fn view(slot: &Self::Slot) -> Self::View<'_>;
}

/// Copy mode: every occupied slot owns an `item_size`-byte block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Copied {}

impl private::Sealed for Copied {}

impl SlotPolicy for Copied {
    const OWNERSHIP: Ownership = Ownership::Copy;

    type Slot = Box<[u8]>;
    type Item<'a> = &'a [u8];
    type View<'a> = &'a [u8];

    fn store(item_size: usize, item: &[u8]) -> Result<Box<[u8]>> {
        let Some(bytes) = item.get(..item_size) else {
            return fail(Error::ShortBuffer {
                expected: item_size,
                actual: item.len(),
            });
        };
        let mut block = Vec::new();
        if let Err(e) = block.try_reserve_exact(item_size) {
            return fail(e.into());
        }
        block.extend_from_slice(bytes);
        Ok(block.into_boxed_slice())
    }

    fn view(slot: &Box<[u8]>) -> &[u8] {
        slot
    }
}

/// Reference mode: slots hold caller-owned references verbatim.
///
/// The list never dereferences, allocates or frees the referenced memory,
/// so null and dangling references are stored as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Referenced {}

impl private::Sealed for Referenced {}

impl SlotPolicy for Referenced {
    const OWNERSHIP: Ownership = Ownership::Reference;

    type Slot = *mut c_void;
    type Item<'a> = *mut c_void;
    type View<'a> = *mut c_void;

    fn store(_item_size: usize, item: *mut c_void) -> Result<*mut c_void> {
        Ok(item)
    }

    fn view(slot: &*mut c_void) -> *mut c_void {
        *slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_memcpy() {
        assert_eq!(Ownership::from_memcpy(true), Ownership::Copy);
        assert_eq!(Ownership::from_memcpy(false), Ownership::Reference);
        assert!(Ownership::Copy.is_copy());
        assert!(!Ownership::Reference.is_copy());
    }

    #[test]
    fn test_copied_store_takes_prefix() {
        let block = Copied::store(2, &[1, 2, 3]).unwrap();
        assert_eq!(&*block, &[1, 2]);
    }

    #[test]
    fn test_copied_store_short_item() {
        let err = Copied::store(4, &[1, 2]).unwrap_err();
        assert_eq!(
            err,
            Error::ShortBuffer {
                expected: 4,
                actual: 2
            }
        );
    }

    #[test]
    fn test_referenced_store_keeps_pointer() {
        let mut value = 7u64;
        let ptr = (&mut value as *mut u64).cast::<c_void>();
        let slot = Referenced::store(8, ptr).unwrap();
        assert_eq!(Referenced::view(&slot), ptr);
        assert!(Referenced::store(8, std::ptr::null_mut()).unwrap().is_null());
    }
}
