//! A list whose ownership mode is chosen at run time.

use crate::{
    config::ListConfig,
    error::Result,
    list::{GenList, ListInfo},
    policy::{Copied, Ownership, Referenced},
};

/// Either a copy-mode or a reference-mode list.
///
/// The variant is fixed when the list is created; this is what sits behind
/// an opaque handle when the mode is only known from a flag.
#[derive(Debug)]
pub enum AnyList {
    /// Copy-mode list.
    Copy(GenList<Copied>),
    /// Reference-mode list.
    Reference(GenList<Referenced>),
}

impl AnyList {
    /// Creates an empty list of the requested ownership mode.
    pub fn new(ownership: Ownership, config: ListConfig) -> Result<Self> {
        Ok(match ownership {
            Ownership::Copy => AnyList::Copy(GenList::with_config(config)?),
            Ownership::Reference => AnyList::Reference(GenList::with_config(config)?),
        })
    }

    /// See [`GenList::info`].
    pub fn info(&self) -> ListInfo {
        match self {
            AnyList::Copy(list) => list.info(),
            AnyList::Reference(list) => list.info(),
        }
    }

    /// See [`GenList::len`].
    pub fn len(&self) -> usize {
        self.info().count
    }

    /// See [`GenList::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// See [`GenList::capacity`].
    pub fn capacity(&self) -> usize {
        match self {
            AnyList::Copy(list) => list.capacity(),
            AnyList::Reference(list) => list.capacity(),
        }
    }

    /// See [`GenList::item_size`].
    pub fn item_size(&self) -> usize {
        self.info().item_size
    }

    /// See [`GenList::ownership`].
    pub fn ownership(&self) -> Ownership {
        match self {
            AnyList::Copy(_) => Ownership::Copy,
            AnyList::Reference(_) => Ownership::Reference,
        }
    }

    /// See [`GenList::remove_at`].
    pub fn remove_at(&mut self, index: usize) -> Result<()> {
        match self {
            AnyList::Copy(list) => list.remove_at(index),
            AnyList::Reference(list) => list.remove_at(index),
        }
    }

    /// See [`GenList::clear`].
    pub fn clear(&mut self) {
        match self {
            AnyList::Copy(list) => list.clear(),
            AnyList::Reference(list) => list.clear(),
        }
    }

    /// See [`GenList::destroy`].
    pub fn destroy(self) {
        match self {
            AnyList::Copy(list) => list.destroy(),
            AnyList::Reference(list) => list.destroy(),
        }
    }
}

impl From<GenList<Copied>> for AnyList {
    fn from(list: GenList<Copied>) -> Self {
        AnyList::Copy(list)
    }
}

impl From<GenList<Referenced>> for AnyList {
    fn from(list: GenList<Referenced>) -> Self {
        AnyList::Reference(list)
    }
}
