//! Construction-time configuration for lists.
//!
//! This module provides the [`ListConfig`] struct and [`ListConfigBuilder`].
//!
//! # Example
//!
//! ```
//! use genlist_core::ListConfig;
//!
//! let config = ListConfig::builder()
//!     .item_size(16)
//!     .initial_capacity(64)
//!     .growth(8)
//!     .build()?;
//! assert_eq!(config.item_size(), 16);
//! # Ok::<(), genlist_core::Error>(())
//! ```

use crate::{
    error::{Error, Result},
    last_error::fail,
};

/// Number of slots allocated at creation and added on every growth.
pub const DEFAULT_GROWTH: usize = 32;

/// Validated list configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListConfig {
    item_size: usize,
    initial_capacity: usize,
    growth: usize,
}

impl ListConfig {
    /// Creates a new [`ListConfigBuilder`].
    pub fn builder() -> ListConfigBuilder {
        ListConfigBuilder::default()
    }

    /// Shorthand for a configuration with default capacity and growth.
    pub fn with_item_size(item_size: usize) -> Result<Self> {
        Self::builder().item_size(item_size).build()
    }

    /// Byte size of one item.
    pub fn item_size(&self) -> usize {
        self.item_size
    }

    /// Number of slots allocated when the list is created.
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Number of slots added when a write finds the list full.
    pub fn growth(&self) -> usize {
        self.growth
    }
}

/// Builder for [`ListConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ListConfigBuilder {
    item_size: usize,
    initial_capacity: Option<usize>,
    growth: Option<usize>,
}

impl ListConfigBuilder {
    /// Sets the byte size of one item. Required, must be non-zero.
    pub fn item_size(mut self, item_size: usize) -> Self {
        self.item_size = item_size;
        self
    }

    /// Sets the number of slots allocated up front (default 32).
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = Some(capacity);
        self
    }

    /// Sets the growth increment (default 32). Zero falls back to the default.
    pub fn growth(mut self, growth: usize) -> Self {
        self.growth = Some(growth);
        self
    }

    /// Validates and builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullArgument`] if no item size, or a zero item size,
    /// was given.
    pub fn build(self) -> Result<ListConfig> {
        if self.item_size == 0 {
            return fail(Error::NullArgument("item_size"));
        }
        let growth = match self.growth {
            Some(0) | None => DEFAULT_GROWTH,
            Some(n) => n,
        };
        Ok(ListConfig {
            item_size: self.item_size,
            initial_capacity: self.initial_capacity.unwrap_or(DEFAULT_GROWTH),
            growth,
        })
    }
}
