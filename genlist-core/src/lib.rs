//! Resizable sequence container for fixed-size items.
//!
//! A list stores items of one caller-declared byte size under one of two
//! ownership disciplines, fixed when the list is created:
//!
//! - [`Copied`]: the list allocates a private block per item, copies the
//!   caller's bytes into it and frees it on removal, clearing or drop.
//! - [`Referenced`]: the list stores the caller's references verbatim and
//!   never allocates or frees element memory.
//!
//! [`GenList`] takes the discipline as a type parameter. [`AnyList`] picks
//! it at run time, which is what the C interface in `genlist-ffi` uses.
//!
//! Every failing operation returns an [`Error`] and also records its
//! [`ErrorKind`] in a process-wide register readable through
//! [`last_error`].
//!
//! # Features
//!
//! - `logging`: enables [`logger::init_logging`], which installs a
//!   `tracing-subscriber` for the events this crate emits.

mod any;
pub mod config;
pub mod error;
pub mod last_error;
pub mod list;
#[cfg(feature = "logging")]
pub mod logger;
pub mod policy;

pub use any::AnyList;
pub use config::{DEFAULT_GROWTH, ListConfig, ListConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use last_error::{last_error, reset_last_error};
pub use list::{GenList, Iter, ListInfo};
pub use policy::{Copied, Ownership, Referenced, SlotPolicy};
