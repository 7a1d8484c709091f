//! # GenList FFI
//!
//! C-compatible bindings for the `genlist-core` sequence container.
//!
//! ## Conventions
//!
//! 1.  **Opaque handles**: a list is a `GenListHandle *` created by
//!     [`genlist_create`] and released by [`genlist_destroy`]. Using a handle
//!     after destroying it is undefined behavior.
//! 2.  **Boolean results**: every operation returns `true` on success. On
//!     failure it returns `false` and records the error kind in a
//!     process-wide register read by [`genlist_last_error`]. The register is
//!     shared by every list and every thread; the last failure wins.
//! 3.  **Ownership modes**: with `do_memcpy == true` the list copies
//!     `item_size` bytes from each added item into memory it owns. With
//!     `do_memcpy == false` it stores the item pointer itself and never
//!     frees it.
//!
//! The matching C declarations are in `include/genlist.h`.

use genlist_core::{AnyList, Error, ListConfig, Ownership, Result, last_error};
use std::{
    ffi::{c_int, c_void},
    ops::ControlFlow,
};

/// No error has been recorded.
pub const GENLIST_ERR_NONE: c_int = 0;
/// A required pointer was null, or `item_size` was zero.
pub const GENLIST_ERR_UNEXPECTED_NULL: c_int = 1;
/// An index was outside the valid range.
pub const GENLIST_ERR_OUT_OF_RANGE: c_int = 2;
/// A buffer was smaller than the item size.
pub const GENLIST_ERR_SHORT_BUFFER: c_int = 3;
/// Memory allocation failed.
pub const GENLIST_ERR_ALLOC: c_int = 4;

/// Opaque list handle.
pub struct GenListHandle {
    list: AnyList,
}

/// Per-item callback for [`genlist_for_each`]. Return `true` to stop.
///
/// In copy mode `item` is the list's own `item_size`-byte block and may be
/// written through.
pub type GenListForEachFn =
    Option<unsafe extern "C" fn(index: usize, item: *mut c_void, userdata: *mut c_void) -> bool>;

fn null_argument(what: &'static str) -> bool {
    tracing::warn!("called genlist function with null `{what}`");
    last_error::record(Error::NullArgument(what));
    false
}

fn report(result: Result<()>) -> bool {
    // Failures were recorded by the list itself.
    result.is_ok()
}

/// Borrows the list behind `handle`, or `None` if it is null.
///
/// # Safety
///
/// `handle` must be null or a live handle from [`genlist_create`].
unsafe fn list_mut<'a>(handle: *mut GenListHandle) -> Option<&'a mut AnyList> {
    unsafe { handle.as_mut() }.map(|h| &mut h.list)
}

/// Creates a list and writes its handle to `*list`.
///
/// Fails with `GENLIST_ERR_UNEXPECTED_NULL` if `list` is null or
/// `item_size` is zero; `*list` is left untouched in that case.
///
/// # Safety
///
/// `list` must be null or valid for a pointer-sized write.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn genlist_create(
    list: *mut *mut GenListHandle,
    item_size: usize,
    do_memcpy: bool,
) -> bool {
    if list.is_null() {
        return null_argument("list");
    }
    let created = ListConfig::with_item_size(item_size)
        .and_then(|config| AnyList::new(Ownership::from_memcpy(do_memcpy), config));
    match created {
        Ok(inner) => {
            let handle = Box::into_raw(Box::new(GenListHandle { list: inner }));
            unsafe { list.write(handle) };
            true
        }
        Err(_) => false,
    }
}

/// Destroys a list.
///
/// In copy mode every item block is freed. In reference mode the caller's
/// memory is left alone.
///
/// # Safety
///
/// `list` must be null or a live handle from [`genlist_create`]. It must not
/// be used again afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn genlist_destroy(list: *mut GenListHandle) -> bool {
    if list.is_null() {
        return null_argument("list");
    }
    let handle = unsafe { Box::from_raw(list) };
    handle.list.destroy();
    true
}

/// Reads list metadata. Any of the output pointers may be null.
///
/// # Safety
///
/// `list` must be null or a live handle. Non-null output pointers must be
/// valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn genlist_get_info(
    list: *mut GenListHandle,
    count: *mut usize,
    item_size: *mut usize,
    do_memcpy: *mut bool,
) -> bool {
    let Some(list) = (unsafe { list_mut(list) }) else {
        return null_argument("list");
    };
    let info = list.info();
    unsafe {
        if let Some(count) = count.as_mut() {
            *count = info.count;
        }
        if let Some(item_size) = item_size.as_mut() {
            *item_size = info.item_size;
        }
        if let Some(do_memcpy) = do_memcpy.as_mut() {
            *do_memcpy = info.ownership.is_copy();
        }
    }
    true
}

/// Appends an item.
///
/// In copy mode `item` points at `item_size` readable bytes. In reference
/// mode `item` itself is stored.
///
/// # Safety
///
/// `list` must be null or a live handle. In copy mode a non-null `item`
/// must be valid for reads of `item_size` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn genlist_add(list: *mut GenListHandle, item: *mut c_void) -> bool {
    let Some(list) = (unsafe { list_mut(list) }) else {
        return null_argument("list");
    };
    let index = list.len();
    unsafe { insert(list, index, item) }
}

/// Inserts an item at `index`; `index == count` appends.
///
/// Fails with `GENLIST_ERR_OUT_OF_RANGE` if `index > count`.
///
/// # Safety
///
/// Same as [`genlist_add`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn genlist_add_at(
    list: *mut GenListHandle,
    index: usize,
    item: *mut c_void,
) -> bool {
    let Some(list) = (unsafe { list_mut(list) }) else {
        return null_argument("list");
    };
    unsafe { insert(list, index, item) }
}

/// # Safety
///
/// In copy mode a non-null `item` must be valid for reads of the list's
/// item size.
unsafe fn insert(list: &mut AnyList, index: usize, item: *mut c_void) -> bool {
    match list {
        AnyList::Copy(list) => {
            if item.is_null() {
                return null_argument("item");
            }
            let bytes =
                unsafe { std::slice::from_raw_parts(item.cast::<u8>().cast_const(), list.item_size()) };
            report(list.add_at(index, bytes))
        }
        AnyList::Reference(list) => report(list.add_at(index, item)),
    }
}

/// Reads the item at `index`.
///
/// In copy mode the stored bytes are copied into the `item_size`-byte buffer
/// at `item`. In reference mode `item` is a `void **` that receives the
/// stored pointer.
///
/// # Safety
///
/// `list` must be null or a live handle. A non-null `item` must be valid for
/// writes of `item_size` bytes (copy mode) or of one pointer (reference
/// mode).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn genlist_get_at(
    list: *mut GenListHandle,
    index: usize,
    item: *mut c_void,
) -> bool {
    let Some(list) = (unsafe { list_mut(list) }) else {
        return null_argument("list");
    };
    if item.is_null() {
        return null_argument("item");
    }
    match list {
        AnyList::Copy(list) => {
            let dest = unsafe { std::slice::from_raw_parts_mut(item.cast::<u8>(), list.item_size()) };
            report(list.copy_to(index, dest))
        }
        AnyList::Reference(list) => match list.get(index) {
            Ok(stored) => {
                unsafe { item.cast::<*mut c_void>().write(stored) };
                true
            }
            Err(_) => false,
        },
    }
}

/// Removes every item, keeping the allocated capacity.
///
/// # Safety
///
/// `list` must be null or a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn genlist_clear(list: *mut GenListHandle) -> bool {
    let Some(list) = (unsafe { list_mut(list) }) else {
        return null_argument("list");
    };
    list.clear();
    true
}

/// Removes the item at `index`, closing the gap.
///
/// Fails with `GENLIST_ERR_OUT_OF_RANGE` if `index >= count`, including on
/// an empty list.
///
/// # Safety
///
/// `list` must be null or a live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn genlist_remove_at(list: *mut GenListHandle, index: usize) -> bool {
    let Some(list) = (unsafe { list_mut(list) }) else {
        return null_argument("list");
    };
    report(list.remove_at(index))
}

/// Calls `callback(index, item, userdata)` for each item in order until it
/// returns `true`.
///
/// In copy mode `item` points at the list's own block, which the callback
/// may rewrite in place; in reference mode it is the stored pointer.
/// Stopping early still counts as success. The callback must not add,
/// remove or clear items of the same list.
///
/// # Safety
///
/// `list` must be null or a live handle, and `callback` must be safe to call
/// with the items of this list and `userdata`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn genlist_for_each(
    list: *mut GenListHandle,
    callback: GenListForEachFn,
    userdata: *mut c_void,
) -> bool {
    let Some(list) = (unsafe { list_mut(list) }) else {
        return null_argument("list");
    };
    let Some(callback) = callback else {
        return null_argument("callback");
    };
    let step = |stop: bool| {
        if stop {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    };
    match list {
        AnyList::Copy(list) => list.for_each_mut(|index, block| {
            step(unsafe { callback(index, block.as_mut_ptr().cast(), userdata) })
        }),
        AnyList::Reference(list) => {
            list.for_each(|index, item| step(unsafe { callback(index, item, userdata) }))
        }
    }
    true
}

/// Returns the kind of the most recent failure across the whole process.
///
/// `0` means nothing has failed yet. The value is not reset by successful
/// calls.
#[unsafe(no_mangle)]
pub extern "C" fn genlist_last_error() -> c_int {
    last_error::last_error().code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use genlist_core::ErrorKind;

    #[test]
    fn test_error_codes_match_core() {
        assert_eq!(GENLIST_ERR_NONE, ErrorKind::None.code());
        assert_eq!(GENLIST_ERR_UNEXPECTED_NULL, ErrorKind::NullArgument.code());
        assert_eq!(GENLIST_ERR_OUT_OF_RANGE, ErrorKind::OutOfRange.code());
        assert_eq!(GENLIST_ERR_SHORT_BUFFER, ErrorKind::ShortBuffer.code());
        assert_eq!(GENLIST_ERR_ALLOC, ErrorKind::Alloc.code());
    }
}
