//! Counts how many owned blocks each operation frees.
//!
//! The global allocator counts deallocations of exactly `BLOCK` bytes. The
//! counter is process-wide, so everything lives in this single test.

use genlist_core::{Copied, GenList, Referenced};
use std::{
    alloc::{GlobalAlloc, Layout, System},
    ffi::c_void,
    sync::atomic::{AtomicUsize, Ordering},
};

/// An odd size that nothing else in the test allocates.
const BLOCK: usize = 1021;

static FREED: AtomicUsize = AtomicUsize::new(0);

struct CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        if layout.size() == BLOCK {
            FREED.fetch_add(1, Ordering::SeqCst);
        }
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

fn freed_during<F: FnOnce()>(f: F) -> usize {
    let before = FREED.load(Ordering::SeqCst);
    f();
    FREED.load(Ordering::SeqCst) - before
}

#[test]
fn test_owned_blocks_released_exactly_once() {
    let item = [7u8; BLOCK];

    // Copy mode: clear frees every block, and a second clear frees nothing.
    let mut list = GenList::<Copied>::new(BLOCK).unwrap();
    for _ in 0..10 {
        list.add(&item).unwrap();
    }
    assert_eq!(freed_during(|| list.clear()), 10);
    assert_eq!(freed_during(|| list.clear()), 0);

    // Remove frees only the removed block; destroy frees the rest.
    for _ in 0..8 {
        list.add(&item).unwrap();
    }
    assert_eq!(freed_during(|| list.remove_at(3).unwrap()), 1);
    assert_eq!(freed_during(move || list.destroy()), 7);

    // Dropping without destroy releases the same blocks.
    let mut dropped = GenList::<Copied>::new(BLOCK).unwrap();
    for _ in 0..5 {
        dropped.add(&item).unwrap();
    }
    assert_eq!(freed_during(move || drop(dropped)), 5);

    // Reference mode never frees caller memory.
    let mut owned: Vec<Box<[u8]>> = (0..6)
        .map(|_| vec![1u8; BLOCK].into_boxed_slice())
        .collect();
    let mut list = GenList::<Referenced>::new(size_of::<*mut c_void>()).unwrap();
    for buf in &mut owned {
        list.add(buf.as_mut_ptr().cast()).unwrap();
    }
    assert_eq!(
        freed_during(move || {
            list.remove_at(0).unwrap();
            list.clear();
            list.destroy();
        }),
        0
    );
    assert_eq!(freed_during(move || drop(owned)), 6);
}
