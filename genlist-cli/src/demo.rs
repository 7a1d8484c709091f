//! The demonstration scenarios.

use crate::DynError;
use genlist_core::{Copied, GenList, Referenced};
use std::{
    ffi::{CStr, CString, c_void},
    io::{BufRead, Write},
    ops::ControlFlow,
};

/// Record size used by `strings` when none is given.
pub(crate) const DEFAULT_RECORD_SIZE: usize = 99;

/// Copy mode: every line becomes a zero-padded `item_size`-byte record.
///
/// Lines longer than `item_size - 1` bytes are truncated so each record keeps
/// a terminating NUL.
pub(crate) fn strings<R: BufRead, W: Write>(
    item_size: usize,
    input: R,
    out: &mut W,
) -> Result<(), DynError> {
    let mut list = GenList::<Copied>::new(item_size)?;
    let mut record = vec![0u8; item_size];
    for line in input.lines() {
        let line = line?;
        let len = line.len().min(item_size - 1);
        record.fill(0);
        record[..len].copy_from_slice(&line.as_bytes()[..len]);
        list.add(&record)?;
    }

    writeln!(out, "Item count = {}", list.len())?;
    let mut item = vec![0u8; item_size];
    for i in 0..list.len() {
        list.copy_to(i, &mut item)?;
        let text = CStr::from_bytes_until_nul(&item)
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        writeln!(out, "[{i:2}] {text}")?;
    }
    list.destroy();
    out.flush()?;
    Ok(())
}

/// Reference mode: the strings stay owned here, the list only keeps their
/// addresses.
pub(crate) fn pointers<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<(), DynError> {
    let owned = input
        .lines()
        .map(|line| Ok(CString::new(line?)?))
        .collect::<Result<Vec<_>, DynError>>()?;

    let mut list = GenList::<Referenced>::new(size_of::<*mut c_void>())?;
    for s in &owned {
        list.add(s.as_ptr().cast_mut().cast())?;
    }

    writeln!(out, "Item count = {}", list.len())?;
    let mut result = Ok(());
    list.for_each(|i, ptr| {
        // SAFETY: every stored pointer comes from a CString in `owned`,
        // which outlives the list.
        let text = unsafe { CStr::from_ptr(ptr.cast_const().cast()) }.to_string_lossy();
        match writeln!(out, "[{i:2}] {text}") {
            Ok(()) => ControlFlow::Continue(()),
            Err(e) => {
                result = Err(e);
                ControlFlow::Break(())
            }
        }
    });
    list.destroy();
    drop(owned);
    result?;
    out.flush()?;
    Ok(())
}

/// Adds `count` items of `size` bytes each.
pub(crate) fn bulk<W: Write>(
    count: usize,
    size: usize,
    reference: bool,
    out: &mut W,
) -> Result<(), DynError> {
    write!(out, "Adding {count} items into GenList, each {size} bytes... ")?;
    let (len, capacity) = if reference {
        let mut buffers: Vec<Box<[u8]>> = (0..count)
            .map(|_| vec![0u8; size].into_boxed_slice())
            .collect();
        let mut list = GenList::<Referenced>::new(size_of::<*mut c_void>())?;
        for buf in &mut buffers {
            list.add(buf.as_mut_ptr().cast())?;
        }
        let stats = (list.len(), list.capacity());
        list.destroy();
        stats
    } else {
        let buf = vec![0u8; size];
        let mut list = GenList::<Copied>::new(size)?;
        for _ in 0..count {
            list.add(&buf)?;
        }
        let stats = (list.len(), list.capacity());
        list.destroy();
        stats
    };
    writeln!(out, "OK!")?;
    writeln!(out, "Item count = {len}, capacity = {capacity}")?;
    tracing::info!(len, capacity, reference, "bulk run finished");
    out.flush()?;
    Ok(())
}

/// Positional inserts at the end, the front and the middle.
pub(crate) fn insert<W: Write>(out: &mut W) -> Result<(), DynError> {
    let mut list = GenList::<Copied>::new(size_of::<i32>())?;
    for n in [100i32, 101, 102] {
        list.add(&n.to_ne_bytes())?;
    }
    writeln!(out, "Before AddAt:")?;
    print_ints(&list, out)?;

    for (index, n) in [(3, 203i32), (0, 200), (2, 202)] {
        list.add_at(index, &n.to_ne_bytes())?;
    }
    writeln!(out, "After AddAt:")?;
    print_ints(&list, out)?;
    list.destroy();
    out.flush()?;
    Ok(())
}

fn print_ints<W: Write>(list: &GenList<Copied>, out: &mut W) -> Result<(), DynError> {
    let mut bytes = [0u8; 4];
    for i in 0..list.len() {
        list.copy_to(i, &mut bytes)?;
        writeln!(out, "[{i:2}] {}", i32::from_ne_bytes(bytes))?;
    }
    Ok(())
}
