//! Checks the trace events emitted while items are shifted.

use genlist_core::{Copied, GenList};
use parking_lot::Mutex;
use std::{io, sync::Arc};
use tracing::Level;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Capture {
    fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.0.lock())
            .lines()
            .map(str::to_owned)
            .collect()
    }
}

fn traced<F: FnOnce()>(f: F) -> Vec<String> {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    capture.lines()
}

fn shifts(lines: &[String]) -> Vec<&String> {
    lines.iter().filter(|l| l.contains("shifting items")).collect()
}

#[test]
fn test_insert_and_remove_trace_shifts() {
    let lines = traced(|| {
        let mut list = GenList::<Copied>::new(4).unwrap();
        for n in 0..5i32 {
            list.add(&n.to_ne_bytes()).unwrap();
        }
        list.add_at(1, &9i32.to_ne_bytes()).unwrap();
        list.remove_at(0).unwrap();
    });
    let shifts = shifts(&lines);
    assert_eq!(shifts.len(), 2, "{lines:?}");
    assert!(shifts[0].contains("toward the end"));
    assert!(shifts[0].contains("index=1") && shifts[0].contains("moved=4"));
    assert!(shifts[1].contains("toward the front"));
    assert!(shifts[1].contains("index=0") && shifts[1].contains("moved=5"));
}

#[test]
fn test_append_and_remove_last_do_not_shift() {
    let lines = traced(|| {
        let mut list = GenList::<Copied>::new(4).unwrap();
        list.add(&1i32.to_ne_bytes()).unwrap();
        list.add_at(1, &2i32.to_ne_bytes()).unwrap();
        list.remove_at(1).unwrap();
    });
    assert!(shifts(&lines).is_empty(), "{lines:?}");
    assert!(lines.iter().any(|l| l.contains("grew slot array")));
}
