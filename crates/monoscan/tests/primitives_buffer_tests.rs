#![cfg(feature = "dev")]
//! Tests for the write-once result buffer.

use monoscan::internals::primitives::buffer::ResultBuffer;

/// Test slots can be filled in any order.
#[test]
fn test_out_of_order_writes() {
    let mut buf = ResultBuffer::new(3, 0usize);
    assert_eq!(buf.remaining(), 3);

    buf.write(2, 7);
    buf.write(0, 5);
    assert_eq!(buf.remaining(), 1);

    buf.write(1, 6);
    assert_eq!(buf.finish(), vec![5, 6, 7]);
}

/// Test an empty buffer finishes immediately.
#[test]
fn test_empty() {
    let buf = ResultBuffer::new(0, 0u8);
    assert!(buf.finish().is_empty());
}

/// Test writing a slot twice panics.
#[test]
#[should_panic(expected = "result slot 1 written more than once")]
fn test_double_write_panics() {
    let mut buf = ResultBuffer::new(2, 0i32);
    buf.write(1, 1);
    buf.write(1, 2);
}

/// Test finishing with unwritten slots panics.
#[test]
#[should_panic(expected = "2 of 3 result slots were never written")]
fn test_unwritten_slots_panic() {
    let mut buf = ResultBuffer::new(3, 0i32);
    buf.write(0, 1);
    let _ = buf.finish();
}

/// Test out-of-range writes panic.
#[test]
#[should_panic]
fn test_out_of_range_panics() {
    let mut buf = ResultBuffer::new(1, 0i32);
    buf.write(1, 1);
}
