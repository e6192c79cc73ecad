#![cfg(test)]

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::error::{EmptyCollection, IndexOutOfBounds};
use crate::util::panic::assert_panics;

#[test]
fn test_push_and_growth() {
    let mut arr = GrowableArray::with_cap(3);

    for i in 0..100_usize {
        arr.push_back(i);
        assert_eq!(arr.len(), i + 1);
        assert!(arr.cap() >= arr.len(), "Capacity should always cover the length.");
    }

    assert_eq!(arr.cap(), 192, "Capacity should double from 3 until it fits 100 elements.");

    for i in 0..100 {
        assert_eq!(arr[i], i, "Every element should keep its index through each resize.");
    }
}

#[test]
fn test_zero_capacity_grows() {
    let mut arr = GrowableArray::new();
    assert_eq!(arr.cap(), 0);

    arr.push_back("first");
    assert_eq!(arr.cap(), 1, "An empty allocation should grow to the minimum capacity.");

    arr.push_back("second");
    assert_eq!(arr.cap(), 2);
    assert_eq!(arr.iter().copied().collect::<Vec<_>>(), ["first", "second"]);
}

#[test]
fn test_resize_doubles() {
    let mut arr: GrowableArray<u8> = (0..4).collect();
    assert_eq!(arr.cap(), 4);

    arr.resize();
    assert_eq!(arr.cap(), 8);
    assert_eq!(arr.len(), 4, "Resizing should never change the length.");
    assert_eq!(arr.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3]);
}

#[test]
fn test_pop_until_empty() {
    let mut arr: GrowableArray<_> = (0..10).collect();
    let cap = arr.cap();

    for i in (0..10).rev() {
        assert_eq!(arr.try_pop_back(), Ok(i));
    }

    assert!(arr.is_empty());
    assert_eq!(arr.try_pop_back(), Err(EmptyCollection));
    assert_eq!(arr.len(), 0, "A failed pop should leave the length alone.");
    assert_eq!(arr.cap(), cap, "Popping should never shrink the capacity.");

    assert_panics!({
        let mut arr = GrowableArray::<u8>::new();
        arr.pop_back();
    });
}

#[test]
fn test_get_bounds() {
    let mut arr = GrowableArray::with_cap(8);
    arr.extend([10, 20, 30]);

    assert_eq!(arr.try_get(2), Ok(&30));
    assert_eq!(
        arr.try_get(3),
        Err(IndexOutOfBounds { index: 3, len: 3 }),
        "Slots past the length should not be readable, even within the capacity."
    );

    *arr.get_mut(0) += 1;
    assert_eq!(arr[0], 11);

    assert_panics!({
        let arr: GrowableArray<u8> = GrowableArray::with_cap(4);
        arr.get(0);
    });
}

#[test]
fn test_insert_overwrites() {
    let mut arr = GrowableArray::with_cap(4);
    arr.extend(['a', 'b']);

    assert_eq!(arr.try_insert(0, 'z'), Ok(Some('a')));
    assert_eq!(arr.len(), 2, "Overwriting a slot should not change the length.");
    assert_eq!(arr[0], 'z');

    assert_eq!(arr.try_insert(3, 'q'), Ok(None), "Unoccupied slots within capacity are writable.");
    assert_eq!(arr.len(), 2);
    assert!(arr.try_get(3).is_err());

    assert_eq!(
        arr.try_insert(4, 'x'),
        Err(IndexOutOfBounds { index: 4, len: 4 }),
        "Writing past the capacity should report the capacity."
    );

    arr.push_back('c');
    arr.push_back('d');
    assert_eq!(arr[3], 'd', "A push into a written slot should replace its value.");
    assert_eq!(arr.iter().collect::<String>(), "zbcd");

    assert_panics!({
        let mut arr = GrowableArray::with_cap(1);
        arr.insert(1, 0);
    });
}

#[test]
fn test_round_trip() {
    let arr: GrowableArray<_> = "round trip".chars().collect();
    let rebuilt: GrowableArray<_> = arr.clone().into_iter().collect();

    assert_eq!(arr, rebuilt, "Rebuilding from the value sequence should produce an equal array.");
    assert_eq!(arr.iter().rev().collect::<String>(), "pirt dnuor");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::counter();
    let mut arr = GrowableArray::with_cap(2);

    for _ in 0..5 {
        arr.push_back(CountedDrop::new(&counter));
    }
    assert_eq!(counter.get(), 0, "Resizing should move elements without dropping them.");

    drop(arr.pop_back());
    assert_eq!(counter.get(), 1);

    drop(arr);
    assert_eq!(counter.get(), 5, "Every remaining element should be dropped with the array.");
}
