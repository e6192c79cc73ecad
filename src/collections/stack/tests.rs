#![cfg(test)]

use super::*;
use crate::util::error::EmptyCollection;
use crate::util::panic::assert_panics;

#[test]
fn test_min_stack() {
    let mut stack = MinStack::new();
    for value in [5, 3, 7, 2] {
        stack.push(value);
    }

    assert_eq!(stack.get_min(), &2);
    assert_eq!(stack.top(), &2);

    assert_eq!(stack.pop(), 2);
    assert_eq!(stack.get_min(), &3, "Popping the minimum should restore the previous one.");
    assert_eq!(stack.top(), &7);

    assert_eq!(stack.pop(), 7);
    assert_eq!(stack.get_min(), &3, "Popping a non-minimum should leave the minimum alone.");
}

#[test]
fn test_max_stack() {
    let mut stack: MaxStack<_> = [5, 3, 7, 2].into_iter().collect();

    assert_eq!(stack.get_max(), &7);
    stack.pop();
    assert_eq!(stack.get_max(), &7);
    stack.pop();
    assert_eq!(stack.get_max(), &5);
    assert_eq!(stack.len(), 2);
}

#[test]
fn test_duplicate_extremes() {
    let mut stack: MinStack<_> = [4, 1, 1, 3].into_iter().collect();

    assert_eq!(stack.extremes, [0, 1, 2], "Equal minimums should each be recorded.");
    stack.pop();
    stack.pop();
    assert_eq!(
        stack.get_min(),
        &1,
        "Popping one of two equal minimums should keep the other as the minimum."
    );
    stack.pop();
    assert_eq!(stack.get_min(), &4);

    let mut stack: MaxStack<_> = [9, 9].into_iter().collect();
    stack.pop();
    assert_eq!(stack.get_max(), &9);
}

#[test]
fn test_values_without_clone() {
    #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
    struct Key(u8);

    let mut min: MinStack<_> = [Key(3), Key(1), Key(2)].into_iter().collect();
    let mut max = MaxStack::new();
    max.push(Key(1));
    max.push(Key(4));

    assert_eq!(min.get_min(), &Key(1));
    assert_eq!(max.get_max(), &Key(4));

    assert_eq!(min.pop(), Key(2));
    assert_eq!(min.pop(), Key(1));
    assert_eq!(min.get_min(), &Key(3));
    assert_eq!(max.pop(), Key(4));
    assert_eq!(max.get_max(), &Key(1));
}

#[test]
fn test_empty() {
    let mut stack = MinStack::<i32>::new();

    assert_eq!(stack.try_pop(), Err(EmptyCollection));
    assert_eq!(stack.try_top(), Err(EmptyCollection));
    assert_eq!(stack.try_get_min(), Err(EmptyCollection));

    stack.push(1);
    stack.pop();
    assert!(stack.is_empty());
    assert_eq!(stack.try_get_min(), Err(EmptyCollection), "The extremes should empty too.");

    let stack = MaxStack::<i32>::new();
    assert_eq!(stack.try_get_max(), Err(EmptyCollection));

    assert_panics!({
        MinStack::<u8>::new().pop();
    });
    assert_panics!({
        MaxStack::<u8>::new().get_max();
    });
}

#[test]
fn test_extremum_matches_scan() {
    let values = [8, 3, 3, 9, 1, 4, 1, 7, 2, 2, 6];
    let mut min = MinStack::new();
    let mut max = MaxStack::new();

    for (i, value) in values.into_iter().enumerate() {
        min.push(value);
        max.push(value);
        assert_eq!(min.get_min(), values[..=i].iter().min().unwrap_or(&0));
        assert_eq!(max.get_max(), values[..=i].iter().max().unwrap_or(&0));
    }

    for i in (1..values.len()).rev() {
        min.pop();
        max.pop();
        assert_eq!(min.get_min(), values[..i].iter().min().unwrap_or(&0));
        assert_eq!(max.get_max(), values[..i].iter().max().unwrap_or(&0));
    }
}
