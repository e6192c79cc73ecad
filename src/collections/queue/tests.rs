#![cfg(test)]

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::util::error::EmptyCollection;
use crate::util::panic::assert_panics;

fn contents<T: Copy>(queue: &TriAccessQueue<T>) -> Vec<T> {
    queue.iter().copied().collect()
}

#[test]
fn test_push_ends_and_middle() {
    let mut queue = TriAccessQueue::new();
    queue.push_back(1);
    queue.push_back(2);
    queue.push_middle(3);
    assert_eq!(contents(&queue), [1, 3, 2]);

    queue.push_front(0);
    queue.push_middle(9);
    assert_eq!(contents(&queue), [0, 1, 9, 3, 2]);
    assert_eq!(queue.len(), 5);
}

#[test]
fn test_push_middle_empty() {
    let mut queue = TriAccessQueue::new();
    queue.push_middle('a');
    assert_eq!(contents(&queue), ['a']);
    queue.push_middle('b');
    assert_eq!(contents(&queue), ['b', 'a'], "The middle of a single element is its front.");
}

#[test]
fn test_pop_middle() {
    let mut odd: TriAccessQueue<_> = [1, 2, 3, 4, 5].into_iter().collect();
    assert_eq!(odd.pop_middle(), 3, "An odd length pops the exact centre.");
    assert_eq!(contents(&odd), [1, 2, 4, 5]);

    assert_eq!(odd.pop_middle(), 2, "An even length pops the last of the front half.");
    assert_eq!(contents(&odd), [1, 4, 5]);

    let mut pair: TriAccessQueue<_> = [1, 2].into_iter().collect();
    assert_eq!(pair.pop_middle(), 1);
    assert_eq!(pair.pop_middle(), 2);
    assert!(pair.is_empty());
}

#[test]
fn test_pop_ends() {
    let mut queue: TriAccessQueue<_> = (1..=4).collect();
    assert_eq!(queue.pop_front(), 1);
    assert_eq!(queue.pop_back(), 4);
    assert_eq!(contents(&queue), [2, 3]);
    assert_eq!(queue.try_pop_back(), Ok(3));
    assert_eq!(queue.try_pop_front(), Ok(2));
    assert!(queue.is_empty());
}

#[test]
fn test_empty() {
    let mut queue = TriAccessQueue::<u8>::new();

    assert_eq!(queue.try_pop_front(), Err(EmptyCollection));
    assert_eq!(queue.try_pop_middle(), Err(EmptyCollection));
    assert_eq!(queue.try_pop_back(), Err(EmptyCollection));

    assert_panics!({ queue.pop_front() });
    assert_panics!({ queue.pop_middle() });
    assert_panics!({ queue.pop_back() });
    assert!(queue.is_empty());
}

#[test]
fn test_display_and_eq() {
    let queue: TriAccessQueue<_> = ["a", "b"].into_iter().collect();
    assert_eq!(queue.to_string(), r#"["a", "b"]"#);
    assert_eq!(queue.clone(), queue);
    assert_eq!(TriAccessQueue::<u8>::default(), TriAccessQueue::new());
    assert_eq!(queue.into_iter().rev().collect::<Vec<_>>(), ["b", "a"]);
}

#[test]
fn test_rebuild_from_values() {
    let mut queue = TriAccessQueue::new();
    queue.push_back(1);
    queue.push_front(2);
    queue.push_middle(3);
    queue.push_back(4);
    queue.push_middle(5);
    queue.push_front(6);

    let values: Vec<_> = queue.iter().copied().collect();
    assert_eq!(values, [6, 2, 3, 5, 1, 4]);

    let mut rebuilt = TriAccessQueue::new();
    for value in values {
        rebuilt.push_back(value);
    }
    assert_eq!(rebuilt, queue);
    assert_eq!(rebuilt.len(), queue.len());
}

#[test]
fn test_against_model() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut queue = TriAccessQueue::new();
    let mut model = VecDeque::new();

    for value in 0..2_000_u32 {
        match rng.gen_range(0..6) {
            0 => {
                queue.push_front(value);
                model.push_front(value);
            },
            1 => {
                queue.push_back(value);
                model.push_back(value);
            },
            2 => {
                queue.push_middle(value);
                model.insert(model.len() / 2, value);
            },
            3 => assert_eq!(queue.try_pop_front().ok(), model.pop_front()),
            4 => assert_eq!(queue.try_pop_back().ok(), model.pop_back()),
            _ => {
                let expected = match model.len() {
                    0 => None,
                    len => model.remove((len - 1) / 2),
                };
                assert_eq!(queue.try_pop_middle().ok(), expected);
            },
        }
        assert_eq!(queue.len(), model.len());
    }
    assert!(queue.iter().eq(model.iter()));
}
