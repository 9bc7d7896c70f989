#![cfg(test)]

use super::*;
use crate::util::alloc::DropCounter;

#[test]
fn test_push_and_pop_are_fifo() {
    let mut queue = Queue::new();
    queue.push("Matias");
    queue.push("Gaston");
    queue.push("Sebastian");

    assert_eq!(queue.pop(), Some("Matias"));
    assert_eq!(queue.pop(), Some("Gaston"));
    assert_eq!(queue.pop(), Some("Sebastian"));
    assert_eq!(queue.pop(), None);
}

#[test]
fn test_peek_does_not_consume() {
    let mut queue = Queue::new();
    queue.push(10);
    queue.push(20);

    assert_eq!(queue.peek(), Some(&10));
    assert_eq!(queue.peek(), Some(&10));
    assert_eq!(queue.len(), 2);

    assert_eq!(queue.pop(), Some(10));
    assert_eq!(queue.peek(), Some(&20));
}

#[test]
fn test_peek_mut() {
    let mut queue = Queue::new();
    queue.push(10);

    *queue.peek_mut().unwrap() += 1;

    assert_eq!(queue.pop(), Some(11));
}

#[test]
fn test_len_tracks_pushes_and_pops() {
    let mut queue = Queue::new();
    assert!(queue.is_empty());

    queue.push(1);
    queue.push(2);
    assert_eq!(queue.len(), 2);

    queue.pop();
    assert_eq!(queue.len(), 1);

    queue.pop();
    assert!(queue.is_empty());
}

#[test]
fn test_clear_drops_pending_elements() {
    let drops = DropCounter::new();
    let mut queue = Queue::new();
    for _ in 0..3 {
        queue.push(drops.token());
    }

    queue.clear();

    assert!(queue.is_empty());
    assert_eq!(drops.count(), 3);
}

#[test]
fn test_iteration_preserves_arrival_order() {
    let queue: Queue<u32> = (1..=5).collect();

    let seen: Vec<u32> = queue.iter().copied().collect();
    assert_eq!(seen, vec![1, 2, 3, 4, 5]);

    let drained: Vec<u32> = queue.into_iter().collect();
    assert_eq!(drained, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_iter_mut() {
    let mut queue: Queue<u32> = (1..=3).collect();

    for value in &mut queue {
        *value *= 2;
    }

    assert_eq!(queue.pop(), Some(2));
    assert_eq!(queue.pop(), Some(4));
    assert_eq!(queue.pop(), Some(6));
}
