//! FIFO queue tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use vesselmail_core::queue::EMPTY_QUEUE_SUMMARY;
use vesselmail_core::{PackagedMessage, Queue};


const SECRET: &[u8] = b"queue-test-secret";

#[test]
fn empty_on_creation() {
    let q: Queue<PackagedMessage> = Queue::new();
    assert!(q.is_empty());
    assert_eq!(q.size(), 0);
    assert_eq!(q.summary(), EMPTY_QUEUE_SUMMARY);
    assert!(q.dequeue().is_none());
}

#[test]
fn fifo_order_and_size() {
    let msgs = vector_loader::thread(SECRET);
    let q = Queue::new();

    for (i, m) in msgs.iter().enumerate() {
        q.enqueue(m.clone());
        assert!(!q.is_empty());
        assert_eq!(q.size(), i + 1);
    }

    assert_eq!(q.dequeue().as_ref(), Some(&msgs[0]));
    assert_eq!(q.size(), 2);
    assert_eq!(q.dequeue().as_ref(), Some(&msgs[1]));
    assert_eq!(q.size(), 1);
    assert!(!q.is_empty());
    assert_eq!(q.dequeue().as_ref(), Some(&msgs[2]));

    assert!(q.dequeue().is_none());
    assert!(q.is_empty());
    assert_eq!(q.size(), 0);
}

#[test]
fn duplicates_are_kept() {
    let msgs = vector_loader::thread(SECRET);
    let q = Queue::new();
    q.enqueue(msgs[0].clone());
    q.enqueue(msgs[0].clone());

    assert_eq!(q.size(), 2);
    assert_eq!(q.dequeue(), q.dequeue());
}

#[test]
fn summary_lists_subjects_in_order() {
    let q = Queue::new();
    for m in vector_loader::thread(SECRET) {
        q.enqueue(m);
    }

    assert_eq!(
        q.summary(),
        "Number of messages in queue: 3\nSubjects: Re: Tuesday || Re: Re: Tuesday || Re: Re: Re: Tuesday\n"
    );
    assert_eq!(q.subjects(), ["Re: Tuesday", "Re: Re: Tuesday", "Re: Re: Re: Tuesday"]);

    q.dequeue();
    q.dequeue();
    q.dequeue();
    assert_eq!(q.summary(), EMPTY_QUEUE_SUMMARY);
}

#[test]
fn concurrent_producers_and_consumer_lose_nothing() {
    const PRODUCERS: usize = 4;
    const PER_PRODUCER: usize = 500;

    let q = Arc::new(Queue::new());

    let producers: Vec<_> = (0..PRODUCERS)
        .map(|p| {
            let q = Arc::clone(&q);
            thread::spawn(move || {
                for i in 0..PER_PRODUCER {
                    q.enqueue((p, i));
                }
            })
        })
        .collect();

    let consumer = {
        let q = Arc::clone(&q);
        thread::spawn(move || {
            let mut seen = Vec::new();
            while seen.len() < PRODUCERS * PER_PRODUCER {
                match q.dequeue() {
                    Some(item) => seen.push(item),
                    None => thread::yield_now(),
                }
            }
            seen
        })
    };

    for p in producers {
        p.join().unwrap();
    }
    let seen = consumer.join().unwrap();

    assert!(q.is_empty());
    let unique: HashSet<_> = seen.iter().copied().collect();
    assert_eq!(unique.len(), PRODUCERS * PER_PRODUCER);

    // Each producer's items come out in the order it put them in.
    for p in 0..PRODUCERS {
        let order: Vec<usize> = seen.iter().filter(|(q, _)| *q == p).map(|(_, i)| *i).collect();
        assert_eq!(order, (0..PER_PRODUCER).collect::<Vec<_>>());
    }
}
