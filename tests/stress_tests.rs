//! Stress tests with large randomized workloads
//!
//! Every test seeds its own `ChaCha8Rng`, so failures reproduce exactly.

use comparator_heap::compare::by_key;
use comparator_heap::{HeapError, KeyedHeap, MinHeap, Natural, Reversed};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Push a random value, pop the minimum, push the popped value back
///
/// After every round the popped value must equal the smallest value pushed
/// so far, and the final drain must be the fully sorted multiset.
#[test]
fn test_push_pop_repush() {
    const N: usize = 1000;
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
    let mut heap = MinHeap::new(Vec::<i64>::new(), |a: &i64, b: &i64| a.cmp(b));
    let mut pushed: Vec<i64> = Vec::with_capacity(N);

    for _ in 0..N {
        let value: i64 = rng.gen();
        heap.push(value);
        pushed.push(value);
        pushed.sort_unstable();

        let popped = heap.pop().unwrap();
        assert_eq!(popped, pushed[0]);
        heap.push(popped);
    }

    assert_eq!(heap.len(), N);
    for expected in pushed {
        assert_eq!(heap.pop(), Ok(expected));
    }
    assert_eq!(heap.pop(), Err(HeapError::EmptyHeap));
}

/// The same round trip starting from 1000 random values heapified at once
#[test]
fn test_push_pop_repush_from_random_vec() {
    const N: usize = 1000;
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let initial: Vec<i32> = (0..N).map(|_| rng.gen()).collect();
    let mut all = initial.clone();
    let mut heap = MinHeap::new(initial, Natural);

    for _ in 0..N {
        let value: i32 = rng.gen();
        heap.push(value);
        all.push(value);

        let popped = heap.pop().unwrap();
        assert_eq!(Some(&popped), all.iter().min());
        heap.push(popped);
    }

    all.sort_unstable();
    assert_eq!(heap.into_sorted_vec(), all);
}

/// Test massive numbers of pushes and pops with heavy duplication
#[test]
fn test_massive_operations() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut heap = MinHeap::with_capacity_and_comparator(100_000, Natural);
    let mut reference = Vec::with_capacity(100_000);

    for _ in 0..100_000 {
        let value: u8 = rng.gen_range(0..16);
        heap.push(value);
        reference.push(value);
    }
    assert_eq!(heap.len(), 100_000);

    reference.sort_unstable();
    for expected in reference {
        assert_eq!(heap.pop(), Ok(expected));
    }
    assert!(heap.is_empty());
}

/// Randomly interleave pushes and pops and compare against a sorted model
#[test]
fn test_random_interleaving_max_first() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut heap = MinHeap::with_comparator(Reversed(Natural));
    let mut model: Vec<i32> = Vec::new();

    for _ in 0..20_000 {
        if rng.gen_bool(0.6) {
            let value = rng.gen_range(-1000..1000);
            heap.push(value);
            model.push(value);
        } else {
            model.sort_unstable();
            let expected = model.pop().ok_or(HeapError::EmptyHeap);
            assert_eq!(heap.pop(), expected);
        }
        assert_eq!(heap.len(), model.len());
    }
}

/// Records with many equal keys come out in key order
#[test]
fn test_records_by_key() {
    #[derive(Debug, Clone)]
    struct Order {
        id: u32,
        price: u16,
    }

    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let orders: Vec<Order> = (0..5000)
        .map(|id| Order {
            id,
            price: rng.gen_range(0..100),
        })
        .collect();

    let heap = MinHeap::new(orders.clone(), by_key(|o: &Order| o.price));
    let drained = heap.into_sorted_vec();

    assert_eq!(drained.len(), orders.len());
    assert!(drained.windows(2).all(|w| w[0].price <= w[1].price));

    let mut ids: Vec<u32> = drained.iter().map(|o| o.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..5000).collect::<Vec<_>>());
}

/// KeyedHeap as a task queue under load
#[test]
fn test_keyed_heap_load() {
    let mut rng = ChaCha8Rng::seed_from_u64(31337);
    let mut queue = KeyedHeap::natural();

    for task in 0..10_000u32 {
        queue.insert(rng.gen_range(0u32..500), task);
    }

    let mut last = 0;
    let mut count = 0;
    while let Ok((priority, _task)) = queue.pop_entry() {
        assert!(priority >= last);
        last = priority;
        count += 1;
    }
    assert_eq!(count, 10_000);
}
