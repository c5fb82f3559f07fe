// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::VecDeque;

use proptest::prelude::*;

use crate::{AllocatorBehaviour, GrowDeque, GrowStack, GrowVec, TestAllocator};

#[derive(Debug, Clone)]
enum DequeOp {
    PushBack(u16),
    PushFront(u16),
    PopBack,
    PopFront,
    Insert(usize, u16),
    Erase(usize),
}

fn deque_op() -> impl Strategy<Value = DequeOp> {
    prop_oneof![
        4 => any::<u16>().prop_map(DequeOp::PushBack),
        4 => any::<u16>().prop_map(DequeOp::PushFront),
        1 => Just(DequeOp::PopBack),
        1 => Just(DequeOp::PopFront),
        2 => (any::<usize>(), any::<u16>()).prop_map(|(i, v)| DequeOp::Insert(i, v)),
        1 => any::<usize>().prop_map(DequeOp::Erase),
    ]
}

proptest! {
    #[test]
    fn vec_push_back_matches_std(
        values in prop::collection::vec(any::<u32>(), 0..=1000)
    ) {
        let mut vec = GrowVec::new().expect("Failed to create GrowVec");
        for value in &values {
            vec.push_back(*value).expect("Failed to push_back(..)");
        }

        prop_assert_eq!(vec.as_slice(), values.as_slice());
        prop_assert!(vec.capacity() >= vec.len());
        prop_assert!(vec.capacity().is_power_of_two());
    }

    #[test]
    fn vec_insert_then_erase_round_trip(
        values in prop::collection::vec(any::<u8>(), 0..=100),
        index in any::<usize>(),
        value in any::<u8>()
    ) {
        let mut vec = GrowVec::new().expect("Failed to create GrowVec");
        vec.extend_from_slice(&values).expect("Failed to extend_from_slice(..)");
        let index = index % (values.len() + 1);

        vec.insert(index, value).expect("Failed to insert(..)");
        prop_assert_eq!(vec.erase(index), Ok(value));
        prop_assert_eq!(vec.as_slice(), values.as_slice());
    }

    #[test]
    fn deque_matches_std_model(
        ops in prop::collection::vec(deque_op(), 0..=400)
    ) {
        let mut deque = GrowDeque::new().expect("Failed to create GrowDeque");
        let mut model = VecDeque::new();

        for op in ops {
            let capacity = deque.capacity();

            match op {
                DequeOp::PushBack(v) => {
                    deque.push_back(v).expect("Failed to push_back(..)");
                    model.push_back(v);
                }
                DequeOp::PushFront(v) => {
                    deque.push_front(v).expect("Failed to push_front(..)");
                    model.push_front(v);
                }
                DequeOp::PopBack => {
                    prop_assert_eq!(deque.pop_back(), model.pop_back());
                }
                DequeOp::PopFront => {
                    prop_assert_eq!(deque.pop_front(), model.pop_front());
                }
                DequeOp::Insert(i, v) => {
                    let i = i % (model.len() + 1);
                    deque.insert(i, v).expect("Failed to insert(..)");
                    model.insert(i, v);
                }
                DequeOp::Erase(i) => {
                    if model.is_empty() {
                        prop_assert!(deque.erase(i).is_err());
                    } else {
                        let i = i % model.len();
                        prop_assert_eq!(deque.erase(i).ok(), model.remove(i));
                    }
                }
            }

            let (front, back) = deque.offsets();
            prop_assert!(front <= back && back <= deque.capacity());
            prop_assert_eq!(deque.len(), model.len());

            if deque.capacity() != capacity {
                prop_assert!(front.abs_diff(deque.capacity() - back) <= 1);
            }
        }

        prop_assert!(deque.iter().eq(model.iter()));
    }

    #[test]
    fn stack_survives_failure_at_any_growth(
        pushes in 1..=300usize,
        successful_allocations in 0..=6usize
    ) {
        let alloc = TestAllocator::new();
        let mut stack = GrowStack::with_capacity_in(1, alloc.clone()).expect("Failed to create GrowStack");
        alloc.change_behaviour(AllocatorBehaviour::FailAfter(successful_allocations));

        let mut pushed = 0usize;
        for i in 0..pushes {
            let len = stack.len();
            let capacity = stack.capacity();

            if stack.push(i).is_ok() {
                pushed += 1;
            } else {
                prop_assert_eq!(stack.len(), len);
                prop_assert_eq!(stack.capacity(), capacity);
            }
        }

        prop_assert_eq!(stack.len(), pushed);
        for i in (0..pushed).rev() {
            prop_assert_eq!(stack.pop(), Some(i));
        }

        drop(stack);
        prop_assert_eq!(alloc.live_allocations(), 0);
    }
}
