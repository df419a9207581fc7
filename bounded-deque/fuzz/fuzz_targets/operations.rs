// SPDX-FileCopyrightText: © 2024 Foundation Devices, Inc. <hello@foundation.xyz>
// SPDX-License-Identifier: GPL-3.0-or-later

#![no_main]

use arbitrary::Arbitrary;
use foundation_bounded_deque::BoundedDeque;
use libfuzzer_sys::fuzz_target;

const N: usize = 7;

#[derive(Debug, Arbitrary)]
pub enum Operation {
    Append(u8),
    Prepend(u8),
    AppendOverwrite(u8),
    PrependOverwrite(u8),
    PopFront,
    PopBack,
    Clear,
    Get(usize),
    Rget(usize),
}

fuzz_target!(|operations: Vec<Operation>| {
    let mut deque: BoundedDeque<u8, N> = BoundedDeque::new();
    let mut model: heapless::Deque<u8, N> = heapless::Deque::new();

    for operation in operations {
        match operation {
            Operation::Append(v) => assert_eq!(deque.append(v), model.push_back(v)),
            Operation::Prepend(v) => assert_eq!(deque.prepend(v), model.push_front(v)),
            Operation::AppendOverwrite(v) => {
                let expected = model.is_full().then(|| model.pop_front()).flatten();
                model.push_back(v).unwrap();
                assert_eq!(deque.append_overwrite(v), expected);
            }
            Operation::PrependOverwrite(v) => {
                let expected = model.is_full().then(|| model.pop_back()).flatten();
                model.push_front(v).unwrap();
                assert_eq!(deque.prepend_overwrite(v), expected);
            }
            Operation::PopFront => assert_eq!(deque.pop_front(), model.pop_front()),
            Operation::PopBack => assert_eq!(deque.pop_back(), model.pop_back()),
            Operation::Clear => {
                deque.clear();
                model.clear();
            }
            Operation::Get(i) => assert_eq!(deque.get(i), model.iter().nth(i)),
            Operation::Rget(i) => assert_eq!(deque.rget(i), model.iter().rev().nth(i)),
        }

        assert_eq!(deque.len(), model.len());
        assert!(deque.iter().eq(model.iter()));
    }
});
