// SPDX-FileCopyrightText: © 2024 Foundation Devices, Inc. <hello@foundation.xyz>
// SPDX-License-Identifier: GPL-3.0-or-later

use foundation_bounded_deque::{
    transfer::{flush, pump},
    BoundedDeque, Transfer,
};

/// Loopback bus that replies with the byte sent in the previous exchange.
#[derive(Default)]
struct Loopback {
    shift_register: u8,
    exchanges: usize,
}

impl Transfer for Loopback {
    fn transfer(&mut self, byte: u8) -> u8 {
        self.exchanges += 1;
        core::mem::replace(&mut self.shift_register, byte)
    }
}

#[test]
fn pump_until_tx_empty() {
    let mut bus = Loopback::default();
    let mut tx: BoundedDeque<u8, 4> = BoundedDeque::new();
    let mut rx: BoundedDeque<u8, 8> = BoundedDeque::new();
    for byte in [0xa1, 0xb2, 0xc3] {
        tx.append(byte).unwrap();
    }

    assert_eq!(pump(&mut bus, &mut tx, &mut rx), 3);
    assert!(tx.is_empty());
    assert_eq!(bus.exchanges, 3);
    assert!(rx.iter().eq([0x00, 0xa1, 0xb2].iter()));
}

#[test]
fn pump_stops_on_full_rx() {
    let mut bus = Loopback::default();
    let mut tx: BoundedDeque<u8, 8> = BoundedDeque::new();
    let mut rx: BoundedDeque<u8, 2> = BoundedDeque::new();
    for byte in 1..=5 {
        tx.append(byte).unwrap();
    }

    assert_eq!(pump(&mut bus, &mut tx, &mut rx), 2);
    assert!(rx.is_full());
    assert_eq!(tx.len(), 3);
    assert_eq!(tx.front(), Some(&3));

    // Nothing moves until the receiver makes room.
    assert_eq!(pump(&mut bus, &mut tx, &mut rx), 0);
    assert_eq!(rx.pop_front(), Some(0));
    assert_eq!(pump(&mut bus, &mut tx, &mut rx), 1);
    assert!(rx.iter().eq([1, 2].iter()));
    assert_eq!(bus.exchanges, 3);
}

#[test]
fn pump_across_wrapped_buffers() {
    let mut bus = |byte: u8| byte.wrapping_add(1);
    let mut tx: BoundedDeque<u8, 3> = BoundedDeque::new();
    let mut rx: BoundedDeque<u8, 3> = BoundedDeque::new();

    // Move both ring buffers' front away from slot 0.
    for _ in 0..2 {
        tx.append(0).unwrap();
        rx.append(0).unwrap();
    }
    tx.remove_front();
    tx.remove_front();
    rx.remove_front();
    rx.remove_front();

    for byte in [10, 20, 30] {
        tx.append(byte).unwrap();
    }
    assert_eq!(pump(&mut bus, &mut tx, &mut rx), 3);
    assert!(rx.iter().eq([11, 21, 31].iter()));
}

#[test]
fn flush_discards_replies() {
    let mut bus = Loopback::default();
    let mut tx: BoundedDeque<u8, 4> = BoundedDeque::new();
    for byte in [1, 2, 3, 4] {
        tx.append(byte).unwrap();
    }

    assert_eq!(flush(&mut bus, &mut tx), 4);
    assert!(tx.is_empty());
    assert_eq!(bus.shift_register, 4);
    assert_eq!(flush(&mut bus, &mut tx), 0);
}
