// SPDX-FileCopyrightText: © 2024 Foundation Devices, Inc. <hello@foundation.xyz>
// SPDX-License-Identifier: GPL-3.0-or-later

//! Buffered full-duplex byte transfers.
//!
//! A synchronous serial peripheral (for example a USART in SPI master mode)
//! shifts one byte out while shifting one byte in. The helpers here feed such
//! a peripheral from a transmit [`BoundedDeque`] and collect the replies in a
//! receive one, touching the deques only through their public front/back
//! operations.

use crate::BoundedDeque;

/// A blocking full-duplex byte exchange.
pub trait Transfer {
    /// Send `byte` and return the byte received in the same exchange.
    fn transfer(&mut self, byte: u8) -> u8;
}

impl<F> Transfer for F
where
    F: FnMut(u8) -> u8,
{
    fn transfer(&mut self, byte: u8) -> u8 {
        self(byte)
    }
}

/// Exchange bytes from `tx` until it is empty or `rx` is full.
///
/// Each byte sent is removed from the front of `tx` and the byte received
/// for it is appended to the back of `rx`. Returns the number of bytes
/// exchanged.
pub fn pump<B, const TX: usize, const RX: usize>(
    bus: &mut B,
    tx: &mut BoundedDeque<u8, TX>,
    rx: &mut BoundedDeque<u8, RX>,
) -> usize
where
    B: Transfer + ?Sized,
{
    let mut exchanged = 0;

    while let Some(&byte) = tx.front() {
        if rx.is_full() {
            debug!("pump: receive buffer full, {} byte(s) left to send", tx.len());
            break;
        }

        tx.remove_front();
        let received = bus.transfer(byte);
        trace!("pump: sent {}, received {}", byte, received);

        if let Err(received) = rx.append(received) {
            // `rx` was checked above.
            panic!("pump: lost received byte {}", received);
        }
        exchanged += 1;
    }

    exchanged
}

/// Send every byte of `tx`, discarding what is received.
///
/// Returns the number of bytes sent.
pub fn flush<B, const TX: usize>(bus: &mut B, tx: &mut BoundedDeque<u8, TX>) -> usize
where
    B: Transfer + ?Sized,
{
    let mut sent = 0;

    while let Some(byte) = tx.pop_front() {
        let _ = bus.transfer(byte);
        sent += 1;
    }

    trace!("flush: sent {} byte(s)", sent);
    sent
}
