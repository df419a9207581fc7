// SPDX-FileCopyrightText: © 2024 Foundation Devices, Inc. <hello@foundation.xyz>
// SPDX-License-Identifier: GPL-3.0-or-later

//! [`embedded_io`] byte-stream traits for `BoundedDeque<u8, N>`.
//!
//! Writing appends at the back and reading consumes from the front, so the
//! deque behaves as a FIFO between a producer and a consumer of bytes. None
//! of the operations block: a full deque refuses writes with
//! [`Error::Full`] and an empty one refuses reads with [`Error::Empty`].

use embedded_io::{ErrorType, Read, ReadReady, Write, WriteReady};

use crate::{BoundedDeque, Error, Result};

impl<const N: usize> ErrorType for BoundedDeque<u8, N> {
    type Error = Error;
}

impl<const N: usize> Write for BoundedDeque<u8, N> {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        if self.is_full() {
            return Err(Error::Full);
        }

        let mut written = 0;
        for &byte in buf {
            if self.append(byte).is_err() {
                break;
            }
            written += 1;
        }

        Ok(written)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<const N: usize> WriteReady for BoundedDeque<u8, N> {
    fn write_ready(&mut self) -> Result<bool> {
        Ok(!self.is_full())
    }
}

impl<const N: usize> Read for BoundedDeque<u8, N> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        // Ok(0) would mean end of stream.
        if self.is_empty() {
            return Err(Error::Empty);
        }

        let mut read = 0;
        for slot in buf.iter_mut() {
            match self.pop_front() {
                Some(byte) => *slot = byte,
                None => break,
            }
            read += 1;
        }

        Ok(read)
    }
}

impl<const N: usize> ReadReady for BoundedDeque<u8, N> {
    fn read_ready(&mut self) -> Result<bool> {
        Ok(!self.is_empty())
    }
}
