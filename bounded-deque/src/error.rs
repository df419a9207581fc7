// SPDX-FileCopyrightText: © 2024 Foundation Devices, Inc. <hello@foundation.xyz>
// SPDX-License-Identifier: GPL-3.0-or-later

use derive_more::Display;

pub type Result<T> = core::result::Result<T, Error>;

/// Errors returned by the byte-stream adapters of [`BoundedDeque`].
///
/// Inserting directly into a full deque does not produce an [`Error`], the
/// rejected element is handed back instead.
///
/// [`BoundedDeque`]: crate::BoundedDeque
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Error {
    /// No free slot left to store a byte.
    #[display("deque is full")]
    Full,
    /// No byte available to read.
    #[display("deque is empty")]
    Empty,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "embedded-io")]
impl embedded_io::Error for Error {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            Error::Full => embedded_io::ErrorKind::OutOfMemory,
            Error::Empty => embedded_io::ErrorKind::Other,
        }
    }
}
