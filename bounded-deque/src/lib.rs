// SPDX-FileCopyrightText: © 2024 Foundation Devices, Inc. <hello@foundation.xyz>
// SPDX-License-Identifier: GPL-3.0-or-later

//! # Foundation Bounded Deque.
//!
//! A double-ended queue with a capacity fixed at compile-time by the `N`
//! type parameter. The elements live in a ring buffer inside the
//! [`BoundedDeque`] value itself, so it can be placed on the stack or in a
//! `static` without any heap.
//!
//! Insertion at either end comes in two flavours:
//!
//! - [`append`](BoundedDeque::append) / [`prepend`](BoundedDeque::prepend)
//!   refuse the element when the deque is full and hand it back.
//! - [`append_overwrite`](BoundedDeque::append_overwrite) /
//!   [`prepend_overwrite`](BoundedDeque::prepend_overwrite) always succeed,
//!   evicting the element at the opposite end when full.
//!
//! # Examples
//!
//! ```rust
//! use foundation_bounded_deque::BoundedDeque;
//!
//! let mut deque: BoundedDeque<i16, 3> = BoundedDeque::new();
//!
//! deque.append(1).unwrap();
//! deque.append(2).unwrap();
//! deque.append(3).unwrap();
//! assert_eq!(deque.append(4), Err(4));
//!
//! // Keep the three most recent values.
//! assert_eq!(deque.append_overwrite(4), Some(1));
//! assert_eq!(deque.front(), Some(&2));
//! assert_eq!(deque.back(), Some(&4));
//!
//! assert_eq!(deque[1], 3);
//! assert_eq!(deque.rget(0), Some(&4));
//!
//! for value in &deque {
//!     println!("{value}");
//! }
//! ```
//!
//! # Features
//!
//! - `std` (default): implements `std::error::Error` for [`Error`].
//! - `embedded-io` (default): `embedded_io` `Read`/`Write` for
//!   `BoundedDeque<u8, N>`.
//! - `log` or `defmt-03`: emit log messages and assertions through the
//!   respective crate.

#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
pub(crate) mod fmt;

mod deque;
mod error;
#[cfg(feature = "embedded-io")]
mod io;
pub mod iter;
pub mod transfer;

pub use deque::BoundedDeque;
pub use error::{Error, Result};
pub use transfer::Transfer;
