// SPDX-FileCopyrightText: © 2024 Foundation Devices, Inc. <hello@foundation.xyz>
// SPDX-License-Identifier: GPL-3.0-or-later

use embedded_io::{Error as _, ErrorKind, Read, ReadReady, Write, WriteReady};
use foundation_bounded_deque::{BoundedDeque, Error};

#[test]
fn write_until_full() {
    let mut deque: BoundedDeque<u8, 4> = BoundedDeque::new();

    assert_eq!(deque.write(&[]), Ok(0));
    assert_eq!(deque.write(b"abc"), Ok(3));
    assert_eq!(deque.write(b"def"), Ok(1));
    assert_eq!(deque.write(b"g"), Err(Error::Full));
    assert_eq!(deque.write_ready(), Ok(false));
    assert!(deque.iter().eq(b"abcd".iter()));
    assert_eq!(deque.flush(), Ok(()));
}

#[test]
fn read_until_empty() {
    let mut deque: BoundedDeque<u8, 4> = BoundedDeque::new();
    deque.write_all(b"wxyz").unwrap();

    let mut buf = [0; 3];
    assert_eq!(deque.read(&mut []), Ok(0));
    assert_eq!(deque.read(&mut buf), Ok(3));
    assert_eq!(&buf, b"wxy");
    assert_eq!(deque.read_ready(), Ok(true));
    assert_eq!(deque.read(&mut buf), Ok(1));
    assert_eq!(buf[0], b'z');
    assert_eq!(deque.read(&mut buf), Err(Error::Empty));
    assert_eq!(deque.read_ready(), Ok(false));
}

#[test]
fn fifo_across_wrap() {
    let mut deque: BoundedDeque<u8, 5> = BoundedDeque::new();
    let mut buf = [0; 5];

    for chunk in [&b"hello"[..], b"abc", b"defg", b"z"] {
        deque.write_all(chunk).unwrap();
        let n = deque.read(&mut buf).unwrap();
        assert_eq!(&buf[..n], chunk);
    }
}

#[test]
fn error_kinds() {
    assert_eq!(Error::Full.kind(), ErrorKind::OutOfMemory);
    assert_eq!(Error::Empty.kind(), ErrorKind::Other);
    assert_eq!(Error::Full.to_string(), "deque is full");
}
