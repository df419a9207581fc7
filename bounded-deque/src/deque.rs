// SPDX-FileCopyrightText: © 2024 Foundation Devices, Inc. <hello@foundation.xyz>
// SPDX-License-Identifier: GPL-3.0-or-later

use core::{
    fmt,
    hash::{Hash, Hasher},
    mem::{self, MaybeUninit},
    ops::{Index, IndexMut},
    ptr, slice,
};

use crate::iter::{IntoIter, Iter, IterMut};

/// A double-ended queue with a fixed capacity of `N` elements.
///
/// The elements are stored in a ring buffer inside the structure itself, no
/// heap memory is used. The logical front is at `start` and the occupied
/// slots are `start, start + 1, ..., start + len - 1`, all modulo `N`.
pub struct BoundedDeque<T, const N: usize> {
    buffer: [MaybeUninit<T>; N],
    start: usize,
    len: usize,
}

impl<T, const N: usize> BoundedDeque<T, N> {
    const ELEM: MaybeUninit<T> = MaybeUninit::uninit();
    const INIT: [MaybeUninit<T>; N] = [Self::ELEM; N];

    const NON_ZERO_CAPACITY: () = ::core::assert!(N > 0, "capacity must be at least 1");

    /// Construct an empty deque.
    ///
    /// Fails to compile when `N` is zero.
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_ZERO_CAPACITY;

        Self {
            buffer: Self::INIT,
            start: 0,
            len: 0,
        }
    }

    /// Maximum number of elements, `N`.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of elements currently stored.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Wraps an index in `0..2 * N` into `0..N`.
    ///
    /// `N` is not required to be a power of two, so no bit masking here.
    #[inline(always)]
    const fn wrap(index: usize) -> usize {
        if index >= N {
            index - N
        } else {
            index
        }
    }

    #[inline(always)]
    const fn wrap_dec(index: usize) -> usize {
        if index == 0 {
            N - 1
        } else {
            index - 1
        }
    }

    /// Physical slot of the front-relative position `index`.
    #[inline(always)]
    fn slot(&self, index: usize) -> usize {
        debug_assert!(index < N);
        Self::wrap(self.start + index)
    }

    /// # Safety
    ///
    /// `slot` must be an occupied slot.
    #[inline(always)]
    unsafe fn read_slot(&self, slot: usize) -> T {
        unsafe { self.buffer.get_unchecked(slot).assume_init_read() }
    }

    /// # Safety
    ///
    /// `slot` must be in bounds. Whatever it holds is overwritten without
    /// being dropped.
    #[inline(always)]
    unsafe fn write_slot(&mut self, slot: usize, value: T) {
        unsafe { *self.buffer.get_unchecked_mut(slot) = MaybeUninit::new(value) };
    }

    /// Insert `value` at the back.
    ///
    /// When the deque is full the value is returned as-is and the deque is
    /// left untouched.
    pub fn append(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }

        let slot = self.slot(self.len);
        unsafe { self.write_slot(slot, value) };
        self.len += 1;
        Ok(())
    }

    /// Insert `value` at the front.
    ///
    /// When the deque is full the value is returned as-is and the deque is
    /// left untouched.
    pub fn prepend(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }

        self.start = Self::wrap_dec(self.start);
        unsafe { self.write_slot(self.start, value) };
        self.len += 1;
        Ok(())
    }

    /// Insert `value` at the back, evicting the front element when full.
    ///
    /// Returns the evicted element, if any.
    pub fn append_overwrite(&mut self, value: T) -> Option<T> {
        if !self.is_full() {
            let slot = self.slot(self.len);
            unsafe { self.write_slot(slot, value) };
            self.len += 1;
            return None;
        }

        // When full the slot after the back is the front slot.
        trace!("append_overwrite: evicting front at slot {}", self.start);
        let evicted = unsafe { self.read_slot(self.start) };
        unsafe { self.write_slot(self.start, value) };
        self.start = Self::wrap(self.start + 1);
        Some(evicted)
    }

    /// Insert `value` at the front, evicting the back element when full.
    ///
    /// Returns the evicted element, if any.
    pub fn prepend_overwrite(&mut self, value: T) -> Option<T> {
        self.start = Self::wrap_dec(self.start);

        if !self.is_full() {
            unsafe { self.write_slot(self.start, value) };
            self.len += 1;
            return None;
        }

        // When full the slot before the front is the back slot.
        trace!("prepend_overwrite: evicting back at slot {}", self.start);
        let evicted = unsafe { self.read_slot(self.start) };
        unsafe { self.write_slot(self.start, value) };
        Some(evicted)
    }

    /// Remove and return the front element, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let value = unsafe { self.read_slot(self.start) };
        self.start = Self::wrap(self.start + 1);
        self.len -= 1;
        Some(value)
    }

    /// Remove and return the back element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.len -= 1;
        let slot = self.slot(self.len);
        Some(unsafe { self.read_slot(slot) })
    }

    /// Remove the front element.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    pub fn remove_front(&mut self) {
        let removed = self.pop_front();
        assert!(removed.is_some(), "remove_front on an empty deque");
    }

    /// Remove the back element.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    pub fn remove_back(&mut self) {
        let removed = self.pop_back();
        assert!(removed.is_some(), "remove_back on an empty deque");
    }

    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    pub fn back(&self) -> Option<&T> {
        self.rget(0)
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.rget_mut(0)
    }

    /// Element at `index` counting from the front, `0` being the front.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }

        let slot = self.slot(index);
        Some(unsafe { self.buffer.get_unchecked(slot).assume_init_ref() })
    }

    /// Mutable element at `index` counting from the front.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }

        let slot = self.slot(index);
        Some(unsafe { self.buffer.get_unchecked_mut(slot).assume_init_mut() })
    }

    /// Element at `index` counting from the back, `0` being the back.
    pub fn rget(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }

        self.get(self.len - 1 - index)
    }

    /// Mutable element at `index` counting from the back.
    pub fn rget_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }

        self.get_mut(self.len - 1 - index)
    }

    /// Remove all elements.
    ///
    /// The front index is kept, only the occupancy is reset. Elements are
    /// dropped in place, which does nothing for types without drop glue.
    pub fn clear(&mut self) {
        if !mem::needs_drop::<T>() {
            self.len = 0;
            return;
        }

        let (front, back) = self.as_mut_slices();
        let (front, back) = (front as *mut [T], back as *mut [T]);
        // Reset first so a panicking destructor can't cause a double drop.
        self.len = 0;
        unsafe {
            ptr::drop_in_place(front);
            ptr::drop_in_place(back);
        }
    }

    /// Returns the occupied range as two slices, the second one being
    /// non-empty only when the range wraps around the end of the buffer.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let ptr = self.buffer.as_ptr() as *const T;
        let contiguous = N - self.start;

        unsafe {
            if self.len <= contiguous {
                (slice::from_raw_parts(ptr.add(self.start), self.len), &[])
            } else {
                (
                    slice::from_raw_parts(ptr.add(self.start), contiguous),
                    slice::from_raw_parts(ptr, self.len - contiguous),
                )
            }
        }
    }

    /// Mutable counterpart of [`as_slices`](BoundedDeque::as_slices).
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let ptr = self.buffer.as_mut_ptr() as *mut T;
        let contiguous = N - self.start;

        unsafe {
            if self.len <= contiguous {
                (
                    slice::from_raw_parts_mut(ptr.add(self.start), self.len),
                    &mut [],
                )
            } else {
                (
                    slice::from_raw_parts_mut(ptr.add(self.start), contiguous),
                    slice::from_raw_parts_mut(ptr, self.len - contiguous),
                )
            }
        }
    }

    /// Front to back iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        let (front, back) = self.as_slices();
        Iter::new(front, back)
    }

    /// Front to back iterator allowing to modify each element.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (front, back) = self.as_mut_slices();
        IterMut::new(front, back)
    }
}

impl<T, const N: usize> Default for BoundedDeque<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Drop for BoundedDeque<T, N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone, const N: usize> Clone for BoundedDeque<T, N> {
    fn clone(&self) -> Self {
        let mut cloned = Self::new();
        for (slot, item) in self.iter().enumerate() {
            unsafe { cloned.write_slot(slot, item.clone()) };
            // Bumped one at a time so a panicking clone drops what was written.
            cloned.len += 1;
        }
        cloned
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for BoundedDeque<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(feature = "defmt-03")]
impl<T: defmt::Format, const N: usize> defmt::Format for BoundedDeque<T, N> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "[");
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", item);
        }
        defmt::write!(f, "]");
    }
}

impl<T: PartialEq, const N: usize> PartialEq for BoundedDeque<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, const N: usize> Eq for BoundedDeque<T, N> {}

impl<T: Hash, const N: usize> Hash for BoundedDeque<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        self.iter().for_each(|item| item.hash(state));
    }
}

impl<T, const N: usize> Index<usize> for BoundedDeque<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        let len = self.len;
        match self.get(index) {
            Some(item) => item,
            None => panic!("index {} out of bounds for deque of length {}", index, len),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for BoundedDeque<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(item) => item,
            None => panic!("index {} out of bounds for deque of length {}", index, len),
        }
    }
}

impl<T, const N: usize> IntoIterator for BoundedDeque<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a BoundedDeque<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut BoundedDeque<T, N> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
