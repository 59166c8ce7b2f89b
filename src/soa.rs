use crate::{Columns, Field, Record, SoaMut, SoaRef, Storage, TryReserveError};
use std::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
    marker::PhantomData,
    mem::ManuallyDrop,
    slice,
};

/// The capacity of the first allocation.
const MIN_CAPACITY: usize = 4;

/// The structure-of-arrays backend: one column per field with one shared
/// length and capacity.
///
/// Every column holds exactly `len` initialized values and has room for
/// `capacity`. Since both numbers are stored once for the whole bundle, the
/// columns cannot disagree about either.
pub struct SoaStorage<T>
where
    T: Record,
{
    columns: T::Columns,
    len: usize,
    capacity: usize,
    _marker: PhantomData<T>,
}

impl<T> SoaStorage<T>
where
    T: Record,
{
    /// Replaces the columns with a fresh allocation of `capacity` and moves
    /// the live records across. If allocation fails nothing changes.
    fn grow(&mut self, capacity: usize) -> Result<(), TryReserveError> {
        debug_assert!(capacity > self.capacity);
        let columns = T::Columns::alloc(capacity)?;
        if self.capacity > 0 {
            // SAFETY: The new columns are larger than the old ones, which hold
            // len initialized records and were allocated with self.capacity.
            unsafe {
                self.columns.copy_to(columns, self.len);
                self.columns.dealloc(self.capacity);
            }
        }
        tracing::trace!(
            fields = T::FIELDS,
            old_capacity = self.capacity,
            new_capacity = capacity,
            len = self.len,
            "grew columns"
        );
        self.columns = columns;
        self.capacity = capacity;
        Ok(())
    }

    /// Field `K` of every live record.
    pub(crate) fn column<const K: usize>(&self) -> &[<T as Field<K>>::Type]
    where
        T: Field<K>,
    {
        // SAFETY: The column holds len initialized values, or is dangling and
        // len is zero.
        unsafe { slice::from_raw_parts(T::column(self.columns).as_ptr(), self.len) }
    }

    /// Field `K` of every live record, mutably.
    pub(crate) fn column_mut<const K: usize>(&mut self) -> &mut [<T as Field<K>>::Type]
    where
        T: Field<K>,
    {
        // SAFETY: As for column, and the mutable borrow of self is exclusive.
        unsafe { slice::from_raw_parts_mut(T::column(self.columns).as_ptr(), self.len) }
    }
}

impl<T> Storage<T> for SoaStorage<T>
where
    T: Record,
{
    type Ref<'a>
        = SoaRef<'a, T>
    where
        Self: 'a,
        T: 'a;

    type Mut<'a>
        = SoaMut<'a, T>
    where
        Self: 'a,
        T: 'a;

    type Ptr = T::Columns;
    type IntoIter = SoaIntoIter<T>;

    fn new() -> Self {
        Self {
            columns: T::Columns::dangling(),
            len: 0,
            capacity: 0,
            _marker: PhantomData,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(TryReserveError::CapacityOverflow)?;
        if required <= self.capacity {
            return Ok(());
        }
        let capacity = self
            .capacity
            .saturating_mul(2)
            .max(required)
            .max(MIN_CAPACITY);
        self.grow(capacity)
    }

    fn push(&mut self, record: T) {
        if self.len == self.capacity {
            if let Err(e) = self.try_reserve(1) {
                e.handle();
            }
        }
        // SAFETY: We just made sure len < capacity
        unsafe { self.columns.write(self.len, record) };
        self.len += 1;
    }

    fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: The old last slot is initialized and now out of bounds
            Some(unsafe { self.columns.read(self.len) })
        }
    }

    fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let end = self.len;
        // Shrink first so a panicking drop cannot cause a double drop
        self.len = len;
        // SAFETY: len..end was initialized and is now out of bounds
        unsafe { self.columns.drop_range(len, end) };
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a >= self.len || b >= self.len {
            panic!("index out of bounds");
        }
        // SAFETY: Both indices were checked above
        unsafe { self.columns.swap(a, b) };
    }

    #[inline]
    fn as_ptr(&self) -> T::Columns {
        self.columns
    }

    #[inline]
    fn as_mut_ptr(&mut self) -> T::Columns {
        self.columns
    }

    #[inline]
    unsafe fn ref_at<'a>(ptr: T::Columns, index: usize) -> SoaRef<'a, T>
    where
        Self: 'a,
        T: 'a,
    {
        // SAFETY: Caller upholds the proxy contract
        unsafe { SoaRef::new(ptr, index) }
    }

    #[inline]
    unsafe fn mut_at<'a>(ptr: T::Columns, index: usize) -> SoaMut<'a, T>
    where
        Self: 'a,
        T: 'a,
    {
        // SAFETY: Caller upholds the proxy contract
        unsafe { SoaMut::new(ptr, index) }
    }

    fn into_iter(self) -> SoaIntoIter<T> {
        let me = ManuallyDrop::new(self);
        SoaIntoIter {
            columns: me.columns,
            capacity: me.capacity,
            front: 0,
            back: me.len,
            _marker: PhantomData,
        }
    }
}

impl<T> Drop for SoaStorage<T>
where
    T: Record,
{
    fn drop(&mut self) {
        // SAFETY: 0..len is initialized and the columns were allocated with
        // capacity when it is nonzero.
        unsafe {
            self.columns.drop_range(0, self.len);
            if self.capacity > 0 {
                self.columns.dealloc(self.capacity);
            }
        }
    }
}

impl<T> Debug for SoaStorage<T>
where
    T: Record,
    for<'a> T::Ref<'a>: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for i in 0..self.len {
            // SAFETY: i < len
            list.entry(&unsafe { self.columns.get_ref(i) });
        }
        list.finish()
    }
}

// SAFETY: SoaStorage owns its records like Vec<T> does
unsafe impl<T> Send for SoaStorage<T> where T: Record + Send {}
// SAFETY: SoaStorage owns its records like Vec<T> does
unsafe impl<T> Sync for SoaStorage<T> where T: Record + Sync {}

/// An iterator that moves records out of a structure-of-arrays backend.
///
/// Records not yet yielded are dropped along with the iterator.
pub struct SoaIntoIter<T>
where
    T: Record,
{
    columns: T::Columns,
    capacity: usize,
    front: usize,
    back: usize,
    _marker: PhantomData<T>,
}

impl<T> Iterator for SoaIntoIter<T>
where
    T: Record,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            None
        } else {
            // SAFETY: front..back is initialized
            let out = unsafe { self.columns.read(self.front) };
            self.front += 1;
            Some(out)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for SoaIntoIter<T>
where
    T: Record,
{
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            None
        } else {
            self.back -= 1;
            // SAFETY: front..=back was initialized
            Some(unsafe { self.columns.read(self.back) })
        }
    }
}

impl<T> FusedIterator for SoaIntoIter<T> where T: Record {}
impl<T> ExactSizeIterator for SoaIntoIter<T> where T: Record {}

impl<T> Drop for SoaIntoIter<T>
where
    T: Record,
{
    fn drop(&mut self) {
        // SAFETY: front..back is still initialized and the columns were
        // allocated with capacity when it is nonzero.
        unsafe {
            self.columns.drop_range(self.front, self.back);
            if self.capacity > 0 {
                self.columns.dealloc(self.capacity);
            }
        }
    }
}

// SAFETY: SoaIntoIter owns its records like vec::IntoIter<T> does
unsafe impl<T> Send for SoaIntoIter<T> where T: Record + Send {}
// SAFETY: SoaIntoIter owns its records like vec::IntoIter<T> does
unsafe impl<T> Sync for SoaIntoIter<T> where T: Record + Sync {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_policy() {
        let mut storage = SoaStorage::<(u8, u64)>::new();
        assert_eq!(storage.capacity(), 0);
        storage.push((1, 1));
        assert_eq!(storage.capacity(), MIN_CAPACITY);
        for i in 0..4 {
            storage.push((i, i.into()));
        }
        assert_eq!(storage.capacity(), 2 * MIN_CAPACITY);
        assert_eq!(storage.len(), 5);
        assert_eq!(storage.column::<1>(), [1, 0, 1, 2, 3]);
    }

    #[test]
    fn reserve_overflow_leaves_storage_untouched() {
        let mut storage = SoaStorage::<(u32, u16)>::new();
        storage.push((1, 2));
        let capacity = storage.capacity();
        assert_eq!(
            storage.try_reserve(usize::MAX),
            Err(TryReserveError::CapacityOverflow)
        );
        assert_eq!(
            storage.try_reserve(usize::MAX / 2),
            Err(TryReserveError::CapacityOverflow)
        );
        assert_eq!(storage.len(), 1);
        assert_eq!(storage.capacity(), capacity);
        assert_eq!(storage.pop(), Some((1, 2)));
    }

    #[test]
    fn into_iter_both_ends() {
        let mut storage = SoaStorage::<(String,)>::new();
        for s in ["a", "b", "c", "d"] {
            storage.push((s.to_string(),));
        }
        let mut iter = storage.into_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(("a".to_string(),)));
        assert_eq!(iter.next_back(), Some(("d".to_string(),)));
        assert_eq!(iter.len(), 2);
    }

    #[test]
    fn zero_sized_record() {
        let mut storage = SoaStorage::<((), ())>::new();
        for _ in 0..10 {
            storage.push(((), ()));
        }
        assert_eq!(storage.len(), 10);
        storage.truncate(3);
        assert_eq!(storage.pop(), Some(((), ())));
        assert_eq!(storage.len(), 2);
    }
}
