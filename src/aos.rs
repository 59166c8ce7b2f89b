use crate::{Record, Storage, TryReserveError};
use std::ptr::NonNull;

/// The array-of-structures backend: a plain `Vec<T>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AosStorage<T>(pub(crate) Vec<T>);

impl<T> Storage<T> for AosStorage<T>
where
    T: Record,
{
    type Ref<'a>
        = &'a T
    where
        Self: 'a,
        T: 'a;

    type Mut<'a>
        = &'a mut T
    where
        Self: 'a,
        T: 'a;

    type Ptr = NonNull<T>;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn new() -> Self {
        Self(Vec::new())
    }

    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.0.capacity()
    }

    fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        Ok(self.0.try_reserve(additional)?)
    }

    #[inline]
    fn push(&mut self, record: T) {
        self.0.push(record);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    #[inline]
    fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        if a >= self.0.len() || b >= self.0.len() {
            panic!("index out of bounds");
        }
        self.0.swap(a, b);
    }

    #[inline]
    fn as_ptr(&self) -> NonNull<T> {
        // SAFETY: Vec pointers are never null
        unsafe { NonNull::new_unchecked(self.0.as_ptr().cast_mut()) }
    }

    #[inline]
    fn as_mut_ptr(&mut self) -> NonNull<T> {
        // SAFETY: Vec pointers are never null
        unsafe { NonNull::new_unchecked(self.0.as_mut_ptr()) }
    }

    #[inline]
    unsafe fn ref_at<'a>(ptr: NonNull<T>, index: usize) -> &'a T
    where
        Self: 'a,
        T: 'a,
    {
        // SAFETY: Caller ensures the index is in bounds and unaliased
        unsafe { ptr.add(index).as_ref() }
    }

    #[inline]
    unsafe fn mut_at<'a>(ptr: NonNull<T>, index: usize) -> &'a mut T
    where
        Self: 'a,
        T: 'a,
    {
        // SAFETY: Caller ensures the index is in bounds and unaliased
        unsafe { ptr.add(index).as_mut() }
    }

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
