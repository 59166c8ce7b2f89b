use crate::{ElemMut, ElemRef, Layout, Record, RecordVec, Storage};
use std::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
    marker::PhantomData,
    ops::Range,
};

type Ptr<T, L> = <<L as Layout>::Storage<T> as Storage<T>>::Ptr;

/// Used by [`IterRaw`] to get an element from the backend in different
/// forms.
pub trait IterRawAdapter<T, L>
where
    T: Record,
    L: Layout,
{
    /// The desired form of the element, such as [`ElemRef`] or [`ElemMut`].
    type Item;

    /// Gets the element at `index` in the desired form.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `index` is in bounds and that each index
    /// is handed out at most once for mutable adapters.
    unsafe fn item_at(ptr: Ptr<T, L>, index: usize) -> Self::Item;
}

pub struct IterRaw<T, L, A>
where
    T: Record,
    L: Layout,
    A: IterRawAdapter<T, L>,
{
    ptr: Ptr<T, L>,
    front: usize,
    back: usize,
    adapter: PhantomData<A>,
}

impl<T, L, A> IterRaw<T, L, A>
where
    T: Record,
    L: Layout,
    A: IterRawAdapter<T, L>,
{
    /// # Safety
    ///
    /// `range` must be in bounds for the backend that `ptr` came from.
    pub(crate) unsafe fn new(ptr: Ptr<T, L>, range: Range<usize>) -> Self {
        Self {
            ptr,
            front: range.start,
            back: range.end,
            adapter: PhantomData,
        }
    }

    /// The indices that have not been yielded yet.
    pub(crate) fn remaining(&self) -> Range<usize> {
        self.front..self.back
    }
}

impl<T, L, A> Clone for IterRaw<T, L, A>
where
    T: Record,
    L: Layout,
    A: IterRawAdapter<T, L>,
{
    fn clone(&self) -> Self {
        Self {
            ptr: self.ptr,
            front: self.front,
            back: self.back,
            adapter: PhantomData,
        }
    }
}

impl<T, L, A> Iterator for IterRaw<T, L, A>
where
    T: Record,
    L: Layout,
    A: IterRawAdapter<T, L>,
{
    type Item = A::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            None
        } else {
            // SAFETY: front < back, so front is in bounds and not yet yielded
            let out = unsafe { A::item_at(self.ptr, self.front) };
            self.front += 1;
            Some(out)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }

    fn count(self) -> usize {
        self.back - self.front
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.back - self.front {
            self.front = self.back;
            None
        } else {
            // nth(n) consumes item n so we need to advance one more
            self.front += n;
            self.next()
        }
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T, L, A> DoubleEndedIterator for IterRaw<T, L, A>
where
    T: Record,
    L: Layout,
    A: IterRawAdapter<T, L>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            None
        } else {
            self.back -= 1;
            // SAFETY: back was decremented from an exclusive bound that is
            // still above front
            Some(unsafe { A::item_at(self.ptr, self.back) })
        }
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.back - self.front {
            self.back = self.front;
            None
        } else {
            self.back -= n;
            self.next_back()
        }
    }
}

macro_rules! iter_with_raw {
    ($t:ident) => {
        impl<'a, T, L> Iterator for $t<'a, T, L>
        where
            T: 'a + Record,
            L: Layout,
        {
            type Item = <$t<'a, T, L> as IterRawAdapter<T, L>>::Item;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.iter_raw.next()
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.iter_raw.size_hint()
            }

            fn count(self) -> usize {
                self.iter_raw.count()
            }

            fn nth(&mut self, n: usize) -> Option<Self::Item> {
                self.iter_raw.nth(n)
            }

            fn last(self) -> Option<Self::Item> {
                self.iter_raw.last()
            }
        }

        impl<'a, T, L> DoubleEndedIterator for $t<'a, T, L>
        where
            T: 'a + Record,
            L: Layout,
        {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.iter_raw.next_back()
            }

            fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
                self.iter_raw.nth_back(n)
            }
        }

        impl<'a, T, L> FusedIterator for $t<'a, T, L>
        where
            T: 'a + Record,
            L: Layout,
        {
        }

        impl<'a, T, L> ExactSizeIterator for $t<'a, T, L>
        where
            T: 'a + Record,
            L: Layout,
        {
        }
    };
}

/// Immutable [`RecordVec`] iterator.
///
/// This struct is created by the [`iter`] method and by
/// [`Cursor::until`].
///
/// [`iter`]: RecordVec::iter
/// [`Cursor::until`]: crate::Cursor::until
pub struct Iter<'a, T, L>
where
    T: 'a + Record,
    L: Layout,
{
    pub(crate) iter_raw: IterRaw<T, L, Self>,
    pub(crate) _marker: PhantomData<&'a RecordVec<T, L>>,
}

impl<'a, T, L> Iter<'a, T, L>
where
    T: 'a + Record,
    L: Layout,
{
    /// # Panics
    ///
    /// Panics if `range` is not within `0..vec.len()`.
    pub(crate) fn new(vec: &'a RecordVec<T, L>, range: Range<usize>) -> Self {
        if range.start > range.end || range.end > vec.len() {
            panic!("range out of bounds");
        }
        Self {
            // SAFETY: The range was just checked
            iter_raw: unsafe { IterRaw::new(vec.storage.as_ptr(), range) },
            _marker: PhantomData,
        }
    }

    /// The indices of the elements that have not been yielded yet.
    pub fn remaining(&self) -> Range<usize> {
        self.iter_raw.remaining()
    }
}

impl<'a, T, L> Clone for Iter<'a, T, L>
where
    T: 'a + Record,
    L: Layout,
{
    fn clone(&self) -> Self {
        Self {
            iter_raw: self.iter_raw.clone(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T, L> Debug for Iter<'a, T, L>
where
    T: 'a + Record,
    L: Layout,
    ElemRef<'a, T, L>: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T, L> IterRawAdapter<T, L> for Iter<'a, T, L>
where
    T: 'a + Record,
    L: Layout,
{
    type Item = ElemRef<'a, T, L>;

    #[inline]
    unsafe fn item_at(ptr: Ptr<T, L>, index: usize) -> Self::Item {
        // SAFETY: Caller ensures the index is in bounds. The shared borrow
        // held by the iterator keeps writes out for 'a.
        unsafe { <L::Storage<T> as Storage<T>>::ref_at(ptr, index) }
    }
}

iter_with_raw!(Iter);

/// Mutable [`RecordVec`] iterator.
///
/// This struct is created by the [`iter_mut`] method.
///
/// [`iter_mut`]: RecordVec::iter_mut
pub struct IterMut<'a, T, L>
where
    T: 'a + Record,
    L: Layout,
{
    pub(crate) iter_raw: IterRaw<T, L, Self>,
    pub(crate) _marker: PhantomData<&'a mut RecordVec<T, L>>,
}

impl<'a, T, L> IterMut<'a, T, L>
where
    T: 'a + Record,
    L: Layout,
{
    pub(crate) fn new(vec: &'a mut RecordVec<T, L>) -> Self {
        let len = vec.len();
        Self {
            // SAFETY: 0..len is in bounds
            iter_raw: unsafe { IterRaw::new(vec.storage.as_mut_ptr(), 0..len) },
            _marker: PhantomData,
        }
    }

    /// The indices of the elements that have not been yielded yet.
    pub fn remaining(&self) -> Range<usize> {
        self.iter_raw.remaining()
    }
}

impl<'a, T, L> Debug for IterMut<'a, T, L>
where
    T: 'a + Record,
    L: Layout,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("remaining", &self.remaining())
            .finish()
    }
}

impl<'a, T, L> IterRawAdapter<T, L> for IterMut<'a, T, L>
where
    T: 'a + Record,
    L: Layout,
{
    type Item = ElemMut<'a, T, L>;

    #[inline]
    unsafe fn item_at(ptr: Ptr<T, L>, index: usize) -> Self::Item {
        // SAFETY: Caller ensures the index is in bounds and handed out once.
        // The mutable borrow held by the iterator keeps other access out.
        unsafe { <L::Storage<T> as Storage<T>>::mut_at(ptr, index) }
    }
}

iter_with_raw!(IterMut);

// SAFETY: Iter behaves like &RecordVec<T, L>
unsafe impl<'a, T, L> Send for Iter<'a, T, L>
where
    T: 'a + Record + Sync,
    L: Layout,
{
}

// SAFETY: Iter behaves like &RecordVec<T, L>
unsafe impl<'a, T, L> Sync for Iter<'a, T, L>
where
    T: 'a + Record + Sync,
    L: Layout,
{
}

// SAFETY: IterMut behaves like &mut RecordVec<T, L>
unsafe impl<'a, T, L> Send for IterMut<'a, T, L>
where
    T: 'a + Record + Send,
    L: Layout,
{
}

// SAFETY: IterMut behaves like &mut RecordVec<T, L>
unsafe impl<'a, T, L> Sync for IterMut<'a, T, L>
where
    T: 'a + Record + Sync,
    L: Layout,
{
}

/// An iterator that moves out of a [`RecordVec`].
///
/// This struct is created by the [`into_iter`] method, provided by the
/// [`IntoIterator`] trait.
///
/// [`into_iter`]: RecordVec::into_iter
pub struct IntoIter<T, L>
where
    T: Record,
    L: Layout,
{
    pub(crate) inner: <L::Storage<T> as Storage<T>>::IntoIter,
}

impl<T, L> Iterator for IntoIter<T, L>
where
    T: Record,
    L: Layout,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, L> DoubleEndedIterator for IntoIter<T, L>
where
    T: Record,
    L: Layout,
{
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T, L> FusedIterator for IntoIter<T, L>
where
    T: Record,
    L: Layout,
{
}

impl<T, L> ExactSizeIterator for IntoIter<T, L>
where
    T: Record,
    L: Layout,
{
}

impl<T, L> Debug for IntoIter<T, L>
where
    T: Record,
    L: Layout,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("remaining", &self.inner.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Aos, AosVec, ElementMut, ElementRef, Layout, RecordVec, Soa, SoaVec};

    fn sample<L: Layout>() -> RecordVec<(u32, char), L> {
        let mut vec = RecordVec::new();
        for (i, c) in "abcde".chars().enumerate() {
            vec.push((i as u32, c));
        }
        vec
    }

    fn both_ends<L: Layout>() {
        let vec = sample::<L>();
        let mut iter = vec.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(*iter.next().unwrap().get::<1>(), 'a');
        assert_eq!(*iter.next_back().unwrap().get::<1>(), 'e');
        assert_eq!(iter.remaining(), 1..4);
        assert_eq!(*iter.nth(1).unwrap().get::<0>(), 2);
        assert_eq!(*iter.nth_back(0).unwrap().get::<0>(), 3);
        assert!(iter.next().is_none());
        assert!(iter.next_back().is_none());
    }

    #[test]
    fn iter_both_ends() {
        both_ends::<Aos>();
        both_ends::<Soa>();
    }

    #[test]
    fn iter_mut_writes() {
        let mut soa = SoaVec::new();
        let mut aos = AosVec::new();
        for i in 0..4u32 {
            soa.push((i, i * 10));
            aos.push((i, i * 10));
        }
        for mut el in soa.iter_mut() {
            *el.get_mut::<1>() += 1;
        }
        for mut el in aos.iter_mut().rev() {
            *el.get_mut::<1>() += 1;
        }
        assert_eq!(soa, aos);
        assert_eq!(soa.column::<1>(), [1, 11, 21, 31]);
    }

    #[test]
    fn into_iter_drops_rest() {
        let vec = sample::<Soa>();
        let mut iter = vec.into_iter();
        assert_eq!(iter.next(), Some((0, 'a')));
        assert_eq!(iter.next_back(), Some((4, 'e')));
        assert_eq!(iter.len(), 3);
    }
}
