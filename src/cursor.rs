use crate::{ElemRef, Iter, Layout, Record, RecordVec};
use std::{
    cmp::Ordering,
    fmt::{self, Debug, Formatter},
    ops::{Add, AddAssign, Sub, SubAssign},
    ptr,
};

/// A random-access position in a [`RecordVec`].
///
/// A cursor is an index paired with a shared borrow of the container, so the
/// container cannot be resized while any cursor exists. Cursors are `Copy`
/// and move with signed offsets. Positions from `0` up to and including
/// `len` are meaningful, with [`RecordVec::end`] pointing one past the last
/// element. Dereferencing only succeeds below `len`.
///
/// Comparing or subtracting cursors of two different containers is a logic
/// error and is caught by a debug assertion.
///
/// Cursors only read. Because a cursor shares the borrow of its container,
/// writes at a position go through [`RecordVec::idx_mut`] or
/// [`RecordVec::get_pair_mut`] with the cursor's [`index`](Cursor::index).
///
/// # Examples
///
/// ```
/// use layout_vec::{ElementRef, SoaVec};
///
/// let soa: SoaVec<_> = (0..10u32).map(|i| (i, i * i)).collect();
/// let mut cursor = soa.begin();
/// cursor += 3;
/// assert_eq!(*cursor.get().get::<1>(), 9);
/// assert_eq!(*cursor.at(-1).get::<1>(), 4);
/// assert_eq!(soa.end() - cursor, 7);
/// assert!(cursor < soa.end());
///
/// let squares: Vec<u32> = cursor.until(cursor + 3).map(|el| *el.get::<1>()).collect();
/// assert_eq!(squares, [9, 16, 25]);
/// ```
///
/// Writing at a cursor position:
///
/// ```
/// use layout_vec::{ElementMut, SoaVec};
///
/// let mut soa: SoaVec<_> = (0..4u32).map(|i| (i,)).collect();
/// let index = (soa.end() - 2).index();
/// *soa.idx_mut(index).get_mut::<0>() = 20;
/// assert_eq!(soa.column::<0>(), [0, 1, 20, 3]);
/// ```
pub struct Cursor<'a, T, L>
where
    T: 'a + Record,
    L: Layout,
{
    index: usize,
    vec: &'a RecordVec<T, L>,
}

impl<'a, T, L> Cursor<'a, T, L>
where
    T: 'a + Record,
    L: Layout,
{
    pub(crate) fn new(vec: &'a RecordVec<T, L>, index: usize) -> Self {
        Self { index, vec }
    }

    /// The position of the cursor.
    pub fn index(self) -> usize {
        self.index
    }

    /// The container the cursor walks.
    pub fn container(self) -> &'a RecordVec<T, L> {
        self.vec
    }

    /// The element under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not in `0..len`.
    pub fn get(self) -> ElemRef<'a, T, L> {
        self.vec.idx(self.index)
    }

    /// The element `offset` positions away from the cursor.
    ///
    /// # Panics
    ///
    /// Panics if that position is not in `0..len`.
    pub fn at(self, offset: isize) -> ElemRef<'a, T, L> {
        (self + offset).get()
    }

    /// Iterates from this cursor up to, but not including, `end`.
    ///
    /// # Panics
    ///
    /// Panics if `end` is before `self` or past the end of the container.
    pub fn until(self, end: Self) -> Iter<'a, T, L> {
        self.same_container(end);
        Iter::new(self.vec, self.index..end.index)
    }

    fn same_container(self, other: Self) {
        debug_assert!(
            ptr::eq(self.vec, other.vec),
            "cursors belong to different containers"
        );
    }
}

impl<'a, T, L> Clone for Cursor<'a, T, L>
where
    T: 'a + Record,
    L: Layout,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, L> Copy for Cursor<'a, T, L>
where
    T: 'a + Record,
    L: Layout,
{
}

impl<'a, T, L> Debug for Cursor<'a, T, L>
where
    T: 'a + Record,
    L: Layout,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("len", &self.vec.len())
            .finish()
    }
}

impl<'a, T, L> AddAssign<isize> for Cursor<'a, T, L>
where
    T: 'a + Record,
    L: Layout,
{
    fn add_assign(&mut self, offset: isize) {
        self.index = self.index.wrapping_add_signed(offset);
    }
}

impl<'a, T, L> SubAssign<isize> for Cursor<'a, T, L>
where
    T: 'a + Record,
    L: Layout,
{
    fn sub_assign(&mut self, offset: isize) {
        self.index = self.index.wrapping_add_signed(offset.wrapping_neg());
    }
}

impl<'a, T, L> Add<isize> for Cursor<'a, T, L>
where
    T: 'a + Record,
    L: Layout,
{
    type Output = Self;

    fn add(mut self, offset: isize) -> Self {
        self += offset;
        self
    }
}

impl<'a, T, L> Sub<isize> for Cursor<'a, T, L>
where
    T: 'a + Record,
    L: Layout,
{
    type Output = Self;

    fn sub(mut self, offset: isize) -> Self {
        self -= offset;
        self
    }
}

impl<'a, T, L> Sub for Cursor<'a, T, L>
where
    T: 'a + Record,
    L: Layout,
{
    type Output = isize;

    /// The signed distance from `other` to `self`.
    fn sub(self, other: Self) -> isize {
        self.same_container(other);
        self.index.wrapping_sub(other.index) as isize
    }
}

impl<'a, T, L> PartialEq for Cursor<'a, T, L>
where
    T: 'a + Record,
    L: Layout,
{
    fn eq(&self, other: &Self) -> bool {
        self.same_container(*other);
        self.index == other.index
    }
}

impl<'a, T, L> Eq for Cursor<'a, T, L>
where
    T: 'a + Record,
    L: Layout,
{
}

impl<'a, T, L> PartialOrd for Cursor<'a, T, L>
where
    T: 'a + Record,
    L: Layout,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a, T, L> Ord for Cursor<'a, T, L>
where
    T: 'a + Record,
    L: Layout,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.same_container(*other);
        self.index.cmp(&other.index)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Aos, ElementRef, Layout, RecordVec, Soa};

    fn walk<L: Layout>() {
        let vec: RecordVec<(u8, i64), L> = (0..6u8).map(|i| (i, -i64::from(i))).collect();
        let first = vec.begin();
        let last = vec.end();
        assert_eq!(last - first, 6);
        assert_eq!(first - last, -6);

        let mut cursor = first;
        cursor += 1;
        let before = cursor;
        cursor += 1;
        assert_eq!(before.index(), 1);
        assert_eq!(cursor.index(), 2);
        cursor -= 1;
        assert_eq!(cursor, before);
        assert_eq!(*(cursor + 4).get().get::<1>(), -5);
        assert_eq!(*(last - 1).get().get::<0>(), 5);
        assert!(first < cursor && cursor <= before && last > cursor);

        let back: Vec<u8> = first.until(last).rev().map(|el| *el.get::<0>()).collect();
        assert_eq!(back, [5, 4, 3, 2, 1, 0]);
        assert_eq!(first.until(first).len(), 0);
    }

    #[test]
    fn cursor_arithmetic() {
        walk::<Aos>();
        walk::<Soa>();
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn dereference_end() {
        let vec: RecordVec<(u8,), Soa> = RecordVec::from_elem(3, (0,));
        vec.end().get();
    }

    #[test]
    #[should_panic(expected = "range out of bounds")]
    fn reversed_range() {
        let vec: RecordVec<(u8,), Aos> = RecordVec::from_elem(3, (0,));
        vec.end().until(vec.begin());
    }
}
