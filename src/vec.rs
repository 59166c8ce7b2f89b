use crate::{
    Aos, CloneFields, Cursor, ElemMut, ElemRef, ElementMut, ElementRef, Field, IntoIter, Iter,
    IterMut, Layout, Record, Soa, Storage, TakeFields, TryReserveError,
};
use std::{
    fmt::{self, Debug, Formatter},
    hash::{Hash, Hasher},
};

type Backend<T, L> = <L as Layout>::Storage<T>;

/// A growable container of records that stores them either as one array of
/// whole records ([`Aos`]) or as one array per field ([`Soa`]).
///
/// Both layouts expose the same element interface through [`ElemRef`] and
/// [`ElemMut`], so code written against `L: Layout` works with either. The
/// layout defaults to [`Soa`]; [`SoaVec`] and [`AosVec`] name the two
/// choices directly.
///
/// # Examples
///
/// ```
/// use layout_vec::{AosVec, ElementMut, ElementRef, SoaVec};
///
/// let mut soa = SoaVec::new();
/// soa.push((1u32, String::from("one")));
/// soa.push((2u32, String::from("two")));
///
/// let mut aos = AosVec::new();
/// aos.push((3u32, String::from("three")));
///
/// // Assign an element of one container from an element of the other
/// soa.idx_mut(0).assign_from(&aos.idx(0));
/// assert_eq!(soa.idx(0).cloned(), (3, String::from("three")));
///
/// // Fields of a structure-of-arrays element are read from their columns
/// assert_eq!(soa.column::<0>(), [3, 2]);
/// ```
pub struct RecordVec<T, L = Soa>
where
    T: Record,
    L: Layout,
{
    pub(crate) storage: Backend<T, L>,
}

/// A [`RecordVec`] with the structure-of-arrays layout.
pub type SoaVec<T> = RecordVec<T, Soa>;

/// A [`RecordVec`] with the array-of-structures layout.
pub type AosVec<T> = RecordVec<T, Aos>;

impl<T, L> RecordVec<T, L>
where
    T: Record,
    L: Layout,
{
    /// Constructs a new, empty container.
    ///
    /// The container will not allocate until elements are pushed onto it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use layout_vec::{RecordVec, Aos};
    /// let vec: RecordVec<(u8, f32), Aos> = RecordVec::new();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.capacity(), 0);
    /// ```
    pub fn new() -> Self {
        Self {
            storage: <Backend<T, L> as Storage<T>>::new(),
        }
    }

    /// Constructs a new, empty container with at least the specified
    /// capacity.
    ///
    /// # Panics
    ///
    /// Panics if the capacity overflows `isize::MAX` bytes for any column.
    ///
    /// # Examples
    ///
    /// ```
    /// # use layout_vec::SoaVec;
    /// let mut soa = SoaVec::<(u64, u8)>::with_capacity(10);
    /// assert_eq!(soa.len(), 0);
    /// assert!(soa.capacity() >= 10);
    /// for i in 0..10 {
    ///     soa.push((i, 0));
    /// }
    /// assert!(soa.capacity() >= 10);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        let mut out = Self::new();
        out.reserve(capacity);
        out
    }

    /// Constructs a container holding `n` copies of `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use layout_vec::{ElementRef, SoaVec};
    /// let soa = SoaVec::from_elem(3, (7u8, vec!['x']));
    /// assert_eq!(soa.len(), 3);
    /// assert_eq!(soa.idx(2).cloned(), (7, vec!['x']));
    /// ```
    pub fn from_elem(n: usize, value: T) -> Self
    where
        T: CloneFields,
    {
        let mut out = Self::with_capacity(n);
        out.extend_with(n, value);
        out
    }

    /// Constructs a container of `len` default records.
    ///
    /// # Examples
    ///
    /// ```
    /// # use layout_vec::AosVec;
    /// let aos = AosVec::<(u8, String)>::with_len(2);
    /// assert_eq!(aos, [(0, String::new()), (0, String::new())]);
    /// ```
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut out = Self::with_capacity(len);
        for _ in 0..len {
            out.storage.push(T::default());
        }
        out
    }

    /// Constructs a container from clones of the elements in `first..last`,
    /// which may belong to a container of either layout.
    ///
    /// # Panics
    ///
    /// Panics if `last` is before `first` or past the end of its container.
    ///
    /// # Examples
    ///
    /// ```
    /// # use layout_vec::{AosVec, SoaVec};
    /// let soa: SoaVec<_> = (0..5u8).map(|i| (i,)).collect();
    /// let aos = AosVec::from_cursor_range(soa.begin() + 1, soa.end() - 1);
    /// assert_eq!(aos, [(1,), (2,), (3,)]);
    /// ```
    pub fn from_cursor_range<L2>(first: Cursor<'_, T, L2>, last: Cursor<'_, T, L2>) -> Self
    where
        T: CloneFields,
        L2: Layout,
    {
        first.until(last).map(|el| el.cloned()).collect()
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if the container contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the total number of elements the container can hold without
    /// reallocating.
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Reserves capacity for at least `additional` more elements.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `isize::MAX` bytes for any
    /// column. Aborts through [`handle_alloc_error`] if the allocator fails.
    ///
    /// [`handle_alloc_error`]: std::alloc::handle_alloc_error
    pub fn reserve(&mut self, additional: usize) {
        if let Err(e) = self.storage.try_reserve(additional) {
            e.handle();
        }
    }

    /// Tries to reserve capacity for at least `additional` more elements.
    ///
    /// On error the container is left exactly as it was: no column has been
    /// reallocated and neither the length nor the capacity changes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use layout_vec::{SoaVec, TryReserveError};
    /// let mut soa = SoaVec::<(u32, u8)>::new();
    /// soa.push((1, 2));
    /// assert_eq!(soa.try_reserve(usize::MAX), Err(TryReserveError::CapacityOverflow));
    /// assert_eq!(soa.len(), 1);
    /// assert!(soa.try_reserve(16).is_ok());
    /// assert!(soa.capacity() >= 17);
    /// ```
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.storage.try_reserve(additional)
    }

    /// Appends an element to the back of the container.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `isize::MAX` bytes for any
    /// column.
    ///
    /// # Examples
    ///
    /// ```
    /// # use layout_vec::{AosVec, ElementRef};
    /// let mut aos = AosVec::new();
    /// aos.push((1, 'a'));
    /// aos.push((2, 'b'));
    /// assert_eq!(aos.len(), 2);
    /// assert_eq!(*aos.idx(1).get::<1>(), 'b');
    /// ```
    pub fn push(&mut self, record: T) {
        self.storage.push(record);
    }

    /// Appends a default record and returns a handle to it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use layout_vec::{ElementMut, SoaVec};
    /// let mut soa = SoaVec::<(u8, Vec<u8>)>::new();
    /// let mut el = soa.push_default();
    /// el.get_mut::<1>().push(3);
    /// assert_eq!(soa, [(0, vec![3])]);
    /// ```
    pub fn push_default(&mut self) -> ElemMut<'_, T, L>
    where
        T: Default,
    {
        self.storage.push(T::default());
        let last = self.len() - 1;
        self.idx_mut(last)
    }

    /// Removes the last element and returns it, or `None` if empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use layout_vec::{record_vec, SoaVec};
    /// let mut soa: SoaVec<_> = record_vec![(1, 'a'), (2, 'b')];
    /// assert_eq!(soa.pop(), Some((2, 'b')));
    /// assert_eq!(soa.pop(), Some((1, 'a')));
    /// assert_eq!(soa.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        self.storage.pop()
    }

    /// Shortens the container to the first `len` elements and drops the
    /// rest. Has no effect if `len` is not less than the current length.
    pub fn truncate(&mut self, len: usize) {
        self.storage.truncate(len);
    }

    /// Drops every element. The capacity is kept.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Resizes the container in place so that its length equals `new_len`,
    /// filling new slots with clones of `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use layout_vec::{record_vec, AosVec};
    /// let mut aos: AosVec<_> = record_vec![(1,), (2,)];
    /// aos.resize(4, (0,));
    /// assert_eq!(aos, [(1,), (2,), (0,), (0,)]);
    /// aos.resize(1, (0,));
    /// assert_eq!(aos, [(1,)]);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: CloneFields,
    {
        let len = self.len();
        if new_len > len {
            self.extend_with(new_len - len, value);
        } else {
            self.truncate(new_len);
        }
    }

    /// Assigns a clone of `value` to every element, field by field.
    ///
    /// # Examples
    ///
    /// ```
    /// # use layout_vec::{record_vec, SoaVec};
    /// let mut soa: SoaVec<_> = record_vec![(1, 'a'), (2, 'b')];
    /// soa.fill((0, 'z'));
    /// assert_eq!(soa, [(0, 'z'), (0, 'z')]);
    /// ```
    pub fn fill(&mut self, value: T)
    where
        T: CloneFields,
    {
        for mut el in self.iter_mut() {
            T::clone_fields_into(el.fields_mut(), value.borrow_fields());
        }
    }

    fn extend_with(&mut self, n: usize, value: T)
    where
        T: CloneFields,
    {
        if n == 0 {
            return;
        }
        self.reserve(n);
        for _ in 1..n {
            self.storage.push(T::clone_fields(value.borrow_fields()));
        }
        self.storage.push(value);
    }

    /// Swaps two elements. Under [`Soa`] this swaps each column in turn;
    /// under [`Aos`] it swaps the whole records.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use layout_vec::{record_vec, SoaVec};
    /// let mut soa: SoaVec<_> = record_vec![(0, 'a'), (1, 'b'), (2, 'c')];
    /// soa.swap(0, 2);
    /// assert_eq!(soa, [(2, 'c'), (1, 'b'), (0, 'a')]);
    /// ```
    pub fn swap(&mut self, a: usize, b: usize) {
        self.storage.swap(a, b);
    }

    /// Puts `record` in place of the element at `index` and returns the
    /// previous value.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn replace(&mut self, index: usize, record: T) -> T {
        self.idx_mut(index).replace(record)
    }

    /// Overwrites the element at `dst` with a field-wise clone of the
    /// element at `src`. Does nothing beyond the bounds check if they are
    /// the same.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use layout_vec::{record_vec, SoaVec};
    /// let mut soa: SoaVec<_> = record_vec![(1, String::from("a")), (2, String::from("b"))];
    /// soa.clone_element(1, 0);
    /// assert_eq!(soa, [(2, String::from("b")), (2, String::from("b"))]);
    /// ```
    pub fn clone_element(&mut self, src: usize, dst: usize)
    where
        T: CloneFields,
    {
        if src == dst {
            self.bounds_check(src);
            return;
        }
        let (src, mut dst) = self.get_pair_mut(src, dst);
        dst.assign_from(&src);
    }

    /// Moves the element at `src` into `dst`, field by field. The slot at
    /// `src` is left holding default field values.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use layout_vec::{record_vec, AosVec};
    /// let mut aos: AosVec<_> = record_vec![(1, vec![1]), (2, vec![2, 2])];
    /// aos.move_element(1, 0);
    /// assert_eq!(aos, [(2, vec![2, 2]), (0, vec![])]);
    /// ```
    pub fn move_element(&mut self, src: usize, dst: usize)
    where
        T: TakeFields,
    {
        if src == dst {
            self.bounds_check(src);
            return;
        }
        let (src, mut dst) = self.get_pair_mut(src, dst);
        dst.assign_moving(src.moving());
    }

    fn bounds_check(&self, index: usize) {
        if index >= self.len() {
            panic!("index out of bounds");
        }
    }

    /// Returns a handle to the element at `index`, or `None` if out of
    /// bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use layout_vec::{record_vec, ElementRef, SoaVec};
    /// let soa: SoaVec<_> = record_vec![(10, 'a'), (40, 'b'), (30, 'c')];
    /// assert_eq!(soa.get(1).map(|el| *el.get::<0>()), Some(40));
    /// assert!(soa.get(3).is_none());
    /// ```
    pub fn get(&self, index: usize) -> Option<ElemRef<'_, T, L>> {
        if index < self.len() {
            // SAFETY: The index is in bounds and the shared borrow of self
            // keeps writes out.
            Some(unsafe { <Backend<T, L> as Storage<T>>::ref_at(self.storage.as_ptr(), index) })
        } else {
            None
        }
    }

    /// Returns a mutable handle to the element at `index`, or `None` if out
    /// of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<ElemMut<'_, T, L>> {
        if index < self.len() {
            // SAFETY: The index is in bounds and the mutable borrow of self
            // is exclusive.
            Some(unsafe { <Backend<T, L> as Storage<T>>::mut_at(self.storage.as_mut_ptr(), index) })
        } else {
            None
        }
    }

    /// Returns a handle to the element at `index`.
    ///
    /// This is what `Index` would provide if it could return a proxy.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn idx(&self, index: usize) -> ElemRef<'_, T, L> {
        match self.get(index) {
            Some(el) => el,
            None => panic!("index out of bounds"),
        }
    }

    /// Returns a mutable handle to the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn idx_mut(&mut self, index: usize) -> ElemMut<'_, T, L> {
        match self.get_mut(index) {
            Some(el) => el,
            None => panic!("index out of bounds"),
        }
    }

    /// Returns a handle to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len`.
    pub unsafe fn get_unchecked(&self, index: usize) -> ElemRef<'_, T, L> {
        debug_assert!(index < self.len(), "index out of bounds");
        // SAFETY: Caller ensures the index is in bounds
        unsafe { <Backend<T, L> as Storage<T>>::ref_at(self.storage.as_ptr(), index) }
    }

    /// Returns a mutable handle to the element at `index` without bounds
    /// checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len`.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> ElemMut<'_, T, L> {
        debug_assert!(index < self.len(), "index out of bounds");
        // SAFETY: Caller ensures the index is in bounds
        unsafe { <Backend<T, L> as Storage<T>>::mut_at(self.storage.as_mut_ptr(), index) }
    }

    /// Returns the first element, or `None` if empty.
    pub fn first(&self) -> Option<ElemRef<'_, T, L>> {
        self.get(0)
    }

    /// Returns the last element, or `None` if empty.
    pub fn last(&self) -> Option<ElemRef<'_, T, L>> {
        self.get(self.len().checked_sub(1)?)
    }

    /// Returns the first element mutably, or `None` if empty.
    pub fn first_mut(&mut self) -> Option<ElemMut<'_, T, L>> {
        self.get_mut(0)
    }

    /// Returns the last element mutably, or `None` if empty.
    pub fn last_mut(&mut self) -> Option<ElemMut<'_, T, L>> {
        let last = self.len().checked_sub(1)?;
        self.get_mut(last)
    }

    /// Returns mutable handles to two distinct elements at once.
    ///
    /// # Panics
    ///
    /// Panics if `a == b` or if either index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use layout_vec::{record_vec, ElementMut, SoaVec};
    /// let mut soa: SoaVec<_> = record_vec![(1, 'a'), (2, 'b')];
    /// let (mut a, mut b) = soa.get_pair_mut(0, 1);
    /// a.swap_with(&mut b);
    /// assert_eq!(soa, [(2, 'b'), (1, 'a')]);
    /// ```
    pub fn get_pair_mut(&mut self, a: usize, b: usize) -> (ElemMut<'_, T, L>, ElemMut<'_, T, L>) {
        if a == b {
            panic!("indices must be distinct");
        }
        if a >= self.len() || b >= self.len() {
            panic!("index out of bounds");
        }
        let ptr = self.storage.as_mut_ptr();
        // SAFETY: Both indices are in bounds and distinct, and the mutable
        // borrow of self is exclusive.
        unsafe {
            (
                <Backend<T, L> as Storage<T>>::mut_at(ptr, a),
                <Backend<T, L> as Storage<T>>::mut_at(ptr, b),
            )
        }
    }

    /// Returns an iterator over the elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use layout_vec::{record_vec, ElementRef, AosVec};
    /// let aos: AosVec<_> = record_vec![(1, 'a'), (2, 'b'), (4, 'c')];
    /// let total: i32 = aos.iter().map(|el| el.get::<0>()).sum();
    /// assert_eq!(total, 7);
    /// ```
    pub fn iter(&self) -> Iter<'_, T, L> {
        Iter::new(self, 0..self.len())
    }

    /// Returns an iterator over the elements that allows modifying each one.
    pub fn iter_mut(&mut self) -> IterMut<'_, T, L> {
        IterMut::new(self)
    }

    /// A cursor at the first element.
    pub fn begin(&self) -> Cursor<'_, T, L> {
        Cursor::new(self, 0)
    }

    /// A cursor one past the last element.
    pub fn end(&self) -> Cursor<'_, T, L> {
        Cursor::new(self, self.len())
    }

    /// A cursor at `index`, which may equal `len`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn cursor(&self, index: usize) -> Cursor<'_, T, L> {
        if index > self.len() {
            panic!("index out of bounds");
        }
        Cursor::new(self, index)
    }

    /// Copies the elements into a new container with layout `L2`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use layout_vec::{record_vec, Aos, SoaVec};
    /// let soa: SoaVec<_> = record_vec![(1, 'a'), (2, 'b')];
    /// let aos = soa.to_layout::<Aos>();
    /// assert_eq!(aos.as_slice(), [(1, 'a'), (2, 'b')]);
    /// assert_eq!(aos, soa);
    /// ```
    pub fn to_layout<L2>(&self) -> RecordVec<T, L2>
    where
        T: CloneFields,
        L2: Layout,
    {
        let mut out = RecordVec::with_capacity(self.len());
        out.extend(self.iter().map(|el| el.cloned()));
        out
    }

    /// Moves the elements into a new container with layout `L2`.
    pub fn into_layout<L2>(self) -> RecordVec<T, L2>
    where
        L2: Layout,
    {
        self.into_iter().collect()
    }

    pub(crate) fn eq_records(&self, other: &[T]) -> bool
    where
        for<'a> T::Ref<'a>: PartialEq,
    {
        if self.len() != other.len() {
            return false;
        }
        for (a, b) in self.iter().zip(other) {
            if a.fields() != b.borrow_fields() {
                return false;
            }
        }
        true
    }
}

impl<T> RecordVec<T, Soa>
where
    T: Record,
{
    /// Field `K` of every element as one contiguous slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use layout_vec::{record_vec, SoaVec};
    /// let soa: SoaVec<_> = record_vec![(1, 'a'), (2, 'b')];
    /// assert_eq!(soa.column::<1>(), ['a', 'b']);
    /// ```
    pub fn column<const K: usize>(&self) -> &[<T as Field<K>>::Type]
    where
        T: Field<K>,
    {
        self.storage.column::<K>()
    }

    /// Field `K` of every element as one contiguous mutable slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use layout_vec::{record_vec, SoaVec};
    /// let mut soa: SoaVec<_> = record_vec![(3, 'a'), (1, 'b'), (2, 'c')];
    /// soa.column_mut::<0>().sort();
    /// assert_eq!(soa, [(1, 'a'), (2, 'b'), (3, 'c')]);
    /// ```
    pub fn column_mut<const K: usize>(&mut self) -> &mut [<T as Field<K>>::Type]
    where
        T: Field<K>,
    {
        self.storage.column_mut::<K>()
    }
}

impl<T> RecordVec<T, Aos>
where
    T: Record,
{
    /// The elements as a slice of whole records.
    pub fn as_slice(&self) -> &[T] {
        &self.storage.0
    }

    /// The elements as a mutable slice of whole records.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.storage.0
    }

    /// Unwraps the underlying `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.storage.0
    }
}

impl<T> From<Vec<T>> for RecordVec<T, Aos>
where
    T: Record,
{
    fn from(vec: Vec<T>) -> Self {
        Self {
            storage: crate::AosStorage(vec),
        }
    }
}

impl<T, L, const N: usize> From<[T; N]> for RecordVec<T, L>
where
    T: Record,
    L: Layout,
{
    fn from(records: [T; N]) -> Self {
        records.into_iter().collect()
    }
}

impl<T, L> Default for RecordVec<T, L>
where
    T: Record,
    L: Layout,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, L> Clone for RecordVec<T, L>
where
    T: CloneFields,
    L: Layout,
{
    fn clone(&self) -> Self {
        self.to_layout()
    }
}

impl<T, L> Debug for RecordVec<T, L>
where
    T: Record,
    L: Layout,
    for<'a> T::Ref<'a>: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|el| el.fields()))
            .finish()
    }
}

impl<T, L, L2> PartialEq<RecordVec<T, L2>> for RecordVec<T, L>
where
    T: Record,
    L: Layout,
    L2: Layout,
    for<'a> T::Ref<'a>: PartialEq,
{
    fn eq(&self, other: &RecordVec<T, L2>) -> bool {
        if self.len() != other.len() {
            return false;
        }
        for (a, b) in self.iter().zip(other) {
            if a.fields() != b.fields() {
                return false;
            }
        }
        true
    }
}

impl<T, L> Eq for RecordVec<T, L>
where
    T: Record,
    L: Layout,
    for<'a> T::Ref<'a>: Eq,
{
}

impl<T, L> Hash for RecordVec<T, L>
where
    T: Record,
    L: Layout,
    for<'a> T::Ref<'a>: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for el in self {
            el.fields().hash(state);
        }
    }
}

impl<T, L> Extend<T> for RecordVec<T, L>
where
    T: Record,
    L: Layout,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for record in iter {
            self.storage.push(record);
        }
    }
}

impl<T, L> FromIterator<T> for RecordVec<T, L>
where
    T: Record,
    L: Layout,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<T, L> IntoIterator for RecordVec<T, L>
where
    T: Record,
    L: Layout,
{
    type Item = T;
    type IntoIter = IntoIter<T, L>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.storage.into_iter(),
        }
    }
}

impl<'a, T, L> IntoIterator for &'a RecordVec<T, L>
where
    T: Record,
    L: Layout,
{
    type Item = ElemRef<'a, T, L>;
    type IntoIter = Iter<'a, T, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, L> IntoIterator for &'a mut RecordVec<T, L>
where
    T: Record,
    L: Layout,
{
    type Item = ElemMut<'a, T, L>;
    type IntoIter = IterMut<'a, T, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
