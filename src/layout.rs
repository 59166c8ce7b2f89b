use crate::{AosStorage, AsFields, ElementMut, ElementRef, Record, SoaStorage, TryReserveError};
use std::{fmt::Debug, iter::FusedIterator};

mod sealed {
    pub trait Sealed {}
}

/// Selects the memory layout of a [`RecordVec`] at compile time.
///
/// There are exactly two layouts, [`Aos`] and [`Soa`]. The choice is a type
/// parameter, so there is no runtime dispatch and generic code written
/// against `L: Layout` is monomorphized for each.
///
/// [`RecordVec`]: crate::RecordVec
pub trait Layout: sealed::Sealed + Debug + Default + Copy + 'static {
    /// The backend that stores records of type `T` in this layout.
    type Storage<T: Record>: Storage<T>;
}

/// Array of structures: one `Vec<T>`, element access through `&T` and
/// `&mut T`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Aos;

/// Structure of arrays: one column per field, element access through
/// [`SoaRef`] and [`SoaMut`] proxies.
///
/// [`SoaRef`]: crate::SoaRef
/// [`SoaMut`]: crate::SoaMut
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Soa;

impl sealed::Sealed for Aos {}
impl sealed::Sealed for Soa {}

impl Layout for Aos {
    type Storage<T: Record> = AosStorage<T>;
}

impl Layout for Soa {
    type Storage<T: Record> = SoaStorage<T>;
}

/// The operations a layout backend provides to [`RecordVec`].
///
/// Element access goes through [`Storage::Ptr`], a copyable base pointer,
/// so that several elements can be handed out from one mutable borrow of the
/// backend, as iterators and [`RecordVec::get_pair_mut`] do.
///
/// [`RecordVec`]: crate::RecordVec
/// [`RecordVec::get_pair_mut`]: crate::RecordVec::get_pair_mut
pub trait Storage<T: Record>: Sized {
    /// Shared element handle.
    type Ref<'a>: ElementRef<'a, Record = T> + AsFields<Record = T>
    where
        Self: 'a,
        T: 'a;

    /// Mutable element handle.
    type Mut<'a>: ElementMut<Record = T>
    where
        Self: 'a,
        T: 'a;

    /// Base pointer for element access.
    #[doc(hidden)]
    type Ptr: Copy;

    /// By-value iterator.
    type IntoIter: DoubleEndedIterator<Item = T> + ExactSizeIterator + FusedIterator;

    /// An empty backend that has not allocated.
    fn new() -> Self;

    /// Number of live records.
    fn len(&self) -> usize;

    /// Number of records that fit without reallocating.
    fn capacity(&self) -> usize;

    /// Makes room for at least `additional` more records. On error nothing
    /// changes.
    fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError>;

    /// Appends a record, growing if needed.
    fn push(&mut self, record: T);

    /// Removes and returns the last record.
    fn pop(&mut self) -> Option<T>;

    /// Drops every record from `len` onwards. Does nothing if `len` is not
    /// less than the current length.
    fn truncate(&mut self, len: usize);

    /// Swaps two whole records.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` is out of bounds.
    fn swap(&mut self, a: usize, b: usize);

    #[doc(hidden)]
    fn as_ptr(&self) -> Self::Ptr;

    #[doc(hidden)]
    fn as_mut_ptr(&mut self) -> Self::Ptr;

    /// # Safety
    ///
    /// `ptr` must come from [`Storage::as_ptr`] or [`Storage::as_mut_ptr`],
    /// `index` must be in bounds, and no mutable handle to the same index may
    /// be live during `'a`.
    #[doc(hidden)]
    unsafe fn ref_at<'a>(ptr: Self::Ptr, index: usize) -> Self::Ref<'a>
    where
        Self: 'a,
        T: 'a;

    /// # Safety
    ///
    /// `ptr` must come from [`Storage::as_mut_ptr`], `index` must be in
    /// bounds, and no other handle to the same index may be live during `'a`.
    #[doc(hidden)]
    unsafe fn mut_at<'a>(ptr: Self::Ptr, index: usize) -> Self::Mut<'a>
    where
        Self: 'a,
        T: 'a;

    /// Consumes the backend into a by-value iterator.
    fn into_iter(self) -> Self::IntoIter;
}

/// The shared element handle of a [`RecordVec<T, L>`]: `&T` for [`Aos`],
/// [`SoaRef<T>`] for [`Soa`].
///
/// [`RecordVec<T, L>`]: crate::RecordVec
/// [`SoaRef<T>`]: crate::SoaRef
pub type ElemRef<'a, T, L> = <<L as Layout>::Storage<T> as Storage<T>>::Ref<'a>;

/// The mutable element handle of a [`RecordVec<T, L>`]: `&mut T` for
/// [`Aos`], [`SoaMut<T>`] for [`Soa`].
///
/// # Note
///
/// In code generic over `L`, the compiler cannot see that the handle has no
/// drop glue, so a handle bound to a variable keeps the container borrowed
/// until the end of its scope. Use the handle in a single expression, or put
/// it in an inner block or `drop` it before touching the container again:
///
/// ```
/// use layout_vec::{ElementMut, Layout, RecordVec, Soa};
///
/// fn bump_first<L: Layout>(vec: &mut RecordVec<(u32,), L>) -> usize {
///     let mut first = vec.idx_mut(0);
///     *first.get_mut::<0>() += 1;
///     drop(first);
///     vec.len()
/// }
///
/// let mut soa = RecordVec::<_, Soa>::from([(1u32,)]);
/// assert_eq!(bump_first(&mut soa), 1);
/// assert_eq!(soa, [(2,)]);
/// ```
///
/// [`RecordVec<T, L>`]: crate::RecordVec
/// [`SoaMut<T>`]: crate::SoaMut
pub type ElemMut<'a, T, L> = <<L as Layout>::Storage<T> as Storage<T>>::Mut<'a>;
