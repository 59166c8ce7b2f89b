use crate::{Record, TryReserveError};
use std::{
    alloc::{self, Layout},
    ptr::NonNull,
};

/// The largest record arity the crate implements [`Record`] for.
pub(crate) const MAX_FIELDS: usize = 12;

/// A low-level utility providing the fundamental column operations needed by
/// the structure-of-arrays backend.
///
/// It is a bundle of one pointer per field of [`Columns::Record`], each
/// treated as an array of that field's type. Every column is its own
/// allocation, sized and aligned for its field type.
///
/// # Safety
///
/// Use of this type is inherently unsafe and should be restricted to the
/// implementation of the structure-of-arrays backend. This type will
/// **neither** deallocate its memory **nor** drop its contents when it is
/// dropped.
///
/// In the method documentation, `PREV_CAP` is the capacity passed to the
/// [`Columns::alloc`] call that produced `self`, or 0 for
/// [`Columns::dangling`].
#[doc(hidden)]
pub unsafe trait Columns: Copy {
    /// The record whose fields the columns hold.
    type Record: Record<Columns = Self>;

    /// Creates columns with dangling pointers without allocating memory.
    fn dangling() -> Self;

    /// Allocates room for `capacity` records in every column.
    ///
    /// This is all-or-nothing: if any column fails to allocate, the columns
    /// already allocated by this call are released before the error is
    /// returned. Zero-sized field types get dangling pointers.
    fn alloc(capacity: usize) -> Result<Self, TryReserveError>;

    /// Releases every column.
    ///
    /// # Safety
    ///
    /// The caller must ensure that
    ///
    /// - `capacity == PREV_CAP`
    /// - `capacity > 0`
    /// - no live values remain in the columns, or they have been moved out
    unsafe fn dealloc(self, capacity: usize);

    /// Bitwise-moves the first `count` records of every column into `dst`.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `count` records are initialized in `self`,
    /// that `dst` has room for them, and that the two do not overlap.
    unsafe fn copy_to(self, dst: Self, count: usize);

    /// Writes `record` to slot `index`, field by field, without dropping the
    /// previous contents.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `index < PREV_CAP`.
    unsafe fn write(self, index: usize, record: Self::Record);

    /// Reads the record at `index` out of the columns.
    ///
    /// # Safety
    ///
    /// After calling this method, slot `index` should be treated as
    /// uninitialized. The caller must ensure that `index < len`.
    unsafe fn read(self, index: usize) -> Self::Record;

    /// Borrows every field of the record at `index`.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `index < len` and that the returned
    /// lifetime respects the aliasing rules.
    unsafe fn get_ref<'a>(self, index: usize) -> <Self::Record as Record>::Ref<'a>
    where
        Self::Record: 'a;

    /// Mutably borrows every field of the record at `index`.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `index < len` and that the returned
    /// lifetime respects the aliasing rules.
    unsafe fn get_mut<'a>(self, index: usize) -> <Self::Record as Record>::Mut<'a>
    where
        Self::Record: 'a;

    /// Drops the records in `start..end` in place, column by column.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `start <= end <= len` and treat the range
    /// as uninitialized afterwards.
    unsafe fn drop_range(self, start: usize, end: usize);

    /// Swaps the records at `a` and `b` field by field.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `a < len` and `b < len`.
    unsafe fn swap(self, a: usize, b: usize);
}

/// Tracks the columns allocated so far by a single [`Columns::alloc`] call
/// and releases them if the call bails out early.
pub(crate) struct PartialAlloc {
    done: [Option<(NonNull<u8>, Layout)>; MAX_FIELDS],
    len: usize,
}

impl PartialAlloc {
    pub(crate) const fn new() -> Self {
        Self {
            done: [None; MAX_FIELDS],
            len: 0,
        }
    }

    /// Allocates one column with room for `capacity` values of `F`.
    pub(crate) fn column<F>(&mut self, capacity: usize) -> Result<NonNull<F>, TryReserveError> {
        let layout =
            Layout::array::<F>(capacity).map_err(|_| TryReserveError::CapacityOverflow)?;
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }

        // SAFETY: The layout has nonzero size and Layout::array ensures it
        // does not overflow isize.
        let ptr = unsafe { alloc::alloc(layout) };
        let Some(ptr) = NonNull::new(ptr) else {
            tracing::debug!(
                size = layout.size(),
                align = layout.align(),
                allocated_columns = self.len,
                "column allocation failed"
            );
            return Err(TryReserveError::AllocError { layout });
        };

        self.done[self.len] = Some((ptr, layout));
        self.len += 1;
        Ok(ptr.cast())
    }

    /// Keeps every column allocated so far.
    pub(crate) fn commit(mut self) {
        self.len = 0;
    }
}

impl Drop for PartialAlloc {
    fn drop(&mut self) {
        for (ptr, layout) in self.done[..self.len].iter().flatten() {
            // SAFETY: Each entry was allocated with exactly this layout by
            // `column` and has not been handed out to a committed bundle.
            unsafe { alloc::dealloc(ptr.as_ptr(), *layout) };
        }
    }
}

/// Releases a column allocated by [`PartialAlloc::column`].
///
/// # Safety
///
/// `ptr` must come from a committed allocation with the same `capacity`.
pub(crate) unsafe fn dealloc_column<F>(ptr: NonNull<F>, capacity: usize) {
    // SAFETY: We already constructed this layout for a previous allocation
    let layout = unsafe { Layout::array::<F>(capacity).unwrap_unchecked() };
    if layout.size() > 0 {
        // SAFETY: Caller ensures ptr was allocated with this layout
        unsafe { alloc::dealloc(ptr.as_ptr().cast(), layout) };
    }
}
