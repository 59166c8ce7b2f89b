use crate::{AsFields, Columns, ElementMut, ElementRef, Field, Record};
use std::{
    fmt::{self, Debug, Formatter},
    marker::PhantomData,
};

/// A shared reference to an element of a structure-of-arrays [`RecordVec`].
///
/// This is the index of the element together with the column pointers. It
/// never materializes a contiguous record; each field is read straight out of
/// its column.
///
/// [`RecordVec`]: crate::RecordVec
pub struct SoaRef<'a, T>
where
    T: 'a + Record,
{
    pub(crate) columns: T::Columns,
    pub(crate) index: usize,
    pub(crate) _marker: PhantomData<&'a T>,
}

/// A mutable reference to an element of a structure-of-arrays [`RecordVec`].
///
/// Writes go straight to the columns. See [`ElementMut`] for the operations
/// it supports.
///
/// [`RecordVec`]: crate::RecordVec
pub struct SoaMut<'a, T>
where
    T: 'a + Record,
{
    pub(crate) columns: T::Columns,
    pub(crate) index: usize,
    pub(crate) _marker: PhantomData<&'a mut T>,
}

impl<'a, T> SoaRef<'a, T>
where
    T: 'a + Record,
{
    /// Creates a proxy for slot `index`.
    ///
    /// # Safety
    ///
    /// `index` must hold an initialized record in `columns` for all of `'a`,
    /// and no mutable access to it may happen during `'a`.
    #[inline]
    pub(crate) unsafe fn new(columns: T::Columns, index: usize) -> Self {
        Self {
            columns,
            index,
            _marker: PhantomData,
        }
    }

    /// The position of the element in its container.
    pub fn index(self) -> usize {
        self.index
    }
}

impl<'a, T> SoaMut<'a, T>
where
    T: 'a + Record,
{
    /// Creates a proxy for slot `index`.
    ///
    /// # Safety
    ///
    /// `index` must hold an initialized record in `columns` for all of `'a`,
    /// and no other access to it may happen during `'a`.
    #[inline]
    pub(crate) unsafe fn new(columns: T::Columns, index: usize) -> Self {
        Self {
            columns,
            index,
            _marker: PhantomData,
        }
    }

    /// The position of the element in its container.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Borrows the element as a shared proxy.
    pub fn as_soa_ref(&self) -> SoaRef<'_, T> {
        // SAFETY: The shared borrow of self keeps writes out
        unsafe { SoaRef::new(self.columns, self.index) }
    }

    /// Converts into a shared proxy for the rest of the borrow.
    pub fn into_soa_ref(self) -> SoaRef<'a, T> {
        // SAFETY: Consuming self gives up mutable access for 'a
        unsafe { SoaRef::new(self.columns, self.index) }
    }

    /// Reborrows the proxy for a shorter lifetime, so that it can be
    /// consumed by [`ElementMut::moving`] and still be used afterwards.
    pub fn reborrow(&mut self) -> SoaMut<'_, T> {
        // SAFETY: The mutable borrow of self keeps the original proxy unused
        unsafe { SoaMut::new(self.columns, self.index) }
    }
}

impl<'a, T> Clone for SoaRef<'a, T>
where
    T: 'a + Record,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for SoaRef<'a, T> where T: 'a + Record {}

impl<'a, T> ElementRef<'a> for SoaRef<'a, T>
where
    T: 'a + Record,
{
    type Record = T;

    #[inline]
    fn fields(self) -> T::Ref<'a> {
        // SAFETY: The index is live for 'a per the constructor contract
        unsafe { self.columns.get_ref(self.index) }
    }

    #[inline]
    fn get<const K: usize>(self) -> &'a <T as Field<K>>::Type
    where
        T: Field<K>,
    {
        // SAFETY: The index is live for 'a per the constructor contract
        unsafe { <T as Field<K>>::column(self.columns).add(self.index).as_ref() }
    }
}

impl<'a, T> ElementMut for SoaMut<'a, T>
where
    T: 'a + Record,
{
    #[inline]
    fn fields_mut(&mut self) -> T::Mut<'_> {
        // SAFETY: The mutable borrow of self is the only access to the slot
        unsafe { self.columns.get_mut(self.index) }
    }

    #[inline]
    fn get<const K: usize>(&self) -> &<T as Field<K>>::Type
    where
        T: Field<K>,
    {
        // SAFETY: The shared borrow of self keeps writes out
        unsafe { <T as Field<K>>::column(self.columns).add(self.index).as_ref() }
    }

    #[inline]
    fn get_mut<const K: usize>(&mut self) -> &mut <T as Field<K>>::Type
    where
        T: Field<K>,
    {
        // SAFETY: The mutable borrow of self is the only access to the slot
        unsafe { <T as Field<K>>::column(self.columns).add(self.index).as_mut() }
    }
}

macro_rules! proxy_impls {
    ($t:ident) => {
        impl<'a, T> AsFields for $t<'a, T>
        where
            T: 'a + Record,
        {
            type Record = T;

            #[inline]
            fn as_fields(&self) -> T::Ref<'_> {
                // SAFETY: The shared borrow of self keeps writes out
                unsafe { self.columns.get_ref(self.index) }
            }
        }

        impl<'a, T> Debug for $t<'a, T>
        where
            T: 'a + Record,
            for<'b> T::Ref<'b>: Debug,
        {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                self.as_fields().fmt(f)
            }
        }

        impl<'a, T, R> PartialEq<R> for $t<'a, T>
        where
            T: 'a + Record,
            R: AsFields<Record = T>,
            for<'b> T::Ref<'b>: PartialEq,
        {
            fn eq(&self, other: &R) -> bool {
                self.as_fields() == other.as_fields()
            }
        }

        impl<'a, T> Eq for $t<'a, T>
        where
            T: 'a + Record,
            for<'b> T::Ref<'b>: Eq,
        {
        }
    };
}

proxy_impls!(SoaRef);
proxy_impls!(SoaMut);

// SAFETY: SoaRef behaves like &T
unsafe impl<'a, T> Send for SoaRef<'a, T> where T: 'a + Record + Sync {}
// SAFETY: SoaRef behaves like &T
unsafe impl<'a, T> Sync for SoaRef<'a, T> where T: 'a + Record + Sync {}
// SAFETY: SoaMut behaves like &mut T
unsafe impl<'a, T> Send for SoaMut<'a, T> where T: 'a + Record + Send {}
// SAFETY: SoaMut behaves like &mut T
unsafe impl<'a, T> Sync for SoaMut<'a, T> where T: 'a + Record + Sync {}

#[cfg(test)]
mod tests {
    use crate::{ElementMut, ElementRef, SoaVec};

    #[test]
    fn proxy_reads_columns() {
        let mut soa = SoaVec::new();
        soa.push((1u8, 'a', 2.5f32));
        soa.push((2u8, 'b', 5.0f32));
        let second = soa.idx(1);
        assert_eq!(second.index(), 1);
        assert_eq!(*second.get::<1>(), 'b');
        assert_eq!(second.fields(), (&2, &'b', &5.0));
        assert_eq!(second, (2u8, 'b', 5.0f32));
        assert_eq!(format!("{second:?}"), "(2, 'b', 5.0)");
    }

    #[test]
    fn proxy_writes_columns() {
        let mut soa = SoaVec::new();
        soa.push((1u32, String::from("one")));
        let mut first = soa.idx_mut(0);
        *first.get_mut::<0>() = 10;
        first.get_mut::<1>().push_str("!!");
        assert_eq!(first.as_soa_ref(), (10u32, String::from("one!!")));
        let old = first.replace((20, String::from("two")));
        assert_eq!(old, (10, String::from("one!!")));
        assert_eq!(soa.column::<0>(), [20]);
        assert_eq!(soa.column::<1>(), ["two"]);
    }

    #[test]
    fn reborrow_then_move() {
        let mut soa = SoaVec::new();
        soa.push((5u8, vec![1, 2]));
        let mut first = soa.idx_mut(0);
        let moved = first.reborrow().moving().into_record();
        assert_eq!(moved, (5, vec![1, 2]));
        assert_eq!(first, (0u8, Vec::<i32>::new()));
    }
}
