use crate::{AsFields, AsRecord, CloneFields, Field, Record, TakeFields};
use std::mem;

/// A shared handle to one element of a [`RecordVec`], whatever its layout.
///
/// For [`Aos`] this is a plain `&T`. For [`Soa`] it is a [`SoaRef`] proxy
/// that knows its index and the column pointers, because no contiguous `T`
/// exists in memory. Code written against this trait works with both.
///
/// The handle is `Copy` and hands out references that live as long as the
/// borrow of the container, not as long as the handle.
///
/// [`RecordVec`]: crate::RecordVec
/// [`Aos`]: crate::Aos
/// [`Soa`]: crate::Soa
/// [`SoaRef`]: crate::SoaRef
pub trait ElementRef<'a>: Copy {
    /// The record type of the element.
    type Record: Record + 'a;

    /// Borrows every field of the element.
    fn fields(self) -> <Self::Record as Record>::Ref<'a>;

    /// Borrows field `K`.
    fn get<const K: usize>(self) -> &'a <Self::Record as Field<K>>::Type
    where
        Self::Record: Field<K>;

    /// Copies the element out as a record value, cloning each field in
    /// order.
    fn cloned(self) -> Self::Record
    where
        Self::Record: CloneFields,
    {
        <Self::Record as CloneFields>::clone_fields(self.fields())
    }

    /// Copies the element out and converts it to a user type.
    fn cloned_as<S>(self) -> S
    where
        S: AsRecord<Record = Self::Record>,
        Self::Record: CloneFields,
    {
        S::from_record(self.cloned())
    }
}

impl<'a, T> ElementRef<'a> for &'a T
where
    T: 'a + Record,
{
    type Record = T;

    #[inline]
    fn fields(self) -> T::Ref<'a> {
        self.borrow_fields()
    }

    #[inline]
    fn get<const K: usize>(self) -> &'a <T as Field<K>>::Type
    where
        T: Field<K>,
    {
        Field::<K>::field(self)
    }
}

/// A mutable handle to one element of a [`RecordVec`], whatever its layout.
///
/// For [`Aos`] this is a plain `&mut T` and for [`Soa`] a [`SoaMut`] proxy.
/// Whole-record operations are carried out field by field in field order,
/// which is what makes them possible on a structure-of-arrays element. They
/// are **not** atomic: if a field's `clone` panics partway through
/// [`assign_from`], the fields before it have already been overwritten.
///
/// ```
/// use layout_vec::{Aos, ElementMut, ElementRef, Layout, RecordVec, Soa};
///
/// fn bump<L: Layout>(vec: &mut RecordVec<(u32, String), L>) {
///     let mut first = vec.idx_mut(0);
///     *first.get_mut::<0>() += 1;
///     first.get_mut::<1>().push('!');
/// }
///
/// let mut aos = RecordVec::<_, Aos>::new();
/// let mut soa = RecordVec::<_, Soa>::new();
/// aos.push((1, "hi".to_string()));
/// soa.push((1, "hi".to_string()));
/// bump(&mut aos);
/// bump(&mut soa);
/// assert_eq!(aos, soa);
/// assert_eq!(soa.idx(0).cloned(), (2, "hi!".to_string()));
/// ```
///
/// [`RecordVec`]: crate::RecordVec
/// [`Aos`]: crate::Aos
/// [`Soa`]: crate::Soa
/// [`SoaMut`]: crate::SoaMut
/// [`assign_from`]: ElementMut::assign_from
pub trait ElementMut: AsFields + Sized {
    /// Mutably borrows every field of the element.
    fn fields_mut(&mut self) -> <Self::Record as Record>::Mut<'_>;

    /// Borrows field `K`.
    fn get<const K: usize>(&self) -> &<Self::Record as Field<K>>::Type
    where
        Self::Record: Field<K>;

    /// Mutably borrows field `K`.
    fn get_mut<const K: usize>(&mut self) -> &mut <Self::Record as Field<K>>::Type
    where
        Self::Record: Field<K>;

    /// Overwrites the element with `record`, moving each field in.
    fn set(&mut self, record: Self::Record) {
        <Self::Record as Record>::assign_fields(self.fields_mut(), record);
    }

    /// Puts `record` in place of the element and returns the previous value.
    fn replace(&mut self, mut record: Self::Record) -> Self::Record {
        <Self::Record as Record>::swap_fields(self.fields_mut(), record.borrow_fields_mut());
        record
    }

    /// Overwrites the element with a field-wise clone of `src`, which may be
    /// any other element of the same shape or a record value.
    fn assign_from<S>(&mut self, src: &S)
    where
        S: AsFields<Record = Self::Record>,
        Self::Record: CloneFields,
    {
        <Self::Record as CloneFields>::clone_fields_into(self.fields_mut(), src.as_fields());
    }

    /// Moves every field of `src` into the element. `src` is left holding
    /// default field values.
    fn assign_moving<E>(&mut self, src: Moving<E>)
    where
        E: ElementMut<Record = Self::Record>,
        Self::Record: TakeFields,
    {
        let mut src = src.into_inner();
        <Self::Record as TakeFields>::take_fields_into(self.fields_mut(), src.fields_mut());
    }

    /// Swaps every field with `other`, which may live in the same or another
    /// container of either layout.
    fn swap_with<E>(&mut self, other: &mut E)
    where
        E: ElementMut<Record = Self::Record>,
    {
        <Self::Record as Record>::swap_fields(self.fields_mut(), other.fields_mut());
    }

    /// Copies the element out as a record value.
    fn cloned(&self) -> Self::Record
    where
        Self::Record: CloneFields,
    {
        <Self::Record as CloneFields>::clone_fields(self.as_fields())
    }

    /// Copies the element out and converts it to a user type.
    fn cloned_as<S>(&self) -> S
    where
        S: AsRecord<Record = Self::Record>,
        Self::Record: CloneFields,
    {
        S::from_record(self.cloned())
    }

    /// Marks the element as movable. See [`Moving`].
    fn moving(self) -> Moving<Self> {
        Moving(self)
    }
}

impl<T> ElementMut for &mut T
where
    T: Record,
{
    #[inline]
    fn fields_mut(&mut self) -> T::Mut<'_> {
        (**self).borrow_fields_mut()
    }

    #[inline]
    fn get<const K: usize>(&self) -> &<T as Field<K>>::Type
    where
        T: Field<K>,
    {
        Field::<K>::field(&**self)
    }

    #[inline]
    fn get_mut<const K: usize>(&mut self) -> &mut <T as Field<K>>::Type
    where
        T: Field<K>,
    {
        Field::<K>::field_mut(&mut **self)
    }
}

/// A mutable element that has been explicitly marked as movable, created by
/// [`ElementMut::moving`].
///
/// Converting it to a record moves each field out instead of cloning it. The
/// source slots keep their place in the container and read back as the
/// field types' default values, so a `Vec` field becomes empty. This applies
/// to every field, `Copy` ones included: a moved-from `i32` reads back as
/// `0`, not as its old value. Moving therefore requires every field to be
/// [`Default`].
///
/// ```
/// use layout_vec::{ElementMut, ElementRef, SoaVec};
///
/// let mut soa = SoaVec::new();
/// soa.push((3, vec![1, 2, 3]));
/// let moved = soa.idx_mut(0).moving().into_record();
/// assert_eq!(moved, (3, vec![1, 2, 3]));
/// // Both fields are reset, the integer as well as the vector
/// assert_eq!(soa.idx(0).cloned(), (0, vec![]));
/// ```
#[derive(Debug)]
#[must_use = "a moving element does nothing until it is consumed"]
pub struct Moving<E>(E);

impl<E> Moving<E>
where
    E: ElementMut,
{
    /// Unwraps the element without moving anything.
    pub fn into_inner(self) -> E {
        self.0
    }

    /// Moves every field out into a record value.
    pub fn into_record(mut self) -> E::Record
    where
        E::Record: TakeFields,
    {
        <E::Record as TakeFields>::take_fields(self.0.fields_mut())
    }

    /// Moves every field out and converts the result to a user type.
    pub fn into_as<S>(self) -> S
    where
        S: AsRecord<Record = E::Record>,
        E::Record: TakeFields,
    {
        S::from_record(self.into_record())
    }

    /// Moves only field `K` out, leaving its default in place.
    pub fn take<const K: usize>(mut self) -> <E::Record as Field<K>>::Type
    where
        E::Record: Field<K>,
        <E::Record as Field<K>>::Type: Default,
    {
        mem::take(self.0.get_mut::<K>())
    }
}
