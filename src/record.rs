use crate::Columns;
use std::ptr::NonNull;

#[diagnostic::on_unimplemented(
    label = "record type",
    note = "Record is implemented for tuples of 1 to 12 fields"
)]
/// A fixed-shape heterogeneous record that [`RecordVec`] can store in either
/// layout.
///
/// Records are tuples. The field count and field types are part of the type,
/// so assigning or swapping elements of different shapes does not compile.
/// Use [`AsRecord`] to move user structs in and out of a container.
///
/// # Safety
///
/// [`Record::Columns`] must describe one column per field, in field order,
/// and [`Record::Ref`]/[`Record::Mut`] must be tuples of references to the
/// same fields. This trait is implemented by the crate for tuples and should
/// not be implemented elsewhere.
///
/// [`RecordVec`]: crate::RecordVec
pub unsafe trait Record: Sized {
    /// The number of fields.
    const FIELDS: usize;

    /// One raw column pointer per field, used by the structure-of-arrays
    /// backend.
    type Columns: Columns<Record = Self>;

    /// For each field with type `F`, this type has a field with type `&F`.
    type Ref<'a>: Copy
    where
        Self: 'a;

    /// For each field with type `F`, this type has a field with type `&mut F`.
    type Mut<'a>
    where
        Self: 'a;

    /// Borrows every field.
    fn borrow_fields(&self) -> Self::Ref<'_>;

    /// Mutably borrows every field.
    fn borrow_fields_mut(&mut self) -> Self::Mut<'_>;

    /// Moves each field of `src` into `dst`, in field order.
    fn assign_fields(dst: Self::Mut<'_>, src: Self);

    /// Swaps `a` and `b` field by field.
    fn swap_fields(a: Self::Mut<'_>, b: Self::Mut<'_>);
}

/// Positional access to field `K` of a [`Record`].
pub trait Field<const K: usize>: Record {
    /// The type of field `K`.
    type Type;

    /// Borrows field `K`.
    fn field(&self) -> &Self::Type;

    /// Mutably borrows field `K`.
    fn field_mut(&mut self) -> &mut Self::Type;

    #[doc(hidden)]
    fn column(columns: Self::Columns) -> NonNull<Self::Type>;
}

/// Field-wise cloning, available when every field is [`Clone`].
pub trait CloneFields: Record {
    /// Builds a record by cloning each field in order.
    fn clone_fields(src: Self::Ref<'_>) -> Self;

    /// Clones each field of `src` into `dst` in order.
    ///
    /// This is not atomic. If cloning field `j` panics, fields before `j`
    /// have already been updated and fields after it have not.
    fn clone_fields_into(dst: Self::Mut<'_>, src: Self::Ref<'_>);
}

/// Field-wise moving, available when every field is [`Default`].
///
/// A moved-from field is left holding `Default::default()`, so an emptied
/// `Vec` field reads back as empty.
pub trait TakeFields: Record {
    /// Builds a record by taking each field in order.
    fn take_fields(src: Self::Mut<'_>) -> Self;

    /// Takes each field of `src` into `dst` in order. Not atomic, see
    /// [`CloneFields::clone_fields_into`].
    fn take_fields_into(dst: Self::Mut<'_>, src: Self::Mut<'_>);
}

/// Anything that can lend out the fields of a record of type
/// [`AsFields::Record`]: the record itself, references to it, and the
/// structure-of-arrays proxies.
pub trait AsFields {
    /// The record type being viewed.
    type Record: Record;

    /// Borrows every field of the viewed record.
    fn as_fields(&self) -> <Self::Record as Record>::Ref<'_>;
}

impl<T> AsFields for &T
where
    T: Record,
{
    type Record = T;

    fn as_fields(&self) -> T::Ref<'_> {
        Record::borrow_fields(*self)
    }
}

impl<T> AsFields for &mut T
where
    T: Record,
{
    type Record = T;

    fn as_fields(&self) -> T::Ref<'_> {
        Record::borrow_fields(&**self)
    }
}

/// Conversion between a user type and the tuple [`Record`] holding its
/// fields in declaration order.
///
/// This is usually derived:
///
/// ```
/// use layout_vec::{AsRecord, ElementRef, RecordVec, Soa};
///
/// #[derive(AsRecord, Debug, Clone, PartialEq)]
/// struct Particle {
///     id: u32,
///     mass: f64,
/// }
///
/// let mut soa = RecordVec::<_, Soa>::new();
/// soa.push(Particle { id: 1, mass: 2.5 }.into_record());
/// let particle: Particle = soa.idx(0).cloned_as();
/// assert_eq!(particle, Particle { id: 1, mass: 2.5 });
/// ```
pub trait AsRecord: Sized {
    /// The tuple of this type's fields.
    type Record: Record;

    /// Splits `self` into its fields.
    fn into_record(self) -> Self::Record;

    /// Rebuilds `Self` from its fields.
    fn from_record(record: Self::Record) -> Self;
}
