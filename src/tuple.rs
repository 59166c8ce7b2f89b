//! [`Record`] and friends for tuples of 1 to 12 fields.

use crate::{
    AsFields, CloneFields, Columns, Field, Record, TakeFields, TryReserveError,
    columns::{PartialAlloc, dealloc_column},
};
use std::{mem, ptr, ptr::NonNull};

macro_rules! impl_field {
    ([$($all:ident),+] $i:tt $t:ident) => {
        impl<$($all),+> Field<$i> for ($($all,)+) {
            type Type = $t;

            #[inline]
            fn field(&self) -> &$t {
                &self.$i
            }

            #[inline]
            fn field_mut(&mut self) -> &mut $t {
                &mut self.$i
            }

            #[inline]
            fn column(columns: Self::Columns) -> NonNull<$t> {
                columns.$i
            }
        }
    };
}

macro_rules! impl_record {
    ($n:literal; $all:tt; $($i:tt $t:ident),+) => {
        // SAFETY: Columns, Ref, and Mut each have one entry per field, in
        // field order.
        unsafe impl<$($t),+> Record for ($($t,)+) {
            const FIELDS: usize = $n;
            type Columns = ($(NonNull<$t>,)+);
            type Ref<'a> = ($(&'a $t,)+) where Self: 'a;
            type Mut<'a> = ($(&'a mut $t,)+) where Self: 'a;

            #[inline]
            fn borrow_fields(&self) -> Self::Ref<'_> {
                ($(&self.$i,)+)
            }

            #[inline]
            fn borrow_fields_mut(&mut self) -> Self::Mut<'_> {
                ($(&mut self.$i,)+)
            }

            #[inline]
            fn assign_fields(dst: Self::Mut<'_>, src: Self) {
                $(*dst.$i = src.$i;)+
            }

            #[inline]
            fn swap_fields(a: Self::Mut<'_>, b: Self::Mut<'_>) {
                $(mem::swap(a.$i, b.$i);)+
            }
        }

        $(impl_field!($all $i $t);)+

        impl<$($t),+> AsFields for ($($t,)+) {
            type Record = Self;

            #[inline]
            fn as_fields(&self) -> <Self as Record>::Ref<'_> {
                Record::borrow_fields(self)
            }
        }

        impl<$($t: Clone),+> CloneFields for ($($t,)+) {
            #[inline]
            fn clone_fields(src: Self::Ref<'_>) -> Self {
                ($(src.$i.clone(),)+)
            }

            #[inline]
            fn clone_fields_into(dst: Self::Mut<'_>, src: Self::Ref<'_>) {
                $(dst.$i.clone_from(src.$i);)+
            }
        }

        impl<$($t: Default),+> TakeFields for ($($t,)+) {
            #[inline]
            fn take_fields(src: Self::Mut<'_>) -> Self {
                ($(mem::take(src.$i),)+)
            }

            #[inline]
            fn take_fields_into(dst: Self::Mut<'_>, src: Self::Mut<'_>) {
                $(*dst.$i = mem::take(src.$i);)+
            }
        }

        // SAFETY: Every method forwards to the matching pointer operation on
        // each column, and the caller contracts are those of the pointer
        // operations applied to every column at once.
        unsafe impl<$($t),+> Columns for ($(NonNull<$t>,)+) {
            type Record = ($($t,)+);

            #[inline]
            fn dangling() -> Self {
                ($(NonNull::<$t>::dangling(),)+)
            }

            fn alloc(capacity: usize) -> Result<Self, TryReserveError> {
                let mut partial = PartialAlloc::new();
                let columns = ($(partial.column::<$t>(capacity)?,)+);
                partial.commit();
                Ok(columns)
            }

            #[inline]
            unsafe fn dealloc(self, capacity: usize) {
                $(
                // SAFETY: Caller ensures capacity matches the allocation
                unsafe { dealloc_column(self.$i, capacity) };
                )+
            }

            #[inline]
            unsafe fn copy_to(self, dst: Self, count: usize) {
                $(
                // SAFETY: Caller ensures count elements are valid for self
                // and dst and that they do not overlap
                unsafe { self.$i.copy_to_nonoverlapping(dst.$i, count) };
                )+
            }

            #[inline]
            unsafe fn write(self, index: usize, record: Self::Record) {
                $(
                // SAFETY: Caller ensures index is within the allocation
                unsafe { self.$i.add(index).write(record.$i) };
                )+
            }

            #[inline]
            unsafe fn read(self, index: usize) -> Self::Record {
                // SAFETY: Caller ensures index points to an initialized
                // record and treats it as moved-from afterwards
                ($(unsafe { self.$i.add(index).read() },)+)
            }

            #[inline]
            unsafe fn get_ref<'a>(self, index: usize) -> <Self::Record as Record>::Ref<'a>
            where
                Self::Record: 'a,
            {
                // SAFETY: Caller ensures index points to an initialized
                // record and bounds the lifetime
                ($(unsafe { self.$i.add(index).as_ref() },)+)
            }

            #[inline]
            unsafe fn get_mut<'a>(self, index: usize) -> <Self::Record as Record>::Mut<'a>
            where
                Self::Record: 'a,
            {
                // SAFETY: Caller ensures index points to an initialized
                // record and that no other reference to it is live
                ($(unsafe { self.$i.add(index).as_mut() },)+)
            }

            #[inline]
            unsafe fn drop_range(self, start: usize, end: usize) {
                $(
                // SAFETY: Caller ensures start..end is initialized
                unsafe {
                    ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                        self.$i.add(start).as_ptr(),
                        end - start,
                    ))
                };
                )+
            }

            #[inline]
            unsafe fn swap(self, a: usize, b: usize) {
                $(
                // SAFETY: Caller ensures both indices are initialized.
                // ptr::swap allows a == b.
                unsafe { ptr::swap(self.$i.add(a).as_ptr(), self.$i.add(b).as_ptr()) };
                )+
            }
        }
    };
}

impl_record!(1; [A]; 0 A);
impl_record!(2; [A, B]; 0 A, 1 B);
impl_record!(3; [A, B, C]; 0 A, 1 B, 2 C);
impl_record!(4; [A, B, C, D]; 0 A, 1 B, 2 C, 3 D);
impl_record!(5; [A, B, C, D, E]; 0 A, 1 B, 2 C, 3 D, 4 E);
impl_record!(6; [A, B, C, D, E, F]; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_record!(7; [A, B, C, D, E, F, G]; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_record!(8; [A, B, C, D, E, F, G, H]; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);
impl_record!(9; [A, B, C, D, E, F, G, H, I]; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I);
impl_record!(
    10; [A, B, C, D, E, F, G, H, I, J];
    0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J
);
impl_record!(
    11; [A, B, C, D, E, F, G, H, I, J, K];
    0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J, 10 K
);
impl_record!(
    12; [A, B, C, D, E, F, G, H, I, J, K, L];
    0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J, 10 K, 11 L
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_access() {
        let mut record = (1u8, 2.5f64, vec![3]);
        assert_eq!(*Field::<1>::field(&record), 2.5);
        Field::<2>::field_mut(&mut record).push(4);
        assert_eq!(record.2, [3, 4]);
        assert_eq!(<(u8, f64, Vec<i32>) as Record>::FIELDS, 3);
    }

    #[test]
    fn take_leaves_defaults() {
        let mut src = (7, String::from("seven"));
        let taken = <(i32, String)>::take_fields(src.borrow_fields_mut());
        assert_eq!(taken, (7, String::from("seven")));
        assert_eq!(src, (0, String::new()));
    }

    #[test]
    fn alloc_zero_sized_columns() {
        let columns = <(NonNull<()>, NonNull<u32>)>::alloc(8).unwrap();
        assert_eq!(columns.0, NonNull::dangling());
        // SAFETY: Allocated above with the same capacity and holds no values
        unsafe { columns.dealloc(8) };
    }

    #[test]
    fn alloc_overflow() {
        let result = <(NonNull<u64>, NonNull<u8>)>::alloc(usize::MAX / 4);
        assert_eq!(result, Err(TryReserveError::CapacityOverflow));
    }
}
