use crate::{Layout, Record, RecordVec};

macro_rules! uni {
    ($u:ty $(, $($b:tt)+)?) => {
        impl<T, L $(,$($b)+)?> PartialEq<$u> for RecordVec<T, L>
        where
            T: Record,
            L: Layout,
            for<'a> T::Ref<'a>: PartialEq,
        {
            fn eq(&self, other: &$u) -> bool {
                self.eq_records(&other[..])
            }
        }
    };
}

macro_rules! bi {
    ($u:ty $(, $($b:tt)+)?) => {
        uni!($u $(, $($b)+)?);

        impl<T, L $(,$($b)+)?> PartialEq<RecordVec<T, L>> for $u
        where
            T: Record,
            L: Layout,
            for<'a> T::Ref<'a>: PartialEq,
        {
            fn eq(&self, other: &RecordVec<T, L>) -> bool {
                other.eq_records(&self[..])
            }
        }
    };
}

bi!(Vec<T>);
bi!([T]);
bi!(&[T]);
bi!(&mut [T]);
bi!([T; N], const N: usize);
bi!(&[T; N], const N: usize);
