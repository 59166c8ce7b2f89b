/// Creates a [`RecordVec`] containing the arguments.
///
/// `record_vec!` works like [`vec!`]. The layout comes from the type the
/// result is assigned to.
///
/// - Create a container of the given records:
///
/// ```
/// # use layout_vec::{record_vec, AosVec, SoaVec};
/// let soa: SoaVec<_> = record_vec![(1, 'a'), (2, 'b')];
/// let aos: AosVec<_> = record_vec![(1, 'a'), (2, 'b')];
/// assert_eq!(soa, aos);
/// ```
///
/// - Create a container of `n` clones of a record:
///
/// ```
/// # use layout_vec::{record_vec, SoaVec};
/// let soa: SoaVec<_> = record_vec![(0u8, String::from("x")); 3];
/// assert_eq!(soa.column::<1>(), ["x", "x", "x"]);
/// ```
///
/// [`RecordVec`]: crate::RecordVec
#[macro_export]
macro_rules! record_vec {
    () => {
        $crate::RecordVec::new()
    };

    ($elem:expr; $n:expr) => {
        $crate::RecordVec::from_elem($n, $elem)
    };

    ($($x:expr),+ $(,)?) => {
        $crate::RecordVec::from([$($x),+])
    };
}
