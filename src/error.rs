use std::alloc::Layout;

/// The error type for [`try_reserve`] methods.
///
/// [`try_reserve`]: crate::RecordVec::try_reserve
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum TryReserveError {
    /// The computed capacity exceeded the collection's maximum, usually
    /// `isize::MAX` bytes for one of the columns.
    #[error("capacity overflow")]
    CapacityOverflow,

    /// The memory allocator returned an error for one of the columns.
    #[error("memory allocation of {} bytes failed", layout.size())]
    AllocError {
        /// The layout of the allocation request that failed.
        layout: Layout,
    },

    /// The array-of-structures backend failed to grow its `Vec`.
    #[error(transparent)]
    Vec(#[from] std::collections::TryReserveError),
}

impl TryReserveError {
    /// Diverges the way `Vec` does when an infallible growth fails.
    pub(crate) fn handle(self) -> ! {
        match self {
            Self::AllocError { layout } => std::alloc::handle_alloc_error(layout),
            Self::CapacityOverflow => panic!("capacity overflow"),
            Self::Vec(e) => panic!("{e}"),
        }
    }
}
