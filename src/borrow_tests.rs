/// ```
/// use layout_vec::SoaVec;
/// let mut soa = SoaVec::new();
/// soa.push((1u8, 2u16));
/// let first = soa.idx(0);
/// soa.push((3, 4));
/// ```
mod proxy_outlives_growth {
    /// ```compile_fail
    /// use layout_vec::SoaVec;
    /// let mut soa = SoaVec::new();
    /// soa.push((1u8, 2u16));
    /// let first = soa.idx(0);
    /// soa.push((3, 4));
    /// println!("{first:?}"); // Added
    /// ```
    mod fail {}
}

/// ```
/// use layout_vec::AosVec;
/// let mut aos = AosVec::new();
/// aos.push((1u8, 2u16));
/// let first = aos.idx(0);
/// aos.clear();
/// ```
mod reference_outlives_clear {
    /// ```compile_fail
    /// use layout_vec::AosVec;
    /// let mut aos = AosVec::new();
    /// aos.push((1u8, 2u16));
    /// let first = aos.idx(0);
    /// aos.clear();
    /// println!("{first:?}"); // Added
    /// ```
    mod fail {}
}

/// ```
/// use layout_vec::SoaVec;
/// let mut soa = SoaVec::new();
/// soa.push((1u8,));
/// let cursor = soa.begin();
/// soa.truncate(0);
/// ```
mod cursor_outlives_truncate {
    /// ```compile_fail
    /// use layout_vec::SoaVec;
    /// let mut soa = SoaVec::new();
    /// soa.push((1u8,));
    /// let cursor = soa.begin();
    /// soa.truncate(0);
    /// cursor.index(); // Added
    /// ```
    mod fail {}
}

/// ```
/// use layout_vec::{ElementMut, SoaVec};
/// let mut soa = SoaVec::new();
/// soa.push((1u8, String::from("a")));
/// soa.push((2u8, String::from("b")));
/// let (mut first, second) = soa.get_pair_mut(0, 1);
/// first.assign_from(&second);
/// ```
mod assign_within_container {
    /// ```compile_fail
    /// use layout_vec::{ElementMut, SoaVec};
    /// let mut soa = SoaVec::new();
    /// soa.push((1u8, String::from("a")));
    /// soa.push((2u8, String::from("b")));
    /// soa.idx_mut(0).assign_from(&soa.idx(1)); // Changed
    /// ```
    mod fail {}
}

/// ```
/// use layout_vec::{ElementRef, SoaVec};
/// let mut soa = SoaVec::new();
/// soa.push((1u8, String::from("a")));
/// let copy = soa.idx(0).cloned();
/// soa.push(copy);
/// ```
mod push_own_element {
    /// ```compile_fail
    /// use layout_vec::{ElementRef, SoaVec};
    /// let mut soa = SoaVec::new();
    /// soa.push((1u8, String::from("a")));
    /// let first = soa.idx(0);
    /// soa.push((*first.get::<0>(), String::new()));
    /// println!("{first:?}"); // Added
    /// ```
    mod fail {}
}

/// ```
/// use layout_vec::{ElementMut, SoaVec};
/// let mut soa = SoaVec::new();
/// soa.push((1u8, 2u16));
/// let column = soa.column::<0>();
/// let mut el = soa.idx_mut(0);
/// *el.get_mut::<1>() = 5;
/// ```
mod column_and_proxy {
    /// ```compile_fail
    /// use layout_vec::{ElementMut, SoaVec};
    /// let mut soa = SoaVec::new();
    /// soa.push((1u8, 2u16));
    /// let column = soa.column::<0>();
    /// let mut el = soa.idx_mut(0);
    /// *el.get_mut::<1>() = 5;
    /// println!("{column:?}"); // Added
    /// ```
    mod fail {}
}

/// ```
/// use layout_vec::{AosVec, ElementMut, SoaVec};
/// let mut soa = SoaVec::new();
/// soa.push((1u8, 2u16));
/// let mut aos = AosVec::new();
/// aos.push((1u8, 2u16, 3u32));
/// ```
mod shape_mismatch {
    /// ```compile_fail
    /// use layout_vec::{AosVec, ElementMut, SoaVec};
    /// let mut soa = SoaVec::new();
    /// soa.push((1u8, 2u16));
    /// let mut aos = AosVec::new();
    /// aos.push((1u8, 2u16, 3u32));
    /// soa.idx_mut(0).swap_with(&mut aos.idx_mut(0)); // Added
    /// ```
    mod fail {}
}
