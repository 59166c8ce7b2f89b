use crate::Particle;
use layout_vec::{
    Aos, AosVec, AsRecord, ElementMut, ElementRef, Layout, RecordVec, Soa, SoaVec,
    TryReserveError, record_vec,
};
use std::{
    cell::Cell,
    panic::{self, AssertUnwindSafe},
    rc::Rc,
};

type Row = (i32, f64, String);

fn row(i: i32) -> Row {
    (i, f64::from(i) / 4., format!("row {i}"))
}

fn rows<L: Layout>(n: i32) -> RecordVec<Row, L> {
    (0..n).map(row).collect()
}

#[test]
fn layouts_agree() {
    let mut aos = rows::<Aos>(6);
    let mut soa = rows::<Soa>(6);
    assert_eq!(aos, soa);

    aos.idx_mut(1).set(row(10));
    soa.idx_mut(1).set(row(10));
    aos.swap(0, 5);
    soa.swap(0, 5);
    aos.idx_mut(3).assign_from(&row(-3));
    soa.idx_mut(3).assign_from(&row(-3));
    assert_eq!(aos.pop(), soa.pop());
    assert_eq!(aos, soa);

    for (a, s) in aos.iter().zip(&soa) {
        assert_eq!(a.cloned(), s.cloned());
        assert_eq!(a.get::<2>(), s.get::<2>());
    }
    assert_eq!(soa.column::<0>(), [5, 10, 2, -3, 4]);
}

type Sample = (i32, f64, Vec<i32>);

fn copy_then_move<L: Layout>() {
    let mut vec: RecordVec<Sample, L> = (0..10)
        .map(|i| (i, f64::from(i) * 0.1, vec![i, i + 1, i + 2]))
        .collect();
    vec.idx_mut(0).set((1, 0.0, vec![1, 2, 3]));
    vec.idx_mut(1).set((2, 0.2, vec![4, 5, 6]));
    vec.clone_element(1, 2);
    vec.move_element(2, 3);

    let copied = vec.idx(3).cloned();
    assert_eq!(copied, (2, 0.2, vec![4, 5, 6]));
    let moved = vec.idx_mut(3).moving().into_record();
    assert_eq!(moved, copied);

    assert!(vec.idx(2).get::<2>().is_empty());
    assert!(vec.idx(3).get::<2>().is_empty());
    assert_eq!(vec.idx(1).cloned(), (2, 0.2, vec![4, 5, 6]));
    assert_eq!(vec.idx(4).cloned(), (4, 0.4, vec![4, 5, 6]));
    assert_eq!(vec.len(), 10);
}

#[test]
fn copy_then_move_both_layouts() {
    copy_then_move::<Aos>();
    copy_then_move::<Soa>();
}

#[test]
fn assign_across_layouts() {
    let mut soa = rows::<Soa>(3);
    let aos = rows::<Aos>(6);

    soa.idx_mut(0).assign_from(&aos.idx(5));
    soa.idx_mut(1).assign_from(&aos.idx(4));
    assert_eq!(soa, [row(5), row(4), row(2)]);
    assert_eq!(aos, rows::<Soa>(6));

    let mut back = rows::<Aos>(1);
    back.idx_mut(0).assign_from(&soa.idx(2));
    assert_eq!(back, [row(2)]);
}

#[test]
fn swap_across_layouts() {
    let mut soa = rows::<Soa>(2);
    let mut aos: AosVec<Row> = record_vec![row(7), row(8)];

    soa.idx_mut(0).swap_with(&mut aos.idx_mut(1));
    assert_eq!(soa, [row(8), row(1)]);
    assert_eq!(aos, [row(7), row(0)]);

    soa.idx_mut(0).swap_with(&mut aos.idx_mut(1));
    assert_eq!(soa, rows::<Aos>(2));
    assert_eq!(aos, [row(7), row(8)]);
}

#[test]
fn swap_is_an_involution() {
    let mut soa = rows::<Soa>(5);
    for (a, b) in [(0, 4), (1, 3), (2, 2), (4, 0)] {
        soa.swap(a, b);
        soa.swap(a, b);
        assert_eq!(soa, rows::<Aos>(5));
    }
}

#[test]
fn moving_leaves_defaults() {
    let mut soa: SoaVec<(u32, Vec<u8>)> = record_vec![(1, vec![1, 2]), (2, vec![3])];
    let mut aos: AosVec<(u32, Vec<u8>)> = record_vec![(0, vec![]); 2];

    aos.idx_mut(1).assign_moving(soa.idx_mut(0).moving());
    assert_eq!(aos, [(0, vec![]), (1, vec![1, 2])]);
    assert_eq!(soa, [(0, vec![]), (2, vec![3])]);

    let bytes = soa.idx_mut(1).moving().take::<1>();
    assert_eq!(bytes, [3]);
    assert_eq!(soa.idx(1).cloned(), (2, vec![]));

    let record = aos.idx_mut(1).moving().into_record();
    assert_eq!(record, (1, vec![1, 2]));
    assert_eq!(aos.len(), 2);
}

#[test]
fn move_element_within_container() {
    let mut soa = rows::<Soa>(4);
    soa.move_element(3, 0);
    assert_eq!(soa, [row(3), row(1), row(2), (0, 0., String::new())]);

    soa.clone_element(1, 2);
    assert_eq!(soa.idx(2).cloned(), row(1));

    soa.move_element(2, 2);
    assert_eq!(soa.idx(2).cloned(), row(1));
}

#[test]
fn cursor_round_trip() {
    let soa = rows::<Soa>(8);
    let begin = soa.begin();
    let end = soa.end();
    assert_eq!(end - begin, 8);
    assert_eq!(begin + 8, end);
    assert_eq!(end - 8, begin);

    let mut cursor = begin;
    for i in 0..8 {
        assert_eq!(cursor.index(), i);
        assert_eq!(cursor.get().cloned(), row(i as i32));
        cursor += 1;
    }
    assert_eq!(cursor, end);
    cursor -= 3;
    assert_eq!(*cursor.at(-1).get::<0>(), 4);
    assert!(begin < cursor && cursor < end);
    assert!(std::ptr::eq(cursor.container(), &soa));

    let middle = AosVec::from_cursor_range(begin + 2, end - 2);
    assert_eq!(middle, [row(2), row(3), row(4), row(5)]);
    let empty = SoaVec::from_cursor_range(cursor, cursor);
    assert!(empty.is_empty());
}

#[test]
#[should_panic(expected = "range out of bounds")]
fn cursor_range_past_end() {
    let soa = rows::<Soa>(3);
    let _ = SoaVec::from_cursor_range(soa.begin(), soa.end() + 1);
}

#[test]
fn convert_layouts() {
    let soa = rows::<Soa>(5);
    let aos = soa.to_layout::<Aos>();
    assert_eq!(aos.as_slice(), &rows::<Aos>(5).into_vec()[..]);

    let back: SoaVec<Row> = aos.into_layout();
    assert_eq!(back, soa);
}

struct Counted(Rc<Cell<usize>>);

impl Drop for Counted {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn every_record_drops_once() {
    let drops = Rc::new(Cell::new(0));
    {
        let mut soa = SoaVec::<(String, Counted)>::new();
        for i in 0..20 {
            soa.push((i.to_string(), Counted(drops.clone())));
        }
        soa.swap(0, 19);
        soa.truncate(15);
        assert_eq!(drops.get(), 5);
        soa.clear();
        assert_eq!(drops.get(), 20);
        soa.push((String::new(), Counted(drops.clone())));
    }
    assert_eq!(drops.get(), 21);
}

#[test]
fn replacing_drops_the_overwritten_field() {
    let drops = Rc::new(Cell::new(0));
    let mut aos = AosVec::<(u8, Counted)>::new();
    aos.push((0, Counted(drops.clone())));
    aos.idx_mut(0).set((1, Counted(drops.clone())));
    assert_eq!(drops.get(), 1);
    let old = aos.replace(0, (2, Counted(drops.clone())));
    assert_eq!(drops.get(), 1);
    drop(old);
    assert_eq!(drops.get(), 2);
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Marker;

#[test]
fn zero_sized_fields() {
    let mut soa = SoaVec::<(Marker, u16, ())>::new();
    for i in 0..100 {
        soa.push((Marker, i, ()));
    }
    assert_eq!(soa.len(), 100);
    assert_eq!(soa.column::<0>().len(), 100);
    assert_eq!(soa.pop(), Some((Marker, 99, ())));

    let mut only_zst = SoaVec::<(Marker, ())>::new();
    only_zst.push((Marker, ()));
    only_zst.push((Marker, ()));
    assert_eq!(only_zst.len(), 2);
    assert_eq!(only_zst.iter().count(), 2);
}

#[test]
fn failed_reserve_changes_nothing() {
    let mut soa = rows::<Soa>(3);
    let capacity = soa.capacity();
    assert_eq!(
        soa.try_reserve(usize::MAX),
        Err(TryReserveError::CapacityOverflow)
    );
    assert_eq!(soa.capacity(), capacity);
    assert_eq!(soa, rows::<Aos>(3));

    let mut aos = rows::<Aos>(3);
    assert!(aos.try_reserve(usize::MAX).is_err());
    assert_eq!(aos, rows::<Soa>(3));
}

#[derive(Debug, Default, PartialEq)]
struct Brittle(u8);

impl Clone for Brittle {
    fn clone(&self) -> Self {
        assert_ne!(self.0, 0, "cannot clone a zero");
        Self(self.0)
    }
}

#[test]
fn panicking_clone_is_not_rolled_back() {
    let mut soa = SoaVec::<(String, Brittle, String)>::new();
    soa.push((String::from("old"), Brittle(1), String::from("old")));
    let src = (String::from("new"), Brittle(0), String::from("new"));

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        soa.idx_mut(0).assign_from(&src);
    }));
    assert!(result.is_err());
    let (first, second, third) = soa.idx(0).fields();
    assert_eq!(first, "new");
    assert_eq!(second, &Brittle(1));
    assert_eq!(third, "old");
    assert_eq!(soa.len(), 1);
}

#[test]
fn json_both_layouts() {
    let soa = rows::<Soa>(2);
    let aos = rows::<Aos>(2);
    let soa_json = serde_json::to_string(&soa).unwrap();
    let aos_json = serde_json::to_string(&aos).unwrap();
    assert_eq!(soa_json, aos_json);
    assert_eq!(soa_json, r#"[[0,0.0,"row 0"],[1,0.25,"row 1"]]"#);

    let decoded: SoaVec<Row> = serde_json::from_str(&aos_json).unwrap();
    assert_eq!(decoded, soa);
    assert!(serde_json::from_str::<AosVec<Row>>(r#"[[0,0.0]]"#).is_err());
}

#[test]
fn derive_named_struct() {
    let particle = Particle {
        position: [1., 2., 3.],
        velocity: [0., -1., 0.],
        mass: 4.,
    };
    let mut soa = SoaVec::new();
    soa.push(particle.clone().into_record());
    soa.push(Particle::from_record(([0.; 3], [0.; 3], 1.)).into_record());

    assert_eq!(soa.column::<2>(), [4., 1.]);
    let copy: Particle = soa.idx(0).cloned_as();
    assert_eq!(copy, particle);
    let moved: Particle = soa.idx_mut(0).moving().into_as();
    assert_eq!(moved, particle);
    assert_eq!(soa.idx(0).cloned_as::<Particle>().mass, 0.);
}

#[derive(AsRecord, Debug, Clone, PartialEq)]
struct Pixel(u8, u8, u8, u8);

#[derive(AsRecord, Debug, Clone, PartialEq)]
struct Tagged<T> {
    tag: u16,
    value: T,
}

#[test]
fn derive_tuple_and_generic_structs() {
    let pixels: AosVec<(u8, u8, u8, u8)> = [Pixel(1, 2, 3, 255), Pixel(4, 5, 6, 0)]
        .map(AsRecord::into_record)
        .into();
    let soa = pixels.to_layout::<Soa>();
    assert_eq!(soa.column::<3>(), [255, 0]);
    assert_eq!(soa.idx(1).cloned_as::<Pixel>(), Pixel(4, 5, 6, 0));

    let mut tagged = SoaVec::new();
    tagged.push(Tagged { tag: 3, value: vec!['a'] }.into_record());
    tagged.idx_mut(0).get_mut::<1>().push('b');
    let out: Tagged<Vec<char>> = tagged.idx(0).cloned_as();
    assert_eq!(out, Tagged { tag: 3, value: vec!['a', 'b'] });
}
