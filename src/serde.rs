use crate::{ElementRef, Layout, Record, RecordVec};
use serde::{
    de::{Deserialize, Deserializer, SeqAccess, Visitor},
    ser::{Serialize, SerializeSeq, Serializer},
};
use std::{
    fmt::{self, Formatter},
    marker::PhantomData,
};

impl<T, L> Serialize for RecordVec<T, L>
where
    T: Record,
    L: Layout,
    for<'a> T::Ref<'a>: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for el in self {
            seq.serialize_element(&el.fields())?;
        }
        seq.end()
    }
}

impl<'de, T, L> Deserialize<'de> for RecordVec<T, L>
where
    T: Record + Deserialize<'de>,
    L: Layout,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(RecordVecVisitor(PhantomData))
    }
}

struct RecordVecVisitor<T, L>(PhantomData<(T, L)>);

impl<'de, T, L> Visitor<'de> for RecordVecVisitor<T, L>
where
    T: Record + Deserialize<'de>,
    L: Layout,
{
    type Value = RecordVec<T, L>;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a sequence of records")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut out = RecordVec::<T, L>::new();
        if let Some(hint) = seq.size_hint() {
            // Size hints come from the input, so only trust them so far
            out.try_reserve(hint.min(4096))
                .map_err(serde::de::Error::custom)?;
        }
        while let Some(next) = seq.next_element()? {
            out.push(next);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use crate::{AosVec, SoaVec};

    #[test]
    fn json_round_trip() {
        let soa: SoaVec<_> = crate::record_vec![(1u8, String::from("a")), (2u8, String::from("b"))];
        let json = serde_json::to_string(&soa).unwrap();
        assert_eq!(json, r#"[[1,"a"],[2,"b"]]"#);
        let aos: AosVec<(u8, String)> = serde_json::from_str(&json).unwrap();
        assert_eq!(aos, soa);
    }
}
