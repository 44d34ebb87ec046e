//! Serde support for the owning containers, behind the `serde` feature.
//!
//! An [`Array`] serializes as a plain sequence of its elements. A
//! [`Matrix`] serializes as a struct with a `dim` field and a row-major
//! `data` field, so the shape survives formats that flatten nesting.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::array::Array;
use crate::index::Ix;
use crate::matrix::Matrix;

impl<T> Serialize for Array<T>
where T: Serialize + Clone
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for elem in self.as_slice() {
            seq.serialize_element(elem)?;
        }
        seq.end()
    }
}

impl<'de, T> Deserialize<'de> for Array<T>
where T: Deserialize<'de> + Clone
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de>
    {
        Vec::<T>::deserialize(deserializer).map(Array::from_vec)
    }
}

impl<T> Serialize for Matrix<T>
where T: Serialize + Clone
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer
    {
        let mut st = serializer.serialize_struct("Matrix", 2)?;
        st.serialize_field("dim", &self.dim())?;
        st.serialize_field("data", self.as_slice())?;
        st.end()
    }
}

struct MatrixVisitor<T>(PhantomData<T>);

static MATRIX_FIELDS: &[&str] = &["dim", "data"];

impl<'de, T> Visitor<'de> for MatrixVisitor<T>
where T: Deserialize<'de> + Clone
{
    type Value = Matrix<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        formatter.write_str("a matrix with dim and data fields")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Matrix<T>, A::Error>
    where A: SeqAccess<'de>
    {
        let dim: (Ix, Ix) = seq.next_element()?
                               .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let data: Vec<T> = seq.next_element()?
                              .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        Matrix::from_vec(dim, data).map_err(de::Error::custom)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Matrix<T>, A::Error>
    where A: MapAccess<'de>
    {
        let mut dim: Option<(Ix, Ix)> = None;
        let mut data: Option<Vec<T>> = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "dim" => dim = Some(map.next_value()?),
                "data" => data = Some(map.next_value()?),
                other => return Err(de::Error::unknown_field(other, MATRIX_FIELDS)),
            }
        }
        let dim = dim.ok_or_else(|| de::Error::missing_field("dim"))?;
        let data = data.ok_or_else(|| de::Error::missing_field("data"))?;
        Matrix::from_vec(dim, data).map_err(de::Error::custom)
    }
}

impl<'de, T> Deserialize<'de> for Matrix<T>
where T: Deserialize<'de> + Clone
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de>
    {
        deserializer.deserialize_struct("Matrix", MATRIX_FIELDS, MatrixVisitor(PhantomData))
    }
}
