//! Depth-limited serialization.
//!
//! [`DepthLimited`] wraps any [`Serializer`] and fails once values nest
//! deeper than a fixed number of levels. A self-referencing value would
//! otherwise recurse until the stack overflows.

use serde::ser::{self, Serialize, Serializer};

/// Nesting depth at which key derivation gives up.
///
/// The same limit `serde_json` applies when parsing.
pub(crate) const MAX_DEPTH: usize = 128;

/// A serializer that allows at most `remaining` more levels of nesting.
///
/// Every sequence, tuple, map, struct, option and newtype counts as one
/// level.
pub(crate) struct DepthLimited<S> {
    inner: S,
    remaining: usize,
}

impl<S> DepthLimited<S>
where
    S: Serializer,
{
    pub(crate) const fn new(inner: S, remaining: usize) -> Self {
        Self { inner, remaining }
    }

    fn descend(&self) -> Result<usize, S::Error> {
        self.remaining.checked_sub(1).ok_or_else(|| {
            <S::Error as ser::Error>::custom(format_args!(
                "recursion limit of {MAX_DEPTH} levels exceeded"
            ))
        })
    }
}

/// A value one level down, serialized through a fresh [`DepthLimited`].
struct Nested<'a, T: ?Sized> {
    value: &'a T,
    remaining: usize,
}

impl<T> Serialize for Nested<'_, T>
where
    T: Serialize + ?Sized,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value
            .serialize(DepthLimited::new(serializer, self.remaining))
    }
}

/// The compound state of the wrapped serializer; its elements are nested.
pub(crate) struct Compound<C> {
    inner: C,
    remaining: usize,
}

impl<C> Compound<C> {
    const fn nested<'a, T: ?Sized>(&self, value: &'a T) -> Nested<'a, T> {
        Nested {
            value,
            remaining: self.remaining,
        }
    }
}

macro_rules! forward_scalars {
    ($($method:ident($type:ty)),* $(,)?) => {
        $(
            fn $method(self, value: $type) -> Result<S::Ok, S::Error> {
                self.inner.$method(value)
            }
        )*
    };
}

impl<S> Serializer for DepthLimited<S>
where
    S: Serializer,
{
    type Ok = S::Ok;
    type Error = S::Error;
    type SerializeSeq = Compound<S::SerializeSeq>;
    type SerializeTuple = Compound<S::SerializeTuple>;
    type SerializeTupleStruct = Compound<S::SerializeTupleStruct>;
    type SerializeTupleVariant = Compound<S::SerializeTupleVariant>;
    type SerializeMap = Compound<S::SerializeMap>;
    type SerializeStruct = Compound<S::SerializeStruct>;
    type SerializeStructVariant = Compound<S::SerializeStructVariant>;

    forward_scalars!(
        serialize_bool(bool),
        serialize_i8(i8),
        serialize_i16(i16),
        serialize_i32(i32),
        serialize_i64(i64),
        serialize_i128(i128),
        serialize_u8(u8),
        serialize_u16(u16),
        serialize_u32(u32),
        serialize_u64(u64),
        serialize_u128(u128),
        serialize_f32(f32),
        serialize_f64(f64),
        serialize_char(char),
        serialize_str(&str),
        serialize_bytes(&[u8]),
    );

    fn serialize_none(self) -> Result<S::Ok, S::Error> {
        self.inner.serialize_none()
    }

    fn serialize_some<T>(self, value: &T) -> Result<S::Ok, S::Error>
    where
        T: ?Sized + Serialize,
    {
        let remaining = self.descend()?;
        self.inner.serialize_some(&Nested { value, remaining })
    }

    fn serialize_unit(self) -> Result<S::Ok, S::Error> {
        self.inner.serialize_unit()
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<S::Ok, S::Error> {
        self.inner.serialize_unit_struct(name)
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
    ) -> Result<S::Ok, S::Error> {
        self.inner
            .serialize_unit_variant(name, variant_index, variant)
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<S::Ok, S::Error>
    where
        T: ?Sized + Serialize,
    {
        let remaining = self.descend()?;
        self.inner
            .serialize_newtype_struct(name, &Nested { value, remaining })
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<S::Ok, S::Error>
    where
        T: ?Sized + Serialize,
    {
        let remaining = self.descend()?;
        self.inner.serialize_newtype_variant(
            name,
            variant_index,
            variant,
            &Nested { value, remaining },
        )
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq, S::Error> {
        let remaining = self.descend()?;
        self.inner
            .serialize_seq(len)
            .map(|inner| Compound { inner, remaining })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple, S::Error> {
        let remaining = self.descend()?;
        self.inner
            .serialize_tuple(len)
            .map(|inner| Compound { inner, remaining })
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct, S::Error> {
        let remaining = self.descend()?;
        self.inner
            .serialize_tuple_struct(name, len)
            .map(|inner| Compound { inner, remaining })
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant, S::Error> {
        let remaining = self.descend()?;
        self.inner
            .serialize_tuple_variant(name, variant_index, variant, len)
            .map(|inner| Compound { inner, remaining })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap, S::Error> {
        let remaining = self.descend()?;
        self.inner
            .serialize_map(len)
            .map(|inner| Compound { inner, remaining })
    }

    fn serialize_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStruct, S::Error> {
        let remaining = self.descend()?;
        self.inner
            .serialize_struct(name, len)
            .map(|inner| Compound { inner, remaining })
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStructVariant, S::Error> {
        let remaining = self.descend()?;
        self.inner
            .serialize_struct_variant(name, variant_index, variant, len)
            .map(|inner| Compound { inner, remaining })
    }

    fn is_human_readable(&self) -> bool {
        self.inner.is_human_readable()
    }
}

impl<C> ser::SerializeSeq for Compound<C>
where
    C: ser::SerializeSeq,
{
    type Ok = C::Ok;
    type Error = C::Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), C::Error>
    where
        T: ?Sized + Serialize,
    {
        let nested = self.nested(value);
        self.inner.serialize_element(&nested)
    }

    fn end(self) -> Result<C::Ok, C::Error> {
        self.inner.end()
    }
}

impl<C> ser::SerializeTuple for Compound<C>
where
    C: ser::SerializeTuple,
{
    type Ok = C::Ok;
    type Error = C::Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), C::Error>
    where
        T: ?Sized + Serialize,
    {
        let nested = self.nested(value);
        self.inner.serialize_element(&nested)
    }

    fn end(self) -> Result<C::Ok, C::Error> {
        self.inner.end()
    }
}

impl<C> ser::SerializeTupleStruct for Compound<C>
where
    C: ser::SerializeTupleStruct,
{
    type Ok = C::Ok;
    type Error = C::Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), C::Error>
    where
        T: ?Sized + Serialize,
    {
        let nested = self.nested(value);
        self.inner.serialize_field(&nested)
    }

    fn end(self) -> Result<C::Ok, C::Error> {
        self.inner.end()
    }
}

impl<C> ser::SerializeTupleVariant for Compound<C>
where
    C: ser::SerializeTupleVariant,
{
    type Ok = C::Ok;
    type Error = C::Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), C::Error>
    where
        T: ?Sized + Serialize,
    {
        let nested = self.nested(value);
        self.inner.serialize_field(&nested)
    }

    fn end(self) -> Result<C::Ok, C::Error> {
        self.inner.end()
    }
}

impl<C> ser::SerializeMap for Compound<C>
where
    C: ser::SerializeMap,
{
    type Ok = C::Ok;
    type Error = C::Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<(), C::Error>
    where
        T: ?Sized + Serialize,
    {
        let nested = self.nested(key);
        self.inner.serialize_key(&nested)
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<(), C::Error>
    where
        T: ?Sized + Serialize,
    {
        let nested = self.nested(value);
        self.inner.serialize_value(&nested)
    }

    fn end(self) -> Result<C::Ok, C::Error> {
        self.inner.end()
    }
}

impl<C> ser::SerializeStruct for Compound<C>
where
    C: ser::SerializeStruct,
{
    type Ok = C::Ok;
    type Error = C::Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), C::Error>
    where
        T: ?Sized + Serialize,
    {
        let nested = self.nested(value);
        self.inner.serialize_field(key, &nested)
    }

    fn end(self) -> Result<C::Ok, C::Error> {
        self.inner.end()
    }
}

impl<C> ser::SerializeStructVariant for Compound<C>
where
    C: ser::SerializeStructVariant,
{
    type Ok = C::Ok;
    type Error = C::Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), C::Error>
    where
        T: ?Sized + Serialize,
    {
        let nested = self.nested(value);
        self.inner.serialize_field(key, &nested)
    }

    fn end(self) -> Result<C::Ok, C::Error> {
        self.inner.end()
    }
}
