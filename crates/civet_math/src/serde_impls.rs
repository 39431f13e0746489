//! Serde support for the coordinate kinds.
//!
//! Every kind maps to a flat numeric array of its arity in axis order. The
//! one tolerated partial arity is `Colour4`, which accepts 3 numbers and
//! defaults the alpha channel to 1.

use serde::de::{Deserialize, Deserializer, Error, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::colour::{Colour3, Colour4};
use crate::extent::{Extent2, Extent3};
use crate::numeric::*;
use crate::point::{Point2, Point3};
use crate::vec::{Vec2, Vec3, Vec4};

macro_rules! impl_serde_as_array {
    {$($iden:ident => $elem_cnt:literal),* $(,)?} => {
        $(
            impl<T: Numeric + Serialize> Serialize for $iden<T> {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    self.to_array().serialize(serializer)
                }
            }

            impl<'de, T: Numeric + Deserialize<'de>> Deserialize<'de> for $iden<T> {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    <[T; $elem_cnt]>::deserialize(deserializer).map(Self::from_array)
                }
            }
        )*
    };
}

impl_serde_as_array! {
    Vec2 => 2,
    Vec3 => 3,
    Vec4 => 4,
    Point2 => 2,
    Point3 => 3,
    Extent2 => 2,
    Extent3 => 3,
    Colour3 => 3,
}

impl<T: Numeric + Serialize> Serialize for Colour4<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}

impl<'de, T: Numeric + Deserialize<'de>> Deserialize<'de> for Colour4<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ColourVisitor<T>(std::marker::PhantomData<T>);

        impl<'de, T: Numeric + Deserialize<'de>> Visitor<'de> for ColourVisitor<T> {
            type Value = Colour4<T>;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a sequence of 3 or 4 channel values")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let r = seq.next_element()?.ok_or_else(|| A::Error::invalid_length(0, &self))?;
                let g = seq.next_element()?.ok_or_else(|| A::Error::invalid_length(1, &self))?;
                let b = seq.next_element()?.ok_or_else(|| A::Error::invalid_length(2, &self))?;
                let a = seq.next_element()?.unwrap_or(T::ONE);
                if seq.next_element::<T>()?.is_some() {
                    return Err(A::Error::invalid_length(5, &self));
                }
                Ok(Colour4::new(r, g, b, a))
            }
        }

        deserializer.deserialize_seq(ColourVisitor(std::marker::PhantomData))
    }
}
