//!
//! Support for serde implementations
//!
//! `Sign` is serialized as -1, 0 or 1. `IndexableInteger` is
//! serialized as a struct holding the value as a decimal string and
//! the base; a bare string or integer deserializes in the default base.
//!
use crate::*;
use serde_crate::{self as serde, de, ser};
use ser::SerializeStruct;
use stdlib::str::FromStr;
use stdlib::string::ToString;


impl ser::Serialize for Sign {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_i8(self.to_i8())
    }
}

impl<'de> de::Deserialize<'de> for Sign {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        match <i8 as de::Deserialize>::deserialize(d)? {
            -1 => Ok(Sign::Negative),
            0 => Ok(Sign::Zero),
            1 => Ok(Sign::Positive),
            other => Err(de::Error::invalid_value(
                de::Unexpected::Signed(other.into()),
                &"-1, 0 or 1",
            )),
        }
    }
}


const FIELDS: &[&str] = &["value", "base"];

impl ser::Serialize for IndexableInteger {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        let mut state = serializer.serialize_struct("IndexableInteger", FIELDS.len())?;
        state.serialize_field("value", &self.value().to_string())?;
        state.serialize_field("base", &self.base())?;
        state.end()
    }
}


/// Used by SerDe to construct an IndexableInteger
struct IndexableIntegerVisitor;

/// Field names of the serialized struct
enum Field {
    Value,
    Base,
}

struct FieldVisitor;

impl<'de> de::Visitor<'de> for FieldVisitor {
    type Value = Field;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "`value` or `base`")
    }

    fn visit_str<E>(self, value: &str) -> Result<Field, E>
    where
        E: de::Error,
    {
        match value {
            "value" => Ok(Field::Value),
            "base" => Ok(Field::Base),
            _ => Err(de::Error::unknown_field(value, FIELDS)),
        }
    }
}

impl<'de> de::Deserialize<'de> for Field {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_identifier(FieldVisitor)
    }
}

/// Decimal string holding the wrapped value
struct ValueString(BigInt);

impl<'de> de::Deserialize<'de> for ValueString {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_any(IndexableIntegerVisitor).map(|i| ValueString(i.into_value()))
    }
}

impl<'de> de::Visitor<'de> for IndexableIntegerVisitor {
    type Value = IndexableInteger;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "an integer, a decimal string, or a struct with value and base")
    }

    fn visit_str<E>(self, value: &str) -> Result<IndexableInteger, E>
    where
        E: de::Error,
    {
        BigInt::from_str(value)
            .map(IndexableInteger::new)
            .map_err(|err| E::custom(format!("{}", err)))
    }

    fn visit_u64<E>(self, value: u64) -> Result<IndexableInteger, E>
    where
        E: de::Error,
    {
        Ok(IndexableInteger::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<IndexableInteger, E>
    where
        E: de::Error,
    {
        Ok(IndexableInteger::from(value))
    }

    fn visit_u128<E>(self, value: u128) -> Result<IndexableInteger, E>
    where
        E: de::Error,
    {
        Ok(IndexableInteger::from(value))
    }

    fn visit_i128<E>(self, value: i128) -> Result<IndexableInteger, E>
    where
        E: de::Error,
    {
        Ok(IndexableInteger::from(value))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: de::MapAccess<'de>,
    {
        let mut value: Option<BigInt> = None;
        let mut base: Option<u32> = None;

        while let Some(key) = map.next_key::<Field>()? {
            match key {
                Field::Value => {
                    if value.is_some() {
                        return Err(de::Error::duplicate_field("value"));
                    }
                    value = Some(map.next_value::<ValueString>()?.0);
                }
                Field::Base => {
                    if base.is_some() {
                        return Err(de::Error::duplicate_field("base"));
                    }
                    base = Some(map.next_value()?);
                }
            }
        }

        let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
        let base = base.unwrap_or(DEFAULT_BASE);

        IndexableInteger::with_base(value, base).map_err(|err| {
            de::Error::invalid_value(de::Unexpected::Unsigned(base.into()), &err.to_string().as_str())
        })
    }
}

impl<'de> de::Deserialize<'de> for IndexableInteger {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_any(IndexableIntegerVisitor)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    use serde_test::{
        Token, assert_tokens, assert_de_tokens, assert_de_tokens_error
    };

    mod sign {
        use super::*;

        #[test]
        fn case_all() {
            assert_tokens(&Sign::Negative, &[Token::I8(-1)]);
            assert_tokens(&Sign::Zero, &[Token::I8(0)]);
            assert_tokens(&Sign::Positive, &[Token::I8(1)]);
        }

        #[test]
        fn case_out_of_range() {
            assert_de_tokens_error::<Sign>(
                &[Token::I8(2)],
                "invalid value: integer `2`, expected -1, 0 or 1",
            );
        }
    }

    mod serde_serialize_deserialize_struct {
        use super::*;

        macro_rules! impl_case {
            ($name:ident : $value:literal base $base:literal => $output:literal) => {
                #[test]
                fn $name() {
                    let i = IndexableInteger::with_base($value, $base).unwrap();
                    assert_tokens(&i, &[
                        Token::Struct { name: "IndexableInteger", len: 2 },
                        Token::Str("value"),
                        Token::Str($output),
                        Token::Str("base"),
                        Token::U32($base),
                        Token::StructEnd,
                    ]);
                }
            };
        }

        impl_case!(case_1234: 1234 base 10 => "1234");
        impl_case!(case_n1234: -1234 base 10 => "-1234");
        impl_case!(case_0xdead: 0xdead base 16 => "57005");
        impl_case!(case_0: 0 base 2 => "0");
    }

    mod serde_deserialize_bare {
        use super::*;

        macro_rules! impl_case {
            ( $( $ttype:ident ),+ : -$input:literal ) => {
                $( paste! { impl_case!([< case_n $input _ $ttype:lower >] : $ttype : -$input); } )*
            };
            ( $( $ttype:ident ),+ : $input:literal ) => {
                $( paste! { impl_case!([< case_ $input _ $ttype:lower >] : $ttype : $input); } )*
            };
            ($name:ident : $type:ident : $input:literal) => {
                #[test]
                fn $name() {
                    let expected = IndexableInteger::from($input);
                    let token = Token::$type($input);
                    assert_de_tokens(&expected, &[token]);
                }
            };
        }

        impl_case!(I8, I16, I32, I64, U8, U16, U32, U64 : 0);
        impl_case!(I8, I16, I32, I64, U8, U16, U32, U64 : 1);
        impl_case!(I8, I16, I32, I64 : -1);
        impl_case!(I64: -99999999999i64);

        #[test]
        fn case_str() {
            let expected = IndexableInteger::new(
                BigInt::from_str("-98765432109876543210987654321").unwrap()
            );
            assert_de_tokens(&expected, &[Token::Str("-98765432109876543210987654321")]);
        }

        #[test]
        fn case_missing_base() {
            let expected = IndexableInteger::new(42);
            assert_de_tokens(&expected, &[
                Token::Map { len: Some(1) },
                Token::Str("value"),
                Token::Str("42"),
                Token::MapEnd,
            ]);
        }
    }

    mod serde_deserialize_invalid {
        use super::*;

        #[test]
        fn case_bad_string() {
            assert_de_tokens_error::<IndexableInteger>(
                &[Token::Str("12z3")],
                "invalid digit found in string",
            );
        }

        #[test]
        fn case_missing_value() {
            assert_de_tokens_error::<IndexableInteger>(
                &[
                    Token::Map { len: Some(1) },
                    Token::Str("base"),
                    Token::U32(10),
                    Token::MapEnd,
                ],
                "missing field `value`",
            );
        }

        #[test]
        fn case_bad_base() {
            assert_de_tokens_error::<IndexableInteger>(
                &[
                    Token::Map { len: Some(2) },
                    Token::Str("value"),
                    Token::Str("10"),
                    Token::Str("base"),
                    Token::U32(1),
                    Token::MapEnd,
                ],
                "invalid value: integer `1`, expected invalid base 1 (must be at least 2)",
            );
        }
    }
}
