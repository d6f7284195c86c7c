//! [`Value`] — the closed set of kinds the encoder understands.

/// A tree of primitive and composite values.
///
/// `Undefined` and `Ext` can be represented (a decoder may produce them)
/// but [`MsgPackEncoder`](crate::MsgPackEncoder) refuses to encode them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// MsgPack nil
    Nil,
    Bool(bool),
    /// Encodable range is `-2^63 ..= 2^64 - 1`; anything else is a range error.
    Int(i128),
    Float(f64),
    /// Opaque binary data.
    Bin(Vec<u8>),
    /// Text bytes. Expected to be UTF-8; invalid sequences are handled
    /// by the encoder's text error policy.
    Str(Vec<u8>),
    Array(Vec<Value>),
    /// Ordered pairs. Duplicate keys are kept as-is.
    Map(Vec<(Value, Value)>),
    /// undefined (the format reserves a tag for it but never uses it)
    Undefined,
    /// Extension type payload.
    Ext { tag: i8, data: Vec<u8> },
}

impl Value {
    /// Builds a text value.
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into().into_bytes())
    }

    /// Builds a binary value.
    pub fn bin(b: impl Into<Vec<u8>>) -> Self {
        Value::Bin(b.into())
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bin(_) => "bin",
            Value::Str(_) => "str",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
            Value::Undefined => "undefined",
            Value::Ext { .. } => "ext",
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Nil
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(v as i128)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s.into_bytes())
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bin(b.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bin(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(arr: Vec<Value>) -> Self {
        Value::Array(arr)
    }
}

impl From<Vec<(Value, Value)>> for Value {
    fn from(pairs: Vec<(Value, Value)>) -> Self {
        Value::Map(pairs)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Nil, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i128::from(i))
                } else if let Some(u) = n.as_u64() {
                    Value::Int(i128::from(u))
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Str(s.into_bytes()),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => Value::Map(
                obj.into_iter()
                    .map(|(k, v)| (Value::Str(k.into_bytes()), Value::from(v)))
                    .collect(),
            ),
        }
    }
}
