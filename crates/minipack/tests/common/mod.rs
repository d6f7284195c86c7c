//! Shared helpers: decode with `rmpv` and map back onto [`Value`].

#![allow(dead_code)]

use minipack::Value;

/// Decodes one complete document and checks no bytes are left over.
pub fn decode(bytes: &[u8]) -> Value {
    let mut rest = bytes;
    let decoded = rmpv::decode::read_value(&mut rest)
        .unwrap_or_else(|e| panic!("rmpv failed to decode {bytes:02x?}: {e}"));
    assert!(rest.is_empty(), "{} trailing bytes", rest.len());
    from_rmpv(decoded)
}

pub fn from_rmpv(v: rmpv::Value) -> Value {
    match v {
        rmpv::Value::Nil => Value::Nil,
        rmpv::Value::Boolean(b) => Value::Bool(b),
        rmpv::Value::Integer(i) => match (i.as_i64(), i.as_u64()) {
            (Some(n), _) => Value::Int(i128::from(n)),
            (None, Some(n)) => Value::Int(i128::from(n)),
            (None, None) => unreachable!("rmpv integer is either i64 or u64"),
        },
        rmpv::Value::F32(f) => Value::Float(f64::from(f)),
        rmpv::Value::F64(f) => Value::Float(f),
        rmpv::Value::String(s) => Value::Str(s.as_bytes().to_vec()),
        rmpv::Value::Binary(b) => Value::Bin(b),
        rmpv::Value::Array(arr) => Value::Array(arr.into_iter().map(from_rmpv).collect()),
        rmpv::Value::Map(pairs) => Value::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (from_rmpv(k), from_rmpv(v)))
                .collect(),
        ),
        rmpv::Value::Ext(tag, data) => Value::Ext { tag, data },
    }
}

/// What a value looks like after a trip through legacy (no bin type) mode.
pub fn merge_bin_into_str(v: Value) -> Value {
    match v {
        Value::Bin(b) => Value::Str(b),
        Value::Array(arr) => Value::Array(arr.into_iter().map(merge_bin_into_str).collect()),
        Value::Map(pairs) => Value::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (merge_bin_into_str(k), merge_bin_into_str(v)))
                .collect(),
        ),
        other => other,
    }
}
