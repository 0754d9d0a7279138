/// Dynamically typed input of unknown shape.
///
/// `Unknown::Null` models an explicit `null`; an absent value (undefined) is
/// modelled as `Option::<&Unknown>::None` by the operations that accept one.
pub type Unknown = serde_json::Value;
