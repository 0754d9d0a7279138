use crate::core::brand::{BrandDescriptor, BrandTag, Branded};
use crate::domain::model::Unknown;

pub struct PositiveNumberTag;

impl BrandTag for PositiveNumberTag {
    const NAME: &'static str = "PositiveNumber";
}

pub struct PositiveIntegerTag;

impl BrandTag for PositiveIntegerTag {
    const NAME: &'static str = "PositiveInteger";
}

/// A number greater than or equal to zero.
pub type PositiveNumber = Branded<f64, PositiveNumberTag>;

/// An integral number greater than or equal to zero.
///
/// Backed by `f64` like every dynamic number, so `5` and `5.0` both qualify.
pub type PositiveInteger = Branded<f64, PositiveIntegerTag>;

pub const POSITIVE_NUMBER: BrandDescriptor<f64, PositiveNumberTag> =
    BrandDescriptor::new(is_positive_number);

pub const POSITIVE_INTEGER: BrandDescriptor<f64, PositiveIntegerTag> =
    BrandDescriptor::new(is_positive_integer);

/// Checks that `value` is a number and `>= 0`.
pub fn is_positive_number(value: &Unknown) -> bool {
    value.as_f64().is_some_and(|n| n >= 0.0)
}

/// Checks that `value` is an integral number and `>= 0`.
pub fn is_positive_integer(value: &Unknown) -> bool {
    value
        .as_f64()
        .is_some_and(|n| n >= 0.0 && n.is_finite() && n.fract() == 0.0)
}

impl Branded<f64, PositiveIntegerTag> {
    /// Returns the value as an unsigned integer, saturating above `u64::MAX`.
    pub fn as_u64(&self) -> u64 {
        *self.as_inner() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_positive_number_accepts_positive_values() {
        for value in [json!(0), json!(1), json!(5), json!(100), json!(0.5), json!(3.14), json!(0.001)] {
            assert!(is_positive_number(&value), "{}", value);
        }
    }

    #[test]
    fn test_positive_number_rejects_negative_values() {
        for value in [json!(-1), json!(-5), json!(-0.5), json!(-3.14)] {
            assert!(!is_positive_number(&value), "{}", value);
        }
    }

    #[test]
    fn test_positive_number_rejects_non_numbers() {
        for value in [json!("0"), json!("5"), Unknown::Null, json!(true), json!(false), json!([]), json!({})] {
            assert!(!is_positive_number(&value), "{}", value);
        }
    }

    #[test]
    fn test_positive_integer() {
        for value in [json!(0), json!(1), json!(5), json!(100), json!(5.0)] {
            assert!(is_positive_integer(&value), "{}", value);
        }
        for value in [json!(-1), json!(-100), json!(-0.5), json!(-1.1), json!(0.5), json!(3.14), json!(1.1)] {
            assert!(!is_positive_integer(&value), "{}", value);
        }
        for value in [json!("0"), Unknown::Null, json!(true), json!([]), json!({})] {
            assert!(!is_positive_integer(&value), "{}", value);
        }
    }

    #[test]
    fn test_descriptors_brand_values() {
        let n: PositiveNumber = POSITIVE_NUMBER.from(json!(2.5), None).unwrap();
        assert_eq!(*n, 2.5);

        let i: PositiveInteger = POSITIVE_INTEGER.from(json!(5), None).unwrap();
        assert_eq!(i.as_u64(), 5);

        let err = POSITIVE_INTEGER.from(json!(-3), None).unwrap_err();
        assert_eq!(err.to_string(), "Value does not match the brand criteria: -3");
    }
}
