//! # Nominal Brands
//!
//! `Branded<T, B>` attaches a compile-time tag `B` to a base value `T`. The
//! wrapper is `#[repr(transparent)]`, so a branded value has exactly the
//! layout of its base value; the tag only exists for the type checker.
//! Two branded types are interchangeable only when both `T` and `B` match.
//!
//! Untrusted input enters through a [`BrandDescriptor`], which pairs a
//! caller-supplied predicate with two operations:
//!
//! - [`BrandDescriptor::is`] answers whether a dynamic value satisfies the
//!   predicate. It never fails.
//! - [`BrandDescriptor::from`] returns the value as `Branded<T, B>` when the
//!   predicate holds and a `TypeMismatch` error otherwise.
//!
//! ## Usage
//!
//! ```rust
//! use serde_json::json;
//! use small_utils::core::brand::{BrandDescriptor, BrandTag, Branded};
//!
//! struct EmailTag;
//! impl BrandTag for EmailTag { const NAME: &'static str = "EMail"; }
//!
//! type Email = Branded<String, EmailTag>;
//!
//! fn looks_like_email(value: &serde_json::Value) -> bool {
//!     value.as_str().is_some_and(|s| s.contains('@'))
//! }
//!
//! const EMAIL: BrandDescriptor<String, EmailTag> = BrandDescriptor::new(looks_like_email);
//!
//! let email: Email = EMAIL.from(json!("admin@example.com"), None).unwrap();
//! assert_eq!(email.as_str(), "admin@example.com");
//! assert!(!EMAIL.is(&json!(123)));
//! ```
//!
//! Brands with different tags do not mix:
//!
//! ```compile_fail
//! use small_utils::core::brand::{BrandTag, Branded};
//!
//! struct Ms;
//! impl BrandTag for Ms { const NAME: &'static str = "ms"; }
//! struct Secs;
//! impl BrandTag for Secs { const NAME: &'static str = "s"; }
//!
//! let ms: Branded<u64, Ms> = Branded::new_unchecked(1000);
//! let secs: Branded<u64, Secs> = ms;
//! ```
//!
//! Nor does the bare base type coerce into a brand:
//!
//! ```compile_fail
//! use small_utils::core::brand::{BrandTag, Branded};
//!
//! struct EmailTag;
//! impl BrandTag for EmailTag { const NAME: &'static str = "EMail"; }
//!
//! let email: Branded<String, EmailTag> = String::from("test@example.com");
//! ```

use crate::core::values::stringify;
use crate::domain::model::Unknown;
use crate::utils::error::{Result, UtilsError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;

/// Prefix of the message carried by `TypeMismatch` when no custom message is given.
pub const DEFAULT_MISMATCH_PREFIX: &str = "Value does not match the brand criteria: ";

/// A tag type identifying a brand.
///
/// Tags are usually empty structs; `NAME` is used for `Debug` output and logs.
///
/// # Examples
///
/// ```rust
/// # use small_utils::core::brand::BrandTag;
/// struct Milliseconds;
///
/// impl BrandTag for Milliseconds {
///     const NAME: &'static str = "ms";
/// }
/// ```
pub trait BrandTag {
    const NAME: &'static str;
}

/// A value of base type `T` carrying the compile-time brand `B`.
#[repr(transparent)]
pub struct Branded<T, B> {
    value: T,
    _brand: PhantomData<fn() -> B>,
}

impl<T, B> Branded<T, B> {
    /// Wraps `value` without consulting any predicate.
    ///
    /// This is the license granted by a `true` result from
    /// [`BrandDescriptor::is`]; calling it on a value that was never checked
    /// breaks the brand's guarantee.
    #[inline(always)]
    pub const fn new_unchecked(value: T) -> Self {
        Self {
            value,
            _brand: PhantomData,
        }
    }

    #[inline(always)]
    pub const fn as_inner(&self) -> &T {
        &self.value
    }

    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, B> Deref for Branded<T, B> {
    type Target = T;

    #[inline(always)]
    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T, B> AsRef<T> for Branded<T, B> {
    #[inline(always)]
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T: Clone, B> Clone for Branded<T, B> {
    fn clone(&self) -> Self {
        Self::new_unchecked(self.value.clone())
    }
}

impl<T: Copy, B> Copy for Branded<T, B> {}

impl<T: PartialEq, B> PartialEq for Branded<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, B> Eq for Branded<T, B> {}

impl<T: PartialOrd, B> PartialOrd for Branded<T, B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, B> Ord for Branded<T, B> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash, B> Hash for Branded<T, B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: fmt::Debug, B: BrandTag> fmt::Debug for Branded<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", B::NAME, self.value)
    }
}

impl<T: fmt::Display, B> fmt::Display for Branded<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<T: Serialize, B> Serialize for Branded<T, B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

/// Strips a brand off a type.
///
/// For `Branded<T, B>` the base is `T`; for unbranded types the base is the
/// type itself.
pub trait Unbrand {
    type Base;

    fn unbrand(self) -> Self::Base;
}

/// The base type of `T` with any brand removed.
pub type Unbranded<T> = <T as Unbrand>::Base;

impl<T, B> Unbrand for Branded<T, B> {
    type Base = T;

    #[inline(always)]
    fn unbrand(self) -> T {
        self.value
    }
}

macro_rules! unbrand_identity {
    ($($t:ty),* $(,)?) => {
        $(
            impl Unbrand for $t {
                type Base = $t;

                #[inline(always)]
                fn unbrand(self) -> $t {
                    self
                }
            }
        )*
    };
}

unbrand_identity!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    String, Unknown,
);

impl<'a> Unbrand for &'a str {
    type Base = &'a str;

    fn unbrand(self) -> &'a str {
        self
    }
}

impl<T> Unbrand for Vec<T> {
    type Base = Vec<T>;

    fn unbrand(self) -> Vec<T> {
        self
    }
}

impl<T> Unbrand for Option<T> {
    type Base = Option<T>;

    fn unbrand(self) -> Option<T> {
        self
    }
}

/// Plain function predicate, usable in `const` descriptors.
pub type Predicate = fn(&Unknown) -> bool;

/// Boxed predicate for brands assembled at runtime.
pub type DynPredicate = Box<dyn Fn(&Unknown) -> bool + Send + Sync>;

/// Validator and factory for the brand `B` over base type `T`.
///
/// The descriptor is immutable after construction and holds nothing but its
/// predicate, so it can be shared freely between threads whenever `P` can.
pub struct BrandDescriptor<T, B, P = Predicate> {
    predicate: P,
    _brand: PhantomData<fn() -> (T, B)>,
}

impl<T, B, P> BrandDescriptor<T, B, P> {
    pub const fn new(predicate: P) -> Self {
        Self {
            predicate,
            _brand: PhantomData,
        }
    }
}

/// Creates the descriptor for a brand from its predicate.
///
/// The predicate should check the base representation first and the
/// brand-specific rule second, but nothing enforces that.
pub fn create_brand<T, B, P>(predicate: P) -> BrandDescriptor<T, B, P>
where
    P: Fn(&Unknown) -> bool,
{
    BrandDescriptor::new(predicate)
}

impl<T, B, P> BrandDescriptor<T, B, P>
where
    P: Fn(&Unknown) -> bool,
{
    /// Returns `true` iff the predicate accepts `value`.
    #[inline]
    pub fn is(&self, value: &Unknown) -> bool {
        (self.predicate)(value)
    }

    /// Like [`is`](Self::is), treating an absent value as a non-match.
    #[inline]
    pub fn is_present(&self, value: Option<&Unknown>) -> bool {
        value.is_some_and(|v| self.is(v))
    }
}

impl<T, B, P> BrandDescriptor<T, B, P>
where
    T: DeserializeOwned,
    B: BrandTag,
    P: Fn(&Unknown) -> bool,
{
    /// Validates `value` and returns it as the branded type.
    ///
    /// Fails with `TypeMismatch` carrying `error_message` verbatim, or
    /// `"Value does not match the brand criteria: <value>"` when none is
    /// given. A value the predicate accepts but that has no `T`
    /// representation fails the same way.
    pub fn from(&self, value: Unknown, error_message: Option<&str>) -> Result<Branded<T, B>> {
        if !self.is(&value) {
            return Err(self.mismatch(Some(&value), error_message));
        }

        match T::deserialize(&value) {
            Ok(inner) => Ok(Branded::new_unchecked(inner)),
            Err(e) => {
                tracing::debug!("{}: accepted value has no base representation: {}", B::NAME, e);
                Err(self.mismatch(Some(&value), error_message))
            }
        }
    }

    /// Like [`from`](Self::from), rejecting an absent value.
    pub fn from_present(
        &self,
        value: Option<Unknown>,
        error_message: Option<&str>,
    ) -> Result<Branded<T, B>> {
        match value {
            Some(value) => self.from(value, error_message),
            None => Err(self.mismatch(None, error_message)),
        }
    }

    fn mismatch(&self, value: Option<&Unknown>, error_message: Option<&str>) -> UtilsError {
        let message = match error_message {
            Some(message) => message.to_string(),
            None => format!(
                "{}{}",
                DEFAULT_MISMATCH_PREFIX,
                value.map(stringify).unwrap_or_else(|| "undefined".to_string())
            ),
        };
        tracing::debug!("{}: value rejected: {}", B::NAME, message);
        UtilsError::type_mismatch(message)
    }
}

impl<T, B, P> BrandDescriptor<T, B, P>
where
    T: Serialize + DeserializeOwned,
    B: BrandTag,
    P: Fn(&Unknown) -> bool,
{
    /// Brands an already typed value, checking it against the predicate.
    pub fn brand(&self, value: T) -> Result<Branded<T, B>> {
        let dynamic = serde_json::to_value(&value)?;
        if self.is(&dynamic) {
            Ok(Branded::new_unchecked(value))
        } else {
            Err(self.mismatch(Some(&dynamic), None))
        }
    }
}

impl<T, B, P: Clone> Clone for BrandDescriptor<T, B, P> {
    fn clone(&self) -> Self {
        Self::new(self.predicate.clone())
    }
}

impl<T, B, P: Copy> Copy for BrandDescriptor<T, B, P> {}

impl<T, B, P> fmt::Debug for BrandDescriptor<T, B, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrandDescriptor")
            .field("base", &std::any::type_name::<T>())
            .field("brand", &std::any::type_name::<B>())
            .finish_non_exhaustive()
    }
}

/// Deserializes a dynamic value and runs it through `descriptor`.
///
/// Meant to be called from `#[serde(deserialize_with = "...")]` helpers so
/// branded fields of `Deserialize` structs are validated on the way in.
pub fn deserialize_with<'de, D, T, B>(
    descriptor: &BrandDescriptor<T, B>,
    deserializer: D,
) -> std::result::Result<Branded<T, B>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: DeserializeOwned,
    B: BrandTag,
{
    let value = Unknown::deserialize(deserializer)?;
    descriptor
        .from(value, None)
        .map_err(serde::de::Error::custom)
}
