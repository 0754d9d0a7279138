use crate::core::brand::{BrandDescriptor, BrandTag, Branded};
use crate::domain::model::Unknown;
use std::time::Duration;

pub struct MillisecondsTag;

impl BrandTag for MillisecondsTag {
    const NAME: &'static str = "ms";
}

/// A duration in milliseconds, kept apart from other `u64` quantities.
pub type Milliseconds = Branded<u64, MillisecondsTag>;

pub const MILLISECONDS: BrandDescriptor<u64, MillisecondsTag> =
    BrandDescriptor::new(is_milliseconds);

/// Accepts exactly the numbers a `u64` can hold, so a passing value always brands.
pub fn is_milliseconds(value: &Unknown) -> bool {
    value.as_u64().is_some()
}

/// Waits for `ms` milliseconds on the tokio timer.
pub async fn delay(ms: u64) {
    tracing::trace!("delaying for {}ms", ms);
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

pub async fn delay_for(ms: Milliseconds) {
    delay(ms.into_inner()).await;
}
