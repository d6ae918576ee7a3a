use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Period units used to describe the granularity of a field rule.
///
/// A rule is declared by the unit it counts (its smallest unit) and the unit
/// that bounds it (its largest unit): day-of-month counts `Days` within `Months`.
/// The units are labels only; no arithmetic is performed with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum PeriodUnit {
    #[display(fmt = "Days")]
    Days,
    #[display(fmt = "Weeks")]
    Weeks,
    #[display(fmt = "Months")]
    Months,
    #[display(fmt = "Years")]
    Years,
    /// Unbounded; used as the range of the year field
    #[display(fmt = "Forever")]
    Forever,
}
