//! Manual quantity override validation.

use crate::result::ArrangementResult;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The box count downstream reporting should use after a manual override.
///
/// The override replaces the best arrangement's `total_boxes` as the
/// authoritative count; the arrangement's grid shape stays authoritative
/// for layout purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EffectiveQuantity {
    /// Override checked against the best arrangement's capacity.
    Validated(u64),
    /// Override accepted without a ceiling because no arrangement exists.
    /// The caller is asserting a value the solver could not derive.
    Unconstrained(u64),
}

impl EffectiveQuantity {
    /// Returns the effective box count.
    pub fn value(self) -> u64 {
        match self {
            EffectiveQuantity::Validated(n) | EffectiveQuantity::Unconstrained(n) => n,
        }
    }

    /// Returns true if the override bypassed the capacity check.
    pub fn is_unconstrained(self) -> bool {
        matches!(self, EffectiveQuantity::Unconstrained(_))
    }
}

/// Validates caller-supplied box counts against solver capacity.
pub struct ManualQuantityValidator;

impl ManualQuantityValidator {
    /// Validates a manual quantity against the best arrangement, if one exists.
    ///
    /// A zero quantity is rejected. With a best arrangement present the
    /// quantity must not exceed its `total_boxes`. Without one, any positive
    /// quantity is accepted as `Unconstrained`.
    pub fn validate(
        requested: u64,
        best: Option<&ArrangementResult>,
    ) -> Result<EffectiveQuantity> {
        if requested == 0 {
            return Err(Error::InvalidQuantity);
        }

        match best {
            Some(arrangement) if requested > arrangement.total_boxes => {
                Err(Error::ExceedsCapacity {
                    requested,
                    capacity: arrangement.total_boxes,
                })
            }
            Some(_) => Ok(EffectiveQuantity::Validated(requested)),
            None => {
                log::debug!("manual quantity {requested} accepted without a capacity ceiling");
                Ok(EffectiveQuantity::Unconstrained(requested))
            }
        }
    }
}
