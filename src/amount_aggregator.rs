//! # Amount Aggregator Module
//!
//! Sums the amounts of one aggregation target per normalized unit. No unit
//! conversion happens here: "cup" and "ml" stay separate buckets.

use log::trace;
use std::collections::HashMap;

use crate::grocery_model::{ConsolidatedAmount, Unit};

/// Sum `(amount, unit)` pairs per normalized unit.
///
/// Buckets appear in the order their unit is first encountered. Amounts are
/// added as plain `f64` without rounding; an empty input gives an empty result.
///
/// # Examples
///
/// ```rust
/// use grocery_list::amount_aggregator::aggregate_amounts;
/// use grocery_list::grocery_model::Unit;
///
/// let cup = Unit::parse("cup").unwrap();
/// let upper = Unit::parse("Cup").unwrap();
/// let amounts = aggregate_amounts([(1.0, &cup), (0.5, &upper)]);
///
/// assert_eq!(amounts.len(), 1);
/// assert_eq!(amounts[0].amount, 1.5);
/// assert_eq!(amounts[0].unit.as_str(), "cup");
/// ```
pub fn aggregate_amounts<'a, I>(pairs: I) -> Vec<ConsolidatedAmount>
where
    I: IntoIterator<Item = (f64, &'a Unit)>,
{
    let mut buckets: Vec<ConsolidatedAmount> = Vec::new();
    let mut bucket_index: HashMap<Unit, usize> = HashMap::new();

    for (amount, unit) in pairs {
        let normalized = unit.normalized();
        match bucket_index.get(&normalized) {
            Some(&index) => buckets[index].amount += amount,
            None => {
                trace!("New amount bucket for unit '{normalized}'");
                bucket_index.insert(normalized.clone(), buckets.len());
                buckets.push(ConsolidatedAmount {
                    amount,
                    unit: normalized,
                });
            }
        }
    }

    buckets
}
