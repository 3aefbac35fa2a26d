use std::collections::BTreeMap;

use itertools::{EitherOrBoth, Itertools};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    error::{Error, Result},
    record::NormalizedRecord,
};

/// One output row per distinct category.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct CategorySummary {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Amount", with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "ItemCount")]
    pub item_count: usize,
}

impl CategorySummary {
    /// Group, sum, count and join in one go. Rows come back ordered by
    /// category.
    pub fn from_records(records: &[NormalizedRecord]) -> Result<Vec<Self>> {
        join(group_sum(records)?, group_count(records))
    }
}

/// Sum of the normalized amounts of every category.
pub fn group_sum(records: &[NormalizedRecord]) -> Result<BTreeMap<&str, Decimal>> {
    records
        .iter()
        .into_grouping_map_by(|record| record.category.as_str())
        .fold(Some(Decimal::ZERO), |total, _category, record| {
            total.and_then(|total| total.checked_add(record.amount))
        })
        .into_iter()
        .collect::<BTreeMap<_, _>>()
        .into_iter()
        .map(|(category, total)| {
            total
                .map(|total| (category, total))
                .ok_or_else(|| Error::AmountOverflow {
                    category: category.to_owned(),
                })
        })
        .collect()
}

/// Number of rows of every category.
pub fn group_count(records: &[NormalizedRecord]) -> BTreeMap<&str, usize> {
    records
        .iter()
        .counts_by(|record| record.category.as_str())
        .into_iter()
        .collect()
}

/// Merge the sum and count tables on the category key.
///
/// Both tables are expected to come from the same rows, so every key must be
/// present on both sides.
pub fn join(
    sums: BTreeMap<&str, Decimal>,
    counts: BTreeMap<&str, usize>,
) -> Result<Vec<CategorySummary>> {
    sums.into_iter()
        .merge_join_by(counts, |(left, _), (right, _)| left.cmp(right))
        .map(|entry| match entry {
            EitherOrBoth::Both((category, amount), (_, item_count)) => Ok(CategorySummary {
                category: category.to_owned(),
                amount,
                item_count,
            }),
            EitherOrBoth::Left((category, _)) => Err(Error::UnmatchedCategory {
                category: category.to_owned(),
            }),
            EitherOrBoth::Right((category, _)) => Err(Error::UnmatchedCategory {
                category: category.to_owned(),
            }),
        })
        .collect()
}
