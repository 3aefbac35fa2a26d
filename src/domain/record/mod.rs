use std::str::FromStr;

use rust_decimal::{prelude::FromPrimitive, Decimal};
use serde::Deserialize;

use super::error::{Error, Result};

/// Header of the grouping column. Matched case-sensitively.
pub const CATEGORY_COLUMN: &str = "Category";
/// Header of the summed column. Matched case-sensitively.
pub const AMOUNT_COLUMN: &str = "Amount";

/// One sales row as it appears in the input table.
///
/// Only `Category` and `Amount` take part in the aggregation; the other
/// columns are optional and carried along untouched.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct Record {
    #[serde(rename = "OrderID", default)]
    pub order_id: Option<String>,
    #[serde(rename = "Product", default)]
    pub product: Option<String>,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Amount")]
    pub amount: String,
    #[serde(rename = "Date", default)]
    pub date: Option<String>,
}

/// A [`Record`] whose amount has been coerced to a number.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct NormalizedRecord {
    pub order_id: Option<String>,
    pub product: Option<String>,
    pub category: String,
    pub amount: Decimal,
    pub date: Option<String>,
}

impl Record {
    /// Normalize the amount, returning the new row and whether the raw value
    /// had to be replaced by zero.
    pub fn normalize(self) -> Result<(NormalizedRecord, bool)> {
        let parsed = normalize_amount(&self.amount)?;
        let coerced = parsed.is_none() && !self.amount.trim().is_empty();

        let record = NormalizedRecord {
            order_id: self.order_id,
            product: self.product,
            category: self.category,
            amount: parsed.unwrap_or(Decimal::ZERO),
            date: self.date,
        };

        Ok((record, coerced))
    }
}

/// Best-effort decimal parse of an amount cell.
///
/// Accepts plain (`1200.00`, `-3`, `+4.5`) and scientific (`1.2e3`)
/// notation. Returns `None` for text that is not a number at all, including
/// empty cells and `NaN`. A number too large for [`Decimal`] (or an infinity)
/// is an error; one too small for its scale is rounded.
pub fn normalize_amount(raw: &str) -> Result<Option<Decimal>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    if let Ok(amount) = Decimal::from_str(raw).or_else(|_| Decimal::from_scientific(raw)) {
        return Ok(Some(amount));
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_nan() => Ok(None),
        Ok(value) if value.is_infinite() || value.abs() >= 1.0 => Err(Error::AmountOutOfRange {
            value: raw.to_owned(),
        }),
        Ok(value) => Ok(Some(Decimal::from_f64(value).unwrap_or(Decimal::ZERO))),
        Err(_) => Ok(None),
    }
}
