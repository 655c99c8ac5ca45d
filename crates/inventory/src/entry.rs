use serde::{Deserialize, Serialize};

use stockpad_core::{DomainError, DomainResult};

/// The six raw text values read from the form at submit time.
///
/// Values are kept exactly as entered (untrimmed); trimming happens only
/// where a field is parsed as a number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub stock: String,
    pub cp: String,
    pub sp: String,
    pub vendor: String,
    pub vendor_phoneno: String,
}

/// A validated, computed record ready for insertion.
///
/// The derived totals are set once here and never editable afterwards, so
/// they are always consistent with `cp`, `sp` and `stock` at insert time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub stock: i64,
    /// Cost price, per unit.
    pub cp: f64,
    /// Selling price, per unit.
    pub sp: f64,
    pub totalcp: f64,
    pub totalsp: f64,
    /// `totalsp - totalcp`; may be negative.
    pub assumed_profit: f64,
    pub vendor: String,
    pub vendor_phoneno: String,
}

impl ItemDraft {
    /// Validate the draft and compute the derived totals.
    ///
    /// Rejects the whole draft if any field is empty, then requires `stock`
    /// to parse as an integer and both prices as floats. Nothing else is
    /// enforced: negative numbers and arbitrary phone formats pass through.
    pub fn validate(&self) -> DomainResult<NewItem> {
        let fields = [
            &self.name,
            &self.stock,
            &self.cp,
            &self.sp,
            &self.vendor,
            &self.vendor_phoneno,
        ];
        if fields.iter().any(|f| f.is_empty()) {
            return Err(DomainError::MissingFields);
        }

        let stock: i64 = self
            .stock
            .trim()
            .parse()
            .map_err(|_| DomainError::invalid_number("stock"))?;
        let cp: f64 = self
            .cp
            .trim()
            .parse()
            .map_err(|_| DomainError::invalid_number("cost price"))?;
        let sp: f64 = self
            .sp
            .trim()
            .parse()
            .map_err(|_| DomainError::invalid_number("selling price"))?;

        let totalcp = cp * stock as f64;
        let totalsp = sp * stock as f64;

        Ok(NewItem {
            name: self.name.clone(),
            stock,
            cp,
            sp,
            totalcp,
            totalsp,
            assumed_profit: totalsp - totalcp,
            vendor: self.vendor.clone(),
            vendor_phoneno: self.vendor_phoneno.clone(),
        })
    }
}
