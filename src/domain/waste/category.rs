//! Category catalog entries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{CategoryId, SubCategoryId, ValidationError};

/// Unit a sub-category is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Kg,
    G,
    Mg,
    /// Liquids such as waste cooking oil.
    L,
    Ml,
    /// Countable items such as bottles or batteries.
    Pcs,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Unit::Kg => "kg",
            Unit::G => "g",
            Unit::Mg => "mg",
            Unit::L => "l",
            Unit::Ml => "ml",
            Unit::Pcs => "pcs",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Unit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kg" => Ok(Unit::Kg),
            "g" => Ok(Unit::G),
            "mg" => Ok(Unit::Mg),
            "l" => Ok(Unit::L),
            "ml" => Ok(Unit::Ml),
            "pcs" => Ok(Unit::Pcs),
            other => Err(ValidationError::invalid_format(
                "unit",
                format!("unknown unit '{}'", other),
            )),
        }
    }
}

/// Top-level waste category (Recyclable, Organic, Electronic, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasteCategory {
    pub id: CategoryId,
    pub name: String,
    pub is_active: bool,
}

impl WasteCategory {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id,
            name,
            is_active: true,
        })
    }
}

/// A scored sub-category. `score_per_unit` is the multiplier applied to
/// an entry's quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubCategory {
    pub id: SubCategoryId,
    pub category_id: CategoryId,
    pub name: String,
    pub unit: Unit,
    pub score_per_unit: Decimal,
    /// Inactive sub-categories accept no new entries or goals, but
    /// historical entries keep scoring.
    pub is_active: bool,
}

impl SubCategory {
    /// Creates an active sub-category.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    /// - `OutOfRange` if `score_per_unit` is not positive
    pub fn new(
        id: SubCategoryId,
        category_id: CategoryId,
        name: impl Into<String>,
        unit: Unit,
        score_per_unit: Decimal,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if score_per_unit <= Decimal::ZERO {
            return Err(ValidationError::out_of_range(
                "score_per_unit",
                "greater than zero",
                score_per_unit,
            ));
        }
        Ok(Self {
            id,
            category_id,
            name,
            unit,
            score_per_unit,
            is_active: true,
        })
    }

    pub fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }
}
