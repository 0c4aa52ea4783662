use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::errors::ValidationError;

pub const MIN_INVENTORY: i64 = 1;
pub const MAX_INVENTORY: i64 = 9999;

/// Product category. Serialized as the lowercase word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Book,
    Food,
    Gadget,
    Other,
}

impl ProductType {
    pub const ALL: [ProductType; 4] = [Self::Book, Self::Food, Self::Gadget, Self::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Book => "book",
            Self::Food => "food",
            Self::Gadget => "gadget",
            Self::Other => "other",
        }
    }

    /// Exact, case-sensitive lookup. Used when accepting new products.
    pub fn parse_exact(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }

    /// Case-insensitive lookup. Used when filtering listings.
    pub fn parse_ignore_case(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_exact(s).ok_or_else(|| ValidationError::InvalidType(s.to_string()))
    }
}

/// Creation payload for `POST /products`.
///
/// `cost` is optional on the wire so that a missing or `null` cost is
/// reported by [`ProductDetails::validate`] rather than by the JSON parser.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProductDetails {
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub inventory: i64,
    #[serde(default)]
    pub cost: Option<f64>,
}

/// Details that passed every rule, with the type and cost resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidProduct {
    pub name: String,
    pub product_type: ProductType,
    pub inventory: u32,
    pub cost: f64,
}

impl ProductDetails {
    /// Apply the business rules in order and stop at the first failure.
    pub fn validate(&self) -> Result<ValidProduct, ValidationError> {
        if !is_acceptable_name(&self.name) {
            return Err(ValidationError::InvalidName);
        }
        let product_type: ProductType = self.product_type.parse()?;
        if !(MIN_INVENTORY..=MAX_INVENTORY).contains(&self.inventory) {
            return Err(ValidationError::InventoryOutOfRange);
        }
        let cost = self.cost.ok_or(ValidationError::CostMissing)?;
        if cost.is_nan() || cost < 0.0 {
            return Err(ValidationError::NegativeCost);
        }

        Ok(ValidProduct {
            name: self.name.clone(),
            product_type,
            // range checked above
            inventory: self.inventory as u32,
            cost,
        })
    }
}

/// Decimal digits only (category Nd). Other numeric characters such as
/// superscripts, vulgar fractions and roman numerals are allowed.
fn is_decimal_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

fn is_acceptable_name(name: &str) -> bool {
    if name.trim().is_empty() || name.chars().any(is_decimal_digit) {
        return false;
    }
    !(name.eq_ignore_ascii_case("true") || name.eq_ignore_ascii_case("false"))
}

/// Body of a successful create.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductId {
    pub id: u64,
}

/// Stored product. Never mutated after insertion.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub inventory: u32,
    pub cost: f64,
}

impl Product {
    pub fn new(id: u64, valid: ValidProduct) -> Self {
        Self {
            id,
            name: valid.name,
            product_type: valid.product_type,
            inventory: valid.inventory,
            cost: valid.cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(name: &str, ty: &str, inventory: i64, cost: Option<f64>) -> ProductDetails {
        ProductDetails {
            name: name.into(),
            product_type: ty.into(),
            inventory,
            cost,
        }
    }

    fn iphone() -> ProductDetails {
        details("iPhone", "gadget", 100, Some(699.99))
    }

    #[test]
    fn valid_details_pass() {
        let valid = iphone().validate().expect("valid");
        assert_eq!(valid.product_type, ProductType::Gadget);
        assert_eq!(valid.inventory, 100);
        assert_eq!(valid.cost, 699.99);
    }

    #[test]
    fn name_rules() {
        for name in ["", "  ", "iPhone 12", "true", "FALSE", "True"] {
            let d = details(name, "gadget", 100, Some(1.0));
            assert_eq!(d.validate(), Err(ValidationError::InvalidName), "name {name:?}");
        }
        assert!(details("truely", "book", 1, Some(1.0)).validate().is_ok());
    }

    #[test]
    fn only_decimal_digits_are_rejected_in_names() {
        for name in ["Vitamin D²", "½ Cup", "Chapter Ⅻ"] {
            assert!(details(name, "food", 1, Some(1.0)).validate().is_ok(), "name {name:?}");
        }
        for name in ["iPhone 12", "٣", "Item ７"] {
            let d = details(name, "food", 1, Some(1.0));
            assert_eq!(d.validate(), Err(ValidationError::InvalidName), "name {name:?}");
        }
    }

    #[test]
    fn type_is_case_sensitive_on_create() {
        assert_eq!(
            details("iPhone", "invalid", 100, Some(1.0)).validate(),
            Err(ValidationError::InvalidType("invalid".into()))
        );
        assert_eq!(
            details("iPhone", "Gadget", 100, Some(1.0)).validate(),
            Err(ValidationError::InvalidType("Gadget".into()))
        );
    }

    #[test]
    fn inventory_bounds() {
        for inv in [0, 10000, -5] {
            assert_eq!(
                details("Pen", "other", inv, Some(1.0)).validate(),
                Err(ValidationError::InventoryOutOfRange)
            );
        }
        assert!(details("Pen", "other", 1, Some(1.0)).validate().is_ok());
        assert!(details("Pen", "other", 9999, Some(1.0)).validate().is_ok());
    }

    #[test]
    fn cost_rules() {
        assert_eq!(details("Pen", "other", 1, None).validate(), Err(ValidationError::CostMissing));
        assert_eq!(details("Pen", "other", 1, Some(-10.0)).validate(), Err(ValidationError::NegativeCost));
        assert!(details("Pen", "other", 1, Some(0.0)).validate().is_ok());
    }

    #[test]
    fn first_failing_rule_wins() {
        let d = details("123", "bogus", 0, None);
        assert_eq!(d.validate(), Err(ValidationError::InvalidName));
        let d = details("Pen", "bogus", 0, None);
        assert_eq!(d.validate(), Err(ValidationError::InvalidType("bogus".into())));
        let d = details("Pen", "book", 0, None);
        assert_eq!(d.validate(), Err(ValidationError::InventoryOutOfRange));
    }

    #[test]
    fn messages_match_wire_text() {
        assert_eq!(
            ValidationError::InvalidName.to_string(),
            "Product name cannot be blank or contain numbers"
        );
        assert_eq!(ValidationError::InvalidType("x".into()).to_string(), "Invalid product type: x");
        assert_eq!(ValidationError::InventoryOutOfRange.to_string(), "Inventory must be between 1 and 9999");
        assert_eq!(ValidationError::CostMissing.to_string(), "Cost must be provided");
        assert_eq!(ValidationError::NegativeCost.to_string(), "Cost must be non-negative");
    }

    #[test]
    fn absent_and_null_cost_deserialize_to_none() {
        let absent: ProductDetails =
            serde_json::from_str(r#"{"name":"Pen","type":"other","inventory":1}"#).expect("parse");
        assert_eq!(absent.cost, None);
        let null: ProductDetails =
            serde_json::from_str(r#"{"name":"Pen","type":"other","inventory":1,"cost":null}"#).expect("parse");
        assert_eq!(null.cost, None);
    }

    #[test]
    fn product_serializes_type_field() {
        let p = Product::new(7, iphone().validate().expect("valid"));
        let json = serde_json::to_value(&p).expect("serialize");
        assert_eq!(json["id"], 7);
        assert_eq!(json["type"], "gadget");
        assert_eq!(json["name"], "iPhone");
    }

    #[test]
    fn filter_lookup_ignores_case() {
        assert_eq!(ProductType::parse_ignore_case("GADGET"), Some(ProductType::Gadget));
        assert_eq!(ProductType::parse_exact("GADGET"), None);
        assert_eq!(ProductType::parse_ignore_case("bogus"), None);
    }
}
