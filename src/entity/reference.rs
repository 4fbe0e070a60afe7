//! Reference data rows and view templates.

use crate::entity::Entity;
use crate::types::{EntityKind, NaturalKey, RowId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureDimension {
    pub name: String,
    pub system_keyword: String,
    pub ratio: f64,
    pub display_order: i32,
}

entity!(MeasureDimension, MeasureDimension, Name => name, SystemName => system_keyword);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureWeight {
    pub name: String,
    pub system_keyword: String,
    pub ratio: f64,
    pub display_order: i32,
}

entity!(MeasureWeight, MeasureWeight, Name => name, SystemName => system_keyword);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxCategory {
    pub name: String,
    pub display_order: i32,
}

entity!(TaxCategory, TaxCategory, Name => name, DisplayOrder => display_order);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundingType {
    Rounding001,
    Rounding005Up,
    Rounding01,
    Rounding1,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    pub currency_code: String,
    pub rate: f64,
    pub display_locale: String,
    pub custom_formatting: String,
    pub published: bool,
    pub display_order: i32,
    pub rounding_type: RoundingType,
}

entity!(Currency, Currency, Code => currency_code, Name => name);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateProvince {
    pub name: String,
    pub abbreviation: String,
    pub published: bool,
    pub display_order: i32,
}

/// A country with its states nested as a child collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub allows_billing: bool,
    pub allows_shipping: bool,
    pub two_letter_iso_code: String,
    pub three_letter_iso_code: String,
    pub numeric_iso_code: u16,
    pub subject_to_vat: bool,
    pub display_order: i32,
    pub published: bool,
    pub states: Vec<StateProvince>,
}

entity!(Country, Country, Name => name, Code => two_letter_iso_code);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingMethod {
    pub name: String,
    pub description: String,
    pub display_order: i32,
}

entity!(ShippingMethod, ShippingMethod, Name => name);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryDate {
    pub name: String,
    pub display_order: i32,
}

entity!(DeliveryDate, DeliveryDate, Name => name, DisplayOrder => display_order);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecificationAttribute {
    pub name: String,
    pub display_order: i32,
}

entity!(SpecificationAttribute, SpecificationAttribute, Name => name);

/// Option names are only unique within their attribute, so they resolve by
/// [`NaturalKey::Scoped`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecificationAttributeOption {
    pub specification_attribute_id: RowId,
    pub name: String,
    pub color_squares_rgb: Option<String>,
    pub display_order: i32,
}

impl Entity for SpecificationAttributeOption {
    const KIND: EntityKind = EntityKind::SpecificationAttributeOption;

    fn matches(&self, key: &NaturalKey) -> bool {
        match key {
            NaturalKey::Scoped { parent, name } => {
                self.specification_attribute_id == *parent && &self.name == name
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAttribute {
    pub name: String,
    pub description: String,
}

entity!(ProductAttribute, ProductAttribute, Name => name);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTemplate {
    pub name: String,
    pub view_path: String,
    pub display_order: i32,
}

entity!(CategoryTemplate, CategoryTemplate, Name => name);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManufacturerTemplate {
    pub name: String,
    pub view_path: String,
    pub display_order: i32,
}

entity!(ManufacturerTemplate, ManufacturerTemplate, Name => name);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTemplate {
    pub name: String,
    pub view_path: String,
    pub display_order: i32,
}

entity!(ProductTemplate, ProductTemplate, Name => name);
