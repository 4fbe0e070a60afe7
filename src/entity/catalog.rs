//! Catalog rows. Products carry their mappings as nested child collections.

use crate::assets::AssetId;
use crate::types::RowId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub description: String,
    pub category_template_id: RowId,
    pub parent_category_id: Option<RowId>,
    pub picture_id: Option<AssetId>,
    pub page_size: u32,
    pub allow_customers_to_select_page_size: bool,
    pub page_size_options: String,
    pub price_ranges: String,
    pub show_on_home_page: bool,
    pub include_in_top_menu: bool,
    pub published: bool,
    pub display_order: i32,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

entity!(Category, Category, Name => name);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub name: String,
    pub description: String,
    pub manufacturer_template_id: RowId,
    pub picture_id: Option<AssetId>,
    pub page_size: u32,
    pub allow_customers_to_select_page_size: bool,
    pub page_size_options: String,
    pub price_ranges: String,
    pub published: bool,
    pub display_order: i32,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

entity!(Manufacturer, Manufacturer, Name => name);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductType {
    SimpleProduct,
    GroupedProduct,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCategory {
    pub category_id: RowId,
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductManufacturer {
    pub manufacturer_id: RowId,
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPicture {
    pub picture_id: AssetId,
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSpecificationAttribute {
    pub specification_attribute_option_id: RowId,
    pub allow_filtering: bool,
    pub show_on_product_page: bool,
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAttributeValue {
    pub name: String,
    pub price_adjustment: f64,
    pub is_pre_selected: bool,
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAttributeMapping {
    pub product_attribute_id: RowId,
    pub text_prompt: String,
    pub is_required: bool,
    pub control_type: String,
    pub values: Vec<ProductAttributeValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub sku: String,
    pub short_description: String,
    pub full_description: String,
    pub product_type: ProductType,
    pub product_template_id: RowId,
    pub price: f64,
    pub old_price: f64,
    pub is_shipping_enabled: bool,
    pub weight: f64,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub tax_category_id: RowId,
    pub stock_quantity: i32,
    pub delivery_date_id: Option<RowId>,
    pub is_download: bool,
    pub download_id: Option<AssetId>,
    pub published: bool,
    pub show_on_home_page: bool,
    pub mark_as_new: bool,
    pub allow_customer_reviews: bool,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
    pub categories: Vec<ProductCategory>,
    pub manufacturers: Vec<ProductManufacturer>,
    pub pictures: Vec<ProductPicture>,
    pub specification_attributes: Vec<ProductSpecificationAttribute>,
    pub attributes: Vec<ProductAttributeMapping>,
}

entity!(Product, Product, Name => name, Code => sku);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTag {
    pub name: String,
    pub product_ids: Vec<RowId>,
}

entity!(ProductTag, ProductTag, Name => name);
