//! View templates, referenced later by name.

use crate::entity::{CategoryTemplate, ManufacturerTemplate, ProductTemplate, TopicTemplate};
use crate::error::InstallError;
use crate::generate::system::DEFAULT_TOPIC_TEMPLATE;
use crate::generate::GenerationContext;

pub const PRODUCTS_IN_GRID: &str = "Products in Grid or Lines";
pub const SIMPLE_PRODUCT: &str = "Simple product";
pub const GROUPED_PRODUCT: &str = "Grouped product (with variants)";

pub fn topic_templates(_ctx: &GenerationContext<'_>) -> Result<Vec<TopicTemplate>, InstallError> {
    Ok(vec![TopicTemplate {
        name: DEFAULT_TOPIC_TEMPLATE.to_string(),
        view_path: "TopicDetails".to_string(),
        display_order: 1,
    }])
}

pub fn category_templates(
    _ctx: &GenerationContext<'_>,
) -> Result<Vec<CategoryTemplate>, InstallError> {
    Ok(vec![CategoryTemplate {
        name: PRODUCTS_IN_GRID.to_string(),
        view_path: "CategoryTemplate.ProductsInGridOrLines".to_string(),
        display_order: 1,
    }])
}

pub fn manufacturer_templates(
    _ctx: &GenerationContext<'_>,
) -> Result<Vec<ManufacturerTemplate>, InstallError> {
    Ok(vec![ManufacturerTemplate {
        name: PRODUCTS_IN_GRID.to_string(),
        view_path: "ManufacturerTemplate.ProductsInGridOrLines".to_string(),
        display_order: 1,
    }])
}

pub fn product_templates(
    _ctx: &GenerationContext<'_>,
) -> Result<Vec<ProductTemplate>, InstallError> {
    Ok(vec![
        ProductTemplate {
            name: SIMPLE_PRODUCT.to_string(),
            view_path: "ProductTemplate.Simple".to_string(),
            display_order: 10,
        },
        ProductTemplate {
            name: GROUPED_PRODUCT.to_string(),
            view_path: "ProductTemplate.Grouped".to_string(),
            display_order: 100,
        },
    ])
}
