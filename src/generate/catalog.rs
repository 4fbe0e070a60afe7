//! Sample catalog: categories, manufacturers, products and product tags.

use crate::assets::AssetId;
use crate::entity::{
    Category, CategoryTemplate, DeliveryDate, Manufacturer, ManufacturerTemplate, Product,
    ProductAttribute, ProductAttributeMapping, ProductAttributeValue, ProductCategory,
    ProductManufacturer, ProductPicture, ProductSpecificationAttribute, ProductTag,
    ProductTemplate, ProductType, SpecificationAttribute, SpecificationAttributeOption,
    TaxCategory,
};
use crate::error::InstallError;
use crate::generate::templates::{PRODUCTS_IN_GRID, SIMPLE_PRODUCT};
use crate::generate::GenerationContext;
use crate::types::NaturalKey;

/// 1x1 transparent PNG used for every sample picture.
pub const PLACEHOLDER_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// An empty zip archive, the payload of the sample downloadable product.
const SAMPLE_DOWNLOAD: &[u8] = &[
    0x50, 0x4B, 0x05, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

const PAGE_SIZE_OPTIONS: &str = "6, 3, 9";

// (name, show on home page)
const FIRST_LEVEL_CATEGORIES: &[(&str, bool)] = &[
    ("Computers", false),
    ("Electronics", false),
    ("Apparel", false),
    ("Digital downloads", true),
    ("Books", true),
    ("Jewelry", true),
    ("Gift Cards", false),
];

// (name, parent)
const SECOND_LEVEL_CATEGORIES: &[(&str, &str)] = &[
    ("Desktops", "Computers"),
    ("Notebooks", "Computers"),
    ("Software", "Computers"),
    ("Camera & photo", "Electronics"),
    ("Cell phones", "Electronics"),
    ("Others", "Electronics"),
    ("Shoes", "Apparel"),
    ("Clothing", "Apparel"),
    ("Accessories", "Apparel"),
];

const MANUFACTURERS: &[&str] = &["Apple", "HP", "Nike"];

/// Lower-case, dash-separated name used for asset file names.
pub fn seo_name(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

fn picture(ctx: &GenerationContext<'_>, name: &str) -> Result<AssetId, InstallError> {
    Ok(ctx
        .assets
        .insert_picture(PLACEHOLDER_PNG, "image/png", &seo_name(name))?)
}

fn category(
    ctx: &GenerationContext<'_>,
    name: &str,
    template_id: u64,
    parent_category_id: Option<u64>,
    show_on_home_page: bool,
    display_order: i32,
) -> Result<Category, InstallError> {
    let now = ctx.install.installed_at;
    Ok(Category {
        name: name.to_string(),
        description: String::new(),
        category_template_id: template_id,
        parent_category_id,
        picture_id: Some(picture(ctx, name)?),
        page_size: 6,
        allow_customers_to_select_page_size: true,
        page_size_options: PAGE_SIZE_OPTIONS.to_string(),
        price_ranges: String::new(),
        show_on_home_page,
        include_in_top_menu: true,
        published: true,
        display_order,
        created_on: now,
        updated_on: now,
    })
}

pub fn first_level_categories(ctx: &GenerationContext<'_>) -> Result<Vec<Category>, InstallError> {
    let template_id = ctx
        .resolver
        .resolve_id::<CategoryTemplate>(NaturalKey::name(PRODUCTS_IN_GRID))?;

    FIRST_LEVEL_CATEGORIES
        .iter()
        .enumerate()
        .map(|(index, (name, home))| {
            category(ctx, name, template_id, None, *home, index as i32 + 1)
        })
        .collect()
}

/// Resolves each parent by name, so it fails with `NotFound` until the
/// first-level categories are persisted.
pub fn second_level_categories(
    ctx: &GenerationContext<'_>,
) -> Result<Vec<Category>, InstallError> {
    let template_id = ctx
        .resolver
        .resolve_id::<CategoryTemplate>(NaturalKey::name(PRODUCTS_IN_GRID))?;

    let mut categories = Vec::with_capacity(SECOND_LEVEL_CATEGORIES.len());
    for (index, (name, parent)) in SECOND_LEVEL_CATEGORIES.iter().enumerate() {
        let parent_id = ctx.resolver.resolve_id::<Category>(NaturalKey::name(*parent))?;
        categories.push(category(
            ctx,
            name,
            template_id,
            Some(parent_id),
            false,
            index as i32 + 1,
        )?);
    }
    Ok(categories)
}

pub fn manufacturers(ctx: &GenerationContext<'_>) -> Result<Vec<Manufacturer>, InstallError> {
    let template_id = ctx
        .resolver
        .resolve_id::<ManufacturerTemplate>(NaturalKey::name(PRODUCTS_IN_GRID))?;
    let now = ctx.install.installed_at;

    MANUFACTURERS
        .iter()
        .enumerate()
        .map(|(index, name)| {
            Ok(Manufacturer {
                name: name.to_string(),
                description: String::new(),
                manufacturer_template_id: template_id,
                picture_id: Some(picture(ctx, name)?),
                page_size: 6,
                allow_customers_to_select_page_size: true,
                page_size_options: PAGE_SIZE_OPTIONS.to_string(),
                price_ranges: String::new(),
                published: true,
                display_order: index as i32 + 1,
                created_on: now,
                updated_on: now,
            })
        })
        .collect()
}

struct AttributeSeed {
    attribute: &'static str,
    control_type: &'static str,
    required: bool,
    // (value, price adjustment)
    values: &'static [(&'static str, f64)],
}

struct ProductSeed {
    name: &'static str,
    sku: &'static str,
    short_description: &'static str,
    category: &'static str,
    manufacturer: Option<&'static str>,
    tax_category: &'static str,
    delivery_date: Option<&'static str>,
    price: f64,
    old_price: f64,
    weight: f64,
    /// Downloadable products carry a file and no shipping.
    download: Option<&'static str>,
    show_on_home_page: bool,
    mark_as_new: bool,
    // (specification attribute, option)
    specifications: &'static [(&'static str, &'static str)],
    attributes: &'static [AttributeSeed],
}

const PRODUCTS: &[ProductSeed] = &[
    ProductSeed {
        name: "Build your own computer",
        sku: "COMP_CUST",
        short_description: "Build it",
        category: "Desktops",
        manufacturer: None,
        tax_category: "Electronics & Software",
        delivery_date: Some("3-5 days"),
        price: 1200.0,
        old_price: 0.0,
        weight: 2.0,
        download: None,
        show_on_home_page: true,
        mark_as_new: false,
        specifications: &[],
        attributes: &[
            AttributeSeed {
                attribute: "Processor",
                control_type: "DropdownList",
                required: true,
                values: &[
                    ("2.2 GHz Intel Pentium Dual-Core E2200", 0.0),
                    ("2.5 GHz Intel Pentium Dual-Core E2200", 15.0),
                ],
            },
            AttributeSeed {
                attribute: "RAM",
                control_type: "DropdownList",
                required: true,
                values: &[("2 GB", 0.0), ("4GB", 20.0), ("8GB", 60.0)],
            },
            AttributeSeed {
                attribute: "HDD",
                control_type: "RadioList",
                required: true,
                values: &[("320 GB", 0.0), ("400 GB", 100.0)],
            },
            AttributeSeed {
                attribute: "OS",
                control_type: "RadioList",
                required: true,
                values: &[("Vista Home", 50.0), ("Vista Premium", 60.0)],
            },
            AttributeSeed {
                attribute: "Software",
                control_type: "Checkboxes",
                required: false,
                values: &[
                    ("Microsoft Office", 50.0),
                    ("Acrobat Reader", 10.0),
                    ("Total Commander", 5.0),
                ],
            },
        ],
    },
    ProductSeed {
        name: "Apple MacBook Pro 13-inch",
        sku: "AP_MBP_13",
        short_description: "A groundbreaking Retina display. A new force-sensing trackpad.",
        category: "Notebooks",
        manufacturer: Some("Apple"),
        tax_category: "Electronics & Software",
        delivery_date: Some("1-2 days"),
        price: 1800.0,
        old_price: 0.0,
        weight: 3.0,
        download: None,
        show_on_home_page: true,
        mark_as_new: true,
        specifications: &[
            ("Screensize", "13.0''"),
            ("CPU Type", "Intel Core i5"),
            ("Memory", "4 GB"),
            ("Hard drive", "128 GB"),
        ],
        attributes: &[],
    },
    ProductSeed {
        name: "HP Spectre XT Pro UltraBook",
        sku: "HP_SPX_UB",
        short_description: "HP Spectre XT Pro UltraBook / Intel Core i5-2467M / 13.3 / 4GB / 128GB SSD",
        category: "Notebooks",
        manufacturer: Some("HP"),
        tax_category: "Electronics & Software",
        delivery_date: Some("1-2 days"),
        price: 1350.0,
        old_price: 0.0,
        weight: 2.0,
        download: None,
        show_on_home_page: false,
        mark_as_new: false,
        specifications: &[
            ("Screensize", "13.3''"),
            ("CPU Type", "Intel Core i7"),
            ("Memory", "4 GB"),
            ("Hard drive", "128 GB"),
        ],
        attributes: &[],
    },
    ProductSeed {
        name: "HP Envy 6-1180ca 15.6-Inch Sleekbook",
        sku: "HP_ESB_15",
        short_description: "HP ENVY 6-1202ea Ultrabook Beats Audio, 3rd generation Intel Core i7-3517U processor",
        category: "Notebooks",
        manufacturer: Some("HP"),
        tax_category: "Electronics & Software",
        delivery_date: Some("3-5 days"),
        price: 1460.0,
        old_price: 0.0,
        weight: 7.0,
        download: None,
        show_on_home_page: true,
        mark_as_new: false,
        specifications: &[
            ("Screensize", "15.6''"),
            ("CPU Type", "Intel Core i5"),
            ("Memory", "8 GB"),
            ("Hard drive", "500 GB"),
        ],
        attributes: &[],
    },
    ProductSeed {
        name: "Adobe Photoshop CS4",
        sku: "ADB_PS_CS4",
        short_description: "Easily find and view all your photos",
        category: "Software",
        manufacturer: None,
        tax_category: "Electronics & Software",
        delivery_date: None,
        price: 75.0,
        old_price: 0.0,
        weight: 0.0,
        download: Some("photoshop-trial.zip"),
        show_on_home_page: false,
        mark_as_new: false,
        specifications: &[],
        attributes: &[],
    },
    ProductSeed {
        name: "Nikon D5500 DSLR",
        sku: "N5500DS_0",
        short_description: "Slim, lightweight Nikon D5500 packs a vari-angle touchscreen",
        category: "Camera & photo",
        manufacturer: None,
        tax_category: "Electronics & Software",
        delivery_date: Some("1-2 days"),
        price: 670.0,
        old_price: 0.0,
        weight: 2.0,
        download: None,
        show_on_home_page: true,
        mark_as_new: false,
        specifications: &[],
        attributes: &[],
    },
    ProductSeed {
        name: "HTC One M8 Android L 5.0 Lollipop",
        sku: "M8_HTC_5L",
        short_description: "HTC - One (M8) 4G LTE Cell Phone with 32GB Memory - Gunmetal (Sprint)",
        category: "Cell phones",
        manufacturer: None,
        tax_category: "Electronics & Software",
        delivery_date: Some("3-5 days"),
        price: 245.0,
        old_price: 0.0,
        weight: 1.0,
        download: None,
        show_on_home_page: true,
        mark_as_new: true,
        specifications: &[("Color", "Grey")],
        attributes: &[],
    },
    ProductSeed {
        name: "Nike Floral Roshe Customized Running Shoes",
        sku: "NK_FRC_RS",
        short_description: "When you ran across these shoes, you will immediately fell in love",
        category: "Shoes",
        manufacturer: Some("Nike"),
        tax_category: "Apparel",
        delivery_date: Some("1 week"),
        price: 40.0,
        old_price: 0.0,
        weight: 2.0,
        download: None,
        show_on_home_page: false,
        mark_as_new: false,
        specifications: &[("Color", "Red")],
        attributes: &[
            AttributeSeed {
                attribute: "Size",
                control_type: "DropdownList",
                required: true,
                values: &[("8", 0.0), ("9", 0.0), ("10", 0.0), ("11", 0.0)],
            },
            AttributeSeed {
                attribute: "Color",
                control_type: "DropdownList",
                required: true,
                values: &[("White/Blue", 0.0), ("White/Black", 0.0)],
            },
            AttributeSeed {
                attribute: "Print",
                control_type: "ImageSquares",
                required: false,
                values: &[("Natural", 0.0), ("Fresh", 0.0)],
            },
        ],
    },
    ProductSeed {
        name: "Custom T-Shirt",
        sku: "CS_TSHIRT",
        short_description: "T-Shirt - Add Your Content",
        category: "Clothing",
        manufacturer: None,
        tax_category: "Apparel",
        delivery_date: Some("3-5 days"),
        price: 15.0,
        old_price: 0.0,
        weight: 1.0,
        download: None,
        show_on_home_page: false,
        mark_as_new: false,
        specifications: &[("Color", "Blue")],
        attributes: &[AttributeSeed {
            attribute: "Custom Text",
            control_type: "TextBox",
            required: true,
            values: &[],
        }],
    },
    ProductSeed {
        name: "Night Visions",
        sku: "NIGHT_VSN",
        short_description: "Night Visions is the debut studio album by American rock band Imagine Dragons.",
        category: "Digital downloads",
        manufacturer: None,
        tax_category: "Downloadable Products",
        delivery_date: None,
        price: 2.8,
        old_price: 0.0,
        weight: 0.0,
        download: Some("night-visions.zip"),
        show_on_home_page: false,
        mark_as_new: false,
        specifications: &[],
        attributes: &[],
    },
    ProductSeed {
        name: "Fahrenheit 451 by Ray Bradbury",
        sku: "FIRST_PRP",
        short_description: "The author of more than thirty books, Ray Bradbury is one of the great voices of American literature.",
        category: "Books",
        manufacturer: None,
        tax_category: "Books",
        delivery_date: Some("1-2 days"),
        price: 27.0,
        old_price: 30.0,
        weight: 2.0,
        download: None,
        show_on_home_page: false,
        mark_as_new: false,
        specifications: &[],
        attributes: &[],
    },
    ProductSeed {
        name: "Elegant Gemstone Necklace",
        sku: "EG_GEM_NL",
        short_description: "Classic and elegant gemstone necklace now available in our store",
        category: "Jewelry",
        manufacturer: None,
        tax_category: "Jewelry",
        delivery_date: Some("1 week"),
        price: 369.0,
        old_price: 0.0,
        weight: 1.0,
        download: None,
        show_on_home_page: false,
        mark_as_new: true,
        specifications: &[],
        attributes: &[],
    },
    ProductSeed {
        name: "$25 Virtual Gift Card",
        sku: "VG_CR_025",
        short_description: "$25 Gift Card. Gift Cards must be redeemed through our site Web site toward the purchase of eligible products.",
        category: "Gift Cards",
        manufacturer: None,
        tax_category: "Downloadable Products",
        delivery_date: None,
        price: 25.0,
        old_price: 0.0,
        weight: 0.0,
        download: None,
        show_on_home_page: true,
        mark_as_new: false,
        specifications: &[],
        attributes: &[],
    },
];

pub fn products(ctx: &GenerationContext<'_>) -> Result<Vec<Product>, InstallError> {
    let resolver = ctx.resolver;
    let template_id = resolver.resolve_id::<ProductTemplate>(NaturalKey::name(SIMPLE_PRODUCT))?;
    let now = ctx.install.installed_at;

    let mut products = Vec::with_capacity(PRODUCTS.len());
    for seed in PRODUCTS {
        let category_id = resolver.resolve_id::<Category>(NaturalKey::name(seed.category))?;
        let manufacturers = match seed.manufacturer {
            Some(name) => vec![ProductManufacturer {
                manufacturer_id: resolver.resolve_id::<Manufacturer>(NaturalKey::name(name))?,
                display_order: 1,
            }],
            None => Vec::new(),
        };
        let delivery_date_id = seed
            .delivery_date
            .map(|name| resolver.resolve_id::<DeliveryDate>(NaturalKey::name(name)))
            .transpose()?;

        let mut specification_attributes = Vec::with_capacity(seed.specifications.len());
        for (index, (attribute, option)) in seed.specifications.iter().enumerate() {
            let attribute_id =
                resolver.resolve_id::<SpecificationAttribute>(NaturalKey::name(*attribute))?;
            specification_attributes.push(ProductSpecificationAttribute {
                specification_attribute_option_id: resolver
                    .resolve_id::<SpecificationAttributeOption>(NaturalKey::scoped(
                        attribute_id,
                        *option,
                    ))?,
                allow_filtering: true,
                show_on_product_page: true,
                display_order: index as i32 + 1,
            });
        }

        let mut attributes = Vec::with_capacity(seed.attributes.len());
        for attribute in seed.attributes {
            attributes.push(ProductAttributeMapping {
                product_attribute_id: resolver
                    .resolve_id::<ProductAttribute>(NaturalKey::name(attribute.attribute))?,
                text_prompt: attribute.attribute.to_string(),
                is_required: attribute.required,
                control_type: attribute.control_type.to_string(),
                values: attribute
                    .values
                    .iter()
                    .enumerate()
                    .map(|(index, (name, adjustment))| ProductAttributeValue {
                        name: name.to_string(),
                        price_adjustment: *adjustment,
                        is_pre_selected: index == 0 && attribute.required,
                        display_order: index as i32 + 1,
                    })
                    .collect(),
            });
        }

        let download_id = match seed.download {
            Some(file_name) => Some(ctx.assets.insert_download(
                SAMPLE_DOWNLOAD,
                "application/zip",
                file_name,
            )?),
            None => None,
        };
        let shipped = download_id.is_none() && seed.weight > 0.0;
        let side = if shipped { 2.0 } else { 0.0 };

        products.push(Product {
            name: seed.name.to_string(),
            sku: seed.sku.to_string(),
            short_description: seed.short_description.to_string(),
            full_description: format!("<p>{}</p>", seed.short_description),
            product_type: ProductType::SimpleProduct,
            product_template_id: template_id,
            price: seed.price,
            old_price: seed.old_price,
            is_shipping_enabled: shipped,
            weight: seed.weight,
            length: side,
            width: side,
            height: side,
            tax_category_id: resolver
                .resolve_id::<TaxCategory>(NaturalKey::name(seed.tax_category))?,
            stock_quantity: 10_000,
            delivery_date_id,
            is_download: download_id.is_some(),
            download_id,
            published: true,
            show_on_home_page: seed.show_on_home_page,
            mark_as_new: seed.mark_as_new,
            allow_customer_reviews: true,
            created_on: now,
            updated_on: now,
            categories: vec![ProductCategory {
                category_id,
                display_order: 1,
            }],
            manufacturers,
            pictures: vec![ProductPicture {
                picture_id: picture(ctx, seed.name)?,
                display_order: 1,
            }],
            specification_attributes,
            attributes,
        });
    }
    Ok(products)
}

const PRODUCT_TAGS: &[(&str, &[&str])] = &[
    ("apparel", &["NK_FRC_RS", "CS_TSHIRT"]),
    ("awesome", &["COMP_CUST", "AP_MBP_13", "NK_FRC_RS"]),
    ("book", &["FIRST_PRP"]),
    ("camera", &["N5500DS_0"]),
    ("cell", &["M8_HTC_5L"]),
    ("compact", &["AP_MBP_13", "HP_SPX_UB"]),
    ("computer", &["COMP_CUST", "AP_MBP_13", "HP_SPX_UB", "HP_ESB_15"]),
    ("cool", &["HP_SPX_UB", "N5500DS_0", "M8_HTC_5L"]),
    ("digital", &["NIGHT_VSN", "ADB_PS_CS4"]),
    ("gift", &["VG_CR_025"]),
    ("jewelry", &["EG_GEM_NL"]),
    ("shoes", &["NK_FRC_RS"]),
];

/// Tags name their products by SKU.
pub fn product_tags(ctx: &GenerationContext<'_>) -> Result<Vec<ProductTag>, InstallError> {
    PRODUCT_TAGS
        .iter()
        .map(|(name, skus)| {
            Ok(ProductTag {
                name: name.to_string(),
                product_ids: ctx
                    .resolver
                    .resolve_ids::<Product, _>(skus.iter().map(|sku| NaturalKey::code(*sku)))?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetStore;
    use crate::generate::testing::Fixture;
    use crate::generate::{reference, templates};
    use crate::store::{EntityStore, EntityStoreExt};
    use crate::types::EntityKind;

    fn with_templates() -> Fixture {
        let fixture = Fixture::new();
        let ctx = fixture.context();
        fixture
            .store
            .insert_all(&templates::category_templates(&ctx).unwrap())
            .unwrap();
        fixture
    }

    #[test]
    fn seo_names_are_dashed() {
        assert_eq!(seo_name("Camera & photo"), "camera-photo");
        assert_eq!(seo_name("$25 Virtual Gift Card"), "25-virtual-gift-card");
    }

    #[test]
    fn second_level_before_first_level_is_not_found() {
        let fixture = with_templates();
        let err = second_level_categories(&fixture.context()).unwrap_err();

        assert!(matches!(
            err,
            InstallError::NotFound {
                kind: EntityKind::Category,
                ..
            }
        ));
        assert_eq!(fixture.store.count(EntityKind::Category).unwrap(), 0);
    }

    #[test]
    fn second_level_categories_point_at_parents() {
        let fixture = with_templates();
        let ctx = fixture.context();
        fixture
            .store
            .insert_all(&first_level_categories(&ctx).unwrap())
            .unwrap();

        let children = second_level_categories(&ctx).unwrap();
        let notebooks = children.iter().find(|c| c.name == "Notebooks").unwrap();
        assert_eq!(notebooks.parent_category_id, Some(1));
        let shoes = children.iter().find(|c| c.name == "Shoes").unwrap();
        assert_eq!(shoes.parent_category_id, Some(3));
        assert!(fixture.assets.count().unwrap() >= FIRST_LEVEL_CATEGORIES.len());
    }

    #[test]
    fn product_skus_are_unique_and_tags_reference_them() {
        let skus: std::collections::HashSet<&str> = PRODUCTS.iter().map(|p| p.sku).collect();
        assert_eq!(skus.len(), PRODUCTS.len());
        for (_, tagged) in PRODUCT_TAGS {
            assert!(tagged.iter().all(|sku| skus.contains(sku)));
        }
    }

    #[test]
    fn product_specifications_name_existing_options() {
        for seed in PRODUCTS {
            for (attribute, option) in seed.specifications {
                let (_, options) = reference::SPECIFICATION_ATTRIBUTES
                    .iter()
                    .find(|(name, _)| name == attribute)
                    .unwrap();
                assert!(options.iter().any(|(name, _)| name == option));
            }
        }
    }
}
