//! Reference data: measures, taxes, currencies, countries, shipping and the
//! attribute taxonomies the sample catalog uses.

use crate::entity::{
    Country, Currency, DeliveryDate, MeasureDimension, MeasureWeight, ProductAttribute,
    RoundingType, ShippingMethod, SpecificationAttribute, SpecificationAttributeOption,
    StateProvince, TaxCategory,
};
use crate::error::InstallError;
use crate::generate::GenerationContext;
use crate::types::NaturalKey;
use std::collections::HashSet;
use tracing::{debug, warn};

pub const BASE_DIMENSION: &str = "inches";
pub const BASE_WEIGHT: &str = "lb";

// (name, system keyword, ratio to the base unit)
const DIMENSIONS: &[(&str, &str, f64)] = &[
    ("inch(es)", "inches", 1.0),
    ("feet", "feet", 0.083_333_33),
    ("meter(s)", "meters", 0.0254),
    ("millimetre(s)", "millimetres", 25.4),
];

const WEIGHTS: &[(&str, &str, f64)] = &[
    ("ounce(s)", "ounce", 16.0),
    ("lb(s)", "lb", 1.0),
    ("kg(s)", "kg", 0.453_592_37),
    ("gram(s)", "grams", 453.592_37),
];

pub fn measure_dimensions(
    _ctx: &GenerationContext<'_>,
) -> Result<Vec<MeasureDimension>, InstallError> {
    Ok(DIMENSIONS
        .iter()
        .enumerate()
        .map(|(index, (name, keyword, ratio))| MeasureDimension {
            name: name.to_string(),
            system_keyword: keyword.to_string(),
            ratio: *ratio,
            display_order: index as i32 + 1,
        })
        .collect())
}

pub fn measure_weights(_ctx: &GenerationContext<'_>) -> Result<Vec<MeasureWeight>, InstallError> {
    Ok(WEIGHTS
        .iter()
        .enumerate()
        .map(|(index, (name, keyword, ratio))| MeasureWeight {
            name: name.to_string(),
            system_keyword: keyword.to_string(),
            ratio: *ratio,
            display_order: index as i32 + 1,
        })
        .collect())
}

pub const DEFAULT_TAX_CATEGORY: &str = "Books";

const TAX_CATEGORIES: &[&str] = &[
    "Books",
    "Electronics & Software",
    "Downloadable Products",
    "Jewelry",
    "Apparel",
];

pub fn tax_categories(_ctx: &GenerationContext<'_>) -> Result<Vec<TaxCategory>, InstallError> {
    Ok(TAX_CATEGORIES
        .iter()
        .enumerate()
        .map(|(index, name)| TaxCategory {
            name: name.to_string(),
            display_order: index as i32 + 1,
        })
        .collect())
}

// Approximate units per US dollar. Codes missing here get a rate of 1.
const USD_RATES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("AUD", 1.52),
    ("BRL", 4.97),
    ("CAD", 1.36),
    ("CHF", 0.88),
    ("CNY", 7.19),
    ("DKK", 6.87),
    ("EUR", 0.92),
    ("GBP", 0.79),
    ("HKD", 7.82),
    ("INR", 83.1),
    ("JPY", 149.8),
    ("NOK", 10.6),
    ("NZD", 1.64),
    ("PLN", 3.98),
    ("RUB", 91.5),
    ("SEK", 10.4),
    ("TRY", 31.2),
];

fn usd_rate(code: &str) -> f64 {
    USD_RATES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, rate)| *rate)
        .unwrap_or(1.0)
}

/// One currency per recognized locale in `currency_locales`, with rates
/// relative to the primary currency.
///
/// An unrecognized locale drops that one currency; the stage carries on.
/// Locales sharing a currency (e.g. `de-DE` and `fr-FR`) yield one row.
pub fn currencies(ctx: &GenerationContext<'_>) -> Result<Vec<Currency>, InstallError> {
    let install = ctx.install;
    let primary_rate = usd_rate(&install.primary_currency_code);
    let mut seen = HashSet::new();
    let mut currencies = Vec::new();

    for locale in &install.currency_locales {
        let Some(culture) = ctx.culture.lookup(locale) else {
            warn!(locale = %locale, "Skipping currency for unrecognized locale");
            continue;
        };
        if !seen.insert(culture.currency_code.clone()) {
            debug!(
                locale = %locale,
                currency = %culture.currency_code,
                "Currency already generated for another locale"
            );
            continue;
        }

        currencies.push(Currency {
            rate: usd_rate(&culture.currency_code) / primary_rate,
            name: culture.currency_name,
            currency_code: culture.currency_code,
            display_locale: culture.locale,
            custom_formatting: String::new(),
            published: true,
            display_order: currencies.len() as i32 + 1,
            rounding_type: RoundingType::Rounding001,
        });
    }

    Ok(currencies)
}

// (name, two-letter, three-letter, numeric, subject to VAT, display order)
const COUNTRIES: &[(&str, &str, &str, u16, bool, i32)] = &[
    ("United States", "US", "USA", 840, false, 1),
    ("Canada", "CA", "CAN", 124, false, 2),
    ("Australia", "AU", "AUS", 36, false, 100),
    ("Brazil", "BR", "BRA", 76, false, 100),
    ("China", "CN", "CHN", 156, false, 100),
    ("Denmark", "DK", "DNK", 208, true, 100),
    ("France", "FR", "FRA", 250, true, 100),
    ("Germany", "DE", "DEU", 276, true, 100),
    ("Hong Kong", "HK", "HKG", 344, false, 100),
    ("India", "IN", "IND", 356, false, 100),
    ("Italy", "IT", "ITA", 380, true, 100),
    ("Japan", "JP", "JPN", 392, false, 100),
    ("Netherlands", "NL", "NLD", 528, true, 100),
    ("New Zealand", "NZ", "NZL", 554, false, 100),
    ("Norway", "NO", "NOR", 578, false, 100),
    ("Poland", "PL", "POL", 616, true, 100),
    ("Russian Federation", "RU", "RUS", 643, false, 100),
    ("Spain", "ES", "ESP", 724, true, 100),
    ("Sweden", "SE", "SWE", 752, true, 100),
    ("Switzerland", "CH", "CHE", 756, false, 100),
    ("Turkey", "TR", "TUR", 792, false, 100),
    ("United Kingdom", "GB", "GBR", 826, true, 100),
];

/// Whether the country stage writes a row for this two-letter code.
pub fn is_seeded_country(code: &str) -> bool {
    COUNTRIES
        .iter()
        .any(|(_, two_letter, ..)| two_letter.eq_ignore_ascii_case(code))
}

const US_STATES: &[(&str, &str)] = &[
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Florida", "FL"),
    ("Illinois", "IL"),
    ("New York", "NY"),
    ("Texas", "TX"),
    ("Washington", "WA"),
];

const CANADIAN_PROVINCES: &[(&str, &str)] = &[
    ("Alberta", "AB"),
    ("British Columbia", "BC"),
    ("Manitoba", "MB"),
    ("New Brunswick", "NB"),
    ("Newfoundland and Labrador", "NL"),
    ("Nova Scotia", "NS"),
    ("Ontario", "ON"),
    ("Prince Edward Island", "PE"),
    ("Quebec", "QC"),
    ("Saskatchewan", "SK"),
];

fn states(two_letter: &str) -> Vec<StateProvince> {
    let table: &[(&str, &str)] = match two_letter {
        "US" => US_STATES,
        "CA" => CANADIAN_PROVINCES,
        _ => &[],
    };
    table
        .iter()
        .map(|(name, abbreviation)| StateProvince {
            name: name.to_string(),
            abbreviation: abbreviation.to_string(),
            published: true,
            display_order: 1,
        })
        .collect()
}

pub fn countries(_ctx: &GenerationContext<'_>) -> Result<Vec<Country>, InstallError> {
    Ok(COUNTRIES
        .iter()
        .map(|(name, two, three, numeric, vat, order)| Country {
            name: name.to_string(),
            allows_billing: true,
            allows_shipping: true,
            two_letter_iso_code: two.to_string(),
            three_letter_iso_code: three.to_string(),
            numeric_iso_code: *numeric,
            subject_to_vat: *vat,
            display_order: *order,
            published: true,
            states: states(two),
        })
        .collect())
}

pub fn shipping_methods(_ctx: &GenerationContext<'_>) -> Result<Vec<ShippingMethod>, InstallError> {
    let methods = [
        ("Ground", "Shipping by land transport"),
        ("Next Day Air", "The one day air shipping"),
        ("2nd Day Air", "The two day air shipping"),
    ];
    Ok(methods
        .iter()
        .enumerate()
        .map(|(index, (name, description))| ShippingMethod {
            name: name.to_string(),
            description: description.to_string(),
            display_order: index as i32 + 1,
        })
        .collect())
}

pub fn delivery_dates(_ctx: &GenerationContext<'_>) -> Result<Vec<DeliveryDate>, InstallError> {
    Ok(["1-2 days", "3-5 days", "1 week"]
        .iter()
        .enumerate()
        .map(|(index, name)| DeliveryDate {
            name: name.to_string(),
            display_order: index as i32 + 1,
        })
        .collect())
}

/// Specification attributes with their options; a color square is set for color options.
pub(crate) const SPECIFICATION_ATTRIBUTES: &[(&str, &[(&str, Option<&str>)])] = &[
    (
        "Screensize",
        &[
            ("13.0''", None),
            ("13.3''", None),
            ("14.0''", None),
            ("15.0''", None),
            ("15.6''", None),
        ],
    ),
    (
        "CPU Type",
        &[("Intel Core i5", None), ("Intel Core i7", None)],
    ),
    ("Memory", &[("4 GB", None), ("8 GB", None), ("16 GB", None)]),
    (
        "Hard drive",
        &[("128 GB", None), ("500 GB", None), ("1 TB", None)],
    ),
    (
        "Color",
        &[
            ("Grey", Some("#8a97a8")),
            ("Red", Some("#8a374a")),
            ("Blue", Some("#47476f")),
        ],
    ),
];

pub fn specification_attributes(
    _ctx: &GenerationContext<'_>,
) -> Result<Vec<SpecificationAttribute>, InstallError> {
    Ok(SPECIFICATION_ATTRIBUTES
        .iter()
        .enumerate()
        .map(|(index, (name, _))| SpecificationAttribute {
            name: name.to_string(),
            display_order: index as i32 + 1,
        })
        .collect())
}

pub fn specification_attribute_options(
    ctx: &GenerationContext<'_>,
) -> Result<Vec<SpecificationAttributeOption>, InstallError> {
    let mut options = Vec::new();
    for (attribute, values) in SPECIFICATION_ATTRIBUTES {
        let attribute_id = ctx
            .resolver
            .resolve_id::<SpecificationAttribute>(NaturalKey::name(*attribute))?;
        options.extend(values.iter().enumerate().map(|(index, (name, rgb))| {
            SpecificationAttributeOption {
                specification_attribute_id: attribute_id,
                name: name.to_string(),
                color_squares_rgb: rgb.map(str::to_string),
                display_order: index as i32 + 1,
            }
        }));
    }
    Ok(options)
}

const PRODUCT_ATTRIBUTES: &[(&str, &str)] = &[
    ("Color", ""),
    ("Print", ""),
    ("Custom Text", ""),
    ("HDD", ""),
    ("OS", ""),
    ("Processor", ""),
    ("RAM", ""),
    ("Size", ""),
    ("Software", ""),
];

pub fn product_attributes(
    _ctx: &GenerationContext<'_>,
) -> Result<Vec<ProductAttribute>, InstallError> {
    Ok(PRODUCT_ATTRIBUTES
        .iter()
        .map(|(name, description)| ProductAttribute {
            name: name.to_string(),
            description: description.to_string(),
        })
        .collect())
}
