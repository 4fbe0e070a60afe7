//! Store configuration
//!
//! Settings are authored as typed groups. Each group resolves its forward
//! references (primary currency, base measures, default tax category, default
//! mail account and so on) and is then flattened into one [`Setting`] row per
//! field, named `{group}.{field}` in lower case.

use crate::entity::{
    Country, Currency, EmailAccount, Language, MeasureDimension, MeasureWeight, Setting, Store,
    TaxCategory,
};
use crate::error::InstallError;
use crate::generate::reference::{BASE_DIMENSION, BASE_WEIGHT, DEFAULT_TAX_CATEGORY};
use crate::generate::system::DEFAULT_EMAIL_ACCOUNT;
use crate::generate::GenerationContext;
use crate::types::{NaturalKey, RowId};
use serde::Serialize;
use serde_json::Value;

trait SettingsGroup: Serialize {
    const GROUP: &'static str;
}

#[derive(Serialize)]
struct StoreInformationSettings {
    default_store_id: RowId,
    store_closed: bool,
    default_store_theme: String,
    allow_customer_to_select_theme: bool,
    display_eu_cookie_law_warning: bool,
}

impl SettingsGroup for StoreInformationSettings {
    const GROUP: &'static str = "StoreInformationSettings";
}

#[derive(Serialize)]
struct LocalizationSettings {
    default_admin_language_id: RowId,
    use_images_for_language_selection: bool,
    seo_friendly_urls_for_languages_enabled: bool,
}

impl SettingsGroup for LocalizationSettings {
    const GROUP: &'static str = "LocalizationSettings";
}

#[derive(Serialize)]
struct CurrencySettings {
    primary_store_currency_id: RowId,
    primary_exchange_rate_currency_id: RowId,
    active_exchange_rate_provider_system_name: String,
    auto_update_enabled: bool,
}

impl SettingsGroup for CurrencySettings {
    const GROUP: &'static str = "CurrencySettings";
}

#[derive(Serialize)]
struct MeasureSettings {
    base_dimension_id: RowId,
    base_weight_id: RowId,
}

impl SettingsGroup for MeasureSettings {
    const GROUP: &'static str = "MeasureSettings";
}

#[derive(Serialize)]
struct TaxSettings {
    tax_based_on: String,
    prices_include_tax: bool,
    default_tax_category_id: RowId,
    default_tax_address_country_id: RowId,
    eu_vat_enabled: bool,
    shipping_is_taxable: bool,
}

impl SettingsGroup for TaxSettings {
    const GROUP: &'static str = "TaxSettings";
}

#[derive(Serialize)]
struct CatalogSettings {
    show_product_sku: bool,
    allow_product_sorting: bool,
    products_by_tag_page_size: u32,
    search_page_products_per_page: u32,
    default_category_page_size: u32,
    new_products_number: u32,
    compare_products_enabled: bool,
    recently_viewed_products_number: u32,
}

impl SettingsGroup for CatalogSettings {
    const GROUP: &'static str = "CatalogSettings";
}

#[derive(Serialize)]
struct CustomerSettings {
    username_enabled: bool,
    allow_users_to_change_usernames: bool,
    default_password_format: String,
    password_min_length: u32,
    user_registration_type: String,
    online_customer_minutes: u32,
}

impl SettingsGroup for CustomerSettings {
    const GROUP: &'static str = "CustomerSettings";
}

#[derive(Serialize)]
struct OrderSettings {
    is_reorder_allowed: bool,
    min_order_subtotal_amount: f64,
    anonymous_checkout_allowed: bool,
    terms_of_service_on_shopping_cart_page: bool,
    return_requests_enabled: bool,
    number_of_days_return_request_available: u32,
}

impl SettingsGroup for OrderSettings {
    const GROUP: &'static str = "OrderSettings";
}

#[derive(Serialize)]
struct ShippingSettings {
    active_shipping_rate_computation_method_system_names: Vec<String>,
    ship_to_same_address: bool,
    free_shipping_over_x_enabled: bool,
    free_shipping_over_x_value: f64,
    estimate_shipping_enabled: bool,
}

impl SettingsGroup for ShippingSettings {
    const GROUP: &'static str = "ShippingSettings";
}

#[derive(Serialize)]
struct MediaSettings {
    avatar_picture_size: u32,
    product_thumb_picture_size: u32,
    product_detail_picture_size: u32,
    category_thumb_picture_size: u32,
    maximum_image_size: u32,
    default_image_quality: u32,
}

impl SettingsGroup for MediaSettings {
    const GROUP: &'static str = "MediaSettings";
}

#[derive(Serialize)]
struct EmailAccountSettings {
    default_email_account_id: RowId,
}

impl SettingsGroup for EmailAccountSettings {
    const GROUP: &'static str = "EmailAccountSettings";
}

#[derive(Serialize)]
struct BlogSettings {
    enabled: bool,
    posts_page_size: u32,
    allow_not_registered_users_to_leave_comments: bool,
    number_of_tags: u32,
}

impl SettingsGroup for BlogSettings {
    const GROUP: &'static str = "BlogSettings";
}

#[derive(Serialize)]
struct NewsSettings {
    enabled: bool,
    allow_not_registered_users_to_leave_comments: bool,
    main_page_news_count: u32,
    news_archive_page_size: u32,
}

impl SettingsGroup for NewsSettings {
    const GROUP: &'static str = "NewsSettings";
}

#[derive(Serialize)]
struct ForumSettings {
    forums_enabled: bool,
    topics_page_size: u32,
    posts_page_size: u32,
    allow_guests_to_create_posts: bool,
}

impl SettingsGroup for ForumSettings {
    const GROUP: &'static str = "ForumSettings";
}

pub fn settings(ctx: &GenerationContext<'_>) -> Result<Vec<Setting>, InstallError> {
    let install = ctx.install;
    let resolver = ctx.resolver;

    let region = install.region_code().ok_or_else(|| {
        InstallError::InvalidData(format!(
            "Locale '{}' has no region to take the default tax country from",
            install.locale
        ))
    })?;
    let primary_currency_id =
        resolver.resolve_id::<Currency>(NaturalKey::code(&install.primary_currency_code))?;

    let mut rows = Vec::new();
    flatten(
        &StoreInformationSettings {
            default_store_id: resolver.resolve_id::<Store>(NaturalKey::name(&install.store_name))?,
            store_closed: false,
            default_store_theme: "DefaultClean".to_string(),
            allow_customer_to_select_theme: false,
            display_eu_cookie_law_warning: false,
        },
        &mut rows,
    )?;
    flatten(
        &LocalizationSettings {
            default_admin_language_id: resolver
                .resolve_id::<Language>(NaturalKey::code(&install.locale))?,
            use_images_for_language_selection: true,
            seo_friendly_urls_for_languages_enabled: false,
        },
        &mut rows,
    )?;
    flatten(
        &CurrencySettings {
            primary_store_currency_id: primary_currency_id,
            primary_exchange_rate_currency_id: primary_currency_id,
            active_exchange_rate_provider_system_name: "CurrencyExchange.ECB".to_string(),
            auto_update_enabled: false,
        },
        &mut rows,
    )?;
    flatten(
        &MeasureSettings {
            base_dimension_id: resolver
                .resolve_id::<MeasureDimension>(NaturalKey::system_name(BASE_DIMENSION))?,
            base_weight_id: resolver
                .resolve_id::<MeasureWeight>(NaturalKey::system_name(BASE_WEIGHT))?,
        },
        &mut rows,
    )?;
    flatten(
        &TaxSettings {
            tax_based_on: "BillingAddress".to_string(),
            prices_include_tax: false,
            default_tax_category_id: resolver
                .resolve_id::<TaxCategory>(NaturalKey::name(DEFAULT_TAX_CATEGORY))?,
            default_tax_address_country_id: resolver
                .resolve_id::<Country>(NaturalKey::code(region))?,
            eu_vat_enabled: false,
            shipping_is_taxable: false,
        },
        &mut rows,
    )?;
    flatten(
        &CatalogSettings {
            show_product_sku: true,
            allow_product_sorting: true,
            products_by_tag_page_size: 6,
            search_page_products_per_page: 6,
            default_category_page_size: 6,
            new_products_number: 6,
            compare_products_enabled: true,
            recently_viewed_products_number: 3,
        },
        &mut rows,
    )?;
    flatten(
        &CustomerSettings {
            username_enabled: false,
            allow_users_to_change_usernames: false,
            default_password_format: "Hashed".to_string(),
            password_min_length: 6,
            user_registration_type: "Standard".to_string(),
            online_customer_minutes: 20,
        },
        &mut rows,
    )?;
    flatten(
        &OrderSettings {
            is_reorder_allowed: true,
            min_order_subtotal_amount: 0.0,
            anonymous_checkout_allowed: true,
            terms_of_service_on_shopping_cart_page: true,
            return_requests_enabled: true,
            number_of_days_return_request_available: 365,
        },
        &mut rows,
    )?;
    flatten(
        &ShippingSettings {
            active_shipping_rate_computation_method_system_names: vec![
                "Shipping.FixedByWeightByTotal".to_string(),
            ],
            ship_to_same_address: true,
            free_shipping_over_x_enabled: false,
            free_shipping_over_x_value: 0.0,
            estimate_shipping_enabled: true,
        },
        &mut rows,
    )?;
    flatten(
        &MediaSettings {
            avatar_picture_size: 120,
            product_thumb_picture_size: 415,
            product_detail_picture_size: 550,
            category_thumb_picture_size: 450,
            maximum_image_size: 1980,
            default_image_quality: 80,
        },
        &mut rows,
    )?;
    flatten(
        &EmailAccountSettings {
            default_email_account_id: resolver
                .resolve_id::<EmailAccount>(NaturalKey::email(DEFAULT_EMAIL_ACCOUNT))?,
        },
        &mut rows,
    )?;
    flatten(
        &BlogSettings {
            enabled: true,
            posts_page_size: 10,
            allow_not_registered_users_to_leave_comments: true,
            number_of_tags: 15,
        },
        &mut rows,
    )?;
    flatten(
        &NewsSettings {
            enabled: true,
            allow_not_registered_users_to_leave_comments: true,
            main_page_news_count: 3,
            news_archive_page_size: 10,
        },
        &mut rows,
    )?;
    flatten(
        &ForumSettings {
            forums_enabled: false,
            topics_page_size: 10,
            posts_page_size: 10,
            allow_guests_to_create_posts: false,
        },
        &mut rows,
    )?;

    Ok(rows)
}

fn flatten<G: SettingsGroup>(group: &G, rows: &mut Vec<Setting>) -> Result<(), InstallError> {
    let value = serde_json::to_value(group)
        .map_err(|e| InstallError::InvalidData(format!("{}: {}", G::GROUP, e)))?;
    let Value::Object(fields) = value else {
        return Err(InstallError::InvalidData(format!(
            "{} did not serialize to a field map",
            G::GROUP
        )));
    };

    for (field, value) in &fields {
        rows.push(Setting {
            name: format!("{}.{}", G::GROUP, field).to_lowercase(),
            value: render(value),
            store_id: None,
        });
    }
    Ok(())
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(render).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}
