//! Core identifier types shared by the store, resolver and installer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Surrogate row identifier assigned by the store on insert.
pub type RowId = u64;

/// Every entity type the installer can produce.
///
/// The variant doubles as the persistence table name and as the dispatch key for
/// extension hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    Store,
    Language,
    CustomerRole,
    Customer,
    MeasureDimension,
    MeasureWeight,
    TaxCategory,
    Currency,
    Country,
    ShippingMethod,
    DeliveryDate,
    EmailAccount,
    MessageTemplate,
    TopicTemplate,
    Topic,
    CategoryTemplate,
    ManufacturerTemplate,
    ProductTemplate,
    Setting,
    ActivityLogType,
    ScheduleTask,
    SpecificationAttribute,
    SpecificationAttributeOption,
    ProductAttribute,
    Category,
    Manufacturer,
    Product,
    ProductTag,
    ForumGroup,
    Forum,
    Discount,
    BlogPost,
    NewsItem,
    Poll,
    CompletedStage,
}

impl EntityKind {
    pub const ALL: &'static [EntityKind] = &[
        EntityKind::Store,
        EntityKind::Language,
        EntityKind::CustomerRole,
        EntityKind::Customer,
        EntityKind::MeasureDimension,
        EntityKind::MeasureWeight,
        EntityKind::TaxCategory,
        EntityKind::Currency,
        EntityKind::Country,
        EntityKind::ShippingMethod,
        EntityKind::DeliveryDate,
        EntityKind::EmailAccount,
        EntityKind::MessageTemplate,
        EntityKind::TopicTemplate,
        EntityKind::Topic,
        EntityKind::CategoryTemplate,
        EntityKind::ManufacturerTemplate,
        EntityKind::ProductTemplate,
        EntityKind::Setting,
        EntityKind::ActivityLogType,
        EntityKind::ScheduleTask,
        EntityKind::SpecificationAttribute,
        EntityKind::SpecificationAttributeOption,
        EntityKind::ProductAttribute,
        EntityKind::Category,
        EntityKind::Manufacturer,
        EntityKind::Product,
        EntityKind::ProductTag,
        EntityKind::ForumGroup,
        EntityKind::Forum,
        EntityKind::Discount,
        EntityKind::BlogPost,
        EntityKind::NewsItem,
        EntityKind::Poll,
        EntityKind::CompletedStage,
    ];

    /// Stable snake_case name, used as the sled tree name.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Store => "store",
            EntityKind::Language => "language",
            EntityKind::CustomerRole => "customer_role",
            EntityKind::Customer => "customer",
            EntityKind::MeasureDimension => "measure_dimension",
            EntityKind::MeasureWeight => "measure_weight",
            EntityKind::TaxCategory => "tax_category",
            EntityKind::Currency => "currency",
            EntityKind::Country => "country",
            EntityKind::ShippingMethod => "shipping_method",
            EntityKind::DeliveryDate => "delivery_date",
            EntityKind::EmailAccount => "email_account",
            EntityKind::MessageTemplate => "message_template",
            EntityKind::TopicTemplate => "topic_template",
            EntityKind::Topic => "topic",
            EntityKind::CategoryTemplate => "category_template",
            EntityKind::ManufacturerTemplate => "manufacturer_template",
            EntityKind::ProductTemplate => "product_template",
            EntityKind::Setting => "setting",
            EntityKind::ActivityLogType => "activity_log_type",
            EntityKind::ScheduleTask => "schedule_task",
            EntityKind::SpecificationAttribute => "specification_attribute",
            EntityKind::SpecificationAttributeOption => "specification_attribute_option",
            EntityKind::ProductAttribute => "product_attribute",
            EntityKind::Category => "category",
            EntityKind::Manufacturer => "manufacturer",
            EntityKind::Product => "product",
            EntityKind::ProductTag => "product_tag",
            EntityKind::ForumGroup => "forum_group",
            EntityKind::Forum => "forum",
            EntityKind::Discount => "discount",
            EntityKind::BlogPost => "blog_post",
            EntityKind::NewsItem => "news_item",
            EntityKind::Poll => "poll",
            EntityKind::CompletedStage => "completed_stage",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-surrogate attribute used to find a row persisted by an earlier stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NaturalKey {
    Name(String),
    SystemName(String),
    Code(String),
    Email(String),
    Title(String),
    DisplayOrder(i32),
    /// A name that is only unique below a parent row (e.g. an attribute option).
    Scoped { parent: RowId, name: String },
}

impl NaturalKey {
    pub fn name(value: impl Into<String>) -> Self {
        NaturalKey::Name(value.into())
    }

    pub fn system_name(value: impl Into<String>) -> Self {
        NaturalKey::SystemName(value.into())
    }

    pub fn code(value: impl Into<String>) -> Self {
        NaturalKey::Code(value.into())
    }

    pub fn email(value: impl Into<String>) -> Self {
        NaturalKey::Email(value.into())
    }

    pub fn title(value: impl Into<String>) -> Self {
        NaturalKey::Title(value.into())
    }

    pub fn scoped(parent: RowId, name: impl Into<String>) -> Self {
        NaturalKey::Scoped {
            parent,
            name: name.into(),
        }
    }
}

impl fmt::Display for NaturalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NaturalKey::Name(v) => write!(f, "name={:?}", v),
            NaturalKey::SystemName(v) => write!(f, "system_name={:?}", v),
            NaturalKey::Code(v) => write!(f, "code={:?}", v),
            NaturalKey::Email(v) => write!(f, "email={:?}", v),
            NaturalKey::Title(v) => write!(f, "title={:?}", v),
            NaturalKey::DisplayOrder(v) => write!(f, "display_order={}", v),
            NaturalKey::Scoped { parent, name } => write!(f, "parent={} name={:?}", parent, name),
        }
    }
}
