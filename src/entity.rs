//! Domain rows produced by the installer.
//!
//! Every persisted type implements [`Entity`]: it names its table through
//! [`EntityKind`] and says which [`NaturalKey`]s identify it. Cross-entity
//! references inside a row are plain [`RowId`](crate::types::RowId)s obtained
//! from the resolver, never in-memory references to another generator's output.

use crate::types::{EntityKind, NaturalKey};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

pub use catalog::{
    Category, Manufacturer, Product, ProductAttributeMapping, ProductAttributeValue,
    ProductCategory, ProductManufacturer, ProductPicture, ProductSpecificationAttribute,
    ProductTag, ProductType,
};
pub use content::{
    BlogPost, Discount, DiscountType, Forum, ForumGroup, NewsItem, Poll, PollAnswer,
};
pub use reference::{
    CategoryTemplate, Country, Currency, DeliveryDate, ManufacturerTemplate, MeasureDimension,
    MeasureWeight, ProductAttribute, ProductTemplate, RoundingType, ShippingMethod,
    SpecificationAttribute, SpecificationAttributeOption, StateProvince, TaxCategory,
};
pub use system::{
    ActivityLogType, CompletedStage, Customer, CustomerPassword, CustomerRole, EmailAccount,
    Language, MessageTemplate, ScheduleTask, Setting, Store, Topic, TopicTemplate,
};

/// A row type the installer persists and later resolves by natural key.
pub trait Entity: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static {
    const KIND: EntityKind;

    /// Whether this row is identified by `key`. Keys a type does not support never match.
    fn matches(&self, key: &NaturalKey) -> bool;
}

/// Implements [`Entity`] for rows whose natural keys are plain fields.
macro_rules! entity {
    ($ty:ty, $kind:ident, $($variant:ident => $field:ident),+ $(,)?) => {
        impl $crate::entity::Entity for $ty {
            const KIND: $crate::types::EntityKind = $crate::types::EntityKind::$kind;

            fn matches(&self, key: &$crate::types::NaturalKey) -> bool {
                match key {
                    $($crate::types::NaturalKey::$variant(value) => &self.$field == value,)+
                    _ => false,
                }
            }
        }
    };
}

pub mod catalog;
pub mod content;
pub mod reference;
pub mod system;
