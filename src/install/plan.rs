//! The fixed installation order.
//!
//! Stages run in exactly the order of [`INSTALL_PLAN`]. The order is authored
//! by hand; [`validate_plan`] only checks it: every kind a stage reads must be
//! produced by a strictly earlier stage, and phases never go backwards.

use crate::error::InstallError;
use crate::types::EntityKind;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StageId {
    Stores,
    Languages,
    CustomerRoles,
    Customers,
    MeasureDimensions,
    MeasureWeights,
    TaxCategories,
    Currencies,
    Countries,
    ShippingMethods,
    DeliveryDates,
    EmailAccounts,
    MessageTemplates,
    TopicTemplates,
    Topics,
    CategoryTemplates,
    ManufacturerTemplates,
    ProductTemplates,
    Settings,
    ActivityLogTypes,
    ScheduleTasks,
    SpecificationAttributes,
    SpecificationAttributeOptions,
    ProductAttributes,
    FirstLevelCategories,
    SecondLevelCategories,
    Manufacturers,
    Products,
    ProductTags,
    ForumGroups,
    Forums,
    Discounts,
    BlogPosts,
    NewsItems,
    Polls,
}

impl StageId {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageId::Stores => "stores",
            StageId::Languages => "languages",
            StageId::CustomerRoles => "customer-roles",
            StageId::Customers => "customers",
            StageId::MeasureDimensions => "measure-dimensions",
            StageId::MeasureWeights => "measure-weights",
            StageId::TaxCategories => "tax-categories",
            StageId::Currencies => "currencies",
            StageId::Countries => "countries",
            StageId::ShippingMethods => "shipping-methods",
            StageId::DeliveryDates => "delivery-dates",
            StageId::EmailAccounts => "email-accounts",
            StageId::MessageTemplates => "message-templates",
            StageId::TopicTemplates => "topic-templates",
            StageId::Topics => "topics",
            StageId::CategoryTemplates => "category-templates",
            StageId::ManufacturerTemplates => "manufacturer-templates",
            StageId::ProductTemplates => "product-templates",
            StageId::Settings => "settings",
            StageId::ActivityLogTypes => "activity-log-types",
            StageId::ScheduleTasks => "schedule-tasks",
            StageId::SpecificationAttributes => "specification-attributes",
            StageId::SpecificationAttributeOptions => "specification-attribute-options",
            StageId::ProductAttributes => "product-attributes",
            StageId::FirstLevelCategories => "first-level-categories",
            StageId::SecondLevelCategories => "second-level-categories",
            StageId::Manufacturers => "manufacturers",
            StageId::Products => "products",
            StageId::ProductTags => "product-tags",
            StageId::ForumGroups => "forum-groups",
            StageId::Forums => "forums",
            StageId::Discounts => "discounts",
            StageId::BlogPosts => "blog-posts",
            StageId::NewsItems => "news-items",
            StageId::Polls => "polls",
        }
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which entry point runs a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    /// Rows every later write depends on; run by `install_early_required_data`.
    EarlyRequired,
    /// Reference data and settings; always run by `install_data`.
    Required,
    /// Demonstration content; run by `install_data` only when requested.
    Sample,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::EarlyRequired => "early-required",
            Phase::Required => "required",
            Phase::Sample => "sample",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageSpec {
    pub id: StageId,
    pub phase: Phase,
    pub reads: &'static [EntityKind],
    pub produces: EntityKind,
}

const fn stage(
    id: StageId,
    phase: Phase,
    reads: &'static [EntityKind],
    produces: EntityKind,
) -> StageSpec {
    StageSpec {
        id,
        phase,
        reads,
        produces,
    }
}

use EntityKind as K;

pub const INSTALL_PLAN: &[StageSpec] = &[
    stage(StageId::Stores, Phase::EarlyRequired, &[], K::Store),
    stage(StageId::Languages, Phase::EarlyRequired, &[], K::Language),
    stage(StageId::CustomerRoles, Phase::EarlyRequired, &[], K::CustomerRole),
    stage(
        StageId::Customers,
        Phase::EarlyRequired,
        &[K::Store, K::CustomerRole],
        K::Customer,
    ),
    stage(StageId::MeasureDimensions, Phase::Required, &[], K::MeasureDimension),
    stage(StageId::MeasureWeights, Phase::Required, &[], K::MeasureWeight),
    stage(StageId::TaxCategories, Phase::Required, &[], K::TaxCategory),
    stage(StageId::Currencies, Phase::Required, &[], K::Currency),
    stage(StageId::Countries, Phase::Required, &[], K::Country),
    stage(StageId::ShippingMethods, Phase::Required, &[], K::ShippingMethod),
    stage(StageId::DeliveryDates, Phase::Required, &[], K::DeliveryDate),
    stage(StageId::EmailAccounts, Phase::Required, &[], K::EmailAccount),
    stage(
        StageId::MessageTemplates,
        Phase::Required,
        &[K::EmailAccount],
        K::MessageTemplate,
    ),
    stage(StageId::TopicTemplates, Phase::Required, &[], K::TopicTemplate),
    stage(StageId::Topics, Phase::Required, &[K::TopicTemplate], K::Topic),
    stage(StageId::CategoryTemplates, Phase::Required, &[], K::CategoryTemplate),
    stage(
        StageId::ManufacturerTemplates,
        Phase::Required,
        &[],
        K::ManufacturerTemplate,
    ),
    stage(StageId::ProductTemplates, Phase::Required, &[], K::ProductTemplate),
    stage(
        StageId::Settings,
        Phase::Required,
        &[
            K::Store,
            K::Language,
            K::MeasureDimension,
            K::MeasureWeight,
            K::TaxCategory,
            K::Currency,
            K::Country,
            K::EmailAccount,
        ],
        K::Setting,
    ),
    stage(StageId::ActivityLogTypes, Phase::Required, &[], K::ActivityLogType),
    stage(StageId::ScheduleTasks, Phase::Required, &[], K::ScheduleTask),
    stage(
        StageId::SpecificationAttributes,
        Phase::Sample,
        &[],
        K::SpecificationAttribute,
    ),
    stage(
        StageId::SpecificationAttributeOptions,
        Phase::Sample,
        &[K::SpecificationAttribute],
        K::SpecificationAttributeOption,
    ),
    stage(StageId::ProductAttributes, Phase::Sample, &[], K::ProductAttribute),
    stage(
        StageId::FirstLevelCategories,
        Phase::Sample,
        &[K::CategoryTemplate],
        K::Category,
    ),
    stage(
        StageId::SecondLevelCategories,
        Phase::Sample,
        &[K::CategoryTemplate, K::Category],
        K::Category,
    ),
    stage(
        StageId::Manufacturers,
        Phase::Sample,
        &[K::ManufacturerTemplate],
        K::Manufacturer,
    ),
    stage(
        StageId::Products,
        Phase::Sample,
        &[
            K::ProductTemplate,
            K::TaxCategory,
            K::DeliveryDate,
            K::Category,
            K::Manufacturer,
            K::SpecificationAttribute,
            K::SpecificationAttributeOption,
            K::ProductAttribute,
        ],
        K::Product,
    ),
    stage(StageId::ProductTags, Phase::Sample, &[K::Product], K::ProductTag),
    stage(StageId::ForumGroups, Phase::Sample, &[], K::ForumGroup),
    stage(StageId::Forums, Phase::Sample, &[K::ForumGroup], K::Forum),
    stage(StageId::Discounts, Phase::Sample, &[], K::Discount),
    stage(StageId::BlogPosts, Phase::Sample, &[K::Language], K::BlogPost),
    stage(StageId::NewsItems, Phase::Sample, &[K::Language], K::NewsItem),
    stage(StageId::Polls, Phase::Sample, &[K::Language], K::Poll),
];

/// Stages of `INSTALL_PLAN` belonging to `phase`, in plan order.
pub fn stages_in(phase: Phase) -> impl Iterator<Item = &'static StageSpec> {
    INSTALL_PLAN.iter().filter(move |spec| spec.phase == phase)
}

/// Stages `install_data` runs for the given sample-data choice.
pub fn data_stages(install_sample_data: bool) -> Vec<&'static StageSpec> {
    INSTALL_PLAN
        .iter()
        .filter(|spec| match spec.phase {
            Phase::EarlyRequired => false,
            Phase::Required => true,
            Phase::Sample => install_sample_data,
        })
        .collect()
}

pub fn find_stage(id: StageId) -> Option<&'static StageSpec> {
    INSTALL_PLAN.iter().find(|spec| spec.id == id)
}

/// Check the ordering invariants of a stage list.
pub fn validate_plan(plan: &[StageSpec]) -> Result<(), InstallError> {
    if plan.is_empty() {
        return Err(InstallError::InvalidPlan(
            "Installation plan must contain at least one stage".to_string(),
        ));
    }

    let mut seen_stages = HashSet::new();
    let mut produced: HashSet<EntityKind> = HashSet::new();
    let mut last_phase = plan[0].phase;

    for spec in plan {
        if !seen_stages.insert(spec.id) {
            return Err(InstallError::InvalidPlan(format!(
                "Stage {} appears more than once",
                spec.id
            )));
        }
        if spec.phase < last_phase {
            return Err(InstallError::InvalidPlan(format!(
                "Stage {} ({}) runs after a {} stage",
                spec.id, spec.phase, last_phase
            )));
        }
        last_phase = spec.phase;

        for kind in spec.reads {
            if !produced.contains(kind) {
                return Err(InstallError::InvalidPlan(format!(
                    "Stage {} reads {} before any stage produces it",
                    spec.id, kind
                )));
            }
        }
        if spec.phase != Phase::Sample
            && spec
                .reads
                .iter()
                .any(|kind| only_sample_produces(plan, *kind))
        {
            return Err(InstallError::InvalidPlan(format!(
                "Stage {} depends on sample data",
                spec.id
            )));
        }
        produced.insert(spec.produces);
    }

    Ok(())
}

fn only_sample_produces(plan: &[StageSpec], kind: EntityKind) -> bool {
    plan.iter()
        .filter(|spec| spec.produces == kind)
        .all(|spec| spec.phase == Phase::Sample)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_plan_is_valid() {
        validate_plan(INSTALL_PLAN).unwrap();
    }

    #[test]
    fn every_read_is_produced_strictly_earlier() {
        for (index, spec) in INSTALL_PLAN.iter().enumerate() {
            for kind in spec.reads {
                let producer = INSTALL_PLAN[..index]
                    .iter()
                    .position(|earlier| earlier.produces == *kind);
                assert!(
                    producer.is_some(),
                    "stage {} reads {} which no earlier stage produces",
                    spec.id,
                    kind
                );
            }
        }
    }

    #[test]
    fn named_orderings_hold() {
        let position = |id: StageId| INSTALL_PLAN.iter().position(|s| s.id == id).unwrap();
        assert!(position(StageId::MeasureDimensions) < position(StageId::Settings));
        assert!(position(StageId::TaxCategories) < position(StageId::Settings));
        assert!(position(StageId::Currencies) < position(StageId::Settings));
        assert!(position(StageId::FirstLevelCategories) < position(StageId::SecondLevelCategories));
        assert!(position(StageId::SpecificationAttributes) < position(StageId::Products));
        assert!(position(StageId::ProductTemplates) < position(StageId::Products));
        assert!(position(StageId::Manufacturers) < position(StageId::Products));
        assert!(position(StageId::DeliveryDates) < position(StageId::Products));
        assert!(position(StageId::Products) < position(StageId::ProductTags));
    }

    #[test]
    fn rejects_read_before_produce() {
        let plan = [
            stage(StageId::SecondLevelCategories, Phase::Sample, &[K::Category], K::Category),
            stage(StageId::FirstLevelCategories, Phase::Sample, &[], K::Category),
        ];
        assert!(matches!(
            validate_plan(&plan),
            Err(InstallError::InvalidPlan(_))
        ));
    }

    #[test]
    fn rejects_phase_regression_and_duplicates() {
        let regress = [
            stage(StageId::Discounts, Phase::Sample, &[], K::Discount),
            stage(StageId::TaxCategories, Phase::Required, &[], K::TaxCategory),
        ];
        assert!(validate_plan(&regress).is_err());

        let duplicate = [
            stage(StageId::TaxCategories, Phase::Required, &[], K::TaxCategory),
            stage(StageId::TaxCategories, Phase::Required, &[], K::TaxCategory),
        ];
        assert!(validate_plan(&duplicate).is_err());
    }

    #[test]
    fn data_stages_without_sample_skip_sample_phase() {
        let stages = data_stages(false);
        assert!(stages.iter().all(|s| s.phase == Phase::Required));
        assert!(stages.iter().any(|s| s.id == StageId::Settings));
        assert!(!stages.iter().any(|s| s.id == StageId::Products));
        assert_eq!(
            data_stages(true).len(),
            INSTALL_PLAN.len() - stages_in(Phase::EarlyRequired).count()
        );
    }

    #[test]
    fn stage_names_are_unique() {
        let names: HashSet<&str> = INSTALL_PLAN.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(names.len(), INSTALL_PLAN.len());
    }
}
