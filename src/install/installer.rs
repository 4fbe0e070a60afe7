//! Stage orchestration
//!
//! Runs the stages of [`INSTALL_PLAN`] one at a time. Each stage generates its
//! rows, passes them through the profile's extension hook for that kind, and
//! persists the result before the next stage starts. A completed stage is
//! recorded in the install journal, which is how later stages (and later
//! entry-point calls) know that what they read exists.

use crate::assets::AssetStore;
use crate::culture::CultureMetadata;
use crate::entity::{CompletedStage, Entity};
use crate::error::InstallError;
use crate::generate::{catalog, content, reference, settings, system, templates, GenerationContext};
use crate::install::context::InstallContext;
use crate::install::plan::{
    data_stages, stages_in, validate_plan, Phase, StageId, StageSpec, INSTALL_PLAN,
};
use crate::install::profile::InstallProfile;
use crate::resolve::NaturalKeyResolver;
use crate::store::{EntityStore, EntityStoreExt};
use crate::types::EntityKind;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, instrument};

/// Outcome of one stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageReport {
    pub stage: StageId,
    pub phase: Phase,
    pub produced: EntityKind,
    /// Rows the generator returned.
    pub generated: usize,
    /// Rows persisted after the extension hook ran.
    pub persisted: usize,
}

/// What an entry point did, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InstallSummary {
    pub profile: String,
    pub stages: Vec<StageReport>,
    /// Sample stages left out because sample data was not requested.
    pub skipped: Vec<StageId>,
}

impl InstallSummary {
    pub fn total_persisted(&self) -> usize {
        self.stages.iter().map(|report| report.persisted).sum()
    }

    pub fn report(&self, stage: StageId) -> Option<&StageReport> {
        self.stages.iter().find(|report| report.stage == stage)
    }

    fn extend(&mut self, other: InstallSummary) {
        self.stages.extend(other.stages);
        self.skipped.extend(other.skipped);
    }
}

pub struct Installer {
    store: Arc<dyn EntityStore>,
    assets: Arc<dyn AssetStore>,
    culture: Arc<dyn CultureMetadata>,
    profile: InstallProfile,
}

impl Installer {
    pub fn new(
        store: Arc<dyn EntityStore>,
        assets: Arc<dyn AssetStore>,
        culture: Arc<dyn CultureMetadata>,
        profile: InstallProfile,
    ) -> Self {
        Self {
            store,
            assets,
            culture,
            profile,
        }
    }

    pub fn profile(&self) -> &InstallProfile {
        &self.profile
    }

    pub fn store(&self) -> &dyn EntityStore {
        self.store.as_ref()
    }

    /// Write the rows every later write depends on: the default store and
    /// language, the built-in roles and the built-in accounts.
    ///
    /// Refuses to run on a store that already has journaled stages.
    #[instrument(skip(self, context), fields(profile = %self.profile.name()))]
    pub fn install_early_required_data(
        &self,
        context: &InstallContext,
    ) -> Result<InstallSummary, InstallError> {
        validate_plan(INSTALL_PLAN)?;
        self.check_context(context)?;

        if let Some(done) = self.journal()?.first() {
            return Err(InstallError::StoreNotEmpty(done.stage));
        }

        let stages: Vec<&StageSpec> = stages_in(Phase::EarlyRequired).collect();
        self.run_stages(&stages, context, Vec::new())
    }

    /// Run every required stage, then the sample stages when the context asks
    /// for sample data.
    ///
    /// Every early required stage must already be journaled; nothing is
    /// written otherwise.
    #[instrument(
        skip(self, context),
        fields(profile = %self.profile.name(), sample_data = context.install_sample_data)
    )]
    pub fn install_data(&self, context: &InstallContext) -> Result<InstallSummary, InstallError> {
        validate_plan(INSTALL_PLAN)?;
        self.check_context(context)?;

        let journal = self.journal()?;
        for early in stages_in(Phase::EarlyRequired) {
            if !journal.iter().any(|done| done.stage == early.id) {
                return Err(InstallError::EarlyDataMissing(early.id));
            }
        }
        if let Some(done) = journal
            .iter()
            .find(|done| find_phase(done.stage) != Some(Phase::EarlyRequired))
        {
            return Err(InstallError::StoreNotEmpty(done.stage));
        }

        let skipped = if context.install_sample_data {
            Vec::new()
        } else {
            stages_in(Phase::Sample).map(|spec| spec.id).collect()
        };
        self.run_stages(&data_stages(context.install_sample_data), context, skipped)
    }

    /// Both entry points back to back.
    pub fn run_installation(
        &self,
        context: &InstallContext,
    ) -> Result<InstallSummary, InstallError> {
        let mut summary = self.install_early_required_data(context)?;
        summary.extend(self.install_data(context)?);
        Ok(summary)
    }

    /// Journal rows in completion order.
    pub fn journal(&self) -> Result<Vec<CompletedStage>, InstallError> {
        Ok(self
            .store
            .all::<CompletedStage>()?
            .into_iter()
            .map(|persisted| persisted.row)
            .collect())
    }

    /// Reject a context that a later stage would fail on, before anything is
    /// written. The settings stage needs a country row for the locale's region
    /// and some currency locale must produce the primary currency.
    fn check_context(&self, context: &InstallContext) -> Result<(), InstallError> {
        let region = context.region_code().ok_or_else(|| {
            InstallError::UnsupportedContext(format!(
                "locale '{}' has no region part",
                context.locale
            ))
        })?;
        if !reference::is_seeded_country(&region) {
            return Err(InstallError::UnsupportedContext(format!(
                "region {} of locale '{}' is not in the seeded country list",
                region, context.locale
            )));
        }

        let primary = &context.primary_currency_code;
        let mapped = context
            .currency_locales
            .iter()
            .filter_map(|locale| self.culture.lookup(locale))
            .any(|culture| &culture.currency_code == primary);
        if !mapped {
            return Err(InstallError::UnsupportedContext(format!(
                "no currency locale in {:?} maps to primary currency {}",
                context.currency_locales, primary
            )));
        }
        Ok(())
    }

    fn run_stages(
        &self,
        stages: &[&StageSpec],
        context: &InstallContext,
        skipped: Vec<StageId>,
    ) -> Result<InstallSummary, InstallError> {
        let start = Instant::now();
        let mut summary = InstallSummary {
            profile: self.profile.name().to_string(),
            stages: Vec::with_capacity(stages.len()),
            skipped,
        };

        for spec in stages {
            let report = self.run_stage(spec, context).map_err(|source| {
                error!(stage = %spec.id, error = %source, "Stage failed");
                InstallError::StageFailed {
                    stage: spec.id,
                    source: Box::new(source),
                }
            })?;
            summary.stages.push(report);
        }

        info!(
            stages = summary.stages.len(),
            rows = summary.total_persisted(),
            skipped = summary.skipped.len(),
            duration_ms = start.elapsed().as_millis(),
            "Installation phase completed"
        );
        Ok(summary)
    }

    fn run_stage(
        &self,
        spec: &StageSpec,
        context: &InstallContext,
    ) -> Result<StageReport, InstallError> {
        let journal = self.journal()?;
        for kind in spec.reads {
            if !journal.iter().any(|done| done.produced == *kind) {
                return Err(InstallError::StageNotRun {
                    stage: spec.id,
                    kind: *kind,
                });
            }
        }

        let generation = GenerationContext {
            install: context,
            resolver: NaturalKeyResolver::new(self.store.as_ref()),
            assets: self.assets.as_ref(),
            culture: self.culture.as_ref(),
        };

        let (generated, persisted) = match spec.id {
            StageId::Stores => self.persist(system::stores(&generation)?)?,
            StageId::Languages => self.persist(system::languages(&generation)?)?,
            StageId::CustomerRoles => self.persist(system::customer_roles(&generation)?)?,
            StageId::Customers => self.persist(system::customers(&generation)?)?,
            StageId::MeasureDimensions => {
                self.persist(reference::measure_dimensions(&generation)?)?
            }
            StageId::MeasureWeights => self.persist(reference::measure_weights(&generation)?)?,
            StageId::TaxCategories => self.persist(reference::tax_categories(&generation)?)?,
            StageId::Currencies => self.persist(reference::currencies(&generation)?)?,
            StageId::Countries => self.persist(reference::countries(&generation)?)?,
            StageId::ShippingMethods => self.persist(reference::shipping_methods(&generation)?)?,
            StageId::DeliveryDates => self.persist(reference::delivery_dates(&generation)?)?,
            StageId::EmailAccounts => self.persist(system::email_accounts(&generation)?)?,
            StageId::MessageTemplates => self.persist(system::message_templates(&generation)?)?,
            StageId::TopicTemplates => self.persist(templates::topic_templates(&generation)?)?,
            StageId::Topics => self.persist(system::topics(&generation)?)?,
            StageId::CategoryTemplates => {
                self.persist(templates::category_templates(&generation)?)?
            }
            StageId::ManufacturerTemplates => {
                self.persist(templates::manufacturer_templates(&generation)?)?
            }
            StageId::ProductTemplates => {
                self.persist(templates::product_templates(&generation)?)?
            }
            StageId::Settings => self.persist(settings::settings(&generation)?)?,
            StageId::ActivityLogTypes => self.persist(system::activity_log_types(&generation)?)?,
            StageId::ScheduleTasks => self.persist(system::schedule_tasks(&generation)?)?,
            StageId::SpecificationAttributes => {
                self.persist(reference::specification_attributes(&generation)?)?
            }
            StageId::SpecificationAttributeOptions => {
                self.persist(reference::specification_attribute_options(&generation)?)?
            }
            StageId::ProductAttributes => {
                self.persist(reference::product_attributes(&generation)?)?
            }
            StageId::FirstLevelCategories => {
                self.persist(catalog::first_level_categories(&generation)?)?
            }
            StageId::SecondLevelCategories => {
                self.persist(catalog::second_level_categories(&generation)?)?
            }
            StageId::Manufacturers => self.persist(catalog::manufacturers(&generation)?)?,
            StageId::Products => self.persist(catalog::products(&generation)?)?,
            StageId::ProductTags => self.persist(catalog::product_tags(&generation)?)?,
            StageId::ForumGroups => self.persist(content::forum_groups(&generation)?)?,
            StageId::Forums => self.persist(content::forums(&generation)?)?,
            StageId::Discounts => self.persist(content::discounts(&generation)?)?,
            StageId::BlogPosts => self.persist(content::blog_posts(&generation)?)?,
            StageId::NewsItems => self.persist(content::news_items(&generation)?)?,
            StageId::Polls => self.persist(content::polls(&generation)?)?,
        };

        self.store.insert(&CompletedStage {
            stage: spec.id,
            produced: spec.produces,
            rows: persisted,
            completed_at: context.installed_at,
        })?;
        self.store.flush()?;

        info!(
            stage = %spec.id,
            phase = %spec.phase,
            generated,
            persisted,
            "Stage completed"
        );

        Ok(StageReport {
            stage: spec.id,
            phase: spec.phase,
            produced: spec.produces,
            generated,
            persisted,
        })
    }

    /// Hook, then insert. Returns (generated, persisted) row counts.
    fn persist<T: Entity>(&self, generated: Vec<T>) -> Result<(usize, usize), InstallError> {
        let generated_count = generated.len();
        let rows = self.profile.hooks().apply(generated);
        self.store.insert_all(&rows)?;
        Ok((generated_count, rows.len()))
    }
}

fn find_phase(stage: StageId) -> Option<Phase> {
    INSTALL_PLAN
        .iter()
        .find(|spec| spec.id == stage)
        .map(|spec| spec.phase)
}
