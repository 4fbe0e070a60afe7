//! Generators
//!
//! One function per stage. Every generator has the same shape:
//! `fn(&GenerationContext) -> Result<Vec<T>, InstallError>`. It combines the
//! static tables in its module with resolver lookups of rows earlier stages
//! persisted. It never inserts rows; only pictures and downloads go straight
//! to the asset store. The installer applies the profile hook and persists the
//! returned rows.
//!
//! Output depends only on the store contents and the [`InstallContext`]; all
//! timestamps derive from `InstallContext::installed_at`.

pub mod catalog;
pub mod content;
pub mod reference;
pub mod settings;
pub mod system;
pub mod templates;

use crate::assets::AssetStore;
use crate::culture::CultureMetadata;
use crate::install::context::InstallContext;
use crate::resolve::NaturalKeyResolver;

/// Collaborators threaded into every generator.
#[derive(Clone, Copy)]
pub struct GenerationContext<'a> {
    pub install: &'a InstallContext,
    pub resolver: NaturalKeyResolver<'a>,
    pub assets: &'a dyn AssetStore,
    pub culture: &'a dyn CultureMetadata,
}
