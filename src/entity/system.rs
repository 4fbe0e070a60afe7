//! Store-level rows: stores, languages, customers, messaging, settings, jobs.

use crate::entity::Entity;
use crate::install::plan::StageId;
use crate::types::{EntityKind, NaturalKey, RowId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub name: String,
    pub url: String,
    pub ssl_enabled: bool,
    pub hosts: String,
    pub display_order: i32,
    pub company_name: String,
    pub company_address: String,
    pub company_phone_number: String,
}

entity!(Store, Store, Name => name, DisplayOrder => display_order);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub language_culture: String,
    pub unique_seo_code: String,
    pub flag_image_file_name: String,
    pub rtl: bool,
    pub published: bool,
    pub display_order: i32,
}

entity!(
    Language,
    Language,
    Name => name,
    Code => language_culture,
    DisplayOrder => display_order,
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRole {
    pub name: String,
    pub system_name: String,
    pub active: bool,
    pub is_system_role: bool,
    pub free_shipping: bool,
    pub tax_exempt: bool,
}

entity!(CustomerRole, CustomerRole, Name => name, SystemName => system_name);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerPassword {
    pub hash: String,
    pub salt: String,
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub email: String,
    pub username: String,
    pub active: bool,
    pub is_system_account: bool,
    /// Only built-in background accounts carry a system name.
    pub system_name: Option<String>,
    pub role_ids: Vec<RowId>,
    pub password: Option<CustomerPassword>,
    pub registered_in_store_id: RowId,
    pub created_on: DateTime<Utc>,
}

impl Entity for Customer {
    const KIND: EntityKind = EntityKind::Customer;

    fn matches(&self, key: &NaturalKey) -> bool {
        match key {
            NaturalKey::Email(email) => !self.email.is_empty() && &self.email == email,
            NaturalKey::SystemName(name) => self.system_name.as_ref() == Some(name),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailAccount {
    pub email: String,
    pub display_name: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub enable_ssl: bool,
    pub use_default_credentials: bool,
}

entity!(EmailAccount, EmailAccount, Email => email, Name => display_name);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageTemplate {
    pub name: String,
    pub subject: String,
    pub body: String,
    pub is_active: bool,
    pub email_account_id: RowId,
}

entity!(MessageTemplate, MessageTemplate, Name => name);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicTemplate {
    pub name: String,
    pub view_path: String,
    pub display_order: i32,
}

entity!(TopicTemplate, TopicTemplate, Name => name);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub system_name: String,
    pub title: String,
    pub body: String,
    pub include_in_sitemap: bool,
    pub include_in_footer_column: Option<u8>,
    pub display_order: i32,
    pub published: bool,
    pub topic_template_id: RowId,
}

entity!(Topic, Topic, SystemName => system_name, Title => title);

/// One persisted configuration value, named `{group}.{field}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    pub name: String,
    pub value: String,
    /// `None` applies to every store.
    pub store_id: Option<RowId>,
}

entity!(Setting, Setting, Name => name);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogType {
    pub system_keyword: String,
    pub name: String,
    pub enabled: bool,
}

entity!(ActivityLogType, ActivityLogType, SystemName => system_keyword, Name => name);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleTask {
    pub name: String,
    pub seconds: u32,
    pub task_type: String,
    pub enabled: bool,
    pub stop_on_error: bool,
}

entity!(ScheduleTask, ScheduleTask, Name => name, SystemName => task_type);

/// Install journal row written after a stage persists its output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedStage {
    pub stage: StageId,
    pub produced: EntityKind,
    pub rows: usize,
    pub completed_at: DateTime<Utc>,
}

impl Entity for CompletedStage {
    const KIND: EntityKind = EntityKind::CompletedStage;

    fn matches(&self, key: &NaturalKey) -> bool {
        matches!(key, NaturalKey::Name(name) if name == self.stage.as_str())
    }
}
