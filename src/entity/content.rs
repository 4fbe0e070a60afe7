//! Ancillary sample content: forums, discounts, blog, news and polls.

use crate::types::RowId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumGroup {
    pub name: String,
    pub display_order: i32,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

entity!(ForumGroup, ForumGroup, Name => name);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forum {
    pub forum_group_id: RowId,
    pub name: String,
    pub description: String,
    pub num_topics: u32,
    pub num_posts: u32,
    pub display_order: i32,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

entity!(Forum, Forum, Name => name);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountType {
    AssignedToOrderTotal,
    AssignedToSkus,
    AssignedToCategories,
    AssignedToManufacturers,
    AssignedToShipping,
    AssignedToOrderSubTotal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub name: String,
    pub discount_type: DiscountType,
    pub use_percentage: bool,
    pub discount_percentage: f64,
    pub discount_amount: f64,
    pub requires_coupon_code: bool,
    pub coupon_code: String,
    pub limitation_times: Option<u32>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

entity!(Discount, Discount, Name => name);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub language_id: RowId,
    pub title: String,
    pub body_overview: String,
    pub body: String,
    pub tags: String,
    pub allow_comments: bool,
    pub include_in_sitemap: bool,
    pub created_on: DateTime<Utc>,
}

entity!(BlogPost, BlogPost, Title => title);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub language_id: RowId,
    pub title: String,
    pub short: String,
    pub full: String,
    pub published: bool,
    pub allow_comments: bool,
    pub created_on: DateTime<Utc>,
}

entity!(NewsItem, NewsItem, Title => title);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollAnswer {
    pub name: String,
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poll {
    pub language_id: RowId,
    pub name: String,
    pub system_keyword: String,
    pub published: bool,
    pub show_on_home_page: bool,
    pub display_order: i32,
    pub answers: Vec<PollAnswer>,
}

entity!(Poll, Poll, Name => name, SystemName => system_keyword);
