//! Sample forums, discounts, blog posts, news and polls.

use crate::entity::{
    BlogPost, Discount, DiscountType, Forum, ForumGroup, Language, NewsItem, Poll, PollAnswer,
};
use crate::error::InstallError;
use crate::generate::GenerationContext;
use crate::types::{NaturalKey, RowId};
use chrono::Duration;

pub const GENERAL_FORUM_GROUP: &str = "General";

pub fn forum_groups(ctx: &GenerationContext<'_>) -> Result<Vec<ForumGroup>, InstallError> {
    let now = ctx.install.installed_at;
    Ok(vec![ForumGroup {
        name: GENERAL_FORUM_GROUP.to_string(),
        display_order: 5,
        created_on: now,
        updated_on: now,
    }])
}

const FORUMS: &[(&str, &str)] = &[
    ("New Products", "Discuss new products and industry trends"),
    ("Mobile Devices Forum", "Discuss the mobile phone market"),
    ("Packaging & Shipping", "Discuss packaging & shipping"),
];

pub fn forums(ctx: &GenerationContext<'_>) -> Result<Vec<Forum>, InstallError> {
    let group_id = ctx
        .resolver
        .resolve_id::<ForumGroup>(NaturalKey::name(GENERAL_FORUM_GROUP))?;
    let now = ctx.install.installed_at;

    Ok(FORUMS
        .iter()
        .enumerate()
        .map(|(index, (name, description))| Forum {
            forum_group_id: group_id,
            name: name.to_string(),
            description: description.to_string(),
            num_topics: 0,
            num_posts: 0,
            display_order: index as i32 + 1,
            created_on: now,
            updated_on: now,
        })
        .collect())
}

pub fn discounts(_ctx: &GenerationContext<'_>) -> Result<Vec<Discount>, InstallError> {
    Ok(vec![
        Discount {
            name: "Sample discount with coupon code".to_string(),
            discount_type: DiscountType::AssignedToSkus,
            use_percentage: false,
            discount_percentage: 0.0,
            discount_amount: 10.0,
            requires_coupon_code: true,
            coupon_code: "123".to_string(),
            limitation_times: None,
            start_date: None,
            end_date: None,
        },
        Discount {
            name: "'20% order total' discount".to_string(),
            discount_type: DiscountType::AssignedToOrderTotal,
            use_percentage: true,
            discount_percentage: 20.0,
            discount_amount: 0.0,
            requires_coupon_code: true,
            coupon_code: "456".to_string(),
            limitation_times: Some(1),
            start_date: None,
            end_date: None,
        },
    ])
}

fn default_language(ctx: &GenerationContext<'_>) -> Result<RowId, InstallError> {
    ctx.resolver
        .resolve_id::<Language>(NaturalKey::code(&ctx.install.locale))
}

pub fn blog_posts(ctx: &GenerationContext<'_>) -> Result<Vec<BlogPost>, InstallError> {
    let language_id = default_language(ctx)?;
    let now = ctx.install.installed_at;

    Ok(vec![
        BlogPost {
            language_id,
            title: "How a blog can help your growing e-Commerce business".to_string(),
            body_overview: "<p>When you start an online business, your main aim is to sell the products, right?</p>".to_string(),
            body: "<p>As a business owner, you want to showcase your store to more audience.</p>".to_string(),
            tags: "e-commerce, blog, money".to_string(),
            allow_comments: true,
            include_in_sitemap: true,
            created_on: now,
        },
        BlogPost {
            language_id,
            title: "Why your online store needs a wish list".to_string(),
            body_overview: "<p>What comes to your mind, when you hear the term \"wish list\"?</p>".to_string(),
            body: "<p>A wish list is a list of products a customer likes but is not ready to buy yet.</p>".to_string(),
            tags: "e-commerce, wish list".to_string(),
            allow_comments: true,
            include_in_sitemap: true,
            created_on: now + Duration::seconds(1),
        },
    ])
}

pub fn news_items(ctx: &GenerationContext<'_>) -> Result<Vec<NewsItem>, InstallError> {
    let language_id = default_language(ctx)?;
    let now = ctx.install.installed_at;

    let items = [
        (
            "About our store",
            "It's stable and highly usable. From downloads to documentation, we offer everything you need.",
        ),
        (
            "New online store is open!",
            "The new store is open now! We are very excited to offer our new range of products.",
        ),
        (
            "Your store is ready for the holidays",
            "Everything is prepared for the season, from gift cards to express shipping.",
        ),
    ];

    Ok(items
        .iter()
        .enumerate()
        .map(|(index, (title, short))| NewsItem {
            language_id,
            title: title.to_string(),
            short: short.to_string(),
            full: format!("<p>{}</p>", short),
            published: true,
            allow_comments: true,
            created_on: now + Duration::seconds(index as i64),
        })
        .collect())
}

pub fn polls(ctx: &GenerationContext<'_>) -> Result<Vec<Poll>, InstallError> {
    let language_id = default_language(ctx)?;
    let answers = ["Excellent", "Good", "Poor", "Very bad"];

    Ok(vec![Poll {
        language_id,
        name: "Do you like our store?".to_string(),
        system_keyword: String::new(),
        published: true,
        show_on_home_page: true,
        display_order: 1,
        answers: answers
            .iter()
            .enumerate()
            .map(|(index, name)| PollAnswer {
                name: name.to_string(),
                display_order: index as i32 + 1,
            })
            .collect(),
    }])
}
