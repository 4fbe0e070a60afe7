//! Store, language, role, account, messaging and job rows.

use crate::entity::{
    ActivityLogType, Customer, CustomerPassword, CustomerRole, EmailAccount, Language,
    MessageTemplate, ScheduleTask, Store, Topic, TopicTemplate,
};
use crate::error::InstallError;
use crate::generate::GenerationContext;
use crate::types::NaturalKey;

pub const ADMINISTRATORS_ROLE: &str = "Administrators";
pub const FORUM_MODERATORS_ROLE: &str = "ForumModerators";
pub const REGISTERED_ROLE: &str = "Registered";
pub const GUESTS_ROLE: &str = "Guests";
pub const VENDORS_ROLE: &str = "Vendors";

pub const SEARCH_ENGINE_ACCOUNT: &str = "SearchEngine";
pub const BACKGROUND_TASK_ACCOUNT: &str = "BackgroundTask";

/// Address of the account outgoing mail is sent from until an operator configures one.
pub const DEFAULT_EMAIL_ACCOUNT: &str = "test@mail.com";

pub const DEFAULT_TOPIC_TEMPLATE: &str = "Default template";

const PASSWORD_FORMAT: &str = "Hashed";

pub fn stores(ctx: &GenerationContext<'_>) -> Result<Vec<Store>, InstallError> {
    let install = ctx.install;
    if install.store_name.trim().is_empty() {
        return Err(InstallError::InvalidData(
            "Store name must not be empty".to_string(),
        ));
    }

    Ok(vec![Store {
        name: install.store_name.clone(),
        url: install.store_url.clone(),
        ssl_enabled: install.store_url.starts_with("https://"),
        hosts: store_hosts(&install.store_url),
        display_order: 1,
        company_name: "Your company name".to_string(),
        company_address: "your company country, state, zip, street, etc".to_string(),
        company_phone_number: "(123) 456-78901".to_string(),
    }])
}

/// `yourstore.com,www.yourstore.com` for `http://www.yourstore.com/`.
fn store_hosts(url: &str) -> String {
    let host = url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .split(['/', ':'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    let bare = host.trim_start_matches("www.");
    if bare.is_empty() {
        return String::new();
    }
    format!("{},www.{}", bare, bare)
}

const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("da", "Dansk"),
    ("de", "Deutsch"),
    ("en", "English"),
    ("es", "Español"),
    ("fr", "Français"),
    ("it", "Italiano"),
    ("ja", "日本語"),
    ("nb", "Norsk bokmål"),
    ("nl", "Nederlands"),
    ("pl", "Polski"),
    ("pt", "Português"),
    ("ru", "Русский"),
    ("sv", "Svenska"),
    ("tr", "Türkçe"),
    ("zh", "中文"),
];

/// The default language, taken from the install locale.
pub fn languages(ctx: &GenerationContext<'_>) -> Result<Vec<Language>, InstallError> {
    let install = ctx.install;
    let code = install.language_code();
    if code.is_empty() {
        return Err(InstallError::InvalidData(format!(
            "Locale '{}' has no language part",
            install.locale
        )));
    }

    let name = LANGUAGE_NAMES
        .iter()
        .find(|(language, _)| *language == code)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| install.locale.clone());
    let flag = install
        .region_code()
        .map(|region| format!("{}.png", region.to_ascii_lowercase()))
        .unwrap_or_default();

    Ok(vec![Language {
        name,
        language_culture: install.locale.clone(),
        unique_seo_code: code,
        flag_image_file_name: flag,
        rtl: false,
        published: true,
        display_order: 1,
    }])
}

pub fn customer_roles(_ctx: &GenerationContext<'_>) -> Result<Vec<CustomerRole>, InstallError> {
    let role = |name: &str, system_name: &str| CustomerRole {
        name: name.to_string(),
        system_name: system_name.to_string(),
        active: true,
        is_system_role: true,
        free_shipping: false,
        tax_exempt: false,
    };

    Ok(vec![
        role("Administrators", ADMINISTRATORS_ROLE),
        role("Forum Moderators", FORUM_MODERATORS_ROLE),
        role("Registered", REGISTERED_ROLE),
        role("Guests", GUESTS_ROLE),
        role("Vendors", VENDORS_ROLE),
    ])
}

/// The administrator plus the two built-in system accounts.
pub fn customers(ctx: &GenerationContext<'_>) -> Result<Vec<Customer>, InstallError> {
    let install = ctx.install;
    let resolver = ctx.resolver;
    if install.admin_email.trim().is_empty() {
        return Err(InstallError::InvalidData(
            "Administrator e-mail must not be empty".to_string(),
        ));
    }

    let store_id = resolver.resolve_id::<Store>(NaturalKey::name(&install.store_name))?;
    let guests = resolver.resolve_id::<CustomerRole>(NaturalKey::system_name(GUESTS_ROLE))?;
    let admin_roles = resolver.resolve_ids::<CustomerRole, _>([
        NaturalKey::system_name(ADMINISTRATORS_ROLE),
        NaturalKey::system_name(FORUM_MODERATORS_ROLE),
        NaturalKey::system_name(REGISTERED_ROLE),
    ])?;

    let system_account = |system_name: &str| Customer {
        email: String::new(),
        username: String::new(),
        active: true,
        is_system_account: true,
        system_name: Some(system_name.to_string()),
        role_ids: vec![guests],
        password: None,
        registered_in_store_id: store_id,
        created_on: install.installed_at,
    };

    Ok(vec![
        Customer {
            email: install.admin_email.clone(),
            username: install.admin_email.clone(),
            active: true,
            is_system_account: false,
            system_name: None,
            role_ids: admin_roles,
            password: Some(hash_password(ctx, &install.admin_email, &install.admin_password)),
            registered_in_store_id: store_id,
            created_on: install.installed_at,
        },
        system_account(SEARCH_ENGINE_ACCOUNT),
        system_account(BACKGROUND_TASK_ACCOUNT),
    ])
}

/// Salted blake3 digest for the seeded accounts. The salt comes from the
/// account and install instant, so reruns of a fresh install match.
///
/// blake3 is a fast general-purpose hash, not a password hash: one pass gives
/// no work factor against offline guessing. This only suits demo credentials
/// written at install time. Real customer passwords need a slow KDF such as
/// argon2 or bcrypt.
fn hash_password(ctx: &GenerationContext<'_>, email: &str, password: &str) -> CustomerPassword {
    let mut salt_hasher = blake3::Hasher::new();
    salt_hasher.update(email.as_bytes());
    salt_hasher.update(ctx.install.installed_at.to_rfc3339().as_bytes());
    let salt = hex::encode(&salt_hasher.finalize().as_bytes()[..16]);

    let mut hasher = blake3::Hasher::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());

    CustomerPassword {
        hash: hasher.finalize().to_hex().to_string(),
        salt,
        format: PASSWORD_FORMAT.to_string(),
    }
}

pub fn email_accounts(_ctx: &GenerationContext<'_>) -> Result<Vec<EmailAccount>, InstallError> {
    Ok(vec![EmailAccount {
        email: DEFAULT_EMAIL_ACCOUNT.to_string(),
        display_name: "Store name".to_string(),
        host: "smtp.mail.com".to_string(),
        port: 25,
        username: "123".to_string(),
        password: "123".to_string(),
        enable_ssl: false,
        use_default_credentials: false,
    }])
}

const MESSAGE_TEMPLATES: &[(&str, &str, &str)] = &[
    (
        "Customer.WelcomeMessage",
        "Welcome to %Store.Name%",
        "We welcome you to %Store.Name%. You can now take part in the various services we have to offer you.",
    ),
    (
        "Customer.EmailValidationMessage",
        "%Store.Name%. Email validation",
        "To activate your account click <a href=\"%Customer.AccountActivationURL%\">here</a>.",
    ),
    (
        "Customer.PasswordRecovery",
        "%Store.Name%. Password recovery",
        "To change your password click <a href=\"%Customer.PasswordRecoveryURL%\">here</a>.",
    ),
    (
        "NewCustomer.Notification",
        "%Store.Name%. New customer registration",
        "A new customer registered with your store. Full name: %Customer.FullName%, e-mail: %Customer.Email%.",
    ),
    (
        "OrderPlaced.CustomerNotification",
        "%Store.Name%. Order receipt #%Order.OrderNumber%",
        "Hello %Order.CustomerFullName%, thanks for buying from %Store.Name%. Order #%Order.OrderNumber%.",
    ),
    (
        "OrderPlaced.StoreOwnerNotification",
        "%Store.Name%. Purchase receipt for order #%Order.OrderNumber%",
        "%Order.CustomerFullName% (%Order.CustomerEmail%) has just placed order #%Order.OrderNumber%.",
    ),
    (
        "ShipmentSent.CustomerNotification",
        "Your order from %Store.Name% has been shipped.",
        "Hello %Order.CustomerFullName%! Part of your order #%Order.OrderNumber% has been shipped.",
    ),
    (
        "OrderCompleted.CustomerNotification",
        "%Store.Name%. Your order completed",
        "Hello %Order.CustomerFullName%, your order #%Order.OrderNumber% has been completed.",
    ),
    (
        "NewsLetterSubscription.ActivationMessage",
        "%Store.Name%. Subscription activation message",
        "<a href=\"%NewsLetterSubscription.ActivationUrl%\">Click here to confirm your subscription.</a>",
    ),
    (
        "Forums.NewForumTopic",
        "%Store.Name%. New Post Notification.",
        "A new post has been created in the topic \"%Forums.TopicName%\" at \"%Forums.ForumName%\" forum.",
    ),
    (
        "Product.ProductReview",
        "%Store.Name%. New product review.",
        "A new product review has been written for product \"%ProductReview.ProductName%\".",
    ),
];

pub fn message_templates(
    ctx: &GenerationContext<'_>,
) -> Result<Vec<MessageTemplate>, InstallError> {
    let email_account_id = ctx
        .resolver
        .resolve_id::<EmailAccount>(NaturalKey::email(DEFAULT_EMAIL_ACCOUNT))?;

    Ok(MESSAGE_TEMPLATES
        .iter()
        .map(|(name, subject, body)| MessageTemplate {
            name: name.to_string(),
            subject: subject.to_string(),
            body: format!("<p>{}</p>", body),
            is_active: true,
            email_account_id,
        })
        .collect())
}

// (system name, title, include in sitemap, footer column)
const TOPICS: &[(&str, &str, bool, Option<u8>)] = &[
    ("AboutUs", "About us", false, Some(1)),
    ("CheckoutAsGuestOrRegister", "", false, None),
    ("ConditionsOfUse", "Conditions of Use", false, Some(1)),
    ("ContactUs", "", false, None),
    ("ForumWelcomeMessage", "Forums", false, None),
    ("HomePageText", "Welcome to our store", false, None),
    ("LoginRegistrationInfo", "About login / registration", false, None),
    ("PrivacyInfo", "Privacy notice", false, Some(1)),
    ("PageNotFound", "", false, None),
    ("ShippingInfo", "Shipping & returns", false, Some(1)),
];

pub fn topics(ctx: &GenerationContext<'_>) -> Result<Vec<Topic>, InstallError> {
    let template_id = ctx
        .resolver
        .resolve_id::<TopicTemplate>(NaturalKey::name(DEFAULT_TOPIC_TEMPLATE))?;

    Ok(TOPICS
        .iter()
        .enumerate()
        .map(|(index, (system_name, title, sitemap, footer))| Topic {
            system_name: system_name.to_string(),
            title: title.to_string(),
            body: format!("<p>Put your {} information here.</p>", system_name),
            include_in_sitemap: *sitemap,
            include_in_footer_column: *footer,
            display_order: index as i32 + 1,
            published: true,
            topic_template_id: template_id,
        })
        .collect())
}

const ACTIVITY_LOG_TYPES: &[(&str, &str, bool)] = &[
    ("AddNewCategory", "Add a new category", true),
    ("AddNewCustomer", "Add a new customer", true),
    ("AddNewDiscount", "Add a new discount", true),
    ("AddNewManufacturer", "Add a new manufacturer", true),
    ("AddNewProduct", "Add a new product", true),
    ("AddNewSetting", "Add a new setting", true),
    ("DeleteCategory", "Delete category", true),
    ("DeleteCustomer", "Delete a customer", true),
    ("DeleteProduct", "Delete a product", true),
    ("EditCategory", "Edit category", true),
    ("EditCustomer", "Edit a customer", true),
    ("EditProduct", "Edit a product", true),
    ("EditSettings", "Edit setting(s)", true),
    ("PublicStore.AddToShoppingCart", "Public store. Add to shopping cart", false),
    ("PublicStore.Login", "Public store. Login", false),
    ("PublicStore.PlaceOrder", "Public store. Place an order", false),
    ("PublicStore.ViewCategory", "Public store. View a category", false),
    ("PublicStore.ViewProduct", "Public store. View a product", false),
];

pub fn activity_log_types(
    _ctx: &GenerationContext<'_>,
) -> Result<Vec<ActivityLogType>, InstallError> {
    Ok(ACTIVITY_LOG_TYPES
        .iter()
        .map(|(keyword, name, enabled)| ActivityLogType {
            system_keyword: keyword.to_string(),
            name: name.to_string(),
            enabled: *enabled,
        })
        .collect())
}

// (name, interval seconds, task type, enabled)
const SCHEDULE_TASKS: &[(&str, u32, &str, bool)] = &[
    ("Send emails", 60, "QueuedMessagesSendTask", true),
    ("Keep alive", 300, "KeepAliveTask", true),
    ("Delete guests", 600, "DeleteGuestsTask", true),
    ("Clear cache", 600, "ClearCacheTask", false),
    ("Clear log", 3600, "ClearLogTask", false),
    ("Update currency exchange rates", 3600, "UpdateExchangeRateTask", true),
];

pub fn schedule_tasks(_ctx: &GenerationContext<'_>) -> Result<Vec<ScheduleTask>, InstallError> {
    Ok(SCHEDULE_TASKS
        .iter()
        .map(|(name, seconds, task_type, enabled)| ScheduleTask {
            name: name.to_string(),
            seconds: *seconds,
            task_type: task_type.to_string(),
            enabled: *enabled,
            stop_on_error: false,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::templates;
    use crate::generate::testing::Fixture;
    use crate::store::EntityStoreExt;

    #[test]
    fn hosts_are_derived_from_url() {
        assert_eq!(
            store_hosts("http://www.yourstore.com/"),
            "yourstore.com,www.yourstore.com"
        );
        assert_eq!(store_hosts("https://shop.example:8443"), "shop.example,www.shop.example");
        assert_eq!(store_hosts(""), "");
    }

    #[test]
    fn language_follows_locale() {
        let mut fixture = Fixture::new();
        fixture.install.locale = "de-DE".to_string();
        let languages = languages(&fixture.context()).unwrap();

        assert_eq!(languages.len(), 1);
        assert_eq!(languages[0].name, "Deutsch");
        assert_eq!(languages[0].unique_seo_code, "de");
        assert_eq!(languages[0].flag_image_file_name, "de.png");
    }

    #[test]
    fn customers_require_roles_and_store() {
        let fixture = Fixture::new();
        let err = customers(&fixture.context()).unwrap_err();
        assert!(matches!(err, InstallError::NotFound { .. }));
    }

    #[test]
    fn customers_are_deterministic_and_wired_to_roles() {
        let fixture = Fixture::new();
        let ctx = fixture.context();
        fixture.store.insert_all(&stores(&ctx).unwrap()).unwrap();
        fixture.store.insert_all(&customer_roles(&ctx).unwrap()).unwrap();

        let first = customers(&ctx).unwrap();
        let second = customers(&ctx).unwrap();
        assert_eq!(first, second);

        let admin = &first[0];
        assert_eq!(admin.role_ids, vec![1, 2, 3]);
        let password = admin.password.as_ref().unwrap();
        assert_ne!(password.hash, fixture.install.admin_password);
        assert_eq!(password.salt.len(), 32);

        assert_eq!(first[1].system_name.as_deref(), Some(SEARCH_ENGINE_ACCOUNT));
        assert_eq!(first[2].role_ids, vec![4]);
    }

    #[test]
    fn seeded_password_is_one_salted_blake3_pass() {
        let fixture = Fixture::new();
        let ctx = fixture.context();
        let password = hash_password(&ctx, "admin@yourstore.com", "admin");

        let mut expected = blake3::Hasher::new();
        expected.update(password.salt.as_bytes());
        expected.update(b"admin");
        assert_eq!(password.hash, expected.finalize().to_hex().to_string());

        let other = hash_password(&ctx, "builtin@search-engine-record.com", "admin");
        assert_ne!(other.salt, password.salt);
        assert_ne!(other.hash, password.hash);
    }

    #[test]
    fn topics_resolve_their_template() {
        let fixture = Fixture::new();
        let ctx = fixture.context();
        assert!(topics(&ctx).is_err());

        fixture
            .store
            .insert_all(&templates::topic_templates(&ctx).unwrap())
            .unwrap();
        let topics = topics(&ctx).unwrap();
        assert!(topics.iter().all(|t| t.topic_template_id == 1));
        assert!(topics.iter().any(|t| t.system_name == "ShippingInfo"));
    }
}
