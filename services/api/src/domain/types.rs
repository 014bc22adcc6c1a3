use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Credential record, one per registered vendor.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Vendor profile with open/closed status.
#[derive(Debug, Clone)]
pub struct Vendor {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub specialty: Option<String>,
    pub whatsapp_number: String,
    pub is_open: bool,
    pub last_updated: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub account_id: Uuid,
}

/// A dish on a vendor's menu.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub is_available: bool,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub vendor_id: i32,
}

/// Vendor profile fields supplied at registration.
#[derive(Debug, Clone)]
pub struct VendorProfile {
    pub name: String,
    pub location: String,
    pub specialty: Option<String>,
    pub whatsapp_number: String,
}

/// Validated menu item payload for create/update/replace.
#[derive(Debug, Clone)]
pub struct MenuItemDraft {
    pub name: String,
    pub price: Decimal,
    pub is_available: bool,
    pub category: String,
}

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_NAME_LEN: usize = 100;
pub const MAX_LOCATION_LEN: usize = 200;
pub const MAX_SPECIALTY_LEN: usize = 100;
pub const MAX_PHONE_LEN: usize = 20;
pub const MAX_CATEGORY_LEN: usize = 50;
pub const DEFAULT_CATEGORY: &str = "General";

/// Inclusive price bounds: 0.01 – 999999.99.
pub fn min_price() -> Decimal {
    Decimal::new(1, 2)
}

pub fn max_price() -> Decimal {
    Decimal::new(99_999_999, 2)
}

/// Minimal syntactic email check: one `@` with non-empty local and domain
/// parts, a dot in the domain, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > 254 || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Phone-format check: optional leading `+`, then digits with separators
/// (space, dash, parentheses), at least 7 digits total.
pub fn is_valid_phone(number: &str) -> bool {
    if number.is_empty() || number.len() > MAX_PHONE_LEN {
        return false;
    }
    let rest = number.strip_prefix('+').unwrap_or(number);
    if !rest
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
    {
        return false;
    }
    rest.chars().filter(char::is_ascii_digit).count() >= 7
}

/// Validate registration input. Returns every violated constraint.
pub fn validate_registration(email: &str, password: &str, profile: &VendorProfile) -> Vec<String> {
    let mut errors = Vec::new();
    if !is_valid_email(email) {
        errors.push("email is not a valid address".to_string());
    }
    if password.len() < MIN_PASSWORD_LEN {
        errors.push(format!("password must be at least {MIN_PASSWORD_LEN} characters"));
    }
    if profile.name.is_empty() {
        errors.push("name is required".to_string());
    } else if profile.name.len() > MAX_NAME_LEN {
        errors.push(format!("name must be at most {MAX_NAME_LEN} characters"));
    }
    if profile.location.is_empty() {
        errors.push("location is required".to_string());
    } else if profile.location.len() > MAX_LOCATION_LEN {
        errors.push(format!("location must be at most {MAX_LOCATION_LEN} characters"));
    }
    if let Some(specialty) = &profile.specialty {
        if specialty.len() > MAX_SPECIALTY_LEN {
            errors.push(format!("specialty must be at most {MAX_SPECIALTY_LEN} characters"));
        }
    }
    if !is_valid_phone(&profile.whatsapp_number) {
        errors.push("whatsAppNumber is not a valid phone number".to_string());
    }
    errors
}

/// Validate a menu item payload. Returns every violated constraint.
pub fn validate_menu_item(draft: &MenuItemDraft) -> Vec<String> {
    let mut errors = Vec::new();
    if draft.name.is_empty() {
        errors.push("name is required".to_string());
    } else if draft.name.len() > MAX_NAME_LEN {
        errors.push(format!("name must be at most {MAX_NAME_LEN} characters"));
    }
    if draft.price < min_price() || draft.price > max_price() {
        errors.push("price must be between 0.01 and 999999.99".to_string());
    }
    if draft.category.len() > MAX_CATEGORY_LEN {
        errors.push(format!("category must be at most {MAX_CATEGORY_LEN} characters"));
    }
    errors
}

/// Sort vendors for listing: open vendors first, then by name ascending.
pub fn sort_vendors(vendors: &mut [Vendor]) {
    vendors.sort_by(|a, b| b.is_open.cmp(&a.is_open).then_with(|| a.name.cmp(&b.name)));
}

/// Sort menu items for listing: category ascending, then name ascending.
pub fn sort_menu_items(items: &mut [MenuItem]) {
    items.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name)));
}
