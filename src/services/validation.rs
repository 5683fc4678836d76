//! Request validation for the three record kinds.
//!
//! Create inputs are turned into fully-defaulted `New*` values; update patches
//! are checked field by field, only for the fields they actually carry.

use crate::error::{FolioError, FolioResult};
use crate::models::{
    Budget, ContactStatus, CreateBlog, CreateContact, CreateService, Feature, Patch, Pricing,
    ServiceCategory, ServiceInterest, UpdateBlog, UpdateContact, UpdateService,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

pub const BLOG_TITLE_MAX: usize = 200;
pub const BLOG_EXCERPT_MAX: usize = 300;
pub const CONTACT_NAME_MAX: usize = 100;
pub const CONTACT_SUBJECT_MAX: usize = 200;
pub const CONTACT_MESSAGE_MAX: usize = 2000;
pub const SERVICE_SHORT_DESCRIPTION_MAX: usize = 150;

// `\w` is ASCII-only here. Plus-addressing and four-letter TLDs are rejected
// on purpose; existing clients rely on this exact pattern.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?-u:\w)+([.-]?(?-u:\w)+)*@(?-u:\w)+([.-]?(?-u:\w)+)*(\.(?-u:\w){2,3})+$")
        .expect("email pattern compiles")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Checks an input and produces its validated form.
pub trait Validate {
    type Output;

    fn validate(self) -> FolioResult<Self::Output>;
}

#[derive(Debug, Clone)]
pub struct NewBlog {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub featured_image: String,
    pub tags: Vec<String>,
    pub published: bool,
}

#[derive(Debug, Clone)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub service: ServiceInterest,
    pub budget: Budget,
}

#[derive(Debug, Clone)]
pub struct ContactChanges {
    pub name: Patch<String>,
    pub email: Patch<String>,
    pub subject: Patch<String>,
    pub message: Patch<String>,
    pub service: Patch<ServiceInterest>,
    pub budget: Patch<Budget>,
    pub status: Patch<ContactStatus>,
}

#[derive(Debug, Clone)]
pub struct NewService {
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub features: Vec<Feature>,
    pub pricing: Pricing,
    pub starting_price: f64,
    pub image: String,
    pub category: ServiceCategory,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct ServiceChanges {
    pub title: Patch<String>,
    pub description: Patch<String>,
    pub short_description: Patch<String>,
    pub features: Patch<Vec<Feature>>,
    pub pricing: Patch<Pricing>,
    pub starting_price: Patch<f64>,
    pub image: Patch<String>,
    pub category: Patch<ServiceCategory>,
    pub active: Patch<bool>,
}

impl Validate for CreateBlog {
    type Output = NewBlog;

    fn validate(self) -> FolioResult<NewBlog> {
        let title = required(self.title, "Please provide a title")?;
        max_chars(&title, BLOG_TITLE_MAX, "Title cannot be more than 200 characters")?;
        let excerpt = required(self.excerpt, "Please provide an excerpt")?;
        max_chars(&excerpt, BLOG_EXCERPT_MAX, "Excerpt cannot be more than 300 characters")?;
        let content = required(self.content, "Please provide content")?;

        Ok(NewBlog {
            title,
            excerpt,
            content,
            featured_image: self.featured_image.unwrap_or_default(),
            tags: self.tags.unwrap_or_default(),
            published: self.published.unwrap_or(false),
        })
    }
}

impl Validate for UpdateBlog {
    type Output = UpdateBlog;

    fn validate(self) -> FolioResult<UpdateBlog> {
        required_patch(&self.title, "Please provide a title")?;
        max_chars_patch(&self.title, BLOG_TITLE_MAX, "Title cannot be more than 200 characters")?;
        required_patch(&self.excerpt, "Please provide an excerpt")?;
        max_chars_patch(
            &self.excerpt,
            BLOG_EXCERPT_MAX,
            "Excerpt cannot be more than 300 characters",
        )?;
        required_patch(&self.content, "Please provide content")?;
        Ok(self)
    }
}

impl Validate for CreateContact {
    type Output = NewContact;

    fn validate(self) -> FolioResult<NewContact> {
        let name = required(self.name, "Please provide your name")?;
        max_chars(&name, CONTACT_NAME_MAX, "Name cannot be more than 100 characters")?;
        let email = required(self.email, "Please provide your email")?;
        check_email(&email)?;
        let subject = required(self.subject, "Please provide a subject")?;
        max_chars(&subject, CONTACT_SUBJECT_MAX, "Subject cannot be more than 200 characters")?;
        let message = required(self.message, "Please provide a message")?;
        max_chars(&message, CONTACT_MESSAGE_MAX, "Message cannot be more than 2000 characters")?;

        Ok(NewContact {
            name,
            email,
            subject,
            message,
            service: optional_enum(self.service, "service")?.unwrap_or_default(),
            budget: optional_enum(self.budget, "budget")?.unwrap_or_default(),
        })
    }
}

impl Validate for UpdateContact {
    type Output = ContactChanges;

    fn validate(self) -> FolioResult<ContactChanges> {
        required_patch(&self.name, "Please provide your name")?;
        max_chars_patch(&self.name, CONTACT_NAME_MAX, "Name cannot be more than 100 characters")?;
        required_patch(&self.email, "Please provide your email")?;
        if let Some(email) = self.email.as_set() {
            check_email(email)?;
        }
        required_patch(&self.subject, "Please provide a subject")?;
        max_chars_patch(
            &self.subject,
            CONTACT_SUBJECT_MAX,
            "Subject cannot be more than 200 characters",
        )?;
        required_patch(&self.message, "Please provide a message")?;
        max_chars_patch(
            &self.message,
            CONTACT_MESSAGE_MAX,
            "Message cannot be more than 2000 characters",
        )?;

        Ok(ContactChanges {
            service: enum_patch(self.service, "service")?,
            budget: enum_patch(self.budget, "budget")?,
            status: enum_patch(self.status, "status")?,
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
        })
    }
}

impl Validate for CreateService {
    type Output = NewService;

    fn validate(self) -> FolioResult<NewService> {
        let title = required(self.title, "Please provide a service title")?;
        let description = required(self.description, "Please provide a service description")?;
        let short_description = required(self.short_description, "Please provide a short description")?;
        max_chars(
            &short_description,
            SERVICE_SHORT_DESCRIPTION_MAX,
            "Short description cannot be more than 150 characters",
        )?;
        let category = optional_enum(self.category, "category")?
            .ok_or_else(|| FolioError::validation("Please provide a service category"))?;
        let starting_price = self.starting_price.unwrap_or(0.0);
        check_price(starting_price)?;

        Ok(NewService {
            title,
            description,
            short_description,
            features: self.features.unwrap_or_default(),
            pricing: optional_enum(self.pricing, "pricing")?.unwrap_or_default(),
            starting_price,
            image: self.image.unwrap_or_default(),
            category,
            active: self.active.unwrap_or(true),
        })
    }
}

impl Validate for UpdateService {
    type Output = ServiceChanges;

    fn validate(self) -> FolioResult<ServiceChanges> {
        required_patch(&self.title, "Please provide a service title")?;
        required_patch(&self.description, "Please provide a service description")?;
        required_patch(&self.short_description, "Please provide a short description")?;
        max_chars_patch(
            &self.short_description,
            SERVICE_SHORT_DESCRIPTION_MAX,
            "Short description cannot be more than 150 characters",
        )?;
        if let Some(price) = self.starting_price.as_set() {
            check_price(*price)?;
        }
        let category = enum_patch(self.category, "category")?;
        if category == Patch::Null {
            return Err(FolioError::validation("Please provide a service category"));
        }

        Ok(ServiceChanges {
            pricing: enum_patch(self.pricing, "pricing")?,
            category,
            title: self.title,
            description: self.description,
            short_description: self.short_description,
            features: self.features,
            starting_price: self.starting_price,
            image: self.image,
            active: self.active,
        })
    }
}

fn required(value: Option<String>, msg: &str) -> FolioResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(FolioError::validation(msg)),
    }
}

fn required_patch(value: &Patch<String>, msg: &str) -> FolioResult<()> {
    match value {
        Patch::Absent => Ok(()),
        Patch::Set(v) if !v.is_empty() => Ok(()),
        _ => Err(FolioError::validation(msg)),
    }
}

fn max_chars(value: &str, max: usize, msg: &str) -> FolioResult<()> {
    if value.chars().count() > max {
        return Err(FolioError::validation(msg));
    }
    Ok(())
}

fn max_chars_patch(value: &Patch<String>, max: usize, msg: &str) -> FolioResult<()> {
    match value.as_set() {
        Some(v) => max_chars(v, max, msg),
        None => Ok(()),
    }
}

fn check_email(email: &str) -> FolioResult<()> {
    if !is_valid_email(email) {
        return Err(FolioError::validation("Please provide a valid email address"));
    }
    Ok(())
}

fn check_price(price: f64) -> FolioResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(FolioError::validation("Starting price cannot be negative"));
    }
    Ok(())
}

/// Parses an enumerated field. Missing and empty values count as "not given".
pub fn optional_enum<T: FromStr>(value: Option<String>, field: &str) -> FolioResult<Option<T>> {
    match value {
        None => Ok(None),
        Some(v) if v.is_empty() => Ok(None),
        Some(v) => parse_enum(&v, field).map(Some),
    }
}

pub fn parse_enum<T: FromStr>(value: &str, field: &str) -> FolioResult<T> {
    value
        .parse()
        .map_err(|_| FolioError::validation(format!("'{}' is not a valid {}", value, field)))
}

fn enum_patch<T: FromStr>(value: Patch<String>, field: &str) -> FolioResult<Patch<T>> {
    match value {
        Patch::Absent => Ok(Patch::Absent),
        Patch::Null => Ok(Patch::Null),
        Patch::Set(v) => parse_enum(&v, field).map(Patch::Set),
    }
}
