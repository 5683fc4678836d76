use super::Patch;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which offering a contact submission is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceInterest {
    WebDesign,
    WebDevelopment,
    WebsiteRefurbishment,
    DigitalMarketing,
    #[default]
    General,
}

impl ServiceInterest {
    pub const ALL: [Self; 5] = [
        Self::WebDesign,
        Self::WebDevelopment,
        Self::WebsiteRefurbishment,
        Self::DigitalMarketing,
        Self::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WebDesign => "web-design",
            Self::WebDevelopment => "web-development",
            Self::WebsiteRefurbishment => "website-refurbishment",
            Self::DigitalMarketing => "digital-marketing",
            Self::General => "general",
        }
    }
}

impl FromStr for ServiceInterest {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|v| v.as_str() == s).ok_or(())
    }
}

impl std::fmt::Display for ServiceInterest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Budget {
    #[serde(rename = "< $500")]
    UnderFiveHundred,
    #[serde(rename = "$500 - $1000")]
    FiveHundredToOneThousand,
    #[serde(rename = "$1000 - $5000")]
    OneToFiveThousand,
    #[serde(rename = "$5000+")]
    OverFiveThousand,
    #[default]
    #[serde(rename = "Not sure")]
    NotSure,
}

impl Budget {
    pub const ALL: [Self; 5] = [
        Self::UnderFiveHundred,
        Self::FiveHundredToOneThousand,
        Self::OneToFiveThousand,
        Self::OverFiveThousand,
        Self::NotSure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnderFiveHundred => "< $500",
            Self::FiveHundredToOneThousand => "$500 - $1000",
            Self::OneToFiveThousand => "$1000 - $5000",
            Self::OverFiveThousand => "$5000+",
            Self::NotSure => "Not sure",
        }
    }
}

impl FromStr for Budget {
    type Err = ();

    /// Accepts the stored spelling as well as the compact one without
    /// spaces (`$500-$1000`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        Self::ALL
            .into_iter()
            .find(|v| {
                v.as_str() == s
                    || (*v != Self::NotSure && v.as_str().replace(' ', "") == compact)
            })
            .ok_or(())
    }
}

impl std::fmt::Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ContactStatus {
    #[default]
    New,
    Contacted,
    InProgress,
    Completed,
}

impl ContactStatus {
    pub const ALL: [Self; 4] = [
        Self::New,
        Self::Contacted,
        Self::InProgress,
        Self::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl FromStr for ContactStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|v| v.as_str() == s).ok_or(())
    }
}

impl std::fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub service: ServiceInterest,
    pub budget: Budget,
    pub status: ContactStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// A contact form submission. There is no `status` field: new submissions
/// always start as `new`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub service: Option<String>,
    pub budget: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContact {
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub email: Patch<String>,
    #[serde(default)]
    pub subject: Patch<String>,
    #[serde(default)]
    pub message: Patch<String>,
    #[serde(default)]
    pub service: Patch<String>,
    #[serde(default)]
    pub budget: Patch<String>,
    #[serde(default)]
    pub status: Patch<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ContactFilter {
    pub status: Option<ContactStatus>,
}
