use super::Patch;
use serde::{Deserialize, Serialize, Serializer};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    WebDesign,
    WebDevelopment,
    WebsiteRefurbishment,
    DigitalMarketing,
}

impl ServiceCategory {
    pub const ALL: [Self; 4] = [
        Self::WebDesign,
        Self::WebDevelopment,
        Self::WebsiteRefurbishment,
        Self::DigitalMarketing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WebDesign => "web-design",
            Self::WebDevelopment => "web-development",
            Self::WebsiteRefurbishment => "website-refurbishment",
            Self::DigitalMarketing => "digital-marketing",
        }
    }
}

impl FromStr for ServiceCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|v| v.as_str() == s).ok_or(())
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Pricing {
    Hourly,
    #[default]
    ProjectBased,
    Monthly,
    Custom,
}

impl Pricing {
    pub const ALL: [Self; 4] = [Self::Hourly, Self::ProjectBased, Self::Monthly, Self::Custom];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::ProjectBased => "project-based",
            Self::Monthly => "monthly",
            Self::Custom => "custom",
        }
    }
}

impl FromStr for Pricing {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|v| v.as_str() == s).ok_or(())
    }
}

impl std::fmt::Display for Pricing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub short_description: String,
    pub features: Vec<Feature>,
    pub pricing: Pricing,
    #[serde(serialize_with = "serialize_price")]
    pub starting_price: f64,
    pub image: String,
    pub category: ServiceCategory,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Whole amounts go out as integers, so `500` rather than `500.0`.
fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if price.fract() == 0.0 && price.abs() < 9_007_199_254_740_992.0 {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateService {
    pub title: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub features: Option<Vec<Feature>>,
    pub pricing: Option<String>,
    pub starting_price: Option<f64>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateService {
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub description: Patch<String>,
    #[serde(default)]
    pub short_description: Patch<String>,
    #[serde(default)]
    pub features: Patch<Vec<Feature>>,
    #[serde(default)]
    pub pricing: Patch<String>,
    #[serde(default)]
    pub starting_price: Patch<f64>,
    #[serde(default)]
    pub image: Patch<String>,
    #[serde(default)]
    pub category: Patch<String>,
    #[serde(default)]
    pub active: Patch<bool>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceFilter {
    pub category: Option<ServiceCategory>,
    pub active: Option<bool>,
}
