//! Employer catalog. Loaded once at startup and read-only afterwards.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

static BUILTIN_CATALOG: &str = include_str!("../../data/employers.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read employer catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed employer catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate employer id '{0}' in catalog")]
    DuplicateId(String),
}

/// One employer record. Fields the matcher does not read are carried through to
/// responses unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployerProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub industry: String,
    /// Free text such as "Startup", "Product Company" or "Service Company".
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub size: String,
    /// Free text, e.g. "₹6-15 LPA".
    #[serde(default)]
    pub salary_range: String,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub remote_friendly: bool,
    #[serde(default)]
    pub hiring_process: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub culture: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub growth_opportunities: Vec<String>,
    #[serde(default)]
    pub company_values: Vec<String>,
    #[serde(default)]
    pub work_environment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<u16>,
    #[serde(default)]
    pub funding_stage: String,
    #[serde(default)]
    pub description: String,
    /// Job board name to search URL.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub job_links: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub active_openings: Vec<JobOpening>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobOpening {
    pub title: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub apply_link: String,
    #[serde(default)]
    pub posted: String,
}

/// Coarse classification of the free-text `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployerKind {
    Startup,
    Product,
    Service,
    Other,
}

impl EmployerKind {
    pub fn classify(kind: &str) -> Self {
        match kind {
            "Startup" => EmployerKind::Startup,
            "Product Company" => EmployerKind::Product,
            k if k.contains("Service") => EmployerKind::Service,
            _ => EmployerKind::Other,
        }
    }
}

impl EmployerProfile {
    pub fn classification(&self) -> EmployerKind {
        EmployerKind::classify(&self.kind)
    }
}

/// Ordered, id-unique employer list. Ranking ties fall back to this order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    employers: Vec<EmployerProfile>,
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&raw)?;
        info!(path = %path.display(), employers = catalog.len(), "loaded employer catalog");
        Ok(catalog)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let employers: Vec<EmployerProfile> = serde_json::from_str(raw)?;
        Self::new(employers)
    }

    pub fn new(employers: Vec<EmployerProfile>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for employer in &employers {
            if !seen.insert(employer.id.as_str()) {
                return Err(CatalogError::DuplicateId(employer.id.clone()));
            }
        }
        Ok(Self { employers })
    }

    pub fn get(&self, id: &str) -> Option<&EmployerProfile> {
        self.employers.iter().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmployerProfile> {
        self.employers.iter()
    }

    pub fn as_slice(&self) -> &[EmployerProfile] {
        &self.employers
    }

    pub fn len(&self) -> usize {
        self.employers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employers.is_empty()
    }
}
