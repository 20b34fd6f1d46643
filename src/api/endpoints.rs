// Endpoint catalog: which services exist, where they live, what they need.
use super::models::{EndpointDefinition, EndpointGroup, Scope};
use crate::error::AppError;
use log::debug;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const EMBEDDED_CATALOG: &str = include_str!("../../catalog/endpoints.toml");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    groups: Vec<GroupEntry>,
}

#[derive(Debug, Deserialize)]
struct GroupEntry {
    name: String,
    scope: String,
    #[serde(default)]
    services: Vec<EndpointDefinition>,
}

/// Immutable set of endpoint groups, searched in declaration order.
#[derive(Debug, Clone)]
pub struct Catalog {
    groups: Vec<EndpointGroup>,
}

impl Catalog {
    /// Builds a catalog from groups, rejecting duplicate service names and
    /// required params that the URL template never mentions.
    pub fn new(groups: Vec<EndpointGroup>) -> Result<Self, AppError> {
        let mut seen = HashSet::new();

        for group in &groups {
            for service in &group.services {
                if !seen.insert(service.name.as_str()) {
                    return Err(AppError::InvalidCatalog(format!(
                        "service '{}' in group '{}' is already defined",
                        service.name, group.name
                    )));
                }

                let placeholders = service.placeholders();
                if let Some(param) = service
                    .required_params
                    .iter()
                    .find(|p| !placeholders.contains(&p.as_str()))
                {
                    return Err(AppError::InvalidCatalog(format!(
                        "service '{}' requires '{}' but its url '{}' has no such placeholder",
                        service.name, param, service.url_template
                    )));
                }
            }
        }

        Ok(Catalog { groups })
    }

    pub fn embedded() -> Result<Self, AppError> {
        Self::from_toml_str(EMBEDDED_CATALOG, "embedded catalog")
    }

    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let origin = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|e| AppError::ConfigurationLoad {
            origin: origin.clone(),
            reason: e.to_string(),
        })?;

        Self::from_toml_str(&content, &origin)
    }

    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, AppError> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|e| AppError::ConfigurationLoad {
                origin: origin.to_string(),
                reason: e.to_string(),
            })?;

        let groups = file
            .groups
            .into_iter()
            .map(|entry| {
                let scope: Scope = entry.scope.parse()?;
                Ok(EndpointGroup::new(&entry.name, scope, entry.services))
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        let catalog = Self::new(groups)?;
        debug!(
            "Loaded {} groups / {} services from {}",
            catalog.groups.len(),
            catalog.len(),
            origin
        );

        Ok(catalog)
    }

    /// First group (in declaration order) holding `service_name` wins.
    pub fn lookup(&self, service_name: &str) -> Result<(Scope, &EndpointDefinition), AppError> {
        self.groups
            .iter()
            .find_map(|group| group.service(service_name).map(|def| (group.scope, def)))
            .ok_or_else(|| AppError::ServiceNotFound(service_name.to_string()))
    }

    pub fn groups(&self) -> &[EndpointGroup] {
        &self.groups
    }

    pub fn service_names(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|g| g.services.iter().map(|s| s.name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.services.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
