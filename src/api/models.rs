use crate::error::AppError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Which base host a group of services is served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Per-platform host, e.g. `br1`
    Server,
    /// Per-continental-cluster host, e.g. `americas`
    Region,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Server => "server",
            Scope::Region => "region",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "server" => Ok(Scope::Server),
            "region" => Ok(Scope::Region),
            other => Err(AppError::UnknownScope(other.to_string())),
        }
    }
}

// Catalog entry for one REST endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EndpointDefinition {
    pub name: String,
    #[serde(rename = "url")]
    pub url_template: String,
    #[serde(default)]
    pub required_params: Vec<String>,
    #[serde(rename = "is_params_required", default = "default_params_required")]
    pub params_required: bool,
}

fn default_params_required() -> bool {
    true
}

impl EndpointDefinition {
    pub fn new(name: &str, url_template: &str, required_params: &[&str]) -> Self {
        EndpointDefinition {
            name: name.to_string(),
            url_template: url_template.to_string(),
            required_params: required_params.iter().map(|p| p.to_string()).collect(),
            params_required: !required_params.is_empty(),
        }
    }

    /// Placeholder names in the URL template, in order of appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut rest = self.url_template.as_str();

        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            match after.find('}') {
                Some(end) => {
                    names.push(&after[..end]);
                    rest = &after[end + 1..];
                }
                None => break,
            }
        }

        names
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointGroup {
    pub name: String,
    pub scope: Scope,
    pub services: Vec<EndpointDefinition>,
}

impl EndpointGroup {
    pub fn new(name: &str, scope: Scope, services: Vec<EndpointDefinition>) -> Self {
        EndpointGroup {
            name: name.to_string(),
            scope,
            services,
        }
    }

    pub fn service(&self, name: &str) -> Option<&EndpointDefinition> {
        self.services.iter().find(|s| s.name == name)
    }
}

// Parameter Registry entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub allowed_values: Option<&'static [&'static str]>,
}
