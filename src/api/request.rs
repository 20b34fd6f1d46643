use super::endpoints::Catalog;
use super::models::{EndpointDefinition, Scope};
use super::params::ParameterRegistry;
use crate::error::AppError;
use std::collections::BTreeMap;
use url::Url;

pub type Params = BTreeMap<String, String>;

const API_DOMAIN: &str = "api.riotgames.com";

/// Base hosts for both scopes, fixed at construction.
#[derive(Debug, Clone)]
pub struct Hosts {
    server: BaseHost,
    region: BaseHost,
}

#[derive(Debug, Clone)]
struct BaseHost {
    // as written by the caller, casing kept
    raw: String,
    parsed: Url,
}

impl Hosts {
    pub fn new(server: &str, region: &str) -> Result<Self, AppError> {
        Ok(Hosts {
            server: BaseHost::new("server", server)?,
            region: BaseHost::new("region", region)?,
        })
    }

    /// e.g. `https://br1.api.riotgames.com`
    pub fn server_url(&self) -> &str {
        &self.server.raw
    }

    /// e.g. `https://americas.api.riotgames.com`
    pub fn region_url(&self) -> &str {
        &self.region.raw
    }

    pub fn base_url(&self, scope: Scope) -> &Url {
        &self.base(scope).parsed
    }

    fn base(&self, scope: Scope) -> &BaseHost {
        match scope {
            Scope::Server => &self.server,
            Scope::Region => &self.region,
        }
    }
}

impl BaseHost {
    /// The prefix must only ever add a label in front of the API domain.
    fn new(kind: &str, prefix: &str) -> Result<Self, AppError> {
        let raw = format!("https://{}.{}", prefix, API_DOMAIN);
        let invalid = |reason: String| AppError::ConfigurationLoad {
            origin: format!("{} host prefix '{}'", kind, prefix),
            reason,
        };

        let parsed = Url::parse(&raw).map_err(|e| invalid(e.to_string()))?;

        let expected_host = format!("{}.{}", prefix.to_ascii_lowercase(), API_DOMAIN);
        if parsed.host_str() != Some(expected_host.as_str())
            || parsed.path() != "/"
            || parsed.query().is_some()
            || parsed.fragment().is_some()
            || parsed.port().is_some()
            || !parsed.username().is_empty()
            || parsed.password().is_some()
        {
            return Err(invalid(format!("resolves to '{}', not a host under {}", parsed, API_DOMAIN)));
        }

        Ok(BaseHost { raw, parsed })
    }
}

/// Turns a service name plus parameters into a full request URL.
pub struct RequestBuilder<'a> {
    catalog: &'a Catalog,
    registry: &'a ParameterRegistry,
    hosts: &'a Hosts,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(catalog: &'a Catalog, registry: &'a ParameterRegistry, hosts: &'a Hosts) -> Self {
        RequestBuilder {
            catalog,
            registry,
            hosts,
        }
    }

    pub fn build(&self, service_name: &str, params: &Params) -> Result<String, AppError> {
        let (scope, definition) = self.catalog.lookup(service_name)?;

        self.check_required(definition, params)?;
        self.check_allowed_values(params)?;

        let path = substitute(definition, params)?;
        let base = self.hosts.base(scope);
        let unjoinable = |reason: String| {
            AppError::InvalidCatalog(format!(
                "service '{}' produced an unjoinable path '{}': {}",
                service_name, path, reason
            ))
        };

        // Join only to check where the path lands; the returned URL keeps
        // the substituted values exactly as given.
        let joined = base.parsed.join(&path).map_err(|e| unjoinable(e.to_string()))?;
        if joined.host_str() != base.parsed.host_str() || joined.scheme() != base.parsed.scheme() {
            return Err(unjoinable(format!("leaves the base host ({})", joined)));
        }

        if path.starts_with('/') {
            Ok(format!("{}{}", base.raw, path))
        } else {
            Ok(format!("{}/{}", base.raw, path))
        }
    }

    fn check_required(&self, definition: &EndpointDefinition, params: &Params) -> Result<(), AppError> {
        if !definition.params_required {
            return Ok(());
        }

        let missing: Vec<String> = definition
            .required_params
            .iter()
            .filter(|p| !params.contains_key(p.as_str()))
            .cloned()
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::MissingParameters {
                service: definition.name.clone(),
                missing,
            })
        }
    }

    // Parameters absent from the registry pass through unchecked.
    fn check_allowed_values(&self, params: &Params) -> Result<(), AppError> {
        for (key, value) in params {
            if let Some(allowed) = self.registry.allowed_values(key) {
                if !allowed.contains(&value.as_str()) {
                    return Err(AppError::InvalidParameterValue {
                        key: key.clone(),
                        value: value.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Values are inserted verbatim, no percent-encoding.
fn substitute(definition: &EndpointDefinition, params: &Params) -> Result<String, AppError> {
    let template = definition.url_template.as_str();
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            break;
        };

        let placeholder = &after[..end];
        let value = params
            .get(placeholder)
            .ok_or_else(|| AppError::TemplateSubstitution {
                service: definition.name.clone(),
                placeholder: placeholder.to_string(),
            })?;

        out.push_str(&rest[..start]);
        out.push_str(value);
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}
