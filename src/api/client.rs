use crate::config::Config;
use crate::error::AppError;
use log::{error, warn};
use serde_json::Value;

use super::endpoints::Catalog;
use super::http::{HttpGet, UreqDispatcher};
use super::params::ParameterRegistry;
use super::request::{Hosts, Params, RequestBuilder};

pub struct RiotCaller {
    hosts: Hosts,
    api_key: Option<String>,
    catalog: Catalog,
    registry: ParameterRegistry,
    http: Box<dyn HttpGet>,
}

impl RiotCaller {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_file(path)?,
            None => Catalog::embedded()?,
        };

        Self::with_parts(
            config,
            catalog,
            ParameterRegistry::default(),
            Box::new(UreqDispatcher::new(config.timeout)),
        )
    }

    pub fn with_parts(
        config: &Config,
        catalog: Catalog,
        registry: ParameterRegistry,
        http: Box<dyn HttpGet>,
    ) -> Result<Self, AppError> {
        let hosts = Hosts::new(&config.server, &config.region)?;

        if config.api_key.is_none() {
            warn!("API key is not set. Ensure that 'RIOT_API_KEY' is in your environment variables.");
        }

        Ok(RiotCaller {
            hosts,
            api_key: config.api_key.clone(),
            catalog,
            registry,
            http,
        })
    }

    pub fn server_url(&self) -> &str {
        self.hosts.server_url()
    }

    pub fn region_url(&self) -> &str {
        self.hosts.region_url()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn registry(&self) -> &ParameterRegistry {
        &self.registry
    }

    pub fn build_url(&self, service_name: &str, params: &Params) -> Result<String, AppError> {
        RequestBuilder::new(&self.catalog, &self.registry, &self.hosts).build(service_name, params)
    }

    /// Resolve, validate and call `service_name`. `None` params behave like
    /// an empty map.
    pub fn call_service(&self, service_name: &str, params: Option<&Params>) -> Result<Value, AppError> {
        let empty = Params::new();
        let params = params.unwrap_or(&empty);

        self.build_url(service_name, params)
            .and_then(|url| self.http.get(&url, self.api_key.as_deref()))
            .map_err(|e| {
                let keys: Vec<&str> = params.keys().map(String::as_str).collect();
                error!(
                    "Error calling service '{}' with params {:?}: {}",
                    service_name, keys, e
                );
                e
            })
    }
}
