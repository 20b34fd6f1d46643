//! Thin client for the Riot Games REST API.
//!
//! Services are looked up by name in an endpoint [`Catalog`], validated,
//! routed to the platform or regional host, and fetched as JSON.
//!
//! ```no_run
//! use riot_caller::{Config, Params, RiotCaller};
//!
//! let riot = RiotCaller::new(&Config::from_env()?)?;
//! let mut params = Params::new();
//! params.insert("queue".into(), "RANKED_SOLO_5x5".into());
//! let league = riot.call_service("get_master_league_by_queue", Some(&params))?;
//! # Ok::<(), riot_caller::AppError>(())
//! ```

pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod tool;

pub use api::client::RiotCaller;
pub use api::endpoints::Catalog;
pub use api::models::{EndpointDefinition, EndpointGroup, ParameterDescriptor, Scope};
pub use api::params::ParameterRegistry;
pub use api::request::{Hosts, Params};
pub use config::Config;
pub use error::AppError;
