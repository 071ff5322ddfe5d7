//! Configuration layer for local cluster provisioning.
//!
//! This module provides:
//! - The configuration data model ([`ClusterConfig`], [`PortMap`])
//! - The layered resolution engine ([`resolve`], [`initialize_configuration`])
//! - Persistence helpers ([`render_config_to_file`], [`load_config_from_file`])
//! - The recognized-field table and environment-variable derivation ([`fields`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit arguments** - Values passed by the caller, keyed by serialization key
//! 2. **Environment variables** - `TANZU_*` variables derived from the serialization keys
//! 3. **YAML config file** - The baseline, loaded when the argument map carries a
//!    [`fields::CLUSTER_CONFIG_FILE`] entry
//! 4. **Built-in defaults** - Applied only to fields still empty after the first three
//!
//! A later source overrides an earlier one only when it supplies a non-empty
//! value. `ClusterName` is required: resolution fails if it is empty after the
//! full merge.
//!
//! # String Fields Only
//!
//! Only the string-typed recognized fields participate in the environment and
//! argument overlays. The two opaque configuration bags
//! (`ProviderConfiguration`, `CniConfiguration`) and the `PortsToForward`
//! list come solely from the config file baseline. This is an intentional
//! scope limit, not an oversight: the bags are provider/CNI-defined and have
//! no meaningful flat-string representation.

mod env;
mod error;
pub mod fields;
mod model;
mod persist;
mod resolve;


pub use env::{Environment, ProcessEnvironment};
pub use error::{ConfigError, field};
pub use model::{ClusterConfig, PortMap};
pub use persist::{load_config_from_file, render_config_to_file};
pub use resolve::{default_kubeconfig_path, initialize_configuration, resolve};
