//! Local Cluster Config: layered configuration resolution
//!
//! A library for determining the effective configuration used to provision
//! a local Kubernetes cluster. Four sources are merged with a fixed
//! precedence: built-in defaults, an optional YAML configuration file,
//! process environment variables, and explicit command arguments.

pub mod config;
