//! CLI argument parsing using clap.
//!
//! Collects one flag per recognized string field and converts them into
//! the serialization-key → value map the resolution engine consumes.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use local_cluster_config::config::fields;

/// Local Cluster Config
///
/// Resolves the effective configuration for provisioning a local
/// Kubernetes cluster from defaults, a config file, environment
/// variables, and command-line flags.
#[derive(Debug, Parser)]
#[command(name = "local-cluster-config")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Name of the cluster
    #[arg(long, global = true)]
    pub name: Option<String>,

    /// Path to a configuration file to use as the baseline
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the kubeconfig to use; a leading ~/ is expanded
    #[arg(long, global = true)]
    pub kubeconfig: Option<String>,

    /// Host OS image to use for Kubernetes nodes
    #[arg(long = "node-image", global = true)]
    pub node_image: Option<String>,

    /// Local infrastructure provider (default: kind)
    #[arg(long, global = true)]
    pub provider: Option<String>,

    /// Networking CNI to use in the cluster (default: antrea)
    #[arg(long, global = true)]
    pub cni: Option<String>,

    /// Pod CIDR range (default: 10.244.0.0/16)
    #[arg(long = "pod-cidr", global = true)]
    pub pod_cidr: Option<String>,

    /// Service CIDR range (default: 10.96.0.0/16)
    #[arg(long = "service-cidr", global = true)]
    pub service_cidr: Option<String>,

    /// Location of the Tanzu Kubernetes Release (TKR) data
    #[arg(long = "tkr-location", global = true)]
    pub tkr_location: Option<String>,

    /// Disable stylized and interactive output
    #[arg(long = "tty-disable", global = true)]
    pub tty_disable: bool,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for local-cluster-config
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve and print the effective configuration as YAML
    Resolve,

    /// Resolve the effective configuration and write it to a new file
    Configure {
        /// Output path for the configuration file; refuses to overwrite
        #[arg(long, short, default_value = "cluster-config.yaml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses arguments from the process command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses arguments from an explicit iterator. Test hook.
    #[cfg(test)]
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Converts the parsed flags into the argument map consumed by the
    /// resolution engine. Flags that were not supplied are omitted
    /// entirely; the engine treats absent and empty identically.
    #[must_use]
    pub fn to_field_args(&self) -> HashMap<String, String> {
        let mut args = HashMap::new();

        let flags = [
            (fields::CLUSTER_NAME, &self.name),
            (fields::KUBECONFIG_PATH, &self.kubeconfig),
            (fields::NODE_IMAGE, &self.node_image),
            (fields::PROVIDER, &self.provider),
            (fields::CNI, &self.cni),
            (fields::POD_CIDR, &self.pod_cidr),
            (fields::SERVICE_CIDR, &self.service_cidr),
            (fields::TKR_LOCATION, &self.tkr_location),
        ];

        for (key, value) in flags {
            if let Some(value) = value {
                args.insert(key.to_string(), value.clone());
            }
        }

        if let Some(config) = &self.config {
            args.insert(
                fields::CLUSTER_CONFIG_FILE.to_string(),
                config.display().to_string(),
            );
        }

        // The flag only disables; leaving it off defers to the other
        // sources and the "true" default.
        if self.tty_disable {
            args.insert(fields::TTY.to_string(), "false".to_string());
        }

        args
    }
}
