//! Configuration data model.
//!
//! Defines the on-disk and in-memory shape of a local cluster
//! configuration with serde. Serialization keys are fixed: they name the
//! fields in the YAML file and are the basis for environment-variable
//! derivation, so renaming one is a breaking change.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping between a host port and a container port.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortMap {
    /// Port on the host machine.
    #[serde(rename = "HostPort", default)]
    pub host_port: i64,

    /// Port on the container to map to.
    #[serde(rename = "ContainerPort", default)]
    pub container_port: i64,
}

/// All configuration settings for creating a local cluster.
///
/// String fields use the empty string for "unset"; the resolution engine
/// fills them from arguments, environment variables, the config file, and
/// defaults, in that order of preference. The two configuration bags hold
/// arbitrary provider- or CNI-defined YAML and are never interpreted here.
///
/// All fields default, so a partial config file parses cleanly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Name of the cluster. Required; resolution fails without it.
    #[serde(rename = "ClusterName", default)]
    pub cluster_name: String,

    /// Path to the kubeconfig to use. A leading `~/` is expanded to the
    /// current user's home directory during resolution.
    #[serde(rename = "KubeconfigPath", default)]
    pub kubeconfig_path: String,

    /// Host OS image to use for Kubernetes nodes. Typically resolved from
    /// the release BOM, but can be overridden here.
    #[serde(rename = "NodeImage", default)]
    pub node_image: String,

    /// Local infrastructure provider to use (e.g. kind).
    #[serde(rename = "Provider", default)]
    pub provider: String,

    /// Optional provider-specific configuration. The exact keys and values
    /// accepted are determined by the provider.
    #[serde(rename = "ProviderConfiguration", default)]
    pub provider_configuration: BTreeMap<String, serde_yaml::Value>,

    /// Networking CNI to use in the cluster. Default is antrea.
    #[serde(rename = "Cni", default)]
    pub cni: String,

    /// Optional CNI-plugin-specific configuration. The exact keys and
    /// values accepted are determined by the CNI choice.
    #[serde(rename = "CniConfiguration", default)]
    pub cni_configuration: BTreeMap<String, serde_yaml::Value>,

    /// Pod CIDR range to assign pod IP addresses from.
    #[serde(rename = "PodCidr", default)]
    pub pod_cidr: String,

    /// Service CIDR range to assign service IP addresses from.
    #[serde(rename = "ServiceCidr", default)]
    pub service_cidr: String,

    /// Location of the Tanzu Kubernetes Release (TKR) data.
    #[serde(rename = "TkrLocation", default)]
    pub tkr_location: String,

    /// Host-to-container port mappings to expose.
    #[serde(rename = "PortsToForward", default)]
    pub ports_to_forward: Vec<PortMap>,

    /// Whether command output can be stylized and/or interactive,
    /// serialized as a string ("true"/"false").
    #[serde(rename = "Tty", default)]
    pub tty: String,
}
