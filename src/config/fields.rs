//! The recognized-field table and environment-variable name derivation.
//!
//! The set of recognized fields is fixed and closed. Each string-typed
//! field is one row of [`STRING_FIELDS`]: its serialization key, accessors,
//! and optional default. The resolution engine walks this table instead of
//! reflecting over the struct, so every row is independently testable.

use std::sync::LazyLock;

use regex::Regex;

use super::model::ClusterConfig;

/// Argument-map pseudo-key selecting the configuration file to load as the
/// resolution baseline. Not a field of [`ClusterConfig`] itself.
pub const CLUSTER_CONFIG_FILE: &str = "ClusterConfigFile";

/// Serialization key for the cluster name.
pub const CLUSTER_NAME: &str = "ClusterName";
/// Serialization key for the kubeconfig path.
pub const KUBECONFIG_PATH: &str = "KubeconfigPath";
/// Serialization key for the node OS image.
pub const NODE_IMAGE: &str = "NodeImage";
/// Serialization key for the infrastructure provider.
pub const PROVIDER: &str = "Provider";
/// Serialization key for the CNI choice.
pub const CNI: &str = "Cni";
/// Serialization key for the pod CIDR range.
pub const POD_CIDR: &str = "PodCidr";
/// Serialization key for the service CIDR range.
pub const SERVICE_CIDR: &str = "ServiceCidr";
/// Serialization key for the release (TKR) location.
pub const TKR_LOCATION: &str = "TkrLocation";
/// Serialization key for the TTY flag.
pub const TTY: &str = "Tty";

/// Product namespace prefixed to every derived environment-variable name.
pub const ENV_PREFIX: &str = "TANZU";

/// Default release image reference.
pub const DEFAULT_TKR_LOCATION: &str = "projects.registry.vmware.com/tce/tkr:v1.21.5";
/// Default infrastructure provider.
pub const DEFAULT_PROVIDER: &str = "kind";
/// Default CNI.
pub const DEFAULT_CNI: &str = "antrea";
/// Default pod CIDR range.
pub const DEFAULT_POD_CIDR: &str = "10.244.0.0/16";
/// Default service CIDR range.
pub const DEFAULT_SERVICE_CIDR: &str = "10.96.0.0/16";
/// Default TTY flag, serialized as a string.
pub const DEFAULT_TTY: &str = "true";

/// One row of the recognized string-field table.
pub struct FieldSpec {
    /// Serialization key: the YAML key and the basis for env-var derivation.
    pub key: &'static str,

    /// Default applied only when the field is still empty after the
    /// argument, environment, and file sources. `None` means empty is
    /// acceptable.
    pub default: Option<&'static str>,

    /// Reads the field's current value.
    pub get: fn(&ClusterConfig) -> &str,

    /// Overwrites the field's value.
    pub set: fn(&mut ClusterConfig, String),
}

/// All recognized string-typed fields, in serialization order.
///
/// The configuration bags and the port-forward list are deliberately
/// absent: they are populated from the config file only.
pub const STRING_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: CLUSTER_NAME,
        default: None,
        get: |c| &c.cluster_name,
        set: |c, v| c.cluster_name = v,
    },
    FieldSpec {
        key: KUBECONFIG_PATH,
        default: None,
        get: |c| &c.kubeconfig_path,
        set: |c, v| c.kubeconfig_path = v,
    },
    FieldSpec {
        key: NODE_IMAGE,
        default: None,
        get: |c| &c.node_image,
        set: |c, v| c.node_image = v,
    },
    FieldSpec {
        key: PROVIDER,
        default: Some(DEFAULT_PROVIDER),
        get: |c| &c.provider,
        set: |c, v| c.provider = v,
    },
    FieldSpec {
        key: CNI,
        default: Some(DEFAULT_CNI),
        get: |c| &c.cni,
        set: |c, v| c.cni = v,
    },
    FieldSpec {
        key: POD_CIDR,
        default: Some(DEFAULT_POD_CIDR),
        get: |c| &c.pod_cidr,
        set: |c, v| c.pod_cidr = v,
    },
    FieldSpec {
        key: SERVICE_CIDR,
        default: Some(DEFAULT_SERVICE_CIDR),
        get: |c| &c.service_cidr,
        set: |c, v| c.service_cidr = v,
    },
    FieldSpec {
        key: TKR_LOCATION,
        default: Some(DEFAULT_TKR_LOCATION),
        get: |c| &c.tkr_location,
        set: |c, v| c.tkr_location = v,
    },
    FieldSpec {
        key: TTY,
        default: Some(DEFAULT_TTY),
        get: |c| &c.tty,
        set: |c, v| c.tty = v,
    },
];

/// Splits a serialization key at each uppercase-letter boundary.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[A-Z][^A-Z]*").expect("word pattern is valid"));

/// Converts a field's serialization key to its environment-variable name.
///
/// The key is split into words at uppercase boundaries, each word is
/// uppercased, and the words are joined with underscores behind the
/// [`ENV_PREFIX`]: `PodCidr` becomes `TANZU_POD_CIDR`, a single-word key
/// like `Provider` becomes `TANZU_PROVIDER`.
///
/// This derivation is part of the external contract; existing environment
/// variables depend on it being reproduced exactly.
#[must_use]
pub fn field_to_env_name(key: &str) -> String {
    let mut words = vec![ENV_PREFIX.to_string()];
    for word in WORD_PATTERN.find_iter(key) {
        words.push(word.as_str().to_uppercase());
    }
    words.join("_")
}
