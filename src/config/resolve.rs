//! The layered resolution engine.
//!
//! Merges the four configuration sources into one [`ClusterConfig`]. The
//! file baseline loads first, then each recognized string field is
//! overlaid from explicit arguments or derived environment variables, and
//! defaults fill whatever is still empty. Resolution aborts on the first
//! fatal condition rather than returning a partial result.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::env::{Environment, ProcessEnvironment};
use super::error::{ConfigError, field};
use super::fields::{self, STRING_FIELDS, field_to_env_name};
use super::model::ClusterConfig;
use super::persist::load_config_from_file;

const CONFIG_DIR: &str = ".config";
const TANZU_CONFIG_DIR: &str = "tanzu";
const KUBECONFIG_EXT: &str = ".yaml";

/// Determines the effective configuration from the real process state.
///
/// Convenience wrapper around [`resolve`] with [`ProcessEnvironment`].
///
/// # Errors
///
/// Returns an error if the named config file cannot be read or parsed, or
/// if no source supplies a cluster name.
pub fn initialize_configuration(
    args: &HashMap<String, String>,
) -> Result<ClusterConfig, ConfigError> {
    resolve(args, &ProcessEnvironment)
}

/// Determines the effective configuration for cluster creation.
///
/// `args` maps serialization keys (for example `ClusterName`, `PodCidr`)
/// to explicit values; an empty value means "not supplied". The
/// [`fields::CLUSTER_CONFIG_FILE`] pseudo-key names an optional YAML file
/// to load as the baseline.
///
/// Sources combine in ascending order of preference: defaults, config
/// file, environment variables, explicit arguments. The returned
/// configuration is fully populated; the caller owns it exclusively.
///
/// # Errors
///
/// Returns an error if the named config file cannot be read or parsed, or
/// if the cluster name is still empty after the full merge.
pub fn resolve(
    args: &HashMap<String, String>,
    env: &dyn Environment,
) -> Result<ClusterConfig, ConfigError> {
    // Populate the baseline from a supplied config file, if any. The bags
    // and the port-forward list come only from this step.
    let mut config = match args.get(fields::CLUSTER_CONFIG_FILE) {
        Some(path) if !path.is_empty() => {
            tracing::debug!(%path, "loading configuration file baseline");
            load_config_from_file(Path::new(path))?
        }
        _ => ClusterConfig::default(),
    };

    // Overlay each recognized string field. A later source wins only with
    // a non-empty value; fields are independent, so the walk order does
    // not matter.
    for spec in STRING_FIELDS {
        if let Some(value) = args.get(spec.key).filter(|v| !v.is_empty()) {
            (spec.set)(&mut config, value.clone());
        } else if let Some(value) = env.var(&field_to_env_name(spec.key)).filter(|v| !v.is_empty())
        {
            (spec.set)(&mut config, value);
        }

        // Only set the default if nothing else set the field.
        if (spec.get)(&config).is_empty() {
            if let Some(default) = spec.default {
                (spec.set)(&mut config, default.to_string());
            }
        }
    }

    // The cluster name must come from an argument, an environment
    // variable, or the config file.
    if config.cluster_name.is_empty() {
        return Err(ConfigError::missing(
            field::CLUSTER_NAME,
            "Pass it as an argument or set ClusterName in the config file",
        ));
    }

    config.kubeconfig_path = sanitize_kubeconfig_path(&config.kubeconfig_path, env);

    Ok(config)
}

/// Expands a leading `~/` to the user's home directory.
///
/// Every other path, relative or absolute, passes through unchanged; no
/// `..` normalization is performed. A failed home-directory lookup
/// degrades to an empty base, yielding the bare remainder as a relative
/// path instead of an error.
fn sanitize_kubeconfig_path(path: &str, env: &dyn Environment) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = env.home_dir().unwrap_or_default();
        return home.join(rest).to_string_lossy().into_owned();
    }

    path.to_string()
}

/// Returns the conventional kubeconfig location for a cluster:
/// `$HOME/.config/tanzu/<cluster-name>.yaml`.
///
/// Pure function of the cluster name and the `HOME` variable; nothing is
/// created on disk.
#[must_use]
pub fn default_kubeconfig_path(cluster_name: &str, env: &dyn Environment) -> PathBuf {
    let home = env.var("HOME").unwrap_or_default();

    Path::new(&home)
        .join(CONFIG_DIR)
        .join(TANZU_CONFIG_DIR)
        .join(format!("{cluster_name}{KUBECONFIG_EXT}"))
}
