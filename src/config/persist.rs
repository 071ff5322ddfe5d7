//! Persistence helpers: render a configuration to a new file, load one
//! from an existing file.
//!
//! Both ends share the [`ClusterConfig`] serde model, so a rendered file
//! loads back losslessly. Rendering refuses to touch a path where
//! anything already exists.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

use serde::Serialize;

use super::error::ConfigError;
use super::model::ClusterConfig;

/// Serializes `config` as YAML to `path`, which must not exist yet.
///
/// The existence probe is a directory listing on `path`: only a clean
/// "not found" permits writing. Listing a plain file fails as well, so a
/// file at the path also counts as occupied, as does any other probe
/// failure such as permission denied.
///
/// Nested mappings are written with 2-space indentation. On a write
/// failure a partial file may be left behind; it is not cleaned up.
///
/// # Errors
///
/// Returns [`ConfigError::FileExists`] when the target is occupied,
/// [`ConfigError::Serialize`] when encoding fails, and
/// [`ConfigError::FileWrite`] when the write fails.
pub fn render_config_to_file<T: Serialize>(path: &Path, config: &T) -> Result<(), ConfigError> {
    match std::fs::read_dir(path) {
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        _ => {
            return Err(ConfigError::FileExists {
                path: path.to_path_buf(),
            });
        }
    }

    let rendered = serde_yaml::to_string(config).map_err(ConfigError::Serialize)?;

    write_new(path, rendered.as_bytes()).map_err(|source| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Creates the file and writes its full contents in one call.
///
/// Created with mode 0644 on unix (owner read-write, group and other
/// read).
fn write_new(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path)?;
    file.write_all(contents)
}

/// Reads and deserializes a configuration from `path`.
///
/// # Errors
///
/// Returns [`ConfigError::FileRead`] when the file cannot be read and
/// [`ConfigError::Parse`], naming the path, when the YAML is invalid.
pub fn load_config_from_file(path: &Path) -> Result<ClusterConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
