//! Tests for CLI flag to argument-map conversion.

use local_cluster_config::config::fields;

use super::cli::{Cli, Command};

/// Helper to parse CLI args from a slice.
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["local-cluster-config"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

#[test]
fn name_flag_maps_to_cluster_name_key() {
    let cli = cli(&["resolve", "--name", "test"]);

    let args = cli.to_field_args();

    assert_eq!(args.get(fields::CLUSTER_NAME).map(String::as_str), Some("test"));
}

#[test]
fn omitted_flags_are_absent_from_the_map() {
    let cli = cli(&["resolve", "--name", "test"]);

    let args = cli.to_field_args();

    assert!(!args.contains_key(fields::PROVIDER));
    assert!(!args.contains_key(fields::POD_CIDR));
    assert!(!args.contains_key(fields::TTY));
    assert!(!args.contains_key(fields::CLUSTER_CONFIG_FILE));
}

#[test]
fn config_flag_maps_to_the_pseudo_key() {
    let cli = cli(&["resolve", "--config", "/tmp/cluster.yaml"]);

    let args = cli.to_field_args();

    assert_eq!(
        args.get(fields::CLUSTER_CONFIG_FILE).map(String::as_str),
        Some("/tmp/cluster.yaml")
    );
}

#[test]
fn tty_disable_flag_sets_tty_false() {
    let cli = cli(&["resolve", "--name", "test", "--tty-disable"]);

    let args = cli.to_field_args();

    assert_eq!(args.get(fields::TTY).map(String::as_str), Some("false"));
}

#[test]
fn every_string_field_flag_lands_under_its_key() {
    let cli = cli(&[
        "resolve",
        "--name",
        "test",
        "--kubeconfig",
        "~/kc.yaml",
        "--node-image",
        "kindest/node:v1.21.5",
        "--provider",
        "kind",
        "--cni",
        "calico",
        "--pod-cidr",
        "10.0.0.0/16",
        "--service-cidr",
        "10.1.0.0/16",
        "--tkr-location",
        "example.com/tkr:v1",
    ]);

    let args = cli.to_field_args();

    assert_eq!(args.get(fields::KUBECONFIG_PATH).map(String::as_str), Some("~/kc.yaml"));
    assert_eq!(
        args.get(fields::NODE_IMAGE).map(String::as_str),
        Some("kindest/node:v1.21.5")
    );
    assert_eq!(args.get(fields::PROVIDER).map(String::as_str), Some("kind"));
    assert_eq!(args.get(fields::CNI).map(String::as_str), Some("calico"));
    assert_eq!(args.get(fields::POD_CIDR).map(String::as_str), Some("10.0.0.0/16"));
    assert_eq!(args.get(fields::SERVICE_CIDR).map(String::as_str), Some("10.1.0.0/16"));
    assert_eq!(
        args.get(fields::TKR_LOCATION).map(String::as_str),
        Some("example.com/tkr:v1")
    );
}

#[test]
fn configure_subcommand_carries_the_output_path() {
    let cli = cli(&["configure", "--name", "test", "--output", "/tmp/out.yaml"]);

    match &cli.command {
        Command::Configure { output } => {
            assert_eq!(output, std::path::Path::new("/tmp/out.yaml"));
        }
        Command::Resolve => panic!("expected configure subcommand"),
    }
}
