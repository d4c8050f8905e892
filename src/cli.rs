use std::path::PathBuf;

use clap::Parser;

use crate::config::{DEFAULT_KUBECONFIG, DEFAULT_OUTPUTS, DEFAULT_SETTINGS, DEFAULT_VARS};

#[derive(Debug, Parser)]
#[command(
    name = "kubeconfig-correct",
    version,
    about = "Point a freshly provisioned k3s kubeconfig at the right cluster endpoint"
)]
pub struct Cli {
    /// Cluster mode: single-node or multi-node
    ///
    /// Any other value is accepted but results in a no-op, mirroring how the
    /// provisioning scripts have always invoked this tool.
    pub mode: String,

    /// Default generated kubeconfig to read
    #[arg(long = "kubeconfig", default_value = DEFAULT_KUBECONFIG)]
    pub kubeconfig: PathBuf,

    /// Cluster settings file written by the provisioner
    #[arg(long = "settings", default_value = DEFAULT_SETTINGS)]
    pub settings: PathBuf,

    /// Ansible user variables file
    #[arg(long = "vars", default_value = DEFAULT_VARS)]
    pub vars: PathBuf,

    /// Destination(s) for the corrected kubeconfig (repeatable)
    #[arg(long = "out", default_values = DEFAULT_OUTPUTS)]
    pub outputs: Vec<PathBuf>,
}
