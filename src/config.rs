use std::path::PathBuf;

use crate::cli::Cli;
use crate::types::ClusterMode;

/// Fixed paths inside the Vagrant guest. The CLI flags exist to override
/// them, mostly for running the tool outside a provisioned machine.
pub const DEFAULT_KUBECONFIG: &str = "/etc/rancher/k3s/k3s.yaml";
pub const DEFAULT_SETTINGS: &str = "/vagrant/cluster/settings.yaml";
pub const DEFAULT_VARS: &str = "/etc/ansible/vars/user/ansible-vars.yml";
pub const DEFAULT_OUTPUTS: [&str; 2] = [
    "/home/vagrant/.kube/config",
    "/vagrant/kubeconfig/config.yaml",
];

#[derive(Clone, Debug)]
pub struct Paths {
    pub kubeconfig: PathBuf,
    pub settings: PathBuf,
    pub vars: PathBuf,
    pub outputs: Vec<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct Config {
    /// `None` when the positional argument was not a known mode.
    pub mode: Option<ClusterMode>,
    /// Raw mode string as given, kept for logging.
    pub mode_raw: String,

    pub paths: Paths,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            mode: ClusterMode::parse(&cli.mode),
            mode_raw: cli.mode,
            paths: Paths {
                kubeconfig: cli.kubeconfig,
                settings: cli.settings,
                vars: cli.vars,
                outputs: cli.outputs,
            },
        }
    }
}
