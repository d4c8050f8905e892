pub mod cli;
pub mod config;
pub mod errors;
pub mod kubeconfig;
pub mod loader;
pub mod logging;
pub mod resolver;
pub mod settings;
pub mod types;
pub mod vars;

use crate::config::Config;
use crate::errors::AppResult;

pub fn run(config: &Config) -> AppResult<()> {
    // All three documents are loaded before the mode is dispatched, so a bad
    // document fails the run even when the mode turns out to be a no-op.
    let mut kubeconfig = kubeconfig::load(&config.paths.kubeconfig)?;
    let cluster_settings = settings::load(&config.paths.settings)?;
    let user_vars = vars::load(&config.paths.vars)?;

    let kubevip = vars::kubevip_enabled(&user_vars);
    tracing::debug!(kubevip, "resolved kube-vip feature flag");

    let Some(mode) = config.mode else {
        tracing::warn!(
            mode = %config.mode_raw,
            "unrecognized cluster mode, leaving kubeconfig untouched"
        );
        return Ok(());
    };

    let url = resolver::server_url(mode, &cluster_settings, kubevip)?;
    tracing::info!(%mode, %url, "resolved cluster server url");

    kubeconfig::patch_server(&mut kubeconfig, &url)?;
    kubeconfig::write_all(&kubeconfig, &config.paths.outputs)?;

    Ok(())
}
