use crate::errors::{AppError, AppResult};
use crate::settings::ClusterSettings;
use crate::types::ClusterMode;

/// The k3s API server always listens here.
pub const KUBE_API_PORT: u16 = 6443;

pub fn server_url(
    mode: ClusterMode,
    settings: &ClusterSettings,
    kubevip: bool,
) -> AppResult<String> {
    match mode {
        ClusterMode::SingleNode => single_node_url(settings, kubevip),
        ClusterMode::MultiNode => multi_node_url(settings, kubevip),
    }
}

/// Single-node: the VIP when kube-vip fronts the cluster, otherwise the one
/// machine's address.
pub fn single_node_url(settings: &ClusterSettings, kubevip: bool) -> AppResult<String> {
    if kubevip {
        return vip_url(settings);
    }
    let machine = settings
        .machine_settings
        .as_ref()
        .ok_or(AppError::MissingSetting("machine_settings"))?;
    Ok(api_url(&machine.ip))
}

/// Multi-node: the VIP when kube-vip fronts the cluster, otherwise the lead
/// control node (first entry of the list).
pub fn multi_node_url(settings: &ClusterSettings, kubevip: bool) -> AppResult<String> {
    if kubevip {
        return vip_url(settings);
    }
    let lead = settings
        .lead_control_node
        .first()
        .ok_or(AppError::MissingSetting("lead-control-node"))?;
    Ok(api_url(&lead.ip))
}

fn vip_url(settings: &ClusterSettings) -> AppResult<String> {
    let vip = settings
        .cluster_vip
        .as_deref()
        .ok_or(AppError::MissingSetting("cluster-vip"))?;
    Ok(api_url(vip))
}

fn api_url(host: &str) -> String {
    format!("https://{host}:{KUBE_API_PORT}")
}
