use std::path::Path;

use serde::Deserialize;

use crate::errors::{AppResult, SourceDoc};
use crate::loader;

/// The settings file the provisioner drops into the shared folder. It
/// carries more than we need (worker lists, machine sizing); only the fields
/// that feed endpoint resolution are modeled, the rest is ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct ClusterSettings {
    /// Floating address in front of the control plane, set when kube-vip is
    /// configured for the cluster.
    #[serde(rename = "cluster-vip")]
    pub cluster_vip: Option<String>,

    /// Present for single-node clusters: the one machine.
    pub machine_settings: Option<Machine>,

    /// Present for multi-node clusters; the first entry is the lead node.
    #[serde(rename = "lead-control-node", default)]
    pub lead_control_node: Vec<Machine>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Machine {
    pub ip: String,
}

pub fn load(path: &Path) -> AppResult<ClusterSettings> {
    let value = loader::yaml_value(path, SourceDoc::ClusterSettings)?;
    loader::typed(value, SourceDoc::ClusterSettings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[test]
    fn extra_fields_are_ignored() {
        let settings: ClusterSettings = serde_yaml::from_str(
            r#"
cluster-name: dev
machine_settings:
  ip: 192.168.1.10
  cpus: 4
  memory: 8192
"#,
        )
        .unwrap();
        assert_eq!(settings.machine_settings.unwrap().ip, "192.168.1.10");
        assert!(settings.cluster_vip.is_none());
        assert!(settings.lead_control_node.is_empty());
    }

    #[test]
    fn null_document_is_all_absent_settings() {
        let settings: ClusterSettings =
            loader::typed(serde_yaml::Value::Null, SourceDoc::ClusterSettings).unwrap();
        assert!(settings.cluster_vip.is_none());
        assert!(settings.machine_settings.is_none());
        assert!(settings.lead_control_node.is_empty());

        // the failure only surfaces once a host is asked for
        assert!(matches!(
            crate::resolver::single_node_url(&settings, false),
            Err(AppError::MissingSetting("machine_settings"))
        ));
    }
}
