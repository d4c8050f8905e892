use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

use crate::errors::{AppError, AppResult, SourceDoc};
use crate::loader;

/// The k3s-generated client configuration. Only the path down to the server
/// url is typed; users, contexts, credentials and any field k3s grows later
/// ride along untouched in the flattened catch-alls.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct KubeConfig {
    pub clusters: Vec<NamedCluster>,

    #[serde(flatten)]
    pub rest: Mapping,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NamedCluster {
    pub cluster: ClusterEndpoint,

    #[serde(flatten)]
    pub rest: Mapping,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ClusterEndpoint {
    pub server: String,

    #[serde(flatten)]
    pub rest: Mapping,
}

pub fn load(path: &Path) -> AppResult<KubeConfig> {
    let value = loader::yaml_value(path, SourceDoc::Kubeconfig)?;
    loader::typed(value, SourceDoc::Kubeconfig)
}

/// Points the first cluster entry at `url`. k3s always generates exactly one
/// entry, so the first one is the cluster.
pub fn patch_server(kubeconfig: &mut KubeConfig, url: &str) -> AppResult<()> {
    let entry = kubeconfig.clusters.first_mut().ok_or(AppError::NoClusters)?;
    tracing::debug!(old = %entry.cluster.server, new = %url, "updating server url");
    entry.cluster.server = url.to_string();
    Ok(())
}

/// Serializes once and writes the same document to every destination, in
/// order. Writes are plain truncate-and-write, not atomic.
pub fn write_all(kubeconfig: &KubeConfig, outputs: &[PathBuf]) -> AppResult<()> {
    let yaml = serde_yaml::to_string(kubeconfig).map_err(AppError::Serialize)?;
    for path in outputs {
        tracing::info!(path = %path.display(), "writing corrected kubeconfig");
        fs::write(path, &yaml)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    const SAMPLE: &str = r#"
apiVersion: v1
kind: Config
clusters:
  - name: default
    cluster:
      server: https://127.0.0.1:6443
      certificate-authority-data: LS0tLS1CRUdJTg==
contexts:
  - name: default
    context:
      cluster: default
      user: default
current-context: default
preferences: {}
users:
  - name: default
    user:
      client-certificate-data: LS0tLS1DRVJU
      client-key-data: LS0tLS1LRVk=
"#;

    #[test]
    fn patch_replaces_only_the_server_field() {
        let mut kubeconfig: KubeConfig = serde_yaml::from_str(SAMPLE).unwrap();
        patch_server(&mut kubeconfig, "https://10.0.0.5:6443").unwrap();

        let before: Value = serde_yaml::from_str(SAMPLE).unwrap();
        let after: Value =
            serde_yaml::from_str(&serde_yaml::to_string(&kubeconfig).unwrap()).unwrap();

        assert_eq!(
            after["clusters"][0]["cluster"]["server"],
            Value::from("https://10.0.0.5:6443")
        );
        assert_eq!(
            after["clusters"][0]["cluster"]["certificate-authority-data"],
            before["clusters"][0]["cluster"]["certificate-authority-data"]
        );
        for key in ["apiVersion", "kind", "contexts", "current-context", "preferences", "users"] {
            assert_eq!(after[key], before[key], "field {key} must ride along unchanged");
        }
    }

    #[test]
    fn empty_cluster_list_is_an_error() {
        let mut kubeconfig: KubeConfig =
            serde_yaml::from_str("clusters: []\napiVersion: v1\n").unwrap();
        assert!(matches!(
            patch_server(&mut kubeconfig, "https://10.0.0.5:6443"),
            Err(AppError::NoClusters)
        ));
    }

    #[test]
    fn missing_server_is_a_shape_error() {
        let value: Value =
            serde_yaml::from_str("clusters:\n  - name: default\n    cluster: {}\n").unwrap();
        let err = loader::typed::<KubeConfig>(value, SourceDoc::Kubeconfig).unwrap_err();
        assert!(matches!(err, AppError::Shape { doc: SourceDoc::Kubeconfig, .. }));
    }

    #[test]
    fn write_all_emits_every_destination() {
        let kubeconfig: KubeConfig = serde_yaml::from_str(SAMPLE).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let outputs = vec![dir.path().join("config"), dir.path().join("config.yaml")];

        write_all(&kubeconfig, &outputs).unwrap();

        let first = fs::read_to_string(&outputs[0]).unwrap();
        let second = fs::read_to_string(&outputs[1]).unwrap();
        assert_eq!(first, second);
        assert!(first.contains("server: https://127.0.0.1:6443"));
    }
}
