use std::fmt;
use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Which input document an error is talking about. The display strings are
/// load-bearing: provisioning scripts grep the yaml-error message for them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SourceDoc {
    Kubeconfig,
    ClusterSettings,
    UserVars,
}

impl fmt::Display for SourceDoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kubeconfig => f.write_str("default kubeconfig"),
            Self::ClusterSettings => f.write_str("cluster settings"),
            Self::UserVars => f.write_str("ansible user vars"),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed YAML in one of the three inputs. The only error class with
    /// its own exit code; everything else exits with the generic failure.
    #[error("yaml error getting the {doc} {source}")]
    Yaml {
        doc: SourceDoc,
        source: serde_yaml::Error,
    },

    /// Syntactically valid YAML whose shape does not match the document.
    #[error("{doc} does not have the expected shape: {source}")]
    Shape {
        doc: SourceDoc,
        source: serde_yaml::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("cluster settings has no {0}")]
    MissingSetting(&'static str),

    #[error("kubeconfig has no cluster entries")]
    NoClusters,

    #[error("yaml error writing the kubeconfig: {0}")]
    Serialize(serde_yaml::Error),
}

impl AppError {
    pub const YAML_EXIT_CODE: u8 = 123;
}
