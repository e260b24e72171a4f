// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;
pub type Result<T> = std::result::Result<T, GardenError>;

#[derive(Error, Debug)]
pub enum GardenError {
    #[error("Kubernetes API error: {0}")]
    KubeError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Resource not found: {resource_type} '{name}' in namespace '{namespace}'")]
    NotFound {
        resource_type: String,
        name: String,
        namespace: String,
    },

    #[error("{resource_type} '{name}' has no {field}")]
    MissingField {
        resource_type: String,
        name: String,
        field: String,
    },

    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    #[error("no garden targeted")]
    NoGardenTargeted,

    #[error("no project targeted")]
    NoProjectTargeted,

    #[error("seed targeted, project expected")]
    SeedTargetedProjectExpected,

    #[error("no seed targeted or shoot targeted")]
    NoSeedTargeted,

    #[error("no shoot targeted")]
    NoShootTargeted,

    #[error("no seed or project targeted")]
    NoSeedOrProjectTargeted,

    #[error("target stack is empty")]
    EmptyTarget,

    #[error("no garden cluster found for {0}")]
    GardenNotFound(String),

    #[error("shoot {shoot} not found on seed {seed}")]
    ShootNotOnSeed { shoot: String, seed: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl From<kube::Error> for GardenError {
    fn from(err: kube::Error) -> Self {
        GardenError::KubeError(err.to_string())
    }
}

impl GardenError {
    pub fn config_error(context: impl Into<String>) -> Self {
        Self::ConfigError(context.into())
    }

    pub fn not_found(
        resource_type: impl Into<String>,
        name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            name: name.into(),
            namespace: namespace.into(),
        }
    }

    pub fn missing_field(
        resource_type: impl Into<String>,
        name: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self::MissingField {
            resource_type: resource_type.into(),
            name: name.into(),
            field: field.into(),
        }
    }

    /// Maps a kube API error, turning 404 into [`GardenError::NotFound`].
    pub fn from_api(err: kube::Error, resource_type: &str, name: &str, namespace: &str) -> Self {
        match err {
            kube::Error::Api(ae) if ae.code == 404 => {
                Self::not_found(resource_type, name, namespace)
            }
            kube::Error::Api(ae) => Self::KubeError(ae.message),
            e => Self::KubeError(e.to_string()),
        }
    }
}
