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

//! Garden cluster configuration file

use crate::infrastructure::kubeconfig::expand_tilde;
use crate::shared::error::{GardenError, Result};
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

/// Known garden clusters
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GardenConfig {
    #[serde(default)]
    pub garden_clusters: Vec<GardenClusterMeta>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GardenClusterMeta {
    pub name: String,
    pub kube_config: String,
}

impl GardenClusterMeta {
    /// Kubeconfig location with `~` resolved against `home`.
    pub fn kubeconfig_path(&self, home: &Path) -> PathBuf {
        expand_tilde(&self.kube_config, home)
    }
}

impl GardenConfig {
    /// Load configuration from a YAML file
    pub fn read(path: &Path) -> Result<Self> {
        let content = read_to_string(path).map_err(|e| {
            GardenError::config_error(format!(
                "Failed to read garden config {}: {}",
                path.display(),
                e
            ))
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            GardenError::config_error(format!(
                "Failed to parse garden config {}: {}",
                path.display(),
                e
            ))
        })
    }

    pub fn find_garden(&self, name: &str) -> Option<&GardenClusterMeta> {
        self.garden_clusters.iter().find(|g| g.name == name)
    }

    /// Same as [`GardenConfig::find_garden`] but fails for unknown gardens.
    pub fn garden(&self, name: &str) -> Result<&GardenClusterMeta> {
        self.find_garden(name)
            .ok_or_else(|| GardenError::GardenNotFound(name.to_string()))
    }
}
