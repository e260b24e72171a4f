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

//! Local file layout

use crate::infrastructure::constants::{
    CACHED_KUBECONFIG_FILE, CACHE_DIR, CONFIG_FILE, DEFAULT_HOME_DIR, ENV_GARDENCTL_HOME,
    ENV_GARDEN_CONFIG, SEEDS_DIR, TARGET_FILE,
};
use crate::shared::error::{GardenError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GardenPaths {
    /// The user's home directory, used to expand `~`.
    pub user_home: PathBuf,
    /// Garden home holding the target file and caches.
    pub garden_home: PathBuf,
    pub config_file: PathBuf,
    pub target_file: PathBuf,
}

impl GardenPaths {
    pub fn new(user_home: impl Into<PathBuf>, garden_home: impl Into<PathBuf>) -> Self {
        let garden_home = garden_home.into();
        Self {
            user_home: user_home.into(),
            config_file: garden_home.join(CONFIG_FILE),
            target_file: garden_home.join(TARGET_FILE),
            garden_home,
        }
    }

    pub fn with_config_file(mut self, config_file: impl Into<PathBuf>) -> Self {
        self.config_file = config_file.into();
        self
    }

    /// Resolves paths: explicit overrides > environment > defaults under `~/.garden`.
    pub fn resolve(garden_home: Option<PathBuf>, config_file: Option<PathBuf>) -> Result<Self> {
        let user_home = dirs::home_dir()
            .ok_or_else(|| GardenError::config_error("Cannot determine home directory"))?;
        Ok(Self::resolve_with(user_home, garden_home, config_file, |key| {
            std::env::var_os(key)
        }))
    }

    /// Same as [`GardenPaths::resolve`] with the home directory and the
    /// environment lookup supplied by the caller.
    pub fn resolve_with(
        user_home: PathBuf,
        garden_home: Option<PathBuf>,
        config_file: Option<PathBuf>,
        env: impl Fn(&str) -> Option<OsString>,
    ) -> Self {
        let garden_home = garden_home
            .or_else(|| env(ENV_GARDENCTL_HOME).map(PathBuf::from))
            .unwrap_or_else(|| user_home.join(DEFAULT_HOME_DIR));
        let config_file = config_file.or_else(|| env(ENV_GARDEN_CONFIG).map(PathBuf::from));

        let mut paths = Self::new(user_home, garden_home);
        if let Some(config_file) = config_file {
            paths = paths.with_config_file(config_file);
        }
        tracing::debug!(
            "Garden home {}, config {}",
            paths.garden_home.display(),
            paths.config_file.display()
        );
        paths
    }

    /// Cache location of a seed kubeconfig pulled from a garden.
    pub fn seed_kubeconfig_cache(&self, garden: &str, seed_secret: &str) -> PathBuf {
        self.garden_home
            .join(CACHE_DIR)
            .join(garden)
            .join(SEEDS_DIR)
            .join(seed_secret)
            .join(CACHED_KUBECONFIG_FILE)
    }

    pub fn user_home(&self) -> &Path {
        &self.user_home
    }
}
