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

/// Gardener API
pub const GARDENER_GROUP: &str = "core.gardener.cloud";
pub const GARDENER_VERSION: &str = "v1beta1";

/// Gardener resource kinds and plurals
pub const KIND_PROJECT: &str = "Project";
pub const KIND_SEED: &str = "Seed";
pub const KIND_SHOOT: &str = "Shoot";
pub const PLURAL_PROJECTS: &str = "projects";
pub const PLURAL_SEEDS: &str = "seeds";
pub const PLURAL_SHOOTS: &str = "shoots";

/// Secrets
pub const KUBECONFIG_SECRET_KEY: &str = "kubeconfig";
pub const SHOOT_KUBECONFIG_SECRET: &str = "kubecfg";

/// Environment variables
pub const ENV_GARDENCTL_HOME: &str = "GARDENCTL_HOME";
pub const ENV_GARDEN_CONFIG: &str = "GARDENCONFIG";

/// Local layout under the garden home
pub const DEFAULT_HOME_DIR: &str = ".garden";
pub const CONFIG_FILE: &str = "config";
pub const TARGET_FILE: &str = "target";
pub const CACHE_DIR: &str = "cache";
pub const SEEDS_DIR: &str = "seeds";
pub const CACHED_KUBECONFIG_FILE: &str = "kubeconfig.yaml";
