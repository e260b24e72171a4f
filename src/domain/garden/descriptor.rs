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

use crate::domain::config::{GardenConfig, GardenPaths};
use crate::domain::target::resolve::{
    garden_name, project_name, seed_lookup, shoot_lookup, SeedLookup, ShootLookup,
};
use crate::domain::target::Target;
use crate::infrastructure::constants::{KUBECONFIG_SECRET_KEY, SHOOT_KUBECONFIG_SECRET};
use crate::infrastructure::kubeconfig::{read_kubeconfig, write_kubeconfig};
use crate::infrastructure::kubernetes::client::{
    secret_data, ClientFactory, GardenKubeClient, KubeClientFactory,
};
use crate::infrastructure::kubernetes::gardener::{Project, Seed, Shoot};
use crate::shared::error::GardenError;
use std::sync::Arc;

/// Resolves the target stack against the garden and seed clusters.
pub struct GardenDescriptor {
    factory: Box<dyn ClientFactory>,
    paths: GardenPaths,
}

impl GardenDescriptor {
    pub fn new(paths: GardenPaths) -> Self {
        Self::with_factory(paths, Box::new(KubeClientFactory))
    }

    pub fn with_factory(paths: GardenPaths, factory: Box<dyn ClientFactory>) -> Self {
        Self { factory, paths }
    }

    pub fn read_target(&self) -> Result<Target, GardenError> {
        Target::read(&self.paths.target_file)
    }

    pub fn read_config(&self) -> Result<GardenConfig, GardenError> {
        GardenConfig::read(&self.paths.config_file)
    }

    /// Client for the garden at the bottom of the stack.
    async fn garden_client(
        &self,
        target: &Target,
    ) -> Result<(String, Arc<dyn GardenKubeClient>), GardenError> {
        let garden = target.garden().ok_or(GardenError::NoGardenTargeted)?;
        let config = self.read_config()?;
        let kubeconfig = config
            .garden(&garden.name)?
            .kubeconfig_path(self.paths.user_home());

        tracing::debug!(
            "Using garden '{}' with kubeconfig {}",
            garden.name,
            kubeconfig.display()
        );
        let client = self.factory.connect(&kubeconfig).await?;
        Ok((garden.name.clone(), client))
    }

    pub async fn get_project(&self, name: Option<&str>) -> Result<Project, GardenError> {
        let target = self.read_target()?;
        let name = project_name(&target, name)?;
        let (_, garden) = self.garden_client(&target).await?;

        tracing::debug!("Fetching project '{}'", name);
        garden.get_project(&name).await
    }

    /// Raw kubeconfig of a garden cluster as listed in the garden config.
    pub fn get_garden_kubeconfig(&self, name: Option<&str>) -> Result<Vec<u8>, GardenError> {
        let name = match name {
            Some(name) => name.to_string(),
            None => garden_name(&self.read_target()?, None)?,
        };

        let config = self.read_config()?;
        let path = config.garden(&name)?.kubeconfig_path(self.paths.user_home());
        tracing::debug!("Reading garden '{}' kubeconfig from {}", name, path.display());
        read_kubeconfig(&path)
    }

    pub async fn get_seed_kubeconfig(&self, name: Option<&str>) -> Result<Vec<u8>, GardenError> {
        let target = self.read_target()?;
        let lookup = seed_lookup(&target, name)?;
        let (_, garden) = self.garden_client(&target).await?;

        let seed_name = match lookup {
            SeedLookup::Named(seed) => seed,
            SeedLookup::HostOf { project, shoot } => {
                let project = garden.get_project(&project).await?;
                let shoot = garden.get_shoot(project.namespace()?, &shoot).await?;
                shoot.seed_name()?.to_string()
            }
        };

        let seed = garden.get_seed(&seed_name).await?;
        self.seed_kubeconfig(garden.as_ref(), &seed).await
    }

    pub async fn get_shoot_kubeconfig(&self, name: Option<&str>) -> Result<Vec<u8>, GardenError> {
        let target = self.read_target()?;
        let lookup = shoot_lookup(&target, name)?;
        let (garden_name, garden) = self.garden_client(&target).await?;

        let shoot = self.find_shoot(garden.as_ref(), &lookup).await?;
        let technical_id = shoot.technical_id()?;
        let seed = garden.get_seed(shoot.seed_name()?).await?;

        let seed_kubeconfig = self.seed_kubeconfig(garden.as_ref(), &seed).await?;
        let cache_path = self
            .paths
            .seed_kubeconfig_cache(&garden_name, &seed.secret_ref()?.name);
        write_kubeconfig(&cache_path, &seed_kubeconfig)?;
        tracing::info!(
            "Cached kubeconfig of seed '{}' at {}",
            seed.name(),
            cache_path.display()
        );

        let seed_client = self.factory.connect(&cache_path).await?;
        tracing::debug!(
            "Fetching secret '{}' in seed namespace '{}'",
            SHOOT_KUBECONFIG_SECRET,
            technical_id
        );
        let secret = seed_client
            .get_secret(technical_id, SHOOT_KUBECONFIG_SECRET)
            .await?;
        Ok(secret_data(&secret, KUBECONFIG_SECRET_KEY)?.to_vec())
    }

    pub fn get_target(&self) -> Result<Target, GardenError> {
        let target = self.read_target()?;
        if target.is_empty() {
            return Err(GardenError::EmptyTarget);
        }
        Ok(target)
    }

    async fn find_shoot(
        &self,
        garden: &dyn GardenKubeClient,
        lookup: &ShootLookup,
    ) -> Result<Shoot, GardenError> {
        match lookup {
            ShootLookup::InProject { project, shoot } => {
                let project = garden.get_project(project).await?;
                garden.get_shoot(project.namespace()?, shoot).await
            }
            ShootLookup::OnSeed { seed, shoot } => garden
                .list_shoots()
                .await?
                .into_iter()
                .find(|s| s.name() == shoot.as_str() && s.is_on_seed(seed))
                .ok_or_else(|| GardenError::ShootNotOnSeed {
                    shoot: shoot.clone(),
                    seed: seed.clone(),
                }),
        }
    }

    /// Kubeconfig of a seed, read from the secret its spec references.
    async fn seed_kubeconfig(
        &self,
        garden: &dyn GardenKubeClient,
        seed: &Seed,
    ) -> Result<Vec<u8>, GardenError> {
        let secret_ref = seed.secret_ref()?;
        tracing::debug!(
            "Fetching seed secret {}/{}",
            secret_ref.namespace,
            secret_ref.name
        );
        let secret = garden
            .get_secret(&secret_ref.namespace, &secret_ref.name)
            .await?;
        Ok(secret_data(&secret, KUBECONFIG_SECRET_KEY)?.to_vec())
    }
}
