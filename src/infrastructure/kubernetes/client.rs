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

use crate::infrastructure::constants::{KIND_PROJECT, KIND_SEED, KIND_SHOOT};
use crate::infrastructure::kubernetes::gardener::{
    from_dynamic, project_resource, seed_resource, shoot_resource, Project, Seed, Shoot,
};
use crate::shared::error::GardenError;
use k8s_openapi::api::core::v1::Secret;
use kube::api::{DynamicObject, ListParams};
use kube::{Api, Client};
use std::path::Path;
use std::sync::Arc;

/// Read access to a cluster that hosts the Gardener API or shoot control planes.
#[async_trait::async_trait]
pub trait GardenKubeClient: Send + Sync {
    async fn get_project(&self, name: &str) -> Result<Project, GardenError>;

    async fn get_seed(&self, name: &str) -> Result<Seed, GardenError>;

    async fn get_shoot(&self, namespace: &str, name: &str) -> Result<Shoot, GardenError>;

    /// Lists shoots across all namespaces.
    async fn list_shoots(&self) -> Result<Vec<Shoot>, GardenError>;

    async fn get_secret(&self, namespace: &str, name: &str) -> Result<Secret, GardenError>;
}

/// Opens clients for kubeconfig files.
#[async_trait::async_trait]
pub trait ClientFactory: Send + Sync {
    async fn connect(&self, kubeconfig: &Path) -> Result<Arc<dyn GardenKubeClient>, GardenError>;
}

pub struct GardenKubeClientImpl {
    client: Client,
}

impl GardenKubeClientImpl {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn new_with_config(
        kubeconfig_path: &Path,
        context: Option<String>,
    ) -> Result<Self, GardenError> {
        use kube::config::{KubeConfigOptions, Kubeconfig};

        let kubeconfig = Kubeconfig::read_from(kubeconfig_path).map_err(|e| {
            GardenError::KubeError(format!(
                "Failed to load kubeconfig {}: {}",
                kubeconfig_path.display(),
                e
            ))
        })?;

        let config_options = KubeConfigOptions {
            context,
            cluster: None,
            user: None,
        };

        let config = kube::Config::from_custom_kubeconfig(kubeconfig, &config_options)
            .await
            .map_err(|e| {
                GardenError::KubeError(format!("Failed to create Kubernetes config: {}", e))
            })?;

        let client = Client::try_from(config).map_err(|e| {
            GardenError::KubeError(format!("Failed to create Kubernetes client: {}", e))
        })?;

        Ok(Self::new(client))
    }
}

#[async_trait::async_trait]
impl GardenKubeClient for GardenKubeClientImpl {
    async fn get_project(&self, name: &str) -> Result<Project, GardenError> {
        let api: Api<DynamicObject> = Api::all_with(self.client.clone(), &project_resource());
        let obj = api
            .get(name)
            .await
            .map_err(|e| GardenError::from_api(e, KIND_PROJECT, name, ""))?;
        from_dynamic(obj)
    }

    async fn get_seed(&self, name: &str) -> Result<Seed, GardenError> {
        let api: Api<DynamicObject> = Api::all_with(self.client.clone(), &seed_resource());
        let obj = api
            .get(name)
            .await
            .map_err(|e| GardenError::from_api(e, KIND_SEED, name, ""))?;
        from_dynamic(obj)
    }

    async fn get_shoot(&self, namespace: &str, name: &str) -> Result<Shoot, GardenError> {
        let api: Api<DynamicObject> =
            Api::namespaced_with(self.client.clone(), namespace, &shoot_resource());
        let obj = api
            .get(name)
            .await
            .map_err(|e| GardenError::from_api(e, KIND_SHOOT, name, namespace))?;
        from_dynamic(obj)
    }

    async fn list_shoots(&self) -> Result<Vec<Shoot>, GardenError> {
        let api: Api<DynamicObject> = Api::all_with(self.client.clone(), &shoot_resource());
        let list = api.list(&ListParams::default()).await?;
        list.items.into_iter().map(from_dynamic).collect()
    }

    async fn get_secret(&self, namespace: &str, name: &str) -> Result<Secret, GardenError> {
        let api: Api<Secret> = Api::namespaced(self.client.clone(), namespace);
        api.get(name)
            .await
            .map_err(|e| GardenError::from_api(e, "Secret", name, namespace))
    }
}

/// Builds real API clients from kubeconfig files using their current context.
#[derive(Debug, Default, Clone)]
pub struct KubeClientFactory;

#[async_trait::async_trait]
impl ClientFactory for KubeClientFactory {
    async fn connect(&self, kubeconfig: &Path) -> Result<Arc<dyn GardenKubeClient>, GardenError> {
        tracing::debug!("Connecting with kubeconfig {}", kubeconfig.display());
        let client = GardenKubeClientImpl::new_with_config(kubeconfig, None).await?;
        Ok(Arc::new(client))
    }
}

/// Returns the named data key of a secret.
pub fn secret_data<'a>(secret: &'a Secret, key: &str) -> Result<&'a [u8], GardenError> {
    secret
        .data
        .as_ref()
        .and_then(|data| data.get(key))
        .map(|bytes| bytes.0.as_slice())
        .ok_or_else(|| {
            GardenError::missing_field(
                "Secret",
                secret.metadata.name.as_deref().unwrap_or_default(),
                format!("data key '{}'", key),
            )
        })
}
