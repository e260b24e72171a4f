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

//! Gardener `core.gardener.cloud/v1beta1` resources
//!
//! Only the fields needed to walk from a project or seed to a shoot's
//! credentials are typed. Everything else is kept in `extra` so a manifest
//! printed back to the user is complete.

use crate::infrastructure::constants::{
    GARDENER_GROUP, GARDENER_VERSION, KIND_PROJECT, KIND_SEED, KIND_SHOOT, PLURAL_PROJECTS,
    PLURAL_SEEDS, PLURAL_SHOOTS,
};
use crate::shared::error::{GardenError, Result};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::api::{ApiResource, DynamicObject, GroupVersionKind};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(
    serialize = "Spec: Serialize, Status: Serialize",
    deserialize = "Spec: Deserialize<'de> + Default, Status: Deserialize<'de>"
))]
pub struct GardenerObject<Spec, Status = Value> {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: Spec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl<Spec, Status> GardenerObject<Spec, Status> {
    pub fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or_default()
    }
}

pub type Project = GardenerObject<ProjectSpec>;
pub type Seed = GardenerObject<SeedSpec>;
pub type Shoot = GardenerObject<ShootSpec, ShootStatus>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_ref: Option<SecretReference>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretReference {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub namespace: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShootSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_name: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShootStatus {
    #[serde(rename = "technicalID", default, skip_serializing_if = "Option::is_none")]
    pub technical_id: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Project {
    /// Namespace backing the project; shoots of the project live there.
    pub fn namespace(&self) -> Result<&str> {
        self.spec
            .namespace
            .as_deref()
            .filter(|ns| !ns.is_empty())
            .ok_or_else(|| GardenError::missing_field(KIND_PROJECT, self.name(), "spec.namespace"))
    }
}

impl Seed {
    pub fn secret_ref(&self) -> Result<&SecretReference> {
        self.spec
            .secret_ref
            .as_ref()
            .filter(|r| !r.name.is_empty() && !r.namespace.is_empty())
            .ok_or_else(|| GardenError::missing_field(KIND_SEED, self.name(), "spec.secretRef"))
    }
}

impl Shoot {
    pub fn seed_name(&self) -> Result<&str> {
        self.spec
            .seed_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| GardenError::missing_field(KIND_SHOOT, self.name(), "spec.seedName"))
    }

    /// Seed namespace holding the shoot's control plane.
    pub fn technical_id(&self) -> Result<&str> {
        self.status
            .as_ref()
            .and_then(|s| s.technical_id.as_deref())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                GardenError::missing_field(KIND_SHOOT, self.name(), "status.technicalID")
            })
    }

    pub fn is_on_seed(&self, seed: &str) -> bool {
        self.spec.seed_name.as_deref() == Some(seed)
    }
}

fn api_resource(kind: &str, plural: &str) -> ApiResource {
    let gvk = GroupVersionKind::gvk(GARDENER_GROUP, GARDENER_VERSION, kind);
    ApiResource::from_gvk_with_plural(&gvk, plural)
}

pub fn project_resource() -> ApiResource {
    api_resource(KIND_PROJECT, PLURAL_PROJECTS)
}

pub fn seed_resource() -> ApiResource {
    api_resource(KIND_SEED, PLURAL_SEEDS)
}

pub fn shoot_resource() -> ApiResource {
    api_resource(KIND_SHOOT, PLURAL_SHOOTS)
}

/// Converts an untyped API object into one of the typed Gardener resources.
pub fn from_dynamic<K: DeserializeOwned>(obj: DynamicObject) -> Result<K> {
    let value = serde_json::to_value(obj)?;
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn shoot_json() -> Value {
        json!({
            "apiVersion": "core.gardener.cloud/v1beta1",
            "kind": "Shoot",
            "metadata": { "name": "cluster-1", "namespace": "garden-demo" },
            "spec": {
                "seedName": "aws-eu1",
                "region": "eu-west-1",
                "kubernetes": { "version": "1.30.2" }
            },
            "status": {
                "technicalID": "shoot--demo--cluster-1",
                "uid": "abc"
            }
        })
    }

    #[test]
    fn test_shoot_fields() {
        let shoot: Shoot = serde_json::from_value(shoot_json()).unwrap();
        assert_eq!(shoot.name(), "cluster-1");
        assert_eq!(shoot.seed_name().unwrap(), "aws-eu1");
        assert_eq!(shoot.technical_id().unwrap(), "shoot--demo--cluster-1");
        assert!(shoot.is_on_seed("aws-eu1"));
        assert!(!shoot.is_on_seed("gcp-us1"));
    }

    #[test]
    fn test_unknown_fields_survive_serialization() {
        let shoot: Shoot = serde_json::from_value(shoot_json()).unwrap();
        let back = serde_json::to_value(&shoot).unwrap();
        assert_eq!(back["spec"]["region"], "eu-west-1");
        assert_eq!(back["spec"]["kubernetes"]["version"], "1.30.2");
        assert_eq!(back["status"]["uid"], "abc");
        assert_eq!(back["apiVersion"], "core.gardener.cloud/v1beta1");
    }

    #[test]
    fn test_missing_fields_are_errors() {
        let project: Project = serde_json::from_value(json!({
            "metadata": { "name": "demo" },
            "spec": {}
        }))
        .unwrap();
        assert!(matches!(
            project.namespace(),
            Err(GardenError::MissingField { .. })
        ));

        let seed: Seed = serde_json::from_value(json!({ "metadata": { "name": "aws" } })).unwrap();
        assert!(seed.secret_ref().is_err());

        let shoot: Shoot =
            serde_json::from_value(json!({ "metadata": { "name": "s" }, "spec": {} })).unwrap();
        assert!(shoot.seed_name().is_err());
        assert!(shoot.technical_id().is_err());
    }

    #[test]
    fn test_seed_secret_ref_needs_namespace() {
        let seed: Seed = serde_json::from_value(json!({
            "metadata": { "name": "aws" },
            "spec": { "secretRef": { "name": "seed-aws", "namespace": "" } }
        }))
        .unwrap();
        match seed.secret_ref() {
            Err(GardenError::MissingField { name, field, .. }) => {
                assert_eq!(name, "aws");
                assert_eq!(field, "spec.secretRef");
            }
            other => panic!("expected missing secretRef, got {:?}", other),
        }

        let seed: Seed = serde_json::from_value(json!({
            "metadata": { "name": "aws" },
            "spec": { "secretRef": { "name": "seed-aws", "namespace": "garden" } }
        }))
        .unwrap();
        assert_eq!(seed.secret_ref().unwrap().namespace, "garden");
    }

    #[test]
    fn test_from_dynamic() {
        let obj: DynamicObject = serde_json::from_value(json!({
            "apiVersion": "core.gardener.cloud/v1beta1",
            "kind": "Seed",
            "metadata": { "name": "aws-eu1" },
            "spec": { "secretRef": { "name": "seed-aws-eu1", "namespace": "garden" } }
        }))
        .unwrap();

        let seed: Seed = from_dynamic(obj).unwrap();
        let secret_ref = seed.secret_ref().unwrap();
        assert_eq!(secret_ref.name, "seed-aws-eu1");
        assert_eq!(secret_ref.namespace, "garden");
        assert_eq!(seed.kind, "Seed");
    }

    #[test]
    fn test_api_resources() {
        let ar = shoot_resource();
        assert_eq!(ar.group, "core.gardener.cloud");
        assert_eq!(ar.version, "v1beta1");
        assert_eq!(ar.api_version, "core.gardener.cloud/v1beta1");
        assert_eq!(ar.plural, "shoots");
        assert_eq!(project_resource().kind, "Project");
        assert_eq!(seed_resource().plural, "seeds");
    }
}
