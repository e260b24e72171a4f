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

//! The `get` command

use super::commands::GlobalArgs;
use super::output::{render_kubeconfig, render_object, OutputFormat};
use crate::domain::config::GardenPaths;
use crate::domain::garden::GardenDescriptor;
use crate::shared::error::GardenError;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug, Clone)]
pub struct GetCommand {
    #[command(subcommand)]
    pub resource: GetResource,
}

#[derive(clap::Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum GetResource {
    /// Kubeconfig of a garden cluster (default: targeted garden)
    Garden { name: Option<String> },

    /// Project manifest (default: targeted project)
    Project { name: Option<String> },

    /// Kubeconfig of a seed cluster (default: targeted seed or seed of the targeted shoot)
    Seed { name: Option<String> },

    /// Kubeconfig of a shoot cluster (default: targeted shoot)
    Shoot { name: Option<String> },

    /// The current target stack
    Target,
}

impl GetCommand {
    pub async fn execute(&self, global: &GlobalArgs) -> anyhow::Result<()> {
        let paths = GardenPaths::resolve(global.garden_home.clone(), global.config.clone())
            .map_err(|e| anyhow::anyhow!("Failed to resolve garden paths: {}", e))?;
        let descriptor = GardenDescriptor::new(paths);

        let output = self.run(&descriptor, global.output).await?;

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&output)?;
        stdout.flush()?;
        Ok(())
    }

    /// Fetches the requested resource and renders it as the bytes to print.
    pub async fn run(
        &self,
        descriptor: &GardenDescriptor,
        format: OutputFormat,
    ) -> Result<Vec<u8>, GardenError> {
        match &self.resource {
            GetResource::Garden { name } => {
                let kubeconfig = descriptor.get_garden_kubeconfig(name.as_deref())?;
                render_kubeconfig(&kubeconfig, format)
            }
            GetResource::Project { name } => {
                let project = descriptor.get_project(name.as_deref()).await?;
                render_object(&project, format).map(String::into_bytes)
            }
            GetResource::Seed { name } => {
                let kubeconfig = descriptor.get_seed_kubeconfig(name.as_deref()).await?;
                render_kubeconfig(&kubeconfig, format)
            }
            GetResource::Shoot { name } => {
                let kubeconfig = descriptor.get_shoot_kubeconfig(name.as_deref()).await?;
                render_kubeconfig(&kubeconfig, format)
            }
            GetResource::Target => {
                let target = descriptor.get_target()?;
                render_object(&target, format).map(String::into_bytes)
            }
        }
    }
}
