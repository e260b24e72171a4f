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

#[cfg(test)]
mod tests {
    use gardenctl::cli::get::{GetCommand, GetResource};
    use gardenctl::cli::OutputFormat;
    use gardenctl::*;

    #[tokio::test]
    #[ignore] // Requires a reachable garden and a populated ~/.garden
    async fn test_get_targeted_shoot() {
        let paths = GardenPaths::resolve(None, None).expect("Failed to resolve paths");
        let descriptor = GardenDescriptor::new(paths);

        let cmd = GetCommand {
            resource: GetResource::Shoot { name: None },
        };
        let out = cmd
            .run(&descriptor, OutputFormat::Yaml)
            .await
            .expect("Failed to get shoot kubeconfig");
        assert!(String::from_utf8_lossy(&out).contains("apiVersion"));
    }

    #[tokio::test]
    #[ignore] // Requires a reachable garden and a populated ~/.garden
    async fn test_get_targeted_project() {
        let paths = GardenPaths::resolve(None, None).expect("Failed to resolve paths");
        let descriptor = GardenDescriptor::new(paths);

        let project = descriptor
            .get_project(None)
            .await
            .expect("Failed to get project");
        assert!(project.namespace().is_ok());
    }
}
