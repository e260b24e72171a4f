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

//! Turns a target stack plus an optional explicit name into what to fetch.

use super::stack::{Target, TargetKind};
use crate::shared::error::{GardenError, Result};

/// How to find a seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedLookup {
    Named(String),
    /// The seed hosting `shoot` of `project`.
    HostOf { project: String, shoot: String },
}

/// How to find a shoot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShootLookup {
    InProject { project: String, shoot: String },
    OnSeed { seed: String, shoot: String },
}

pub fn garden_name(target: &Target, explicit: Option<&str>) -> Result<String> {
    if let Some(name) = explicit {
        return Ok(name.to_string());
    }
    target
        .garden()
        .map(|g| g.name.clone())
        .ok_or(GardenError::NoGardenTargeted)
}

pub fn project_name(target: &Target, explicit: Option<&str>) -> Result<String> {
    if let Some(name) = explicit {
        return Ok(name.to_string());
    }
    match target.parent() {
        None => Err(GardenError::NoProjectTargeted),
        Some(meta) if meta.kind == TargetKind::Seed => {
            Err(GardenError::SeedTargetedProjectExpected)
        }
        Some(meta) => Ok(meta.name.clone()),
    }
}

pub fn seed_lookup(target: &Target, explicit: Option<&str>) -> Result<SeedLookup> {
    if let Some(name) = explicit {
        return Ok(SeedLookup::Named(name.to_string()));
    }
    if let Some(seed) = target.seed() {
        return Ok(SeedLookup::Named(seed.name.clone()));
    }
    match (target.project(), target.shoot()) {
        (Some(project), Some(shoot)) => Ok(SeedLookup::HostOf {
            project: project.name.clone(),
            shoot: shoot.name.clone(),
        }),
        _ => Err(GardenError::NoSeedTargeted),
    }
}

pub fn shoot_lookup(target: &Target, explicit: Option<&str>) -> Result<ShootLookup> {
    let shoot = match explicit {
        Some(name) => {
            if target.len() < 2 {
                return Err(GardenError::NoSeedOrProjectTargeted);
            }
            name.to_string()
        }
        None => target
            .shoot()
            .map(|s| s.name.clone())
            .ok_or(GardenError::NoShootTargeted)?,
    };

    let parent = target.parent().ok_or(GardenError::NoSeedOrProjectTargeted)?;
    match parent.kind {
        TargetKind::Project => Ok(ShootLookup::InProject {
            project: parent.name.clone(),
            shoot,
        }),
        TargetKind::Seed => Ok(ShootLookup::OnSeed {
            seed: parent.name.clone(),
            shoot,
        }),
        other => Err(GardenError::InvalidTarget(format!(
            "{} cannot be at position 1",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::target::stack::TargetMeta;

    fn stack(entries: &[(TargetKind, &str)]) -> Target {
        Target::new(
            entries
                .iter()
                .map(|(kind, name)| TargetMeta::new(*kind, *name))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_garden_name() {
        let empty = Target::default();
        assert!(matches!(
            garden_name(&empty, None),
            Err(GardenError::NoGardenTargeted)
        ));
        assert_eq!(garden_name(&empty, Some("prod")).unwrap(), "prod");

        let target = stack(&[(TargetKind::Garden, "dev")]);
        assert_eq!(garden_name(&target, None).unwrap(), "dev");
    }

    #[test]
    fn test_project_name() {
        let garden_only = stack(&[(TargetKind::Garden, "dev")]);
        assert!(matches!(
            project_name(&garden_only, None),
            Err(GardenError::NoProjectTargeted)
        ));

        let seed = stack(&[(TargetKind::Garden, "dev"), (TargetKind::Seed, "aws")]);
        assert!(matches!(
            project_name(&seed, None),
            Err(GardenError::SeedTargetedProjectExpected)
        ));
        assert_eq!(project_name(&seed, Some("demo")).unwrap(), "demo");

        let project = stack(&[(TargetKind::Garden, "dev"), (TargetKind::Project, "demo")]);
        assert_eq!(project_name(&project, None).unwrap(), "demo");
    }

    #[test]
    fn test_seed_lookup() {
        let seed = stack(&[(TargetKind::Garden, "dev"), (TargetKind::Seed, "aws")]);
        assert_eq!(
            seed_lookup(&seed, None).unwrap(),
            SeedLookup::Named("aws".to_string())
        );

        let shoot = stack(&[
            (TargetKind::Garden, "dev"),
            (TargetKind::Project, "demo"),
            (TargetKind::Shoot, "cluster-1"),
        ]);
        assert_eq!(
            seed_lookup(&shoot, None).unwrap(),
            SeedLookup::HostOf {
                project: "demo".to_string(),
                shoot: "cluster-1".to_string()
            }
        );

        let project = stack(&[(TargetKind::Garden, "dev"), (TargetKind::Project, "demo")]);
        assert!(matches!(
            seed_lookup(&project, None),
            Err(GardenError::NoSeedTargeted)
        ));
        assert_eq!(
            seed_lookup(&project, Some("gcp")).unwrap(),
            SeedLookup::Named("gcp".to_string())
        );
    }

    #[test]
    fn test_shoot_lookup() {
        let project = stack(&[(TargetKind::Garden, "dev"), (TargetKind::Project, "demo")]);
        assert!(matches!(
            shoot_lookup(&project, None),
            Err(GardenError::NoShootTargeted)
        ));
        assert_eq!(
            shoot_lookup(&project, Some("other")).unwrap(),
            ShootLookup::InProject {
                project: "demo".to_string(),
                shoot: "other".to_string()
            }
        );

        let garden_only = stack(&[(TargetKind::Garden, "dev")]);
        assert!(matches!(
            shoot_lookup(&garden_only, Some("other")),
            Err(GardenError::NoSeedOrProjectTargeted)
        ));

        let seed = stack(&[
            (TargetKind::Garden, "dev"),
            (TargetKind::Seed, "aws"),
            (TargetKind::Shoot, "cluster-1"),
        ]);
        assert_eq!(
            shoot_lookup(&seed, None).unwrap(),
            ShootLookup::OnSeed {
                seed: "aws".to_string(),
                shoot: "cluster-1".to_string()
            }
        );
    }
}
