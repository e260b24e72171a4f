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

//! The target stack: garden, then a project or seed, then a shoot.

use crate::shared::error::{GardenError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::read_to_string;
use std::path::Path;

pub const MAX_DEPTH: usize = 3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Garden,
    Project,
    Seed,
    Shoot,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TargetKind::Garden => "garden",
            TargetKind::Project => "project",
            TargetKind::Seed => "seed",
            TargetKind::Shoot => "shoot",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetMeta {
    pub kind: TargetKind,
    pub name: String,
}

impl TargetMeta {
    pub fn new(kind: TargetKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Target {
    #[serde(default)]
    pub target: Vec<TargetMeta>,
}

impl Target {
    /// Builds a stack, checking the positional layout.
    pub fn new(stack: Vec<TargetMeta>) -> Result<Self> {
        let target = Self { target: stack };
        target.validate()?;
        Ok(target)
    }

    /// Loads the stack from disk. A missing file means nothing is targeted.
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No target file at {}, stack is empty", path.display());
            return Ok(Self::default());
        }

        let content = read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let target: Self = serde_yaml::from_str(&content).map_err(|e| {
            GardenError::InvalidTarget(format!("failed to parse {}: {}", path.display(), e))
        })?;
        target.validate()?;
        Ok(target)
    }

    pub fn validate(&self) -> Result<()> {
        if self.target.len() > MAX_DEPTH {
            return Err(GardenError::InvalidTarget(format!(
                "stack has {} entries, at most {} allowed",
                self.target.len(),
                MAX_DEPTH
            )));
        }

        for (index, meta) in self.target.iter().enumerate() {
            let allowed = match index {
                0 => matches!(meta.kind, TargetKind::Garden),
                1 => matches!(meta.kind, TargetKind::Project | TargetKind::Seed),
                _ => matches!(meta.kind, TargetKind::Shoot),
            };
            if !allowed {
                return Err(GardenError::InvalidTarget(format!(
                    "{} '{}' cannot be at position {}",
                    meta.kind, meta.name, index
                )));
            }
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.target.len()
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    pub fn garden(&self) -> Option<&TargetMeta> {
        self.target.first()
    }

    /// The project or seed entry.
    pub fn parent(&self) -> Option<&TargetMeta> {
        self.target.get(1)
    }

    pub fn project(&self) -> Option<&TargetMeta> {
        self.parent().filter(|m| m.kind == TargetKind::Project)
    }

    pub fn seed(&self) -> Option<&TargetMeta> {
        self.parent().filter(|m| m.kind == TargetKind::Seed)
    }

    pub fn shoot(&self) -> Option<&TargetMeta> {
        self.target.get(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_project_stack() -> Target {
        Target::new(vec![
            TargetMeta::new(TargetKind::Garden, "dev"),
            TargetMeta::new(TargetKind::Project, "demo"),
            TargetMeta::new(TargetKind::Shoot, "cluster-1"),
        ])
        .unwrap()
    }

    #[test]
    fn test_accessors() {
        let target = full_project_stack();
        assert_eq!(target.len(), 3);
        assert_eq!(target.garden().unwrap().name, "dev");
        assert_eq!(target.project().unwrap().name, "demo");
        assert!(target.seed().is_none());
        assert_eq!(target.shoot().unwrap().name, "cluster-1");
    }

    #[test]
    fn test_positional_invariant() {
        assert!(Target::new(vec![TargetMeta::new(TargetKind::Project, "demo")]).is_err());
        assert!(Target::new(vec![
            TargetMeta::new(TargetKind::Garden, "dev"),
            TargetMeta::new(TargetKind::Shoot, "cluster-1"),
        ])
        .is_err());
        assert!(Target::new(vec![
            TargetMeta::new(TargetKind::Garden, "dev"),
            TargetMeta::new(TargetKind::Seed, "aws"),
            TargetMeta::new(TargetKind::Shoot, "a"),
            TargetMeta::new(TargetKind::Shoot, "b"),
        ])
        .is_err());
        assert!(Target::new(vec![
            TargetMeta::new(TargetKind::Garden, "dev"),
            TargetMeta::new(TargetKind::Seed, "aws"),
        ])
        .is_ok());
    }

    #[test]
    fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("target");
        std::fs::write(
            &path,
            "target:\n- kind: garden\n  name: dev\n- kind: seed\n  name: aws-eu1\n",
        )
        .unwrap();

        let target = Target::read(&path).unwrap();
        assert_eq!(target.len(), 2);
        assert_eq!(target.seed().unwrap().name, "aws-eu1");
    }

    #[test]
    fn test_read_missing_or_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("target");
        assert!(Target::read(&path).unwrap().is_empty());

        std::fs::write(&path, "").unwrap();
        assert!(Target::read(&path).unwrap().is_empty());
    }

    #[test]
    fn test_read_rejects_bad_kind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("target");
        std::fs::write(&path, "target:\n- kind: cluster\n  name: dev\n").unwrap();
        assert!(matches!(
            Target::read(&path),
            Err(GardenError::InvalidTarget(_))
        ));
    }

    #[test]
    fn test_yaml_layout() {
        let yaml = serde_yaml::to_string(&full_project_stack()).unwrap();
        assert!(yaml.starts_with("target:\n- kind: garden\n  name: dev\n"));
    }
}
