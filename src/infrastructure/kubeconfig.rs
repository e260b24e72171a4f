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

//! Kubeconfig files on local disk

use crate::shared::error::{GardenError, Result};
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

/// Drops the first `~` of `path`, joins the rest onto `home` and cleans the
/// result. Paths without `~` are returned as they are.
pub fn expand_tilde(path: &str, home: &Path) -> PathBuf {
    if !path.contains('~') {
        return PathBuf::from(path);
    }
    let rest = path.replacen('~', "", 1);
    clean_path(&home.join(rest.trim_start_matches(|c| c == '/' || c == '\\')))
}

/// Lexically removes `.` and resolves `..` against preceding segments.
fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

pub fn read_kubeconfig(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| {
        GardenError::config_error(format!(
            "Failed to read kubeconfig {}: {}",
            path.display(),
            e
        ))
    })
}

/// Writes a kubeconfig, creating parent directories. The file is only
/// readable by the owner on unix.
pub fn write_kubeconfig(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;

    // mode() only applies on creation
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }

    file.write_all(content)?;
    file.flush()?;

    tracing::debug!("Wrote kubeconfig to {}", path.display());
    Ok(())
}
