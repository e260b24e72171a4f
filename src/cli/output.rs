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

//! Rendering of command results

use crate::shared::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Renders an API object or the target stack.
pub fn render_object<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(value)?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// Renders a kubeconfig. YAML is the raw bytes followed by a newline, JSON is
/// converted.
pub fn render_kubeconfig(raw: &[u8], format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Yaml => {
            let mut out = Vec::with_capacity(raw.len() + 1);
            out.extend_from_slice(raw);
            out.push(b'\n');
            Ok(out)
        }
        OutputFormat::Json => {
            let value: serde_json::Value = serde_yaml::from_slice(raw)?;
            Ok(render_object(&value, OutputFormat::Json)?.into_bytes())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KUBECONFIG: &str = "apiVersion: v1\nkind: Config\nclusters:\n- name: dev\n  cluster:\n    server: https://api.dev.example.com\n";

    #[test]
    fn test_kubeconfig_yaml_passthrough() {
        let out = render_kubeconfig(KUBECONFIG.as_bytes(), OutputFormat::Yaml).unwrap();
        assert_eq!(out, format!("{}\n", KUBECONFIG).into_bytes());

        let trimmed = KUBECONFIG.trim_end();
        let out = render_kubeconfig(trimmed.as_bytes(), OutputFormat::Yaml).unwrap();
        assert_eq!(out, KUBECONFIG.as_bytes());
    }

    #[test]
    fn test_kubeconfig_yaml_keeps_raw_bytes() {
        let out = render_kubeconfig(b"a: \xff\n", OutputFormat::Yaml).unwrap();
        assert_eq!(out, vec![97, 58, 32, 255, 10, 10]);
    }

    #[test]
    fn test_kubeconfig_to_json() {
        let out = render_kubeconfig(KUBECONFIG.as_bytes(), OutputFormat::Json).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("{\n  \"apiVersion\": \"v1\""));
        assert!(out.ends_with("}\n"));

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value["clusters"][0]["cluster"]["server"],
            "https://api.dev.example.com"
        );
    }

    #[test]
    fn test_invalid_kubeconfig_json() {
        assert!(render_kubeconfig(b"key: [unterminated", OutputFormat::Json).is_err());
    }

    #[test]
    fn test_render_object() {
        #[derive(Serialize)]
        struct Item {
            name: &'static str,
        }

        let item = Item { name: "demo" };
        assert_eq!(render_object(&item, OutputFormat::Yaml).unwrap(), "name: demo\n");
        assert_eq!(
            render_object(&item, OutputFormat::Json).unwrap(),
            "{\n  \"name\": \"demo\"\n}\n"
        );
    }
}
