//! Shared config and credentials files (`~/.aws/config`, `~/.aws/credentials`).
//!
//! Only the flat `key = value` subset is understood; nested sub-sections
//! (indented continuation lines) are skipped.

use crate::config::env_non_empty;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// Profile name used when `AWS_PROFILE` is unset.
pub const DEFAULT_PROFILE: &str = "default";

/// Which of the two shared files is being parsed.
///
/// They differ only in section syntax: the config file names non-default
/// profiles `[profile name]`, the credentials file uses `[name]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Config,
    Credentials,
}

/// One named profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    name: String,
    properties: BTreeMap<String, String>,
}

impl Profile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

/// All profiles of one file plus the selected profile name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSet {
    profiles: BTreeMap<String, Profile>,
    selected: String,
}

impl ProfileSet {
    /// Parse file contents. The selected profile is `AWS_PROFILE` or `default`.
    pub fn parse(contents: &str, kind: FileKind) -> Self {
        let mut profiles: BTreeMap<String, Profile> = BTreeMap::new();
        let mut current: Option<String> = None;

        for raw in contents.lines() {
            if raw.starts_with(' ') || raw.starts_with('\t') {
                continue;
            }
            let line = strip_comment(raw).trim();
            if line.is_empty() {
                continue;
            }

            if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                current = section_name(header.trim(), kind);
                if let Some(ref name) = current {
                    profiles.entry(name.clone()).or_insert_with(|| Profile {
                        name: name.clone(),
                        properties: BTreeMap::new(),
                    });
                }
                continue;
            }

            let (Some(name), Some((key, value))) = (current.as_ref(), line.split_once('=')) else {
                continue;
            };
            if let Some(profile) = profiles.get_mut(name) {
                profile
                    .properties
                    .insert(key.trim().to_ascii_lowercase(), value.trim().to_string());
            }
        }

        Self {
            profiles,
            selected: env_non_empty("AWS_PROFILE").unwrap_or_else(|| DEFAULT_PROFILE.to_string()),
        }
    }

    pub fn load(path: &Path, kind: FileKind) -> io::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::parse(&contents, kind))
    }

    /// The shared config file (`AWS_CONFIG_FILE` or `~/.aws/config`),
    /// `None` when it does not exist or cannot be read.
    pub fn load_config_file() -> Option<Self> {
        let path = shared_file_path("AWS_CONFIG_FILE", "config")?;
        Self::load_if_present(&path, FileKind::Config)
    }

    /// The shared credentials file (`AWS_SHARED_CREDENTIALS_FILE` or
    /// `~/.aws/credentials`).
    pub fn load_credentials_file() -> Option<Self> {
        let path = shared_file_path("AWS_SHARED_CREDENTIALS_FILE", "credentials")?;
        Self::load_if_present(&path, FileKind::Credentials)
    }

    fn load_if_present(path: &Path, kind: FileKind) -> Option<Self> {
        match Self::load(path, kind) {
            Ok(set) => Some(set),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Select a different profile.
    pub fn with_selected(mut self, name: impl Into<String>) -> Self {
        self.selected = name.into();
        self
    }

    pub fn selected_name(&self) -> &str {
        &self.selected
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    /// The selected profile, if the file defines it.
    pub fn active(&self) -> Option<&Profile> {
        self.get(&self.selected)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }
}

fn strip_comment(line: &str) -> &str {
    let trimmed = line.trim_start();
    if trimmed.starts_with('#') || trimmed.starts_with(';') {
        return "";
    }
    line
}

fn section_name(header: &str, kind: FileKind) -> Option<String> {
    match kind {
        FileKind::Credentials => Some(header.to_string()),
        FileKind::Config if header == DEFAULT_PROFILE => Some(header.to_string()),
        FileKind::Config => header
            .strip_prefix("profile")
            .filter(|rest| rest.starts_with(char::is_whitespace))
            .map(|rest| rest.trim().to_string()),
    }
}

fn shared_file_path(env_key: &str, file_name: &str) -> Option<PathBuf> {
    if let Some(explicit) = env_non_empty(env_key) {
        return Some(expand_home(&explicit));
    }
    dirs::home_dir().map(|home| home.join(".aws").join(file_name))
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    const CREDENTIALS: &str = "\
# comment
[default]
aws_access_key_id = AKIDDEFAULT
aws_secret_access_key = secret/default

[prod]
aws_access_key_id=AKIDPROD
aws_secret_access_key=secret-prod
aws_session_token = token-prod
";

    const CONFIG: &str = "\
[default]
region = us-west-2

[profile audit]
region = eu-north-1
s3 =
  max_concurrent_requests = 20

[profilebroken]
region = nowhere-1
";

    #[test]
    #[serial]
    fn parses_credentials_sections() {
        std::env::remove_var("AWS_PROFILE");
        let set = ProfileSet::parse(CREDENTIALS, FileKind::Credentials);
        assert_eq!(set.selected_name(), "default");
        let default = set.active().unwrap();
        assert_eq!(default.get("aws_access_key_id"), Some("AKIDDEFAULT"));
        assert_eq!(default.get("aws_secret_access_key"), Some("secret/default"));

        let prod = set.get("prod").unwrap();
        assert_eq!(prod.get("aws_session_token"), Some("token-prod"));
    }

    #[test]
    fn config_sections_need_profile_prefix() {
        let set = ProfileSet::parse(CONFIG, FileKind::Config);
        let names: Vec<&str> = set.names().collect();
        assert_eq!(names, vec!["audit", "default"]);
        assert_eq!(set.get("audit").unwrap().get("region"), Some("eu-north-1"));
        assert!(set.get("audit").unwrap().get("max_concurrent_requests").is_none());
    }

    #[test]
    #[serial]
    fn aws_profile_selects_section() {
        std::env::set_var("AWS_PROFILE", "prod");
        let set = ProfileSet::parse(CREDENTIALS, FileKind::Credentials);
        std::env::remove_var("AWS_PROFILE");
        assert_eq!(set.active().unwrap().name(), "prod");
    }

    #[test]
    #[serial]
    fn loads_from_env_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CONFIG.as_bytes()).unwrap();
        std::env::set_var("AWS_CONFIG_FILE", file.path());
        std::env::remove_var("AWS_PROFILE");
        let set = ProfileSet::load_config_file();
        std::env::remove_var("AWS_CONFIG_FILE");

        let set = set.unwrap();
        assert_eq!(set.active().unwrap().get("region"), Some("us-west-2"));
    }

    #[test]
    #[serial]
    fn missing_file_is_none() {
        std::env::set_var("AWS_SHARED_CREDENTIALS_FILE", "/definitely/not/here/credentials");
        let set = ProfileSet::load_credentials_file();
        std::env::remove_var("AWS_SHARED_CREDENTIALS_FILE");
        assert!(set.is_none());
    }
}
