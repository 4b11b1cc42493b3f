//! Shared CLI arguments and helpers.

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::{Config, OwnershipRecord, ParsePolicy};
use crate::manifest::{manifest_path, read_manifest, ManifestParser};

/// Arguments controlling which manifest is read and how it is parsed.
#[derive(Args)]
pub struct ManifestArgs {
    /// Root of the source tree (holds MAINTAINERS and the git history)
    #[arg(short, long, value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Manifest to parse instead of <PATH>/MAINTAINERS
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Side config file (cfg.yaml or maintainer-map.toml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keep engineers listed as assignees in the config
    #[arg(long)]
    pub assignee: bool,

    /// Ignore the alternate identities listed in the config
    #[arg(long)]
    pub disable_altname: bool,

    /// Mail domain that marks a maintainer as internal
    #[arg(long, value_name = "DOMAIN")]
    pub domain: Option<String>,
}

impl ManifestArgs {
    pub fn policy(&self) -> ParsePolicy {
        ParsePolicy { include_assignees: self.assignee, use_alt_identities: !self.disable_altname }
    }

    /// Config file merged with CLI overrides. Discovery looks in the current
    /// directory.
    pub fn load_config(&self, title: Option<String>) -> Result<Config> {
        let cwd = std::env::current_dir()?;
        let file_config = load_config(&cwd, self.config.as_deref())?;
        let overrides = CliOverrides { internal_domain: self.domain.clone(), title };
        Ok(merge_cli_with_config(file_config, overrides))
    }

    pub fn manifest_file(&self) -> PathBuf {
        self.manifest.clone().unwrap_or_else(|| manifest_path(&self.path))
    }
}

/// Read and parse the manifest. Failing to read it is fatal.
pub fn parse_manifest_file(
    manifest: &Path,
    config: &Config,
    policy: ParsePolicy,
) -> Result<Vec<OwnershipRecord>> {
    let text = read_manifest(manifest)?;
    let parser = ManifestParser::new(config, policy)?;
    let records = parser.parse(&text);
    tracing::info!("Parsed {} subsystems from {}", records.len(), manifest.display());
    Ok(records)
}
