//! Demo configuration (TOML), loaded only when `--config` is given.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use crate::core::capabilities::{CopyOp, RuntimeProfile};
use crate::harness::DEFAULT_DIVIDER_WIDTH;

/// Demo configuration (TOML).
///
/// Missing fields default to the stock demo output.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DemoConfig {
    /// Number of dashes in section dividers.
    pub divider_width: usize,

    pub runtime: RuntimeConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Copy operations the emulated runtime lacks (e.g. `["toSpliced"]`).
    pub unsupported: Vec<CopyOp>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            divider_width: DEFAULT_DIVIDER_WIDTH,
            runtime: RuntimeConfig::default(),
        }
    }
}

impl DemoConfig {
    pub fn validate(&self) -> Result<()> {
        if self.divider_width == 0 {
            return Err(anyhow!("divider_width must be > 0"));
        }
        Ok(())
    }

    /// Runtime profile lacking the configured operations plus `extra`.
    pub fn runtime_profile(&self, extra: &[CopyOp]) -> RuntimeProfile {
        RuntimeProfile::without(self.runtime.unsupported.iter().chain(extra).copied())
    }
}

/// Load and validate config from a TOML file. The file must exist.
pub fn load_config(path: &Path) -> Result<DemoConfig> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DemoConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_file_fails_with_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("missing.toml");
        let err = load_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains(&format!("read {}", path.display())));
    }

    #[test]
    fn load_empty_file_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("seqdemo.toml");
        fs::write(&path, "").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg, DemoConfig::default());
        assert_eq!(cfg.divider_width, 80);
    }

    #[test]
    fn load_partial_file_fills_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("seqdemo.toml");
        fs::write(&path, "[runtime]\nunsupported = [\"with\", \"toSorted\"]\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.divider_width, 80);
        assert_eq!(cfg.runtime.unsupported, vec![CopyOp::With, CopyOp::ToSorted]);
    }

    #[test]
    fn rejects_zero_divider_width() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("seqdemo.toml");
        fs::write(&path, "divider_width = 0\n").expect("write");
        let err = load_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains("divider_width must be > 0"));
    }

    #[test]
    fn rejects_unknown_operation_name_while_parsing() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("seqdemo.toml");
        fs::write(&path, "[runtime]\nunsupported = [\"toFilled\"]\n").expect("write");
        let err = load_config(&path).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("parse"));
        assert!(message.contains("unknown variant `toFilled`"));
    }

    #[test]
    fn runtime_profile_merges_extra_ops() {
        let cfg = DemoConfig {
            runtime: RuntimeConfig {
                unsupported: vec![CopyOp::ToSorted],
            },
            ..DemoConfig::default()
        };
        let profile = cfg.runtime_profile(&[CopyOp::With]);
        assert!(!profile.provides(CopyOp::ToSorted));
        assert!(!profile.provides(CopyOp::With));
        assert!(profile.provides(CopyOp::ToReversed));
    }
}
