//! Workflow node icons.
//!
//! A closed set of icon kinds, each mapping to static vector path data in a
//! 24x24 viewbox. Enum dispatch keeps the set exhaustiveness-checked instead
//! of falling back on runtime string lookup.

use crate::error::{ShowreelError, ShowreelResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    Zap,
    Cpu,
    GitBranch,
    Mail,
    Database,
}

impl IconKind {
    pub const ALL: [Self; 5] = [
        Self::Zap,
        Self::Cpu,
        Self::GitBranch,
        Self::Mail,
        Self::Database,
    ];

    /// SVG path data, stroke-styled, 24x24 viewbox.
    pub fn path_d(self) -> &'static str {
        match self {
            Self::Zap => "M13 2 L3 14 L12 14 L11 22 L21 10 L12 10 Z",
            Self::Cpu => {
                "M4 4 H20 V20 H4 Z M9 9 H15 V15 H9 Z M9 1 V4 M15 1 V4 M9 20 V23 M15 20 V23 \
                 M1 9 H4 M1 15 H4 M20 9 H23 M20 15 H23"
            }
            Self::GitBranch => {
                "M6 3 A3 3 0 1 0 6 9 A3 3 0 1 0 6 3 M18 15 A3 3 0 1 0 18 21 A3 3 0 1 0 18 15 \
                 M6 9 V21 M18 15 C18 10 13 9 9 9"
            }
            Self::Mail => "M2 4 H22 V20 H2 Z M2 4 L12 13 L22 4",
            Self::Database => {
                "M12 2 C7 2 3 3.3 3 5 C3 6.7 7 8 12 8 C17 8 21 6.7 21 5 C21 3.3 17 2 12 2 Z \
                 M3 5 V19 C3 20.7 7 22 12 22 C17 22 21 20.7 21 19 V5 M3 12 C3 13.7 7 15 12 15 \
                 C17 15 21 13.7 21 12"
            }
        }
    }

    pub fn parse(s: &str) -> ShowreelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zap" => Ok(Self::Zap),
            "cpu" => Ok(Self::Cpu),
            "git-branch" | "gitbranch" => Ok(Self::GitBranch),
            "mail" => Ok(Self::Mail),
            "database" => Ok(Self::Database),
            other => Err(ShowreelError::validation(format!(
                "unknown icon kind '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_path_data() {
        for icon in IconKind::ALL {
            let d = icon.path_d();
            assert!(d.starts_with('M'));
            assert!(d.len() > 10);
        }
    }

    #[test]
    fn parse_roundtrips_serde_names() {
        for icon in IconKind::ALL {
            let name = serde_json::to_string(&icon).unwrap();
            let parsed = IconKind::parse(name.trim_matches('"')).unwrap();
            assert_eq!(parsed, icon);
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!(IconKind::parse("sparkles").is_err());
    }
}
