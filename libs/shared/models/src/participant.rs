use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of a consultation a caller claims to be.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Patient,
    Expert,
}

impl UserType {
    /// Unknown roles are not an error at the HTTP layer; callers decide what they mean.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "patient" => Some(UserType::Patient),
            "expert" => Some(UserType::Expert),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Patient => "patient",
            UserType::Expert => "expert",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_roles_only() {
        assert_eq!(UserType::parse("patient"), Some(UserType::Patient));
        assert_eq!(UserType::parse("expert"), Some(UserType::Expert));
        assert_eq!(UserType::parse("Patient"), None);
        assert_eq!(UserType::parse("admin"), None);
    }
}
