use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marketplace role attached to a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	Student,
	Tutor,
	Admin,
}

impl Role {
	/// All roles in declaration order.
	pub const ALL: [Role; 3] = [Role::Student, Role::Tutor, Role::Admin];

	pub fn as_str(&self) -> &'static str {
		match self {
			Role::Student => "student",
			Role::Tutor => "tutor",
			Role::Admin => "admin",
		}
	}
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
	type Err = ParseRoleError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"student" => Ok(Role::Student),
			"tutor" => Ok(Role::Tutor),
			"admin" => Ok(Role::Admin),
			_ => Err(ParseRoleError(s.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("student", Role::Student)]
	#[case("Tutor", Role::Tutor)]
	#[case(" ADMIN ", Role::Admin)]
	fn test_parse_role(#[case] input: &str, #[case] expected: Role) {
		assert_eq!(input.parse::<Role>().unwrap(), expected);
	}

	#[rstest]
	fn test_parse_unknown_role() {
		let err = "guardian".parse::<Role>().unwrap_err();
		assert_eq!(err.to_string(), "Unknown role: guardian");
	}

	#[rstest]
	fn test_role_serde_lowercase() {
		assert_eq!(serde_json::to_string(&Role::Tutor).unwrap(), "\"tutor\"");
		let role: Role = serde_json::from_str("\"admin\"").unwrap();
		assert_eq!(role, Role::Admin);
	}

	#[rstest]
	fn test_display_matches_as_str() {
		for role in Role::ALL {
			assert_eq!(role.to_string(), role.as_str());
		}
	}
}
