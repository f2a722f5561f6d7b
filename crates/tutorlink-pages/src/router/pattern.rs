//! Path pattern matching.
//!
//! Patterns are `/`-separated segments. A `{name}` segment matches any single
//! segment and captures it; a trailing `*` matches the pattern's whole subtree.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
	Literal(String),
	Param(String),
}

/// A compiled route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
	source: String,
	segments: Vec<Segment>,
	subtree: bool,
}

/// Path component of `raw`: no query string or fragment, split into non-empty segments.
pub(crate) fn path_segments(raw: &str) -> Vec<&str> {
	let end = raw.find(['?', '#']).unwrap_or(raw.len());
	raw[..end].split('/').filter(|s| !s.is_empty()).collect()
}

impl PathPattern {
	/// Compile a pattern.
	///
	/// # Examples
	///
	/// ```
	/// use tutorlink_pages::PathPattern;
	///
	/// let pattern = PathPattern::new("/tuitions/{id}");
	/// let params = pattern.matches("/tuitions/42/?tab=applicants").unwrap();
	/// assert_eq!(params.get("id").map(String::as_str), Some("42"));
	///
	/// let subtree = PathPattern::new("/dashboard/tutor/*");
	/// assert!(subtree.matches("/dashboard/tutor").is_some());
	/// assert!(subtree.matches("/dashboard/tutor/applications/7").is_some());
	/// assert!(subtree.matches("/dashboard/tutors").is_none());
	/// ```
	pub fn new(pattern: &str) -> Self {
		let mut parts = path_segments(pattern);
		let subtree = parts.last() == Some(&"*");
		if subtree {
			parts.pop();
		}

		let segments = parts
			.into_iter()
			.map(|part| match part.strip_prefix('{').and_then(|p| p.strip_suffix('}')) {
				Some(name) => Segment::Param(name.to_string()),
				None => Segment::Literal(part.to_string()),
			})
			.collect();

		Self {
			source: pattern.to_string(),
			segments,
			subtree,
		}
	}

	pub fn as_str(&self) -> &str {
		&self.source
	}

	pub fn is_subtree(&self) -> bool {
		self.subtree
	}

	/// Match `path`, returning captured parameters.
	pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
		let parts = path_segments(path);
		if parts.len() < self.segments.len()
			|| (!self.subtree && parts.len() != self.segments.len())
		{
			return None;
		}

		let mut params = HashMap::new();
		for (segment, part) in self.segments.iter().zip(parts) {
			match segment {
				Segment::Literal(literal) if literal == part => {}
				Segment::Literal(_) => return None,
				Segment::Param(name) => {
					let value = urlencoding::decode(part)
						.map(|v| v.into_owned())
						.unwrap_or_else(|_| part.to_string());
					params.insert(name.clone(), value);
				}
			}
		}
		Some(params)
	}

	/// Ordering key: more segments, then exact over subtree, then more literals.
	pub(crate) fn specificity(&self) -> (usize, bool, usize) {
		let literals = self
			.segments
			.iter()
			.filter(|s| matches!(s, Segment::Literal(_)))
			.count();
		(self.segments.len(), !self.subtree, literals)
	}

	/// Build a concrete path from parameters.
	pub fn reverse(&self, params: &HashMap<String, String>) -> Result<String, String> {
		let mut path = String::new();
		for segment in &self.segments {
			path.push('/');
			match segment {
				Segment::Literal(literal) => path.push_str(literal),
				Segment::Param(name) => {
					let value = params.get(name).ok_or_else(|| name.clone())?;
					path.push_str(&urlencoding::encode(value));
				}
			}
		}
		if path.is_empty() {
			path.push('/');
		}
		Ok(path)
	}
}
