//! Core Router Implementation.
//!
//! This module provides the Router struct and path matching.

use super::pattern::PathPattern;
use crate::requirement::RouteRequirement;
use std::collections::HashMap;

/// Error type for router operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
	/// Route not found.
	NotFound(String),
	/// Invalid route name.
	InvalidRouteName(String),
	/// Missing parameter for reverse URL.
	MissingParameter(String),
	/// A route with this name is already registered.
	DuplicateRouteName(String),
}

impl std::fmt::Display for RouterError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::NotFound(path) => write!(f, "Route not found: {}", path),
			Self::InvalidRouteName(name) => write!(f, "Invalid route name: {}", name),
			Self::MissingParameter(param) => write!(f, "Missing parameter: {}", param),
			Self::DuplicateRouteName(name) => write!(f, "Duplicate route name: {}", name),
		}
	}
}

impl std::error::Error for RouterError {}

/// A matched route with extracted parameters.
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
	/// The matched route.
	pub route: &'a Route,
	/// Extracted path parameters.
	pub params: HashMap<String, String>,
}

/// A single route definition.
#[derive(Debug, Clone)]
pub struct Route {
	name: String,
	pattern: PathPattern,
	requirement: Option<RouteRequirement>,
}

impl Route {
	/// Creates a public route.
	pub fn new(name: impl Into<String>, pattern: &str) -> Self {
		Self {
			name: name.into(),
			pattern: PathPattern::new(pattern),
			requirement: None,
		}
	}

	/// Restricts this route to the given roles.
	pub fn with_requirement(mut self, requirement: RouteRequirement) -> Self {
		self.requirement = Some(requirement);
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn pattern(&self) -> &PathPattern {
		&self.pattern
	}

	/// Role requirement, `None` for public routes.
	pub fn requirement(&self) -> Option<&RouteRequirement> {
		self.requirement.as_ref()
	}

	pub fn is_guarded(&self) -> bool {
		self.requirement.is_some()
	}
}

/// The route table.
#[derive(Debug, Clone, Default)]
pub struct Router {
	routes: Vec<Route>,
	named_routes: HashMap<String, usize>,
}

impl Router {
	/// Creates a new router.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a route, rejecting a name that is already registered.
	pub fn try_add(mut self, route: Route) -> Result<Self, RouterError> {
		if self.named_routes.contains_key(&route.name) {
			return Err(RouterError::DuplicateRouteName(route.name));
		}
		self.push(route);
		Ok(self)
	}

	fn push(&mut self, route: Route) {
		self.named_routes.insert(route.name.clone(), self.routes.len());
		self.routes.push(route);
	}

	/// Adds a route.
	///
	/// A route whose name is already registered is dropped with a warning, so
	/// matching and reversal always agree on the first registration.
	pub fn add(mut self, route: Route) -> Self {
		if let Some(&index) = self.named_routes.get(&route.name) {
			tracing::warn!(
				name = %route.name,
				kept = self.routes[index].pattern.as_str(),
				dropped = route.pattern.as_str(),
				"duplicate route name ignored"
			);
			return self;
		}
		self.push(route);
		self
	}

	/// Adds a public route.
	pub fn route(self, name: &str, pattern: &str) -> Self {
		self.add(Route::new(name, pattern))
	}

	/// Adds a route restricted to `requirement`.
	///
	/// Use a trailing `/*` to guard the whole subtree.
	pub fn guarded_route(self, name: &str, pattern: &str, requirement: RouteRequirement) -> Self {
		self.add(Route::new(name, pattern).with_requirement(requirement))
	}

	/// Matches a path against registered routes, preferring the most specific pattern.
	pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_>> {
		self.routes
			.iter()
			.filter_map(|route| route.pattern.matches(path).map(|params| (route, params)))
			.max_by_key(|(route, _)| route.pattern.specificity())
			.map(|(route, params)| RouteMatch { route, params })
	}

	/// Generates a URL by route name with parameters.
	pub fn reverse(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouterError> {
		let index = self
			.named_routes
			.get(name)
			.ok_or_else(|| RouterError::InvalidRouteName(name.to_string()))?;

		let params_map: HashMap<String, String> = params
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();

		self.routes[*index]
			.pattern
			.reverse(&params_map)
			.map_err(RouterError::MissingParameter)
	}

	/// Route registered under `name`.
	pub fn get(&self, name: &str) -> Option<&Route> {
		self.named_routes.get(name).map(|index| &self.routes[*index])
	}

	pub fn routes(&self) -> &[Route] {
		&self.routes
	}

	/// Returns the number of registered routes.
	pub fn route_count(&self) -> usize {
		self.routes.len()
	}

	/// Checks if a route name exists.
	pub fn has_route(&self, name: &str) -> bool {
		self.named_routes.contains_key(name)
	}
}
