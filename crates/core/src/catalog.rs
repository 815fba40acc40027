//! Catalog of launchable VR applications.
//!
//! The catalog is populated once at service start and immutable
//! afterwards. Only `game` entries are ever listed or launched; `system`
//! entries exist for bookkeeping and are treated as absent by lookups.

/// Classification of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppKind {
	/// Launchable game package; listed and accepted by launch/end.
	Game,
	/// System package; never listed, never launchable.
	System,
}

/// One entry in the application catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
	/// Human-readable name, informational only.
	pub name: String,
	/// Unique package identifier; matching is case-insensitive, storage
	/// preserves the original casing.
	pub package: String,
	pub kind: AppKind,
}

impl CatalogEntry {
	/// Creates a game entry.
	pub fn game(name: impl Into<String>, package: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			package: package.into(),
			kind: AppKind::Game,
		}
	}

	/// Creates a system entry.
	pub fn system(name: impl Into<String>, package: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			package: package.into(),
			kind: AppKind::System,
		}
	}
}

/// Lower-cases a package identifier into its comparison key.
///
/// Applied at every lookup boundary so catalog lookups and running-set
/// keys agree on what counts as the same package.
pub fn canonical(package: &str) -> String {
	package.to_lowercase()
}

/// Immutable, ordered application catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
	entries: Vec<CatalogEntry>,
}

impl Catalog {
	/// Creates a catalog from explicit entries, preserving their order.
	pub fn new(entries: Vec<CatalogEntry>) -> Self {
		Self { entries }
	}

	/// Creates the built-in catalog the service ships with.
	pub fn builtin() -> Self {
		Self::new(vec![
			CatalogEntry::game("Beat Saber", "com.beatsaber"),
			CatalogEntry::game("Half-Life: Alyx", "com.hla"),
			CatalogEntry::game("UG", "com.ug"),
			CatalogEntry::system("Oculus Settings", "com.oculus.settings"),
		])
	}

	/// Returns the launchable game packages in definition order.
	pub fn packages(&self) -> Vec<String> {
		self.entries
			.iter()
			.filter(|entry| entry.kind == AppKind::Game)
			.map(|entry| entry.package.clone())
			.collect()
	}

	/// Looks up a launchable entry by package, case-insensitively.
	///
	/// System entries are never returned, even on an exact match.
	pub fn resolve(&self, package: &str) -> Option<&CatalogEntry> {
		let key = canonical(package);
		self.entries
			.iter()
			.find(|entry| entry.kind == AppKind::Game && canonical(&entry.package) == key)
	}

	/// Returns whether `package` names a launchable entry.
	pub fn contains(&self, package: &str) -> bool {
		self.resolve(package).is_some()
	}
}
