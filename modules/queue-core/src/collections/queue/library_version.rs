/// Build-time identification string for this library.
pub const LIBRARY_VERSION: &str = concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));

/// Returns the build-time identification string for this library.
#[must_use]
pub const fn library_version() -> &'static str {
  LIBRARY_VERSION
}
