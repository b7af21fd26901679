use core::fmt::Debug;

/// Marker bounds for payloads handled through the queue trait family.
///
/// Where the target has atomic pointer support, a queue handle may end up moving between
/// threads, so the payloads it carries must be `Send + Sync` as well.
#[cfg(target_has_atomic = "ptr")]
pub trait Element: Debug + Send + Sync + 'static {}

#[cfg(target_has_atomic = "ptr")]
impl<T> Element for T where T: Debug + Send + Sync + 'static {}

/// Marker bounds for payloads handled through the queue trait family.
///
/// Targets without atomic pointer support run single-threaded, so the cross-thread bounds are
/// relaxed and `Rc`-based payloads qualify.
#[cfg(not(target_has_atomic = "ptr"))]
pub trait Element: Debug + 'static {}

#[cfg(not(target_has_atomic = "ptr"))]
impl<T> Element for T where T: Debug + 'static {}
