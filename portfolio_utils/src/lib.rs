pub use portfolio_utils_derive::trace_instrument;

mod macros;

/// Returns the version of the portfolio backend.
///
/// Release builds may set `PORTFOLIO_VERSION` at compile time (e.g. to the
/// output of `git describe`), otherwise the crate version is used.
pub const fn portfolio_version() -> &'static str {
    match option_env!("PORTFOLIO_VERSION") {
        Some(version) => version,
        None => env!("CARGO_PKG_VERSION"),
    }
}
