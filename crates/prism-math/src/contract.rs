// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Debug-time contract checks.

/// `true` when contract checks are compiled in: debug builds, or release
/// builds with the `contract_checks_release` feature of this crate.
///
/// Resolved here rather than inside the macro so downstream crates observe
/// this crate's feature set.
pub const ENABLED: bool = cfg!(any(debug_assertions, feature = "contract_checks_release"));

/// Asserts a caller contract when [`contract::ENABLED`](crate::contract::ENABLED)
/// is set. Compiles to nothing otherwise.
///
/// Accepts the same arguments as [`assert!`].
#[macro_export]
macro_rules! contract_check {
    ($($arg:tt)+) => {
        if $crate::contract::ENABLED {
            assert!($($arg)+);
        }
    };
}
