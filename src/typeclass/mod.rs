//! Type class traits for functional programming abstractions.
//!
//! - [`Monad`]: `unit` and `flat_map` over a family of monadic values
//! - [`IdentityMonad`]: the monadic value is the plain value
//! - [`MaybeMonad`]: short-circuits on [`Maybe::Nothing`](crate::control::Maybe::Nothing)
//!
//! The IO monad lives in [`effect`](crate::effect) next to the world token
//! and console sinks it depends on.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native higher-kinded types. The [`Monad`] trait
//! uses a generic associated type, `Value<A>`, to name "the monadic value
//! holding an `A`" for each implementation.

mod identity;
mod maybe;
mod monad;

pub use identity::IdentityMonad;
pub use maybe::MaybeMonad;
pub use monad::Monad;
