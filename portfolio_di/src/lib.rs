//! Minimal compile-time dependency injection.
//!
//! Services are plain structs deriving [`Build`]. A provider (declared with
//! [`provider!`]) owns the leaf values (configs, database handles) and
//! builds everything else on demand. Each built value is cached in the
//! provider, so every type is a singleton within one provider.

extern crate self as portfolio_di;

pub use portfolio_di_derive::Build;
pub use typemap::TypeMap;

mod macros;
mod typemap;

pub trait Provider: Sized {
    /// Cache of values already built by this provider.
    fn cache(&mut self) -> &mut TypeMap;
}

#[diagnostic::on_unimplemented(
    message = "The type `{Self}` cannot be built using the provider `{P}`",
    note = "Add `{Self}` to the provider `{P}` or implement `Build` for `{Self}` and make sure \
            all dependencies are satisfied"
)]
pub trait Build<P: Provider>: Clone + 'static {
    fn build(provider: &mut P) -> Self;
}

pub trait Provides: Provider {
    fn provide<T: Build<Self>>(&mut self) -> T {
        T::build(self)
    }
}

impl<P: Provider> Provides for P {}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;

    #[derive(Debug, Clone)]
    struct Greeting(&'static str);

    #[derive(Debug, Clone, Default)]
    struct Counter(Arc<AtomicUsize>);

    #[derive(Debug, Clone, Build)]
    struct Greeter {
        greeting: Greeting,
        #[state]
        counter: Counter,
    }

    provider! {
        TestProvider {
            greeting: Greeting,
        }
    }

    #[test]
    fn build_uses_provided_values() {
        let mut provider = TestProvider {
            _cache: Default::default(),
            greeting: Greeting("hello"),
        };

        let greeter: Greeter = provider.provide();

        assert_eq!(greeter.greeting.0, "hello");
    }

    #[test]
    fn built_values_are_cached() {
        let mut provider = TestProvider {
            _cache: Default::default(),
            greeting: Greeting("hello"),
        };

        let a: Greeter = provider.provide();
        let b: Greeter = provider.provide();
        a.counter.0.fetch_add(1, Ordering::Relaxed);

        assert_eq!(b.counter.0.load(Ordering::Relaxed), 1);
    }
}
