//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust has no native Higher-Kinded Types, so a trait cannot abstract over
//! `Effect<_>` as a type constructor directly. [`TypeConstructor`] uses a
//! Generic Associated Type to recover that ability: a value of type `F<A>`
//! names both its current parameter (`Inner = A`) and the same constructor
//! applied to another parameter (`WithType<B> = F<B>`).
//!
//! # Example
//!
//! ```rust
//! use native_effect::effect::Effect;
//! use native_effect::typeclass::TypeConstructor;
//!
//! fn assert_rebinds<T>()
//! where
//!     T: TypeConstructor<Inner = i32, WithType<String> = Effect<String>>,
//! {
//! }
//!
//! assert_rebinds::<Effect<i32>>();
//! ```

/// A trait representing a type constructor.
///
/// The implementing type is a constructor applied to some type `A`, for
/// example `Effect<A>` or `Identity<A>`.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`
///    (up to type equality).
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    ///
    /// For `Effect<i32>` this is `i32`.
    type Inner;

    /// The same constructor applied to a different type `B`.
    ///
    /// The bound keeps the rebound type a `TypeConstructor` itself, so
    /// transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Identity;

    #[test]
    fn identity_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Identity<i32>>();
    }

    #[test]
    fn identity_with_type_produces_correct_type() {
        fn transform<T: TypeConstructor>(_value: T) -> T::WithType<String>
        where
            T::WithType<String>: Default,
        {
            Default::default()
        }

        let result: Identity<String> = transform(Identity::new(42));
        assert_eq!(result, Identity(String::new()));
    }

    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Identity<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_bool_constructor<T: TypeConstructor<Inner = bool>>() {}
        assert_is_bool_constructor::<Step2>();
    }
}
