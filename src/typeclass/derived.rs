//! Combinators derived once from `pure` and `flat_map`.
//!
//! Every function here is generic over [`Monad`] and introduces no new
//! primitive behaviour: mapping, application and appending are spelled out
//! in terms of sequencing alone, so they hold for any lawful instance.
//!
//! ```text
//! lift_m1(e, f)       = e.flat_map(|x| pure(f(x)))
//! ap(ef, ea)          = ef.flat_map(|f| ea.flat_map(|a| pure(f(a))))
//! lift_append(l, r)   = l.flat_map(|x| r.flat_map(|y| pure(x.combine(y))))
//! lift_empty()        = pure(Monoid::empty())
//! ```
//!
//! Instances such as [`Effect`](crate::effect::Effect) also implement
//! [`Functor::fmap`](super::Functor::fmap) and friends directly. The direct
//! versions never clone the result, while `pure` must, so these derivations
//! carry an extra `Clone` bound. Both forms are checked against each other.
//!
//! # Examples
//!
//! ```rust
//! use native_effect::effect::Effect;
//! use native_effect::typeclass::derived::{ap, lift_m1};
//!
//! let doubled = lift_m1(Effect::pure(21), |x| x * 2);
//! assert_eq!(doubled.run_unsafe(), 42);
//!
//! let applied = ap(Effect::pure(|x: i32| x + 1), Effect::pure(1));
//! assert_eq!(applied.run_unsafe(), 2);
//! ```

use super::{Applicative, Monad, Monoid, Semigroup};

/// Maps a pure function over the result, expressed through `flat_map`.
pub fn lift_m1<M, B, F>(computation: M, function: F) -> M::WithType<B>
where
    M: Monad,
    F: Fn(M::Inner) -> B + 'static,
    B: Clone + 'static,
{
    computation.flat_map::<B, _>(move |value| M::pure::<B>(function(value)))
}

/// Applies a wrapped function to a wrapped argument, expressed through `flat_map`.
///
/// The function is obtained before the argument.
pub fn ap<M, B, Output>(functions: M, arguments: M::WithType<B>) -> M::WithType<Output>
where
    M: Monad,
    M::Inner: Fn(B) -> Output + 'static,
    M::WithType<B>: Monad<WithType<Output> = M::WithType<Output>> + Clone + 'static,
    B: 'static,
    Output: Clone + 'static,
{
    functions.flat_map::<Output, _>(move |function| {
        arguments.clone().flat_map::<Output, _>(move |argument| {
            <M::WithType<B> as Applicative>::pure::<Output>(function(argument))
        })
    })
}

/// Runs `left` then `right` and combines their results with [`Semigroup::combine`].
pub fn lift_append<M>(left: M, right: M) -> M::WithType<M::Inner>
where
    M: Monad + Clone + 'static,
    M::Inner: Semigroup + Clone + 'static,
{
    left.flat_map::<M::Inner, _>(move |first| {
        right.clone().flat_map::<M::Inner, _>(move |second| {
            M::pure::<M::Inner>(first.clone().combine(second))
        })
    })
}

/// Lifts the identity element of `A` with `pure`.
///
/// `M` only selects the type constructor; its own parameter is ignored.
pub fn lift_empty<M, A>() -> M::WithType<A>
where
    M: Applicative,
    A: Monoid + Clone + 'static,
{
    M::pure::<A>(A::empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Functor, Identity, Sum};
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(12)]
    fn lift_m1_agrees_with_fmap_for_identity(#[case] value: i32) {
        assert_eq!(
            lift_m1(Identity::new(value), |x| x - 3),
            Identity::new(value).fmap(|x| x - 3)
        );
    }

    #[rstest]
    fn ap_agrees_with_apply_for_identity() {
        let function = |x: i32| x * 7;
        assert_eq!(
            ap(Identity::new(function), Identity::new(6)),
            Identity::new(function).apply(Identity::new(6))
        );
    }

    #[rstest]
    fn lift_append_combines_left_then_right() {
        assert_eq!(
            lift_append(Identity::new("ab".to_string()), Identity::new("cd".to_string())),
            Identity::new("abcd".to_string())
        );
    }

    #[rstest]
    fn lift_empty_for_identity() {
        assert_eq!(lift_empty::<Identity<()>, Sum<i64>>(), Identity(Sum(0)));
    }
}
