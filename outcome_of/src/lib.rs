#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! A tagged success-or-error type with value semantics.
//!
//! [`Outcome`] holds exactly one of a success value or an error value, as an
//! explicit two-state enum rather than a sentinel or an exception. It is an
//! ordinary value type: construct it once, query or transform it any number
//! of times, and every transformation produces a fresh instance.
//!
//! ```rust
//! use outcome_of::Outcome;
//!
//! fn checked_div(a: i32, b: i32) -> Outcome<i32, String> {
//!     if b == 0 {
//!         Outcome::Err(String::from("division by zero"))
//!     } else {
//!         Outcome::Ok(a / b)
//!     }
//! }
//!
//! assert!(checked_div(10, 2).contains(&5));
//! assert!(checked_div(10, 0).is_err());
//! assert_eq!(checked_div(10, 2).map(|n| n * 10), Outcome::Ok(50));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// The outcome of a fallible operation: either a success value of type `T`
/// or an error value of type `E`.
///
/// Exactly one of the two states holds at any time, and an instance is never
/// mutated after construction. `Ok` and `Err` values never compare equal,
/// even when `T` and `E` are the same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    /// The operation succeeded, with its result.
    Ok(T),
    /// The operation failed, with its error.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if this is an [`Outcome::Ok`].
    /// # Examples
    /// ```
    /// # use outcome_of::Outcome;
    /// let outcome: Outcome<i32, i32> = Outcome::Ok(10);
    /// assert!(outcome.is_ok());
    /// let outcome: Outcome<i32, i32> = Outcome::Err(10);
    /// assert!(!outcome.is_ok());
    /// ```
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an [`Outcome::Err`].
    /// # Examples
    /// ```
    /// # use outcome_of::Outcome;
    /// let outcome: Outcome<i32, i32> = Outcome::Err(10);
    /// assert!(outcome.is_err());
    /// let outcome: Outcome<i32, i32> = Outcome::Ok(10);
    /// assert!(!outcome.is_err());
    /// ```
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Returns `true` if this is an [`Outcome::Ok`] holding a value equal to
    /// `value`.
    /// # Examples
    /// ```
    /// # use outcome_of::Outcome;
    /// let outcome: Outcome<i32, i32> = Outcome::Ok(10);
    /// assert!(outcome.contains(&10));
    /// assert!(!outcome.contains(&20));
    /// let outcome: Outcome<i32, i32> = Outcome::Err(10);
    /// assert!(!outcome.contains(&10));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Self::Ok(inner) => inner == value,
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if this is an [`Outcome::Err`] holding an error equal
    /// to `error`.
    /// # Examples
    /// ```
    /// # use outcome_of::Outcome;
    /// let outcome: Outcome<i32, i32> = Outcome::Err(10);
    /// assert!(outcome.contains_err(&10));
    /// assert!(!outcome.contains_err(&20));
    /// let outcome: Outcome<i32, i32> = Outcome::Ok(10);
    /// assert!(!outcome.contains_err(&10));
    /// ```
    pub fn contains_err(&self, error: &E) -> bool
    where
        E: PartialEq,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(inner) => inner == error,
        }
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`, so combinators
    /// can be applied without consuming the original.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Converts from `&mut Outcome<T, E>` to `Outcome<&mut T, &mut E>`.
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Applies `f` to the success value, leaving an error untouched.
    ///
    /// `f` is invoked at most once.
    /// # Examples
    /// ```
    /// # use outcome_of::Outcome;
    /// let outcome: Outcome<&str, i32> = Outcome::Ok("test");
    /// assert_eq!(outcome.map(|s| s.len()), Outcome::Ok(4));
    /// let outcome: Outcome<&str, i32> = Outcome::Err(10);
    /// assert_eq!(outcome.map(|s| s.len()), Outcome::Err(10));
    /// ```
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Applies `f` to the error value, leaving a success untouched.
    /// # Examples
    /// ```
    /// # use outcome_of::Outcome;
    /// let outcome: Outcome<i32, &str> = Outcome::Err("missing");
    /// assert_eq!(outcome.map_err(|e| e.len()), Outcome::Err(7));
    /// let outcome: Outcome<i32, &str> = Outcome::Ok(10);
    /// assert_eq!(outcome.map_err(|e| e.len()), Outcome::Ok(10));
    /// ```
    pub fn map_err<F, O>(self, f: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Returns `other` if this is a success, or this error otherwise.
    /// # Examples
    /// ```
    /// # use outcome_of::Outcome;
    /// let a: Outcome<i32, &str> = Outcome::Ok(10);
    /// let b: Outcome<&str, &str> = Outcome::Ok("late");
    /// assert_eq!(a.and(b), Outcome::Ok("late"));
    ///
    /// let a: Outcome<i32, &str> = Outcome::Err("early");
    /// let b: Outcome<&str, &str> = Outcome::Ok("late");
    /// assert_eq!(a.and(b), Outcome::Err("early"));
    /// ```
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Calls `f` with the success value, or returns this error unchanged.
    ///
    /// `f` is invoked only on success.
    /// # Examples
    /// ```
    /// # use outcome_of::Outcome;
    /// fn half(n: i32) -> Outcome<i32, &'static str> {
    ///     if n % 2 == 0 {
    ///         Outcome::Ok(n / 2)
    ///     } else {
    ///         Outcome::Err("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::Ok(10).and_then(half), Outcome::Ok(5));
    /// assert_eq!(Outcome::Ok(5).and_then(half), Outcome::Err("odd"));
    /// assert_eq!(Outcome::Err("no input").and_then(half), Outcome::Err("no input"));
    /// ```
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Returns this success, or `other` otherwise.
    /// # Examples
    /// ```
    /// # use outcome_of::Outcome;
    /// let a: Outcome<i32, &str> = Outcome::Ok(10);
    /// let b: Outcome<i32, i32> = Outcome::Err(0);
    /// assert_eq!(a.or(b), Outcome::Ok(10));
    ///
    /// let a: Outcome<i32, &str> = Outcome::Err("early");
    /// let b: Outcome<i32, i32> = Outcome::Ok(20);
    /// assert_eq!(a.or(b), Outcome::Ok(20));
    /// ```
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(_) => other,
        }
    }

    /// Returns this success, or calls `f` with the error otherwise.
    ///
    /// `f` is invoked only on error.
    /// # Examples
    /// ```
    /// # use outcome_of::Outcome;
    /// let outcome: Outcome<i32, &str> = Outcome::Err("4");
    /// let parsed = outcome.or_else(|e| match e.parse::<i32>() {
    ///     Ok(n) => Outcome::Ok(n),
    ///     Err(_) => Outcome::Err("unparseable"),
    /// });
    /// assert_eq!(parsed, Outcome::Ok(4));
    /// ```
    pub fn or_else<F, O>(self, f: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => f(error),
        }
    }

    /// Returns the success value.
    ///
    /// ## Panics
    ///
    /// Panics with `msg` if this is an [`Outcome::Err`]. Prefer
    /// [`Outcome::unwrap_or`], [`Outcome::unwrap_or_else`], or matching on
    /// the variants when an error is a normal result.
    pub fn expect(self, msg: &str) -> T
    where
        E: Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => panic!("{msg}: {error:?}"),
        }
    }

    /// Returns the success value.
    ///
    /// ## Panics
    ///
    /// Panics if this is an [`Outcome::Err`].
    pub fn unwrap(self) -> T
    where
        E: Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => panic!(
                "called `Outcome::unwrap()` on an `Err` value: {error:?}"
            ),
        }
    }

    /// Returns the error value.
    ///
    /// ## Panics
    ///
    /// Panics with `msg` if this is an [`Outcome::Ok`].
    pub fn expect_err(self, msg: &str) -> E
    where
        T: Debug,
    {
        match self {
            Self::Ok(value) => panic!("{msg}: {value:?}"),
            Self::Err(error) => error,
        }
    }

    /// Returns the error value.
    ///
    /// ## Panics
    ///
    /// Panics if this is an [`Outcome::Ok`].
    pub fn unwrap_err(self) -> E
    where
        T: Debug,
    {
        match self {
            Self::Ok(value) => panic!(
                "called `Outcome::unwrap_err()` on an `Ok` value: {value:?}"
            ),
            Self::Err(error) => error,
        }
    }

    /// Returns the success value, or `default` on error.
    /// # Examples
    /// ```
    /// # use outcome_of::Outcome;
    /// let outcome: Outcome<i32, &str> = Outcome::Ok(10);
    /// assert_eq!(outcome.unwrap_or(20), 10);
    /// let outcome: Outcome<i32, &str> = Outcome::Err("gone");
    /// assert_eq!(outcome.unwrap_or(20), 20);
    /// ```
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value, or computes one from the error.
    ///
    /// `f` is invoked only on error.
    /// # Examples
    /// ```
    /// # use outcome_of::Outcome;
    /// let outcome: Outcome<usize, &str> = Outcome::Err("fallback");
    /// assert_eq!(outcome.unwrap_or_else(|e| e.len()), 8);
    /// ```
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => f(error),
        }
    }

    /// Returns the success value, or `T::default()` on error.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => T::default(),
        }
    }

    /// Converts into the equivalent [`Result`].
    /// # Examples
    /// ```
    /// # use outcome_of::Outcome;
    /// let outcome: Outcome<i32, &str> = Outcome::Ok(10);
    /// assert_eq!(outcome.into_result(), Ok(10));
    /// ```
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(ok) => Self::Ok(ok),
            Err(err) => Self::Err(err),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(value: Outcome<T, E>) -> Self {
        match value {
            Outcome::Ok(ok) => Ok(ok),
            Outcome::Err(err) => Err(err),
        }
    }
}

impl<T, E> Serialize for Outcome<T, E>
where
    T: Serialize,
    E: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Result::from(self.as_ref()).serialize(serializer)
    }
}

impl<'de, T, E> Deserialize<'de> for Outcome<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Result::<T, E>::deserialize(deserializer).map(Self::from)
    }
}
