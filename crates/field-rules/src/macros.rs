//! Declarative rules.
//!
//! Most peer rules are a stateless predicate and the error it produces on
//! failure. [`validator!`] turns that pair into a zero-sized rule type, its
//! [`Validate`](crate::foundation::Validate) impl and a `const` factory.

/// Declares a stateless rule.
///
/// ```
/// use field_rules::foundation::{Validate, ValidationError};
///
/// field_rules::validator! {
///     /// Text without spaces.
///     pub NoSpaces for str => no_spaces,
///     accept |input| !input.contains(' '),
///     reject |input| ValidationError::new("has_spaces", "must not contain spaces")
///         .with_param("length", input.len().to_string()),
/// }
///
/// assert!(no_spaces().validate("NL91ABNA").is_ok());
/// assert_eq!(no_spaces().validate("NL 91").unwrap_err().param("length"), Some("5"));
/// ```
#[macro_export]
macro_rules! validator {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty => $factory:ident,
        accept |$accepted:ident| $accept:expr,
        reject |$rejected:ident| $reject:expr $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $accepted: &$input) -> ::core::result::Result<(), $crate::foundation::ValidationError> {
                if $accept {
                    return Ok(());
                }
                let $rejected = $accepted;
                Err($reject)
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::{Validate, ValidationError};

    crate::validator! {
        Even for u32 => even,
        accept |n| n % 2 == 0,
        reject |n| ValidationError::new("odd", format!("{n} is odd")),
    }

    #[test]
    fn test_generated_rule() {
        assert!(even().validate(&4).is_ok());
        assert_eq!(even().validate(&5).unwrap_err().message, "5 is odd");
        assert_eq!(even(), Even);
    }
}
