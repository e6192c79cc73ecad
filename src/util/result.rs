use std::error::Error;

use super::error::EmptyCollection;

// Unused when only collections without fallible accessors are enabled.
#[allow(dead_code)]
pub(crate) trait ResultExtension<T, E: Error> {
    /// A method similar to [`Result::unwrap`], except that it applies only to types which implement
    /// [`Error`] and panics with the message of the error itself.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{}", error),
        }
    }
}

#[allow(dead_code)]
pub(crate) trait OptionExtension<T> {
    /// Converts [`None`] into [`EmptyCollection`], for accessors which only fail when there is
    /// nothing to return.
    fn or_empty(self) -> Result<T, EmptyCollection>;
}

impl<T> OptionExtension<T> for Option<T> {
    fn or_empty(self) -> Result<T, EmptyCollection> {
        self.ok_or(EmptyCollection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::panic::assert_panics;

    #[test]
    fn test_throw_and_or_empty() {
        assert_eq!(Some(3).or_empty(), Ok(3));
        assert_eq!(None::<u8>.or_empty(), Err(EmptyCollection));
        assert_eq!(Ok::<_, EmptyCollection>(5).throw(), 5);
        assert_panics!({
            None::<u8>.or_empty().throw();
        });
    }
}
