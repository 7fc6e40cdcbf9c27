//! Command line interpretation
//!
//! Zero arguments leave the category open, one argument names it, more is an error.

use std::ffi::OsStr;

use crate::category::Category;
use crate::error::InvalidArguments;

/// Resolve the requested category from the positional arguments
/// (program name excluded). `Ok(None)` means the caller flips a coin.
pub fn category_from_args<S: AsRef<OsStr>>(
    args: &[S],
) -> Result<Option<Category>, InvalidArguments> {
    match args {
        [] => Ok(None),
        [single] => {
            let single = single.as_ref();
            match single.to_str() {
                Some(text) => text.parse().map(Some),
                None => Err(InvalidArguments::UnknownCategory(
                    single.to_string_lossy().into_owned(),
                )),
            }
        }
        many => Err(InvalidArguments::TooManyArguments(many.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_leaves_category_open() {
        let args: [&str; 0] = [];
        assert_eq!(category_from_args(&args), Ok(None));
    }

    #[test]
    fn test_single_argument() {
        assert_eq!(category_from_args(&["male"]), Ok(Some(Category::Male)));
        assert_eq!(category_from_args(&["female"]), Ok(Some(Category::Female)));
        assert_eq!(
            category_from_args(&["Male"]),
            Err(InvalidArguments::UnknownCategory("Male".into()))
        );
        assert_eq!(
            category_from_args(&["--help"]),
            Err(InvalidArguments::UnknownCategory("--help".into()))
        );
    }

    #[test]
    fn test_too_many_arguments() {
        // Checked before the values, so two valid labels still fail
        assert_eq!(
            category_from_args(&["male", "female"]),
            Err(InvalidArguments::TooManyArguments(2))
        );
        assert_eq!(
            category_from_args(&["a", "b", "c"]),
            Err(InvalidArguments::TooManyArguments(3))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_argument_is_unknown() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let args = [OsString::from_vec(vec![0x6d, 0xff, 0x6c, 0x65])];
        let err = category_from_args(&args).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }
}
