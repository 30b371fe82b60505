use crate::error::InputError;

/// Parses a menu choice. Any non-numeric text is rejected; range checking is
/// the menu's job.
pub fn parse_choice(raw: &str) -> Result<u32, InputError> {
    raw.trim()
        .parse()
        .map_err(|_| InputError::InvalidChoice(raw.trim().to_owned()))
}

/// Parses a monetary amount. Finite values only; negative amounts pass
/// through untouched, matching the engine's no-validation contract.
pub fn parse_amount(raw: &str) -> Result<f32, InputError> {
    let value: f32 = raw
        .trim()
        .parse()
        .map_err(|_| InputError::InvalidAmount(raw.trim().to_owned()))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::InvalidAmount(raw.trim().to_owned()))
    }
}

/// Parses a sharer count, rejecting negatives.
pub fn parse_count(raw: &str) -> Result<usize, InputError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| InputError::InvalidCount(raw.trim().to_owned()))?;
    usize::try_from(value).map_err(|_| InputError::InvalidCount(raw.trim().to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("3", 3)]
    #[case::padded(" 7 ", 7)]
    fn parse_choice_accepts_digits(#[case] raw: &str, #[case] expected: u32) {
        assert_eq!(parse_choice(raw), Ok(expected));
    }

    #[rstest]
    #[case::empty("")]
    #[case::word("quit")]
    #[case::negative("-1")]
    fn parse_choice_rejects_non_digits(#[case] raw: &str) {
        assert!(matches!(parse_choice(raw), Err(InputError::InvalidChoice(_))));
    }

    #[rstest]
    #[case::integer("90", 90.0)]
    #[case::decimal("12.75", 12.75)]
    #[case::negative("-4.5", -4.5)]
    fn parse_amount_accepts_finite_numbers(#[case] raw: &str, #[case] expected: f32) {
        assert_eq!(parse_amount(raw), Ok(expected));
    }

    #[rstest]
    #[case::word("ten")]
    #[case::empty("")]
    #[case::infinite("inf")]
    #[case::not_a_number("NaN")]
    fn parse_amount_rejects_garbage(#[case] raw: &str) {
        assert!(matches!(parse_amount(raw), Err(InputError::InvalidAmount(_))));
    }

    #[rstest]
    #[case::zero("0", 0)]
    #[case::several("4", 4)]
    fn parse_count_accepts_non_negative(#[case] raw: &str, #[case] expected: usize) {
        assert_eq!(parse_count(raw), Ok(expected));
    }

    #[rstest]
    #[case::negative("-2")]
    #[case::fractional("1.5")]
    #[case::word("two")]
    fn parse_count_rejects_invalid(#[case] raw: &str) {
        assert!(matches!(parse_count(raw), Err(InputError::InvalidCount(_))));
    }
}
