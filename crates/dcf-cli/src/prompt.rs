//! Interactive prompting for parameters missing from the command line.

use std::io::BufRead;

use dialoguer::Input;
use dcf_core::input::{parse_decimal, parse_years};
use dcf_core::{Field, InputError, RawInput};
use tracing::debug;

use crate::error::CliResult;

/// Checks one prompt answer with the same rules the final parse applies.
fn validate(field: Field, text: &str) -> Result<(), InputError> {
    match field {
        Field::Years => parse_years(text).map(|_| ()),
        _ => parse_decimal(field, text).map(|_| ()),
    }
}

/// Asks for every field that `raw` does not already hold.
///
/// Answers are validated as they are typed; an invalid answer is reported
/// and the same question is asked again.
pub fn fill_missing(mut raw: RawInput) -> CliResult<RawInput> {
    let missing: Vec<Field> = Field::ALL
        .into_iter()
        .filter(|field| raw.get(*field).is_none())
        .collect();

    if missing.is_empty() {
        return Ok(raw);
    }

    debug!(?missing, "prompting for parameters");
    println!("Enter the following parameters (percentages as whole numbers, e.g. 10 for 10%):");

    for field in missing {
        let answer: String = Input::new()
            .with_prompt(field.label())
            .validate_with(move |text: &String| validate(field, text))
            .interact_text()?;
        raw.set(field, answer);
    }

    Ok(raw)
}

/// Reads every field that `raw` does not already hold from `reader`, one
/// answer per line, in [`Field::ALL`] order.
///
/// Used when stdin is piped. Running out of lines is a missing parameter;
/// the first unparsable line is reported as malformed.
pub fn read_missing<R: BufRead>(mut raw: RawInput, reader: R) -> CliResult<RawInput> {
    let mut lines = reader.lines();

    for field in Field::ALL {
        if raw.get(field).is_some() {
            continue;
        }
        let line = match lines.next() {
            Some(line) => line?,
            None => return Err(InputError::missing(field).into()),
        };
        let answer = line.trim_end_matches('\r');
        validate(field, answer)?;
        debug!(%field, "read parameter from stdin");
        raw.set(field, answer);
    }

    Ok(raw)
}

/// Fails with the first missing parameter instead of prompting.
pub fn require_complete(raw: &RawInput) -> Result<(), InputError> {
    match Field::ALL.into_iter().find(|field| raw.get(*field).is_none()) {
        Some(field) => Err(InputError::missing(field)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::io::Cursor;

    #[test]
    fn test_validate_matches_parser() {
        assert!(validate(Field::Fcf, "12.5").is_ok());
        assert!(validate(Field::Fcf, "twelve").is_err());
        assert!(validate(Field::Years, "10").is_ok());
        assert!(validate(Field::Years, "2.5").is_err());
    }

    #[test]
    fn test_require_complete_reports_first_gap() {
        let mut raw = RawInput::default();
        raw.set(Field::Fcf, "10");
        assert_eq!(
            require_complete(&raw),
            Err(InputError::missing(Field::Shares))
        );

        for field in Field::ALL {
            raw.set(field, "1");
        }
        assert_eq!(require_complete(&raw), Ok(()));
    }

    #[test]
    fn test_read_missing_fills_gaps_in_order() {
        let mut raw = RawInput::default();
        raw.set(Field::Shares, "12.52");
        raw.set(Field::Years, "10");

        let raw = read_missing(raw, Cursor::new("988\r\n10\n3\n8\n")).unwrap();
        assert_eq!(raw.value_of(Field::Fcf), "988");
        assert_eq!(raw.value_of(Field::Shares), "12.52");
        assert_eq!(raw.value_of(Field::DiscountRate), "10");
        assert_eq!(raw.value_of(Field::PerpetualGrowth), "3");
        assert_eq!(raw.value_of(Field::Years), "10");
        assert_eq!(raw.value_of(Field::Growth), "8");
        assert!(raw.parse().is_ok());
    }

    #[test]
    fn test_read_missing_reports_bad_and_short_input() {
        let err = read_missing(RawInput::default(), Cursor::new("988\nlots\n")).unwrap_err();
        assert!(matches!(
            err,
            CliError::Input(InputError::MalformedNumber { field: Field::Shares, .. })
        ));

        let err = read_missing(RawInput::default(), Cursor::new("988\n12.52\n")).unwrap_err();
        assert!(matches!(
            err,
            CliError::Input(InputError::MissingParameter { field: Field::DiscountRate })
        ));
    }

    #[test]
    fn test_fill_missing_is_noop_when_complete() {
        let mut raw = RawInput::default();
        for field in Field::ALL {
            raw.set(field, "5");
        }
        let filled = fill_missing(raw.clone()).unwrap();
        assert_eq!(filled, raw);
    }
}
