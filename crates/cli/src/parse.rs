//! Parsing of console input: comma lists and coin amounts.

use vendo_core::{LedgerError, LedgerResult, Money};

/// Parse a comma-separated list of 1-based item numbers.
pub fn index_list(input: &str) -> LedgerResult<Vec<usize>> {
    fields(input)
        .map(|s| {
            s.parse()
                .map_err(|_| LedgerError::validation(format!("invalid item number: {s}")))
        })
        .collect()
}

/// Parse a comma-separated list of quantities.
///
/// Zero is accepted here; the ledger rejects it during request validation.
pub fn quantity_list(input: &str) -> LedgerResult<Vec<u32>> {
    fields(input)
        .map(|s| {
            s.parse()
                .map_err(|_| LedgerError::validation(format!("invalid quantity: {s}")))
        })
        .collect()
}

/// Parse a coin value in dollars.
pub fn coin(input: &str) -> LedgerResult<Money> {
    Money::parse(input)
}

fn fields(input: &str) -> impl Iterator<Item = &str> {
    input.split(',').map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_list_trims_around_commas() {
        assert_eq!(index_list("1, 2 ,3").unwrap(), vec![1, 2, 3]);
        assert_eq!(index_list("2").unwrap(), vec![2]);
    }

    #[test]
    fn index_list_rejects_non_numbers() {
        let err = index_list("1,x").unwrap_err();
        match err {
            LedgerError::Validation(msg) => assert_eq!(msg, "invalid item number: x"),
            other => panic!("expected Validation, got {other:?}"),
        }
        assert!(index_list("").is_err());
        assert!(index_list("1,,2").is_err());
        assert!(index_list("-1").is_err());
    }

    #[test]
    fn quantity_list_parses_and_rejects() {
        assert_eq!(quantity_list(" 2,1 ").unwrap(), vec![2, 1]);
        assert!(quantity_list("two").is_err());
        assert!(quantity_list("1.5").is_err());
    }

    #[test]
    fn coin_parses_dollar_amounts() {
        assert_eq!(coin("1.50").unwrap(), Money::from_cents(150));
        assert!(coin("nope").is_err());
        assert!(coin("-2").is_err());
    }
}
