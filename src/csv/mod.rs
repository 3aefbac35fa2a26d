use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::{
    domain::{
        error::Error as DomainError,
        record::{Record, AMOUNT_COLUMN, CATEGORY_COLUMN},
    },
    error::Result,
};

/// Parse [`Record`]s from a reader, keeping the input order.
///
/// The header row must name the `Category` and `Amount` columns exactly;
/// a differently-cased header is reported as missing rather than guessed at.
/// Any other column is ignored.
pub fn read(reader: impl Read) -> Result<Vec<Record>> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    require_columns(reader.headers()?)?;

    let records = reader
        .into_deserialize()
        .collect::<csv::Result<Vec<Record>>>()?;
    Ok(records)
}

fn require_columns(headers: &StringRecord) -> std::result::Result<(), DomainError> {
    for column in [CATEGORY_COLUMN, AMOUNT_COLUMN] {
        if !headers.iter().any(|header| header == column) {
            return Err(DomainError::MissingColumn { column });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind};

    #[test]
    fn reads_rows_in_order() {
        let input = "\
OrderID,Product,Category,Amount,Date
1001,Laptop,Electronics,1200.00,2023-01-05
1004,Desk Chair,Furniture,150.00,2023-01-07
";
        let records = read(input.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].category, "Electronics");
        assert_eq!(records[0].amount, "1200.00");
        assert_eq!(records[0].product.as_deref(), Some("Laptop"));
        assert_eq!(records[1].category, "Furniture");
        assert_eq!(records[1].date.as_deref(), Some("2023-01-07"));
    }

    #[test]
    fn only_required_columns_are_needed() {
        let records = read("Amount,Category\n5,Books\n".as_bytes()).unwrap();

        assert_eq!(records[0].category, "Books");
        assert_eq!(records[0].amount, "5");
        assert_eq!(records[0].order_id, None);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let records = read("Category,Amount,Region\nBooks,5,EU\n".as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
    }

    #[test]
    fn fields_and_headers_are_trimmed() {
        let records = read(" Category , Amount \n Books , 5 \n".as_bytes()).unwrap();

        assert_eq!(records[0].category, "Books");
        assert_eq!(records[0].amount, "5");
    }

    #[test]
    fn lowercase_category_header_is_missing() {
        let error = read("category,Amount\nBooks,5\n".as_bytes()).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::MissingColumn);
        assert!(matches!(
            error,
            Error::BusinessError(DomainError::MissingColumn {
                column: CATEGORY_COLUMN
            })
        ));
    }

    #[test]
    fn missing_amount_header_is_reported() {
        let error = read("Category,Price\nBooks,5\n".as_bytes()).unwrap_err();

        assert!(matches!(
            error,
            Error::BusinessError(DomainError::MissingColumn {
                column: AMOUNT_COLUMN
            })
        ));
    }

    #[test]
    fn empty_input_has_no_columns() {
        let error = read("".as_bytes()).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::MissingColumn);
    }

    #[test]
    fn ragged_rows_are_unexpected_failures() {
        let error = read("Category,Amount\nBooks,5,extra\n".as_bytes()).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::UnexpectedFailure);
    }
}
