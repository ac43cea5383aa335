use crate::fields::FieldSpec;
use crate::model::Record;

/// Encode a batch as CSV with columns in field-list order.
///
/// Every field label becomes a column, duplicates included. A label missing
/// from a record is written as an empty value.
pub fn batch_to_csv(
    fields: &[FieldSpec],
    batch: &[Record],
    with_header: bool,
) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    if with_header {
        writer.write_record(fields.iter().map(|field| field.label.as_str()))?;
    }

    for record in batch {
        writer.write_record(
            fields
                .iter()
                .map(|field| record.get(&field.label).unwrap_or_default()),
        )?;
    }

    writer.into_inner().map_err(|err| err.into_error().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        let mut record = Record::new();
        for (label, value) in pairs {
            record.insert(label, value.to_string());
        }
        record
    }

    #[test]
    fn header_row_precedes_records() {
        let fields = vec![FieldSpec::plain("a", "word"), FieldSpec::plain("b", "word")];
        let batch = vec![record(&[("a", "x"), ("b", "y")]), record(&[("a", "z"), ("b", "w")])];
        let headed = batch_to_csv(&fields, &batch, true).expect("write csv");
        let headless = batch_to_csv(&fields, &batch, false).expect("write csv");
        assert_eq!(headed, b"a,b\nx,y\nz,w\n");
        assert_eq!(headless, b"x,y\nz,w\n");
    }

    #[test]
    fn missing_value_is_written_empty() {
        let fields = vec![FieldSpec::plain("a", "word"), FieldSpec::plain("b", "word")];
        let batch = vec![record(&[("a", "x")])];
        let bytes = batch_to_csv(&fields, &batch, false).expect("write csv");
        assert_eq!(bytes, b"x,\n");
    }

    #[test]
    fn quotes_separators_quotes_and_newlines() {
        let fields = vec![FieldSpec::plain("text", "sentence")];
        let batch = vec![
            record(&[("text", "a,b")]),
            record(&[("text", "say \"hi\"")]),
            record(&[("text", "two\nlines")]),
        ];
        let bytes = batch_to_csv(&fields, &batch, false).expect("write csv");
        assert_eq!(
            String::from_utf8(bytes).expect("utf8"),
            "\"a,b\"\n\"say \"\"hi\"\"\"\n\"two\nlines\"\n"
        );
    }
}
