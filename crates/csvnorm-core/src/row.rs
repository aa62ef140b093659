use crate::errors::InvalidDataFormat;
use crate::fields::{capitalize_name, format_timestamp, format_zip, Elapsed};
use crate::tokenizer::tokenize_record;

/// Column layout of one row: timestamp, address, zip, full name, foo
/// duration, bar duration, total duration, notes.
pub const FIELD_COUNT: usize = 8;

/// Normalizes one row, or reports why it must be dropped. Pure: no I/O and
/// no diagnostics; the driver decides what a failure means.
pub fn normalize_row(record: &str) -> Result<String, InvalidDataFormat> {
    let fields = tokenize_record(record);
    if fields.len() != FIELD_COUNT {
        return Err(InvalidDataFormat::FieldCount {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }

    let timestamp = format_timestamp(&fields[0])?;
    let zip = format_zip(&fields[2])?;
    let full_name = capitalize_name(&fields[3]);
    let foo = Elapsed::parse(&fields[4])?;
    let bar = Elapsed::parse(&fields[5])?;
    // fields[6] carries the stale input total; it is recomputed here.
    let total = foo + bar;

    let output = [
        timestamp,
        fields[1].clone(),
        zip,
        full_name,
        foo.to_string(),
        bar.to_string(),
        total.to_string(),
        fields[7].clone(),
    ];

    Ok(output
        .iter()
        .map(|field| escape_field(field))
        .collect::<Vec<_>>()
        .join(","))
}

/// Re-quotes a field whose value would otherwise break the comma/newline
/// framing of the emitted row.
fn escape_field(field: &str) -> String {
    if field.contains(['"', ',', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
