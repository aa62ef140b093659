use crate::errors::InvalidDataFormat;

/// Left-pads with zeros to five characters; the padded value must then be
/// exactly five ASCII digits.
pub fn format_zip(value: &str) -> Result<String, InvalidDataFormat> {
    let padded = format!("{value:0>5}");
    if padded.len() == 5 && padded.bytes().all(|b| b.is_ascii_digit()) {
        Ok(padded)
    } else {
        Err(InvalidDataFormat::Zip {
            value: value.to_string(),
        })
    }
}
