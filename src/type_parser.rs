use crate::error::TypeParseError;
use crate::types::SolidityType;

/// Parse a Solidity type string like `uint256`, `bytes32` or `address[]`.
///
/// The whole input must match; trailing text is an error. Element types of
/// bracketed forms are elementary types only, so `uint8[2][3]` is rejected.
pub fn parse_type(text: &str) -> Result<SolidityType, TypeParseError> {
    // Bracket suffixes bind before the bare form: `[]` first, then `[len]`.
    if let Some(element) = text.strip_suffix("[]") {
        return Ok(SolidityType::Array(Box::new(parse_elementary(element)?)));
    }
    if let Some(body) = text.strip_suffix(']') {
        let (element, len) = body
            .rsplit_once('[')
            .ok_or_else(|| TypeParseError::UnknownType(text.to_string()))?;
        let len = parse_array_len(text, len)?;
        return Ok(SolidityType::FixedArray(
            Box::new(parse_elementary(element)?),
            len,
        ));
    }
    parse_elementary(text)
}

/// Parse an elementary (non-array) type.
fn parse_elementary(text: &str) -> Result<SolidityType, TypeParseError> {
    match text {
        "address" => Ok(SolidityType::Address),
        "bool" => Ok(SolidityType::Bool),
        "string" => Ok(SolidityType::String),
        "bytes" => Ok(SolidityType::Bytes),
        _ => {
            // Width-suffixed forms: `uint` before `int`; the exact `bytes`
            // match above handles the dynamic form.
            if let Some(width) = text.strip_prefix("uint") {
                parse_width(text, width).map(SolidityType::Uint)
            } else if let Some(width) = text.strip_prefix("int") {
                parse_width(text, width).map(SolidityType::Int)
            } else if let Some(width) = text.strip_prefix("bytes") {
                parse_width(text, width).map(SolidityType::FixedBytes)
            } else {
                Err(TypeParseError::UnknownType(text.to_string()))
            }
        }
    }
}

fn parse_width(whole: &str, digits: &str) -> Result<usize, TypeParseError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TypeParseError::UnknownType(whole.to_string()));
    }
    digits
        .parse()
        .map_err(|_| TypeParseError::OversizedWidth(whole.to_string()))
}

fn parse_array_len(whole: &str, digits: &str) -> Result<usize, TypeParseError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TypeParseError::InvalidLength(whole.to_string()));
    }
    digits
        .parse()
        .map_err(|_| TypeParseError::OversizedWidth(whole.to_string()))
}
