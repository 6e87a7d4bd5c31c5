use crate::error::AbiError;
use crate::type_parser::parse_type;
use crate::types::{Abi, Constructor, Entry, Event, EventParam, Function, SolidityType};
use serde_json::{Map, Value};

/// Decode a parsed ABI document (a JSON array of entry objects).
///
/// Entries come back in document order. The first malformed entry fails the
/// whole decode; no partial ABI is ever returned.
pub fn parse_abi(doc: &Value) -> Result<Abi, AbiError> {
    let items = doc.as_array().ok_or(AbiError::UnexpectedShape {
        expected: "an array of entry objects",
        found: value_kind(doc),
    })?;
    let entries = items.iter().map(parse_entry).collect::<Result<_, _>>()?;
    Ok(Abi { entries })
}

/// Decode a single interface entry, dispatching on its `type` field.
pub fn parse_entry(doc: &Value) -> Result<Entry, AbiError> {
    let object = as_object(doc)?;
    match str_field(object, "type")? {
        "function" => parse_function(object).map(Entry::Function),
        "constructor" => parse_constructor(object).map(Entry::Constructor),
        "event" => parse_event(object).map(Entry::Event),
        other => Err(AbiError::UnknownEntryType(other.to_string())),
    }
}

fn parse_function(object: &Map<String, Value>) -> Result<Function, AbiError> {
    Ok(Function {
        name: str_field(object, "name")?.to_string(),
        inputs: param_types(object, "inputs")?,
        outputs: param_types(object, "outputs")?,
        constant: bool_field(object, "constant")?,
    })
}

fn parse_constructor(object: &Map<String, Value>) -> Result<Constructor, AbiError> {
    Ok(Constructor {
        inputs: param_types(object, "inputs")?,
    })
}

fn parse_event(object: &Map<String, Value>) -> Result<Event, AbiError> {
    Ok(Event {
        name: str_field(object, "name")?.to_string(),
        anonymous: bool_field(object, "anonymous")?,
        inputs: array_field(object, "inputs")?
            .iter()
            .map(parse_event_param)
            .collect::<Result<_, _>>()?,
    })
}

fn parse_event_param(doc: &Value) -> Result<EventParam, AbiError> {
    let object = as_object(doc)?;
    Ok(EventParam {
        name: str_field(object, "name")?.to_string(),
        kind: type_field(object, "type")?,
        indexed: bool_field(object, "indexed")?,
    })
}

/// The declared types of a parameter list, e.g. a function's `inputs`.
fn param_types(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Vec<SolidityType>, AbiError> {
    array_field(object, field)?
        .iter()
        .map(|param| type_field(as_object(param)?, "type"))
        .collect()
}

fn type_field(object: &Map<String, Value>, field: &'static str) -> Result<SolidityType, AbiError> {
    let text = str_field(object, field)?;
    parse_type(text).map_err(|source| AbiError::InvalidType {
        text: text.to_string(),
        source,
    })
}

fn as_object(doc: &Value) -> Result<&Map<String, Value>, AbiError> {
    doc.as_object().ok_or(AbiError::UnexpectedShape {
        expected: "an object",
        found: value_kind(doc),
    })
}

fn field<'a>(object: &'a Map<String, Value>, field: &'static str) -> Result<&'a Value, AbiError> {
    object.get(field).ok_or(AbiError::MissingField(field))
}

fn str_field<'a>(object: &'a Map<String, Value>, name: &'static str) -> Result<&'a str, AbiError> {
    let value = field(object, name)?;
    value.as_str().ok_or(AbiError::FieldShape {
        field: name,
        expected: "a string",
        found: value_kind(value),
    })
}

fn bool_field(object: &Map<String, Value>, name: &'static str) -> Result<bool, AbiError> {
    let value = field(object, name)?;
    value.as_bool().ok_or(AbiError::FieldShape {
        field: name,
        expected: "a boolean",
        found: value_kind(value),
    })
}

fn array_field<'a>(
    object: &'a Map<String, Value>,
    name: &'static str,
) -> Result<&'a Vec<Value>, AbiError> {
    let value = field(object, name)?;
    value.as_array().ok_or(AbiError::FieldShape {
        field: name,
        expected: "an array",
        found: value_kind(value),
    })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
