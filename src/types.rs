// type definitions
use serde::{Serialize, Serializer};
use sha3::{Digest, Keccak256};
use std::fmt;

/// Solidity parameter types as they appear in contract ABIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolidityType {
    Address,
    Bool,
    String,
    /// Dynamically-sized byte sequence.
    Bytes,
    /// Unsigned integer of the given bit width.
    Uint(usize),
    /// Signed integer of the given bit width.
    Int(usize),
    /// Byte sequence of fixed width.
    FixedBytes(usize),
    /// Array of fixed length.
    FixedArray(Box<SolidityType>, usize),
    /// Array of unknown size.
    Array(Box<SolidityType>),
}

impl fmt::Display for SolidityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolidityType::Address => write!(f, "address"),
            SolidityType::Bool => write!(f, "bool"),
            SolidityType::String => write!(f, "string"),
            SolidityType::Bytes => write!(f, "bytes"),
            SolidityType::Uint(bits) => write!(f, "uint{}", bits),
            SolidityType::Int(bits) => write!(f, "int{}", bits),
            SolidityType::FixedBytes(size) => write!(f, "bytes{}", size),
            SolidityType::FixedArray(element, len) => write!(f, "{}[{}]", element, len),
            SolidityType::Array(element) => write!(f, "{}[]", element),
        }
    }
}

impl Serialize for SolidityType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One event parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventParam {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SolidityType,
    pub indexed: bool,
}

/// A callable contract function.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Function {
    pub name: String,
    pub inputs: Vec<SolidityType>,
    pub outputs: Vec<SolidityType>,
    pub constant: bool,
}

impl Function {
    /// Canonical signature string, e.g. `transfer(address,uint256)`.
    pub fn signature(&self) -> String {
        let param_types: Vec<String> = self.inputs.iter().map(|t| t.to_string()).collect();
        format!("{}({})", self.name, param_types.join(","))
    }

    /// First four bytes of the Keccak-256 hash of the signature.
    pub fn selector(&self) -> [u8; 4] {
        let hash = keccak256(self.signature().as_bytes());
        let mut selector = [0u8; 4];
        selector.copy_from_slice(&hash[..4]);
        selector
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Constructor {
    pub inputs: Vec<SolidityType>,
}

/// A contract event declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub name: String,
    pub anonymous: bool,
    pub inputs: Vec<EventParam>,
}

impl Event {
    /// Canonical signature string, e.g. `Transfer(address,address,uint256)`.
    pub fn signature(&self) -> String {
        let param_types: Vec<String> = self.inputs.iter().map(|p| p.kind.to_string()).collect();
        format!("{}({})", self.name, param_types.join(","))
    }

    /// Keccak-256 hash of the signature, used as the log's first topic.
    pub fn topic(&self) -> [u8; 32] {
        keccak256(self.signature().as_bytes())
    }
}

/// One entry of a contract interface description.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entry {
    Function(Function),
    Constructor(Constructor),
    Event(Event),
}

/// A decoded contract ABI, in declaration order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Abi {
    pub entries: Vec<Entry>,
}

impl Abi {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The constructor entry, if the contract declares one.
    pub fn constructor(&self) -> Option<&Constructor> {
        self.entries.iter().find_map(|entry| match entry {
            Entry::Constructor(c) => Some(c),
            _ => None,
        })
    }

    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Function(f) => Some(f),
            _ => None,
        })
    }

    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Event(e) => Some(e),
            _ => None,
        })
    }

    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions().find(|f| f.name == name)
    }

    pub fn event(&self, name: &str) -> Option<&Event> {
        self.events().find(|e| e.name == name)
    }
}

fn keccak256(data: &[u8]) -> [u8; 32] {
    let digest = Keccak256::digest(data);
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&digest);
    hash
}
