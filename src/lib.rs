//! Typed model of Ethereum contract ABIs.
//!
//! Parses the textual Solidity type grammar (`uint256`, `bytes32`,
//! `address[]`, `uint8[4]`) into a [`SolidityType`] tree, and decodes
//! contract interface descriptions (functions, constructors, events) from
//! parsed JSON documents into an [`Abi`].
//!
//! ```
//! use solidity_abi::{parse_abi, parse_type, SolidityType};
//!
//! let kind = parse_type("uint8[4]").unwrap();
//! assert_eq!(kind.to_string(), "uint8[4]");
//!
//! let doc = serde_json::json!([
//!     {"type": "function", "name": "f", "inputs": [], "outputs": [], "constant": true}
//! ]);
//! let abi = parse_abi(&doc).unwrap();
//! assert_eq!(abi.functions().count(), 1);
//! ```

pub mod abi_parser;
pub mod error;
pub mod type_parser;
pub mod types;

pub use abi_parser::{parse_abi, parse_entry};
pub use error::{AbiError, TypeParseError};
pub use type_parser::parse_type;
pub use types::{Abi, Constructor, Entry, Event, EventParam, Function, SolidityType};
