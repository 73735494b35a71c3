pub mod entrypoint; // entrypoint where the Solana program process starts
pub mod processor; // where instruction logics are processed
pub mod instruction; // where operation codes are decoded from message bodies
pub mod state; // the persistent vote record and its fixed-width encoding
pub mod query; // read-only accessors over a committed record
pub mod error; // the program's error taxonomy
