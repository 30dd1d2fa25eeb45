//! Office Open XML (OOXML) document generation.
//!
//! # Architecture
//!
//! 1. **OPC Layer** (`opc`): package plumbing (ZIP entries, content types, relationships)
//! 2. **Errors** (`error`): the error type shared by every layer
//! 3. **Format-Specific Modules**:
//!    - `docx`: Word documents
pub mod docx;
pub mod error;
pub mod opc;

pub use error::{DocxError, Result};
