// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Renderers for the built-in value kinds. Each one receives an already validated
//! [`crate::FormatSpec`] and writes straight into the context's sink; none of them
//! allocate on the heap for ordinary values.

// Attach sources.
pub mod decimal;
pub mod float;
pub mod integer;
pub mod padding;
pub mod render_value;
pub mod text;

// Re-export.
pub use decimal::*;
pub use float::*;
pub use integer::*;
pub use padding::*;
pub use render_value::*;
pub use text::*;
