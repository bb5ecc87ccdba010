// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Places the fill character around a rendered value. Widths are counted in code points,
//! so multi-byte fill characters and multi-byte content pad the same way ASCII does.
//!
//! A value is handed over in two parts: a `prefix` (sign and base prefix, eg: `-0x`) and
//! a `body` (the digits, or the whole text for non-numbers). Only numeric alignment
//! cares about the split:
//!
//! ```text
//! width 8, prefix "-0x", body "ff"
//!
//! Left     -0xff···
//! Right    ···-0xff
//! Center   ·-0xff··
//! Numeric  -0x···ff
//! ```

use smallvec::SmallVec;

use crate::{Align, FormatContext, FormatError, FormatSpec};

/// Fill characters are written in chunks of this many bytes.
pub const FILL_CHUNK_SIZE: usize = 64;

/// Write `prefix` and `body` padded to the spec's width. `default_align` applies when
/// the spec does not choose one.
///
/// # Errors
///
/// Returns [`crate::FormatErrorKind::WriteFailed`] if the sink fails.
pub fn write_padded(
    ctx: &mut FormatContext<'_, '_>,
    spec: &FormatSpec,
    default_align: Align,
    prefix: &str,
    body: &str,
) -> Result<(), FormatError> {
    let (fill, align) = spec.effective_fill_align(default_align);
    write_padded_with(ctx, spec.width, fill, align, prefix, body)
}

/// Same as [`write_padded`], with the fill and alignment already decided.
///
/// # Errors
///
/// Returns [`crate::FormatErrorKind::WriteFailed`] if the sink fails.
pub fn write_padded_with(
    ctx: &mut FormatContext<'_, '_>,
    width: u32,
    fill: char,
    align: Align,
    prefix: &str,
    body: &str,
) -> Result<(), FormatError> {
    let content_width = prefix.chars().count() + body.chars().count();
    let pad = (width as usize).saturating_sub(content_width);

    let (before, after) = match align {
        Align::Left => (0, pad),
        Align::Center => (pad / 2, pad - pad / 2),
        Align::Right | Align::None => (pad, 0),
        Align::Numeric => {
            ctx.write_str(prefix)?;
            write_fill(ctx, fill, pad)?;
            return ctx.write_str(body);
        }
    };

    write_fill(ctx, fill, before)?;
    ctx.write_str(prefix)?;
    ctx.write_str(body)?;
    write_fill(ctx, fill, after)
}

/// Write `count` copies of `fill`.
///
/// # Errors
///
/// Returns [`crate::FormatErrorKind::WriteFailed`] if the sink fails.
pub fn write_fill(
    ctx: &mut FormatContext<'_, '_>,
    fill: char,
    count: usize,
) -> Result<(), FormatError> {
    if count == 0 {
        return Ok(());
    }

    let mut encoded = [0_u8; 4];
    let encoded = fill.encode_utf8(&mut encoded).as_bytes();
    let per_chunk = (FILL_CHUNK_SIZE / encoded.len()).max(1);

    let mut chunk: SmallVec<[u8; FILL_CHUNK_SIZE]> = SmallVec::new();
    for _ in 0..count.min(per_chunk) {
        chunk.extend_from_slice(encoded);
    }

    let mut remaining = count;
    while remaining > 0 {
        let take = remaining.min(per_chunk);
        ctx.write_bytes(&chunk[..take * encoded.len()])?;
        remaining -= take;
    }
    Ok(())
}
