// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Run with `cargo run --example demo`. Debug events from the engine (the failing call
//! at the end) go to stderr.

use std::collections::BTreeMap;

use runfmt::{Format, FormatContext, FormatError, ToValue, Value, fmt_eprint, fmt_print,
             sprint};

/// 128 bit id printed in the usual 8-4-4-4-12 hex groups.
struct Guid {
    hi: u64,
    lo: u64,
}

impl Format for Guid {
    fn format(&self, f: &mut FormatContext<'_, '_>) -> Result<(), FormatError> {
        let mut acc = String::new();
        runfmt::format_to!(
            &mut acc,
            "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
            self.hi >> 32,
            (self.hi >> 16) & 0xFFFF,
            self.hi & 0xFFFF,
            self.lo >> 48,
            self.lo & 0xFFFF_FFFF_FFFF
        )?;
        f.write_str(&acc)
    }
}

impl ToValue for Guid {
    fn to_value(&self) -> Value<'_> { Value::Custom(self) }
}

struct Vec3 {
    x: f32,
    y: f32,
    z: f32,
}

impl Format for Vec3 {
    fn format(&self, f: &mut FormatContext<'_, '_>) -> Result<(), FormatError> {
        f.fmt_tuple("Vec3").field(&self.x).field(&self.y).field(&self.z).finish()
    }
}

impl ToValue for Vec3 {
    fn to_value(&self) -> Value<'_> { Value::Custom(self) }
}

struct Entity {
    id: Guid,
    name: &'static str,
    position: Vec3,
    tags: Vec<&'static str>,
}

impl Format for Entity {
    fn format(&self, f: &mut FormatContext<'_, '_>) -> Result<(), FormatError> {
        f.fmt_struct("Entity")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("position", &self.position)
            .field("tags", &self.tags)
            .finish()
    }
}

impl ToValue for Entity {
    fn to_value(&self) -> Value<'_> { Value::Custom(self) }
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    fmt_print!("{!BLUE;B}runfmt{!} {}\n", "demo")?;
    fmt_print!("|{:<10}|{:^10}|{:>10}|\n", "left", "center", "right")?;
    fmt_print!("|{:*<10}|{:=+10}|{:#010x}|\n", 42, -42, 48879)?;
    fmt_print!("{:.3f} {:e} {:g} {:.1%} {}\n", 0.0005, 1234.5, 1e-7, 0.256, 0.1)?;
    fmt_print!("{0:>{1}} {n:n}\n", "dyn", 8, n = 1_234_567)?;

    let entity = Entity {
        id: Guid {
            hi: 0x0123_4567_89AB_CDEF,
            lo: 0xFEDC_BA98_7654_3210,
        },
        name: "probe",
        position: Vec3 {
            x: 1.5,
            y: -0.25,
            z: 10.0,
        },
        tags: vec!["active", "remote"],
    };
    fmt_print!("{}\n", entity)?;
    fmt_print!("{:.2f}\n", entity)?;
    fmt_print!("{:#}\n", entity)?;

    let mut stock = BTreeMap::new();
    stock.insert("apples", 12);
    stock.insert("pears", 7);
    fmt_print!("{!tGREEN}{:3d}{!}\n", stock)?;

    // A broken format string: the error is a miette diagnostic pointing at the spot.
    if let Err(error) = sprint!("{0:.{}}", 1.5, 2) {
        fmt_eprint!("{!RED}error:{!} {}\n", error.message())?;
        eprintln!("{:?}", miette::Report::new(error));
    }

    Ok(())
}
