//! # Declaration Emission
//!
//! Renders a [`Resolved`] module as Go source text. The output is formatted
//! the way `gofmt` would format it: tab indentation, columns aligned within
//! each run of lines, and a single blank line between declarations.
//!
//! Rendering is a pure function of the resolved module and the options, so
//! identical inputs always yield byte-identical output.

use core::fmt;

use crate::{
    decl::{Constant, Radix},
    layout::{Field, FieldKind, Resolved, ResolvedStruct},
};

/// Rendering options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Start the output with a build constraint for the target architecture.
    pub build_tag: bool,
    /// Declare every constant with its fixed-width integer type.
    pub typed_constants: bool,
}

const KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Emitted identifier for a native member name.
///
/// Members named after keywords are renamed: `type` becomes `typ`, any other
/// keyword gets a trailing underscore.
pub fn field_name(name: &str) -> String {
    match name {
        "type" => "typ".to_owned(),
        v if KEYWORDS.contains(&v) => format!("{}_", v),
        v => v.to_owned(),
    }
}

/// Literal of a constant value.
///
/// Negative values keep their sign in either radix, so the literal is valid
/// for the fixed-width type of the constant.
pub fn literal(c: &Constant) -> String {
    match c.radix {
        Radix::Hex if c.value < 0 => format!("-0x{:08x}", c.value.unsigned_abs()),
        Radix::Hex => format!("0x{:08x}", c.value),
        Radix::Decimal => c.value.to_string(),
    }
}

/// Displayable rendering of a resolved module.
pub struct Emit<'resolved> {
    resolved: &'resolved Resolved,
    options: Options,
}

impl<'resolved> Emit<'resolved> {
    pub fn new(resolved: &'resolved Resolved, options: Options) -> Self {
        Self {
            resolved: resolved,
            options: options,
        }
    }

    fn consts(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.resolved.consts {
            fmt.write_str("const (\n")?;
            for (i, group) in block.groups.iter().enumerate() {
                if i > 0 {
                    fmt.write_str("\n")?;
                }

                let names = group.constants.iter().map(|c| c.name.len()).max().unwrap_or(0);
                let classes = group
                    .constants
                    .iter()
                    .map(|c| c.class.to_string().len())
                    .max()
                    .unwrap_or(0);

                for c in &group.constants {
                    if self.options.typed_constants {
                        writeln!(
                            fmt,
                            "\t{:<nw$} {:<cw$} = {}",
                            c.name,
                            c.class.to_string(),
                            literal(c),
                            nw = names,
                            cw = classes,
                        )?;
                    } else {
                        writeln!(fmt, "\t{:<nw$} = {}", c.name, literal(c), nw = names)?;
                    }
                }
            }
            fmt.write_str(")\n\n")?;
        }
        Ok(())
    }

    fn structure(&self, fmt: &mut fmt::Formatter<'_>, s: &ResolvedStruct) -> fmt::Result {
        let names: Vec<String> = s.fields.iter().map(emitted_name).collect();
        let nw = names.iter().map(|v| v.len()).max().unwrap_or(0);
        let tw = s.fields.iter().map(|v| v.ty.len()).max().unwrap_or(0);

        writeln!(fmt, "type {} struct {{ // size {}", s.name, s.size)?;
        for (name, f) in names.iter().zip(&s.fields) {
            write!(
                fmt,
                "\t{:<nw$} {:<tw$} // offset {}, size {}",
                name,
                f.ty,
                f.offset,
                f.size,
                nw = nw,
                tw = tw,
            )?;
            match f.kind {
                FieldKind::Named => fmt.write_str("\n")?,
                FieldKind::Align => fmt.write_str(", align\n")?,
                FieldKind::Filler => fmt.write_str(", filler\n")?,
            }
        }
        fmt.write_str("}\n")
    }
}

fn emitted_name(f: &Field) -> String {
    match &f.name {
        Some(v) => field_name(v),
        None => "_".to_owned(),
    }
}

impl<'resolved> fmt::Display for Emit<'resolved> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.options.build_tag {
            writeln!(fmt, "//go:build {}\n", self.resolved.target.goarch)?;
        }
        writeln!(fmt, "package {}\n", self.resolved.package)?;

        if !self.resolved.aliases.is_empty() {
            for a in &self.resolved.aliases {
                writeln!(fmt, "type {} = {}", a.name, a.ty)?;
            }
            fmt.write_str("\n")?;
        }

        self.consts(fmt)?;

        for (i, s) in self.resolved.structs.iter().enumerate() {
            if i > 0 {
                fmt.write_str("\n")?;
            }
            self.structure(fmt, s)?;
        }
        Ok(())
    }
}

/// Render a resolved module.
pub fn render(resolved: &Resolved, options: &Options) -> String {
    Emit::new(resolved, *options).to_string()
}
