//! # Layout Resolution
//!
//! Resolution turns the native facts of a [`Module`] into the exact field
//! lists that are emitted for a given [`Target`]. It proceeds in declaration
//! order:
//!
//!  1. Constants are registered, so array lengths can refer to them.
//!  2. Aliases are mapped onto builtin types of the target, or onto aliases
//!     declared before them.
//!  3. Structures are resolved one by one. Every member type is parsed and
//!     sized under the target rules, and must have exactly the native member
//!     size. Every byte not covered by a member becomes an explicit
//!     byte-array field: an *align* field if it separates two members, or a
//!     *filler* field if it ends the structure. Finally, the complete field
//!     list is placed with the target rules. Every resulting offset and the
//!     total size must match the native values, and the structure must not
//!     be more strictly aligned than natively.
//!
//! Because all gaps are explicit, adjacent fields are always contiguous and
//! the field sizes always sum up to the native structure size. The final
//! placement step guarantees that the target compiler agrees.
//!
//! A structure can only refer to structures resolved before it. Hence, the
//! declaration order of a module is a valid emission order.

use std::collections::{HashMap, HashSet};

use crate::{
    decl::{AliasTarget, Module, Struct},
    error::Error,
    target::{Builtin, Target},
    ty::{Expr, Fault, Ty},
};

/// Role of an emitted field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// A native member.
    Named,
    /// Space between two emitted members.
    Align,
    /// Trailing space of the structure, including the part of a union not
    /// covered by its emitted branch.
    Filler,
}

/// A field of an emitted structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    /// Field name, `None` for synthetic fields.
    pub name: Option<String>,
    /// Rendered type expression.
    pub ty: String,
    pub offset: usize,
    pub size: usize,
    /// Alignment of the type on the target.
    pub align: usize,
    pub kind: FieldKind,
}

impl Field {
    fn pad(offset: usize, size: usize, kind: FieldKind) -> Self {
        Self {
            name: None,
            ty: format!("[{}]byte", size),
            offset: offset,
            size: size,
            align: 1,
            kind: kind,
        }
    }

    fn label(&self) -> String {
        match &self.name {
            Some(v) => v.clone(),
            None => format!("_@{}", self.offset),
        }
    }
}

/// A structure with its complete, contiguous field list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedStruct {
    pub name: String,
    pub size: usize,
    /// Alignment of the emitted structure on the target.
    pub align: usize,
    pub fields: Vec<Field>,
}

/// An alias with its rendered target type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedAlias {
    pub name: String,
    pub ty: String,
}

/// A module resolved for one target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved {
    pub package: String,
    pub target: Target,
    pub aliases: Vec<ResolvedAlias>,
    pub consts: Vec<crate::decl::ConstBlock>,
    pub structs: Vec<ResolvedStruct>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Shape {
    size: usize,
    align: usize,
}

struct Scope<'module> {
    target: Target,
    constants: HashMap<&'module str, i128>,
    types: HashMap<&'module str, Shape>,
    pending: HashSet<&'module str>,
}

impl<'module> Scope<'module> {
    fn declare(&mut self, name: &'module str, shape: Shape) -> Result<(), Error> {
        if Builtin::from_name(name).is_some() || self.types.insert(name, shape).is_some() {
            return Err(Error::Duplicate {
                name: name.to_owned(),
            });
        }
        Ok(())
    }

    fn named(&self, owner: &str, name: &str) -> Result<Shape, Error> {
        if let Some(b) = Builtin::from_name(name) {
            Ok(Shape {
                size: b.size(&self.target),
                align: b.align(&self.target),
            })
        } else if let Some(v) = self.types.get(name) {
            Ok(*v)
        } else if self.pending.contains(name) {
            Err(Error::ForwardReference {
                owner: owner.to_owned(),
                name: name.to_owned(),
            })
        } else {
            Err(Error::UnknownType {
                owner: owner.to_owned(),
                name: name.to_owned(),
            })
        }
    }

    fn length(&self, owner: &str, expr: &Expr) -> Result<usize, Error> {
        let invalid = |reason| Error::Length {
            owner: owner.to_owned(),
            expr: expr.to_string(),
            reason: reason,
        };

        match expr.eval(&|name| self.constants.get(name).copied()) {
            Ok(v) if v < 0 => Err(invalid("negative length")),
            Ok(v) => usize::try_from(v).map_err(|_| invalid("length out of range")),
            Err(Fault::Unknown(name)) => Err(Error::UnknownConstant {
                owner: owner.to_owned(),
                name: name,
            }),
            Err(Fault::Overflow) => Err(invalid("arithmetic overflow")),
            Err(Fault::DivideByZero) => Err(invalid("division by zero")),
        }
    }

    fn shape(&self, owner: &str, ty: &Ty) -> Result<Shape, Error> {
        match ty {
            Ty::Name(name) => self.named(owner, name),
            Ty::Array(len, elem) => {
                let elem = self.shape(owner, elem)?;
                let n = self.length(owner, len)?;
                let size = elem.size.checked_mul(n).ok_or_else(|| Error::Length {
                    owner: owner.to_owned(),
                    expr: len.to_string(),
                    reason: "array size out of range",
                })?;
                Ok(Shape {
                    size: size,
                    align: elem.align,
                })
            }
        }
    }

    fn structure(&self, s: &Struct) -> Result<ResolvedStruct, Error> {
        let mut fields = Vec::with_capacity(s.members.len() * 2);
        let mut cursor = 0;

        for m in &s.members {
            if m.offset < cursor {
                return Err(Error::Overlap {
                    structure: s.name.clone(),
                    field: m.name.clone(),
                    offset: m.offset,
                    end: cursor,
                });
            }

            let end = m.offset + m.size;
            if end > s.size {
                return Err(Error::OutOfBounds {
                    structure: s.name.clone(),
                    field: m.name.clone(),
                    end: end,
                    size: s.size,
                });
            }

            if m.offset > cursor {
                fields.push(Field::pad(cursor, m.offset - cursor, FieldKind::Align));
            }

            let ty = Ty::parse(&m.ty)?;
            let shape = self.shape(&s.name, &ty)?;
            if shape.size != m.size {
                return Err(Error::FieldSize {
                    structure: s.name.clone(),
                    field: m.name.clone(),
                    ty: ty.to_string(),
                    native: m.size,
                    declared: shape.size,
                });
            }

            fields.push(Field {
                name: Some(m.name.clone()),
                ty: ty.to_string(),
                offset: m.offset,
                size: m.size,
                align: shape.align,
                kind: FieldKind::Named,
            });
            cursor = end;
        }

        if cursor < s.size {
            fields.push(Field::pad(cursor, s.size - cursor, FieldKind::Filler));
        }

        let align = self.place(s, &fields)?;

        Ok(ResolvedStruct {
            name: s.name.clone(),
            size: s.size,
            align: align,
            fields: fields,
        })
    }

    // Lay out the fields with the target rules and compare with the native
    // layout. Returns the alignment of the structure on the target.
    fn place(&self, s: &Struct, fields: &[Field]) -> Result<usize, Error> {
        let mut offset: usize = 0;
        let mut align: usize = 1;

        for f in fields {
            let at = offset.next_multiple_of(f.align);
            if at != f.offset {
                return Err(Error::Misaligned {
                    structure: s.name.clone(),
                    field: f.label(),
                    native: f.offset,
                    target: at,
                });
            }
            offset = at + f.size;
            align = align.max(f.align);
        }

        let size = offset.next_multiple_of(align);
        if size != s.size {
            return Err(Error::StructSize {
                structure: s.name.clone(),
                native: s.size,
                target: size,
            });
        }

        // Embedded structures rely on the native alignment as an upper bound.
        if align > s.align {
            return Err(Error::StructAlign {
                structure: s.name.clone(),
                native: s.align,
                target: align,
            });
        }

        Ok(align)
    }
}

/// Resolve a module for the given target.
pub fn resolve(module: &Module, target: &Target) -> Result<Resolved, Error> {
    let mut scope = Scope {
        target: *target,
        constants: HashMap::new(),
        types: HashMap::new(),
        pending: module.structs.iter().map(|v| v.name.as_str()).collect(),
    };

    for c in module.constants() {
        if scope.constants.insert(c.name.as_str(), c.value).is_some() {
            return Err(Error::Duplicate {
                name: c.name.clone(),
            });
        }
    }

    let mut aliases = Vec::with_capacity(module.aliases.len());
    for alias in &module.aliases {
        let (ty, shape) = match &alias.target {
            AliasTarget::Native { kind, size } => {
                let b = Builtin::select(*kind, *size, target).ok_or_else(|| Error::NoBuiltin {
                    name: alias.name.clone(),
                    size: *size,
                })?;
                let shape = Shape {
                    size: b.size(target),
                    align: b.align(target),
                };
                (b.name().to_owned(), shape)
            }
            AliasTarget::Name(name) => {
                let ty = Ty::parse(name)?;
                let shape = scope.shape(&alias.name, &ty)?;
                (ty.to_string(), shape)
            }
        };

        tracing::trace!(alias = %alias.name, ty = %ty, size = shape.size, "resolved alias");
        scope.declare(&alias.name, shape)?;
        aliases.push(ResolvedAlias {
            name: alias.name.clone(),
            ty: ty,
        });
    }

    let mut structs = Vec::with_capacity(module.structs.len());
    for s in &module.structs {
        let r = scope.structure(s)?;

        tracing::debug!(
            structure = %r.name,
            size = r.size,
            align = r.align,
            fields = r.fields.len(),
            synthetic = r.fields.iter().filter(|v| v.kind != FieldKind::Named).count(),
            "resolved structure",
        );

        scope.pending.remove(s.name.as_str());
        scope.declare(
            &s.name,
            Shape {
                size: r.size,
                align: r.align,
            },
        )?;
        structs.push(r);
    }

    Ok(Resolved {
        package: module.package.clone(),
        target: *target,
        aliases: aliases,
        consts: module.consts.clone(),
        structs: structs,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::decl::{Alias, ConstBlock, ConstGroup, Constant, Member, ScalarKind};

    fn member(name: &str, path: &str, ty: &str, offset: usize, size: usize) -> Member {
        Member::new(name, path, ty, offset, size)
    }

    fn structure(name: &str, size: usize, members: Vec<Member>) -> Struct {
        Struct {
            name: name.to_owned(),
            size: size,
            align: 8,
            members: members,
        }
    }

    fn module(structs: Vec<Struct>) -> Module {
        let mut m = Module::new("device");
        m.structs = structs;
        m
    }

    fn only(module: &Module, target: &Target) -> ResolvedStruct {
        let mut r = resolve(module, target).unwrap();
        r.structs.pop().unwrap()
    }

    fn assert_contiguous(s: &ResolvedStruct) {
        let mut offset = 0;
        for f in &s.fields {
            assert_eq!(f.offset, offset, "{}: {:?}", s.name, f);
            offset += f.size;
        }
        assert_eq!(offset, s.size, "{}", s.name);
    }

    // A 4-byte branch of a union with a 64-byte branch is followed by 60
    // bytes of filler.
    #[test]
    fn union_filler() {
        let m = module(vec![structure(
            "tagged",
            68,
            vec![
                member("kind", "kind", "uint32", 0, 4),
                member("small", "u.small", "uint32", 4, 4),
            ],
        )]);

        for t in Target::ALL {
            let s = only(&m, t);
            assert_eq!(s.fields.len(), 3);
            assert_eq!(s.fields[1].name.as_deref(), Some("small"));
            assert_eq!(s.fields[1].size, 4);
            assert_eq!(s.fields[2].name, None);
            assert_eq!(s.fields[2].ty, "[60]byte");
            assert_eq!(s.fields[2].size, 60);
            assert_eq!(s.fields[2].kind, FieldKind::Filler);
            assert_contiguous(&s);
        }
    }

    // An alignment field is emitted exactly when the native layout has a gap.
    #[test]
    fn alignment_gap() {
        let gap = module(vec![structure(
            "gap",
            16,
            vec![
                member("a", "a", "int32", 0, 4),
                member("p", "p", "uintptr", 8, 8),
            ],
        )]);
        let s = only(&gap, &Target::AMD64);
        assert_eq!(s.fields.len(), 3);
        assert_eq!(s.fields[1].kind, FieldKind::Align);
        assert_eq!(s.fields[1].offset, 4);
        assert_eq!(s.fields[1].size, 4);
        assert_contiguous(&s);

        let packed = module(vec![structure(
            "packed",
            16,
            vec![
                member("a", "a", "int32", 0, 4),
                member("b", "b", "int32", 4, 4),
                member("p", "p", "uintptr", 8, 8),
            ],
        )]);
        let s = only(&packed, &Target::AMD64);
        assert!(s.fields.iter().all(|f| f.kind == FieldKind::Named));
        assert_contiguous(&s);
    }

    // 64-bit members that the native ABI aligns to 8 bytes stay in place on
    // targets aligning them to 4, thanks to explicit padding.
    #[test]
    fn explicit_padding_on_word_targets() {
        let m = module(vec![structure(
            "wide",
            16,
            vec![
                member("a", "a", "uint32", 0, 4),
                member("b", "b", "uint64", 8, 8),
            ],
        )]);

        for t in [Target::ARM, Target::MIPSLE, Target::AMD64] {
            let s = only(&m, &t);
            assert_eq!(s.fields.len(), 3);
            assert_eq!(s.fields[1].ty, "[4]byte");
            assert_contiguous(&s);
        }
    }

    #[test]
    fn tail_padding() {
        let m = module(vec![structure(
            "tail",
            16,
            vec![
                member("a", "a", "uint64", 0, 8),
                member("b", "b", "uint32", 8, 4),
            ],
        )]);
        let s = only(&m, &Target::AMD64);
        assert_eq!(s.fields[2].kind, FieldKind::Filler);
        assert_eq!(s.fields[2].size, 4);
        assert_eq!(s.align, 8);

        let m = module(vec![structure(
            "tail",
            12,
            vec![
                member("a", "a", "uint32", 0, 4),
                member("b", "u.b", "uint32", 4, 4),
            ],
        )]);
        let s = only(&m, &Target::AMD64);
        assert_eq!(s.fields[2].kind, FieldKind::Filler);
    }

    #[test]
    fn aliases_follow_native_sizes() {
        let mut m = Module::new("device");
        m.aliases = vec![
            Alias {
                name: "unsigned_long".into(),
                target: AliasTarget::Native {
                    kind: ScalarKind::Unsigned,
                    size: 4,
                },
            },
            Alias::to("snd_pcm_uframes_t", "unsigned_long"),
        ];

        let r = resolve(&m, &Target::I386).unwrap();
        assert_eq!(r.aliases[0].ty, "uint32");
        assert_eq!(r.aliases[1].ty, "unsigned_long");

        m.aliases[0].target = AliasTarget::Native {
            kind: ScalarKind::Pointer,
            size: 4,
        };
        assert!(resolve(&m, &Target::I386).is_ok());
        assert_eq!(
            resolve(&m, &Target::AMD64),
            Err(Error::NoBuiltin {
                name: "unsigned_long".into(),
                size: 4,
            }),
        );
    }

    #[test]
    fn symbolic_array_lengths() {
        let mut m = module(vec![structure(
            "snd_mask",
            32,
            vec![member("bits", "bits", "[(SNDRV_MASK_MAX+31)/32]uint32", 0, 32)],
        )]);
        m.consts = vec![ConstBlock {
            groups: vec![ConstGroup {
                constants: vec![Constant::decimal("SNDRV_MASK_MAX", 256i32)],
            }],
        }];

        let s = only(&m, &Target::AMD64);
        assert_eq!(s.fields[0].ty, "[(SNDRV_MASK_MAX + 31) / 32]uint32");

        m.consts.clear();
        assert_eq!(
            resolve(&m, &Target::AMD64),
            Err(Error::UnknownConstant {
                owner: "snd_mask".into(),
                name: "SNDRV_MASK_MAX".into(),
            }),
        );
    }

    #[test]
    fn structure_references() {
        let inner = structure("inner", 8, vec![member("a", "a", "uint64", 0, 8)]);
        let outer = structure(
            "outer",
            16,
            vec![
                member("b", "b", "uint32", 0, 4),
                member("i", "i", "inner", 8, 8),
            ],
        );

        // Alignment of `inner` is taken from the target.
        let r = resolve(&module(vec![inner.clone(), outer.clone()]), &Target::AMD64).unwrap();
        assert_eq!(r.structs[0].align, 8);
        assert_eq!(r.structs[1].fields.len(), 3);

        assert_eq!(
            resolve(&module(vec![outer.clone(), inner.clone()]), &Target::AMD64),
            Err(Error::ForwardReference {
                owner: "outer".into(),
                name: "inner".into(),
            }),
        );
        assert_eq!(
            resolve(&module(vec![outer]), &Target::AMD64),
            Err(Error::UnknownType {
                owner: "outer".into(),
                name: "inner".into(),
            }),
        );
        assert_eq!(
            resolve(&module(vec![inner.clone(), inner]), &Target::AMD64),
            Err(Error::Duplicate {
                name: "inner".into(),
            }),
        );
    }

    #[test]
    fn inconsistent_members() {
        let overlap = module(vec![structure(
            "s",
            8,
            vec![
                member("a", "a", "uint64", 0, 8),
                member("b", "b", "uint32", 4, 4),
            ],
        )]);
        assert!(matches!(
            resolve(&overlap, &Target::AMD64),
            Err(Error::Overlap { offset: 4, end: 8, .. }),
        ));

        let bounds = module(vec![structure("s", 4, vec![member("a", "a", "uint64", 0, 8)])]);
        assert!(matches!(
            resolve(&bounds, &Target::AMD64),
            Err(Error::OutOfBounds { end: 8, size: 4, .. }),
        ));

        let size = module(vec![structure("s", 8, vec![member("a", "a", "uint32", 0, 8)])]);
        assert_eq!(
            resolve(&size, &Target::AMD64),
            Err(Error::FieldSize {
                structure: "s".into(),
                field: "a".into(),
                ty: "uint32".into(),
                native: 8,
                declared: 4,
            }),
        );
    }

    // A gap between a union branch and a later member of the same structure
    // is alignment, only the trailing gap is filler.
    #[test]
    fn gap_after_union_branch() {
        let m = module(vec![structure(
            "buffer",
            24,
            vec![
                member("index", "index", "uint32", 0, 4),
                member("offset", "m.offset", "uint32", 8, 4),
                member("length", "length", "uint32", 16, 4),
            ],
        )]);

        let s = only(&m, &Target::AMD64);
        let kinds: Vec<_> = s.fields.iter().map(|v| v.kind).collect();
        assert_eq!(
            kinds,
            [
                FieldKind::Named,
                FieldKind::Align,
                FieldKind::Named,
                FieldKind::Align,
                FieldKind::Named,
                FieldKind::Filler,
            ],
        );
        assert_eq!(s.fields[3].offset, 12);
        assert_contiguous(&s);
    }

    // Placement rounds every offset and the total size up to the target
    // alignment, and the result never exceeds the native alignment.
    #[test]
    fn structure_alignment() {
        let mut m = module(vec![structure(
            "s",
            16,
            vec![
                member("a", "a", "uint16", 0, 2),
                member("b", "b", "uint64", 8, 8),
            ],
        )]);

        let s = only(&m, &Target::AMD64);
        assert_eq!(s.align, 8);
        assert_eq!(s.fields[1].size, 6);

        m.structs[0].align = 4;
        assert!(resolve(&m, &Target::I386).is_ok());
        assert_eq!(
            resolve(&m, &Target::AMD64),
            Err(Error::StructAlign {
                structure: "s".into(),
                native: 4,
                target: 8,
            }),
        );
    }

    // The target places a member differently than the native compiler.
    #[test]
    fn target_disagreement() {
        let m = module(vec![structure(
            "s",
            12,
            vec![
                member("a", "a", "uint32", 0, 4),
                member("b", "b", "uint64", 4, 8),
            ],
        )]);
        assert!(resolve(&m, &Target::I386).is_ok());
        assert_eq!(
            resolve(&m, &Target::AMD64),
            Err(Error::Misaligned {
                structure: "s".into(),
                field: "b".into(),
                native: 4,
                target: 8,
            }),
        );

        let m = module(vec![structure("s", 12, vec![member("a", "a", "uint64", 0, 8)])]);
        assert!(resolve(&m, &Target::ARM).is_ok());
        assert_eq!(
            resolve(&m, &Target::AMD64),
            Err(Error::StructSize {
                structure: "s".into(),
                native: 12,
                target: 16,
            }),
        );
    }
}
