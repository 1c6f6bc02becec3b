//! Walker tests over hand-written `Defaults` impls.
//!
//! Hand-written impls can express shapes the derive never generates, such
//! as hidden fields and structural descriptors with terminal slots.

use rstest::rstest;

use super::{Policy, Walker};
use crate::{Defaults, DefaultsError, FieldDescriptor, FieldMut, Kind, TokenRegistry};

#[derive(Default)]
struct Leaf {
    count: u8,
    label: String,
    hidden: u8,
}

impl Defaults for Leaf {
    fn record_name(&self) -> &'static str {
        "Leaf"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        const DESCRIPTORS: &[FieldDescriptor] = &[
            FieldDescriptor::new("count", "u8").with_default("0x10"),
            FieldDescriptor::new("label", "String").with_default("%who%"),
            FieldDescriptor::new("hidden", "u8"),
        ];
        DESCRIPTORS
    }

    fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
        match index {
            0 => Some(FieldMut::Scalar(&mut self.count)),
            1 => Some(FieldMut::Scalar(&mut self.label)),
            _ => None,
        }
    }
}

#[derive(Default)]
struct Branch {
    leaf: Option<Box<Leaf>>,
    base: Leaf,
}

impl Defaults for Branch {
    fn record_name(&self) -> &'static str {
        "Branch"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        const DESCRIPTORS: &[FieldDescriptor] = &[
            FieldDescriptor::new("leaf", "Option<Box<Leaf>>")
                .with_default(".")
                .structural()
                .indirect(),
            FieldDescriptor::new("base", "Leaf").embedded().structural(),
        ];
        DESCRIPTORS
    }

    fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
        match index {
            0 if self.leaf.is_none() => Some(FieldMut::Allocated(
                &mut **self.leaf.get_or_insert_with(Default::default),
            )),
            0 => self.leaf.as_deref_mut().map(|leaf| FieldMut::Record(leaf)),
            1 => Some(FieldMut::Record(&mut self.base)),
            _ => None,
        }
    }
}

/// Declares a default on a field it refuses to expose.
struct Sealed {
    before: u8,
}

impl Defaults for Sealed {
    fn record_name(&self) -> &'static str {
        "Sealed"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        const DESCRIPTORS: &[FieldDescriptor] = &[
            FieldDescriptor::new("before", "u8").with_default("7"),
            FieldDescriptor::new("secret", "u8").with_default("1"),
        ];
        DESCRIPTORS
    }

    fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
        match index {
            0 => Some(FieldMut::Scalar(&mut self.before)),
            _ => None,
        }
    }
}

/// Claims a structural field but hands out a terminal slot.
struct Mislabelled {
    value: u8,
}

impl Defaults for Mislabelled {
    fn record_name(&self) -> &'static str {
        "Mislabelled"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        const DESCRIPTORS: &[FieldDescriptor] =
            &[FieldDescriptor::new("value", "u8").with_default(".").structural()];
        DESCRIPTORS
    }

    fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
        match index {
            0 => Some(FieldMut::Scalar(&mut self.value)),
            _ => None,
        }
    }
}

#[derive(Default)]
struct Hooked {
    level: u8,
}

impl Defaults for Hooked {
    fn record_name(&self) -> &'static str {
        "Hooked"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        const DESCRIPTORS: &[FieldDescriptor] = &[
            FieldDescriptor::new("level", "u8").with_default("3"),
            FieldDescriptor::new("hook", "fn()").with_default("x"),
            FieldDescriptor::new("after", "u8").with_default("9"),
        ];
        DESCRIPTORS
    }

    fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
        match index {
            0 => Some(FieldMut::Scalar(&mut self.level)),
            1 => Some(FieldMut::Unsupported { kind: "function" }),
            _ => None,
        }
    }
}

#[derive(Default)]
struct Node {
    depth: u32,
    next: Option<Box<Node>>,
}

impl Defaults for Node {
    fn record_name(&self) -> &'static str {
        "Node"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        const DESCRIPTORS: &[FieldDescriptor] = &[
            FieldDescriptor::new("depth", "u32").with_default("1"),
            FieldDescriptor::new("next", "Option<Box<Node>>")
                .with_default(".")
                .structural()
                .indirect(),
        ];
        DESCRIPTORS
    }

    fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
        match index {
            0 => Some(FieldMut::Scalar(&mut self.depth)),
            1 if self.next.is_none() => Some(FieldMut::Allocated(
                &mut **self.next.get_or_insert_with(Default::default),
            )),
            1 => self.next.as_deref_mut().map(|next| FieldMut::Record(next)),
            _ => None,
        }
    }
}

fn tokens() -> TokenRegistry {
    let registry = TokenRegistry::new();
    assert!(registry.register("who", |_| "leaf".to_owned()).is_ok());
    registry
}

fn walk(record: &mut dyn Defaults, policy: Policy) -> Result<(), DefaultsError> {
    let registry = tokens();
    Walker::new(&registry, policy).walk(record)
}

#[rstest]
fn terminal_fields_are_resolved_and_coerced() {
    let mut leaf = Leaf::default();
    assert_eq!(walk(&mut leaf, Policy::ZeroOnly), Ok(()));
    assert_eq!(leaf.count, 16);
    assert_eq!(leaf.label, "leaf");
    assert_eq!(leaf.hidden, 0);
}

#[rstest]
#[case::zero_only(Policy::ZeroOnly, 5, "kept")]
#[case::overwrite(Policy::Overwrite, 16, "leaf")]
fn policy_decides_whether_pre_set_fields_change(
    #[case] policy: Policy,
    #[case] count: u8,
    #[case] label: &str,
) {
    let mut leaf = Leaf {
        count: 5,
        label: "kept".to_owned(),
        hidden: 0,
    };
    assert_eq!(walk(&mut leaf, policy), Ok(()));
    assert_eq!(leaf.count, count);
    assert_eq!(leaf.label, label);
}

#[rstest]
fn nested_and_embedded_records_are_walked() {
    let mut branch = Branch::default();
    assert_eq!(walk(&mut branch, Policy::ZeroOnly), Ok(()));
    let leaf = branch.leaf.as_deref();
    assert_eq!(leaf.map(|l| l.count), Some(16));
    assert_eq!(branch.base.count, 16);
    assert_eq!(branch.base.label, "leaf");
}

#[rstest]
fn pre_set_nested_values_survive() {
    let mut branch = Branch {
        leaf: Some(Box::new(Leaf {
            count: 20,
            label: String::new(),
            hidden: 0,
        })),
        base: Leaf::default(),
    };
    assert_eq!(walk(&mut branch, Policy::ZeroOnly), Ok(()));
    let leaf = branch.leaf.as_deref();
    assert_eq!(leaf.map(|l| l.count), Some(20));
    assert_eq!(leaf.map(|l| l.label.as_str()), Some("leaf"));
}

#[rstest]
fn hidden_candidate_is_not_settable_after_earlier_fields_are_set() {
    let mut sealed = Sealed { before: 0 };
    let err = walk(&mut sealed, Policy::ZeroOnly).err();
    assert_eq!(
        err,
        Some(DefaultsError::FieldNotSettable {
            record: "Sealed",
            field: "secret",
        })
    );
    assert_eq!(sealed.before, 7);
}

#[rstest]
fn structural_descriptor_with_terminal_slot_is_an_invalid_target() {
    let mut record = Mislabelled { value: 0 };
    assert_eq!(
        walk(&mut record, Policy::ZeroOnly),
        Err(DefaultsError::InvalidTarget { ty: "u8" })
    );
}

#[rstest]
fn unsupported_slot_stops_the_walk() {
    let mut hooked = Hooked::default();
    assert_eq!(
        walk(&mut hooked, Policy::ZeroOnly),
        Err(DefaultsError::UnsupportedKind {
            field: "hook",
            kind: "function",
        })
    );
    assert_eq!(hooked.level, 3);
}

#[rstest]
fn self_referential_pointer_allocates_one_level() {
    let mut node = Node::default();
    assert_eq!(walk(&mut node, Policy::ZeroOnly), Ok(()));
    assert_eq!(node.depth, 1);
    let next = node.next.as_deref();
    assert_eq!(next.map(|n| n.depth), Some(0));
    assert!(next.is_some_and(|n| n.next.is_none()));
}

#[rstest]
fn pre_set_self_typed_chain_is_walked_to_its_end() {
    let mut node = Node {
        depth: 0,
        next: Some(Box::new(Node {
            depth: 0,
            next: Some(Box::default()),
        })),
    };
    assert_eq!(walk(&mut node, Policy::ZeroOnly), Ok(()));
    let depths: Vec<u32> = std::iter::successors(Some(&node), |n| n.next.as_deref())
        .map(|n| n.depth)
        .collect();
    assert_eq!(depths, [1, 1, 1, 0]);
}

#[rstest]
fn nested_failures_carry_the_field_path() {
    struct Narrow {
        small: u8,
    }

    impl Defaults for Narrow {
        fn record_name(&self) -> &'static str {
            "Narrow"
        }

        fn descriptors(&self) -> &'static [FieldDescriptor] {
            const DESCRIPTORS: &[FieldDescriptor] =
                &[FieldDescriptor::new("small", "u8").with_default("256")];
            DESCRIPTORS
        }

        fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
            match index {
                0 => Some(FieldMut::Scalar(&mut self.small)),
                _ => None,
            }
        }
    }

    struct Outer {
        inner: Narrow,
    }

    impl Defaults for Outer {
        fn record_name(&self) -> &'static str {
            "Outer"
        }

        fn descriptors(&self) -> &'static [FieldDescriptor] {
            const DESCRIPTORS: &[FieldDescriptor] =
                &[FieldDescriptor::new("inner", "Narrow").with_default(".").structural()];
            DESCRIPTORS
        }

        fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
            match index {
                0 => Some(FieldMut::Record(&mut self.inner)),
                _ => None,
            }
        }
    }

    let mut outer = Outer {
        inner: Narrow { small: 0 },
    };
    let err = walk(&mut outer, Policy::ZeroOnly).err();
    assert_eq!(err.as_ref().map(DefaultsError::field_path).as_deref(), Some("inner.small"));
    assert!(matches!(
        err.as_ref().map(DefaultsError::root_cause),
        Some(DefaultsError::InvalidDefaultValue { kind: Kind::U8, text, .. }) if text == "256"
    ));
    assert_eq!(outer.inner.small, 0);
}

#[rstest]
fn unresolved_placeholders_are_kept_verbatim() {
    let mut leaf = Leaf::default();
    let registry = TokenRegistry::new();
    assert_eq!(Walker::new(&registry, Policy::ZeroOnly).walk(&mut leaf), Ok(()));
    assert_eq!(leaf.label, "%who%");
}
