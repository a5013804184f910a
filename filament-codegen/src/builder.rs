use std::fmt;

use filament::{TypeName, TypeRef};

use crate::LiteralId;

/// Opaque handle to a value emitted into the component under
/// construction. Only meaningful to the writer that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ValueHandle(u32);

impl ValueHandle {
    /// Wraps a raw index. Writer implementations outside this crate use
    /// this to mint handles for their own emitted values.
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }
}

/// A constructor signature: owning type plus parameter types.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConstructorSig {
    owner: TypeName,
    params: Vec<TypeName>,
}

impl ConstructorSig {
    pub fn of(owner: TypeName, params: Vec<TypeName>) -> Self {
        Self { owner, params }
    }

    pub fn owner(&self) -> &TypeName {
        &self.owner
    }

    pub fn params(&self) -> &[TypeName] {
        &self.params
    }
}

impl fmt::Display for ConstructorSig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.owner)?;
        for (index, param) in self.params.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ")")
    }
}

/// A reference to a field of a generated type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldRef {
    pub owner: TypeName,
    pub name: String,
    pub field_type: TypeName,
}

impl FieldRef {
    pub fn of(owner: TypeName, name: impl Into<String>, field_type: TypeName) -> Self {
        Self {
            owner,
            name: name.into(),
            field_type,
        }
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}: {}", self.owner, self.name, self.field_type)
    }
}

/// The code-emission collaborator for one generated component.
///
/// The generator decides *what* to emit and calls this contract; the
/// backing implementation owns the low-level instruction stream. One
/// writer belongs to exactly one component and is exclusively owned by
/// its generation pass.
pub trait ComponentWriter {
    /// Name of the generated type being written.
    fn class_name(&self) -> &TypeName;

    /// Emits a load of the component instance under construction.
    fn load_self(&mut self) -> ValueHandle;

    /// Emits a string constant.
    fn load_string(&mut self, value: &str) -> ValueHandle;

    /// Emits an integer constant.
    fn load_int(&mut self, value: i64) -> ValueHandle;

    /// Emits the runtime representation of a (possibly parameterized)
    /// type.
    fn load_type(&mut self, type_ref: &TypeRef) -> ValueHandle;

    /// Emits construction of an empty mutable set.
    fn new_set(&mut self) -> ValueHandle;

    /// Emits an add of `value` into `set`.
    fn set_add(&mut self, set: ValueHandle, value: ValueHandle);

    /// Emits a read of a static field, used for precomputed singleton
    /// literals.
    fn read_static(&mut self, field: &FieldRef) -> ValueHandle;

    /// Emits a load of a cached annotation literal.
    fn load_literal(&mut self, literal: LiteralId) -> ValueHandle;

    /// Emits a constructor invocation.
    fn new_instance(&mut self, sig: &ConstructorSig, args: &[ValueHandle]) -> ValueHandle;

    /// Emits a write of `value` into `field` of `instance`.
    fn write_instance_field(&mut self, field: &FieldRef, instance: ValueHandle, value: ValueHandle);
}

/// A single recorded emission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    LoadSelf,
    LoadString(String),
    LoadInt(i64),
    LoadType(TypeRef),
    NewSet,
    SetAdd {
        set: ValueHandle,
        value: ValueHandle,
    },
    ReadStatic(FieldRef),
    LoadLiteral(LiteralId),
    NewInstance {
        sig: ConstructorSig,
        args: Vec<ValueHandle>,
    },
    WriteField {
        field: FieldRef,
        instance: ValueHandle,
        value: ValueHandle,
    },
}

/// In-memory [`ComponentWriter`] recording the emitted operations in
/// order. The outer driver replays the log against a real backend; tests
/// assert on it directly.
pub struct RecordingWriter {
    class_name: TypeName,
    ops: Vec<Op>,
    next: u32,
}

impl RecordingWriter {
    pub fn new(class_name: TypeName) -> Self {
        Self {
            class_name,
            ops: Vec::new(),
            next: 0,
        }
    }

    /// The recorded operations, in emission order.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    fn push(&mut self, op: Op) -> ValueHandle {
        let handle = ValueHandle(self.next);
        self.next += 1;
        self.ops.push(op);
        handle
    }
}

impl ComponentWriter for RecordingWriter {
    fn class_name(&self) -> &TypeName {
        &self.class_name
    }

    fn load_self(&mut self) -> ValueHandle {
        self.push(Op::LoadSelf)
    }

    fn load_string(&mut self, value: &str) -> ValueHandle {
        self.push(Op::LoadString(value.into()))
    }

    fn load_int(&mut self, value: i64) -> ValueHandle {
        self.push(Op::LoadInt(value))
    }

    fn load_type(&mut self, type_ref: &TypeRef) -> ValueHandle {
        self.push(Op::LoadType(type_ref.clone()))
    }

    fn new_set(&mut self) -> ValueHandle {
        self.push(Op::NewSet)
    }

    fn set_add(&mut self, set: ValueHandle, value: ValueHandle) {
        self.ops.push(Op::SetAdd { set, value });
    }

    fn read_static(&mut self, field: &FieldRef) -> ValueHandle {
        self.push(Op::ReadStatic(field.clone()))
    }

    fn load_literal(&mut self, literal: LiteralId) -> ValueHandle {
        self.push(Op::LoadLiteral(literal))
    }

    fn new_instance(&mut self, sig: &ConstructorSig, args: &[ValueHandle]) -> ValueHandle {
        self.push(Op::NewInstance {
            sig: sig.clone(),
            args: args.to_vec(),
        })
    }

    fn write_instance_field(
        &mut self,
        field: &FieldRef,
        instance: ValueHandle,
        value: ValueHandle,
    ) {
        self.ops.push(Op::WriteField {
            field: field.clone(),
            instance,
            value,
        });
    }
}
