//! Runtime descriptors for the parameter types of an action.

use std::{
    any::{TypeId, type_name},
    cmp::Ordering,
    fmt::Display,
    hash::{Hash, Hasher},
};

use serde::{Serialize, Serializer};

/// Describes the Rust type of a single action parameter. Two descriptors are equal when they
/// refer to the same type, the name is only carried along for display.
#[derive(Clone, Copy, Debug)]
pub struct ParamType {
    id: TypeId,
    name: &'static str,
}

impl ParamType {
    /// Produce the descriptor for the given Rust type.
    pub fn of<T: 'static + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified name of the type, as reported by [`std::any::type_name`].
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ParamType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ParamType {}

impl Hash for ParamType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for ParamType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ParamType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Display for ParamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Serialised as the type name, since the [`TypeId`] is opaque outside of the running binary.
impl Serialize for ParamType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

/// Tuple of types which can be described as [`ParamType`]s.
pub trait ParamTypeTuple {
    /// Produce the [`ParamType`] for each of the types in the tuple, in order.
    fn param_types() -> Vec<ParamType>;
}

macro_rules! impl_param_type_tuple {
    (impl [$($params:ident,)*]) => {
        impl<$($params: 'static,)*> ParamTypeTuple for ($($params,)*) {
            fn param_types() -> Vec<ParamType> {
                vec![$(ParamType::of::<$params>(),)*]
            }
        }
    };

    (recurse []) => {};

    (recurse [$param:ident, $($params:ident,)*]) => {
        impl_param_type_tuple!($($params),*);
    };

    ($($params:ident),* $(,)?) => {
        impl_param_type_tuple!(impl [$($params,)*]);
        impl_param_type_tuple!(recurse [$($params,)*]);
    };
}

impl_param_type_tuple!(
    T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15
);
