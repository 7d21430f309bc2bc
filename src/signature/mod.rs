//! Identity of a controller action.

mod param;

use std::{
    any::TypeId,
    cmp::Ordering,
    collections::BTreeSet,
    fmt::Display,
    hash::{Hash, Hasher},
    str::FromStr,
};

use serde::Serialize;

pub use self::param::{ParamType, ParamTypeTuple};
use crate::SignatureError;

/// Separator between the controller and action names in the string form.
const SEPARATOR: char = '.';

/// Identifies a controller action by its controller name, action name, and the types of its
/// parameters. The parameter types allow overloaded actions to be told apart.
///
/// Names are compared case-insensitively. Two signatures are equal (`==`) when their names match
/// and they declare the same set of parameter types, regardless of order or repetition. [`Hash`]
/// and [`Ord`] agree with this, so signatures can be used as keys in any collection.
///
/// The looser, one-directional match used when resolving an action is available separately as
/// [`ActionSignature::is_compatible_with`].
#[derive(Clone, Debug, Serialize)]
pub struct ActionSignature {
    controller: String,
    action: String,
    parameter_types: Vec<ParamType>,
}

impl ActionSignature {
    /// Create a signature without any parameter types. Names are not validated.
    pub fn new(controller: impl ToString, action: impl ToString) -> Self {
        Self::with_parameter_types(controller, action, Vec::new())
    }

    /// Create a signature with the provided parameter types, keeping their order.
    pub fn with_parameter_types(
        controller: impl ToString,
        action: impl ToString,
        parameter_types: impl IntoIterator<Item = ParamType>,
    ) -> Self {
        Self {
            controller: controller.to_string(),
            action: action.to_string(),
            parameter_types: parameter_types.into_iter().collect(),
        }
    }

    /// Create a signature whose parameter types are taken from the tuple `P`.
    ///
    /// ```
    /// use action_signature::{ActionSignature, ParamType};
    ///
    /// let signature = ActionSignature::with_params::<(u32, String)>("Customers", "Get");
    /// assert_eq!(
    ///     signature.parameter_types(),
    ///     [ParamType::of::<u32>(), ParamType::of::<String>()]
    /// );
    /// ```
    pub fn with_params<P: ParamTypeTuple>(
        controller: impl ToString,
        action: impl ToString,
    ) -> Self {
        Self::with_parameter_types(controller, action, P::param_types())
    }

    /// Parse a signature from the `Controller.Action` form. Only the first two segments are used,
    /// and the resulting signature has no parameter types.
    pub fn parse(s: &str) -> Result<Self, SignatureError> {
        let mut segments = s.split(SEPARATOR);

        match (segments.next(), segments.next()) {
            (Some(controller), Some(action)) => Ok(Self::new(controller, action)),
            _ => {
                tracing::debug!(input = s, "action signature is missing a separator");
                Err(SignatureError::InvalidFormat(s.to_string()))
            }
        }
    }

    pub fn controller(&self) -> &str {
        &self.controller
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn parameter_types(&self) -> &[ParamType] {
        &self.parameter_types
    }

    /// Determine whether this signature can be served by `other`.
    ///
    /// Both names of `self` must be non-empty and match `other` case-insensitively, and every
    /// parameter type of `self` must appear somewhere in `other`. This is deliberately
    /// one-directional: a signature with fewer parameter types is compatible with one declaring
    /// a superset of them, but not the other way around. Order, length and duplicates are not
    /// considered.
    ///
    /// A signature is always compatible with itself, and never compatible with `None`.
    pub fn is_compatible_with<'a>(&self, other: impl Into<Option<&'a ActionSignature>>) -> bool {
        let Some(other) = other.into() else {
            return false;
        };

        if std::ptr::eq(self, other) {
            return true;
        }

        !self.controller.is_empty()
            && !self.action.is_empty()
            && eq_ignore_case(&self.controller, &other.controller)
            && eq_ignore_case(&self.action, &other.action)
            && self
                .parameter_types
                .iter()
                .all(|parameter_type| other.parameter_types.contains(parameter_type))
    }

    /// Parameter type identities with order and duplicates removed.
    fn type_set(&self) -> BTreeSet<TypeId> {
        self.parameter_types.iter().map(ParamType::id).collect()
    }
}

/// Lower-cased characters of `s`, used for all name comparisons.
fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    fold(a).eq(fold(b))
}

impl PartialEq for ActionSignature {
    fn eq(&self, other: &Self) -> bool {
        eq_ignore_case(&self.controller, &other.controller)
            && eq_ignore_case(&self.action, &other.action)
            && self.type_set() == other.type_set()
    }
}

impl Eq for ActionSignature {}

impl Hash for ActionSignature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        fold(&self.controller).collect::<String>().hash(state);
        fold(&self.action).collect::<String>().hash(state);
        self.type_set().hash(state);
    }
}

impl PartialOrd for ActionSignature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ActionSignature {
    fn cmp(&self, other: &Self) -> Ordering {
        fold(&self.controller)
            .cmp(fold(&other.controller))
            .then_with(|| fold(&self.action).cmp(fold(&other.action)))
            .then_with(|| self.type_set().cmp(&other.type_set()))
    }
}

impl Display for ActionSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.controller, self.action)?;

        if !self.parameter_types.is_empty() {
            write!(
                f,
                "({})",
                self.parameter_types
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            )?;
        }

        Ok(())
    }
}

impl FromStr for ActionSignature {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ActionSignature {
    type Error = SignatureError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}
