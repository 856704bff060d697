/*
    Addition context and the process-wide configuration
*/

use std::fmt;
use std::str::FromStr;

use log::debug;
use parking_lot::RwLock;

use crate::{FuzzyError, Result};

/// The rule used when adding two fuzzy numbers.
///
/// Scalar arithmetic never depends on this setting.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AdditionMethod {
    /// Breakpoint-wise interval arithmetic: `(a1 + b1, ..., a4 + b4)`.
    /// Both operands must share their shape functions.
    #[default]
    Default,
    /// Zadeh's sup-min extension principle, evaluated on alpha-cuts.
    /// Agrees with `Default` whenever the shapes match and also handles
    /// operands with different shapes.
    ExtensionPrinciple,
    /// Addition under the weakest (drastic) t-norm.
    /// Cores add, left and right spreads combine by maximum.
    WeakestTNorm,
}

impl AdditionMethod {
    /// Every registered method, in registration order.
    pub const ALL: [AdditionMethod; 3] = [
        AdditionMethod::Default,
        AdditionMethod::ExtensionPrinciple,
        AdditionMethod::WeakestTNorm,
    ];

    /// Returns the configuration identifier of this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            AdditionMethod::Default => "default",
            AdditionMethod::ExtensionPrinciple => "extension_principle",
            AdditionMethod::WeakestTNorm => "weakest_t_norm",
        }
    }
}

impl fmt::Display for AdditionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdditionMethod {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|m| m.as_str()).collect();
                FuzzyError::InvalidConfiguration(format!(
                    "unknown fuzzy addition method {s:?}, expected one of {known:?}"
                ))
            })
    }
}

/// Settings for fuzzy arithmetic.
///
/// Arithmetic between two fuzzy numbers can be carried out in more
/// than one way. A `FuzzyContext` selects the rule explicitly and is
/// passed by reference to `try_add`. The operator forms (`x + y`) use
/// `FuzzyContext::global()` instead.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FuzzyContext {
    addition: AdditionMethod,
}

impl FuzzyContext {
    /// Creates a new context using `AdditionMethod::Default`.
    pub fn new() -> Self {
        Self {
            addition: AdditionMethod::Default,
        }
    }

    /// Creates a context from the current process-wide setting.
    pub fn global() -> Self {
        Self {
            addition: get_fuzzy_addition_method(),
        }
    }

    /// Sets the addition method.
    pub fn with_addition_method(mut self, method: AdditionMethod) -> Self {
        self.addition = method;
        self
    }

    /// Returns the addition method.
    pub fn addition_method(&self) -> AdditionMethod {
        self.addition
    }
}

// Process-wide addition method.
// Read by every operator-based addition at call time.
static ADDITION_METHOD: RwLock<AdditionMethod> =
    parking_lot::const_rwlock(AdditionMethod::Default);

/// Returns the process-wide fuzzy addition method.
pub fn get_fuzzy_addition_method() -> AdditionMethod {
    *ADDITION_METHOD.read()
}

/// Sets the process-wide fuzzy addition method by identifier,
/// returning the previous method.
///
/// The change affects only additions performed afterwards.
/// Concurrent changes are memory-safe but unordered with respect
/// to additions running on other threads.
pub fn set_fuzzy_addition_method(method: &str) -> Result<AdditionMethod> {
    let method = method.parse::<AdditionMethod>()?;
    let previous = std::mem::replace(&mut *ADDITION_METHOD.write(), method);
    debug!("fuzzy addition method: {previous} -> {method}");
    Ok(previous)
}

/// Restores the process-wide fuzzy addition method to its default.
pub fn reset_fuzzy_addition_method() {
    *ADDITION_METHOD.write() = AdditionMethod::default();
    debug!("fuzzy addition method reset to {}", AdditionMethod::default());
}
