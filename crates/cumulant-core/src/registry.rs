//! Per-profile catalog of named functions.

use crate::definition::FunctionDefinition;
use crate::error::{FunctionError, OverwriteError};
use crate::fold::FoldFunction;
use crate::pure::PureFunction;
use crate::state::StateValue;
use std::collections::HashMap;
use tracing::warn;

/// Lifecycle of a registry entry. An absent name has no state at all.
///
/// Transitions: `PredefinedInactive` becomes `PredefinedActive` on first
/// `get`, or `UserDefined` if a `put` replaces it before any `get`.
/// Neither `PredefinedActive` nor `UserDefined` ever changes again,
/// except through `cleanup`, which removes everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    PredefinedInactive,
    PredefinedActive,
    UserDefined,
}

#[derive(Debug, Clone)]
struct Entry {
    def: FunctionDefinition,
    state: LifecycleState,
}

/// Catalog of named functions scoped to one profile.
///
/// Single-writer, non-interleaved access per profile is assumed; there
/// is no internal locking.
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    profile: String,
    entries: HashMap<String, Entry>,
}

impl FunctionRegistry {
    /// Create the registry for `profile`, seeded with the predefined
    /// catalog. A predefined definition that fails to build is skipped
    /// with a warning; seeding is never fatal.
    pub fn new(profile: &str) -> Self {
        let mut registry = FunctionRegistry {
            profile: profile.to_string(),
            entries: HashMap::new(),
        };
        registry.seed();
        registry
    }

    fn seed(&mut self) {
        for (name, build) in PREDEFINED {
            match build() {
                Ok(def) => {
                    self.entries.insert(
                        name.to_string(),
                        Entry {
                            def,
                            state: LifecycleState::PredefinedInactive,
                        },
                    );
                }
                Err(err) => {
                    warn!(
                        profile = %self.profile,
                        function = name,
                        error = %err,
                        "skipping predefined function that failed to build"
                    );
                }
            }
        }
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Look up a function by name. The first `get` of a predefined entry
    /// latches it active, after which it can no longer be overwritten.
    pub fn get(&mut self, name: &str) -> Option<&FunctionDefinition> {
        let entry = self.entries.get_mut(name)?;
        if entry.state == LifecycleState::PredefinedInactive {
            entry.state = LifecycleState::PredefinedActive;
        }
        Some(&entry.def)
    }

    /// Store a user definition under `name`.
    ///
    /// Succeeds for an absent name, or for a predefined entry that has
    /// never been read (the predefined definition is dropped). Fails once
    /// the name is active or already user-defined.
    pub fn put(&mut self, name: &str, def: FunctionDefinition) -> Result<(), OverwriteError> {
        match self.entries.get(name).map(|entry| entry.state) {
            None | Some(LifecycleState::PredefinedInactive) => {
                self.entries.insert(
                    name.to_string(),
                    Entry {
                        def,
                        state: LifecycleState::UserDefined,
                    },
                );
                Ok(())
            }
            Some(LifecycleState::PredefinedActive) | Some(LifecycleState::UserDefined) => {
                Err(OverwriteError {
                    profile: self.profile.clone(),
                    name: name.to_string(),
                })
            }
        }
    }

    /// Discard every entry. The predefined catalog is not reseeded; after
    /// cleanup every name, predefined or not, is absent.
    pub fn cleanup(&mut self) {
        self.entries.clear();
    }

    /// Lifecycle state of `name`, or `None` if absent. Read-only: unlike
    /// `get`, this does not latch activation.
    pub fn lifecycle(&self, name: &str) -> Option<LifecycleState> {
        self.entries.get(name).map(|entry| entry.state)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

type Builder = fn() -> Result<FunctionDefinition, FunctionError>;

/// The predefined catalog, seeded into every new registry.
const PREDEFINED: [(&str, Builder); 11] = [
    ("count", count),
    ("sum", sum),
    ("avg", avg),
    ("max", max),
    ("min", min),
    ("innerproduct", innerproduct),
    ("midpoint", midpoint),
    ("product", product),
    ("distance", distance),
    ("dist2line", dist2line),
    ("dist2lnseg", dist2lnseg),
];

fn count() -> Result<FunctionDefinition, FunctionError> {
    Ok(FoldFunction::new(
        "count",
        &["x"],
        &["c"],
        &[StateValue::number(0.0)],
        &["c + 1"],
        "c",
    )?
    .into())
}

fn sum() -> Result<FunctionDefinition, FunctionError> {
    Ok(FoldFunction::new(
        "sum",
        &["x"],
        &["s"],
        &[StateValue::number(0.0)],
        &["s + x"],
        "s",
    )?
    .into())
}

fn avg() -> Result<FunctionDefinition, FunctionError> {
    Ok(FoldFunction::new(
        "avg",
        &["x"],
        &["s", "c"],
        &[StateValue::number(0.0), StateValue::number(0.0)],
        &["s + x", "c + 1"],
        "s / c",
    )?
    .into())
}

fn max() -> Result<FunctionDefinition, FunctionError> {
    Ok(FoldFunction::new(
        "max",
        &["x"],
        &["m"],
        &[StateValue::NegInfinity],
        &["if (x > m) then x else m"],
        "m",
    )?
    .into())
}

fn min() -> Result<FunctionDefinition, FunctionError> {
    Ok(FoldFunction::new(
        "min",
        &["x"],
        &["m"],
        &[StateValue::PosInfinity],
        &["if (x < m) then x else m"],
        "m",
    )?
    .into())
}

fn innerproduct() -> Result<FunctionDefinition, FunctionError> {
    Ok(FoldFunction::new(
        "innerproduct",
        &["x", "y"],
        &["z"],
        &[StateValue::number(0.0)],
        &["z + x * y"],
        "z",
    )?
    .into())
}

fn midpoint() -> Result<FunctionDefinition, FunctionError> {
    Ok(FoldFunction::new(
        "midpoint",
        &["p", "q"],
        &["m", "c"],
        &[StateValue::vector([0.0, 0.0, 0.0]), StateValue::number(0.0)],
        &["m + (p + q) / 2", "c + 1"],
        "m / c",
    )?
    .into())
}

fn product() -> Result<FunctionDefinition, FunctionError> {
    Ok(PureFunction::new("product", &["x", "y"], "x * y")?.into())
}

fn distance() -> Result<FunctionDefinition, FunctionError> {
    Ok(PureFunction::new("distance", &["p", "q"], "mag(p - q)")?.into())
}

fn dist2line() -> Result<FunctionDefinition, FunctionError> {
    Ok(PureFunction::new(
        "dist2line",
        &["pt", "root", "dir"],
        "mag(dir xprod (root - pt))",
    )?
    .into())
}

/// Point-to-segment distance: the projection of `pt` onto `tail -> head`
/// is clamped to the segment; outside it the distance to the nearer end
/// applies, inside it the perpendicular distance.
fn dist2lnseg() -> Result<FunctionDefinition, FunctionError> {
    Ok(PureFunction::new(
        "dist2lnseg",
        &["pt", "tail", "head"],
        "if (pt - tail) * (head - tail) <= 0 then mag(pt - tail) \
         else if (pt - head) * (head - tail) >= 0 then mag(pt - head) \
         else mag((head - tail) xprod (tail - pt)) / mag(head - tail)",
    )?
    .into())
}
