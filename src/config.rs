use alloc::{string::String, string::ToString as _, sync::Arc, vec::Vec};
use serde_json::Value as JsonValue;

use crate::{container::Container, errors::ResolveErrorKind};

/// Container keys searched, in order, for configuration data
pub const CONFIG_KEYS: [&str; 2] = ["config", "configuration"];

/// Order in which parameter resolution sources are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precedence {
    /// Declared types first, then parameter names, then defaults
    #[default]
    TypeFirst,
    /// Explicit dependency names from configuration first, declared types for the rest
    ConfigFirst,
}

/// What to do with a typed dependency missing from the container and without default value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingDependency {
    #[default]
    Fail,
    /// Construct the dependency if it's registered with a public constructor without parameters
    Construct,
}

/// Config for a factory
/// ## Fields
/// - `precedence`:
///   Order of resolution sources, see [`Precedence`].
/// - `missing_dependency`:
///   Policy for typed dependencies the container doesn't have, see [`MissingDependency`].
///
///   Construction of missing dependencies is opt-in and doesn't recurse:
///   only dependencies without constructor parameters are constructed.
/// - `section`:
///   Configuration section holding dependency names per type, used with [`Precedence::ConfigFirst`].
///   Names are read from `config.dependencies.<section>.<type>` or `config.<section>.<type>`.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub precedence: Precedence,
    pub missing_dependency: MissingDependency,
    pub section: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precedence: Precedence::default(),
            missing_dependency: MissingDependency::default(),
            section: "autowiring",
        }
    }
}

/// Reads the configured dependency names of `target`.
///
/// Returns `None` if the container has no configuration or the configuration has no (or an empty) list for `target`.
pub(crate) fn configured_names(
    container: &dyn Container,
    section: &str,
    target: &'static str,
) -> Result<Option<Arc<[String]>>, ResolveErrorKind> {
    let Some(config) = CONFIG_KEYS
        .iter()
        .find(|key| container.has(key))
        .and_then(|key| container.get(key).ok())
        .and_then(|value| value.downcast::<JsonValue>().ok())
    else {
        return Ok(None);
    };

    let names = config
        .get("dependencies")
        .and_then(|dependencies| dependencies.get(section))
        .and_then(|types| types.get(target))
        .or_else(|| config.get(section).and_then(|types| types.get(target)));

    match names {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::Array(names)) if names.is_empty() => Ok(None),
        Some(JsonValue::Array(names)) => names
            .iter()
            .enumerate()
            .map(|(position, name)| match name {
                JsonValue::String(name) => Ok(name.clone()),
                other => Err(ResolveErrorKind::InvalidDependencyName {
                    target,
                    position,
                    found: other.to_string(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|names| Some(Arc::from(names))),
        Some(other) => Err(ResolveErrorKind::InvalidDependencyName {
            target,
            position: 0,
            found: other.to_string(),
        }),
    }
}
