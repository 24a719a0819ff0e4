//! Fixture Catalog Builder
//!
//! Compiles a populated [`FixtureRegistry`] into an immutable
//! [`FixtureCatalog`]. Every definition that passes the filter is
//! constructed against the given fixture scope, so a fixture whose
//! dependencies are missing from the scope fails the whole compilation with
//! a discovery error. Partial catalogs are never returned.
//!
//! Grammar compilation:
//! - every `{placeholder}` in a template becomes an input cell, in template
//!   order, typed by the matching declared input or `string` otherwise
//! - declared inputs that do not appear in the template follow
//! - each cell is flagged `convertible` when the conversion rules know its type

use crate::filter::FixtureFilter;
use crate::registry::FixtureRegistry;
use crate::scope::FixtureScope;
use regex::Regex;
use std::sync::Arc;
use tale_domain::constants::DEFAULT_VALUE_TYPE;
use tale_domain::error::{Error, Result};
use tale_domain::ports::ObjectConverter;
use tale_domain::value_objects::{
    Cell, CellSpec, FixtureCatalog, FixtureModel, Grammar, GrammarModel,
};
use tracing::{debug, info};

/// Placeholder syntax in grammar templates
const PLACEHOLDER_PATTERN: &str = r"\{(\w+)\}";

/// Compiles registered fixtures into a catalog
pub struct FixtureCatalogBuilder {
    registry: FixtureRegistry,
    converter: Arc<dyn ObjectConverter>,
    filter: FixtureFilter,
}

impl FixtureCatalogBuilder {
    /// Create a builder over a populated registry
    pub fn new(registry: FixtureRegistry, converter: Arc<dyn ObjectConverter>) -> Self {
        Self {
            registry,
            converter,
            filter: FixtureFilter::allow_all(),
        }
    }

    /// Restrict the fixtures that enter the catalog
    pub fn with_filter(mut self, filter: FixtureFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Construct every fixture against `scope` and compile the catalog
    pub fn build(self, scope: &FixtureScope) -> Result<FixtureCatalog> {
        let compiler = GrammarCompiler::new(self.converter.as_ref())?;
        let mut models = Vec::with_capacity(self.registry.len());

        for definition in self.registry.definitions() {
            let key = definition.key();
            if !self.filter.matches(key.as_str()) {
                debug!(fixture = %key, "Fixture excluded by filter");
                continue;
            }

            let fixture = definition
                .create(scope)
                .map_err(|e| Error::discovery_from(key.as_str(), e))?;

            let grammars = fixture
                .grammars()
                .into_iter()
                .map(|grammar| compiler.compile(grammar))
                .collect();

            models.push(FixtureModel {
                key: key.clone(),
                title: fixture.title().unwrap_or_else(|| key.to_string()),
                grammars,
            });
        }

        info!(
            registered = self.registry.len(),
            compiled = models.len(),
            "Compiled fixture catalog"
        );
        Ok(FixtureCatalog::from(models))
    }
}

struct GrammarCompiler<'a> {
    converter: &'a dyn ObjectConverter,
    placeholder: Regex,
}

impl<'a> GrammarCompiler<'a> {
    fn new(converter: &'a dyn ObjectConverter) -> Result<Self> {
        let placeholder = Regex::new(PLACEHOLDER_PATTERN)
            .map_err(|e| Error::internal(format!("Invalid placeholder pattern: {e}")))?;
        Ok(Self {
            converter,
            placeholder,
        })
    }

    fn compile(&self, grammar: Grammar) -> GrammarModel {
        let mut declared = grammar.inputs;
        let mut inputs: Vec<Cell> = Vec::new();

        for capture in self.placeholder.captures_iter(&grammar.template) {
            let Some(name) = capture.get(1).map(|m| m.as_str()) else {
                continue;
            };
            if inputs.iter().any(|cell| cell.key == name) {
                continue;
            }
            let spec = match declared.iter().position(|cell| cell.key == name) {
                Some(position) => declared.remove(position),
                None => CellSpec::new(name, DEFAULT_VALUE_TYPE),
            };
            inputs.push(self.cell(spec));
        }
        inputs.extend(declared.into_iter().map(|spec| self.cell(spec)));

        GrammarModel {
            key: grammar.key,
            template: grammar.template,
            kind: grammar.kind,
            inputs,
            outputs: grammar.outputs.into_iter().map(|spec| self.cell(spec)).collect(),
        }
    }

    fn cell(&self, spec: CellSpec) -> Cell {
        Cell {
            convertible: self.converter.can_convert(&spec.value_type),
            key: spec.key,
            value_type: spec.value_type,
            default: spec.default,
        }
    }
}
