//! Grammar declarations and their compiled form
//!
//! A fixture declares [`Grammar`]s; the catalog builder compiles each one into
//! a [`GrammarModel`] whose cells record whether the active conversion rules
//! can handle their value type.

use serde::{Deserialize, Serialize};

/// Shape of a grammar as seen by a test script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrammarKind {
    /// A single step taking inputs, optionally producing outputs
    Sentence,
    /// An assertion evaluating to true or false
    Fact,
    /// A sentence applied to every row of a table
    Table,
}

/// A cell declared by a fixture author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSpec {
    /// Cell name, matching a `{placeholder}` in the template for inputs
    pub key: String,
    /// Value type resolved through the conversion rules
    pub value_type: String,
    /// Default raw value
    pub default: Option<String>,
}

impl CellSpec {
    /// Create a cell without a default value
    pub fn new(key: impl Into<String>, value_type: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value_type: value_type.into(),
            default: None,
        }
    }

    /// Set the default raw value
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// A grammar declared by a fixture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grammar {
    /// Grammar key, unique within its fixture
    pub key: String,
    /// Template text with `{cell}` placeholders
    pub template: String,
    /// Grammar shape
    pub kind: GrammarKind,
    /// Declared input cells
    pub inputs: Vec<CellSpec>,
    /// Declared output cells
    pub outputs: Vec<CellSpec>,
}

impl Grammar {
    /// Create a grammar of the given kind
    pub fn new(kind: GrammarKind, key: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            template: template.into(),
            kind,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Create a sentence grammar
    pub fn sentence(key: impl Into<String>, template: impl Into<String>) -> Self {
        Self::new(GrammarKind::Sentence, key, template)
    }

    /// Create a fact grammar
    pub fn fact(key: impl Into<String>, template: impl Into<String>) -> Self {
        Self::new(GrammarKind::Fact, key, template)
    }

    /// Create a table grammar
    pub fn table(key: impl Into<String>, template: impl Into<String>) -> Self {
        Self::new(GrammarKind::Table, key, template)
    }

    /// Declare an input cell
    pub fn with_input(mut self, cell: CellSpec) -> Self {
        self.inputs.push(cell);
        self
    }

    /// Declare an output cell
    pub fn with_output(mut self, cell: CellSpec) -> Self {
        self.outputs.push(cell);
        self
    }
}

/// A compiled cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Cell name
    pub key: String,
    /// Value type
    pub value_type: String,
    /// Default raw value
    pub default: Option<String>,
    /// Whether the conversion rules handle `value_type`
    pub convertible: bool,
}

/// A compiled grammar with its input and output shapes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarModel {
    /// Grammar key
    pub key: String,
    /// Template text
    pub template: String,
    /// Grammar shape
    pub kind: GrammarKind,
    /// Input cells, in template order followed by extra declared inputs
    pub inputs: Vec<Cell>,
    /// Output cells
    pub outputs: Vec<Cell>,
}

impl GrammarModel {
    /// Find an input cell by key
    pub fn input(&self, key: &str) -> Option<&Cell> {
        self.inputs.iter().find(|cell| cell.key == key)
    }
}
