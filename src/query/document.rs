//! GraphQL operation documents.

use std::fmt;

use super::selection::SelectionSet;

/// The kind of GraphQL operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationType {
    /// A read operation.
    Query,
    /// A write operation.
    Mutation,
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => write!(f, "query"),
            Self::Mutation => write!(f, "mutation"),
        }
    }
}

/// A complete GraphQL document with a single named operation.
///
/// The variable signature is fixed per operation and rendered in the order
/// the variables were declared.
///
/// # Example
///
/// ```rust
/// use vendure_api::query::{Document, SelectionSet};
///
/// let mut root = SelectionSet::new();
/// root.object_with_args("product", "id: $id", |product| {
///     product.fields(["id", "name"]);
/// });
///
/// let document = Document::query("product")
///     .variable("id", "ID!")
///     .selection(root);
///
/// assert_eq!(
///     document.to_string(),
///     "query product($id: ID!) {\n  product(id: $id) {\n    id\n    name\n  }\n}\n"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    operation_type: OperationType,
    name: String,
    variables: Vec<(String, String)>,
    selection: SelectionSet,
}

impl Document {
    /// Starts a query document.
    #[must_use]
    pub fn query(name: impl Into<String>) -> Self {
        Self::new(OperationType::Query, name.into())
    }

    /// Starts a mutation document.
    #[must_use]
    pub fn mutation(name: impl Into<String>) -> Self {
        Self::new(OperationType::Mutation, name.into())
    }

    fn new(operation_type: OperationType, name: String) -> Self {
        Self {
            operation_type,
            name,
            variables: Vec::new(),
            selection: SelectionSet::new(),
        }
    }

    /// Declares a variable, e.g. `.variable("id", "ID!")` for `$id: ID!`.
    #[must_use]
    pub fn variable(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.variables.push((name.into(), type_name.into()));
        self
    }

    /// Sets the root selection set.
    #[must_use]
    pub fn selection(mut self, selection: SelectionSet) -> Self {
        self.selection = selection;
        self
    }

    /// Returns the operation type.
    #[must_use]
    pub const fn operation_type(&self) -> OperationType {
        self.operation_type
    }

    /// Returns the operation name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared variables as `(name, type)` pairs.
    #[must_use]
    pub fn variables(&self) -> &[(String, String)] {
        &self.variables
    }

    /// Returns the root selection set.
    #[must_use]
    pub const fn root(&self) -> &SelectionSet {
        &self.selection
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operation_type, self.name)?;
        if !self.variables.is_empty() {
            let signature = self
                .variables
                .iter()
                .map(|(name, type_name)| format!("${name}: {type_name}"))
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "({signature})")?;
        }
        f.write_str(" {\n")?;
        f.write_str(&self.selection.render(1))?;
        f.write_str("}\n")
    }
}
