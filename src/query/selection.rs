//! Structural accumulator for GraphQL selection sets.
//!
//! Builders never concatenate braces by hand. They push [`Selection`] nodes
//! into a [`SelectionSet`] tree, and the tree is rendered to text once, so
//! every opened brace is closed in LIFO order regardless of which optional
//! blocks were toggled on.

/// Indentation used per nesting level when rendering.
pub const INDENT: &str = "  ";

/// A single entry in a selection set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// A field, optionally with arguments and a nested selection.
    Field {
        /// Field name.
        name: String,
        /// Argument list without parentheses, e.g. `id: $id`.
        arguments: Option<String>,
        /// Nested selection for object fields; `None` for leaves.
        selection: Option<SelectionSet>,
    },
    /// An inline fragment: `... on Type { ... }`.
    InlineFragment {
        /// The type condition.
        type_condition: String,
        /// The fragment's selection.
        selection: SelectionSet,
    },
    /// Verbatim selection text, typically a registry fragment.
    Raw(String),
}

/// An ordered list of selections.
///
/// # Example
///
/// ```rust
/// use vendure_api::query::SelectionSet;
///
/// let mut set = SelectionSet::new();
/// set.fields(["id", "name"])
///     .object("featuredAsset", |asset| {
///         asset.fields(["id", "preview"]);
///     });
///
/// assert_eq!(
///     set.render(0),
///     "id\nname\nfeaturedAsset {\n  id\n  preview\n}\n"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    items: Vec<Selection>,
}

impl SelectionSet {
    /// Creates an empty selection set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a leaf field.
    pub fn field(&mut self, name: impl Into<String>) -> &mut Self {
        self.items.push(Selection::Field {
            name: name.into(),
            arguments: None,
            selection: None,
        });
        self
    }

    /// Adds several leaf fields in order.
    pub fn fields<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.field(name);
        }
        self
    }

    /// Adds an object field whose selection is populated by `build`.
    pub fn object<F>(&mut self, name: impl Into<String>, build: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_object(name.into(), None, build)
    }

    /// Adds an object field with arguments, e.g. `product(id: $id) { ... }`.
    pub fn object_with_args<F>(
        &mut self,
        name: impl Into<String>,
        arguments: impl Into<String>,
        build: F,
    ) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_object(name.into(), Some(arguments.into()), build)
    }

    /// Adds an inline fragment, e.g. `... on Order { ... }`.
    pub fn on<F>(&mut self, type_condition: impl Into<String>, build: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        let mut selection = Self::new();
        build(&mut selection);
        self.items.push(Selection::InlineFragment {
            type_condition: type_condition.into(),
            selection,
        });
        self
    }

    /// Adds verbatim selection text. Blank text is ignored.
    pub fn raw(&mut self, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        if !text.trim().is_empty() {
            self.items.push(Selection::Raw(text));
        }
        self
    }

    /// Returns the selections in order.
    #[must_use]
    pub fn items(&self) -> &[Selection] {
        &self.items
    }

    /// Returns the number of top-level selections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing has been selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders the set, one selection per line, starting at `depth`.
    #[must_use]
    pub fn render(&self, depth: usize) -> String {
        let mut out = String::new();
        self.write(&mut out, depth);
        out
    }

    pub(crate) fn write(&self, out: &mut String, depth: usize) {
        for item in &self.items {
            item.write(out, depth);
        }
    }

    fn push_object<F>(&mut self, name: String, arguments: Option<String>, build: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        let mut selection = Self::new();
        build(&mut selection);
        self.items.push(Selection::Field {
            name,
            arguments,
            selection: Some(selection),
        });
        self
    }
}

impl Selection {
    fn write(&self, out: &mut String, depth: usize) {
        match self {
            Self::Field {
                name,
                arguments,
                selection,
            } => {
                push_indent(out, depth);
                out.push_str(name);
                if let Some(arguments) = arguments {
                    out.push('(');
                    out.push_str(arguments);
                    out.push(')');
                }
                match selection {
                    Some(selection) => write_block(out, selection, depth),
                    None => out.push('\n'),
                }
            }
            Self::InlineFragment {
                type_condition,
                selection,
            } => {
                push_indent(out, depth);
                out.push_str("... on ");
                out.push_str(type_condition);
                write_block(out, selection, depth);
            }
            Self::Raw(text) => write_raw(out, text, depth),
        }
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn write_block(out: &mut String, selection: &SelectionSet, depth: usize) {
    out.push_str(" {\n");
    selection.write(out, depth + 1);
    push_indent(out, depth);
    out.push_str("}\n");
}

/// Writes verbatim text line by line, re-indenting each line relative to
/// `depth` according to the braces the text itself opens and closes.
fn write_raw(out: &mut String, text: &str, depth: usize) {
    let mut level = 0usize;
    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let leading_closes = line.chars().take_while(|c| *c == '}').count();
        level = level.saturating_sub(leading_closes);

        push_indent(out, depth + level);
        out.push_str(line);
        out.push('\n');

        let opens = line.matches('{').count();
        let closes = line.matches('}').count() - leading_closes;
        level = (level + opens).saturating_sub(closes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_fields_render_one_per_line() {
        let mut set = SelectionSet::new();
        set.fields(["id", "name"]);
        assert_eq!(set.render(1), "  id\n  name\n");
    }

    #[test]
    fn test_nested_objects_close_in_order() {
        let mut set = SelectionSet::new();
        set.object("lines", |lines| {
            lines.field("id").object("productVariant", |variant| {
                variant.field("id").object("product", |product| {
                    product.field("slug");
                });
            });
        });

        let rendered = set.render(0);
        assert_eq!(
            rendered,
            "lines {\n  id\n  productVariant {\n    id\n    product {\n      slug\n    }\n  }\n}\n"
        );
    }

    #[test]
    fn test_arguments_and_inline_fragments() {
        let mut set = SelectionSet::new();
        set.object_with_args("addItemToOrder", "productVariantId: $id", |result| {
            result
                .on("Order", |order| {
                    order.field("id");
                })
                .on("ErrorResult", |error| {
                    error.fields(["errorCode", "message"]);
                });
        });

        let rendered = set.render(0);
        assert!(rendered.starts_with("addItemToOrder(productVariantId: $id) {\n"));
        assert!(rendered.contains("  ... on Order {\n    id\n  }\n"));
        assert!(rendered.contains("  ... on ErrorResult {\n    errorCode\n    message\n  }\n"));
    }

    #[test]
    fn test_raw_text_is_reindented() {
        let mut set = SelectionSet::new();
        set.raw("customFields {\n        color\n   size { unit }\n}");
        assert_eq!(
            set.render(1),
            "  customFields {\n    color\n    size { unit }\n  }\n"
        );
    }

    #[test]
    fn test_single_line_raw_text_is_verbatim() {
        let mut set = SelectionSet::new();
        set.raw("  mainUsdzAsset { id name source }  ");
        assert_eq!(set.render(2), "    mainUsdzAsset { id name source }\n");
    }

    #[test]
    fn test_blank_raw_text_is_ignored() {
        let mut set = SelectionSet::new();
        set.raw("").raw("  \n ");
        assert!(set.is_empty());
    }

    #[test]
    fn test_toggled_blocks_keep_braces_balanced() {
        for include in [true, false] {
            let mut set = SelectionSet::new();
            set.object("collection", |collection| {
                collection.field("id");
                if include {
                    collection.object_with_args("productVariants", "options: $o", |pv| {
                        pv.object("items", |items| {
                            items.field("id");
                        });
                    });
                }
            });
            let rendered = set.render(0);
            assert_eq!(rendered.matches('{').count(), rendered.matches('}').count());
        }
    }
}
