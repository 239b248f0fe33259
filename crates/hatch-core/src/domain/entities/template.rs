//! Render context and the template substitution engine.
//!
//! The language is deliberately small:
//!
//! | Syntax                          | Meaning                                   |
//! |---------------------------------|-------------------------------------------|
//! | `{{name}}`                      | value of `name` (flags print `true`/`false`) |
//! | `{{#if name}} … {{/if}}`        | body emitted when `name` is truthy        |
//! | `{{#unless name}} … {{/unless}}`| body emitted when `name` is falsy         |
//!
//! Blocks nest. A block tag that sits alone on its line takes the whole line
//! with it, so a skipped block leaves no blank line behind. Anything between
//! `{{` and `}}` that is not one of the forms above (Elixir tuples such as
//! `{{:ok, pid}, ref}` for instance) is copied through untouched.
//!
//! Referencing a variable the context does not define is an error, never a
//! silent empty string.

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::domain::{
    entities::project_spec::ProjectSpec,
    error::DomainError,
    value_objects::{ProjectShape, ToolVersion},
};

/// A single value a template can refer to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextValue {
    Text(String),
    Flag(bool),
}

impl ContextValue {
    /// Flags are truthy when set; text is truthy when non-empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty(),
            Self::Flag(b) => *b,
        }
    }

    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => Cow::Borrowed(s),
            Self::Flag(b) => Cow::Owned(b.to_string()),
        }
    }
}

/// Variables available to every template of one generation run.
///
/// ## Project Variables
///
/// | Variable      | Example                              |
/// |---------------|--------------------------------------|
/// | `app`         | `hello_world`                        |
/// | `mod`         | `HelloWorld`                         |
/// | `version`     | `~> 1.15`                            |
/// | `sup`         | flag                                 |
/// | `umbrella`    | flag                                 |
/// | `in_umbrella` | flag, project lives in `apps/`       |
/// | `sup_app`     | `,\n      mod: {HelloWorld.Application, []}` or empty |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, ContextValue>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the full context for a validated project.
    pub fn for_project(spec: &ProjectSpec, version: &ToolVersion, shape: ProjectShape) -> Self {
        let supervised = spec.supervised() && shape != ProjectShape::Umbrella;
        let sup_app = if supervised {
            format!(",\n      mod: {{{}.Application, []}}", spec.module_name())
        } else {
            String::new()
        };

        Self::new()
            .with_text("app", spec.app_name())
            .with_text("mod", spec.module_name())
            .with_text("version", version.requirement())
            .with_flag("sup", supervised)
            .with_flag("umbrella", shape == ProjectShape::Umbrella)
            .with_flag("in_umbrella", shape == ProjectShape::Nested)
            .with_text("sup_app", sup_app)
    }

    pub fn with_text(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables
            .insert(key.into(), ContextValue::Text(value.into()));
        self
    }

    pub fn with_flag(mut self, key: impl Into<String>, value: bool) -> Self {
        self.variables.insert(key.into(), ContextValue::Flag(value));
        self
    }

    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.variables.get(key)
    }

    /// Render `source` against this context.
    ///
    /// The result ends with exactly one newline unless it is empty.
    pub fn render(&self, source: &str) -> Result<String, DomainError> {
        let tokens = tokenize(source);
        let nodes = parse(tokens)?;

        let mut out = String::with_capacity(source.len());
        self.render_nodes(&nodes, &mut out)?;

        let trimmed = out.trim_end_matches(['\n', '\r']);
        if trimmed.is_empty() {
            return Ok(String::new());
        }
        let mut normalized = trimmed.to_string();
        normalized.push('\n');
        Ok(normalized)
    }

    fn lookup(&self, name: &str) -> Result<&ContextValue, DomainError> {
        self.variables
            .get(name)
            .ok_or_else(|| DomainError::MissingVariable {
                name: name.to_string(),
            })
    }

    fn render_nodes(&self, nodes: &[Node<'_>], out: &mut String) -> Result<(), DomainError> {
        for node in nodes {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Var(name) => out.push_str(&self.lookup(name)?.as_text()),
                Node::Block {
                    name,
                    negated,
                    children,
                } => {
                    if self.lookup(name)?.is_truthy() != *negated {
                        self.render_nodes(children, out)?;
                    }
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tokenizer
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag<'a> {
    Var(&'a str),
    Open { name: &'a str, negated: bool },
    Close { negated: bool },
}

impl<'a> Tag<'a> {
    fn parse(inner: &'a str) -> Option<Self> {
        let inner = inner.trim();
        if let Some(rest) = inner.strip_prefix("#if ") {
            return is_identifier(rest.trim()).then(|| Tag::Open {
                name: rest.trim(),
                negated: false,
            });
        }
        if let Some(rest) = inner.strip_prefix("#unless ") {
            return is_identifier(rest.trim()).then(|| Tag::Open {
                name: rest.trim(),
                negated: true,
            });
        }
        match inner {
            "/if" => Some(Tag::Close { negated: false }),
            "/unless" => Some(Tag::Close { negated: true }),
            name if is_identifier(name) => Some(Tag::Var(name)),
            _ => None,
        }
    }

    fn is_block(&self) -> bool {
        !matches!(self, Tag::Var(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    Tag(Tag<'a>),
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    // Start of text not yet emitted.
    let mut cursor = 0;
    // Where to look for the next `{{`.
    let mut search = 0;

    while let Some(rel) = source[search..].find("{{") {
        let start = search + rel;
        let Some(close_rel) = source[start + 2..].find("}}") else {
            break;
        };
        let end = start + 2 + close_rel + 2;

        let Some(tag) = Tag::parse(&source[start + 2..end - 2]) else {
            search = start + 1;
            continue;
        };

        let mut text_end = start;
        let mut next = end;
        if tag.is_block() {
            let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);
            let line_end = source[end..].find('\n').map_or(source.len(), |i| end + i);
            let standalone = line_start >= cursor
                && source[line_start..start].trim().is_empty()
                && source[end..line_end].trim().is_empty();
            if standalone {
                text_end = line_start;
                next = (line_end + 1).min(source.len());
            }
        }

        if text_end > cursor {
            tokens.push(Token::Text(&source[cursor..text_end]));
        }
        tokens.push(Token::Tag(tag));
        cursor = next;
        search = next;
    }

    if cursor < source.len() {
        tokens.push(Token::Text(&source[cursor..]));
    }
    tokens
}

// ============================================================================
// Parser
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node<'a> {
    Text(&'a str),
    Var(&'a str),
    Block {
        name: &'a str,
        negated: bool,
        children: Vec<Node<'a>>,
    },
}

struct Frame<'a> {
    name: &'a str,
    negated: bool,
    children: Vec<Node<'a>>,
}

fn block_keyword(negated: bool) -> &'static str {
    if negated { "unless" } else { "if" }
}

fn parse(tokens: Vec<Token<'_>>) -> Result<Vec<Node<'_>>, DomainError> {
    let mut root = Vec::new();
    let mut stack: Vec<Frame<'_>> = Vec::new();

    for token in tokens {
        let node = match token {
            Token::Text(text) => Node::Text(text),
            Token::Tag(Tag::Var(name)) => Node::Var(name),
            Token::Tag(Tag::Open { name, negated }) => {
                stack.push(Frame {
                    name,
                    negated,
                    children: Vec::new(),
                });
                continue;
            }
            Token::Tag(Tag::Close { negated }) => {
                let frame = stack.pop().ok_or_else(|| DomainError::MalformedTemplate {
                    reason: format!("unexpected {{{{/{}}}}}", block_keyword(negated)),
                })?;
                if frame.negated != negated {
                    return Err(DomainError::MalformedTemplate {
                        reason: format!(
                            "{{{{/{}}}}} closes {{{{#{} {}}}}}",
                            block_keyword(negated),
                            block_keyword(frame.negated),
                            frame.name
                        ),
                    });
                }
                Node::Block {
                    name: frame.name,
                    negated: frame.negated,
                    children: frame.children,
                }
            }
        };

        match stack.last_mut() {
            Some(frame) => frame.children.push(node),
            None => root.push(node),
        }
    }

    if let Some(frame) = stack.pop() {
        return Err(DomainError::MalformedTemplate {
            reason: format!(
                "unclosed {{{{#{} {}}}}}",
                block_keyword(frame.negated),
                frame.name
            ),
        });
    }
    Ok(root)
}
