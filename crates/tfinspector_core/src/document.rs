//! Typed document model for HCL configuration files.
//!
//! The HCL native syntax is parsed with `hcl-rs` and lowered straight into a small
//! model that only keeps what extraction can use:
//!
//! - blocks with their kind, labels and body
//! - attributes whose value is tagged as a primitive literal, an object literal, or
//!   [`Value::Unsupported`] for anything that would need evaluation
//!
//! Blocks and attributes are each kept in textual order, in separate lists. Their
//! relative order within a body is not kept.
//!
//! Nothing is evaluated. References, function calls and interpolated templates have no
//! value without a variable context, so they are recorded as unsupported rather than
//! reported as errors.

use std::collections::HashSet;

use hcl::BlockLabel;
use hcl::expr::{Expression, ObjectKey, TemplateExpr};
use hcl::template::{Element, Template};
use indexmap::IndexMap;
use log::trace;

use crate::error::SyntaxError;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// String, number or bool, rendered as its literal text
    Primitive(String),
    /// Object literal whose leaves are all literals
    Object(IndexMap<String, Value>),
    /// Any other shape: null, tuples, references, function calls, interpolations
    Unsupported,
}

impl Value {
    pub fn as_primitive(&self) -> Option<&str> {
        match self {
            Value::Primitive(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(fields) => Some(fields),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: String,
    pub labels: Vec<String>,
    pub body: Body,
}

impl Block {
    pub fn first_label(&self) -> Option<&str> {
        self.labels.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Body {
    pub attributes: Vec<Attribute>,
    pub blocks: Vec<Block>,
}

impl Body {
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.iter().find(|a| a.name == name).map(|a| &a.value)
    }

    pub fn blocks_of<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Block> + 'a {
        self.blocks.iter().filter(move |b| b.kind == kind)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub body: Body,
}

impl Document {
    /// Top-level blocks of any of the given kinds, in document order.
    pub fn blocks_matching<'a>(
        &'a self,
        kinds: &'a [&'a str],
    ) -> impl Iterator<Item = &'a Block> + 'a {
        self.body.blocks.iter().filter(move |b| kinds.contains(&b.kind.as_str()))
    }
}

/// Parse HCL source text into a [`Document`].
pub fn parse(contents: &str) -> Result<Document, SyntaxError> {
    let body = hcl::parse(contents).map_err(|e| SyntaxError::new(e.to_string()))?;
    let body = lower_body(&body)?;
    trace!(
        "Parsed document with {} top-level blocks and {} attributes",
        body.blocks.len(),
        body.attributes.len()
    );
    Ok(Document { body })
}

fn lower_body(body: &hcl::Body) -> Result<Body, SyntaxError> {
    let mut lowered = Body::default();
    let mut seen = HashSet::new();

    for attr in body.attributes() {
        let name = attr.key();
        if !seen.insert(name.to_string()) {
            return Err(SyntaxError::new(format!(
                "attribute \"{name}\" redefined in the same body"
            )));
        }
        lowered
            .attributes
            .push(Attribute { name: name.to_string(), value: lower_value(attr.expr()) });
    }

    for block in body.blocks() {
        let labels = block.labels().iter().map(BlockLabel::as_str).map(String::from).collect();
        lowered.blocks.push(Block {
            kind: block.identifier().to_string(),
            labels,
            body: lower_body(block.body())?,
        });
    }

    Ok(lowered)
}

fn lower_value(expr: &Expression) -> Value {
    match expr {
        Expression::String(s) => Value::Primitive(s.clone()),
        Expression::Number(n) => Value::Primitive(n.to_string()),
        Expression::Bool(b) => Value::Primitive(b.to_string()),
        Expression::TemplateExpr(template) => match literal_template(template) {
            Some(s) => Value::Primitive(s),
            None => Value::Unsupported,
        },
        Expression::Parenthesis(inner) => lower_value(inner),
        Expression::Object(object) => {
            // A single non-literal leaf leaves the whole object without a value.
            if !object.values().all(is_literal) {
                return Value::Unsupported;
            }
            let mut fields = IndexMap::new();
            for (key, value) in object.iter() {
                match object_key(key) {
                    Some(key) => {
                        fields.insert(key, lower_value(value));
                    }
                    None => return Value::Unsupported,
                }
            }
            Value::Object(fields)
        }
        _ => Value::Unsupported,
    }
}

fn object_key(key: &ObjectKey) -> Option<String> {
    match key {
        ObjectKey::Identifier(ident) => Some(ident.as_str().to_string()),
        ObjectKey::Expression(expr) => lower_value(expr).as_primitive().map(String::from),
        _ => None,
    }
}

/// Whether an expression has a value without any evaluation context.
fn is_literal(expr: &Expression) -> bool {
    match expr {
        Expression::Null | Expression::Bool(_) | Expression::Number(_) | Expression::String(_) => {
            true
        }
        Expression::Array(items) => items.iter().all(is_literal),
        Expression::Object(object) => object.values().all(is_literal),
        Expression::TemplateExpr(template) => literal_template(template).is_some(),
        Expression::Parenthesis(inner) => is_literal(inner),
        _ => false,
    }
}

/// The text of a template with no interpolations or directives.
fn literal_template(template: &TemplateExpr) -> Option<String> {
    let parsed = Template::from_expr(template).ok()?;
    let mut text = String::new();
    for element in parsed.elements() {
        match element {
            Element::Literal(s) => text.push_str(s),
            _ => return None,
        }
    }
    Some(text)
}
