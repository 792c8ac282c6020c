use crate::rule::{
    ast::{CompareRule, Rule},
    value::Value,
};

///
/// Normalize a rule into a canonical, deterministic form.
///
/// Normalization guarantees:
/// - Logical equivalence is preserved
/// - `none_of(a, b)` is rewritten to `not(or(a, b))`
/// - Nested AND / OR nodes are flattened
/// - Neutral elements are removed (True / False)
/// - Double negation is eliminated, `not` of a constant is folded
/// - Child rules are deterministically ordered
///
/// Child reordering is safe because rule evaluation has no side effects.
/// Callers validate first; an AND / OR left without children after neutral
/// elements are removed collapses to its identity (True / False).
///
#[must_use]
pub fn normalize(rule: &Rule) -> Rule {
    match rule {
        Rule::True => Rule::True,
        Rule::False => Rule::False,

        Rule::And(children) => normalize_and(children),
        Rule::Or(children) => normalize_or(children),
        Rule::Not(inner) => normalize_not(inner),
        Rule::NoneOf(children) => normalize_not(&Rule::Or(children.clone())),

        Rule::Compare(cmp) => Rule::Compare(cmp.clone()),
    }
}

///
/// Normalize a NOT expression.
///
///     NOT (NOT x)  →  x
///     NOT True     →  False
///     NOT False    →  True
///
fn normalize_not(inner: &Rule) -> Rule {
    match normalize(inner) {
        Rule::Not(double) => *double,
        Rule::True => Rule::False,
        Rule::False => Rule::True,
        other => Rule::Not(Box::new(other)),
    }
}

///
/// Normalize an AND expression.
///
/// Rules:
/// - AND(True, x)        → x
/// - AND(False, x)       → False
/// - AND(AND(a, b), c)   → AND(a, b, c)
/// - AND(x)              → x
///
fn normalize_and(children: &[Rule]) -> Rule {
    let mut out = Vec::new();

    for child in children {
        match normalize(child) {
            Rule::True => {}
            Rule::False => return Rule::False,
            Rule::And(grandchildren) => out.extend(grandchildren),
            other => out.push(other),
        }
    }

    collapse(out, Rule::True, Rule::And)
}

///
/// Normalize an OR expression.
///
/// Rules:
/// - OR(False, x)       → x
/// - OR(True, x)        → True
/// - OR(OR(a, b), c)    → OR(a, b, c)
/// - OR(x)              → x
///
fn normalize_or(children: &[Rule]) -> Rule {
    let mut out = Vec::new();

    for child in children {
        match normalize(child) {
            Rule::False => {}
            Rule::True => return Rule::True,
            Rule::Or(grandchildren) => out.extend(grandchildren),
            other => out.push(other),
        }
    }

    collapse(out, Rule::False, Rule::Or)
}

fn collapse(mut out: Vec<Rule>, identity: Rule, wrap: fn(Vec<Rule>) -> Rule) -> Rule {
    match out.len() {
        0 => identity,
        1 => out.remove(0),
        _ => {
            out.sort_by_cached_key(sort_key);
            wrap(out)
        }
    }
}

///
/// Generate a deterministic, length-prefixed key for a rule.
///
/// This key is used **only for sorting**, not for display.
///
fn sort_key(rule: &Rule) -> Vec<u8> {
    let mut out = Vec::new();
    encode_rule_key(&mut out, rule);
    out
}

const RULE_TRUE: u8 = 0x00;
const RULE_FALSE: u8 = 0x01;
const RULE_AND: u8 = 0x02;
const RULE_OR: u8 = 0x03;
const RULE_NOT: u8 = 0x04;
const RULE_COMPARE: u8 = 0x05;
const RULE_NONE_OF: u8 = 0x06;

const VALUE_NULL: u8 = 0x00;
const VALUE_BOOL: u8 = 0x01;
const VALUE_INT: u8 = 0x02;
const VALUE_TEXT: u8 = 0x03;
const VALUE_LIST: u8 = 0x04;

// Encode rule keys with length-prefixed segments to avoid collisions.
fn encode_rule_key(out: &mut Vec<u8>, rule: &Rule) {
    match rule {
        Rule::True => out.push(RULE_TRUE),
        Rule::False => out.push(RULE_FALSE),
        Rule::And(children) => push_children(out, RULE_AND, children),
        Rule::Or(children) => push_children(out, RULE_OR, children),
        Rule::NoneOf(children) => push_children(out, RULE_NONE_OF, children),
        Rule::Not(inner) => {
            out.push(RULE_NOT);
            push_rule(out, inner);
        }
        Rule::Compare(CompareRule { field, op, value }) => {
            out.push(RULE_COMPARE);
            push_str(out, field);
            out.push(op.tag());
            encode_value_key(out, value);
        }
    }
}

fn encode_value_key(out: &mut Vec<u8>, value: &Value) {
    match value {
        Value::Null => out.push(VALUE_NULL),
        Value::Bool(b) => {
            out.push(VALUE_BOOL);
            out.push(u8::from(*b));
        }
        Value::Int(n) => {
            out.push(VALUE_INT);
            // flip the sign bit so byte order matches numeric order
            out.extend_from_slice(&(n.cast_unsigned() ^ (1 << 63)).to_be_bytes());
        }
        Value::Text(text) => {
            out.push(VALUE_TEXT);
            push_str(out, text);
        }
        Value::List(items) => {
            out.push(VALUE_LIST);
            push_len(out, items.len());
            for item in items {
                encode_value_key(out, item);
            }
        }
    }
}

fn push_children(out: &mut Vec<u8>, tag: u8, children: &[Rule]) {
    out.push(tag);
    push_len(out, children.len());
    for child in children {
        push_rule(out, child);
    }
}

fn push_rule(out: &mut Vec<u8>, rule: &Rule) {
    let mut nested = Vec::new();
    encode_rule_key(&mut nested, rule);
    push_bytes(out, &nested);
}

fn push_str(out: &mut Vec<u8>, s: &str) {
    push_bytes(out, s.as_bytes());
}

fn push_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    push_len(out, bytes.len());
    out.extend_from_slice(bytes);
}

fn push_len(out: &mut Vec<u8>, len: usize) {
    let len = u32::try_from(len).unwrap_or(u32::MAX);
    out.extend_from_slice(&len.to_be_bytes());
}
