use crate::{
    compare::CompareOp,
    error::RuleError,
    rule::ast::{CompareRule, Rule},
};

///
/// Validate a rule tree before it is normalized or evaluated.
///
/// Rejects:
/// - `and` / `or` / `none_of` nodes without children
/// - comparisons with an empty field name
/// - `in` / `not_in` comparisons whose literal is not a list
///
pub fn validate(rule: &Rule) -> Result<(), RuleError> {
    match rule {
        Rule::True | Rule::False => Ok(()),
        Rule::And(children) => validate_children("and", children),
        Rule::Or(children) => validate_children("or", children),
        Rule::NoneOf(children) => validate_children("none_of", children),
        Rule::Not(inner) => validate(inner),
        Rule::Compare(cmp) => validate_compare(cmp),
    }
}

fn validate_children(node: &'static str, children: &[Rule]) -> Result<(), RuleError> {
    if children.is_empty() {
        return Err(RuleError::EmptyChildren { node });
    }

    children.iter().try_for_each(validate)
}

fn validate_compare(cmp: &CompareRule) -> Result<(), RuleError> {
    if cmp.field.is_empty() {
        return Err(RuleError::EmptyField);
    }

    let op = match cmp.op {
        CompareOp::In => "in",
        CompareOp::NotIn => "not_in",
        _ => return Ok(()),
    };

    if cmp.value.as_list().is_none() {
        return Err(RuleError::ExpectedList {
            field: cmp.field.clone(),
            op,
        });
    }

    Ok(())
}
