pub mod copy;
pub mod insert;
pub mod schema;

/// One entry of an ordered statement list. `requires` names statements that
/// must appear earlier in the same list, so dependency order is explicit
/// instead of being implied by array position.
#[derive(Debug, Clone)]
pub struct Statement {
    pub name: &'static str,
    pub sql: String,
    pub requires: &'static [&'static str],
}

/// Returns the first statement whose requirement is not satisfied by an
/// earlier entry of the list, with the missing requirement.
pub fn unmet_requirement(statements: &[Statement]) -> Option<(&Statement, &'static str)> {
    let mut seen: Vec<&str> = Vec::with_capacity(statements.len());
    for statement in statements {
        for requirement in statement.requires {
            if !seen.contains(requirement) {
                return Some((statement, requirement));
            }
        }
        seen.push(statement.name);
    }
    None
}
