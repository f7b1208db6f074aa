//! Lexical scopes for the type checker.
//!
//! Index 0 of the stack is the global scope, filled by assignments directly
//! under the stylesheet. Every style rule pushes a fresh environment on entry
//! and pops it on exit, so sibling rules never see each other's variables.

use std::collections::HashMap;

use crate::ast::types::ExpressionType;

const GLOBAL_SCOPE: usize = 0;

#[derive(Debug, Default)]
pub struct Environment {
    pub variable_lookup: HashMap<String, ExpressionType>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            variable_lookup: HashMap::new(),
        }
    }

    /// Records the type of `variable_name`, overwriting an earlier assignment.
    pub fn declare_variable(&mut self, variable_name: String, variable_type: ExpressionType) {
        self.variable_lookup.insert(variable_name, variable_type);
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<ExpressionType> {
        self.variable_lookup.get(variable_name).copied()
    }
}

#[derive(Debug)]
pub struct ScopeStack {
    environments: Vec<Environment>,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeStack {
    /// Creates a stack holding only the global scope.
    pub fn new() -> Self {
        ScopeStack {
            environments: vec![Environment::new()],
        }
    }

    pub fn enter_scope(&mut self) {
        self.environments.push(Environment::new());
    }

    /// Pops the innermost scope. The global scope is never popped.
    pub fn leave_scope(&mut self) {
        if self.environments.len() > 1 {
            self.environments.pop();
        }
    }

    /// Number of scopes currently tracked, the global one included.
    pub fn depth(&self) -> usize {
        self.environments.len()
    }

    fn current_environment(&mut self) -> &mut Environment {
        let index = self.environments.len() - 1;
        &mut self.environments[index]
    }

    /// Declares a variable in the innermost scope.
    pub fn declare_variable(&mut self, variable_name: String, variable_type: ExpressionType) {
        self.current_environment()
            .declare_variable(variable_name, variable_type);
    }

    /// Looks a variable up in the innermost scope, then in the global scope.
    ///
    /// Scopes between the two are not consulted.
    pub fn resolve(&self, variable_name: &str) -> Option<ExpressionType> {
        self.environments
            .last()
            .and_then(|environment| environment.get_variable(variable_name))
            .or_else(|| self.get_global(variable_name))
    }

    pub fn get_global(&self, variable_name: &str) -> Option<ExpressionType> {
        self.environments[GLOBAL_SCOPE].get_variable(variable_name)
    }

    /// Searches every tracked scope, innermost first, for a binding of
    /// `variable_name` whose type satisfies `predicate`.
    pub fn find_type<F>(&self, variable_name: &str, predicate: F) -> Option<ExpressionType>
    where
        F: Fn(ExpressionType) -> bool,
    {
        self.environments
            .iter()
            .rev()
            .filter_map(|environment| environment.get_variable(variable_name))
            .find(|variable_type| predicate(*variable_type))
    }
}

#[cfg(test)]
mod tests {
    use super::ScopeStack;
    use crate::ast::types::ExpressionType;

    #[test]
    fn test_global_visible_in_rule() {
        let mut scopes = ScopeStack::new();
        scopes.declare_variable(String::from("Link"), ExpressionType::Color);
        scopes.enter_scope();

        assert_eq!(scopes.resolve("Link"), Some(ExpressionType::Color));
    }

    #[test]
    fn test_rule_scope_popped_on_leave() {
        let mut scopes = ScopeStack::new();
        scopes.enter_scope();
        scopes.declare_variable(String::from("Width"), ExpressionType::Pixel);
        assert_eq!(scopes.resolve("Width"), Some(ExpressionType::Pixel));
        scopes.leave_scope();

        scopes.enter_scope();
        assert_eq!(scopes.resolve("Width"), None);
    }

    #[test]
    fn test_local_shadows_global() {
        let mut scopes = ScopeStack::new();
        scopes.declare_variable(String::from("Size"), ExpressionType::Pixel);
        scopes.enter_scope();
        scopes.declare_variable(String::from("Size"), ExpressionType::Percentage);

        assert_eq!(scopes.resolve("Size"), Some(ExpressionType::Percentage));
        assert_eq!(scopes.get_global("Size"), Some(ExpressionType::Pixel));
        assert_eq!(
            scopes.find_type("Size", |t| t == ExpressionType::Pixel),
            Some(ExpressionType::Pixel)
        );
    }

    #[test]
    fn test_intermediate_scope_not_resolved() {
        let mut scopes = ScopeStack::new();
        scopes.enter_scope();
        scopes.declare_variable(String::from("Outer"), ExpressionType::Bool);
        scopes.enter_scope();

        assert_eq!(scopes.resolve("Outer"), None);
        assert_eq!(scopes.depth(), 3);
    }

    #[test]
    fn test_global_scope_never_popped() {
        let mut scopes = ScopeStack::new();
        scopes.declare_variable(String::from("Flag"), ExpressionType::Bool);
        scopes.leave_scope();

        assert_eq!(scopes.depth(), 1);
        assert_eq!(scopes.resolve("Flag"), Some(ExpressionType::Bool));
    }
}
