use crate::Result;
use crate::traits::UserVariableStore;
use leaderboard::UserVariable;
use std::collections::HashMap;

/// A variable store filled in code.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    variables: HashMap<String, Vec<UserVariable>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, variable: UserVariable) {
        self.variables.entry(name.into()).or_default().push(variable);
    }

    pub fn with(mut self, name: impl Into<String>, variable: UserVariable) -> Self {
        self.insert(name, variable);
        self
    }
}

impl From<HashMap<String, Vec<UserVariable>>> for InMemoryStore {
    fn from(variables: HashMap<String, Vec<UserVariable>>) -> Self {
        Self { variables }
    }
}

#[async_trait::async_trait]
impl UserVariableStore for InMemoryStore {
    async fn user_variables(&self, name: &str) -> Result<Vec<UserVariable>> {
        Ok(self.variables.get(name).cloned().unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
