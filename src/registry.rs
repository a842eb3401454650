use std::collections::HashMap;

/// The fixed set of protocol methods this server knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Initialize,
    ToolsList,
    ToolsCall,
}

/// Immutable method-name → handler table.
///
/// Built once at startup; lookups are exact, case-sensitive string matches.
#[derive(Debug, Clone)]
pub struct MethodRegistry {
    methods: HashMap<String, Method>,
}

impl MethodRegistry {
    pub fn builder() -> MethodRegistryBuilder {
        MethodRegistryBuilder::default()
    }

    /// `initialize`, `tools/list`, `tools/call`.
    pub fn baseline() -> Self {
        Self::builder()
            .register("initialize", Method::Initialize)
            .register("tools/list", Method::ToolsList)
            .register("tools/call", Method::ToolsCall)
            .build()
    }

    pub fn lookup(&self, name: &str) -> Option<Method> {
        self.methods.get(name).copied()
    }

    /// Registered method names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct MethodRegistryBuilder {
    methods: HashMap<String, Method>,
}

impl MethodRegistryBuilder {
    /// Register `name`. A later registration of the same name wins.
    pub fn register(mut self, name: impl Into<String>, method: Method) -> Self {
        self.methods.insert(name.into(), method);
        self
    }

    pub fn build(self) -> MethodRegistry {
        MethodRegistry { methods: self.methods }
    }
}
