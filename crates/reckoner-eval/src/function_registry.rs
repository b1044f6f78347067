use crate::function::Function;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Name → function table consulted by the interpreter.
///
/// The registry is owned by the engine instance (single caller, no ambient
/// global), and lookups are case-insensitive: names register in lowercase.
pub struct FunctionRegistry {
    map: FxHashMap<&'static str, Arc<dyn Function>>,
}

impl FunctionRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// A registry pre-populated with the builtin expression functions.
    pub fn with_builtins() -> Self {
        let mut reg = Self::new();
        crate::builtins::register_builtins(&mut reg);
        reg
    }

    pub fn register(&mut self, f: Arc<dyn Function>) {
        debug_assert!(
            f.name().chars().all(|c| c.is_ascii_lowercase()),
            "function names register in lowercase"
        );
        self.map.insert(f.name(), f);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Function>> {
        if let Some(f) = self.map.get(name) {
            return Some(Arc::clone(f));
        }
        let lowered = name.to_ascii_lowercase();
        self.map.get(lowered.as_str()).map(Arc::clone)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_registered() {
        let reg = FunctionRegistry::with_builtins();
        for name in ["gcd", "lcm", "ncr", "npr"] {
            assert!(reg.get(name).is_some(), "missing builtin {name}");
        }
        assert!(reg.get("sin").is_none());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let reg = FunctionRegistry::with_builtins();
        assert!(reg.get("GCD").is_some());
        assert!(reg.get("Ncr").is_some());
    }
}
