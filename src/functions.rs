//! Registry of placeholder functions
//!
//! Functions receive their parameters as strings and return a string. Any
//! parsing of numbers or dates happens inside the function body.

use std::collections::HashMap;
use std::fmt;

/// A registered placeholder function
pub type TextFunction = Box<dyn Fn(&[String]) -> String + Send + Sync>;

/// Name-keyed table of functions, last registration wins
#[derive(Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, TextFunction>,
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("FunctionRegistry")
            .field("functions", &names)
            .finish()
    }
}

impl FunctionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in `count` and `gender` functions
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("count", count);
        registry.register("gender", gender);
        registry
    }

    pub fn register<F>(&mut self, name: impl Into<String>, function: F)
    where
        F: Fn(&[String]) -> String + Send + Sync + 'static,
    {
        self.functions.insert(name.into(), Box::new(function));
    }

    pub fn get(&self, name: &str) -> Option<&TextFunction> {
        self.functions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Call `name` with `params`, `None` if no such function is registered
    pub fn call(&self, name: &str, params: &[String]) -> Option<String> {
        self.get(name).map(|function| function(params))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(|s| s.as_str())
    }
}

fn param(params: &[String], index: usize) -> &str {
    params.get(index).map(String::as_str).unwrap_or("")
}

/// `count(n, one, few, many)`
///
/// `one` for 1, `many` for 0 and anything above 4, `few` otherwise,
/// prefixed with `n`.
pub fn count(params: &[String]) -> String {
    let n = param(params, 0);
    let word = match n.trim().parse::<f64>() {
        Ok(value) if value == 1.0 => param(params, 1),
        Ok(value) if value == 0.0 || value > 4.0 => param(params, 3),
        _ => param(params, 2),
    };
    format!("{} {}", n, word)
}

/// `gender(value, male, female, neutral)`
pub fn gender(params: &[String]) -> String {
    match param(params, 0) {
        "male" => param(params, 1),
        "female" => param(params, 2),
        _ => param(params, 3),
    }
    .to_string()
}
