use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::Value;

/// The record stored in a scope under an identifier.
///
/// A binding's mutability is fixed at declaration and enforced on every
/// reassignment. Redeclaring the name replaces the whole slot, including the
/// flag.
#[derive(Debug)]
pub struct Binding {
    /// The current value.
    pub value:   Value,
    /// Whether the binding was declared with `mut`.
    pub mutable: bool,
}

/// Why an assignment was rejected.
#[derive(Debug, PartialEq, Eq)]
pub enum AssignError {
    /// No scope in the chain holds the name.
    NotFound,
    /// The nearest slot holding the name is immutable.
    Immutable,
}

/// A single frame in the environment chain.
///
/// Scopes form a parent-linked chain rooted at the global scope: one frame
/// per function call, per block, per branch of a conditional, and per loop
/// iteration. Lookup and assignment walk outward; declaration is always
/// local. Frames are shared (`Rc<RefCell<_>>`) because function values keep
/// their captured environment alive beyond the scope's own lifetime.
#[derive(Debug)]
pub struct Env {
    slots:  HashMap<String, Binding>,
    parent: Option<Rc<RefCell<Env>>>,
}

impl Env {
    /// Creates the global scope: no parent, alive for the whole program.
    ///
    /// # Example
    /// ```
    /// use pyrustlang::interpreter::{env::Env, value::Value};
    ///
    /// let globals = Env::global();
    /// globals.borrow_mut().declare("x", Value::Int(1), false);
    ///
    /// assert_eq!(globals.borrow().get("x"), Some(Value::Int(1)));
    /// ```
    #[must_use]
    pub fn global() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self { slots:  HashMap::new(),
                                    parent: None, }))
    }

    /// Creates a child scope whose lookups fall through to `parent`.
    #[must_use]
    pub fn with_parent(parent: Rc<RefCell<Self>>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self { slots:  HashMap::new(),
                                    parent: Some(parent), }))
    }

    /// Declares a binding in this scope.
    ///
    /// Shadows any binding of the same name in outer scopes; a redeclaration
    /// in this scope replaces the existing slot, mutability flag included.
    pub fn declare(&mut self, name: &str, value: Value, mutable: bool) {
        self.slots.insert(name.to_string(), Binding { value, mutable });
    }

    /// Looks a name up, walking outward through parent scopes.
    ///
    /// Returns a clone of the value, or `None` if no scope in the chain
    /// holds the name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(binding) = self.slots.get(name) {
            return Some(binding.value.clone());
        }
        match &self.parent {
            Some(parent) => parent.borrow().get(name),
            None => None,
        }
    }

    /// Stores a new value into the nearest slot holding `name`.
    ///
    /// The search walks outward from this scope. The slot's mutability flag
    /// is enforced; the stored value's tag is not checked (annotations bind
    /// at declaration only).
    ///
    /// # Errors
    /// - [`AssignError::NotFound`] when no scope holds the name.
    /// - [`AssignError::Immutable`] when the nearest slot is not mutable.
    ///
    /// # Example
    /// ```
    /// use pyrustlang::interpreter::{
    ///     env::{AssignError, Env},
    ///     value::Value,
    /// };
    ///
    /// let globals = Env::global();
    /// globals.borrow_mut().declare("frozen", Value::Int(1), false);
    ///
    /// let result = globals.borrow_mut().assign("frozen", Value::Int(2));
    /// assert_eq!(result, Err(AssignError::Immutable));
    /// ```
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), AssignError> {
        if let Some(binding) = self.slots.get_mut(name) {
            if !binding.mutable {
                return Err(AssignError::Immutable);
            }
            binding.value = value;
            return Ok(());
        }
        match &self.parent {
            Some(parent) => parent.borrow_mut().assign(name, value),
            None => Err(AssignError::NotFound),
        }
    }
}
