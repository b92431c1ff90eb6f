//! The module scaffold.
//!
//! A [`Module`] is the runtime form of the placeholder source file in the
//! template pack: a named unit with one arithmetic operation delegated to an
//! internal helper and a welcome message. The helper is a [`Calculator`];
//! [`Doubling`] stands in until real logic is plugged in.
//!
//! ```
//! use artisan_core::identity::ProjectIdentity;
//! use artisan_module::Module;
//!
//! let identity = ProjectIdentity::new("Calculator").unwrap();
//! let module = Module::new(&identity);
//! assert_eq!(module.perform_operation(21), 42);
//! assert_eq!(module.welcome_message(), "Welcome to Calculator!");
//! ```

mod calculator;

pub use calculator::{Calculator, Doubling};

use artisan_core::identity::ProjectIdentity;

/// A scaffolded module. Holds no resources; dropping it is a no-op.
#[derive(Debug, Clone)]
pub struct Module<C = Doubling> {
    name: String,
    calculator: C,
}

impl Module<Doubling> {
    pub fn new(identity: &ProjectIdentity) -> Self {
        Self::with_calculator(identity, Doubling)
    }
}

impl<C: Calculator> Module<C> {
    /// Build a module whose operation delegates to `calculator`.
    pub fn with_calculator(identity: &ProjectIdentity, calculator: C) -> Self {
        tracing::debug!(name = identity.project_name(), "constructing module");
        Self {
            name: identity.project_name().to_string(),
            calculator,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn perform_operation(&self, input: i32) -> i32 {
        self.calculator.calculate(input)
    }

    pub fn welcome_message(&self) -> String {
        format!("Welcome to {}!", self.name)
    }
}
