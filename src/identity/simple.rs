use crate::errors::Result;
use crate::identity::IdentityVerifier;

/// pluggable verifier: every `validate` is an independent call to `check`
pub struct SimpleIdentityVerifier<F> {
    check: F,
    initialize_count: u32,
}

impl<F> SimpleIdentityVerifier<F>
where
    F: FnMut(&str, u32, &str) -> Result<bool>,
{
    pub fn new(check: F) -> Self {
        Self {
            check,
            initialize_count: 0,
        }
    }

    /// number of times `initialize` has been called
    pub fn initialize_count(&self) -> u32 {
        self.initialize_count
    }
}

impl<F> IdentityVerifier for SimpleIdentityVerifier<F>
where
    F: FnMut(&str, u32, &str) -> Result<bool>,
{
    fn initialize(&mut self) -> Result<()> {
        self.initialize_count += 1;
        Ok(())
    }

    fn validate(&mut self, name: &str, age: u32, address: &str) -> Result<bool> {
        (self.check)(name, age, address)
    }
}
