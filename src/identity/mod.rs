pub mod gateway;
pub mod simple;

use crate::errors::Result;

pub use gateway::{clock_fn, service_fn, Clock, ClockFn, IdentityService, ServiceFn, ServiceGatewayVerifier};
pub use simple::SimpleIdentityVerifier;

/// identity verification capability used by the decision engine
///
/// `initialize` is called once per processing pass before the first
/// `validate`. Errors from either call propagate to the caller of
/// `LoanApplicationProcessor::process`.
pub trait IdentityVerifier {
    /// prepare any stateful resource, e.g. a remote connection
    fn initialize(&mut self) -> Result<()>;

    /// true iff the applicant's identity is confirmed
    fn validate(&mut self, name: &str, age: u32, address: &str) -> Result<bool>;
}

impl<T: IdentityVerifier + ?Sized> IdentityVerifier for &mut T {
    fn initialize(&mut self) -> Result<()> {
        (**self).initialize()
    }

    fn validate(&mut self, name: &str, age: u32, address: &str) -> Result<bool> {
        (**self).validate(name, age, address)
    }
}

impl<T: IdentityVerifier + ?Sized> IdentityVerifier for Box<T> {
    fn initialize(&mut self) -> Result<()> {
        (**self).initialize()
    }

    fn validate(&mut self, name: &str, age: u32, address: &str) -> Result<bool> {
        (**self).validate(name, age, address)
    }
}
