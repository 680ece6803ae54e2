use chrono::{DateTime, Utc};
use hourglass_rs::{SafeTimeProvider, TimeSource};
use tracing::debug;

use crate::errors::{LoanError, Result};
use crate::identity::IdentityVerifier;

/// time source step used to stamp each identity check
pub trait Clock {
    fn current_time(&self) -> DateTime<Utc>;
}

impl Clock for SafeTimeProvider {
    fn current_time(&self) -> DateTime<Utc> {
        self.now()
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn current_time(&self) -> DateTime<Utc> {
        (**self).current_time()
    }
}

/// clock backed by a plain function
pub struct ClockFn<F>(F);

pub fn clock_fn<F>(f: F) -> ClockFn<F>
where
    F: Fn() -> DateTime<Utc>,
{
    ClockFn(f)
}

impl<F> Clock for ClockFn<F>
where
    F: Fn() -> DateTime<Utc>,
{
    fn current_time(&self) -> DateTime<Utc> {
        (self.0)()
    }
}

/// remote identity service behind the gateway
pub trait IdentityService {
    /// open the connection; called from `IdentityVerifier::initialize`
    fn connect(&mut self) -> Result<()> {
        Ok(())
    }

    /// perform the actual identity check
    fn call_service(&mut self, name: &str, age: u32, address: &str) -> Result<bool>;
}

/// identity service backed by a plain function, nothing to connect
pub struct ServiceFn<F>(F);

pub fn service_fn<F>(f: F) -> ServiceFn<F>
where
    F: FnMut(&str, u32, &str) -> Result<bool>,
{
    ServiceFn(f)
}

impl<F> IdentityService for ServiceFn<F>
where
    F: FnMut(&str, u32, &str) -> Result<bool>,
{
    fn call_service(&mut self, name: &str, age: u32, address: &str) -> Result<bool> {
        (self.0)(name, age, address)
    }
}

/// gateway verifier with a fixed validation flow
///
/// `validate` always stamps the check time from the clock before handing
/// the applicant to the service, so either step can be swapped out while
/// the orchestration stays the same. The stamp is kept even when the
/// service call fails.
pub struct ServiceGatewayVerifier<S, C = SafeTimeProvider> {
    service: S,
    clock: C,
    connected: bool,
    last_check_time: Option<DateTime<Utc>>,
    checks_performed: u32,
}

impl<S: IdentityService> ServiceGatewayVerifier<S, SafeTimeProvider> {
    /// gateway stamping checks with system time
    pub fn new(service: S) -> Self {
        Self::with_clock(service, SafeTimeProvider::new(TimeSource::System))
    }
}

impl<S: IdentityService, C: Clock> ServiceGatewayVerifier<S, C> {
    pub fn with_clock(service: S, clock: C) -> Self {
        Self {
            service,
            clock,
            connected: false,
            last_check_time: None,
            checks_performed: 0,
        }
    }

    /// time of the most recent `validate` call, none before the first
    pub fn last_check_time(&self) -> Option<DateTime<Utc>> {
        self.last_check_time
    }

    pub fn checks_performed(&self) -> u32 {
        self.checks_performed
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<S: IdentityService, C: Clock> IdentityVerifier for ServiceGatewayVerifier<S, C> {
    fn initialize(&mut self) -> Result<()> {
        self.service.connect()?;
        self.connected = true;
        debug!("identity gateway connected");
        Ok(())
    }

    fn validate(&mut self, name: &str, age: u32, address: &str) -> Result<bool> {
        if !self.connected {
            return Err(LoanError::VerifierNotInitialized);
        }

        let now = self.clock.current_time();
        self.last_check_time = Some(now);
        self.checks_performed += 1;

        let verified = self.service.call_service(name, age, address)?;
        debug!(checked_at = %now, verified, "identity gateway check complete");

        Ok(verified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    /// service that records what it was asked and how often it connected
    #[derive(Default)]
    struct RecordingService {
        connects: u32,
        calls: Vec<(String, u32, String)>,
        answer: bool,
    }

    impl IdentityService for RecordingService {
        fn connect(&mut self) -> Result<()> {
            self.connects += 1;
            Ok(())
        }

        fn call_service(&mut self, name: &str, age: u32, address: &str) -> Result<bool> {
            self.calls.push((name.to_string(), age, address.to_string()));
            Ok(self.answer)
        }
    }

    #[test]
    fn test_validate_records_check_time() {
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()
        ));
        let service = RecordingService { answer: true, ..Default::default() };
        let mut gateway = ServiceGatewayVerifier::with_clock(service, time);

        assert_eq!(gateway.last_check_time(), None);

        gateway.initialize().unwrap();
        assert!(gateway.validate("Sarah", 25, "133 Pluralsight Drive, Draper, Utah").unwrap());

        assert_eq!(
            gateway.last_check_time(),
            Some(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(gateway.service().connects, 1);
        assert_eq!(
            gateway.service().calls,
            vec![("Sarah".to_string(), 25, "133 Pluralsight Drive, Draper, Utah".to_string())]
        );
    }

    #[test]
    fn test_check_time_follows_clock() {
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        ));
        let controller = time.test_control().unwrap();
        let mut gateway = ServiceGatewayVerifier::with_clock(service_fn(|_, _, _| Ok(false)), &time);

        gateway.initialize().unwrap();
        gateway.validate("Sarah", 25, "Draper").unwrap();

        controller.advance(Duration::days(3));
        assert!(!gateway.validate("Sarah", 25, "Draper").unwrap());

        assert_eq!(
            gateway.last_check_time(),
            Some(Utc.with_ymd_and_hms(2024, 1, 4, 0, 0, 0).unwrap())
        );
        assert_eq!(gateway.checks_performed(), 2);
    }

    #[test]
    fn test_function_clock() {
        let fixed = Utc.with_ymd_and_hms(2010, 6, 15, 12, 0, 0).unwrap();
        let mut gateway = ServiceGatewayVerifier::with_clock(
            service_fn(|_, _, _| Ok(true)),
            clock_fn(move || fixed),
        );

        gateway.initialize().unwrap();
        gateway.validate("Sarah", 25, "Draper").unwrap();

        assert_eq!(gateway.last_check_time(), Some(fixed));
    }

    #[test]
    fn test_validate_before_initialize_fails() {
        let mut gateway = ServiceGatewayVerifier::new(service_fn(|_, _, _| Ok(true)));

        let err = gateway.validate("Sarah", 25, "Draper").unwrap_err();
        assert_eq!(err, LoanError::VerifierNotInitialized);
        assert_eq!(gateway.last_check_time(), None);
    }

    #[test]
    fn test_service_error_keeps_check_time() {
        let fixed = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let mut gateway = ServiceGatewayVerifier::with_clock(
            service_fn(|_, _, _| {
                Err(LoanError::VerificationService {
                    message: "connection reset".to_string(),
                })
            }),
            clock_fn(move || fixed),
        );

        gateway.initialize().unwrap();
        let err = gateway.validate("Sarah", 25, "Draper").unwrap_err();

        assert!(matches!(err, LoanError::VerificationService { .. }));
        assert_eq!(gateway.last_check_time(), Some(fixed));
    }
}
