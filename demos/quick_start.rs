/// quick start - decide two applications with a gateway verifier and a bureau scorer
use chrono::{TimeZone, Utc};
use loan_decision_rs::{
    service_fn, Applicant, BureauCreditScorer, CreditScore, LoanAmount, LoanApplication,
    LoanApplicationProcessor, LoanProduct, Rate, SafeTimeProvider, ServiceGatewayVerifier,
    TimeSource,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== loan decision quick start ===\n");

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
    ));

    // identity service stand-in: anyone with an address and of age
    let service = service_fn(|_name, age, address| Ok(age >= 18 && !address.is_empty()));
    let gateway = ServiceGatewayVerifier::with_clock(service, time);

    // bureau stand-in: score grows with name length
    let bureau = |name: &str, _address: &str| -> loan_decision_rs::Result<CreditScore> {
        Ok(CreditScore::new(250 + 20 * name.len() as u32))
    };

    let mut processor = LoanApplicationProcessor::new(gateway, BureauCreditScorer::new(bureau));

    let product = LoanProduct::new(99, "Loan", Rate::from_percentage_decimal(dec!(5.25)))?;
    let mut applications = vec![
        LoanApplication::new(
            1,
            product.clone(),
            LoanAmount::new("USD", 200_000)?,
            Applicant::new("Sarah", 25, "133 Pluralsight Drive, Draper, Utah", 65_000)?,
        ),
        LoanApplication::new(
            2,
            product,
            LoanAmount::new("USD", 50_000)?,
            Applicant::new("Al", 41, "12 Main Street, Provo, Utah", 90_000)?,
        ),
    ];

    for application in applications.iter_mut() {
        processor.process(application)?;
        println!(
            "application {} for {} ({}): {:?}",
            application.id(),
            application.name(),
            application.amount(),
            application.decision()
        );
    }

    if let Some(checked_at) = processor.identity_verifier().last_check_time() {
        println!("\nlast identity check at {}", checked_at.format("%Y-%m-%d %H:%M"));
    }

    println!("\n{}", applications[0].to_json_pretty()?);

    Ok(())
}
