use serde::Serialize;

use crate::errors::{LoanError, Result};
use crate::product::{LoanAmount, LoanProduct};
use crate::types::{ApplicationId, Decision};

/// applicant data captured on the application
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Applicant {
    name: String,
    age: u32,
    address: String,
    salary: i64,
}

impl Applicant {
    /// create applicant; age must be positive and salary non-negative
    pub fn new(
        name: impl Into<String>,
        age: u32,
        address: impl Into<String>,
        salary: i64,
    ) -> Result<Self> {
        if age == 0 {
            return Err(LoanError::InvalidApplicant {
                message: "age must be greater than zero".to_string(),
            });
        }

        if salary < 0 {
            return Err(LoanError::InvalidApplicant {
                message: format!("salary cannot be negative: {}", salary),
            });
        }

        Ok(Self {
            name: name.into(),
            age,
            address: address.into(),
            salary,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn salary(&self) -> i64 {
        self.salary
    }
}

/// loan application; every field is fixed at construction except the decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoanApplication {
    id: ApplicationId,
    product: LoanProduct,
    amount: LoanAmount,
    applicant: Applicant,
    decision: Decision,
}

impl LoanApplication {
    pub fn new(
        id: ApplicationId,
        product: LoanProduct,
        amount: LoanAmount,
        applicant: Applicant,
    ) -> Self {
        Self {
            id,
            product,
            amount,
            applicant,
            decision: Decision::Undecided,
        }
    }

    pub fn builder() -> LoanApplicationBuilder {
        LoanApplicationBuilder::new()
    }

    pub fn id(&self) -> ApplicationId {
        self.id
    }

    pub fn product(&self) -> &LoanProduct {
        &self.product
    }

    pub fn amount(&self) -> &LoanAmount {
        &self.amount
    }

    pub fn applicant(&self) -> &Applicant {
        &self.applicant
    }

    pub fn name(&self) -> &str {
        self.applicant.name()
    }

    pub fn age(&self) -> u32 {
        self.applicant.age()
    }

    pub fn address(&self) -> &str {
        self.applicant.address()
    }

    pub fn salary(&self) -> i64 {
        self.applicant.salary()
    }

    pub fn decision(&self) -> Decision {
        self.decision
    }

    /// true only once the decision engine has accepted the application
    pub fn is_accepted(&self) -> bool {
        self.decision.is_accepted()
    }

    /// only the decision engine writes the outcome
    pub(crate) fn record_decision(&mut self, decision: Decision) {
        self.decision = decision;
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// builder for loan applications
#[derive(Debug, Default)]
pub struct LoanApplicationBuilder {
    id: Option<ApplicationId>,
    product: Option<LoanProduct>,
    amount: Option<LoanAmount>,
    name: Option<String>,
    age: Option<u32>,
    address: Option<String>,
    salary: Option<i64>,
}

impl LoanApplicationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: ApplicationId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn product(mut self, product: LoanProduct) -> Self {
        self.product = Some(product);
        self
    }

    pub fn amount(mut self, amount: LoanAmount) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn salary(mut self, salary: i64) -> Self {
        self.salary = Some(salary);
        self
    }

    pub fn build(self) -> Result<LoanApplication> {
        let id = self.id.ok_or(LoanError::InvalidConfiguration {
            message: "Application id required".to_string(),
        })?;
        let product = self.product.ok_or(LoanError::InvalidConfiguration {
            message: "Loan product required".to_string(),
        })?;
        let amount = self.amount.ok_or(LoanError::InvalidConfiguration {
            message: "Loan amount required".to_string(),
        })?;
        let name = self.name.ok_or(LoanError::InvalidApplicant {
            message: "name required".to_string(),
        })?;
        let age = self.age.ok_or(LoanError::InvalidApplicant {
            message: "age required".to_string(),
        })?;
        let address = self.address.ok_or(LoanError::InvalidApplicant {
            message: "address required".to_string(),
        })?;
        let salary = self.salary.ok_or(LoanError::InvalidApplicant {
            message: "salary required".to_string(),
        })?;

        let applicant = Applicant::new(name, age, address, salary)?;

        Ok(LoanApplication::new(
            id,
            product,
            amount,
            applicant,
        ))
    }
}
