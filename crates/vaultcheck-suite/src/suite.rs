//! Fixed suite registration and sequential execution.

use crate::validators::{self, Validator};
use vaultcheck_kernel::{CheckRunner, Manifest, Oracle};

#[derive(Debug, thiserror::Error)]
pub enum SuiteError {
    #[error("duplicate check name: {0}")]
    DuplicateCheck(String),
}

#[derive(Clone, Copy)]
pub struct RegisteredCheck {
    pub name: &'static str,
    pub validator: Validator,
}

/// Ordered validator registry. Check names are unique within a suite.
#[derive(Clone, Default)]
pub struct Suite {
    checks: Vec<RegisteredCheck>,
}

impl Suite {
    pub fn new() -> Self {
        Self::default()
    }

    /// The EigenVault suite in its canonical order.
    pub fn eigenvault() -> Self {
        let checks: [(&'static str, Validator); 8] = [
            (
                "Smart Contract Structure",
                validators::smart_contract_structure,
            ),
            ("Contract Interfaces", validators::contract_interfaces),
            (
                "Operator Software Structure",
                validators::operator_software_structure,
            ),
            ("Zero-Knowledge Circuits", validators::zk_circuits),
            ("Frontend Integration", validators::frontend_integration),
            ("Deployment Scripts", validators::deployment_scripts),
            ("Configuration Files", validators::configuration_files),
            ("Documentation", validators::documentation),
        ];
        Self {
            checks: checks
                .into_iter()
                .map(|(name, validator)| RegisteredCheck { name, validator })
                .collect(),
        }
    }

    pub fn register(&mut self, name: &'static str, validator: Validator) -> Result<(), SuiteError> {
        if self.checks.iter().any(|check| check.name == name) {
            return Err(SuiteError::DuplicateCheck(name.to_string()));
        }
        self.checks.push(RegisteredCheck { name, validator });
        Ok(())
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.checks.iter().map(|check| check.name)
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every check once, strictly in registration order.
    pub fn run(&self, manifest: &Manifest, oracle: &dyn Oracle) -> CheckRunner {
        let mut runner = CheckRunner::new();
        for check in &self.checks {
            runner.run(check.name, |findings| {
                (check.validator)(manifest, oracle, findings)
            });
        }
        runner
    }
}

pub fn run_suite(manifest: &Manifest, oracle: &dyn Oracle) -> CheckRunner {
    Suite::eigenvault().run(manifest, oracle)
}
