//! One validator per component category.
//!
//! Missing artifacts and missing interface signatures are disqualifying.
//! Idiomatic headers, dependency tokens, execute bits and short documents
//! only produce warnings.

use vaultcheck_kernel::{CheckError, Category, Findings, Manifest, Oracle};

pub type Validator = fn(&Manifest, &dyn Oracle, &mut Findings) -> Result<bool, CheckError>;

const SOLIDITY_PRAGMA: &str = "pragma solidity";
const SOLIDITY_DECLARATIONS: [&str; 3] = ["contract ", "interface ", "library "];
const CIRCOM_PRAGMA: &str = "pragma circom";
const CIRCOM_MAIN: &str = "component main";

const STRUCTURE_CATEGORIES: [Category; 3] = [
    Category::SmartContracts,
    Category::Libraries,
    Category::Interfaces,
];

/// Contracts, libraries and interfaces must exist.
pub fn smart_contract_structure(
    manifest: &Manifest,
    oracle: &dyn Oracle,
    findings: &mut Findings,
) -> Result<bool, CheckError> {
    let mut all_exist = true;
    for category in STRUCTURE_CATEGORIES {
        for entry in manifest.entries(category) {
            if !oracle.exists(&entry.path) {
                findings.missing(&entry.name, format!("{} at {}", entry.name, entry.path));
                all_exist = false;
                continue;
            }
            findings.found(&entry.name, entry.name.clone());

            let content = oracle.read_text(&entry.path)?;
            if !content.contains(SOLIDITY_PRAGMA) {
                findings.warning(&entry.name, "missing Solidity pragma");
            }
            if !SOLIDITY_DECLARATIONS
                .iter()
                .any(|keyword| content.contains(keyword))
            {
                findings.warning(&entry.name, "missing contract/interface/library declaration");
            }
        }
    }
    Ok(all_exist)
}

/// Every listed interface must declare every required function, in full.
pub fn contract_interfaces(
    manifest: &Manifest,
    oracle: &dyn Oracle,
    findings: &mut Findings,
) -> Result<bool, CheckError> {
    let mut all_valid = true;
    for methods in &manifest.interface_methods {
        let path = manifest
            .path_of(Category::Interfaces, &methods.interface)
            .ok_or_else(|| {
                CheckError::Fault(format!("unknown interface: {}", methods.interface))
            })?;

        if !oracle.exists(path) {
            findings.missing(&methods.interface, "interface file not found");
            all_valid = false;
            continue;
        }

        for function in &methods.functions {
            if oracle.contains(path, &format!("function {function}")) {
                findings.found(&methods.interface, format!("method {function}"));
            } else {
                findings.missing(&methods.interface, format!("method {function}"));
                all_valid = false;
            }
        }
    }
    Ok(all_valid)
}

/// Operator project manifest and every module path must exist.
pub fn operator_software_structure(
    manifest: &Manifest,
    oracle: &dyn Oracle,
    findings: &mut Findings,
) -> Result<bool, CheckError> {
    let operator = &manifest.operator;
    if let Some(project_manifest) = operator.project_manifest.as_deref() {
        if !oracle.exists(project_manifest) {
            findings.missing(project_manifest, "operator project manifest");
            return Ok(false);
        }
        findings.found(project_manifest, "operator project manifest");
        let content = oracle.read_text(project_manifest)?;
        for dependency in &operator.soft_dependencies {
            if !content.contains(dependency.as_str()) {
                findings.warning(project_manifest, format!("missing {dependency} dependency"));
            }
        }
    }

    let mut all_exist = true;
    for module in &operator.modules {
        if oracle.exists(module) {
            findings.found(module, module_label(module));
        } else {
            findings.missing(module, module.clone());
            all_exist = false;
        }
    }
    Ok(all_exist)
}

/// Circuit files must exist; pragma and main component are soft markers.
pub fn zk_circuits(
    manifest: &Manifest,
    oracle: &dyn Oracle,
    findings: &mut Findings,
) -> Result<bool, CheckError> {
    let mut all_exist = true;
    for entry in manifest.entries(Category::Circuits) {
        if !oracle.exists(&entry.path) {
            findings.missing(&entry.name, entry.name.clone());
            all_exist = false;
            continue;
        }
        findings.found(&entry.name, entry.name.clone());

        let content = oracle.read_text(&entry.path)?;
        if !content.contains(CIRCOM_PRAGMA) {
            findings.warning(&entry.name, "missing Circom pragma");
        }
        if !content.contains(CIRCOM_MAIN) {
            findings.warning(&entry.name, "missing main component");
        }
    }
    Ok(all_exist)
}

/// Frontend files must exist. Integration tokens fail the category only for
/// strict integrations; lenient ones are reported and nothing more.
pub fn frontend_integration(
    manifest: &Manifest,
    oracle: &dyn Oracle,
    findings: &mut Findings,
) -> Result<bool, CheckError> {
    let mut all_exist = true;
    for entry in manifest.entries(Category::Frontend) {
        if !oracle.exists(&entry.path) {
            findings.missing(&entry.name, entry.name.clone());
            all_exist = false;
            continue;
        }
        findings.found(&entry.name, entry.name.clone());

        let integrations = manifest
            .frontend_integration
            .iter()
            .filter(|integration| integration.file == entry.name)
            .collect::<Vec<_>>();
        if integrations.is_empty() {
            continue;
        }

        let content = oracle.read_text(&entry.path)?;
        for integration in integrations {
            for token in &integration.tokens {
                if content.contains(token.as_str()) {
                    findings.found(&entry.name, format!("has {token} integration"));
                } else {
                    findings.missing(&entry.name, format!("{token} integration"));
                    if integration.strict {
                        all_exist = false;
                    }
                }
            }
        }
    }
    Ok(all_exist)
}

/// Deployment scripts must exist; the execute bit is a soft signal.
pub fn deployment_scripts(
    manifest: &Manifest,
    oracle: &dyn Oracle,
    findings: &mut Findings,
) -> Result<bool, CheckError> {
    let scripts = &manifest.scripts;
    let mut all_exist = true;
    for name in &scripts.names {
        let path = scripts.script_path(name);
        if !oracle.exists(&path) {
            findings.missing(name, name.clone());
            all_exist = false;
            continue;
        }
        findings.found(name, name.clone());
        if oracle.is_executable(&path) {
            findings.found(name, format!("{name} is executable"));
        } else {
            findings.warning(name, format!("{name} is not executable"));
        }
    }
    Ok(all_exist)
}

pub fn configuration_files(
    manifest: &Manifest,
    oracle: &dyn Oracle,
    findings: &mut Findings,
) -> Result<bool, CheckError> {
    Ok(require_all(&manifest.config.files, oracle, findings))
}

/// Documents must exist; short ones are flagged as incomplete.
pub fn documentation(
    manifest: &Manifest,
    oracle: &dyn Oracle,
    findings: &mut Findings,
) -> Result<bool, CheckError> {
    let docs = &manifest.docs;
    let mut all_exist = true;
    for doc in &docs.files {
        if !oracle.exists(doc) {
            findings.missing(doc, doc.clone());
            all_exist = false;
            continue;
        }
        findings.found(doc, module_label(doc));
        let content = oracle.read_text(doc)?;
        if content.chars().count() < docs.min_length {
            findings.warning(doc, format!("{} seems incomplete", module_label(doc)));
        }
    }
    Ok(all_exist)
}

fn require_all(paths: &[String], oracle: &dyn Oracle, findings: &mut Findings) -> bool {
    let mut all_exist = true;
    for path in paths {
        if oracle.exists(path) {
            findings.found(path, module_label(path));
        } else {
            findings.missing(path, path.clone());
            all_exist = false;
        }
    }
    all_exist
}

fn module_label(path: &str) -> String {
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(path)
        .to_string()
}
