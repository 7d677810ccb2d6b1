//! Declarative artifact manifest.
//!
//! The manifest maps component categories to named artifact paths and
//! carries the per-category requirements (function signatures, integration
//! tokens, script names, documentation thresholds, readiness markers) that
//! validators check. It is loaded once at startup and never mutated.

use crate::error::ManifestError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;

const BUILTIN_MANIFEST: &str = include_str!("../manifest/eigenvault.toml");
const BUILTIN_MANIFEST_REF: &str = "builtin:eigenvault.toml";
const DEFAULT_DOC_MIN_LENGTH: usize = 100;
const DEFAULT_SMART_CONTRACTS_MIN_PASSED: usize = 3;

/// Component category an artifact belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    SmartContracts,
    Libraries,
    Interfaces,
    OperatorSoftware,
    Circuits,
    Frontend,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::SmartContracts,
        Category::Libraries,
        Category::Interfaces,
        Category::OperatorSoftware,
        Category::Circuits,
        Category::Frontend,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::SmartContracts => "smart_contracts",
            Category::Libraries => "libraries",
            Category::Interfaces => "interfaces",
            Category::OperatorSoftware => "operator_software",
            Category::Circuits => "circuits",
            Category::Frontend => "frontend",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One expected artifact: `(category, name, path)`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ArtifactEntry {
    pub category: Category,
    pub name: String,
    pub path: String,
}

/// Ordered function-signature tokens an interface file must declare.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct InterfaceMethods {
    /// Artifact name in the `interfaces` category.
    pub interface: String,
    pub functions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OperatorRequirements {
    #[serde(default)]
    pub project_manifest: Option<String>,
    /// Dependency tokens searched for in the project manifest; absence only warns.
    #[serde(default)]
    pub soft_dependencies: Vec<String>,
    #[serde(default)]
    pub modules: Vec<String>,
}

/// Integration tokens a frontend file must mention.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FrontendIntegration {
    /// Artifact name in the `frontend` category.
    pub file: String,
    pub tokens: Vec<String>,
    /// When false, missing tokens are reported but do not fail the category.
    #[serde(default = "default_true")]
    pub strict: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptRequirements {
    #[serde(default)]
    pub dir: String,
    #[serde(default)]
    pub names: Vec<String>,
}

impl ScriptRequirements {
    pub fn script_path(&self, name: &str) -> String {
        let dir = self.dir.trim_end_matches('/');
        if dir.is_empty() {
            name.to_string()
        } else {
            format!("{dir}/{name}")
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigRequirements {
    #[serde(default)]
    pub files: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DocRequirements {
    #[serde(default)]
    pub files: Vec<String>,
    /// Documents shorter than this many characters are flagged as incomplete.
    #[serde(default = "default_doc_min_length")]
    pub min_length: usize,
}

impl Default for DocRequirements {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            min_length: DEFAULT_DOC_MIN_LENGTH,
        }
    }
}

/// Canonical marker paths for the existence-based readiness predicates.
///
/// An unset marker never satisfies its predicate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ReadinessMarkers {
    #[serde(default = "default_smart_contracts_min_passed")]
    pub smart_contracts_min_passed: usize,
    #[serde(default)]
    pub operator_software: Option<String>,
    #[serde(default)]
    pub frontend_integration: Option<String>,
    #[serde(default)]
    pub zk_circuits: Option<String>,
    #[serde(default)]
    pub deployment_scripts: Option<String>,
    #[serde(default)]
    pub documentation: Option<String>,
    #[serde(default)]
    pub configuration: Option<String>,
}

impl Default for ReadinessMarkers {
    fn default() -> Self {
        Self {
            smart_contracts_min_passed: DEFAULT_SMART_CONTRACTS_MIN_PASSED,
            operator_software: None,
            frontend_integration: None,
            zk_circuits: None,
            deployment_scripts: None,
            documentation: None,
            configuration: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default, rename = "artifact")]
    pub artifacts: Vec<ArtifactEntry>,
    #[serde(default)]
    pub interface_methods: Vec<InterfaceMethods>,
    #[serde(default)]
    pub operator: OperatorRequirements,
    #[serde(default)]
    pub frontend_integration: Vec<FrontendIntegration>,
    #[serde(default)]
    pub scripts: ScriptRequirements,
    #[serde(default)]
    pub config: ConfigRequirements,
    #[serde(default)]
    pub docs: DocRequirements,
    #[serde(default)]
    pub readiness: ReadinessMarkers,
}

impl Manifest {
    /// The embedded EigenVault manifest.
    pub fn builtin() -> Result<Self, ManifestError> {
        Self::parse(BUILTIN_MANIFEST, BUILTIN_MANIFEST_REF)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let display = path.to_string_lossy().to_string();
        let text = fs::read_to_string(path).map_err(|source| ManifestError::ReadFile {
            path: display.clone(),
            source,
        })?;
        Self::parse(&text, &display)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ManifestError> {
        Self::parse(text, "<inline>")
    }

    fn parse(text: &str, origin: &str) -> Result<Self, ManifestError> {
        let manifest: Manifest =
            toml::from_str(text).map_err(|source| ManifestError::ParseToml {
                path: origin.to_string(),
                source,
            })?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Entries of one category, in declaration order.
    pub fn entries(&self, category: Category) -> impl Iterator<Item = &ArtifactEntry> {
        self.artifacts
            .iter()
            .filter(move |entry| entry.category == category)
    }

    pub fn path_of(&self, category: Category, name: &str) -> Option<&str> {
        self.entries(category)
            .find(|entry| entry.name == name)
            .map(|entry| entry.path.as_str())
    }

    pub fn count(&self, category: Category) -> usize {
        self.entries(category).count()
    }

    fn validate(&self) -> Result<(), ManifestError> {
        let mut seen = BTreeSet::new();
        for entry in &self.artifacts {
            if entry.name.trim().is_empty() {
                return Err(ManifestError::Invalid(format!(
                    "artifact in category {} has an empty name",
                    entry.category
                )));
            }
            if entry.path.trim().is_empty() {
                return Err(ManifestError::Invalid(format!(
                    "artifact {} in category {} has an empty path",
                    entry.name, entry.category
                )));
            }
            if !seen.insert((entry.category, entry.name.as_str())) {
                return Err(ManifestError::Invalid(format!(
                    "duplicate artifact {} in category {}",
                    entry.name, entry.category
                )));
            }
        }

        for methods in &self.interface_methods {
            if self
                .path_of(Category::Interfaces, &methods.interface)
                .is_none()
            {
                return Err(ManifestError::Invalid(format!(
                    "interface_methods references unknown interface {}",
                    methods.interface
                )));
            }
        }

        for integration in &self.frontend_integration {
            if self.path_of(Category::Frontend, &integration.file).is_none() {
                return Err(ManifestError::Invalid(format!(
                    "frontend_integration references unknown frontend file {}",
                    integration.file
                )));
            }
        }

        Ok(())
    }
}

fn default_true() -> bool {
    true
}

fn default_doc_min_length() -> usize {
    DEFAULT_DOC_MIN_LENGTH
}

fn default_smart_contracts_min_passed() -> usize {
    DEFAULT_SMART_CONTRACTS_MIN_PASSED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_manifest_declares_every_category() {
        let manifest = Manifest::builtin().expect("builtin manifest should parse");
        assert_eq!(manifest.count(Category::SmartContracts), 4);
        assert_eq!(manifest.count(Category::Libraries), 2);
        assert_eq!(manifest.count(Category::Interfaces), 3);
        assert_eq!(manifest.count(Category::OperatorSoftware), 5);
        assert_eq!(manifest.count(Category::Circuits), 2);
        assert_eq!(manifest.count(Category::Frontend), 3);
        assert_eq!(manifest.interface_methods.len(), 3);
        assert_eq!(manifest.scripts.names.len(), 5);
        assert_eq!(manifest.docs.min_length, 100);
        assert_eq!(manifest.readiness.smart_contracts_min_passed, 3);
    }

    #[test]
    fn builtin_manifest_keeps_declaration_order() {
        let manifest = Manifest::builtin().expect("builtin manifest should parse");
        let names: Vec<&str> = manifest
            .entries(Category::SmartContracts)
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "EigenVaultHook.sol",
                "EigenVaultServiceManager.sol",
                "OrderVault.sol",
                "EigenVaultBase.sol",
            ]
        );
        insta::assert_json_snapshot!(manifest.interface_methods[0], @r###"
        {
          "interface": "IEigenVaultHook.sol",
          "functions": [
            "routeToVault",
            "executeVaultOrder",
            "fallbackToAMM",
            "getOrder"
          ]
        }
        "###);
    }

    #[test]
    fn builtin_wallet_hook_integration_is_lenient() {
        let manifest = Manifest::builtin().expect("builtin manifest should parse");
        let strictness: Vec<(&str, bool)> = manifest
            .frontend_integration
            .iter()
            .map(|item| (item.file.as_str(), item.strict))
            .collect();
        assert_eq!(
            strictness,
            vec![("useEigenVault.ts", true), ("useWeb3.ts", false)]
        );
    }

    #[test]
    fn empty_manifest_uses_defaults() {
        let manifest = Manifest::from_toml_str("").expect("empty manifest should parse");
        assert!(manifest.artifacts.is_empty());
        assert_eq!(manifest.docs.min_length, 100);
        assert_eq!(manifest.readiness.smart_contracts_min_passed, 3);
        assert!(manifest.readiness.operator_software.is_none());
    }

    #[test]
    fn rejects_duplicate_artifact_names_within_category() {
        let text = r#"
[[artifact]]
category = "circuits"
name = "a.circom"
path = "circuits/a.circom"

[[artifact]]
category = "circuits"
name = "a.circom"
path = "circuits/other.circom"
"#;
        let err = Manifest::from_toml_str(text).expect_err("duplicate should be rejected");
        assert!(matches!(err, ManifestError::Invalid(_)));
        assert!(err.to_string().contains("duplicate artifact a.circom"));
    }

    #[test]
    fn rejects_interface_methods_for_undeclared_interface() {
        let text = r#"
[[interface_methods]]
interface = "IMissing.sol"
functions = ["foo"]
"#;
        let err = Manifest::from_toml_str(text).expect_err("unknown interface should be rejected");
        assert!(err.to_string().contains("IMissing.sol"));
    }

    #[test]
    fn rejects_unknown_category() {
        let text = r#"
[[artifact]]
category = "backend"
name = "server.py"
path = "server.py"
"#;
        let err = Manifest::from_toml_str(text).expect_err("unknown category should be rejected");
        assert!(matches!(err, ManifestError::ParseToml { .. }));
    }

    #[test]
    fn rejects_misspelled_keys_in_nested_tables() {
        let cases = [
            "[operator]\nproject_manfest = \"operator/Cargo.toml\"\nmodules = []\n",
            "[readiness]\ndocumentaton = \"docs/ARCHITECTURE.md\"\n",
            "[docs]\nfiles = []\nmin_lenght = 10\n",
            "[scripts]\ndirectory = \"scripts\"\n",
            "[config]\nfile = [\"foundry.toml\"]\n",
        ];
        for text in cases {
            let err = Manifest::from_toml_str(text).expect_err("misspelled key should be rejected");
            assert!(
                matches!(err, ManifestError::ParseToml { .. }),
                "unexpected error for {text:?}: {err}"
            );
        }
    }

    #[test]
    fn rejects_misspelled_strict_flag_on_integration() {
        let text = r#"
[[artifact]]
category = "frontend"
name = "useWeb3.ts"
path = "frontend/src/hooks/useWeb3.ts"

[[frontend_integration]]
file = "useWeb3.ts"
tokens = ["MetaMask"]
strcit = false
"#;
        let err = Manifest::from_toml_str(text).expect_err("misspelled strict should be rejected");
        assert!(err.to_string().contains("strcit"), "unexpected error: {err}");
    }

    #[test]
    fn rejects_frontend_integration_for_undeclared_file() {
        let text = r#"
[[frontend_integration]]
file = "useMissing.ts"
tokens = ["ethers"]
"#;
        let err =
            Manifest::from_toml_str(text).expect_err("unknown frontend file should be rejected");
        assert!(matches!(err, ManifestError::Invalid(_)));
        assert!(err.to_string().contains("unknown frontend file useMissing.ts"));
    }

    #[test]
    fn load_reports_unreadable_manifest_path() {
        let path = std::env::temp_dir().join(format!(
            "vaultcheck-manifest-absent-{}/vaultcheck.toml",
            std::process::id()
        ));
        let err = Manifest::load(&path).expect_err("absent manifest should not load");
        assert!(matches!(err, ManifestError::ReadFile { .. }));
        assert!(err.to_string().starts_with("failed to read manifest: "));
    }

    #[test]
    fn script_path_joins_dir_and_name() {
        let scripts = ScriptRequirements {
            dir: "scripts/".to_string(),
            names: vec![],
        };
        assert_eq!(scripts.script_path("deploy.sh"), "scripts/deploy.sh");
        let bare = ScriptRequirements::default();
        assert_eq!(bare.script_path("deploy.sh"), "deploy.sh");
    }
}
