use crate::support::{load_manifest_or_exit, render_json_or_exit};
use vaultcheck_kernel::{Category, Manifest};

pub fn run(manifest_arg: Option<String>, json_output: bool) {
    let manifest = load_manifest_or_exit(manifest_arg.as_deref());

    if json_output {
        println!("{}", render_json_or_exit(&manifest, "manifest"));
    } else {
        print_human_summary(&manifest);
    }
}

fn print_human_summary(manifest: &Manifest) {
    println!("vaultcheck manifest");
    for category in Category::ALL {
        println!("  {category} ({}):", manifest.count(category));
        for entry in manifest.entries(category) {
            println!("    - {}: {}", entry.name, entry.path);
        }
    }

    if !manifest.interface_methods.is_empty() {
        println!("  interface methods:");
        for methods in &manifest.interface_methods {
            println!("    - {}: {}", methods.interface, methods.functions.join(", "));
        }
    }

    if !manifest.frontend_integration.is_empty() {
        println!("  frontend integrations:");
        for integration in &manifest.frontend_integration {
            let mode = if integration.strict { "strict" } else { "lenient" };
            println!(
                "    - {} ({mode}): {}",
                integration.file,
                integration.tokens.join(", ")
            );
        }
    }

    let operator = &manifest.operator;
    if let Some(project_manifest) = &operator.project_manifest {
        println!("  operator project manifest: {project_manifest}");
    }
    print_list("operator modules", &operator.modules);
    print_list(
        "deployment scripts",
        &manifest
            .scripts
            .names
            .iter()
            .map(|name| manifest.scripts.script_path(name))
            .collect::<Vec<_>>(),
    );
    print_list("configuration files", &manifest.config.files);
    print_list("documentation", &manifest.docs.files);
}

fn print_list(label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("  {label}:");
    for item in items {
        println!("    - {item}");
    }
}
