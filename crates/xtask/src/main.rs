use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use walkdir::WalkDir;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

/// Internal crates each workspace crate may depend on.
const ALLOWED_INTERNAL: &[(&str, &[&str])] = &[
    ("codex-domain", &[]),
    ("codex-shared", &["codex-domain"]),
    ("codex-player", &["codex-domain", "codex-shared"]),
    ("xtask", &[]),
];

/// Crates whose sources must stay free of I/O and async runtimes.
const PURE_CRATES: &[&str] = &["codex-domain", "codex-shared"];

const IMPURE_PATTERN: &str = r"\b(std::fs|std::net|tokio::|reqwest::)";

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    manifest_path: PathBuf,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    #[serde(default)]
    kind: Option<String>,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;
    let mut violations = dependency_violations(&metadata.packages);
    for package in &metadata.packages {
        if PURE_CRATES.contains(&package.name.as_str()) {
            let src = package
                .manifest_path
                .parent()
                .map(|dir| dir.join("src"))
                .context("manifest path has no parent")?;
            violations.extend(scan_for_io(&package.name, &src)?);
        }
    }

    if violations.is_empty() {
        println!("arch-check: OK ({} crates)", metadata.packages.len());
        Ok(())
    } else {
        for violation in &violations {
            eprintln!("arch-check: {violation}");
        }
        anyhow::bail!("{} architecture violation(s)", violations.len())
    }
}

/// Internal edges that cross the allowed layering, plus unknown packages.
fn dependency_violations(packages: &[Package]) -> Vec<String> {
    let allowed: BTreeMap<&str, &[&str]> = ALLOWED_INTERNAL.iter().copied().collect();
    let mut violations = Vec::new();

    for package in packages {
        let Some(permitted) = allowed.get(package.name.as_str()) else {
            violations.push(format!("{}: not a known workspace crate", package.name));
            continue;
        };

        for dep in &package.dependencies {
            // dev-dependencies may reach across layers for test fixtures
            if dep.kind.as_deref() == Some("dev") {
                continue;
            }
            if allowed.contains_key(dep.name.as_str()) && !permitted.contains(&dep.name.as_str()) {
                violations.push(format!("{} must not depend on {}", package.name, dep.name));
            }
        }
    }

    violations
}

fn scan_for_io(crate_name: &str, dir: &Path) -> anyhow::Result<Vec<String>> {
    let pattern = regex_lite::Regex::new(IMPURE_PATTERN).context("compiling pattern")?;
    let mut found = Vec::new();

    let sources = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().and_then(|e| e.to_str()) == Some("rs"));

    for entry in sources {
        let path = entry.path();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        for (number, line) in source.lines().enumerate() {
            if line.trim_start().starts_with("//") {
                continue;
            }
            if let Some(m) = pattern.find(line) {
                found.push(format!(
                    "{crate_name}: {}:{} uses {}",
                    path.display(),
                    number + 1,
                    m.as_str()
                ));
            }
        }
    }

    Ok(found)
}
