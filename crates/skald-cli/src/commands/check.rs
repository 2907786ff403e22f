use std::path::Path;

pub fn run(dir: &Path) -> Result<(), String> {
    let registry = super::load_registry(dir)?;
    let issues = skald_data::verify(&registry);

    if issues.is_empty() {
        println!("  All checks passed.");
        println!("  {} tables, every roll covered", registry.len());
        return Ok(());
    }

    for issue in &issues {
        println!("  {issue}");
    }
    println!();

    Err(format!(
        "{} issue{} found",
        issues.len(),
        if issues.len() == 1 { "" } else { "s" }
    ))
}
