use crate::generator::{line_count, within_target, TARGET_LINES};
use colored::*;
use std::path::Path;

const RULE_WIDTH: usize = 50;

fn banner(title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("{}", rule.blue());
    println!("{}", format!("{:^width$}", title, width = RULE_WIDTH).blue());
    println!("{}", rule.blue());
    println!();
}

fn separator() {
    println!("{}", "─".repeat(40));
}

pub fn print_header() {
    banner("ON-DEMAND CONTEXT GENERATOR");
}

pub fn print_inputs(template: &Path, project: &str, use_case: Option<&str>) {
    println!("{}", format!("📂 Template: {}", template.display()).green());
    println!("{}", format!("🎯 Project:  {}", project).green());
    if let Some(use_case) = use_case {
        println!("{}", format!("📝 Use Case: {}", use_case).green());
    }
    println!();
}

pub fn print_result(output: &Path, content: &str, written: bool) {
    println!();
    if written {
        banner(&format!("✨ {} READY! ✨", file_label(output)));
    } else {
        banner("✨ DRY RUN (nothing written) ✨");
    }

    println!("Generated {} content:", file_label(output));
    separator();
    print!("{}", content);
    separator();
    println!();
}

pub fn print_next_steps(output: &Path) {
    let name = file_label(output);
    println!("{}", format!("🎉 On-demand {} generated successfully!", name).green());
    println!();
    println!("Next steps:");
    println!("  1. Copy {} to your project directory", name);
    println!("  2. Edit {}: Update project name to match your actual project", name);
    println!("  3. Start development - analyze template patterns on-demand!");
    println!();
}

pub fn print_line_check(output: &Path, content: &str) {
    let lines = line_count(content);
    println!("{}", format!("📊 {}: {} lines", file_label(output), lines).blue());
    if within_target(content) {
        println!("{}", format!("✅ Within target range (≤{} lines)!", TARGET_LINES).green());
    } else {
        println!("{}", "⚠️  Slightly over target (consider optimization)".yellow());
    }
}

pub fn print_error(message: &str) {
    eprintln!("{}", format!("❌ Error: {}", message).red());
}

fn file_label(output: &Path) -> String {
    output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| output.display().to_string())
}
