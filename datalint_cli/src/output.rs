use colored::*;
use datalint_core::TableResult;

pub fn print_table_result(result: &TableResult, format: &str) {
    match format {
        "json" => print_json_result(result),
        _ => print_text_result(result),
    }
}

fn print_text_result(result: &TableResult) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    if result.is_valid() {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
    }

    for column in &result.columns {
        if column.valid {
            println!("  {} {}", "✓".green(), column.column_name);
            continue;
        }
        println!("  {} {}", "✗".red(), column.column_name.red());
        for test in column.failed_tests() {
            println!(
                "      {} failed on {} row(s), e.g. rows {:?}",
                test.rule_name.red(),
                test.unexpected_row_indices.len(),
                &test.unexpected_row_indices[..test.unexpected_row_indices.len().min(5)]
            );
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Columns validated: {}", result.columns.len());
    println!(
        "  Columns failed:    {}",
        result.failing_column_names().len()
    );
    println!("{}", "═".repeat(60));
}

fn print_json_result(result: &TableResult) {
    println!(
        "{}",
        serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
    );
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

#[allow(dead_code)]
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
