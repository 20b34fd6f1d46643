use crate::api::endpoints::Catalog;
use crate::api::params::ParameterRegistry;
use colored::*;
use serde_json::Value;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct ServiceRow {
    group: String,
    scope: String,
    service: String,
    url: String,
    #[tabled(rename = "required params")]
    required: String,
}

#[derive(Tabled)]
struct ParamRow {
    name: String,
    description: String,
    #[tabled(rename = "allowed values")]
    allowed: String,
}

fn service_rows(catalog: &Catalog) -> Vec<ServiceRow> {
    catalog
        .groups()
        .iter()
        .flat_map(|group| {
            group.services.iter().map(move |service| ServiceRow {
                group: group.name.clone(),
                scope: group.scope.to_string(),
                service: service.name.clone(),
                url: service.url_template.clone(),
                required: if service.params_required {
                    service.required_params.join(", ")
                } else {
                    "-".to_string()
                },
            })
        })
        .collect()
}

fn param_rows(registry: &ParameterRegistry) -> Vec<ParamRow> {
    registry
        .iter()
        .map(|param| ParamRow {
            name: param.name.to_string(),
            description: param.description.to_string(),
            allowed: param
                .allowed_values
                .map(|values| values.join(", "))
                .unwrap_or_else(|| "any".to_string()),
        })
        .collect()
}

pub fn display_services(catalog: &Catalog) {
    println!(
        "\n{}",
        format!("📚 {} services", catalog.len()).bold().cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    let mut table = Table::new(service_rows(catalog));
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn display_params(registry: &ParameterRegistry) {
    println!("\n{}", "🔑 Known parameters".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let mut table = Table::new(param_rows(registry));
    table.with(Style::rounded());
    println!("{}", table);
    println!(
        "{}",
        "Parameters not listed here are passed through unchecked.".dimmed()
    );
}

pub fn display_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(_) => println!("{}", value),
    }
}

pub fn display_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message);
}

pub fn display_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}

pub fn display_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}
