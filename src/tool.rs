//! Tool adapter for language-model agents.
//!
//! The whole catalog is exposed as a single tool, `call_riot_service`, whose
//! arguments are a service name and a flat parameter object. The agent loop
//! itself lives outside this crate; it hands [`ToolCall`]s in and gets
//! [`ToolOutput`]s back.

use crate::api::client::RiotCaller;
use crate::api::request::Params;
use crate::error::AppError;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

pub const TOOL_NAME: &str = "call_riot_service";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON schema for the arguments object
    pub parameters: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub args: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolOutput {
    pub tool_call_id: String,
    pub name: String,
    /// JSON text of the service response
    pub content: String,
}

#[derive(Debug, Deserialize)]
struct CallArgs {
    service_name: String,
    #[serde(default)]
    params: Option<Map<String, Value>>,
}

/// Describe `call_riot_service` against the caller's catalog.
pub fn tool_definition(caller: &RiotCaller) -> ToolDefinition {
    let catalog = caller.catalog();

    let mut description = String::from(
        "Call a Riot Games API service by name. Pass path parameters in `params`.\nServices:",
    );
    for group in catalog.groups() {
        for service in &group.services {
            description.push_str(&format!("\n- {}", service.name));
            if service.params_required && !service.required_params.is_empty() {
                description.push_str(&format!(" ({})", service.required_params.join(", ")));
            }
        }
    }

    let mut properties = Map::new();
    for descriptor in caller.registry().iter() {
        let mut property = json!({
            "type": "string",
            "description": descriptor.description,
        });
        if let Some(values) = descriptor.allowed_values {
            property["enum"] = json!(values);
        }
        properties.insert(descriptor.name.to_string(), property);
    }

    let service_names: Vec<&str> = catalog.service_names().collect();

    ToolDefinition {
        name: TOOL_NAME.to_string(),
        description,
        parameters: json!({
            "type": "object",
            "properties": {
                "service_name": {
                    "type": "string",
                    "enum": service_names,
                    "description": "Name of the service to call"
                },
                "params": {
                    "type": "object",
                    "description": "Path parameters for the service",
                    "properties": properties,
                    "additionalProperties": { "type": "string" }
                }
            },
            "required": ["service_name"]
        }),
    }
}

pub fn invoke_tool(caller: &RiotCaller, call: &ToolCall) -> Result<ToolOutput, AppError> {
    if call.name != TOOL_NAME {
        return Err(AppError::UnknownTool(call.name.clone()));
    }

    let args: CallArgs = serde_json::from_value(call.args.clone())
        .map_err(|e| AppError::InvalidToolArguments(e.to_string()))?;
    let params = string_params(args.params.unwrap_or_default())?;

    debug!("Tool call {} -> {}", call.id, args.service_name);
    let result = caller.call_service(&args.service_name, Some(&params))?;

    Ok(ToolOutput {
        tool_call_id: call.id.clone(),
        name: call.name.clone(),
        content: result.to_string(),
    })
}

/// Runs calls in order; the first failure aborts the batch.
pub fn run_tool_calls(caller: &RiotCaller, calls: &[ToolCall]) -> Result<Vec<ToolOutput>, AppError> {
    calls.iter().map(|call| invoke_tool(caller, call)).collect()
}

// Models sometimes send ids as numbers
fn string_params(raw: Map<String, Value>) -> Result<Params, AppError> {
    raw.into_iter()
        .map(|(key, value)| {
            let text = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                other => {
                    return Err(AppError::InvalidToolArguments(format!(
                        "parameter '{}' must be a string, got {}",
                        key, other
                    )))
                }
            };
            Ok((key, text))
        })
        .collect()
}
