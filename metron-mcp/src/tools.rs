//! Tool catalogue and tool calls

use metron_core::ErrorReport;
use metron_units::{convert_request, render_outcome, Category, ConversionRequest, UNITS};
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};
use tracing::debug;

use crate::config::ServerConfig;
use crate::protocol::McpError;

pub fn handle_tools_list() -> Result<JsonValue, McpError> {
    let category_names: Vec<&str> = Category::all().iter().map(|c| c.name()).collect();

    Ok(json!({
        "tools": [
            {
                "name": "convert",
                "description": "Convert a value between two units of the same category. Returns \"<value> <from_unit> = <result> <to_unit>\".",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Unit category",
                            "enum": category_names
                        },
                        "from_unit": {
                            "type": "string",
                            "description": "Source unit label exactly as listed by list_units (e.g., \"kilogram (kg)\")"
                        },
                        "to_unit": {
                            "type": "string",
                            "description": "Target unit label exactly as listed by list_units"
                        },
                        "value": {
                            "type": ["string", "number"],
                            "description": "Value to convert"
                        },
                        "scientific": {
                            "type": "boolean",
                            "description": "Render the result in scientific notation"
                        }
                    },
                    "required": ["category", "from_unit", "to_unit", "value"]
                }
            },
            {
                "name": "list_categories",
                "description": "List the unit categories in display order.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            },
            {
                "name": "list_units",
                "description": "List the unit labels of a category in display order.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Unit category",
                            "enum": category_names
                        }
                    },
                    "required": ["category"]
                }
            }
        ]
    }))
}

pub fn handle_tool_call(config: &ServerConfig, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params
        .as_ref()
        .ok_or_else(|| McpError::invalid_params("Missing params"))?;

    let name = params
        .get("name")
        .and_then(|n| n.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

    debug!(tool = name, "tool call");

    match name {
        "convert" => tool_convert(config, args),
        "list_categories" => tool_list_categories(),
        "list_units" => tool_list_units(args),
        _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
    }
}

#[derive(Debug, Deserialize)]
struct ConvertArgs {
    category: String,
    from_unit: String,
    to_unit: String,
    value: JsonValue,
    scientific: Option<bool>,
}

fn tool_convert(config: &ServerConfig, args: JsonValue) -> Result<JsonValue, McpError> {
    let args: ConvertArgs = serde_json::from_value(args)
        .map_err(|e| McpError::invalid_params(format!("Invalid convert arguments: {}", e)))?;

    let value = match args.value {
        JsonValue::String(s) => s,
        JsonValue::Number(n) => n.to_string(),
        other => {
            return Err(McpError::invalid_params(format!(
                "value must be a string or number, got {}",
                other
            )))
        }
    };

    let request = ConversionRequest {
        category: args.category,
        from_unit: args.from_unit,
        to_unit: args.to_unit,
        value,
        scientific: args.scientific.unwrap_or(config.scientific_default),
    };

    match convert_request(&request) {
        Ok(result) => Ok(json!({
            "content": [{
                "type": "text",
                "text": result.display
            }],
            "structuredContent": result
        })),
        Err(e) => {
            let text = render_outcome(&Err(e.clone()));
            let report = ErrorReport::from(e);
            Ok(json!({
                "content": [{
                    "type": "text",
                    "text": text
                }],
                "structuredContent": report.to_json(),
                "isError": true
            }))
        }
    }
}

fn tool_list_categories() -> Result<JsonValue, McpError> {
    let categories: Vec<JsonValue> = Category::all()
        .iter()
        .map(|&c| {
            json!({
                "name": c.name(),
                "kind": UNITS.lookup(c).label()
            })
        })
        .collect();

    let text = Category::all()
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(", ");

    Ok(json!({
        "content": [{
            "type": "text",
            "text": text
        }],
        "structuredContent": { "categories": categories }
    }))
}

#[derive(Debug, Deserialize)]
struct ListUnitsArgs {
    category: String,
}

fn tool_list_units(args: JsonValue) -> Result<JsonValue, McpError> {
    let args: ListUnitsArgs = serde_json::from_value(args)
        .map_err(|e| McpError::invalid_params(format!("Invalid list_units arguments: {}", e)))?;

    let category: Category = match args.category.parse() {
        Ok(c) => c,
        Err(e) => {
            let report = ErrorReport::from(e);
            return Ok(json!({
                "content": [{
                    "type": "text",
                    "text": report.to_string()
                }],
                "structuredContent": report.to_json(),
                "isError": true
            }));
        }
    };

    let units = UNITS.units(category);
    Ok(json!({
        "content": [{
            "type": "text",
            "text": units.join("\n")
        }],
        "structuredContent": {
            "category": category,
            "units": units
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use metron_core::codes;

    fn call(config: &ServerConfig, name: &str, arguments: JsonValue) -> JsonValue {
        let params = Some(json!({"name": name, "arguments": arguments}));
        handle_tool_call(config, &params).unwrap()
    }

    #[test]
    fn test_tools_list() {
        let list = handle_tools_list().unwrap();
        let names: Vec<&str> = list["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["convert", "list_categories", "list_units"]);
        assert_eq!(list["tools"][0]["inputSchema"]["properties"]["category"]["enum"][2], "Temperature");
    }

    #[test]
    fn test_convert_success() {
        let result = call(
            &ServerConfig::default(),
            "convert",
            json!({"category": "Mass", "from_unit": "kilogram (kg)", "to_unit": "gram (g)", "value": "1"}),
        );
        assert_eq!(result["content"][0]["text"], "1 kilogram (kg) = 1000 gram (g)");
        assert_eq!(result["structuredContent"]["formatted"], "1000");
        assert_eq!(result["structuredContent"]["category"], "Mass");
        assert!(result.get("isError").is_none());
    }

    #[test]
    fn test_convert_numeric_value() {
        let result = call(
            &ServerConfig::default(),
            "convert",
            json!({"category": "Temperature", "from_unit": "celsius (°C)", "to_unit": "fahrenheit (°F)", "value": 100}),
        );
        assert_eq!(result["content"][0]["text"], "100 celsius (°C) = 212 fahrenheit (°F)");
    }

    #[test]
    fn test_convert_scientific_default_from_config() {
        let config = ServerConfig {
            scientific_default: true,
            ..ServerConfig::default()
        };
        let args = json!({"category": "Time", "from_unit": "hour (h)", "to_unit": "second (s)", "value": "1"});

        let result = call(&config, "convert", args.clone());
        assert_eq!(result["content"][0]["text"], "1 hour (h) = 3.600000e+03 second (s)");

        let mut explicit = args;
        explicit["scientific"] = json!(false);
        let result = call(&config, "convert", explicit);
        assert_eq!(result["content"][0]["text"], "1 hour (h) = 3600 second (s)");
    }

    #[test]
    fn test_convert_error_is_tool_result() {
        let result = call(
            &ServerConfig::default(),
            "convert",
            json!({"category": "Mass", "from_unit": "gram (g)", "to_unit": "kilogram (kg)", "value": "abc"}),
        );
        assert_eq!(result["isError"], true);
        assert_eq!(
            result["content"][0]["text"],
            "Conversion error: could not convert string to number: 'abc'"
        );
        assert_eq!(result["structuredContent"]["code"], codes::PARSE_ERROR);
    }

    #[test]
    fn test_convert_missing_argument() {
        let params = Some(json!({"name": "convert", "arguments": {"category": "Mass"}}));
        let err = handle_tool_call(&ServerConfig::default(), &params).unwrap_err();
        assert_eq!(err.code, crate::protocol::INVALID_PARAMS);
    }

    #[test]
    fn test_convert_rejects_non_scalar_value() {
        let params = Some(json!({"name": "convert", "arguments": {
            "category": "Mass", "from_unit": "gram (g)", "to_unit": "gram (g)", "value": [1]
        }}));
        assert!(handle_tool_call(&ServerConfig::default(), &params).is_err());
    }

    #[test]
    fn test_list_categories() {
        let result = call(&ServerConfig::default(), "list_categories", json!({}));
        let categories = result["structuredContent"]["categories"].as_array().unwrap();
        assert_eq!(categories.len(), 7);
        assert_eq!(categories[0]["name"], "Mass");
        assert_eq!(categories[2]["kind"], "affine");
        assert_eq!(categories[6]["kind"], "linear");
    }

    #[test]
    fn test_list_units() {
        let result = call(&ServerConfig::default(), "list_units", json!({"category": "Speed"}));
        assert_eq!(result["structuredContent"]["units"], json!(["m/s", "km/h", "mph"]));
        assert_eq!(result["content"][0]["text"], "m/s\nkm/h\nmph");
    }

    #[test]
    fn test_list_units_unknown_category() {
        let result = call(&ServerConfig::default(), "list_units", json!({"category": "Energy"}));
        assert_eq!(result["isError"], true);
        assert_eq!(result["structuredContent"]["code"], codes::UNKNOWN_CATEGORY);
    }

    #[test]
    fn test_unknown_tool() {
        let params = Some(json!({"name": "eval", "arguments": {}}));
        assert!(handle_tool_call(&ServerConfig::default(), &params).is_err());
        assert!(handle_tool_call(&ServerConfig::default(), &None).is_err());
    }
}
