use serde_json::json;

/// Returns the JSON schema constraining LLM classification responses.
pub fn classification_response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "level": {
                "type": "string",
                "enum": ["green", "yellow", "red"]
            },
            "reason": { "type": "string" },
            "advice": { "type": "string" }
        },
        "required": ["level", "reason", "advice"]
    })
}

/// Returns the JSON schema constraining LLM recipe responses.
pub fn recipe_response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "dishName": { "type": "string" },
            "tags": {
                "type": "array",
                "items": { "type": "string" }
            },
            "ingredients": {
                "type": "array",
                "items": { "type": "string" }
            },
            "steps": {
                "type": "array",
                "items": { "type": "string" }
            },
            "nutritionBenefit": { "type": "string" }
        },
        "required": ["dishName", "tags", "ingredients", "steps", "nutritionBenefit"]
    })
}
