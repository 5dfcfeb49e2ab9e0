use serde_json::Value;

/// Headline figure of each command, as JSON pointers into the result. The
/// first non-null hit wins.
const PRIORITY_POINTERS: &[&str] = &[
    "/score",
    "/summary/overall_position",
    "/ma_score/score",
    "/summary",
    "/explanation",
    "/latest/ebitda_margin",
];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_text(value));
}

fn minimal_text(value: &Value) -> String {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    for pointer in PRIORITY_POINTERS {
        if let Some(val) = result_obj.pointer(pointer) {
            if !val.is_null() {
                return format_minimal(val);
            }
        }
    }

    if let Value::Object(map) = result_obj {
        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, format_minimal(val));
        }
    }
    format_minimal(result_obj)
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ma_score_prints_score() {
        let v = json!({ "score": 79, "is_eligible": true, "summary": "..." });
        assert_eq!(minimal_text(&v), "79");
    }

    #[test]
    fn test_benchmark_prints_position() {
        let v = json!({ "comparisons": [], "summary": { "overall_position": "leader" } });
        assert_eq!(minimal_text(&v), "leader");
    }

    #[test]
    fn test_report_envelope_prints_nested_score() {
        let v = json!({ "result": { "ma_score": { "score": 55 } }, "warnings": [] });
        assert_eq!(minimal_text(&v), "55");
    }

    #[test]
    fn test_narrative_prints_summary() {
        let v = json!({ "summary": "Nel complesso...", "sections": [] });
        assert_eq!(minimal_text(&v), "Nel complesso...");
    }
}
