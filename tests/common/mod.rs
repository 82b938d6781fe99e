use serde_json::json;
use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub const SUFFICIENT: &str = r#"{"events":[{"event":"slot","timestamp":null,"name":"has_sufficient_funds","value":true}],"responses":[]}"#;
pub const INSUFFICIENT: &str = r#"{"events":[{"event":"slot","timestamp":null,"name":"has_sufficient_funds","value":false}],"responses":[]}"#;

pub fn funds_call(amount: serde_json::Value) -> String {
    json!({
        "next_action": "action_check_sufficient_funds",
        "sender_id": "test-user",
        "tracker": {
            "sender_id": "test-user",
            "slots": { "amount": amount }
        }
    })
    .to_string()
}

pub fn calls_file(lines: &[String]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    for line in lines {
        writeln!(file, "{}", line)?;
    }
    file.flush()?;
    Ok(file)
}
