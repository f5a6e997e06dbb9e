use serde_json::{json, Value};

use crate::cli::OutputFormat;

/// Output a success message, with the response data in JSON mode
pub fn output_success(output_format: OutputFormat, message: &str, data: Option<Value>) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });
            if let Some(data) = data {
                response["data"] = data;
            }
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Print a list of records as aligned columns, or the raw array in JSON mode
pub fn output_table(
    output_format: OutputFormat,
    rows: &Value,
    columns: &[(&str, &str)],
    empty_message: &str,
) -> anyhow::Result<()> {
    if let OutputFormat::Json = output_format {
        println!("{}", serde_json::to_string_pretty(rows)?);
        return Ok(());
    }

    let rows = rows.as_array().map(Vec::as_slice).unwrap_or_default();
    if rows.is_empty() {
        println!("{}", empty_message);
        return Ok(());
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| columns.iter().map(|(key, _)| cell(&row[*key])).collect())
        .collect();
    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, (_, title))| {
            cells
                .iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(title.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|((_, title), w)| format!("{:<w$}", title, w = *w))
        .collect();
    println!("{}", header.join("  ").trim_end());

    for row in cells {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<w$}", c, w = *w))
            .collect();
        println!("{}", line.join("  ").trim_end());
    }
    Ok(())
}

/// Print one record as `key: value` lines, or pretty JSON
pub fn output_record(output_format: OutputFormat, record: &Value) -> anyhow::Result<()> {
    match (output_format, record.as_object()) {
        (OutputFormat::Text, Some(fields)) => {
            let width = fields.keys().map(|k| k.len()).max().unwrap_or(0);
            for (key, value) in fields {
                println!("{:<width$}  {}", key, cell(value), width = width);
            }
        }
        _ => println!("{}", serde_json::to_string_pretty(record)?),
    }
    Ok(())
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_render_without_quotes() {
        assert_eq!(cell(&json!("Por Iniciar")), "Por Iniciar");
        assert_eq!(cell(&Value::Null), "-");
        assert_eq!(cell(&json!(87.5)), "87.5");
        assert_eq!(cell(&json!(true)), "true");
    }
}
