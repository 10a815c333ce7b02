use super::Format;

pub(crate) fn run(format: Format) {
    let table = snipgen::LANGUAGE_LABELS;
    match format {
        Format::Text => {
            let width = table.iter().map(|(file, _)| file.len()).max().unwrap_or(0);
            for (file, label) in table {
                println!("{file:<width$}  {label}");
            }
        }
        Format::Json => {
            let entries: Vec<serde_json::Value> = table
                .iter()
                .map(|(file, label)| serde_json::json!({ "file": file, "language": label }))
                .collect();
            match serde_json::to_string_pretty(&entries) {
                Ok(s) => println!("{s}"),
                Err(e) => {
                    eprintln!("snipgen languages: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
