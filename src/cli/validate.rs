use std::path::PathBuf;

use super::Format;

pub(crate) fn run(snippets: PathBuf, format: Format) {
    let report = match snipgen::aggregate(&snippets) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("snipgen validate: {e}");
            std::process::exit(1);
        }
    };

    match format {
        Format::Text => {
            for f in &report.files {
                eprintln!("{} ({}): {} snippet(s)", f.file_name, f.language, f.entries);
            }
            eprintln!("ok");
        }
        Format::Json => {
            let json = serde_json::json!({
                "files": report.files,
                "snippets": report.snippets.len(),
            });
            match serde_json::to_string_pretty(&json) {
                Ok(s) => println!("{s}"),
                Err(e) => {
                    eprintln!("snipgen validate: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
