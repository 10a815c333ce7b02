use std::path::PathBuf;

pub(crate) fn run(snippets: PathBuf, output: PathBuf, check: bool) {
    if check {
        match snipgen::check(&snippets, &output) {
            Ok(outcome) if outcome.up_to_date => eprintln!("ok"),
            Ok(outcome) => {
                eprintln!("Would regenerate: {}", output.display());
                eprint!("{}", outcome.diff);
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("snipgen build: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    match snipgen::run(&snippets, &output) {
        Ok(result) => {
            println!(
                "Generated {} snippet(s) from {} file(s):",
                result.snippets_count, result.files_count
            );
            println!("   {}", result.output_path.display());
        }
        Err(e) => {
            eprintln!("snipgen build: {e}");
            std::process::exit(1);
        }
    }
}
