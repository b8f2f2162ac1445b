use starter_cli::cli;

fn main() {
    match cli::run() {
        Ok(result) if result.success => {}
        Ok(_) => std::process::exit(1),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    }
}
