use std::process::exit;

fn main() {
    if let Err(e) = contacts_skill::run_app() {
        eprintln!("Error: {e}");
        exit(1);
    }
}
