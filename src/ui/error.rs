//! Error rendering

pub fn format_error(err: &anyhow::Error) -> String {
    format!("[ERROR] {}", err)
}

pub fn print_error(err: &anyhow::Error) {
    eprintln!("{}", format_error(err));
}
