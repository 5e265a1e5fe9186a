fn main() {
    if let Err(e) = clex_drv::main() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
