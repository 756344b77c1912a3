fn main() {
    let args = std::env::args().skip(1);
    if let Err(e) = crema_drv::run(args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
