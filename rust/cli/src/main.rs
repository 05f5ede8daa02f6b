use std::io;

fn main() {
    let code = hilo_cli::run(
        std::env::args().collect::<Vec<_>>(),
        &mut io::stdout(),
        &mut io::stderr(),
    );
    std::process::exit(code);
}
