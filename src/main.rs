use minish::Interpreter;

fn main() {
    if let Err(err) = Interpreter::default().repl() {
        eprintln!("minish: {err:#}");
        std::process::exit(1);
    }
}
