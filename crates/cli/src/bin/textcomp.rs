use cli::{install_panic_sentinel, textcomp};
use std::process::ExitCode;

fn main() -> ExitCode {
    install_panic_sentinel(textcomp::FAILURE);
    let code = textcomp::run(std::env::args_os(), &mut std::io::stdout());
    ExitCode::from(code)
}
