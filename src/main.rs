//! medialedger main entrypoint.

use medialedger::run;

fn main() {
    if let Err(e) = run() {
        medialedger::ui::messages::error(e.to_string());
        std::process::exit(1);
    }
}
