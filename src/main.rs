//! parkagg main entrypoint.

use parkagg::run;
use parkagg::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
