//! tourreport main entrypoint.

use tourreport::run;
use tourreport::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
