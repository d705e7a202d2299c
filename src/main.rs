//! timetally main entrypoint.

use timetally::run;

fn main() {
    println!();
    if let Err(e) = run() {
        timetally::ui::messages::error(e);
        std::process::exit(1);
    }
}
