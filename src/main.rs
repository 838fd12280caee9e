//! rClassCal main entrypoint.

use rclasscal::run;
use rclasscal::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
