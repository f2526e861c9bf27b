/// Spincube - textured rotating cube in the terminal
///
/// Renders a unit cube whose faces carry a JPEG texture, advancing the
/// rotation by one degree per axis every 10 ms and cycling the texture list
/// once per full X revolution.
/// Controls:
///   - Arrow keys: nudge the cube along X/Y
///   - w/s: nudge the cube along Z
///   - Q/ESC: quit

use std::io;
use std::path::PathBuf;

use spincube_terminal::TerminalApp;

/// Images applied to the cube faces, in cycle order. Missing files are
/// tolerated per face with a logged warning.
const IMAGE_CYCLE: [&str; 2] = ["images/one.jpg", "images/two.jpg"];

fn main() -> io::Result<()> {
    env_logger::init();

    let images: Vec<PathBuf> = IMAGE_CYCLE.into_iter().map(PathBuf::from).collect();

    let mut app = TerminalApp::new(images)?;
    app.run()
}
