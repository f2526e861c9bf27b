/// Terminal frontend: raw-mode event loop driving the cube animation
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{self, stdout, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use spincube_core::{AnimState, Effect, InputEvent, Scene, Transform, TranslationKey};

pub mod renderer;

pub use renderer::CellRenderer;

/// Animation timer period
const TICK: Duration = Duration::from_millis(10);

/// What a key press means to the application
enum KeyAction {
    Translate(TranslationKey),
    Quit,
    Ignore,
}

fn map_key(code: KeyCode) -> KeyAction {
    match code {
        KeyCode::Left => KeyAction::Translate(TranslationKey::Left),
        KeyCode::Right => KeyAction::Translate(TranslationKey::Right),
        KeyCode::Up => KeyAction::Translate(TranslationKey::Up),
        KeyCode::Down => KeyAction::Translate(TranslationKey::Down),
        KeyCode::Char('w') => KeyAction::Translate(TranslationKey::Forward),
        KeyCode::Char('s') => KeyAction::Translate(TranslationKey::Backward),
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        _ => KeyAction::Ignore,
    }
}

/// Terminal application: owns the scene, the animation state, and the image
/// cycle list
pub struct TerminalApp {
    scene: Scene,
    anim: AnimState,
    images: Vec<PathBuf>,
    renderer: CellRenderer,
    running: bool,
}

impl TerminalApp {
    /// Assemble the scene from the first cycle image and size the viewport
    /// from the terminal.
    pub fn new(images: Vec<PathBuf>) -> io::Result<Self> {
        if images.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "image cycle list is empty",
            ));
        }

        let (width, height) = terminal::size()?;
        log::debug!("terminal viewport: {}x{} cells", width, height);
        let scene = Scene::build(&images[0], width as u32, height as u32);
        let anim = AnimState::new(images.len());

        Ok(Self {
            scene,
            anim,
            images,
            renderer: CellRenderer::new(width as usize, height as usize),
            running: true,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    /// One blocking wait per iteration: either a key arrives or the next
    /// tick deadline passes. Timer and key events are dispatched serially on
    /// this thread.
    fn main_loop(&mut self) -> io::Result<()> {
        let mut next_tick = Instant::now() + TICK;

        while self.running {
            let now = Instant::now();
            if now >= next_tick {
                next_tick += TICK;
                self.dispatch(InputEvent::Tick)?;
                continue;
            }

            if event::poll(next_tick - now)? {
                if let Event::Key(KeyEvent { code, .. }) = event::read()? {
                    match map_key(code) {
                        KeyAction::Translate(key) => self.dispatch(InputEvent::Key(key))?,
                        KeyAction::Quit => self.running = false,
                        KeyAction::Ignore => {}
                    }
                }
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, event: InputEvent) -> io::Result<()> {
        match self.anim.apply(event) {
            Effect::Redraw => self.render()?,
            Effect::CycleTextures { image_index } => {
                // Synchronous reload; decode time blocks the render thread.
                self.scene.cycle_textures(&self.images[image_index]);
                self.render()?;
            }
            Effect::TranslationChanged => {
                // Takes effect on the next tick's transform rebuild.
            }
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let model = Transform::model_matrix(&self.anim.translation, &self.anim.rotation);

        self.renderer.clear();
        for actor in &self.scene.actors {
            self.renderer.render_actor(actor, &model, &self.scene.camera);
        }

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;
        self.renderer.draw(&mut stdout)?;

        // Status overlay
        let image = self.images[self.anim.image_index].display();
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "spincube | image: {} | arrows=move x/y w/s=move z q=quit",
                image
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
