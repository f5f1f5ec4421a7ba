use std::io::{self, stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute, terminal,
};
use folio_config::{Config, ConfigSource};
use folio_core::{CellMetrics, Rgb};
use folio_field::{DrawList, FieldWidget, FrameLoop, ParticleField};
use folio_page::{PageSettings, PageState};
use ratatui::{DefaultTerminal, Frame};

mod logging;

/// Rows moved per mouse wheel notch.
const WHEEL_ROWS: f64 = 3.0;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let (config, source) = Config::load()?;
    if let Err(err) = logging::init(&config.log) {
        eprintln!("folio: logging disabled: {err}");
    }
    log_config_source(&source);
    log::info!("starting with {:?}", config.field);

    let terminal = ratatui::init();
    with_restore(
        || execute!(stdout(), EnableMouseCapture, EnableFocusChange),
        || App::new(&config).run(terminal),
        || execute!(stdout(), DisableMouseCapture, DisableFocusChange),
        ratatui::restore,
    )
}

/// Runs `body` between `enable` and `disable`. `restore` is always called,
/// whichever step fails, and the first error wins.
fn with_restore(
    enable: impl FnOnce() -> io::Result<()>,
    body: impl FnOnce() -> color_eyre::Result<()>,
    disable: impl FnOnce() -> io::Result<()>,
    restore: impl FnOnce(),
) -> color_eyre::Result<()> {
    let result = enable().map_err(Into::into).and_then(|()| body());
    let disabled = disable();
    restore();
    result?;
    disabled?;
    Ok(())
}

fn log_config_source(source: &ConfigSource) {
    match source {
        ConfigSource::File(path) => log::info!("loaded configuration from {}", path.display()),
        ConfigSource::Defaults => log::info!("no configuration file found, using defaults"),
    }
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Drifting symbols behind the page.
    field: ParticleField,
    /// Paces and pauses the field animation.
    frames: FrameLoop,
    /// Last field frame, painted every draw.
    surface: DrawList,
    /// Page content and interaction state.
    page: PageState,
    /// Cell size used when the terminal doesn't report pixels.
    fallback_metrics: CellMetrics,
    /// Cell size in effect since the last resize.
    metrics: CellMetrics,
    /// Back-to-top threshold in pixels.
    back_to_top_px: u32,
    /// Background the field is blended over.
    background: Rgb,
    /// When the page opened, for the typing effect.
    started: Instant,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: &Config) -> Self {
        let metrics = config.field.cell_metrics();
        let field = match config.field.seed {
            Some(seed) => ParticleField::with_seed(Default::default(), seed),
            None => ParticleField::new(Default::default()),
        };
        let settings = PageSettings {
            typing_delay: config.page.typing_delay(),
            typing_interval: config.page.typing_interval(),
            back_to_top_rows: metrics.rows_for(config.page.back_to_top_px),
        };
        Self {
            running: false,
            field,
            frames: FrameLoop::new(config.field.frame_interval()),
            surface: DrawList::new(),
            page: PageState::new(config.page.profile(), settings),
            fallback_metrics: metrics,
            metrics,
            back_to_top_px: config.page.back_to_top_px,
            background: config.field.background(),
            started: Instant::now(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.frames.run();
        let size = terminal.size()?;
        self.on_resize(size.width, size.height);

        while self.running {
            let now = Instant::now();
            if self.frames.poll_frame(now) {
                self.field.tick(&mut self.surface);
            }
            self.page.update(now.duration_since(self.started));
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let field = FieldWidget::new(&self.surface, self.field.viewport(), self.background);
        frame.render_widget(field, frame.area());
        self.page.render(frame);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits at most until the next animation frame is due.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = self
            .frames
            .until_next(Instant::now())
            .unwrap_or(self.frames.interval());
        if event::poll(timeout)? {
            self.on_event(event::read()?);
            // Drain the backlog so a burst of mouse moves costs one frame.
            while event::poll(Duration::ZERO)? {
                self.on_event(event::read()?);
            }
        }
        Ok(())
    }

    fn on_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            Event::Mouse(mouse) => self.on_mouse_event(mouse),
            Event::Resize(width, height) => self.on_resize(width, height),
            Event::FocusLost => self.field.on_pointer_leave(),
            _ => {}
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('j') | KeyCode::Down) => self.page.scroll_by(1.0),
            (_, KeyCode::Char('k') | KeyCode::Up) => self.page.scroll_by(-1.0),
            (_, KeyCode::PageDown | KeyCode::Char(' ')) => self.page.page_down(),
            (_, KeyCode::PageUp) => self.page.page_up(),
            (_, KeyCode::Char('g') | KeyCode::Char('t') | KeyCode::Home) => {
                self.page.back_to_top()
            }
            (_, KeyCode::Char('m')) => self.page.toggle_menu(),
            (_, KeyCode::Char('p')) => self.toggle_animation(),
            (_, KeyCode::Char(c @ '1'..='9')) => {
                let index = (c as usize) - ('1' as usize);
                self.page.select_link(index);
            }
            _ => {}
        }
    }

    /// Handles mouse movement, wheel and clicks.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let at = self.metrics.cell_center(mouse.column, mouse.row);
                self.field.on_pointer_move(at);
            }
            MouseEventKind::ScrollDown => self.page.scroll_by(WHEEL_ROWS),
            MouseEventKind::ScrollUp => self.page.scroll_by(-WHEEL_ROWS),
            MouseEventKind::Down(MouseButton::Left) => {
                self.page.click(mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    /// Re-measure the terminal and rebuild the field and page layout.
    fn on_resize(&mut self, width: u16, height: u16) {
        let metrics = terminal::window_size()
            .ok()
            .and_then(|ws| CellMetrics::from_window(ws.columns, ws.rows, ws.width, ws.height))
            .unwrap_or(self.fallback_metrics);
        self.apply_size(width, height, metrics);
    }

    fn apply_size(&mut self, width: u16, height: u16, metrics: CellMetrics) {
        self.metrics = metrics;
        let viewport = metrics.viewport(width, height);
        self.field.on_resize(viewport);
        self.page.resize(width, height);
        self.page.set_back_to_top_rows(metrics.rows_for(self.back_to_top_px));
        log::info!(
            "resized to {width}x{height} cells ({}x{} px cells), {} particles",
            metrics.cell_width,
            metrics.cell_height,
            self.field.particles().len()
        );
    }

    /// Pause or resume the field animation.
    fn toggle_animation(&mut self) {
        self.frames.toggle();
        log::info!(
            "animation {}",
            if self.frames.is_running() {
                "resumed"
            } else {
                "paused"
            }
        );
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
