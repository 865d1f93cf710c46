use std::{
    io::{Stdout, Write},
    time::{Duration, Instant},
};

use crossterm::{
    ExecutableCommand, QueueableCommand, cursor,
    event::{self, KeyCode},
    queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};

use crate::{
    maze::{Coord, Maze},
    render::{Canvas, Glyph, Layout},
};

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    CreateMaze,
    ShowMaze,
    FindPath,
    Exit,
}

impl std::fmt::Display for MenuAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuAction::CreateMaze => write!(f, "Create maze"),
            MenuAction::ShowMaze => write!(f, "Show maze"),
            MenuAction::FindPath => write!(f, "Find path"),
            MenuAction::Exit => write!(f, "Exit"),
        }
    }
}

/// Timings of one generate-and-solve round, see [`App::profile`].
#[derive(Debug, Clone, Copy)]
pub struct ProfileSample {
    pub seed: u64,
    pub generation: Duration,
    pub search: Duration,
    pub path_len: usize,
}

pub struct App {
    /// Layout used whenever a maze is shown
    layout: Layout,
    /// Seed used for the next maze instead of OS entropy
    seed: Option<u64>,
    /// The current maze, if one has been created
    maze: Option<Maze>,
}

impl App {
    /// Available menu actions
    const ACTIONS: [MenuAction; 4] = [
        MenuAction::CreateMaze,
        MenuAction::ShowMaze,
        MenuAction::FindPath,
        MenuAction::Exit,
    ];

    pub fn new(layout: Layout, seed: Option<u64>) -> Self {
        Self {
            layout,
            seed,
            maze: None,
        }
    }

    /// Starts the session with an already carved maze.
    pub fn with_maze(mut self, maze: Maze) -> Self {
        self.maze = Some(maze);
        self
    }

    pub fn maze(&self) -> Option<&Maze> {
        self.maze.as_ref()
    }

    /// Corner to corner route of a maze: from the top-left cell to the bottom-right one.
    pub fn corners(maze: &Maze) -> (Coord, Coord) {
        ((0, 0), (maze.width() - 1, maze.height() - 1))
    }

    /// Set a panic hook to restore terminal state on panic
    /// This ensures that the terminal is not left in raw mode or alternate screen on panic
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode and enter alternate screen
    /// Also sets a panic hook to restore terminal on panic
    pub fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Restore terminal to original state
    /// Leave alternate screen and disable raw mode
    pub fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Main application loop
    pub fn run(&mut self, stdout: &mut Stdout) -> std::io::Result<()> {
        tracing::info!("Started main app loop");
        loop {
            queue!(
                stdout,
                terminal::Clear(ClearType::All),
                cursor::MoveTo(0, 0)
            )?;
            self.print_status(stdout)?;

            let action = match App::select_from_menu(
                stdout,
                "Select an action (use arrow keys and Enter, or Esc to exit):",
                &App::ACTIONS,
            )? {
                Some(action) => action,
                None => break,
            };
            tracing::debug!("[app loop] selected action: {}", action);

            match action {
                MenuAction::CreateMaze => self.create_maze(stdout)?,
                MenuAction::ShowMaze => self.show_maze(stdout, false)?,
                MenuAction::FindPath => self.show_maze(stdout, true)?,
                MenuAction::Exit => break,
            }
        }
        tracing::info!("Exiting main app loop");
        Ok(())
    }

    fn print_status(&self, stdout: &mut Stdout) -> std::io::Result<()> {
        let status = match &self.maze {
            Some(maze) => format!(
                "Current maze: {}x{} (seed {})\r\n",
                maze.width(),
                maze.height(),
                maze.seed()
            ),
            None => "No maze created yet.\r\n".to_owned(),
        };
        stdout.queue(style::PrintStyledContent(
            status.with(Color::Blue).attribute(Attribute::Bold),
        ))?;
        Ok(())
    }

    fn create_maze(&mut self, stdout: &mut Stdout) -> std::io::Result<()> {
        let (width, height) = match App::ask_maze_dimensions(stdout)? {
            Some(dims) => dims,
            None => return Ok(()),
        };
        let seed = match App::ask_seed(stdout, self.seed)? {
            Some(seed) => seed,
            None => return Ok(()),
        };

        let result = match seed {
            Some(seed) => Maze::with_seed(width, height, seed),
            None => Maze::from_entropy(width, height),
        };
        match result {
            Ok(maze) => {
                tracing::info!(
                    "[app] created {}x{} maze with seed {}",
                    width,
                    height,
                    maze.seed()
                );
                self.maze = Some(maze);
            }
            Err(e) => {
                tracing::warn!("[app] failed to create maze: {}", e);
                App::show_message(stdout, &format!("Could not create maze: {}", e), Color::Red)?;
            }
        }
        Ok(())
    }

    /// Print the current maze, with the corner to corner route when `with_path` is set.
    fn show_maze(&self, stdout: &mut Stdout, with_path: bool) -> std::io::Result<()> {
        let Some(maze) = &self.maze else {
            return App::show_message(stdout, "Create a maze first.", Color::Yellow);
        };

        let (term_width, term_height) = terminal::size()?;
        let canvas = Canvas::new(maze.grid(), self.layout, None, None);
        // Reserve two rows for the summary and the exit hint
        if term_width < (canvas.width() as u16).saturating_mul(Glyph::GLYPH_WIDTH)
            || (term_height as usize) < canvas.height() + 2
        {
            let msg = format!(
                "Terminal size ({}x{}) is too small to display the maze ({}x{} glyphs). Please resize the terminal.",
                term_width,
                term_height,
                canvas.width(),
                canvas.height()
            );
            return App::show_message(stdout, &msg, Color::Yellow);
        }

        let (canvas, summary) = if with_path {
            let (start, goal) = App::corners(maze);
            match maze.pathfind(start, goal) {
                Ok(path) => {
                    tracing::info!("[app] path from {:?} to {:?} has {} steps", start, goal, path.len());
                    (
                        Canvas::new(maze.grid(), self.layout, Some(&path), Some(start)),
                        format!("Path from {:?} to {:?}: {} steps", start, goal, path.len()),
                    )
                }
                Err(e) => {
                    tracing::warn!("[app] path finding failed: {}", e);
                    return App::show_message(stdout, &format!("Could not find a path: {}", e), Color::Red);
                }
            }
        } else {
            (canvas, format!("Maze {}x{}, seed {}", maze.width(), maze.height(), maze.seed()))
        };

        queue!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        canvas.print(stdout)?;
        stdout.queue(style::PrintStyledContent(
            format!("{}\r\n", summary)
                .with(Color::Green)
                .attribute(Attribute::Bold),
        ))?;
        App::prompt_esc(stdout)
    }

    fn show_message(stdout: &mut Stdout, msg: &str, color: Color) -> std::io::Result<()> {
        stdout.queue(style::PrintStyledContent(
            format!("{}\r\n", msg).with(color).attribute(Attribute::Bold),
        ))?;
        App::prompt_esc(stdout)
    }

    fn prompt_esc(stdout: &mut Stdout) -> std::io::Result<()> {
        stdout.execute(style::PrintStyledContent(
            "Press Esc to continue...\r\n"
                .with(Color::Blue)
                .attribute(Attribute::Bold),
        ))?;
        App::wait_for_esc()
    }

    /// Wait for the user to press the Esc key
    /// This function blocks until Esc is pressed
    fn wait_for_esc() -> std::io::Result<()> {
        loop {
            if let event::Event::Key(event::KeyEvent { code, kind, .. }) = event::read()? {
                if code == KeyCode::Esc && kind == event::KeyEventKind::Press {
                    break;
                }
            }
        }
        Ok(())
    }

    /// Get user input with real-time validation and feedback
    /// Returns None if user cancels input with Esc
    /// Returns Some(T) if user inputs a valid input and presses Enter, where T is the validated type
    fn prompt_with_validation<F, T>(
        stdout: &mut Stdout,
        prompt: &str,
        validate: F,
    ) -> std::io::Result<Option<T>>
    where
        F: Fn(&str) -> Result<T, String>,
    {
        // Save cursor position so we can restore / redraw
        queue!(stdout, cursor::Hide, cursor::SavePosition)?;
        stdout.flush()?;

        let mut input = String::new();

        let value = loop {
            // Re-render prompt line
            queue!(
                stdout,
                cursor::RestorePosition,
                terminal::Clear(ClearType::FromCursorDown)
            )?;

            stdout.queue(style::PrintStyledContent(
                prompt.with(Color::Cyan).attribute(Attribute::Bold),
            ))?;

            // Decide color based on validity
            let validation_result = validate(input.trim());
            match validation_result {
                Ok(_) => {
                    stdout.queue(style::SetForegroundColor(Color::Green))?;
                }
                Err(_) => {
                    stdout.queue(style::SetForegroundColor(Color::Red))?;
                }
            }

            queue!(stdout, style::Print(&input), style::ResetColor)?;

            stdout.queue(style::Print(" \r\n"))?;

            // Error message line (if any)
            if let Err(msg) = validation_result {
                stdout.queue(style::PrintStyledContent(
                    msg.with(Color::DarkGrey).attribute(Attribute::Dim),
                ))?;
            }

            stdout.flush()?;

            if let event::Event::Key(event::KeyEvent { code, kind, .. }) = event::read()? {
                match code {
                    KeyCode::Enter => match validate(input.trim()) {
                        Ok(value) => break Some(value),
                        Err(_) => continue,
                    },
                    KeyCode::Char(c) if kind == event::KeyEventKind::Press => {
                        if !c.is_whitespace() && !c.is_control() {
                            input.push(c);
                        }
                    }
                    KeyCode::Backspace => {
                        input.pop();
                    }
                    KeyCode::Esc => {
                        // User cancelled input
                        break None;
                    }
                    _ => {}
                }
            }
        };
        // Cleanup
        queue!(
            stdout,
            cursor::RestorePosition,
            terminal::Clear(ClearType::FromCursorDown),
            cursor::Show
        )?;
        stdout.flush()?;

        Ok(value)
    }

    /// Ask user for maze dimensions
    /// Returns None if user cancels input with Esc
    fn ask_maze_dimensions(stdout: &mut Stdout) -> std::io::Result<Option<(u16, u16)>> {
        stdout.execute(style::PrintStyledContent(
            format!(
                "Enter maze dimensions (width and height between 1 and {}), or press Esc to cancel.\r\n",
                u16::MAX
            )
            .with(Color::Blue),
        ))?;

        let width = match App::prompt_with_validation(stdout, "Width: ", parse_dimension)? {
            Some(w) => w,
            None => return Ok(None),
        };
        stdout.execute(style::PrintStyledContent(
            format!("Width set to {}\r\n", width)
                .with(Color::Green)
                .attribute(Attribute::Bold),
        ))?;

        let height = match App::prompt_with_validation(stdout, "Height: ", parse_dimension)? {
            Some(h) => h,
            None => return Ok(None),
        };
        stdout.execute(style::PrintStyledContent(
            format!("Height set to {}\r\n", height)
                .with(Color::Green)
                .attribute(Attribute::Bold),
        ))?;

        Ok(Some((width, height)))
    }

    /// Ask user for a seed. An empty input keeps `default`, which may be no seed at all.
    /// Returns None if user cancels input with Esc
    fn ask_seed(stdout: &mut Stdout, default: Option<u64>) -> std::io::Result<Option<Option<u64>>> {
        let hint = match default {
            Some(seed) => format!("Enter a seed, or leave empty to use {}.\r\n", seed),
            None => "Enter a seed, or leave empty for a random maze.\r\n".to_owned(),
        };
        stdout.execute(style::PrintStyledContent(hint.with(Color::Blue)))?;
        App::prompt_with_validation(stdout, "Seed: ", |s| parse_seed(s, default))
    }

    /// Present a menu of options to the user and let them select one using arrow keys
    /// Returns None if user cancels input with Esc
    /// Returns Some(T) if user selects an option and presses Enter, where T is the option type
    fn select_from_menu<T: std::fmt::Display + Copy>(
        stdout: &mut Stdout,
        prompt: &str,
        options: &[T],
    ) -> std::io::Result<Option<T>> {
        if options.is_empty() {
            return Ok(None);
        }

        // Save cursor position so we can restore / redraw
        queue!(stdout, cursor::Hide, cursor::SavePosition)?;

        let mut selected = 0;

        let selected_option = loop {
            queue!(
                stdout,
                cursor::RestorePosition,
                terminal::Clear(ClearType::FromCursorDown)
            )?;

            stdout.queue(style::PrintStyledContent(prompt.with(Color::Yellow)))?;

            for (i, option) in options.iter().enumerate() {
                if i == selected {
                    stdout.queue(style::SetAttribute(Attribute::Reverse))?;
                }
                stdout.queue(style::Print(format!("\r\n{}", option)))?;
                if i == selected {
                    stdout.queue(style::SetAttribute(Attribute::NoReverse))?;
                }
            }
            stdout.queue(style::Print("\r\n"))?;

            stdout.flush()?;

            if let event::Event::Key(event::KeyEvent { code, kind, .. }) = event::read()? {
                if kind != event::KeyEventKind::Press {
                    // Only handle key press events
                    continue;
                }
                match code {
                    KeyCode::Up => {
                        selected = match selected {
                            0 => options.len() - 1,
                            _ => selected - 1,
                        };
                    }
                    KeyCode::Down => {
                        selected = if selected >= options.len() - 1 {
                            0
                        } else {
                            selected + 1
                        };
                    }
                    KeyCode::Enter => {
                        break Some(options[selected]);
                    }
                    KeyCode::Esc => {
                        break None;
                    }
                    _ => {}
                }
            }
        };
        // Cleanup
        queue!(
            stdout,
            cursor::RestorePosition,
            terminal::Clear(ClearType::FromCursorDown),
            cursor::Show
        )?;
        stdout.flush()?;

        Ok(selected_option)
    }

    /// Profiling mode: generate and solve `iterations` mazes corner to corner without
    /// touching the terminal, seeding round `i` with `i`.
    pub fn profile(
        width: u16,
        height: u16,
        iterations: u64,
    ) -> crate::error::Result<Vec<ProfileSample>> {
        let mut samples = Vec::new();
        for seed in 0..iterations {
            let started = Instant::now();
            let maze = Maze::with_seed(width, height, seed)?;
            let generation = started.elapsed();

            let (start, goal) = App::corners(&maze);
            let started = Instant::now();
            let path = maze.pathfind(start, goal)?;
            let search = started.elapsed();

            tracing::info!(
                "[profile] seed {}: generation {:?}, search {:?}, path length {}",
                seed,
                generation,
                search,
                path.len()
            );
            samples.push(ProfileSample {
                seed,
                generation,
                search,
                path_len: path.len(),
            });
        }
        Ok(samples)
    }
}

/// Validate a maze dimension typed by the user.
fn parse_dimension(s: &str) -> Result<u16, String> {
    let error_msg = format!("Please enter a valid number between 1 and {}.", u16::MAX);
    match s.parse::<u16>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(error_msg),
    }
}

/// Validate a seed typed by the user. Empty input falls back to `default`.
fn parse_seed(s: &str, default: Option<u64>) -> Result<Option<u64>, String> {
    if s.is_empty() {
        return Ok(default);
    }
    s.parse::<u64>()
        .map(Some)
        .map_err(|_| format!("Please enter a number between 0 and {}.", u64::MAX))
}
