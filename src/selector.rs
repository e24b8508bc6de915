use std::{
    io::{self, Write},
    path::PathBuf,
};
use log::debug;
use colored::Colorize;
use crate::{
    config::Config,
    project::ProjectRecord,
    keys::{KeyReader, CTRL_C, CTRL_D},
};

/// how a selector session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// a project directory was chosen and printed
    Selected(PathBuf),
    /// the user quit, or input ran out
    Quit,
    /// there was nothing to choose from
    NoProjects,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Selected(_) | Outcome::Quit => 0,
            Outcome::NoProjects => 1,
        }
    }
}

enum ControlFlow {
    Continue,
    Exit(Outcome),
}

/// numbered, keystroke-driven project picker
///
/// Everything meant for a human goes to the `status` writer. The `out` writer
/// receives the chosen path and nothing else, so a shell wrapper can capture it.
pub struct Selector {
    config: Config,
    projects: Vec<ProjectRecord>,
    show_all: bool,
    displayed: Vec<usize>,
}

impl Selector {
    pub fn new(config: Config, projects: Vec<ProjectRecord>) -> Self {
        let mut selector = Self {
            config,
            projects,
            show_all: false,
            displayed: Vec::new(),
        };
        selector.refresh();
        selector
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    /// records currently on screen, in menu order
    pub fn displayed(&self) -> Vec<&ProjectRecord> {
        self.displayed.iter().map(|&i| &self.projects[i]).collect()
    }

    pub fn archived_count(&self) -> usize {
        self.projects.iter().filter(|p| p.is_archived()).count()
    }

    pub fn run<K, E, O>(
        &mut self,
        keys: &mut K,
        status: &mut E,
        out: &mut O,
    ) -> io::Result<Outcome>
    where
        K: KeyReader,
        E: Write,
        O: Write,
    {
        if self.projects.is_empty() {
            writeln!(status, "No projects found.")?;
            return Ok(Outcome::NoProjects);
        }

        self.render(status)?;

        loop {
            let key = match keys.read_key() {
                Ok(Some(key)) => key,
                Ok(None) => {
                    debug!("end of input");
                    return self.quit(status);
                }
                Err(err) => {
                    debug!("key read failed, treating as end of input: {err}");
                    return self.quit(status);
                }
            };

            match self.handle_key(key, status, out)? {
                ControlFlow::Exit(outcome) => return Ok(outcome),
                ControlFlow::Continue => continue,
            }
        }
    }

    fn handle_key<E: Write, O: Write>(
        &mut self,
        key: char,
        status: &mut E,
        out: &mut O,
    ) -> io::Result<ControlFlow> {
        debug!("key pressed: {key:?}");

        match key.to_ascii_lowercase() {
            CTRL_C | CTRL_D | 'q' => Ok(ControlFlow::Exit(self.quit(status)?)),

            'a' if !self.show_all && self.has_hidden() => {
                self.show_all = true;
                self.refresh();
                self.render(status)?;
                Ok(ControlFlow::Continue)
            }

            c => match c.to_digit(10) {
                Some(digit) => self.choose(digit as usize, status, out),
                None => Ok(ControlFlow::Continue),
            },
        }
    }

    fn choose<E: Write, O: Write>(
        &self,
        number: usize,
        status: &mut E,
        out: &mut O,
    ) -> io::Result<ControlFlow> {
        let count = self.displayed.len();
        if number == 0 || number > count {
            writeln!(status, "{}", format!(" (1-{count})").dimmed())?;
            return Ok(ControlFlow::Continue);
        }

        let project = &self.projects[self.displayed[number - 1]];
        let path = self.config.project_path(&project.folder);

        if !path.exists() {
            writeln!(status, "{}", format!("Directory not found: {}", path.display()).red())?;
            return Ok(ControlFlow::Continue);
        }

        writeln!(status, "\n  {}\n", format!("Opening {}...", project.display_name()).green())?;
        status.flush()?;

        writeln!(out, "{}", path.display())?;
        out.flush()?;

        Ok(ControlFlow::Exit(Outcome::Selected(path)))
    }

    fn quit<E: Write>(&self, status: &mut E) -> io::Result<Outcome> {
        writeln!(status)?;
        status.flush()?;
        Ok(Outcome::Quit)
    }

    fn has_hidden(&self) -> bool {
        self.displayed.len() < self.projects.len()
    }

    /// recompute the visible subset: active only unless showing all, newest folder first
    fn refresh(&mut self) {
        let mut displayed: Vec<usize> = (0..self.projects.len())
            .filter(|&i| self.show_all || self.projects[i].is_active())
            .collect();

        displayed.sort_by(|&a, &b| self.projects[b].folder.cmp(&self.projects[a].folder));

        self.displayed = displayed;
    }

    fn render<E: Write>(&self, status: &mut E) -> io::Result<()> {
        writeln!(status)?;

        if self.displayed.is_empty() {
            writeln!(status, "  No active projects.")?;
        }

        for (i, project) in self.displayed().into_iter().enumerate() {
            if project.is_active() {
                writeln!(status, "  {}. {}", i + 1, project.display_name())?;
            } else {
                writeln!(
                    status,
                    "  {}. {}{}",
                    i + 1,
                    project.display_name(),
                    " (archived)".dimmed()
                )?;
            }
        }

        writeln!(status)?;

        let archived = self.archived_count();
        if self.show_all || archived == 0 {
            writeln!(status, "  {}", "q quit".dimmed())?;
        } else {
            writeln!(
                status,
                "  {}  {}",
                format!("a all ({archived} archived)").dimmed(),
                "q quit".dimmed()
            )?;
        }

        writeln!(status)?;
        status.flush()
    }
}
