//! Progress indicators for long-running operations.

use std::io::{self, Write};

use super::context::UiContext;
use super::render::badge;
use super::theme::{Badge, Theme};

/// A spinner for indeterminate progress.
pub struct Spinner<'a> {
    ctx: &'a UiContext,
    message: String,
    frame: usize,
}

impl<'a> Spinner<'a> {
    /// Create a new spinner with the given message.
    pub fn new(ctx: &'a UiContext, message: &str) -> Self {
        Self {
            ctx,
            message: message.to_string(),
            frame: 0,
        }
    }

    /// Start the spinner (prints initial line).
    pub fn start(&self) {
        if !self.ctx.allows_animation() {
            // Non-TTY: print static message
            if !self.ctx.mode.is_json() {
                println!("{}...", self.message);
            }
            return;
        }
        self.render();
    }

    /// Render current spinner state.
    fn render(&self) {
        if !self.ctx.allows_animation() {
            return;
        }
        let theme = Theme::default();
        let frames = theme.spinner_frames(self.ctx.unicode);
        let frame_char = frames[self.frame % frames.len()];

        // Clear line and render
        print!("\r\x1b[K{} {}...", frame_char, self.message);
        let _ = io::stdout().flush();
    }

    /// Finish spinner with success message.
    pub fn finish(&self, message: &str) {
        if self.ctx.allows_animation() {
            print!("\r\x1b[K");
            let _ = io::stdout().flush();
        }
        if !self.ctx.mode.is_json() {
            println!("{}", badge(self.ctx, Badge::Ok, message));
        }
    }

    /// Finish spinner with error message.
    pub fn finish_err(&self, message: &str) {
        if self.ctx.allows_animation() {
            print!("\r\x1b[K");
            let _ = io::stdout().flush();
        }
        eprintln!("{}", badge(self.ctx, Badge::Err, message));
    }
}

/// A step list that shows progress through a series of checks.
pub struct StepList<'a> {
    ctx: &'a UiContext,
    steps: Vec<(String, Option<Badge>)>,
    current: usize,
}

impl<'a> StepList<'a> {
    /// Create a new step list with the given step names.
    pub fn new(ctx: &'a UiContext, steps: &[&str]) -> Self {
        Self {
            ctx,
            steps: steps.iter().map(|s| (s.to_string(), None)).collect(),
            current: 0,
        }
    }

    /// Start the step list (renders a header line in pretty mode).
    pub fn start(&self, header: &str) {
        if self.ctx.mode.is_pretty() {
            println!("{}...", header);
        }
    }

    /// Mark current step with the given badge and advance.
    pub fn complete(&mut self, result: Badge) {
        if self.current < self.steps.len() {
            self.steps[self.current].1 = Some(result);
            self.render_step(self.current);
            self.current += 1;
        }
    }

    /// Mark current step as OK and advance.
    pub fn ok(&mut self) {
        self.complete(Badge::Ok);
    }

    /// Mark current step as warning and advance.
    pub fn warn(&mut self) {
        self.complete(Badge::Warn);
    }

    /// Mark current step as error and advance.
    pub fn err(&mut self) {
        self.complete(Badge::Err);
    }

    /// Render a single step.
    fn render_step(&self, index: usize) {
        if self.ctx.mode.is_json() {
            return;
        }

        let (name, result) = &self.steps[index];
        if self.ctx.mode.is_pretty() {
            let status = match result {
                Some(b) => badge(self.ctx, *b, ""),
                None => "...".to_string(),
            };
            println!("- {}: {}", name, status);
        } else {
            let status_str = match result {
                Some(Badge::Ok) => "ok",
                Some(Badge::Warn) => "warn",
                Some(Badge::Err) => "err",
                Some(Badge::Info) => "info",
                None => "pending",
            };
            println!(
                "check={} {}",
                name.to_lowercase().replace(' ', "_"),
                status_str
            );
        }
    }

    /// Check if all steps completed successfully (all OK).
    pub fn all_ok(&self) -> bool {
        self.steps
            .iter()
            .all(|(_, result)| *result == Some(Badge::Ok))
    }

    /// Check if any step had an error.
    pub fn has_error(&self) -> bool {
        self.steps
            .iter()
            .any(|(_, result)| *result == Some(Badge::Err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mode::OutputMode;

    fn test_ctx() -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: true,
            width: 80,
            mode: OutputMode::Plain,
        }
    }

    #[test]
    fn test_step_list_tracking() {
        let ctx = test_ctx();
        let mut steps = StepList::new(&ctx, &["Organizations", "Record ownership"]);
        assert!(!steps.all_ok());
        steps.ok();
        steps.ok();
        assert!(steps.all_ok());
    }

    #[test]
    fn test_step_list_error_detection() {
        let ctx = test_ctx();
        let mut steps = StepList::new(&ctx, &["Organizations", "Record ownership"]);
        steps.ok();
        steps.err();
        assert!(steps.has_error());
        assert!(!steps.all_ok());
    }

    #[test]
    fn test_step_list_warning_is_not_error() {
        let ctx = test_ctx();
        let mut steps = StepList::new(&ctx, &["Profile totals"]);
        steps.warn();
        assert!(!steps.has_error());
        assert!(!steps.all_ok());
    }
}
