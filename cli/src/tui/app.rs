use ratatui::widgets::TableState;
use attendance_core::{AppContext, Day};

pub enum InputMode {
    Normal,
    ConfirmReset,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Mark {
    pub absent: bool,
    pub cancelled: bool,
}

pub struct App<'a> {
    pub ctx: &'a mut AppContext,
    pub day: Day,
    pub classes: Vec<String>,
    pub marks: Vec<Mark>,
    pub report: Vec<(String, f64)>,
    pub state: TableState,
    pub input_mode: InputMode,
    pub status: String,
}

impl<'a> App<'a> {
    pub fn new(ctx: &'a mut AppContext, day: Day) -> App<'a> {
        let mut app = App {
            ctx,
            day,
            classes: Vec::new(),
            marks: Vec::new(),
            report: Vec::new(),
            state: TableState::default(),
            input_mode: InputMode::Normal,
            status: String::new(),
        };
        app.load_day();
        app
    }

    fn load_day(&mut self) {
        self.classes = self.ctx.store.classes_on(self.day).to_vec();
        self.marks = vec![Mark::default(); self.classes.len()];
        self.state
            .select(if self.classes.is_empty() { None } else { Some(0) });
        self.refresh_report();
    }

    fn refresh_report(&mut self) {
        self.report = self.ctx.store.compute_attendance().into_iter().collect();
    }

    pub fn has_pending_marks(&self) -> bool {
        self.marks.iter().any(|m| m.absent || m.cancelled)
    }

    pub fn next(&mut self) {
        if self.classes.is_empty() { return; }

        let i = match self.state.selected() {
            Some(i) if i + 1 < self.classes.len() => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.classes.is_empty() { return; }

        let i = match self.state.selected() {
            Some(0) | None => self.classes.len() - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    pub fn toggle_absent(&mut self) {
        if let Some(mark) = self.state.selected().and_then(|i| self.marks.get_mut(i)) {
            mark.absent = !mark.absent;
        }
    }

    pub fn toggle_cancelled(&mut self) {
        if let Some(mark) = self.state.selected().and_then(|i| self.marks.get_mut(i)) {
            mark.cancelled = !mark.cancelled;
        }
    }

    /// Switching days drops marks that were never saved.
    pub fn next_day(&mut self) {
        self.day = self.day.succ();
        self.load_day();
    }

    pub fn previous_day(&mut self) {
        self.day = self.day.pred();
        self.load_day();
    }

    pub fn today(&mut self) {
        self.day = Day::today();
        self.load_day();
    }

    /// Writes the pending marks: absences first, then cancellations.
    pub fn save_marks(&mut self) {
        if !self.has_pending_marks() {
            self.status = "Nothing marked.".to_string();
            return;
        }

        let pick = |f: fn(&Mark) -> bool| -> Vec<String> {
            self.classes
                .iter()
                .zip(&self.marks)
                .filter(|(_, m)| f(m))
                .map(|(c, _)| c.clone())
                .collect()
        };
        let absent = pick(|m| m.absent);
        let cancelled = pick(|m| m.cancelled);

        if let Err(e) = self.ctx.store.record_absences(&absent) {
            self.status = format!("Error occurred while marking absent classes: {}", e);
            return;
        }
        // Absences are in; drop them so a retry does not count them twice.
        for mark in &mut self.marks {
            mark.absent = false;
        }
        if let Err(e) = self.ctx.store.record_cancellations(&cancelled) {
            self.status = format!("Error occurred while marking cancelled class: {}", e);
            self.refresh_report();
            return;
        }

        self.marks = vec![Mark::default(); self.classes.len()];
        self.status = format!(
            "Recorded {} absent and {} cancelled.",
            absent.len(),
            cancelled.len()
        );
        self.refresh_report();
    }

    pub fn request_reset(&mut self) {
        self.input_mode = InputMode::ConfirmReset;
    }

    pub fn cancel_reset(&mut self) {
        self.input_mode = InputMode::Normal;
        self.status = "Reset cancelled.".to_string();
    }

    pub fn confirm_reset(&mut self) {
        self.input_mode = InputMode::Normal;
        match self.ctx.store.reset_all() {
            Ok(()) => self.status = "All data has been reset.".to_string(),
            Err(e) => self.status = format!("Error occurred while resetting data: {}", e),
        }
        self.load_day();
    }
}
