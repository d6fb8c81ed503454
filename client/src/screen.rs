//! Where the browser draws views, raises alerts and reads its input form

use std::io::Write;

use shared::{CityForm, View};

/// Render target, alert sink and input form of a [`CityBrowser`](crate::CityBrowser)
pub trait Screen {
    /// Replace whatever is shown with `view`
    fn render(&mut self, view: View);

    /// Blocking user-facing message
    fn alert(&mut self, message: &str);

    /// Current contents of the input fields
    fn form(&self) -> &CityForm;

    /// Reset all four input fields
    fn clear_form(&mut self);
}

/// Screen that prints views and alerts as text
pub struct TerminalScreen<W: Write> {
    out: W,
    form: CityForm,
    animations_dir: String,
    alerts: usize,
}

impl<W: Write> TerminalScreen<W> {
    pub fn new(out: W, form: CityForm, animations_dir: impl Into<String>) -> Self {
        Self {
            out,
            form,
            animations_dir: animations_dir.into(),
            alerts: 0,
        }
    }

    /// Number of alerts raised so far
    pub fn alerts(&self) -> usize {
        self.alerts
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write> Screen for TerminalScreen<W> {
    fn render(&mut self, view: View) {
        let mut text = view.to_string();
        if let View::CityDetail(detail) = &view {
            if let Some(animation) = detail.animation {
                let path = animation.asset_path(&self.animations_dir);
                text.push_str(&format!("  Animácia:   {}\n", path));
            }
        }
        self.write(&text);
    }

    fn alert(&mut self, message: &str) {
        self.alerts += 1;
        self.write(&format!("! {}\n", message));
    }

    fn form(&self) -> &CityForm {
        &self.form
    }

    fn clear_form(&mut self) {
        self.form.clear();
    }
}
